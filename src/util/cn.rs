//! Class-name composition.
//!
//! Fragments go in left to right; the merged, whitespace-joined class string
//! comes out. Conflict resolution is delegated to a [`MergeStrategy`], so the
//! same call sites work against any utility-styling backend.

use std::fmt;
use std::sync::Arc;

use leptos::prelude::*;
use tw_merge::tw_merge;

/// Anything that can contribute a class fragment to [`compose`].
///
/// Absent values (`None`, `""`, whitespace) are skipped. Conditional fragments
/// are written `cond.then_some("cls")`. Types without an impl are rejected at
/// compile time, so there is no runtime coercion policy to speak of.
pub trait ClassFragment {
    fn fragment(&self) -> Option<&str>;
}

impl ClassFragment for str {
    fn fragment(&self) -> Option<&str> {
        let trimmed = self.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }
}

impl ClassFragment for String {
    fn fragment(&self) -> Option<&str> {
        self.as_str().fragment()
    }
}

impl<T: ClassFragment + ?Sized> ClassFragment for &T {
    fn fragment(&self) -> Option<&str> {
        (**self).fragment()
    }
}

impl<T: ClassFragment> ClassFragment for Option<T> {
    fn fragment(&self) -> Option<&str> {
        self.as_ref().and_then(|value| value.fragment())
    }
}

/// Resolves an ordered token list into the final class string.
pub trait MergeStrategy: Send + Sync {
    fn merge(&self, tokens: &[&str]) -> String;
}

/// Tailwind conflict rules: a later utility replaces an earlier one that
/// targets the same property (`px-2` then `px-4` keeps `px-4`).
#[derive(Debug, Clone, Copy, Default)]
pub struct TailwindMerge;

impl MergeStrategy for TailwindMerge {
    fn merge(&self, tokens: &[&str]) -> String {
        if tokens.is_empty() {
            return String::new();
        }
        let joined = tokens.join(" ");
        tw_merge!(joined.as_str())
    }
}

/// Backend-agnostic fallback: exact duplicates are dropped, first occurrence
/// keeps its position.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dedup;

impl MergeStrategy for Dedup {
    fn merge(&self, tokens: &[&str]) -> String {
        let mut kept: Vec<&str> = Vec::with_capacity(tokens.len());
        for &token in tokens {
            if !kept.contains(&token) {
                kept.push(token);
            }
        }
        kept.join(" ")
    }
}

/// Cloneable handle to the active strategy. Provided through context so a
/// whole subtree can switch backends.
#[derive(Clone)]
pub struct ClassMerger(Arc<dyn MergeStrategy>);

impl ClassMerger {
    pub fn new(strategy: impl MergeStrategy + 'static) -> Self {
        Self(Arc::new(strategy))
    }

    pub fn tailwind() -> Self {
        Self::new(TailwindMerge)
    }

    pub fn dedup() -> Self {
        Self::new(Dedup)
    }

    /// Splits every present fragment on whitespace and hands the tokens to
    /// the strategy.
    pub fn compose(&self, fragments: &[Option<&str>]) -> String {
        self.0.merge(&tokenize(fragments))
    }
}

impl Default for ClassMerger {
    fn default() -> Self {
        Self::tailwind()
    }
}

impl fmt::Debug for ClassMerger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ClassMerger")
    }
}

/// Composes with the default (Tailwind) strategy. See [`cn!`](crate::cn).
pub fn compose(fragments: &[Option<&str>]) -> String {
    TailwindMerge.merge(&tokenize(fragments))
}

fn tokenize<'a>(fragments: &[Option<&'a str>]) -> Vec<&'a str> {
    fragments
        .iter()
        .flatten()
        .flat_map(|fragment| fragment.split_whitespace())
        .collect()
}

pub fn provide_class_merger(merger: ClassMerger) {
    provide_context(merger);
}

/// The merger provided by an ancestor, or Tailwind when none was.
pub fn use_class_merger() -> ClassMerger {
    use_context::<ClassMerger>().unwrap_or_default()
}

/// Builds the `[Option<&str>; N]` slice [`ClassMerger::compose`] takes.
#[macro_export]
macro_rules! fragments {
    ($($item:expr),* $(,)?) => {
        [$($crate::util::cn::ClassFragment::fragment(&$item)),*]
    };
}

/// `cn!(base, variant, extra.then_some("ring-2"), class)`.
#[macro_export]
macro_rules! cn {
    ($($item:expr),* $(,)?) => {
        $crate::util::cn::compose(&$crate::fragments!($($item),*))
    };
}
