use std::str::FromStr;

use leptos::logging::warn;
use strum::{Display, EnumString, VariantNames};

use crate::error::{UiError, UiResult};
use crate::util::cn::ClassMerger;

/// Which class-merging backend the components use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, VariantNames)]
#[strum(serialize_all = "lowercase")]
pub enum MergeMode {
    /// Tailwind conflict resolution.
    #[default]
    Tailwind,
    /// Exact-duplicate removal only, for non-Tailwind stylesheets.
    Dedup,
}

impl MergeMode {
    pub fn parse(value: &str) -> UiResult<Self> {
        Self::from_str(value.trim())
            .map_err(|_| UiError::unknown_option("class merge mode", value, Self::VARIANTS))
    }

    pub fn merger(self) -> ClassMerger {
        match self {
            Self::Tailwind => ClassMerger::tailwind(),
            Self::Dedup => ClassMerger::dedup(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiConfig {
    pub class_merge: MergeMode,
}

impl UiConfig {
    /// Reads `window.ENV.CLASS_MERGE` (or `window.ENV.class_merge`).
    /// Missing or invalid values fall back to the defaults.
    pub fn new() -> Self {
        match read_env_string(&["CLASS_MERGE", "class_merge"]) {
            Some(raw) => Self::from_raw(&raw),
            None => Self::default(),
        }
    }

    fn from_raw(raw: &str) -> Self {
        match MergeMode::parse(raw) {
            Ok(class_merge) => Self { class_merge },
            Err(err) => {
                warn!("ignoring ENV.CLASS_MERGE: {err}");
                Self::default()
            }
        }
    }
}

fn read_env_string(keys: &[&str]) -> Option<String> {
    let window = web_sys::window()?;
    let env = window.get("ENV")?;
    if env.is_undefined() || !env.is_object() {
        return None;
    }

    keys.iter().find_map(|key| {
        js_sys::Reflect::get(&env, &(*key).into())
            .ok()
            .and_then(|value| value.as_string())
    })
}
