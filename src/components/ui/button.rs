use std::str::FromStr;

use leptos::html;
use leptos::prelude::*;
use strum::{AsRefStr, Display, EnumIter, EnumString, VariantNames};

use crate::error::{UiError, UiResult};
use crate::fragments;
use crate::util::cn::{use_class_merger, ClassMerger};

pub const BUTTON_BASE: &str = "inline-flex items-center justify-center rounded-lg font-medium transition \
     focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-indigo-200 focus-visible:ring-offset-2 \
     disabled:opacity-50 disabled:pointer-events-none";

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, AsRefStr, EnumString, EnumIter, VariantNames,
)]
#[strum(serialize_all = "camelCase")]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
    Destructive,
    BlueOutline,
}

impl ButtonVariant {
    pub const fn class(self) -> &'static str {
        match self {
            Self::Primary => "bg-[#0c1b3f] text-white hover:bg-[#0a1736]",
            Self::Secondary => "bg-[#0c1b3f]/10 text-[#0c1b3f] hover:bg-[#0c1b3f]/15",
            Self::Outline | Self::BlueOutline => {
                "border border-[#0c1b3f] bg-white text-[#0c1b3f] hover:bg-[#0c1b3f] hover:text-white"
            }
            Self::Ghost => "bg-transparent text-[#0c1b3f] hover:bg-[#0c1b3f]/10",
            Self::Destructive => "bg-red-600 text-white hover:bg-red-700",
        }
    }

    /// Runtime counterpart of the enum for keys that arrive as strings
    /// (data attributes, config). Unknown keys are an error, never an empty
    /// fragment.
    pub fn parse(key: &str) -> UiResult<Self> {
        Self::from_str(key).map_err(|_| UiError::unknown_option("button variant", key, Self::VARIANTS))
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, AsRefStr, EnumString, EnumIter, VariantNames,
)]
#[strum(serialize_all = "camelCase")]
pub enum ButtonSize {
    #[default]
    Default,
    Sm,
    Lg,
    Icon,
}

impl ButtonSize {
    pub const fn class(self) -> &'static str {
        match self {
            Self::Default => "h-9 px-3 py-2 text-sm",
            Self::Sm => "h-8 px-2.5 text-xs",
            Self::Lg => "h-10 px-4 text-base",
            Self::Icon => "h-9 w-9 p-0",
        }
    }

    pub fn parse(key: &str) -> UiResult<Self> {
        Self::from_str(key).map_err(|_| UiError::unknown_option("button size", key, Self::VARIANTS))
    }
}

/// Class string for a button: base, variant, size, then the caller's
/// override, which wins conflicts under merging strategies that have them.
pub fn button_class(
    merger: &ClassMerger,
    variant: ButtonVariant,
    size: ButtonSize,
    class: &str,
) -> String {
    merger.compose(&fragments![BUTTON_BASE, variant.class(), size.class(), class])
}

/// Push button. Native attributes and events (`attr:type`, `attr:disabled`,
/// `on:click`, ...) are spread onto the `<button>` by Leptos.
#[component]
pub fn Button(
    #[prop(into, optional)] class: String,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional)] node_ref: NodeRef<html::Button>,
    children: Children,
) -> impl IntoView {
    let merged_class = button_class(&use_class_merger(), variant, size, &class);

    view! {
        <button
            data-name="Button"
            data-variant=variant.to_string()
            data-size=size.to_string()
            class=merged_class
            node_ref=node_ref
        >
            {children()}
        </button>
    }
}
