/// Declares a single-element wrapper: default classes merged with the
/// caller's `class` through the context [`ClassMerger`](crate::util::ClassMerger),
/// an optional `node_ref` bound to the element, and children.
macro_rules! styled {
    ($(#[$meta:meta])* $name:ident, $tag:ident, $elem:ident, $base:expr) => {
        $(#[$meta])*
        #[::leptos::component]
        pub fn $name(
            #[prop(into, optional)] class: String,
            #[prop(optional)] node_ref: ::leptos::prelude::NodeRef<::leptos::html::$elem>,
            children: ::leptos::prelude::Children,
        ) -> impl ::leptos::prelude::IntoView {
            let merged_class =
                $crate::util::cn::use_class_merger().compose(&$crate::fragments![$base, class]);

            ::leptos::view! {
                <$tag data-name=stringify!($name) class=merged_class node_ref=node_ref>
                    {children()}
                </$tag>
            }
        }
    };
}

pub mod button;
pub mod card;
pub mod dialog;
pub mod input;
pub mod spinner;
pub mod success_message;
pub mod textarea;

// Re-export component symbols so callers can `use crate::components::ui::Button` etc.
pub use button::*;
pub use card::*;
pub use dialog::*;
pub use input::*;
pub use spinner::*;
pub use success_message::*;
pub use textarea::*;
