use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::fragments;
use crate::util::cn::use_class_merger;

pub(crate) const FIELD_BASE: &str = "w-full rounded-xl border border-gray-200 bg-white px-3 py-2 text-sm text-slate-900 shadow-sm transition";
pub(crate) const FIELD_FOCUS: &str = "placeholder:text-slate-400 focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-indigo-200 focus-visible:border-indigo-300";
pub(crate) const FIELD_DISABLED: &str = "disabled:cursor-not-allowed disabled:opacity-50";

/// Single-line text input.
///
/// `bind_value` is optional; without it the input keeps its own signal so the
/// element still behaves like an uncontrolled `<input>`.
#[component]
pub fn Input(
    // Styling
    #[prop(into, optional)] class: String,

    // Common HTML attributes
    #[prop(into, default = "text")] r#type: &'static str,
    #[prop(into, optional)] placeholder: String,
    #[prop(into, optional)] name: String,
    #[prop(into, optional)] id: String,
    #[prop(into, optional)] disabled: Signal<bool>,
    #[prop(optional)] readonly: bool,
    #[prop(optional)] required: bool,

    // Two-way binding.
    //
    // NOTE: manual `prop:value` + `on:input` wiring instead of `bind:value`,
    // which has moved around between Leptos releases.
    #[prop(optional)] bind_value: Option<RwSignal<String>>,

    // Ref for direct DOM access
    #[prop(optional)] node_ref: NodeRef<html::Input>,
) -> impl IntoView {
    let merged_class = use_class_merger().compose(&fragments![
        "flex h-10",
        FIELD_BASE,
        FIELD_FOCUS,
        FIELD_DISABLED,
        class,
    ]);
    let bind_value = bind_value.unwrap_or_else(|| RwSignal::new(String::new()));

    let on_input = move |ev: web_sys::Event| {
        if let Some(input) = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
        {
            bind_value.set(input.value());
        }
    };

    view! {
        <input
            data-name="Input"
            data-slot="input"
            type=r#type
            class=merged_class
            placeholder=placeholder
            name=name
            id=id
            disabled=move || disabled.get()
            readonly=readonly
            required=required
            prop:value=move || bind_value.get()
            on:input=on_input
            node_ref=node_ref
        />
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use crate::test_support::mount;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_input_defaults_and_override() {
        let (root, _handle) = mount(|| view! { <Input class="h-12" placeholder="Email" /> });
        let input = root.query_selector("input").ok().flatten().expect("input rendered");

        assert_eq!(input.get_attribute("type").as_deref(), Some("text"));
        assert_eq!(input.get_attribute("data-slot").as_deref(), Some("input"));
        assert_eq!(input.get_attribute("placeholder").as_deref(), Some("Email"));

        let class = input.get_attribute("class").unwrap_or_default();
        assert!(class.split(' ').any(|c| c == "h-12"));
        assert!(!class.split(' ').any(|c| c == "h-10"));
    }

    #[wasm_bindgen_test]
    fn test_input_reflects_bound_signal() {
        let value = RwSignal::new("hola".to_string());
        let node_ref = NodeRef::<html::Input>::new();
        let (_root, _handle) = mount(move || {
            view! { <Input bind_value=value node_ref=node_ref /> }
        });

        let el = node_ref.get_untracked().expect("node ref populated");
        assert_eq!(el.value(), "hola");
    }
}
