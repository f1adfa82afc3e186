use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::ui::input::{FIELD_BASE, FIELD_DISABLED, FIELD_FOCUS};
use crate::fragments;
use crate::util::cn::use_class_merger;

/// Multi-line text input. Same field styling as [`Input`](super::Input),
/// taller by default.
#[component]
pub fn Textarea(
    #[prop(into, optional)] class: String,
    #[prop(into, optional)] placeholder: String,
    #[prop(into, optional)] name: String,
    #[prop(into, optional)] id: String,
    #[prop(optional)] rows: Option<u32>,
    #[prop(into, optional)] disabled: Signal<bool>,
    #[prop(optional)] readonly: bool,
    #[prop(optional)] required: bool,
    #[prop(optional)] bind_value: Option<RwSignal<String>>,
    #[prop(optional)] node_ref: NodeRef<html::Textarea>,
) -> impl IntoView {
    let merged_class = use_class_merger().compose(&fragments![
        "flex min-h-[96px]",
        FIELD_BASE,
        FIELD_FOCUS,
        FIELD_DISABLED,
        class,
    ]);
    let bind_value = bind_value.unwrap_or_else(|| RwSignal::new(String::new()));

    let on_input = move |ev: web_sys::Event| {
        if let Some(textarea) = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::HtmlTextAreaElement>().ok())
        {
            bind_value.set(textarea.value());
        }
    };

    view! {
        <textarea
            data-name="Textarea"
            class=merged_class
            placeholder=placeholder
            name=name
            id=id
            rows=rows.map(|rows| rows.to_string())
            disabled=move || disabled.get()
            readonly=readonly
            required=required
            prop:value=move || bind_value.get()
            on:input=on_input
            node_ref=node_ref
        ></textarea>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use crate::test_support::mount;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_textarea_binds_value_and_merges_class() {
        let value = RwSignal::new("linea 1\nlinea 2".to_string());
        let node_ref = NodeRef::<html::Textarea>::new();
        let (_root, _handle) = mount(move || {
            view! { <Textarea class="min-h-[200px]" bind_value=value node_ref=node_ref /> }
        });

        let el = node_ref.get_untracked().expect("node ref populated");
        assert_eq!(el.value(), "linea 1\nlinea 2");

        let class = el.get_attribute("class").unwrap_or_default();
        assert!(class.split(' ').any(|c| c == "min-h-[200px]"));
        assert!(!class.split(' ').any(|c| c == "min-h-[96px]"));
    }
}
