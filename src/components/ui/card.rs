// `view!` expansions inside `styled!` need the prelude traits in scope.
use leptos::prelude::*;

styled! {
    /// Bordered, rounded surface.
    Card, div, Div, "rounded-2xl border border-gray-200 bg-white shadow-sm"
}
styled! {CardHeader, div, Div, "flex flex-col space-y-1.5 p-6"}
styled! {CardTitle, h3, H3, "text-lg font-semibold leading-none tracking-tight"}
styled! {CardDescription, p, P, "text-sm text-gray-600"}
styled! {CardContent, div, Div, "p-6"}
styled! {CardFooter, div, Div, "flex items-center p-6 pt-0"}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use crate::test_support::mount;
    use crate::util::cn::{provide_class_merger, ClassMerger};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn class_of(root: &web_sys::HtmlElement, selector: &str) -> String {
        root.query_selector(selector)
            .ok()
            .flatten()
            .and_then(|el| el.get_attribute("class"))
            .unwrap_or_default()
    }

    #[wasm_bindgen_test]
    fn test_card_parts_render_their_elements() {
        let (root, _handle) = mount(|| {
            view! {
                <Card class="hover:shadow-md">
                    <CardHeader>
                        <CardTitle>"Cursos"</CardTitle>
                        <CardDescription>"3 activos"</CardDescription>
                    </CardHeader>
                    <CardContent class="p-4">"..."</CardContent>
                    <CardFooter>"pie"</CardFooter>
                </Card>
            }
        });

        assert!(root.query_selector("h3[data-name='CardTitle']").ok().flatten().is_some());
        assert!(root.query_selector("p[data-name='CardDescription']").ok().flatten().is_some());

        let card = class_of(&root, "[data-name='Card']");
        assert!(card.contains("rounded-2xl"));
        assert!(card.contains("hover:shadow-md"));

        // The override replaces the default padding.
        let content = class_of(&root, "[data-name='CardContent']");
        assert_eq!(content, "p-4");
    }

    #[wasm_bindgen_test]
    fn test_card_populates_node_ref() {
        let node_ref = NodeRef::<leptos::html::Div>::new();
        let (_root, _handle) = mount(move || view! { <Card node_ref=node_ref>"Cursos"</Card> });

        let el = node_ref.get_untracked().expect("node ref populated after mount");
        assert_eq!(el.get_attribute("data-name").as_deref(), Some("Card"));
        assert_eq!(el.text_content().as_deref(), Some("Cursos"));
    }

    #[wasm_bindgen_test]
    fn test_card_uses_merger_from_context() {
        let (root, _handle) = mount(|| {
            provide_class_merger(ClassMerger::dedup());
            view! { <CardContent class="p-4">"x"</CardContent> }
        });
        assert_eq!(class_of(&root, "[data-name='CardContent']"), "p-6 p-4");
    }
}
