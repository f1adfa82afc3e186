use icons::Mail;
use leptos::prelude::*;

use crate::components::ui::{Button, ButtonVariant, Card, CardContent};

/// What the card's "Crear" action does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardAction {
    /// Runs the caller's handler in place.
    Click,
    /// Navigates to the compose screen.
    Link(String),
    /// Nothing wired yet; the button renders disabled.
    Disabled,
}

impl CardAction {
    /// A handler beats a link; `"#"` counts as no link.
    pub fn resolve(href: Option<&str>, has_click: bool) -> Self {
        if has_click {
            return Self::Click;
        }
        match href {
            Some(href) if !href.is_empty() && href != "#" => Self::Link(href.to_string()),
            _ => Self::Disabled,
        }
    }
}

/// Dashboard card for staff: opens the message composer.
#[component]
pub fn SendMessagesCard(
    #[prop(into, optional)] href: Option<String>,
    #[prop(into, optional)] on_click: Option<Callback<()>>,
) -> impl IntoView {
    let action = CardAction::resolve(href.as_deref(), on_click.is_some());

    let label = || {
        view! {
            <div>
                <div class="font-semibold truncate">"Enviar mensajes"</div>
                <div class="text-sm text-muted-foreground">
                    "Envia mensajes a alumnos, cursos o padres"
                </div>
            </div>
        }
    };

    let (label_view, action_view) = match (action, on_click) {
        (CardAction::Click, Some(on_click)) => (
            view! {
                <button type="button" class="w-full text-left" on:click=move |_| on_click.run(())>
                    {label()}
                </button>
            }
            .into_any(),
            view! {
                <Button variant=ButtonVariant::Outline on:click=move |_| on_click.run(())>
                    "Crear"
                </Button>
            }
            .into_any(),
        ),
        (CardAction::Link(href), _) => (
            view! { <a href=href.clone() class="block w-full">{label()}</a> }.into_any(),
            view! {
                <a href=href>
                    <Button variant=ButtonVariant::Outline>"Crear"</Button>
                </a>
            }
            .into_any(),
        ),
        _ => (
            view! { <div class="w-full">{label()}</div> }.into_any(),
            view! {
                <Button variant=ButtonVariant::Outline attr:disabled=true>
                    "Crear"
                </Button>
            }
            .into_any(),
        ),
    };

    view! {
        <Card class="hover:shadow-md transition-shadow">
            <CardContent class="p-4 flex items-center gap-4">
                <div class="flex h-10 w-10 items-center justify-center rounded-full border">
                    <Mail class=String::from("h-5 w-5") />
                </div>

                <div class="flex-1 min-w-0">{label_view}</div>

                <div class="shrink-0">{action_view}</div>
            </CardContent>
        </Card>
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use crate::test_support::mount;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn action_button(root: &web_sys::HtmlElement) -> web_sys::HtmlButtonElement {
        root.query_selector("[data-name='Button']")
            .ok()
            .flatten()
            .expect("action button")
            .unchecked_into()
    }

    #[wasm_bindgen_test]
    fn test_without_target_the_action_is_disabled() {
        let (root, _handle) = mount(|| view! { <SendMessagesCard /> });
        assert!(action_button(&root).disabled());
        assert!(root.text_content().unwrap_or_default().contains("Enviar mensajes"));
    }

    #[wasm_bindgen_test]
    fn test_link_wraps_the_action() {
        let (root, _handle) = mount(|| view! { <SendMessagesCard href="/mensajes" /> });
        let link = root
            .query_selector("a[href='/mensajes'] [data-name='Button']")
            .ok()
            .flatten();
        assert!(link.is_some());
        assert!(!action_button(&root).disabled());
    }

    #[wasm_bindgen_test]
    fn test_click_runs_handler() {
        let clicks = RwSignal::new(0);
        let (root, _handle) = mount(move || {
            view! { <SendMessagesCard on_click=Callback::new(move |_| clicks.update(|n| *n += 1)) /> }
        });
        action_button(&root).click();
        assert_eq!(clicks.get_untracked(), 1);
    }
}
