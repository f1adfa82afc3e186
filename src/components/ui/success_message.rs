use icons::CircleCheck;
use leptos::prelude::*;

use crate::fragments;
use crate::util::cn::use_class_merger;

/// The glyph callers tend to prefix status text with. The banner draws its
/// own icon, so a leading copy in the text is dropped.
pub const STATUS_GLYPH: char = '\u{2705}';

/// Banner body: plain text gets the glyph stripped, rich content is rendered
/// as given.
pub enum MessageContent {
    PlainText(String),
    Rich(ViewFn),
}

impl MessageContent {
    pub fn rich(view: impl Into<ViewFn>) -> Self {
        Self::Rich(view.into())
    }
}

impl From<String> for MessageContent {
    fn from(text: String) -> Self {
        Self::PlainText(text)
    }
}

impl From<&str> for MessageContent {
    fn from(text: &str) -> Self {
        Self::PlainText(text.to_string())
    }
}

const BYTE_ORDER_MARK: char = '\u{FEFF}';

fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == BYTE_ORDER_MARK
}

/// Removes one leading [`STATUS_GLYPH`] and the whitespace after it (a stray
/// byte-order mark counts as whitespace). Anything else, including the glyph
/// further into the text, is untouched.
pub fn strip_status_glyph(text: &str) -> &str {
    text.strip_prefix(STATUS_GLYPH)
        .map_or(text, |rest| rest.trim_start_matches(is_separator))
}

#[component]
pub fn SuccessMessage(
    #[prop(into)] content: MessageContent,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    let merged_class = use_class_merger().compose(&fragments![
        "inline-flex items-center gap-2 rounded-full border border-green-200 bg-green-50 px-3 py-1 text-sm font-medium text-green-700",
        class
    ]);

    let body = match content {
        MessageContent::PlainText(text) => strip_status_glyph(&text).to_string().into_any(),
        MessageContent::Rich(view) => view.run(),
    };
    let icon_class = String::from("h-4 w-4 shrink-0");

    view! {
        <div data-name="SuccessMessage" role="status" class=merged_class>
            <CircleCheck class=icon_class />
            <span>{body}</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_leading_glyph_and_space() {
        assert_eq!(strip_status_glyph("✅ Operacion exitosa"), "Operacion exitosa");
    }

    #[test]
    fn test_strip_glyph_without_space() {
        assert_eq!(strip_status_glyph("✅Guardado"), "Guardado");
    }

    #[test]
    fn test_strip_glyph_with_whitespace_run() {
        assert_eq!(strip_status_glyph("✅ \t\n Nota cargada"), "Nota cargada");
    }

    #[test]
    fn test_strip_glyph_followed_by_byte_order_mark() {
        assert_eq!(strip_status_glyph("✅\u{FEFF}Hola"), "Hola");
        assert_eq!(strip_status_glyph("✅ \u{FEFF} Hola"), "Hola");
    }

    #[test]
    fn test_strip_is_noop_without_leading_glyph() {
        for text in ["Operacion exitosa", " ✅ con espacio antes", "Listo ✅", "", "✔ otro glifo"] {
            assert_eq!(strip_status_glyph(text), text);
        }
    }

    #[test]
    fn test_strip_only_one_glyph() {
        assert_eq!(strip_status_glyph("✅ ✅ doble"), "✅ doble");
    }

    #[test]
    fn test_strip_is_idempotent_once_clean() {
        let once = strip_status_glyph("✅ Listo");
        assert_eq!(strip_status_glyph(once), once);
    }

    #[test]
    fn test_message_content_from_text() {
        assert!(matches!(MessageContent::from("hola"), MessageContent::PlainText(t) if t == "hola"));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use crate::test_support::mount;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn banner_text(root: &web_sys::HtmlElement) -> String {
        root.query_selector("[data-name='SuccessMessage'] span")
            .ok()
            .flatten()
            .and_then(|el| el.text_content())
            .unwrap_or_default()
    }

    #[wasm_bindgen_test]
    fn test_renders_text_without_leading_check() {
        let (root, _handle) = mount(|| view! { <SuccessMessage content="✅ Operacion exitosa" /> });
        assert_eq!(banner_text(&root), "Operacion exitosa");
    }

    #[wasm_bindgen_test]
    fn test_renders_plain_text_unchanged() {
        let (root, _handle) = mount(|| view! { <SuccessMessage content="Guardado" /> });
        assert_eq!(banner_text(&root), "Guardado");
    }

    #[wasm_bindgen_test]
    fn test_rich_content_is_not_rewritten() {
        let (root, _handle) = mount(|| {
            let content = MessageContent::rich(|| view! { <b>"✅ Enviado"</b> });
            view! { <SuccessMessage content=content /> }
        });
        assert_eq!(banner_text(&root), "✅ Enviado");
        assert!(root.query_selector("[data-name='SuccessMessage'] b").ok().flatten().is_some());
    }

    #[wasm_bindgen_test]
    fn test_banner_has_status_role_and_icon() {
        let (root, _handle) = mount(|| view! { <SuccessMessage content="ok" class="mt-2" /> });
        let banner = root
            .query_selector("[data-name='SuccessMessage']")
            .ok()
            .flatten()
            .expect("banner rendered");
        assert_eq!(banner.get_attribute("role").as_deref(), Some("status"));
        assert!(banner.query_selector("svg").ok().flatten().is_some());
        assert!(banner.get_attribute("class").unwrap_or_default().contains("mt-2"));
    }
}
