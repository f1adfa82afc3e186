use leptos::logging::warn;
use wasm_bindgen::JsValue;

/// Placeholder shown for missing values.
pub const EMPTY_PLACEHOLDER: &str = "—";

const DISPLAY_LOCALE: &str = "es-AR";

/// Formats an ISO-ish date string as a medium `es-AR` date ("5 mar 2025").
///
/// Empty input yields [`EMPTY_PLACEHOLDER`]; anything the browser cannot parse
/// is echoed back unchanged.
pub fn format_date(input: &str) -> String {
    let input = input.trim();
    if input.is_empty() {
        return EMPTY_PLACEHOLDER.to_string();
    }

    let date = js_sys::Date::new(&JsValue::from_str(input));
    if date.get_time().is_nan() {
        warn!("unparseable message date: {input}");
        return input.to_string();
    }

    let options = js_sys::Object::new();
    for (key, value) in [("year", "numeric"), ("month", "short"), ("day", "numeric")] {
        // Reflect::set only fails on frozen objects.
        let _ = js_sys::Reflect::set(&options, &key.into(), &value.into());
    }

    date.to_locale_date_string(DISPLAY_LOCALE, &options).into()
}
