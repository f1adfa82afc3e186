pub mod components;
pub mod config;
pub mod error;
pub mod models;
pub mod util;

mod app;

#[cfg(all(test, target_arch = "wasm32"))]
mod test_support;

pub use app::App;
pub use error::{UiError, UiErrorKind, UiResult};

use leptos::prelude::*;

// Needed for `#[wasm_bindgen(start)]` on the wasm entrypoint.
#[cfg(all(target_arch = "wasm32", not(test)))]
use wasm_bindgen::prelude::wasm_bindgen;

// Only register the WASM start function for normal builds (not for tests),
// otherwise wasm-bindgen-test will end up with multiple entry symbols.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
