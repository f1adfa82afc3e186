use leptos::mount::mount_to;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Mounts `f` into a fresh container appended to `<body>`. The view stays
/// mounted while the returned handle is alive.
pub(crate) fn mount<F, N>(f: F) -> (web_sys::HtmlElement, impl Sized)
where
    F: FnOnce() -> N + 'static,
    N: IntoView,
{
    let container = document()
        .create_element("div")
        .expect("create container")
        .unchecked_into::<web_sys::HtmlElement>();
    document()
        .body()
        .expect("document has a body")
        .append_child(&container)
        .expect("attach container");

    let handle = mount_to(container.clone(), f);
    (container, handle)
}
