use icons::X;
use leptos::ev;
use leptos::prelude::*;
use leptos_dom::helpers::window_event_listener;

use crate::fragments;
use crate::util::cn::use_class_merger;

styled! {DialogHeader, div, Div, "flex flex-col gap-2 text-center sm:text-left"}
styled! {DialogTitle, h2, H2, "text-lg leading-none font-semibold"}
styled! {DialogDescription, div, Div, "text-muted-foreground text-sm"}
styled! {DialogFooter, footer, Footer, "flex flex-col-reverse gap-2 sm:flex-row sm:justify-end"}

fn state_token(open: bool) -> &'static str {
    if open {
        "open"
    } else {
        "closed"
    }
}

/// Controlled modal. The owner holds `open`; every close request (X button,
/// backdrop click, Escape) goes through `on_open_change(false)`.
#[component]
pub fn Dialog(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_open_change: Callback<bool>,
    #[prop(into, optional)] class: String,
    #[prop(default = true)] close_on_backdrop_click: bool,
    children: Children,
) -> impl IntoView {
    let merged_class = use_class_merger().compose(&fragments![
        "fixed top-[50%] left-[50%] z-100 w-full max-w-[calc(100%-2rem)] max-h-[85vh] translate-x-[-50%] translate-y-[-50%] rounded-2xl border bg-background p-6 shadow-lg transition-all duration-200 data-[state=closed]:pointer-events-none data-[state=closed]:scale-95 data-[state=closed]:opacity-0 data-[state=open]:scale-100 data-[state=open]:opacity-100",
        class
    ]);

    let key_handle = window_event_listener(ev::keydown, move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" && open.get_untracked() {
            ev.prevent_default();
            on_open_change.run(false);
        }
    });
    on_cleanup(move || key_handle.remove());

    let on_backdrop_click = move |_: web_sys::MouseEvent| {
        if close_on_backdrop_click {
            on_open_change.run(false);
        }
    };

    view! {
        <div
            data-name="DialogBackdrop"
            data-state=move || state_token(open.get())
            class="fixed inset-0 z-60 bg-black/50 transition-opacity duration-200 data-[state=closed]:pointer-events-none data-[state=closed]:opacity-0 data-[state=open]:opacity-100"
            on:click=on_backdrop_click
        />

        <div
            data-name="DialogContent"
            role="dialog"
            aria-modal="true"
            aria-hidden=move || (!open.get()).to_string()
            data-state=move || state_token(open.get())
            class=merged_class
        >
            <button
                type="button"
                class="absolute top-4 right-4 rounded-sm p-1 focus:outline-none focus:ring-2 focus:ring-ring focus:ring-offset-2 [&_svg:not([class*='size-'])]:size-4"
                aria-label="Cerrar"
                on:click=move |_| on_open_change.run(false)
            >
                <X />
            </button>

            {children()}
        </div>
    }
}
