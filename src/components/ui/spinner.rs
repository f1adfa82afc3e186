use icons::LoaderCircle;
use leptos::prelude::*;

use crate::fragments;
use crate::util::cn::use_class_merger;

#[component]
pub fn Spinner(#[prop(into, optional)] class: String) -> impl IntoView {
    let merged_class = use_class_merger().compose(&fragments!["size-4 animate-spin", class]);

    view! { <LoaderCircle class=merged_class attr:role="status" attr:aria-label="Cargando" /> }
}
