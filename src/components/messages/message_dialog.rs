use icons::{Calendar, History, Reply, User};
use leptos::prelude::*;

use crate::components::ui::{
    Button, ButtonVariant, Card, CardContent, Dialog, DialogDescription, DialogHeader, DialogTitle,
    Spinner,
};
use crate::models::MessageSummary;
use crate::util::date::format_date;

/// Shown in the avatar when the sender has no usable name.
pub const ANONYMOUS_AVATAR: &str = "✉️";

/// Avatar initials: first letter of the first two words, uppercased.
pub fn initials_from_name(name: &str) -> String {
    let initials: String = name
        .split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect();

    if initials.is_empty() {
        ANONYMOUS_AVATAR.to_string()
    } else {
        initials
    }
}

fn icon_class() -> String {
    String::from("h-4 w-4")
}

/// Read view for a single message, with the reply flow hanging off it.
///
/// `children` is the reply area (usually a composer), rendered under the
/// footer. Replying is gated by `can_reply`; the history button only shows
/// when it is set.
#[component]
pub fn MessageDialog(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_open_change: Callback<bool>,
    #[prop(into)] message: Signal<Option<MessageSummary>>,
    #[prop(into)] on_view_history: Callback<()>,
    #[prop(into, optional)] history_loading: Signal<bool>,
    #[prop(into, optional)] can_reply: Signal<bool>,
    #[prop(into, optional)] reply_mode: Signal<bool>,
    #[prop(into, optional)] on_toggle_reply: Option<Callback<()>>,
    #[prop(into, optional)] warning_text: MaybeProp<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let message = Memo::new(move |_| message.get().unwrap_or_default());

    let subject = move || message.with(MessageSummary::subject_or_default);
    let body = move || message.with(MessageSummary::body_or_placeholder);
    let sender = move || message.with(MessageSummary::sender_or_placeholder);
    let initials = move || message.with(|m| initials_from_name(&m.sender_or_placeholder()));
    let pretty_date = move || message.with(|m| format_date(&m.date_raw()));
    let course = move || message.with(MessageSummary::course_label);

    let toggle_reply = move |_: web_sys::MouseEvent| {
        if let Some(cb) = on_toggle_reply {
            cb.run(());
        }
    };

    view! {
        <Dialog
            open=open
            on_open_change=on_open_change
            class="p-0 gap-0 w-[95vw] sm:max-w-3xl overflow-hidden"
        >
            <DialogHeader class="px-6 pt-6 pb-4">
                <DialogTitle class="text-xl font-bold tracking-tight pr-8 break-words">
                    {subject}
                </DialogTitle>

                <DialogDescription class="mt-3">
                    <div class="flex items-center gap-3">
                        <div class="h-10 w-10 rounded-full bg-white border shadow-sm flex items-center justify-center text-sm font-semibold text-gray-800">
                            {initials}
                        </div>

                        <div class="min-w-0">
                            <div class="flex flex-wrap items-center gap-x-5 gap-y-1">
                                <span class="inline-flex items-center gap-2 text-gray-900">
                                    <User class=icon_class() />
                                    <span class="font-medium break-words">{sender}</span>
                                </span>

                                <span class="inline-flex items-center gap-2 text-gray-600">
                                    <Calendar class=icon_class() />
                                    {pretty_date}
                                </span>
                            </div>

                            {move || {
                                course()
                                    .map(|course| {
                                        view! {
                                            <div class="mt-2 inline-flex items-center rounded-full border bg-gray-50 px-3 py-1 text-xs text-gray-700">
                                                {course}
                                            </div>
                                        }
                                    })
                            }}
                        </div>
                    </div>
                </DialogDescription>
            </DialogHeader>

            <div class="h-px bg-gray-200" />

            <div class="px-6 py-5">
                <Card class="border bg-white shadow-sm">
                    <CardContent class="p-5">
                        <div
                            data-name="MessageBody"
                            class="text-sm leading-6 text-gray-900 whitespace-pre-wrap break-words"
                        >
                            {body}
                        </div>
                    </CardContent>
                </Card>

                <div class="mt-3 text-xs text-gray-500">
                    "Tip: abrí el historial para responder con contexto."
                </div>
            </div>

            <div class="h-px bg-gray-200" />

            <div class="px-6 py-4 flex flex-col sm:flex-row gap-3 sm:items-center sm:justify-between">
                <div class="text-xs text-gray-500">{move || warning_text.get()}</div>

                <div class="flex gap-2 sm:justify-end">
                    <Show when=move || can_reply.get()>
                        <Button
                            variant=ButtonVariant::Secondary
                            class="gap-2"
                            attr:data-action="history"
                            attr:disabled=move || history_loading.get()
                            on:click=move |_| on_view_history.run(())
                        >
                            {move || {
                                if history_loading.get() {
                                    view! {
                                        <Spinner />
                                        "Abriendo…"
                                    }
                                        .into_any()
                                } else {
                                    view! {
                                        <History class=icon_class() />
                                        "Ver mensajes anteriores"
                                    }
                                        .into_any()
                                }
                            }}
                        </Button>
                    </Show>

                    <Button
                        variant=ButtonVariant::Outline
                        attr:data-action="close"
                        on:click=move |_| on_open_change.run(false)
                    >
                        "Cerrar"
                    </Button>

                    <Button
                        class="gap-2"
                        attr:data-action="reply"
                        attr:disabled=move || !can_reply.get()
                        on:click=toggle_reply
                    >
                        <Reply class=icon_class() />
                        {move || if reply_mode.get() { "Cancelar" } else { "Responder" }}
                    </Button>
                </div>
            </div>

            {children.map(|children| view! { <div class="px-6 pb-6">{children()}</div> })}
        </Dialog>
    }
}
