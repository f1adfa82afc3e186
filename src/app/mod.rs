use leptos::prelude::*;
use strum::IntoEnumIterator;

use crate::components::messages::{MessageDialog, SendMessagesCard};
use crate::components::ui::{
    Button, ButtonSize, ButtonVariant, Card, CardContent, CardDescription, CardFooter, CardHeader,
    CardTitle, Input, MessageContent, SuccessMessage, Textarea,
};
use crate::config::UiConfig;
use crate::models::MessageSummary;
use crate::util::cn::provide_class_merger;

fn demo_message() -> MessageSummary {
    MessageSummary {
        subject: Some("Reunion de padres".into()),
        content: Some("El jueves a las 18hs en el salon de actos.".into()),
        sender: Some("Laura Gomez".into()),
        date: Some("2025-03-05T12:00:00".into()),
        course: Some("3A".into()),
        ..Default::default()
    }
}

/// Showcase page: every primitive and composite with live state.
#[component]
pub fn App() -> impl IntoView {
    let config = UiConfig::new();
    provide_class_merger(config.class_merge.merger());

    let name = RwSignal::new(String::new());
    let notes = RwSignal::new(String::new());
    let dialog_open = RwSignal::new(false);
    let reply_mode = RwSignal::new(false);

    let greeting = MessageContent::rich(move || move || format!("Hola {}", name.get()));

    let variants = ButtonVariant::iter()
        .map(|variant| {
            view! {
                <div class="flex flex-wrap items-center gap-2">
                    {ButtonSize::iter()
                        .map(|size| {
                            view! {
                                <Button variant=variant size=size>
                                    {format!("{variant}/{size}")}
                                </Button>
                            }
                        })
                        .collect_view()}
                </div>
            }
        })
        .collect_view();

    view! {
        <main class="mx-auto flex max-w-4xl flex-col gap-6 px-4 py-8">
            <Card>
                <CardHeader>
                    <CardTitle>"Botones"</CardTitle>
                    <CardDescription>"Variantes y tamaños"</CardDescription>
                </CardHeader>
                <CardContent class="flex flex-col gap-3">{variants}</CardContent>
            </Card>

            <Card>
                <CardHeader>
                    <CardTitle>"Campos"</CardTitle>
                </CardHeader>
                <CardContent class="flex flex-col gap-3">
                    <Input placeholder="Nombre" bind_value=name />
                    <Textarea placeholder="Observaciones" bind_value=notes />
                </CardContent>
                <CardFooter class="gap-2">
                    <SuccessMessage content="✅ Operacion exitosa" />
                    <SuccessMessage content=greeting />
                </CardFooter>
            </Card>

            <SendMessagesCard on_click=Callback::new(move |_| dialog_open.set(true)) />

            <MessageDialog
                open=dialog_open
                on_open_change=Callback::new(move |open| dialog_open.set(open))
                message=Some(demo_message())
                on_view_history=Callback::new(|_| leptos::logging::log!("history requested"))
                can_reply=true
                reply_mode=reply_mode
                on_toggle_reply=Callback::new(move |_| reply_mode.update(|on| *on = !*on))
            >
                <Show when=move || reply_mode.get()>
                    <Textarea placeholder="Respuesta" />
                </Show>
            </MessageDialog>
        </main>
    }
}
