use crate::backend::{ChatResponder, Services};
use crate::content::CHAT_TITLE;
use crate::state::PageState;
use crate::types::Sender;
use dioxus::events::Key;
use dioxus::prelude::*;

fn bubble_class(sender: Sender) -> &'static str {
    match sender {
        Sender::Bot => "bubble bot",
        Sender::User => "bubble user",
    }
}

fn send_draft(mut page: Signal<PageState>, responder: &dyn ChatResponder) {
    page.with_mut(|state| state.chat.send(responder));
}

/// Floating launcher that expands into the assistant panel.
#[component]
pub fn ChatDock(page: Signal<PageState>) -> Element {
    let mut page = page;
    let services = use_context::<Services>();
    let (palette, chat) = {
        let state = page.read();
        (state.palette(), state.chat.clone())
    };
    let enter_responder = services.assistant.clone();
    let click_responder = services.assistant.clone();

    rsx! {
        div { class: "chat-dock",
            if chat.is_open() {
                div { class: format_args!("chat-panel {}", palette.card),
                    div { class: "chat-header",
                        span { "{CHAT_TITLE}" }
                        button {
                            class: "chat-close", r#type: "button",
                            onclick: move |_| page.with_mut(|state| state.chat.close()),
                            "×"
                        }
                    }
                    div { class: "chat-log",
                        for (i, msg) in chat.transcript().iter().enumerate() {
                            div { key: "{i}", class: bubble_class(msg.sender()), "{msg.text()}" }
                        }
                    }
                    div { class: "chat-composer",
                        input {
                            r#type: "text", placeholder: "Ask a question...",
                            value: "{chat.draft()}",
                            oninput: move |ev| page.with_mut(|state| state.chat.set_draft(ev.value())),
                            onkeydown: move |ev| {
                                if ev.key() == Key::Enter && !ev.modifiers().shift() {
                                    ev.prevent_default();
                                    send_draft(page, enter_responder.as_ref());
                                }
                            },
                        }
                        button {
                            class: "btn-primary", r#type: "button",
                            onclick: move |_| send_draft(page, click_responder.as_ref()),
                            "Send"
                        }
                    }
                }
            } else {
                button {
                    class: "btn-primary chat-launcher", r#type: "button",
                    onclick: move |_| page.with_mut(|state| state.chat.open()),
                    "Chat"
                }
            }
        }
    }
}
