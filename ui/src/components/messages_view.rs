use dioxus::prelude::*;

use super::studio_state::{now, report, use_studio};

/// Message thread between the client and the designer.
#[component]
pub fn MessagesPanel() -> Element {
    let mut studio = use_studio();
    let mut draft = use_signal(String::new);

    let view = studio.read().messages_view();

    rsx! {
        div { id: "messages", class: "card pad",
            h3 { "Messages" }
            form {
                id: "messageForm",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    let text = draft.read().clone();
                    let result = studio.write().send_message(&text, now());
                    if result.is_ok() {
                        draft.set(String::new());
                    }
                    report(result);
                },
                input {
                    id: "messageInput",
                    r#type: "text",
                    placeholder: "Write to your designer...",
                    value: "{draft}",
                    oninput: move |evt| draft.set(evt.value()),
                }
                button { class: "btn small", r#type: "submit", "Send" }
            }
            div { id: "messageList", class: "message-list",
                for (i, row) in view.rows.iter().enumerate() {
                    div { key: "{i}", class: "card pad flat",
                        div { class: "message-head",
                            strong { "{row.from}" }
                            span { class: "helper", "{row.sent_at}" }
                        }
                        div { class: "divider" }
                        p { class: "message-text", "{row.text}" }
                    }
                }
            }
        }
    }
}
