use crate::backend::HttpChatBackend;
use crate::config::ClientConfig;
use crate::session::{ChatSession, SessionCell, run_turn};
use crate::types::{ChatMessage, ToolCall};
use dioxus::events::{Key, Modifiers};
use dioxus::prelude::*;
use std::rc::Rc;

const INPUT_PLACEHOLDER: &str = "Ask me to add, list, complete, delete, or update tasks...";
const EXAMPLE_PROMPTS: [&str; 2] = ["Add a task to buy groceries", "Show my tasks"];

impl SessionCell for Signal<ChatSession> {
    fn update<R>(&mut self, f: impl FnOnce(&mut ChatSession) -> R) -> R {
        let mut session = self.write();
        f(&mut session)
    }

    // The view may be torn down mid-request, taking the signal with it.
    fn release(&mut self) {
        if let Ok(mut session) = self.try_write() {
            session.release();
        }
    }
}

/// Enter sends the turn; Shift+Enter falls through to a newline.
fn submits_turn(key: &Key, modifiers: Modifiers) -> bool {
    *key == Key::Enter && !modifiers.shift()
}

#[component]
pub fn ChatView() -> Element {
    let config = use_context::<ClientConfig>();
    let backend = use_signal(move || HttpChatBackend::new(config));
    let mut session = use_signal(ChatSession::new);
    let mut transcript_end = use_signal(|| Option::<Rc<MountedData>>::None);
    let transcript_len = use_memo(move || session.read().transcript().len());

    use_effect(move || {
        let _ = transcript_len();
        if let Some(anchor) = Option::clone(&transcript_end.peek()) {
            spawn(async move {
                let _ = anchor.scroll_to(ScrollBehavior::Smooth).await;
            });
        }
    });

    let send_message = move || {
        if !session.peek().can_send() {
            return;
        }
        let client = HttpChatBackend::clone(&backend.peek());
        spawn(async move {
            let mut cell = session;
            run_turn(&mut cell, &client).await;
        });
    };

    let view = session();
    let sending = view.is_in_flight();

    rsx! {
        div { class: "chat-page",
            ChatHeader { conversation_id: view.conversation_id() }

            div { class: "chat-scroll",
                div { id: "chat-list", class: "chat-list",
                    if view.shows_welcome() {
                        WelcomePlaceholder {}
                    }
                    for (i, msg) in view.transcript().iter().enumerate() {
                        MessageBubble { key: "{i}", message: msg.clone() }
                    }
                    if sending {
                        LoadingIndicator {}
                    }
                    div {
                        class: "transcript-end",
                        onmounted: move |ev: MountedEvent| transcript_end.set(Some(ev.data())),
                    }
                }
            }

            if view.shows_tool_panel() {
                ToolCallPanel { calls: view.tool_calls().to_vec() }
            }

            form { class: "composer", onsubmit: move |ev| ev.prevent_default(),
                div { class: "composer-inner",
                    textarea {
                        rows: "1", placeholder: INPUT_PLACEHOLDER,
                        value: "{view.input()}",
                        oninput: move |ev| session.write().set_input(ev.value()),
                        onkeydown: move |ev| {
                            if submits_turn(&ev.key(), ev.modifiers()) {
                                ev.prevent_default();
                                send_message();
                            }
                        },
                        disabled: sending, autofocus: true,
                    }
                    button {
                        class: "btn btn-primary", r#type: "button",
                        disabled: !view.can_send(),
                        onclick: move |_| send_message(),
                        "Send"
                    }
                }
            }
        }
    }
}

#[component]
fn ChatHeader(#[props(!optional)] conversation_id: Option<i64>) -> Element {
    rsx! {
        div { class: "header",
            h1 { "Todo AI Assistant" }
            p { class: "subtitle", "Agentic Dev Stack (OpenAI + MCP)" }
            if let Some(id) = conversation_id {
                p { class: "conversation-id", "Conversation ID: {id}" }
            }
        }
    }
}

#[component]
fn WelcomePlaceholder() -> Element {
    let [first, second] = EXAMPLE_PROMPTS;
    rsx! {
        div { class: "welcome",
            div { class: "check", "✓" }
            h2 { "Welcome to Todo AI Assistant" }
            p { "Try: \"{first}\" or \"{second}\"" }
        }
    }
}

#[component]
fn MessageBubble(message: ChatMessage) -> Element {
    let role = message.role.css_class();
    rsx! {
        div { class: format_args!("message-row {role}"),
            div { class: format_args!("bubble {role}"),
                div { class: "role", "{message.role.label()}" }
                div { class: "content", "{message.content}" }
            }
        }
    }
}

#[component]
fn LoadingIndicator() -> Element {
    rsx! {
        div { class: "message-row assistant",
            div { class: "bubble assistant",
                div { class: "loading", span {} span {} span {} }
            }
        }
    }
}

#[component]
fn ToolCallPanel(calls: Vec<ToolCall>) -> Element {
    rsx! {
        div { class: "tool-panel",
            div { class: "title", "🔧 Tool Calls (Transparency)" }
            for (i, call) in calls.iter().enumerate() {
                div { key: "{i}", class: "tool-call", "{call.summary()}" }
            }
        }
    }
}
