//! Conversation state behind the chat view.
//!
//! A turn is split in two halves so a UI can hold the state in a reactive
//! cell and await the network call in between: [`ChatSession::begin_turn`]
//! records the user message and marks the session busy, and
//! [`ChatSession::finish_turn`] applies the backend's answer (or failure).
//! [`run_turn`] drives both halves against a [`ChatBackend`] for any
//! [`SessionCell`].

use crate::backend::{ChatBackend, ChatResult};
use crate::types::{ChatMessage, ChatRequest, ChatResponse, ToolCall};
use tracing::{debug, info, warn};

const ERROR_REPLY: &str =
    "Sorry, I encountered an error. Please make sure the backend is running at ";

/// The assistant-side message shown when a turn fails.
pub fn error_reply(api_url: &str) -> String {
    format!("{ERROR_REPLY}{api_url}")
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatSession {
    transcript: Vec<ChatMessage>,
    input: String,
    in_flight: bool,
    conversation_id: Option<i64>,
    tool_calls: Vec<ToolCall>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn conversation_id(&self) -> Option<i64> {
        self.conversation_id
    }

    /// Tool calls reported by the most recent reply that had any.
    pub fn tool_calls(&self) -> &[ToolCall] {
        &self.tool_calls
    }

    /// Whether the send control should be enabled.
    pub fn can_send(&self) -> bool {
        !self.in_flight && !self.input.trim().is_empty()
    }

    /// Starts a turn from the pending input.
    ///
    /// Returns `None` without touching anything when the input is blank or a
    /// request is already outstanding. Otherwise the trimmed text is appended
    /// as a user message, the input is cleared and the session is marked busy
    /// until [`finish_turn`](Self::finish_turn) or [`release`](Self::release).
    pub fn begin_turn(&mut self) -> Option<ChatRequest> {
        if self.in_flight {
            return None;
        }
        let message = self.input.trim().to_string();
        if message.is_empty() {
            return None;
        }

        self.transcript.push(ChatMessage::user(message.clone()));
        self.input.clear();
        self.in_flight = true;

        debug!(
            conversation_id = ?self.conversation_id,
            chars = message.chars().count(),
            "dispatching chat turn"
        );
        Some(ChatRequest {
            message,
            conversation_id: self.conversation_id,
        })
    }

    /// Applies the outcome of the request started by `begin_turn`.
    pub fn finish_turn(&mut self, outcome: ChatResult<ChatResponse>, api_url: &str) {
        match outcome {
            Ok(reply) => {
                info!(
                    conversation_id = reply.conversation_id,
                    tool_calls = reply.tool_calls.as_ref().map_or(0, Vec::len),
                    "chat turn answered"
                );
                self.conversation_id = Some(reply.conversation_id);
                self.transcript.push(ChatMessage::assistant(reply.response));
                if let Some(calls) = reply.tool_calls.filter(|calls| !calls.is_empty()) {
                    self.tool_calls = calls;
                }
            }
            Err(err) => {
                warn!(error = %err, api_url, "chat turn failed");
                self.transcript.push(ChatMessage::assistant(error_reply(api_url)));
            }
        }
        self.in_flight = false;
    }

    /// Clears the busy flag without recording an outcome.
    pub fn release(&mut self) {
        self.in_flight = false;
    }

    /// The welcome placeholder replaces an empty transcript.
    pub fn shows_welcome(&self) -> bool {
        self.transcript.is_empty()
    }

    pub fn shows_tool_panel(&self) -> bool {
        !self.tool_calls.is_empty()
    }
}

/// Somewhere a [`ChatSession`] lives while a turn is awaited: the session
/// itself when driven headless, a reactive signal in the view.
pub trait SessionCell {
    fn update<R>(&mut self, f: impl FnOnce(&mut ChatSession) -> R) -> R;

    /// Clears the busy flag. Must tolerate a cell whose owner is gone.
    fn release(&mut self) {
        self.update(ChatSession::release);
    }
}

impl SessionCell for ChatSession {
    fn update<R>(&mut self, f: impl FnOnce(&mut ChatSession) -> R) -> R {
        f(self)
    }
}

/// Runs one full turn against `backend`. Returns `false` if nothing was sent.
///
/// If the returned future is dropped mid-request the cell is released, so the
/// input never stays disabled.
pub async fn run_turn<C, B>(cell: &mut C, backend: &B) -> bool
where
    C: SessionCell,
    B: ChatBackend + ?Sized,
{
    let Some(request) = cell.update(ChatSession::begin_turn) else {
        return false;
    };
    let mut turn = InFlight { cell, armed: true };
    let outcome = backend.send(&request).await;
    turn.cell
        .update(|session| session.finish_turn(outcome, backend.base_url()));
    turn.armed = false;
    true
}

struct InFlight<'a, C: SessionCell> {
    cell: &'a mut C,
    armed: bool,
}

impl<C: SessionCell> Drop for InFlight<'_, C> {
    fn drop(&mut self) {
        if self.armed {
            self.cell.release();
        }
    }
}
