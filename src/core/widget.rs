//! The chat widget: read input, render it, ask the endpoint, render the answer.
//!
//! A submission is split in two halves. [`ChatWidget::submit`] does the
//! synchronous part (trim, append the user message, clear the input) and hands
//! back a [`PendingReply`]; awaiting [`PendingReply::resolve`] performs the
//! network call and appends the agent message. Callers that want overlapping
//! submissions spawn each pending reply on its own task; nothing serializes
//! them, so replies land in arrival order.

use std::sync::Arc;

use tracing::debug;

use crate::core::message::ChatMessage;
use crate::core::sink::{InputField, MessageSink};
use crate::core::transport::{ChatError, ChatTransport};

pub struct ChatWidget<I, S: ?Sized, T: ?Sized> {
    input: I,
    log: Arc<S>,
    transport: Arc<T>,
}

impl<I, S, T> ChatWidget<I, S, T>
where
    I: InputField,
    S: MessageSink + ?Sized,
    T: ChatTransport + ?Sized,
{
    pub fn new(input: I, log: Arc<S>, transport: Arc<T>) -> Self {
        Self {
            input,
            log,
            transport,
        }
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    pub fn log(&self) -> &Arc<S> {
        &self.log
    }

    /// Submit whatever the input field currently holds.
    ///
    /// Returns `None` without touching the log or the input when the text is
    /// empty after trimming.
    pub fn submit(&mut self) -> Option<PendingReply<S, T>> {
        let raw = self.input.value();
        let pending = self.submit_text(&raw)?;
        self.input.clear();
        Some(pending)
    }

    /// Submit `raw` directly, bypassing the input field.
    pub fn submit_text(&self, raw: &str) -> Option<PendingReply<S, T>> {
        let text = raw.trim();
        if text.is_empty() {
            return None;
        }

        self.log.append(ChatMessage::user(text));
        Some(PendingReply {
            text: text.to_string(),
            log: Arc::clone(&self.log),
            transport: Arc::clone(&self.transport),
        })
    }

    /// Run a whole submission of `raw` to completion.
    ///
    /// Returns `None` for blank input, otherwise the outcome of the exchange.
    pub async fn exchange(&self, raw: &str) -> Option<Result<(), ChatError>> {
        let pending = self.submit_text(raw)?;
        Some(pending.resolve().await)
    }
}

/// A submitted message whose reply has not been rendered yet.
#[must_use = "a pending reply does nothing until resolved"]
pub struct PendingReply<S: ?Sized, T: ?Sized> {
    text: String,
    log: Arc<S>,
    transport: Arc<T>,
}

impl<S, T> PendingReply<S, T>
where
    S: MessageSink + ?Sized,
    T: ChatTransport + ?Sized,
{
    /// The trimmed text that was sent.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Await the endpoint and append its reply, or the failure, as an agent message.
    ///
    /// The log receives a message either way; the returned error only tells
    /// the caller which of the two happened.
    pub async fn resolve(self) -> Result<(), ChatError> {
        match self.transport.send(&self.text).await {
            Ok(reply) => {
                debug!(chars = reply.chars().count(), "reply received");
                self.log.append(ChatMessage::agent(reply));
                Ok(())
            }
            Err(err) => {
                debug!(kind = err.kind(), error = %err, "exchange failed");
                self.log.append(ChatMessage::agent_error(&err));
                Err(err)
            }
        }
    }
}
