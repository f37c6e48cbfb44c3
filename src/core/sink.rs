//! Collaborators the chat widget writes to and reads from.
//!
//! [`MessageSink`] stands in for the visual message list and [`InputField`]
//! for the text box the user types into. [`ChatLog`] is the in-memory message
//! list the terminal UI renders from.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::core::message::ChatMessage;

/// Receives every message the widget renders, in append order.
pub trait MessageSink: Send + Sync {
    fn append(&self, message: ChatMessage);
}

impl<S: MessageSink + ?Sized> MessageSink for Arc<S> {
    fn append(&self, message: ChatMessage) {
        (**self).append(message)
    }
}

/// The text box a submission is read from.
pub trait InputField {
    fn value(&self) -> String;
    fn clear(&mut self);
}

impl InputField for String {
    fn value(&self) -> String {
        self.clone()
    }

    fn clear(&mut self) {
        String::clear(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ScrollState {
    offset: u16,
    pinned: bool,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            offset: 0,
            pinned: true,
        }
    }
}

#[derive(Debug, Default)]
struct LogState {
    messages: Vec<ChatMessage>,
    scroll: ScrollState,
}

/// Append-only message list with bottom-pinned scrolling.
///
/// Every append pins the view to the bottom so the newest message is visible,
/// even if the user had scrolled up. Offsets are measured in wrapped lines
/// from the top and are clamped against the `max_offset` the renderer
/// computes for the current viewport.
#[derive(Debug, Default)]
pub struct ChatLog {
    state: Mutex<LogState>,
}

impl ChatLog {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, LogState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn messages(&self) -> Vec<ChatMessage> {
        self.lock().messages.clone()
    }

    pub fn len(&self) -> usize {
        self.lock().messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().messages.is_empty()
    }

    pub fn is_pinned_to_bottom(&self) -> bool {
        self.lock().scroll.pinned
    }

    /// Effective top offset for a viewport whose largest valid offset is `max_offset`.
    pub fn resolve_offset(&self, max_offset: u16) -> u16 {
        let scroll = self.lock().scroll;
        if scroll.pinned {
            max_offset
        } else {
            scroll.offset.min(max_offset)
        }
    }

    pub fn scroll_up(&self, lines: u16, max_offset: u16) {
        let mut state = self.lock();
        let current = if state.scroll.pinned {
            max_offset
        } else {
            state.scroll.offset.min(max_offset)
        };
        state.scroll = ScrollState {
            offset: current.saturating_sub(lines),
            pinned: false,
        };
    }

    pub fn scroll_down(&self, lines: u16, max_offset: u16) {
        let mut state = self.lock();
        if state.scroll.pinned {
            return;
        }
        let next = state.scroll.offset.saturating_add(lines);
        state.scroll = if next >= max_offset {
            ScrollState::default()
        } else {
            ScrollState {
                offset: next,
                pinned: false,
            }
        };
    }

    pub fn scroll_to_top(&self) {
        self.lock().scroll = ScrollState {
            offset: 0,
            pinned: false,
        };
    }

    pub fn pin_to_bottom(&self) {
        self.lock().scroll = ScrollState::default();
    }
}

impl MessageSink for ChatLog {
    fn append(&self, message: ChatMessage) {
        let mut state = self.lock();
        state.messages.push(message);
        state.scroll = ScrollState::default();
    }
}
