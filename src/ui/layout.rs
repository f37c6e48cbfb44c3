use ratatui::text::{Line, Span};

use super::theme::Theme;
use crate::core::message::{ChatMessage, Sender};
use crate::utils::scroll::ScrollCalculator;

/// Display names placed in front of each message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Labels {
    pub user: String,
    pub agent: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            user: "You".to_string(),
            agent: "Agent".to_string(),
        }
    }
}

impl Labels {
    fn for_sender(&self, sender: Sender) -> &str {
        match sender {
            Sender::User => &self.user,
            Sender::Agent => &self.agent,
        }
    }
}

pub struct LayoutEngine;

impl LayoutEngine {
    /// Unwrapped lines for one message: a labelled first line, continuation
    /// lines as-is, then a blank spacer.
    fn message_lines(message: &ChatMessage, theme: &Theme, labels: &Labels) -> Vec<Line<'static>> {
        let (prefix_style, text_style) = match message.sender {
            Sender::User => (theme.user_prefix_style, theme.user_text_style),
            Sender::Agent => (theme.agent_prefix_style, theme.agent_text_style),
        };

        let mut lines = Vec::new();
        let mut text_lines = message.text.lines();
        let first = text_lines.next().unwrap_or_default();
        lines.push(Line::from(vec![
            Span::styled(format!("{}: ", labels.for_sender(message.sender)), prefix_style),
            Span::styled(first.to_string(), text_style),
        ]));
        for rest in text_lines {
            lines.push(Line::from(Span::styled(rest.to_string(), text_style)));
        }
        lines.push(Line::from(""));
        lines
    }

    /// Lay the whole log out for a pane `width` columns wide.
    ///
    /// The result is already wrapped; its length is the scroll height.
    pub fn layout_messages(
        messages: &[ChatMessage],
        theme: &Theme,
        labels: &Labels,
        width: u16,
    ) -> Vec<Line<'static>> {
        let base: Vec<Line<'static>> = messages
            .iter()
            .flat_map(|message| Self::message_lines(message, theme, labels))
            .collect();
        ScrollCalculator::prewrap_lines(&base, width)
    }
}
