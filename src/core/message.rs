/// Who authored a message in the chat log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Agent,
}

/// A single entry in the chat log. Created once, appended once, never edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub text: String,
    pub sender: Sender,
}

/// Prefix for agent messages that report a failed exchange.
pub const ERROR_PREFIX: &str = "Error: ";

impl ChatMessage {
    pub fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender,
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Sender::User, text)
    }

    pub fn agent(text: impl Into<String>) -> Self {
        Self::new(Sender::Agent, text)
    }

    /// Agent-authored message describing a failure, e.g. `Error: Server error`.
    pub fn agent_error(failure: impl std::fmt::Display) -> Self {
        Self::agent(format!("{ERROR_PREFIX}{failure}"))
    }

    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }

    pub fn is_agent(&self) -> bool {
        self.sender == Sender::Agent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn agent_error_prefixes_failure() {
        let message = ChatMessage::agent_error("network down");
        assert_eq!(message.text, "Error: network down");
        assert!(message.is_agent());
    }

    #[test]
    fn constructors_tag_the_sender() {
        let user = ChatMessage::user("hi");
        assert!(user.is_user() && !user.is_agent());
        assert_eq!(ChatMessage::agent("ok").sender, Sender::Agent);
    }
}
