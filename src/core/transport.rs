//! Network seam between the chat widget and the remote chat endpoint.

use std::error::Error as StdError;
use std::fmt;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use tracing::debug;

use crate::api::{extract_reply, ChatRequest, CHAT_PATH};
use crate::utils::url::construct_api_url;

/// Why an exchange with the chat endpoint produced no reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatError {
    /// The request could not be sent or no response arrived.
    Transport(String),

    /// A response arrived with a non-success status.
    Server {
        /// HTTP status code returned by the endpoint.
        status: u16,
    },

    /// A success response whose body is not valid JSON.
    Decode(String),
}

impl fmt::Display for ChatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatError::Transport(message) => f.write_str(message),
            ChatError::Server { .. } => f.write_str("Server error"),
            ChatError::Decode(message) => f.write_str(message),
        }
    }
}

impl StdError for ChatError {}

impl ChatError {
    pub fn kind(&self) -> &'static str {
        match self {
            ChatError::Transport(_) => "transport",
            ChatError::Server { .. } => "server",
            ChatError::Decode(_) => "decode",
        }
    }
}

/// Sends one user message and yields the agent's reply text.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    async fn send(&self, text: &str) -> Result<String, ChatError>;
}

/// JSON-over-HTTP transport posting to `{endpoint}/api/chat`.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
    url: String,
}

impl HttpTransport {
    pub fn new(endpoint: &str) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    pub fn with_client(client: reqwest::Client, endpoint: &str) -> Self {
        Self {
            client,
            url: construct_api_url(endpoint, CHAT_PATH),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ChatTransport for HttpTransport {
    async fn send(&self, text: &str) -> Result<String, ChatError> {
        debug!(url = %self.url, chars = text.chars().count(), "posting chat message");

        let response = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .json(&ChatRequest::new(text))
            .send()
            .await
            .map_err(|err| ChatError::Transport(describe_error(&err)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ChatError::Server {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|err| ChatError::Transport(describe_error(&err)))?;
        let value: Value =
            serde_json::from_str(&body).map_err(|err| ChatError::Decode(err.to_string()))?;

        Ok(extract_reply(&value))
    }
}

/// Render an error with its innermost cause, which reqwest's own Display
/// leaves out (e.g. "Connection refused").
fn describe_error(err: &dyn StdError) -> String {
    let top = err.to_string();
    let mut cause = err.source();
    let mut innermost = None;
    while let Some(source) = cause {
        innermost = Some(source);
        cause = source.source();
    }
    match innermost.map(|source| source.to_string()) {
        Some(detail) if !detail.is_empty() && !top.contains(&detail) => {
            format!("{top}: {detail}")
        }
        _ => top,
    }
}
