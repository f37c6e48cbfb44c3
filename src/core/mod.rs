//! Domain layer: messages, the chat widget, its collaborators, and settings.

pub mod config;
pub mod message;
pub mod sink;
pub mod transport;
pub mod widget;
