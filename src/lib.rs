//! Chatline is a terminal chat widget for a JSON chat endpoint.
//!
//! - [`core`] owns the chat widget, its message/transport seams, and config.
//! - [`api`] defines the request payload and reply extraction.
//! - [`ui`] renders the terminal interface and runs the event loop.
//! - [`cli`] parses arguments and dispatches subcommands.
//!
//! The binary (`src/main.rs`) routes straight through [`crate::cli::main`].

pub mod api;
pub mod cli;
pub mod core;
pub mod logging;
pub mod ui;
pub mod utils;
