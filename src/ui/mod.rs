//! Terminal UI layer for interactive chat sessions.
//!
//! - [`chat_loop`]: terminal lifecycle, event reading, key handling, and the
//!   redraw loop around a [`crate::core::widget::ChatWidget`].
//! - [`renderer`] and [`layout`]: frame composition and wrapped message lines.
//! - [`theme`] and [`input`]: styles and the single-line message box.

pub mod chat_loop;
pub mod input;
pub mod layout;
pub mod renderer;
pub mod theme;
