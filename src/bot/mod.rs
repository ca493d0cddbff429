//! Lookup bot module.
//!
//! Contains the per-message pipeline, reply rendering, and the chat
//! transport seam it replies through.

pub mod handler;
pub mod render;
pub mod transport;

pub use handler::{LookupBot, Outcome};
pub use render::{render, ReplyMessage, TextFormat};
pub use transport::{ChatId, ChatTransport, MessageHandle};
