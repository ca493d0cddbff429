//! Telegram transport module.
//!
//! A minimal Bot API client: long polling for inbound messages plus
//! `sendMessage` / `editMessageText` for replies.

pub mod client;
pub mod poller;
pub mod types;

pub use client::TelegramClient;
pub use poller::run_until;
