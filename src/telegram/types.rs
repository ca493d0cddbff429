//! Telegram Bot API wire types (the subset the bot uses).

use serde::{Deserialize, Serialize};

/// Envelope returned by every Bot API method.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded.
    pub ok: bool,
    /// Method result when `ok` is true.
    pub result: Option<T>,
    /// Human-readable error when `ok` is false.
    pub description: Option<String>,
    /// Error code when `ok` is false.
    pub error_code: Option<i64>,
}

/// An incoming update.
#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    /// Monotonic update identifier, used to advance the polling offset.
    pub update_id: i64,
    /// New incoming message, if this update carries one.
    pub message: Option<Message>,
}

impl Update {
    /// Chat and text of a text message; `None` for every other update kind.
    pub fn into_text(self) -> Option<(i64, String)> {
        let message = self.message?;
        Some((message.chat.id, message.text?))
    }
}

/// A chat message.
#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    /// Message identifier inside its chat.
    pub message_id: i64,
    /// Chat the message belongs to.
    pub chat: Chat,
    /// UTF-8 text, absent for stickers, photos and the like.
    pub text: Option<String>,
}

/// A chat.
#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    /// Chat identifier.
    pub id: i64,
}

/// Link preview settings.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LinkPreviewOptions {
    /// Suppress the preview entirely.
    pub is_disabled: bool,
}

/// `getUpdates` parameters.
#[derive(Debug, Clone, Serialize)]
pub struct GetUpdatesRequest<'a> {
    /// First update to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    /// Long polling timeout in seconds.
    pub timeout: u64,
    /// Update kinds to receive.
    pub allowed_updates: &'a [&'a str],
}

/// `sendMessage` parameters.
#[derive(Debug, Clone, Serialize)]
pub struct SendMessageRequest<'a> {
    /// Target chat.
    pub chat_id: i64,
    /// Message text.
    pub text: &'a str,
    /// `HTML` or omitted for plain text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<&'a str>,
    /// Preview settings.
    pub link_preview_options: LinkPreviewOptions,
}

/// `editMessageText` parameters.
#[derive(Debug, Clone, Serialize)]
pub struct EditMessageTextRequest<'a> {
    /// Chat containing the message.
    pub chat_id: i64,
    /// Message to edit.
    pub message_id: i64,
    /// New text.
    pub text: &'a str,
    /// `HTML` or omitted for plain text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<&'a str>,
    /// Preview settings.
    pub link_preview_options: LinkPreviewOptions,
}
