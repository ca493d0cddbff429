//! Chat transport abstraction.

use async_trait::async_trait;

use crate::{
    bot::render::{ReplyMessage, LOADING_TEXT},
    error::Result,
};

/// Chat identifier as assigned by the transport.
pub type ChatId = i64;

/// Reference to a message the bot already sent, used to edit it later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageHandle {
    /// Chat the message lives in.
    pub chat_id: ChatId,
    /// Transport-assigned message ID.
    pub message_id: i64,
}

/// Outbound side of a chat platform.
///
/// Implementors provide plain send and in-place edit; the two-phase
/// `acknowledge` / `finalize` reply protocol is built on top of them.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Send a new message.
    async fn send_message(&self, chat_id: ChatId, reply: &ReplyMessage) -> Result<MessageHandle>;

    /// Replace the content of a previously sent message.
    async fn edit_message(&self, handle: MessageHandle, reply: &ReplyMessage) -> Result<()>;

    /// Post the provisional "loading" message for a request.
    async fn acknowledge(&self, chat_id: ChatId) -> Result<MessageHandle> {
        self.send_message(chat_id, &ReplyMessage::plain(LOADING_TEXT)).await
    }

    /// Overwrite the provisional message with the final content.
    async fn finalize(&self, handle: MessageHandle, reply: &ReplyMessage) -> Result<()> {
        self.edit_message(handle, reply).await
    }
}
