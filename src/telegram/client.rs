//! Telegram Bot API client.

use std::time::Duration;

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    bot::{ChatId, ChatTransport, MessageHandle, ReplyMessage, TextFormat},
    error::{AppError, Result},
    telegram::types::{
        ApiResponse, EditMessageTextRequest, GetUpdatesRequest, LinkPreviewOptions, Message,
        SendMessageRequest, Update,
    },
};

/// Server-side long polling timeout for `getUpdates`.
pub const POLL_TIMEOUT_SECS: u64 = 30;

/// HTTP timeout; must exceed the long polling timeout.
const HTTP_TIMEOUT: Duration = Duration::from_secs(POLL_TIMEOUT_SECS + 15);

/// Telegram Bot API client.
///
/// Safe to share across tasks; every method is a single stateless request.
#[derive(Clone)]
pub struct TelegramClient {
    client: reqwest::Client,
    /// `{api_url}/bot{token}`; never logged.
    endpoint: String,
}

impl TelegramClient {
    /// Create a new client for the given bot token.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(api_url: &str, token: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()
            .map_err(|e| AppError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        let endpoint = format!("{}/bot{}", api_url.trim_end_matches('/'), token);

        Ok(Self { client, endpoint })
    }

    /// Call a Bot API method and unwrap its result envelope.
    async fn call<B, T>(&self, method: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        // The URL embeds the bot token, so strip it from any transport error.
        let response = self
            .client
            .post(format!("{}/{}", self.endpoint, method))
            .json(body)
            .send()
            .await
            .map_err(|e| AppError::Transport(e.without_url().to_string()))?;

        let status = response.status();
        let envelope: ApiResponse<T> = response.json().await.map_err(|e| {
            let e = e.without_url();
            AppError::Telegram(format!("{method}: unreadable response ({status}): {e}"))
        })?;

        match envelope {
            ApiResponse { ok: true, result: Some(result), .. } => Ok(result),
            ApiResponse { description, error_code, .. } => Err(AppError::Telegram(format!(
                "{method} failed ({}): {}",
                error_code.map(|c| c.to_string()).unwrap_or_else(|| status.to_string()),
                description.unwrap_or_else(|| "no description".to_string())
            ))),
        }
    }

    /// Long-poll for new updates starting at `offset`.
    pub async fn get_updates(&self, offset: Option<i64>) -> Result<Vec<Update>> {
        let request =
            GetUpdatesRequest { offset, timeout: POLL_TIMEOUT_SECS, allowed_updates: &["message"] };
        self.call("getUpdates", &request).await
    }
}

fn parse_mode(format: TextFormat) -> Option<&'static str> {
    match format {
        TextFormat::Plain => None,
        TextFormat::Html => Some("HTML"),
    }
}

const NO_PREVIEW: LinkPreviewOptions = LinkPreviewOptions { is_disabled: true };

#[async_trait]
impl ChatTransport for TelegramClient {
    async fn send_message(&self, chat_id: ChatId, reply: &ReplyMessage) -> Result<MessageHandle> {
        let request = SendMessageRequest {
            chat_id,
            text: &reply.text,
            parse_mode: parse_mode(reply.format),
            link_preview_options: NO_PREVIEW,
        };
        let message: Message = self.call("sendMessage", &request).await?;

        Ok(MessageHandle { chat_id: message.chat.id, message_id: message.message_id })
    }

    async fn edit_message(&self, handle: MessageHandle, reply: &ReplyMessage) -> Result<()> {
        let request = EditMessageTextRequest {
            chat_id: handle.chat_id,
            message_id: handle.message_id,
            text: &reply.text,
            parse_mode: parse_mode(reply.format),
            link_preview_options: NO_PREVIEW,
        };
        // Returns the edited Message; only success matters here.
        let _: serde_json::Value = self.call("editMessageText", &request).await?;
        Ok(())
    }
}
