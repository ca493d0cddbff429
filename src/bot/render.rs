//! Reply rendering.
//!
//! Every function here is pure: the same inputs always produce the same
//! bytes, and absent data maps to a fixed placeholder.

use crate::{
    error::ClassificationError,
    ethereum::constants::EXPLORER_TOKEN_URL,
    types::{format_usd, ContractAddress, PriceQuote, TokenMetadata},
};

/// Shown in place of a metadata field the contract did not provide.
pub const PLACEHOLDER: &str = "N/A";

/// Shown when no USD price is available.
pub const PRICE_UNAVAILABLE: &str = "Not listed / unknown";

/// Longest name or symbol shown before it is cut off with an ellipsis.
pub const MAX_FIELD_CHARS: usize = 64;

/// Provisional text sent while lookups are in flight.
pub const LOADING_TEXT: &str = "🔎 Looking up token...";

/// How the chat client should interpret the reply text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextFormat {
    /// Send as-is.
    Plain,
    /// Telegram HTML subset.
    Html,
}

/// A fully rendered chat reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyMessage {
    /// Message body.
    pub text: String,
    /// Formatting mode for `text`.
    pub format: TextFormat,
}

impl ReplyMessage {
    /// Plain text reply.
    pub fn plain(text: impl Into<String>) -> Self {
        Self { text: text.into(), format: TextFormat::Plain }
    }

    /// HTML-formatted reply.
    pub fn html(text: impl Into<String>) -> Self {
        Self { text: text.into(), format: TextFormat::Html }
    }
}

/// Usage text for `/start` and `/help`.
pub fn help_reply() -> ReplyMessage {
    ReplyMessage::plain(
        "👋 Send me an Ethereum token contract address (0x followed by 40 hex characters) \
         and I'll reply with its name, symbol, decimals and current USD price.\n\n\
         Example: 0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48",
    )
}

/// Corrective reply for text that is not a usable address.
pub fn rejection_reply(err: ClassificationError) -> ReplyMessage {
    let text = match err {
        ClassificationError::MalformedLength => {
            "❌ That doesn't look like a contract address. \
             Send 0x followed by 40 hex characters, or /help for usage."
        }
        ClassificationError::InvalidAddress => {
            "❌ Invalid address: it contains non-hex characters or its mixed-case checksum \
             doesn't match. Double-check it, or send it in all lowercase."
        }
    };
    ReplyMessage::plain(text)
}

/// Generic notice used when the lookup could not be completed at all.
pub fn failure_reply() -> ReplyMessage {
    ReplyMessage::plain("⚠️ Couldn't fetch token data right now. Please try again later.")
}

/// Render the lookup result.
pub fn render(
    address: ContractAddress,
    metadata: &TokenMetadata,
    price: PriceQuote,
) -> ReplyMessage {
    let checksummed = address.checksummed();
    let name = metadata.name.as_deref().map(display_field).unwrap_or_else(|| PLACEHOLDER.into());
    let symbol =
        metadata.symbol.as_deref().map(display_field).unwrap_or_else(|| PLACEHOLDER.into());
    let decimals = metadata.decimals.map(|d| d.to_string()).unwrap_or_else(|| PLACEHOLDER.into());
    let price = price.map(format_usd).unwrap_or_else(|| PRICE_UNAVAILABLE.into());

    ReplyMessage::html(format!(
        "<b>Token lookup</b>\n\
         <code>{checksummed}</code>\n\
         \n\
         <b>Name:</b> {name}\n\
         <b>Symbol:</b> {symbol}\n\
         <b>Decimals:</b> {decimals}\n\
         <b>Price:</b> {price}\n\
         \n\
         🔍 Research further on <a href=\"{explorer}{checksummed}\">Etherscan</a>",
        explorer = EXPLORER_TOKEN_URL,
    ))
}

/// Contract-supplied text, cut to [`MAX_FIELD_CHARS`] and then escaped.
fn display_field(raw: &str) -> String {
    match raw.char_indices().nth(MAX_FIELD_CHARS) {
        Some((cut, _)) => format!("{}…", escape_html(&raw[..cut])),
        None => escape_html(raw),
    }
}

/// Escape the characters Telegram's HTML parser treats as markup.
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
