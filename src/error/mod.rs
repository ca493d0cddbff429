//! Error types and handling module.
//!
//! Defines all application-specific error types and conversions.

use thiserror::Error;

/// Application-wide error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Ethereum RPC errors.
    #[error("Ethereum RPC error: {0}")]
    Rpc(String),

    /// Transport errors.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Price service failure (network, non-2xx status, timeout, bad body).
    #[error("Price fetch error: {0}")]
    PriceFetch(String),

    /// Telegram Bot API rejected a request.
    #[error("Telegram API error: {0}")]
    Telegram(String),
}

impl From<alloy::transports::TransportError> for AppError {
    fn from(err: alloy::transports::TransportError) -> Self {
        AppError::Transport(err.to_string())
    }
}

/// Rejection reasons for text that is not a usable contract address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ClassificationError {
    /// Missing `0x` prefix or not exactly 42 characters.
    #[error("Address must be 0x followed by 40 hex characters")]
    MalformedLength,

    /// Non-hex body or a mixed-case checksum that does not match.
    #[error("Invalid address: bad hex digits or checksum")]
    InvalidAddress,
}

/// Failure of a single read-only contract call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReadError {
    /// The node answered with an error (typically an execution revert).
    #[error("call reverted: {0}")]
    Reverted(String),

    /// The call returned data that does not decode as the expected type.
    #[error("malformed return data: {0}")]
    Decode(String),

    /// The RPC endpoint could not be reached at all.
    #[error("endpoint unreachable: {0}")]
    Unreachable(String),
}

impl ReadError {
    /// Whether this failure says something about the endpoint rather than the contract.
    pub fn is_unreachable(&self) -> bool {
        matches!(self, ReadError::Unreachable(_))
    }
}

impl From<alloy::contract::Error> for ReadError {
    fn from(err: alloy::contract::Error) -> Self {
        match err {
            alloy::contract::Error::TransportError(e) if e.is_transport_error() => {
                ReadError::Unreachable(e.to_string())
            }
            alloy::contract::Error::TransportError(e) if e.is_error_resp() => {
                ReadError::Reverted(e.to_string())
            }
            other => ReadError::Decode(other.to_string()),
        }
    }
}

/// Result type alias using AppError.
pub type Result<T> = std::result::Result<T, AppError>;
