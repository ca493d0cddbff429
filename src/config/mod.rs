//! Configuration management module.
//!
//! Handles loading configuration from environment variables.

use std::{env, fmt, time::Duration};

use crate::{
    error::AppError,
    ethereum::constants::{DEFAULT_COINGECKO_API_URL, DEFAULT_RPC_URL, DEFAULT_TELEGRAM_API_URL},
};

/// Default price request timeout in seconds.
pub const DEFAULT_PRICE_TIMEOUT_SECS: u64 = 10;

/// Application configuration.
#[derive(Clone)]
pub struct Config {
    /// Telegram bot authentication token.
    pub telegram_bot_token: String,
    /// Telegram Bot API base URL.
    pub telegram_api_url: String,
    /// Ethereum JSON-RPC endpoint URL.
    pub rpc_url: String,
    /// CoinGecko API base URL.
    pub price_api_url: String,
    /// Optional CoinGecko API key.
    pub price_api_key: Option<String>,
    /// Price request timeout.
    pub price_timeout: Duration,
    /// Logging level (default: info).
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `TELEGRAM_BOT_TOKEN`: Bot token issued by BotFather
    ///
    /// Optional environment variables:
    /// - `ETHEREUM_RPC_URL`: Ethereum JSON-RPC endpoint (default: public mainnet node)
    /// - `COINGECKO_API_KEY`: API key for elevated rate limits
    /// - `COINGECKO_API_URL`: Price API base URL
    /// - `PRICE_TIMEOUT_SECS`: Price request timeout (default: 10)
    /// - `TELEGRAM_API_URL`: Bot API base URL
    /// - `LOG_LEVEL`: Logging level (default: info)
    pub fn from_env() -> Result<Self, AppError> {
        // Load .env file if present
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// Blank values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let telegram_bot_token = var("TELEGRAM_BOT_TOKEN").ok_or_else(|| {
            AppError::Config("TELEGRAM_BOT_TOKEN environment variable not set".into())
        })?;

        let rpc_url = var("ETHEREUM_RPC_URL").unwrap_or_else(|| DEFAULT_RPC_URL.into());
        let price_api_url =
            var("COINGECKO_API_URL").unwrap_or_else(|| DEFAULT_COINGECKO_API_URL.into());
        let price_api_key = var("COINGECKO_API_KEY");
        let telegram_api_url =
            var("TELEGRAM_API_URL").unwrap_or_else(|| DEFAULT_TELEGRAM_API_URL.into());

        let price_timeout = match var("PRICE_TIMEOUT_SECS") {
            Some(raw) => Duration::from_secs(raw.parse().map_err(|_| {
                AppError::Config(format!("PRICE_TIMEOUT_SECS must be a whole number: {raw}"))
            })?),
            None => Duration::from_secs(DEFAULT_PRICE_TIMEOUT_SECS),
        };

        let log_level = var("LOG_LEVEL").unwrap_or_else(|| "info".to_string());

        Ok(Self {
            telegram_bot_token,
            telegram_api_url,
            rpc_url,
            price_api_url,
            price_api_key,
            price_timeout,
            log_level,
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("telegram_bot_token", &"<redacted>")
            .field("telegram_api_url", &self.telegram_api_url)
            .field("rpc_url", &self.rpc_url)
            .field("price_api_url", &self.price_api_url)
            .field("price_api_key", &self.price_api_key.as_ref().map(|_| "<redacted>"))
            .field("price_timeout", &self.price_timeout)
            .field("log_level", &self.log_level)
            .finish()
    }
}
