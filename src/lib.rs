//! Token Lookup Bot Library
//!
//! A Telegram bot that answers an Ethereum contract address with the
//! token's name, symbol, decimals and USD spot price.
//!
//! # Pipeline
//!
//! - **Classify**: validate the message as a checksummed address
//! - **Fetch**: read ERC20 metadata over RPC and the price from CoinGecko, concurrently
//! - **Render**: merge both results, substituting placeholders for anything missing
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use token_lookup_bot::{
//!     ethereum::EthereumClient,
//!     services::{MetadataService, PriceService},
//!     telegram::TelegramClient,
//!     Config, LookupBot,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let telegram = Arc::new(TelegramClient::new(&config.telegram_api_url, &config.telegram_bot_token)?);
//!     let ethereum = Arc::new(EthereumClient::new(&config.rpc_url)?);
//!     let prices = PriceService::new(&config.price_api_url, None, config.price_timeout)?;
//!     let bot = LookupBot::new(telegram, MetadataService::new(ethereum), Arc::new(prices));
//!     bot.handle_message(42, "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48").await?;
//!     Ok(())
//! }
//! ```

pub mod bot;
pub mod config;
pub mod error;
pub mod ethereum;
pub mod services;
pub mod telegram;
pub mod types;

pub use bot::{LookupBot, Outcome};
pub use config::Config;
pub use error::{AppError, ClassificationError, Result};
pub use ethereum::constants::*;
