//! Price query service.
//!
//! Looks up USD spot prices by contract address from the CoinGecko
//! `simple/token_price` endpoint.

use std::{collections::HashMap, time::Duration};

use alloy::primitives::Address;
use async_trait::async_trait;
use serde::Deserialize;

use crate::{
    error::{AppError, Result},
    ethereum::constants::{COINGECKO_PLATFORM_ID, QUOTE_CURRENCY},
    types::PriceQuote,
};

/// Header carrying a CoinGecko Demo plan key.
pub const DEMO_API_KEY_HEADER: &str = "x-cg-demo-api-key";

/// Header carrying a CoinGecko Pro plan key.
pub const PRO_API_KEY_HEADER: &str = "x-cg-pro-api-key";

/// Source of USD spot prices.
#[async_trait]
pub trait PriceFetcher: Send + Sync {
    /// Fetch the USD price of a token.
    ///
    /// `Ok(None)` means the service does not list the token;
    /// `Err` means the lookup itself failed.
    async fn fetch_price(&self, token: Address) -> Result<PriceQuote>;
}

/// One entry of the `simple/token_price` response.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenPriceEntry {
    /// Price in USD, absent when the token has no USD market.
    pub usd: Option<f64>,
}

/// Response body: address (in whatever casing the provider chose) to price entry.
pub type TokenPriceResponse = HashMap<String, TokenPriceEntry>;

/// Error envelope CoinGecko sometimes returns with a 200 status.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiStatus {
    /// Provider error code, usually mirroring an HTTP status.
    pub error_code: Option<i64>,
    /// Human-readable reason.
    pub error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PriceBody {
    Failed { status: ApiStatus },
    Prices(TokenPriceResponse),
}

/// CoinGecko-backed price service.
#[derive(Clone)]
pub struct PriceService {
    /// HTTP client with the request timeout applied.
    client: reqwest::Client,
    /// API base URL, without a trailing slash.
    base_url: String,
    /// Optional API key.
    api_key: Option<String>,
}

impl PriceService {
    /// Create a new price service.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(base_url: &str, api_key: Option<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, base_url: base_url.trim_end_matches('/').to_string(), api_key })
    }

    /// Header name for the configured key; Pro keys only work against the Pro host.
    fn api_key_header(&self) -> &'static str {
        if self.base_url.contains("pro-api") {
            PRO_API_KEY_HEADER
        } else {
            DEMO_API_KEY_HEADER
        }
    }
}

#[async_trait]
impl PriceFetcher for PriceService {
    async fn fetch_price(&self, token: Address) -> Result<PriceQuote> {
        let contract = token.to_checksum(None);
        let url = format!("{}/simple/token_price/{}", self.base_url, COINGECKO_PLATFORM_ID);

        tracing::debug!(token = %contract, "Fetching token price");

        let mut request = self
            .client
            .get(&url)
            .query(&[("contract_addresses", contract.as_str()), ("vs_currencies", QUOTE_CURRENCY)]);

        if let Some(key) = &self.api_key {
            request = request.header(self.api_key_header(), key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::PriceFetch(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::PriceFetch(format!(
                "Price API returned status: {}",
                response.status()
            )));
        }

        let body: PriceBody = response
            .json()
            .await
            .map_err(|e| AppError::PriceFetch(format!("Failed to parse price response: {}", e)))?;

        match body {
            PriceBody::Prices(prices) => Ok(select_usd(&prices, &contract)),
            PriceBody::Failed { status } => Err(AppError::PriceFetch(format!(
                "Price API error {}: {}",
                status.error_code.map_or_else(|| "unknown".to_string(), |c| c.to_string()),
                status.error_message.unwrap_or_default()
            ))),
        }
    }
}

/// Pick the USD price for `address` out of a response map.
///
/// Keys are matched case-insensitively; a lone entry under some other
/// `0x` key is still taken since only one address was requested.
pub fn select_usd(prices: &TokenPriceResponse, address: &str) -> PriceQuote {
    let entry = prices
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(address))
        .or_else(|| match prices.iter().next() {
            Some(lone) if prices.len() == 1 && lone.0.starts_with("0x") => Some(lone),
            _ => None,
        })
        .map(|(_, entry)| entry)?;

    entry.usd
}
