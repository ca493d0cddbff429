//! Token Lookup Bot
//!
//! Replies to Ethereum contract addresses with token metadata and USD price.

use std::sync::Arc;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use token_lookup_bot::{
    ethereum::EthereumClient,
    services::{MetadataService, PriceService},
    telegram::{run_until, TelegramClient},
    Config, LookupBot, ETHEREUM_MAINNET_CHAIN_ID,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    tracing::info!("Starting Token Lookup Bot");

    // Shared clients, created once and reused by every request
    let telegram =
        Arc::new(TelegramClient::new(&config.telegram_api_url, &config.telegram_bot_token)?);
    let ethereum = Arc::new(EthereumClient::new(&config.rpc_url)?);
    let prices = PriceService::new(
        &config.price_api_url,
        config.price_api_key.clone(),
        config.price_timeout,
    )?;

    tokio::spawn(check_chain(ethereum.clone()));

    let bot = LookupBot::new(telegram.clone(), MetadataService::new(ethereum), Arc::new(prices));

    run_until(&telegram, bot, async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    })
    .await;

    tracing::info!("Token Lookup Bot stopped");

    Ok(())
}

/// Warn when the RPC endpoint serves a chain other than the one prices are quoted for.
async fn check_chain(client: Arc<EthereumClient>) {
    match client.chain_id().await {
        Ok(ETHEREUM_MAINNET_CHAIN_ID) => {}
        Ok(chain_id) => tracing::warn!(
            chain_id,
            expected = ETHEREUM_MAINNET_CHAIN_ID,
            "RPC endpoint is not Ethereum mainnet; prices will not match metadata"
        ),
        Err(e) => tracing::warn!(error = %e, "Could not reach RPC endpoint at startup"),
    }
}
