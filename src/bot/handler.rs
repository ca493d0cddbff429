//! Per-message lookup pipeline.

use std::sync::Arc;

use crate::{
    bot::{
        render::{failure_reply, help_reply, rejection_reply, render},
        transport::{ChatId, ChatTransport},
    },
    error::{ClassificationError, Result},
    services::{MetadataService, PriceFetcher},
    types::{parse_message, Command, ContractAddress},
};

/// How a single inbound message was resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Replied with usage text.
    Help,
    /// Input was not a usable address; a corrective message was sent.
    Rejected(ClassificationError),
    /// Lookup completed and the provisional message now holds the result.
    Rendered(ContractAddress),
    /// Lookup failed outright; the provisional message holds a failure notice.
    Failed(ContractAddress),
}

/// Token lookup bot.
///
/// Holds the long-lived clients; each call to [`LookupBot::handle_message`]
/// is independent and shares no mutable state with other calls.
#[derive(Clone)]
pub struct LookupBot {
    transport: Arc<dyn ChatTransport>,
    metadata_service: MetadataService,
    price_fetcher: Arc<dyn PriceFetcher>,
}

impl LookupBot {
    /// Create a bot from explicitly constructed collaborators.
    pub fn new(
        transport: Arc<dyn ChatTransport>,
        metadata_service: MetadataService,
        price_fetcher: Arc<dyn PriceFetcher>,
    ) -> Self {
        Self { transport, metadata_service, price_fetcher }
    }

    /// Handle one inbound chat message end to end.
    ///
    /// Only transport failures are returned as errors; lookup problems are
    /// reported to the chat and reflected in the [`Outcome`].
    pub async fn handle_message(&self, chat_id: ChatId, text: &str) -> Result<Outcome> {
        let address = match parse_message(text) {
            Ok(Command::Help) => {
                self.transport.send_message(chat_id, &help_reply()).await?;
                return Ok(Outcome::Help);
            }
            Ok(Command::Lookup(address)) => address,
            Err(err) => {
                tracing::debug!(chat_id, reason = %err, "Rejected message");
                self.transport.send_message(chat_id, &rejection_reply(err)).await?;
                return Ok(Outcome::Rejected(err));
            }
        };

        tracing::info!(chat_id, token = %address, "Token lookup requested");

        let handle = self.transport.acknowledge(chat_id).await?;

        let (metadata, price) = tokio::join!(
            self.metadata_service.fetch_metadata(address.address()),
            self.price_fetcher.fetch_price(address.address()),
        );

        let price = price.unwrap_or_else(|e| {
            tracing::warn!(token = %address, error = %e, "Price lookup failed");
            None
        });

        match metadata {
            Ok(metadata) => {
                let reply = render(address, &metadata, price);
                if let Err(e) = self.transport.finalize(handle, &reply).await {
                    // Never leave the loading message behind.
                    tracing::error!(
                        token = %address,
                        error = %e,
                        "Failed to deliver lookup result"
                    );
                    self.transport.finalize(handle, &failure_reply()).await?;
                    return Ok(Outcome::Failed(address));
                }
                Ok(Outcome::Rendered(address))
            }
            Err(e) => {
                tracing::error!(token = %address, error = %e, "Token lookup failed");
                self.transport.finalize(handle, &failure_reply()).await?;
                Ok(Outcome::Failed(address))
            }
        }
    }

    /// Handle a message and log, rather than return, any transport failure.
    pub async fn dispatch(&self, chat_id: ChatId, text: &str) {
        if let Err(e) = self.handle_message(chat_id, text).await {
            tracing::error!(chat_id, error = %e, "Failed to deliver reply");
        }
    }
}
