//! Ethereum RPC client.

use alloy::{
    network::Ethereum,
    primitives::Address,
    providers::{Provider, ProviderBuilder, RootProvider},
};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::OnceCell;

use crate::{
    error::{AppError, ReadError, Result},
    ethereum::contracts::erc20::IERC20,
};

/// Type alias for the HTTP provider.
pub type HttpProvider = RootProvider<Ethereum>;

/// Read-only access to the ERC20 metadata surface of a contract.
///
/// Each method is a single independent call; implementations must not
/// let the failure of one read influence another.
#[async_trait]
pub trait TokenReader: Send + Sync {
    /// Call `name()` on the token contract.
    async fn name(&self, token: Address) -> std::result::Result<String, ReadError>;

    /// Call `symbol()` on the token contract.
    async fn symbol(&self, token: Address) -> std::result::Result<String, ReadError>;

    /// Call `decimals()` on the token contract.
    async fn decimals(&self, token: Address) -> std::result::Result<u8, ReadError>;
}

/// Ethereum RPC client wrapper with lazy initialization.
#[derive(Clone)]
pub struct EthereumClient {
    /// The underlying provider.
    provider: Arc<HttpProvider>,
    /// RPC URL for logging.
    rpc_url: String,
    /// Lazily initialized chain ID.
    chain_id: Arc<OnceCell<u64>>,
}

impl EthereumClient {
    /// Create a new Ethereum client.
    ///
    /// Note: This does NOT make any network calls. The connection is
    /// established lazily when the first operation is performed.
    pub fn new(rpc_url: &str) -> Result<Self> {
        let url = rpc_url
            .parse()
            .map_err(|_| AppError::Config(format!("Invalid RPC URL: {}", rpc_url)))?;

        #[allow(deprecated)]
        let provider = ProviderBuilder::new().connect_http(url).root().clone();

        tracing::info!(rpc_url = %rpc_url, "Ethereum client created (lazy initialization)");

        Ok(Self {
            provider: Arc::new(provider),
            rpc_url: rpc_url.to_string(),
            chain_id: Arc::new(OnceCell::new()),
        })
    }

    /// Get the chain ID (fetches from network on first call).
    pub async fn chain_id(&self) -> Result<u64> {
        self.chain_id
            .get_or_try_init(|| async {
                let chain_id = self.provider.get_chain_id().await?;
                tracing::info!(chain_id = chain_id, rpc_url = %self.rpc_url, "Connected to Ethereum node");
                Ok(chain_id)
            })
            .await
            .copied()
    }

    /// Get the underlying provider.
    pub fn provider(&self) -> &HttpProvider {
        &self.provider
    }

    fn erc20(&self, token: Address) -> IERC20::IERC20Instance<HttpProvider> {
        IERC20::new(token, self.provider().clone())
    }
}

#[async_trait]
impl TokenReader for EthereumClient {
    async fn name(&self, token: Address) -> std::result::Result<String, ReadError> {
        Ok(self.erc20(token).name().call().await?)
    }

    async fn symbol(&self, token: Address) -> std::result::Result<String, ReadError> {
        Ok(self.erc20(token).symbol().call().await?)
    }

    async fn decimals(&self, token: Address) -> std::result::Result<u8, ReadError> {
        Ok(self.erc20(token).decimals().call().await?)
    }
}
