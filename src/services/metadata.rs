//! Token metadata lookup service.

use alloy::primitives::Address;
use std::sync::Arc;

use crate::{
    error::{AppError, ReadError, Result},
    ethereum::TokenReader,
    types::TokenMetadata,
};

/// Service for reading ERC20 metadata with per-field failure isolation.
#[derive(Clone)]
pub struct MetadataService {
    reader: Arc<dyn TokenReader>,
}

impl MetadataService {
    /// Create a new metadata service.
    pub fn new(reader: Arc<dyn TokenReader>) -> Self {
        Self { reader }
    }

    /// Read `name`, `symbol` and `decimals` concurrently.
    ///
    /// A failing read only blanks its own field. The whole lookup fails only
    /// when every read failed because the RPC endpoint could not be reached.
    pub async fn fetch_metadata(&self, token: Address) -> Result<TokenMetadata> {
        tracing::debug!(token = %token, "Fetching token metadata");

        let (name, symbol, decimals) = tokio::join!(
            self.reader.name(token),
            self.reader.symbol(token),
            self.reader.decimals(token),
        );

        if let (Err(name_err), Err(symbol_err), Err(decimals_err)) = (&name, &symbol, &decimals) {
            if name_err.is_unreachable()
                && symbol_err.is_unreachable()
                && decimals_err.is_unreachable()
            {
                return Err(AppError::Rpc(name_err.to_string()));
            }
        }

        Ok(TokenMetadata {
            name: settle(token, "name", name).and_then(non_blank),
            symbol: settle(token, "symbol", symbol).and_then(non_blank),
            decimals: settle(token, "decimals", decimals),
        })
    }
}

/// Collapse a single read into a present or absent field.
fn settle<T>(
    token: Address,
    field: &'static str,
    read: std::result::Result<T, ReadError>,
) -> Option<T> {
    match read {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::debug!(token = %token, field, error = %e, "Token field unavailable");
            None
        }
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim_matches(|c: char| c.is_whitespace() || c == '\0');
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;
    use async_trait::async_trait;

    const TOKEN: Address = address!("A0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48");

    /// Scripted reader returning a fixed outcome per field.
    struct StubReader {
        name: std::result::Result<String, ReadError>,
        symbol: std::result::Result<String, ReadError>,
        decimals: std::result::Result<u8, ReadError>,
    }

    impl StubReader {
        fn usdc() -> Self {
            Self { name: Ok("USD Coin".into()), symbol: Ok("USDC".into()), decimals: Ok(6) }
        }
    }

    #[async_trait]
    impl TokenReader for StubReader {
        async fn name(&self, _token: Address) -> std::result::Result<String, ReadError> {
            self.name.clone()
        }

        async fn symbol(&self, _token: Address) -> std::result::Result<String, ReadError> {
            self.symbol.clone()
        }

        async fn decimals(&self, _token: Address) -> std::result::Result<u8, ReadError> {
            self.decimals.clone()
        }
    }

    fn service(reader: StubReader) -> MetadataService {
        MetadataService::new(Arc::new(reader))
    }

    fn reverted() -> ReadError {
        ReadError::Reverted("execution reverted".into())
    }

    fn unreachable() -> ReadError {
        ReadError::Unreachable("connection refused".into())
    }

    #[tokio::test]
    async fn test_all_fields_present() {
        let metadata = service(StubReader::usdc()).fetch_metadata(TOKEN).await.unwrap();

        assert_eq!(metadata.name.as_deref(), Some("USD Coin"));
        assert_eq!(metadata.symbol.as_deref(), Some("USDC"));
        assert_eq!(metadata.decimals, Some(6));
    }

    #[tokio::test]
    async fn test_decimals_revert_is_isolated() {
        let reader = StubReader { decimals: Err(reverted()), ..StubReader::usdc() };
        let metadata = service(reader).fetch_metadata(TOKEN).await.unwrap();

        assert_eq!(metadata.name.as_deref(), Some("USD Coin"));
        assert_eq!(metadata.symbol.as_deref(), Some("USDC"));
        assert_eq!(metadata.decimals, None);
    }

    #[tokio::test]
    async fn test_name_decode_error_is_isolated() {
        let reader =
            StubReader { name: Err(ReadError::Decode("bytes32".into())), ..StubReader::usdc() };
        let metadata = service(reader).fetch_metadata(TOKEN).await.unwrap();

        assert_eq!(metadata.name, None);
        assert_eq!(metadata.symbol.as_deref(), Some("USDC"));
        assert_eq!(metadata.decimals, Some(6));
    }

    #[tokio::test]
    async fn test_all_reverted_is_empty_not_error() {
        let reader = StubReader {
            name: Err(reverted()),
            symbol: Err(reverted()),
            decimals: Err(reverted()),
        };
        let metadata = service(reader).fetch_metadata(TOKEN).await.unwrap();

        assert_eq!(metadata, TokenMetadata::default());
    }

    #[tokio::test]
    async fn test_single_unreachable_field_degrades() {
        let reader = StubReader { symbol: Err(unreachable()), ..StubReader::usdc() };
        let metadata = service(reader).fetch_metadata(TOKEN).await.unwrap();

        assert_eq!(metadata.symbol, None);
        assert_eq!(metadata.decimals, Some(6));
    }

    #[tokio::test]
    async fn test_endpoint_unreachable_is_systemic() {
        let reader = StubReader {
            name: Err(unreachable()),
            symbol: Err(unreachable()),
            decimals: Err(unreachable()),
        };
        let result = service(reader).fetch_metadata(TOKEN).await;

        assert!(matches!(result, Err(AppError::Rpc(_))));
    }

    #[tokio::test]
    async fn test_blank_strings_become_absent() {
        let reader = StubReader {
            name: Ok("Padded\0\0\0".into()),
            symbol: Ok("   ".into()),
            ..StubReader::usdc()
        };
        let metadata = service(reader).fetch_metadata(TOKEN).await.unwrap();

        assert_eq!(metadata.name.as_deref(), Some("Padded"));
        assert_eq!(metadata.symbol, None);
    }
}
