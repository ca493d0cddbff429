//! Ethereum network and service endpoint constants.

// ============================================================================
// Chain
// ============================================================================

/// Ethereum Mainnet chain ID.
pub const ETHEREUM_MAINNET_CHAIN_ID: u64 = 1;

/// CoinGecko asset platform identifier for Ethereum Mainnet.
pub const COINGECKO_PLATFORM_ID: &str = "ethereum";

/// Fiat currency prices are quoted in.
pub const QUOTE_CURRENCY: &str = "usd";

// ============================================================================
// Default Endpoints
// ============================================================================

/// Public Ethereum Mainnet JSON-RPC endpoint used when none is configured.
pub const DEFAULT_RPC_URL: &str = "https://ethereum-rpc.publicnode.com";

/// CoinGecko public API base URL.
pub const DEFAULT_COINGECKO_API_URL: &str = "https://api.coingecko.com/api/v3";

/// Telegram Bot API base URL.
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// Token page on the block explorer, suffixed with the checksummed address.
pub const EXPLORER_TOKEN_URL: &str = "https://etherscan.io/token/";
