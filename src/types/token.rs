//! Token-related types.

use rust_decimal::{prelude::FromPrimitive, Decimal};
use serde::{Deserialize, Serialize};

/// ERC20 metadata read from a contract.
///
/// Every field is populated independently; non-standard tokens routinely
/// omit one or more of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetadata {
    /// Token name (e.g., "USD Coin").
    pub name: Option<String>,
    /// Token symbol (e.g., "USDC").
    pub symbol: Option<String>,
    /// Number of decimals.
    pub decimals: Option<u8>,
}

/// USD spot price; `None` when the token is unlisted or the lookup failed.
pub type PriceQuote = Option<f64>;

/// Format a USD price for display.
///
/// Prices of one dollar or more get two decimals and thousands separators;
/// smaller prices keep four significant digits so micro-cap tokens stay readable.
pub fn format_usd(price: f64) -> String {
    if !price.is_finite() {
        return format!("${price}");
    }

    let Some(value) = Decimal::from_f64(price) else {
        // Outside rust_decimal's range in either direction.
        return if price.abs() < 1.0 {
            format!("${price:.3e}")
        } else {
            with_cents(&format!("{price:.2}"))
        };
    };

    if value.is_zero() {
        return if price == 0.0 { "$0".to_string() } else { format!("${price:.3e}") };
    }

    if value < Decimal::ONE {
        let rounded = value.round_sf(4).unwrap_or(value).normalize();
        if rounded < Decimal::ONE {
            return format!("${rounded}");
        }
    }

    with_cents(&format!("{:.2}", value.round_dp(2)))
}

fn with_cents(fixed: &str) -> String {
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed, "00"));
    format!("${}.{}", group_thousands(integer), fraction)
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
