//! Inbound message classification.
//!
//! Turns raw chat text into either a bot command or a validated,
//! checksum-normalized contract address.

use std::fmt;

use alloy::primitives::Address;

use crate::error::ClassificationError;

/// Length of a `0x`-prefixed hex address.
pub const ADDRESS_TEXT_LEN: usize = 42;

/// A contract address that passed syntax and checksum validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContractAddress(Address);

impl ContractAddress {
    /// The raw 20-byte address.
    pub fn address(&self) -> Address {
        self.0
    }

    /// Canonical EIP-55 mixed-case representation.
    pub fn checksummed(&self) -> String {
        self.0.to_checksum(None)
    }
}

impl fmt::Display for ContractAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.checksummed())
    }
}

/// What an inbound message asks the bot to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `/start` or `/help`: reply with usage text.
    Help,
    /// Look up the token at this address.
    Lookup(ContractAddress),
}

/// Validate text as an Ethereum address.
///
/// Accepts all-lowercase and all-uppercase hex bodies as-is; a mixed-case
/// body must match its EIP-55 checksum exactly.
pub fn classify(text: &str) -> Result<ContractAddress, ClassificationError> {
    let trimmed = text.trim();

    if !trimmed.starts_with("0x") || trimmed.chars().count() != ADDRESS_TEXT_LEN {
        return Err(ClassificationError::MalformedLength);
    }

    let address: Address = trimmed.parse().map_err(|_| ClassificationError::InvalidAddress)?;

    let body = &trimmed[2..];
    let has_lower = body.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = body.chars().any(|c| c.is_ascii_uppercase());
    if has_lower && has_upper && address.to_checksum(None) != trimmed {
        return Err(ClassificationError::InvalidAddress);
    }

    Ok(ContractAddress(address))
}

/// Interpret a chat message, recognizing help commands before address validation.
pub fn parse_message(text: &str) -> Result<Command, ClassificationError> {
    let trimmed = text.trim();

    // Group chats append the bot username, e.g. `/help@token_lookup_bot`.
    let command = trimmed.split('@').next().unwrap_or(trimmed);
    if matches!(command, "/start" | "/help") {
        return Ok(Command::Help);
    }

    classify(trimmed).map(Command::Lookup)
}
