//! Ethereum interaction module.
//!
//! Contains the Ethereum client, network constants, and contract bindings.

pub mod client;
pub mod constants;
pub mod contracts;

pub use client::{EthereumClient, HttpProvider, TokenReader};
