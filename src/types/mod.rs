//! Type definitions module.
//!
//! Contains shared types used across the application.

pub mod address;
pub mod token;

pub use address::*;
pub use token::*;
