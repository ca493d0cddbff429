//! Business logic services module.

pub mod metadata;
pub mod price;

pub use metadata::MetadataService;
pub use price::{PriceFetcher, PriceService};
