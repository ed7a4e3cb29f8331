//! Aggregation & enrichment: the part of the BFF that turns collaborator
//! results into priced response documents.
//!
//! - [`CurrencyNormalizer`]: the one way an amount changes currency
//! - [`CatalogEnricher`]: the one place conversion policy is applied to products
//! - [`fan_out`]: concurrent, order-preserving, all-or-nothing per-item calls
//! - [`EnrichmentPolicy`]: per-endpoint currency defaults and list limits

pub mod catalog;
pub mod currency;
pub mod fanout;
pub mod policy;

pub use catalog::CatalogEnricher;
pub use currency::CurrencyNormalizer;
pub use fanout::fan_out;
pub use policy::{CurrencyPolicy, EnrichmentPolicy, MAX_RECOMMENDATIONS};
