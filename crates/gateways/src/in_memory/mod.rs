//! In-memory collaborators.
//!
//! Intended for local runs and tests. State lives behind `RwLock`s and is lost
//! on restart. Test hooks (`lookups()`, `conversions()`, `fail_with()`) let
//! callers observe and break the collaborators without a mocking framework.

mod ads;
mod cart;
mod catalog;
mod checkout;
mod currency;
mod recommendations;
mod shipping;

pub use ads::InMemoryAds;
pub use cart::InMemoryCartStore;
pub use catalog::{CatalogLoadError, InMemoryCatalog};
pub use checkout::InMemoryCheckout;
pub use currency::InMemoryCurrency;
pub use recommendations::InMemoryRecommendations;
pub use shipping::InMemoryShipping;

use crate::r#trait::GatewayError;

fn poisoned(what: &str) -> GatewayError {
    GatewayError::unavailable(format!("{what}: lock poisoned"))
}
