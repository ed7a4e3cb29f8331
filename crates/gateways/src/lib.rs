//! Collaborator boundary: the RPC services the storefront BFF talks to.
//!
//! `r#trait` holds one async trait per downstream service plus the shared
//! [`GatewayError`]. `in_memory` implements every trait without any network,
//! for local runs and tests. The wire protocol of the real services is not
//! modelled here; a networked client only has to implement the same traits.

pub mod in_memory;
pub mod r#trait;

pub use in_memory::{
    CatalogLoadError, InMemoryAds, InMemoryCartStore, InMemoryCatalog, InMemoryCheckout, InMemoryCurrency,
    InMemoryRecommendations, InMemoryShipping,
};
pub use r#trait::{
    AdGateway, CartGateway, CatalogGateway, CheckoutGateway, CurrencyGateway, GatewayError,
    GatewayResult, RecommendationGateway, ShippingGateway,
};
