//! `storefront-core`: the storefront's data model.
//!
//! This crate contains **pure data** types shared by the collaborator gateways,
//! the enrichment layer and the HTTP API (no IO, no HTTP, no async).
//!
//! JSON field names are camelCase so responses match what the storefront UI
//! already consumes.

pub mod ad;
pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod order;

pub use ad::Ad;
pub use cart::{AddItemRequest, Cart, CartItem, EmptyCartRequest, EnrichedCart, EnrichedCartItem};
pub use catalog::{PricedProduct, Product};
pub use error::{DomainError, DomainResult};
pub use money::{Money, NANOS_PER_UNIT, USD};
pub use order::{
    Address, CheckoutResponse, CreditCardInfo, EnrichedOrderItem, OrderItem, OrderResult,
    PlaceOrderRequest,
};
