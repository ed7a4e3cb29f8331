use async_trait::async_trait;
use thiserror::Error;

use storefront_core::{
    Ad, Address, Cart, CartItem, DomainError, Money, OrderResult, PlaceOrderRequest, Product,
};

pub type GatewayResult<T> = Result<T, GatewayError>;

/// Failure reported by a downstream collaborator.
///
/// These are propagated untranslated through the enrichment layer; the HTTP
/// layer decides the status code.
///
/// ## Error Categories
///
/// - **NotFound**: the requested product/cart/order does not exist upstream
/// - **InvalidArgument**: the collaborator rejected the input (e.g. unknown currency code)
/// - **Unavailable**: the call failed or timed out
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GatewayError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("upstream unavailable: {0}")]
    Unavailable(String),
}

impl GatewayError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }
}

impl From<DomainError> for GatewayError {
    fn from(err: DomainError) -> Self {
        Self::InvalidArgument(err.to_string())
    }
}

/// Cart store. Owns cart state; the BFF only reads and forwards mutations.
#[async_trait]
pub trait CartGateway: Send + Sync {
    /// Unknown users have an empty cart.
    async fn get_cart(&self, user_id: &str) -> GatewayResult<Cart>;

    async fn add_item(&self, user_id: &str, item: CartItem) -> GatewayResult<()>;

    /// Emptying an already-empty cart succeeds.
    async fn empty_cart(&self, user_id: &str) -> GatewayResult<()>;
}

/// Product catalog. Prices are always USD.
#[async_trait]
pub trait CatalogGateway: Send + Sync {
    async fn get_product(&self, id: &str) -> GatewayResult<Product>;

    /// The whole catalog, in catalog order.
    async fn list_products(&self) -> GatewayResult<Vec<Product>>;
}

/// Currency converter.
#[async_trait]
pub trait CurrencyGateway: Send + Sync {
    async fn convert(&self, from: &Money, to_code: &str) -> GatewayResult<Money>;

    async fn supported_currencies(&self) -> GatewayResult<Vec<String>>;
}

/// Order placement.
#[async_trait]
pub trait CheckoutGateway: Send + Sync {
    async fn place_order(&self, request: PlaceOrderRequest) -> GatewayResult<OrderResult>;
}

/// Shipping quoter.
#[async_trait]
pub trait ShippingGateway: Send + Sync {
    /// Quote in USD.
    async fn get_quote(&self, items: &[CartItem], address: &Address) -> GatewayResult<Money>;
}

/// Recommendation engine.
#[async_trait]
pub trait RecommendationGateway: Send + Sync {
    /// Product ids ranked by relevance, most relevant first.
    async fn list_recommendations(
        &self,
        user_id: &str,
        product_ids: &[String],
    ) -> GatewayResult<Vec<String>>;
}

/// Ad server.
#[async_trait]
pub trait AdGateway: Send + Sync {
    async fn list_ads(&self, context_keys: &[String]) -> GatewayResult<Vec<Ad>>;
}
