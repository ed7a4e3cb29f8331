//! Collaborator wiring and the per-endpoint orchestration built on it.
//!
//! Handlers in `routes/` only parse parameters and map results to responses;
//! which collaborators are called, in what order, and how their results are
//! merged lives here.

use std::sync::Arc;

use anyhow::Context;

use storefront_core::{
    Ad, AddItemRequest, Address, Cart, CartItem, CheckoutResponse, EnrichedCart, EnrichedCartItem,
    EnrichedOrderItem, Money, OrderItem, PlaceOrderRequest, PricedProduct,
};
use storefront_enrichment::{CatalogEnricher, CurrencyNormalizer, EnrichmentPolicy, fan_out};
use storefront_gateways::{
    AdGateway, CartGateway, CatalogGateway, CheckoutGateway, CurrencyGateway, GatewayError,
    GatewayResult, InMemoryAds, InMemoryCartStore, InMemoryCatalog, InMemoryCheckout,
    InMemoryCurrency, InMemoryRecommendations, InMemoryShipping, RecommendationGateway,
    ShippingGateway,
};

use crate::config::ApiConfig;

/// One handle per downstream collaborator.
#[derive(Clone)]
pub struct Gateways {
    pub cart: Arc<dyn CartGateway>,
    pub catalog: Arc<dyn CatalogGateway>,
    pub currency: Arc<dyn CurrencyGateway>,
    pub checkout: Arc<dyn CheckoutGateway>,
    pub shipping: Arc<dyn ShippingGateway>,
    pub recommendations: Arc<dyn RecommendationGateway>,
    pub ads: Arc<dyn AdGateway>,
}

impl Gateways {
    /// Every collaborator in memory, the way local runs and tests use them.
    pub fn in_memory(catalog: InMemoryCatalog) -> Self {
        let cart: Arc<dyn CartGateway> = Arc::new(InMemoryCartStore::new());
        let catalog: Arc<dyn CatalogGateway> = Arc::new(catalog);
        let currency: Arc<dyn CurrencyGateway> = Arc::new(InMemoryCurrency::new());
        let shipping: Arc<dyn ShippingGateway> = Arc::new(InMemoryShipping::new());
        let checkout: Arc<dyn CheckoutGateway> = Arc::new(InMemoryCheckout::new(
            cart.clone(),
            catalog.clone(),
            currency.clone(),
            shipping.clone(),
        ));
        let recommendations: Arc<dyn RecommendationGateway> =
            Arc::new(InMemoryRecommendations::new(catalog.clone()));

        Self {
            cart,
            catalog,
            currency,
            checkout,
            shipping,
            recommendations,
            ads: Arc::new(InMemoryAds::new()),
        }
    }
}

#[derive(Clone)]
pub struct AppServices {
    gateways: Gateways,
    enricher: CatalogEnricher,
    policy: EnrichmentPolicy,
}

/// In-memory wiring (dev/test), seeded from the configured catalog.
pub fn build_services(config: &ApiConfig) -> anyhow::Result<AppServices> {
    let catalog = match &config.catalog_path {
        Some(path) => InMemoryCatalog::from_path(path)
            .with_context(|| format!("loading catalog from {}", path.display()))?,
        None => InMemoryCatalog::demo().context("loading bundled catalog")?,
    };
    tracing::info!(products = catalog.ids().len(), "in-memory collaborators ready");
    Ok(AppServices::new(Gateways::in_memory(catalog), config.policy.clone()))
}

impl AppServices {
    pub fn new(gateways: Gateways, policy: EnrichmentPolicy) -> Self {
        let enricher = CatalogEnricher::new(
            gateways.catalog.clone(),
            CurrencyNormalizer::new(gateways.currency.clone()),
        );
        Self {
            gateways,
            enricher,
            policy,
        }
    }

    // -------------------------
    // Cart
    // -------------------------

    /// The session's cart with every line priced in the requested currency.
    pub async fn cart_view(
        &self,
        session_id: &str,
        currency: Option<&str>,
    ) -> GatewayResult<EnrichedCart> {
        let currency = self.policy.currency.catalog_currency(currency);
        let cart = self.gateways.cart.get_cart(session_id).await?;
        tracing::debug!(session_id, lines = cart.items.len(), currency, "enriching cart");

        let items = fan_out(cart.items, |item| async move {
            let product = self.enricher.get_product(&item.product_id, currency).await?;
            Ok::<_, GatewayError>(EnrichedCartItem::join(item, product))
        })
        .await?;

        Ok(EnrichedCart {
            user_id: cart.user_id,
            items,
        })
    }

    /// Adds the item and returns the cart as stored (not enriched).
    pub async fn add_to_cart(&self, request: AddItemRequest) -> GatewayResult<Cart> {
        self.gateways
            .cart
            .add_item(&request.user_id, request.item)
            .await?;
        self.gateways.cart.get_cart(&request.user_id).await
    }

    pub async fn empty_cart(&self, user_id: &str) -> GatewayResult<()> {
        self.gateways.cart.empty_cart(user_id).await
    }

    // -------------------------
    // Checkout
    // -------------------------

    /// Places the order and prices each order line; `cost` and every other
    /// order field come back exactly as the checkout collaborator sent them.
    pub async fn checkout(
        &self,
        request: PlaceOrderRequest,
        currency: Option<&str>,
    ) -> GatewayResult<CheckoutResponse> {
        let currency = self.policy.currency.catalog_currency(currency);
        let (items, order) = self.gateways.checkout.place_order(request).await?.take_items();
        tracing::debug!(order_id = %order.order_id, lines = items.len(), currency, "enriching order");

        let items = fan_out(items, |OrderItem { item, cost }| async move {
            let product = self.enricher.get_product(&item.product_id, currency).await?;
            Ok::<_, GatewayError>(EnrichedOrderItem {
                cost,
                item: EnrichedCartItem::join(item, product),
            })
        })
        .await?;

        Ok(order.with_enriched_items(items))
    }

    // -------------------------
    // Products
    // -------------------------

    pub async fn product(&self, id: &str, currency: Option<&str>) -> GatewayResult<PricedProduct> {
        let currency = self.policy.currency.catalog_currency(currency);
        self.enricher.get_product(id, currency).await
    }

    pub async fn products(&self, currency: Option<&str>) -> GatewayResult<Vec<PricedProduct>> {
        let currency = self.policy.currency.catalog_currency(currency);
        self.enricher.list_products(currency).await
    }

    // -------------------------
    // Recommendations
    // -------------------------

    /// Ranked recommendations, cut to `max_recommendations` before any
    /// catalog lookup, then priced in rank order.
    pub async fn recommendations(
        &self,
        session_id: &str,
        product_ids: &[String],
        currency: Option<&str>,
    ) -> GatewayResult<Vec<PricedProduct>> {
        let currency = self.policy.currency.catalog_currency(currency);
        let ranked = self
            .gateways
            .recommendations
            .list_recommendations(session_id, product_ids)
            .await?;
        tracing::debug!(
            candidates = ranked.len(),
            limit = self.policy.max_recommendations,
            "enriching recommendations"
        );

        let top = ranked.into_iter().take(self.policy.max_recommendations);
        fan_out(top, |id| async move {
            self.enricher.get_product(&id, currency).await
        })
        .await
    }

    // -------------------------
    // Shipping / currency / ads
    // -------------------------

    pub async fn shipping_quote(
        &self,
        items: &[CartItem],
        address: &Address,
        currency: Option<&str>,
    ) -> GatewayResult<Money> {
        let currency = self.policy.currency.shipping_currency(currency);
        let cost_usd = self.gateways.shipping.get_quote(items, address).await?;
        self.enricher.normalizer().convert(&cost_usd, currency).await
    }

    pub async fn currencies(&self) -> GatewayResult<Vec<String>> {
        self.enricher.normalizer().supported_currencies().await
    }

    pub async fn ads(&self, context_keys: &[String]) -> GatewayResult<Vec<Ad>> {
        self.gateways.ads.list_ads(context_keys).await
    }
}
