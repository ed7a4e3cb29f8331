use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use storefront_core::{Money, OrderItem, OrderResult, PlaceOrderRequest, USD};

use crate::r#trait::{
    CartGateway, CatalogGateway, CheckoutGateway, CurrencyGateway, GatewayError, GatewayResult,
    ShippingGateway,
};

/// Order placement over the other in-memory collaborators.
///
/// Prices each cart line in the shopper's currency (unit price, not line
/// total), quotes and converts shipping, then empties the cart. Payment and
/// confirmation email are accepted without being processed.
pub struct InMemoryCheckout {
    cart: Arc<dyn CartGateway>,
    catalog: Arc<dyn CatalogGateway>,
    currency: Arc<dyn CurrencyGateway>,
    shipping: Arc<dyn ShippingGateway>,
}

impl InMemoryCheckout {
    pub fn new(
        cart: Arc<dyn CartGateway>,
        catalog: Arc<dyn CatalogGateway>,
        currency: Arc<dyn CurrencyGateway>,
        shipping: Arc<dyn ShippingGateway>,
    ) -> Self {
        Self {
            cart,
            catalog,
            currency,
            shipping,
        }
    }

    async fn to_user_currency(&self, amount: &Money, code: &str) -> GatewayResult<Money> {
        if amount.is_in(code) {
            return Ok(amount.clone());
        }
        self.currency.convert(amount, code).await
    }
}

#[async_trait]
impl CheckoutGateway for InMemoryCheckout {
    async fn place_order(&self, request: PlaceOrderRequest) -> GatewayResult<OrderResult> {
        let currency = if request.user_currency.trim().is_empty() {
            USD
        } else {
            request.user_currency.as_str()
        };

        let cart = self.cart.get_cart(&request.user_id).await?;
        if cart.items.is_empty() {
            return Err(GatewayError::invalid_argument(format!(
                "cart for user {:?} is empty",
                request.user_id
            )));
        }

        let mut items = Vec::with_capacity(cart.items.len());
        for item in &cart.items {
            let product = self.catalog.get_product(&item.product_id).await?;
            let cost = self.to_user_currency(&product.price_usd, currency).await?;
            items.push(OrderItem {
                item: item.clone(),
                cost,
            });
        }

        let shipping_usd = self
            .shipping
            .get_quote(&cart.items, &request.address)
            .await?;
        let shipping_cost = self.to_user_currency(&shipping_usd, currency).await?;

        self.cart.empty_cart(&request.user_id).await?;

        let order = OrderResult {
            order_id: Uuid::now_v7().to_string(),
            shipping_tracking_id: Uuid::now_v7().to_string(),
            shipping_cost,
            shipping_address: request.address,
            items,
        };
        tracing::info!(
            order_id = %order.order_id,
            user_id = %request.user_id,
            lines = order.items.len(),
            "order placed"
        );
        Ok(order)
    }
}
