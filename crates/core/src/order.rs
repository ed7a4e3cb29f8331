//! Checkout: the order request, the placed order and its enriched response form.

use serde::{Deserialize, Serialize};

use crate::cart::{CartItem, EnrichedCartItem};
use crate::money::Money;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub zip_code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreditCardInfo {
    pub credit_card_number: String,
    pub credit_card_cvv: i32,
    pub credit_card_expiration_year: i32,
    pub credit_card_expiration_month: i32,
}

/// Body of `POST /api/checkout`, forwarded as-is to the checkout collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlaceOrderRequest {
    pub user_id: String,
    pub user_currency: String,
    pub address: Address,
    pub email: String,
    pub credit_card: CreditCardInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub item: CartItem,
    pub cost: Money,
}

/// A placed order as returned by the checkout collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResult {
    pub order_id: String,
    pub shipping_tracking_id: String,
    pub shipping_cost: Money,
    pub shipping_address: Address,
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

impl OrderResult {
    /// Split the order into its line items and the rest of the order.
    pub fn take_items(mut self) -> (Vec<OrderItem>, OrderResult) {
        let items = std::mem::take(&mut self.items);
        (items, self)
    }

    /// Rebuild the order around enriched lines; every other field is kept as-is.
    pub fn with_enriched_items(self, items: Vec<EnrichedOrderItem>) -> CheckoutResponse {
        CheckoutResponse {
            order_id: self.order_id,
            shipping_tracking_id: self.shipping_tracking_id,
            shipping_cost: self.shipping_cost,
            shipping_address: self.shipping_address,
            items,
        }
    }
}

/// An order line joined with its priced product; `cost` is the collaborator's, untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedOrderItem {
    pub cost: Money,
    pub item: EnrichedCartItem,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    pub order_id: String,
    pub shipping_tracking_id: String,
    pub shipping_cost: Money,
    pub shipping_address: Address,
    pub items: Vec<EnrichedOrderItem>,
}
