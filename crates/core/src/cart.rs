//! Carts as owned by the cart store, and their enriched response form.

use serde::{Deserialize, Serialize};

use crate::catalog::PricedProduct;
use crate::error::{DomainError, DomainResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: String,
    #[serde(default)]
    pub quantity: u32,
}

impl CartItem {
    pub fn new(product_id: impl Into<String>, quantity: u32) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
        }
    }

    /// A line must name a product and carry a positive quantity.
    pub fn validate(&self) -> DomainResult<()> {
        if self.product_id.trim().is_empty() {
            return Err(DomainError::validation("productId cannot be empty"));
        }
        if self.quantity == 0 {
            return Err(DomainError::validation("quantity must be positive"));
        }
        Ok(())
    }
}

/// A user's cart. Item order is the cart store's order and is preserved.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub user_id: String,
    #[serde(default)]
    pub items: Vec<CartItem>,
}

impl Cart {
    pub fn empty(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            items: Vec::new(),
        }
    }
}

/// A cart line joined with its priced product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedCartItem {
    pub product_id: String,
    pub quantity: u32,
    pub product: PricedProduct,
}

impl EnrichedCartItem {
    pub fn join(item: CartItem, product: PricedProduct) -> Self {
        Self {
            product_id: item.product_id,
            quantity: item.quantity,
            product,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedCart {
    pub user_id: String,
    pub items: Vec<EnrichedCartItem>,
}

/// Body of `POST /api/cart`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddItemRequest {
    #[serde(default)]
    pub user_id: String,
    pub item: CartItem,
}

/// Body of `DELETE /api/cart`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmptyCartRequest {
    #[serde(default)]
    pub user_id: String,
}
