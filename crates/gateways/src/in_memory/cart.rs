use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use storefront_core::{Cart, CartItem};

use super::poisoned;
use crate::r#trait::{CartGateway, GatewayResult};

/// In-memory cart store keyed by user (session) id.
///
/// Adding a product that is already in the cart increases its quantity; line
/// order is first-added order.
#[derive(Debug, Default)]
pub struct InMemoryCartStore {
    carts: RwLock<HashMap<String, Vec<CartItem>>>,
}

impl InMemoryCartStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CartGateway for InMemoryCartStore {
    async fn get_cart(&self, user_id: &str) -> GatewayResult<Cart> {
        let carts = self.carts.read().map_err(|_| poisoned("cart store"))?;
        Ok(Cart {
            user_id: user_id.to_string(),
            items: carts.get(user_id).cloned().unwrap_or_default(),
        })
    }

    async fn add_item(&self, user_id: &str, item: CartItem) -> GatewayResult<()> {
        item.validate()?;

        let mut carts = self.carts.write().map_err(|_| poisoned("cart store"))?;
        let lines = carts.entry(user_id.to_string()).or_default();
        match lines.iter_mut().find(|l| l.product_id == item.product_id) {
            Some(line) => line.quantity = line.quantity.saturating_add(item.quantity),
            None => lines.push(item),
        }
        Ok(())
    }

    async fn empty_cart(&self, user_id: &str) -> GatewayResult<()> {
        let mut carts = self.carts.write().map_err(|_| poisoned("cart store"))?;
        carts.remove(user_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r#trait::GatewayError;

    #[tokio::test]
    async fn unknown_user_has_empty_cart() {
        let store = InMemoryCartStore::new();
        let cart = store.get_cart("nobody").await.unwrap();
        assert_eq!(cart, Cart::empty("nobody"));
    }

    #[tokio::test]
    async fn add_item_merges_quantities_and_keeps_order() {
        let store = InMemoryCartStore::new();
        store.add_item("s1", CartItem::new("P1", 1)).await.unwrap();
        store.add_item("s1", CartItem::new("P2", 3)).await.unwrap();
        store.add_item("s1", CartItem::new("P1", 2)).await.unwrap();

        let cart = store.get_cart("s1").await.unwrap();
        assert_eq!(
            cart.items,
            vec![CartItem::new("P1", 3), CartItem::new("P2", 3)]
        );
    }

    #[tokio::test]
    async fn add_item_rejects_zero_quantity() {
        let store = InMemoryCartStore::new();
        let err = store.add_item("s1", CartItem::new("P1", 0)).await.unwrap_err();
        assert!(matches!(err, GatewayError::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn empty_cart_is_idempotent() {
        let store = InMemoryCartStore::new();
        store.add_item("s1", CartItem::new("P1", 1)).await.unwrap();
        store.empty_cart("s1").await.unwrap();
        store.empty_cart("s1").await.unwrap();
        assert!(store.get_cart("s1").await.unwrap().items.is_empty());
    }
}
