use async_trait::async_trait;

use storefront_core::{Address, CartItem, Money};

use crate::r#trait::{GatewayResult, ShippingGateway};

/// Flat-rate shipping quoter.
///
/// An empty shipment is free; anything else costs `flat_rate` regardless of
/// weight or destination.
#[derive(Debug, Clone)]
pub struct InMemoryShipping {
    flat_rate: Money,
}

impl Default for InMemoryShipping {
    fn default() -> Self {
        Self {
            flat_rate: Money {
                currency_code: storefront_core::USD.to_string(),
                units: 8,
                nanos: 990_000_000,
            },
        }
    }
}

impl InMemoryShipping {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ShippingGateway for InMemoryShipping {
    async fn get_quote(&self, items: &[CartItem], _address: &Address) -> GatewayResult<Money> {
        for item in items {
            item.validate()?;
        }
        let count: u64 = items.iter().map(|i| u64::from(i.quantity)).sum();
        if count == 0 {
            return Ok(Money::zero(storefront_core::USD));
        }
        Ok(self.flat_rate.clone())
    }
}
