//! Currency normalization.

use std::sync::Arc;

use storefront_core::Money;
use storefront_gateways::{CurrencyGateway, GatewayResult};

/// Converts amounts between currencies through the currency collaborator.
///
/// Never mutates its input. Converting into the amount's own currency returns
/// a copy without calling the collaborator.
#[derive(Clone)]
pub struct CurrencyNormalizer {
    gateway: Arc<dyn CurrencyGateway>,
}

impl CurrencyNormalizer {
    pub fn new(gateway: Arc<dyn CurrencyGateway>) -> Self {
        Self { gateway }
    }

    /// Collaborator errors (e.g. unknown code) are returned untranslated.
    pub async fn convert(&self, amount: &Money, target: &str) -> GatewayResult<Money> {
        if amount.is_in(target) {
            return Ok(amount.clone());
        }
        self.gateway.convert(amount, target).await
    }

    pub async fn supported_currencies(&self) -> GatewayResult<Vec<String>> {
        self.gateway.supported_currencies().await
    }
}
