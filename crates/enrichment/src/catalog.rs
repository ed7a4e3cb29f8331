//! Catalog enrichment: USD catalog records in, priced products out.

use std::sync::Arc;

use storefront_core::{PricedProduct, Product, USD};
use storefront_gateways::{CatalogGateway, GatewayResult};

use crate::currency::CurrencyNormalizer;
use crate::fanout::fan_out;

/// Resolves catalog products into a requested currency.
///
/// Every priced product the BFF returns goes through here, so cart, checkout,
/// product and recommendation responses cannot disagree on conversion.
///
/// Currency resolution:
/// - `""` or `"USD"`: the catalog's USD price is kept and the converter is not called
/// - anything else: the USD price is converted; unknown codes fail with the
///   collaborator's error
#[derive(Clone)]
pub struct CatalogEnricher {
    catalog: Arc<dyn CatalogGateway>,
    normalizer: CurrencyNormalizer,
}

impl CatalogEnricher {
    pub fn new(catalog: Arc<dyn CatalogGateway>, normalizer: CurrencyNormalizer) -> Self {
        Self {
            catalog,
            normalizer,
        }
    }

    pub fn normalizer(&self) -> &CurrencyNormalizer {
        &self.normalizer
    }

    /// Catalog not-found surfaces as `NotFound`; a failed conversion keeps its own error.
    pub async fn get_product(&self, id: &str, currency_code: &str) -> GatewayResult<PricedProduct> {
        let product = self.catalog.get_product(id).await?;
        self.price(product, currency_code).await
    }

    /// The whole catalog in catalog order, each entry priced like `get_product`.
    pub async fn list_products(&self, currency_code: &str) -> GatewayResult<Vec<PricedProduct>> {
        let products = self.catalog.list_products().await?;
        fan_out(products, |p| self.price(p, currency_code)).await
    }

    async fn price(&self, product: Product, currency_code: &str) -> GatewayResult<PricedProduct> {
        if currency_code.is_empty() || currency_code == USD {
            let price = product.price_usd.clone();
            return Ok(product.with_price(price));
        }
        let price = self
            .normalizer
            .convert(&product.price_usd, currency_code)
            .await?;
        Ok(product.with_price(price))
    }
}
