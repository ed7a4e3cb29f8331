use std::sync::Arc;

use async_trait::async_trait;

use crate::r#trait::{CatalogGateway, GatewayResult, RecommendationGateway};

/// Recommends every catalog product the shopper is not already looking at,
/// in catalog order.
pub struct InMemoryRecommendations {
    catalog: Arc<dyn CatalogGateway>,
}

impl InMemoryRecommendations {
    pub fn new(catalog: Arc<dyn CatalogGateway>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl RecommendationGateway for InMemoryRecommendations {
    async fn list_recommendations(
        &self,
        _user_id: &str,
        product_ids: &[String],
    ) -> GatewayResult<Vec<String>> {
        let products = self.catalog.list_products().await?;
        Ok(products
            .into_iter()
            .map(|p| p.id)
            .filter(|id| !product_ids.contains(id))
            .collect())
    }
}
