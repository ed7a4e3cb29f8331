use std::path::Path;
use std::sync::{Mutex, RwLock};

use async_trait::async_trait;
use thiserror::Error;

use storefront_core::Product;

use super::poisoned;
use crate::r#trait::{CatalogGateway, GatewayError, GatewayResult};

const DEMO_CATALOG: &str = include_str!("../../data/products.json");

#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid catalog entry {id}: {reason}")]
    Invalid { id: String, reason: String },
}

/// In-memory product catalog.
///
/// Every `get_product` call is recorded so tests can assert exactly which ids
/// were looked up, and in how many calls.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    products: Vec<Product>,
    lookups: Mutex<Vec<String>>,
    failure: RwLock<Option<GatewayError>>,
}

impl InMemoryCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            ..Self::default()
        }
    }

    /// The bundled astronomy-shop catalog.
    pub fn demo() -> Result<Self, CatalogLoadError> {
        Self::from_json(DEMO_CATALOG)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogLoadError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        for p in &products {
            p.price_usd.validate().map_err(|e| CatalogLoadError::Invalid {
                id: p.id.clone(),
                reason: e.to_string(),
            })?;
            if !p.price_usd.is_in(storefront_core::USD) {
                return Err(CatalogLoadError::Invalid {
                    id: p.id.clone(),
                    reason: format!("price must be USD, got {}", p.price_usd.currency_code),
                });
            }
        }
        Ok(Self::new(products))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogLoadError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn ids(&self) -> Vec<String> {
        self.products.iter().map(|p| p.id.clone()).collect()
    }

    /// Ids passed to `get_product`, in call order.
    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().map(|l| l.clone()).unwrap_or_default()
    }

    /// Make every subsequent call fail with `err` (`None` restores normal behavior).
    pub fn fail_with(&self, err: Option<GatewayError>) {
        if let Ok(mut failure) = self.failure.write() {
            *failure = err;
        }
    }

    fn check_failure(&self) -> GatewayResult<()> {
        match &*self.failure.read().map_err(|_| poisoned("catalog"))? {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl CatalogGateway for InMemoryCatalog {
    async fn get_product(&self, id: &str) -> GatewayResult<Product> {
        self.lookups
            .lock()
            .map_err(|_| poisoned("catalog"))?
            .push(id.to_string());
        self.check_failure()?;

        self.products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| GatewayError::not_found(format!("product {id}")))
    }

    async fn list_products(&self) -> GatewayResult<Vec<Product>> {
        self.check_failure()?;
        Ok(self.products.clone())
    }
}
