//! Process configuration, read from the environment.

use std::path::PathBuf;

use storefront_enrichment::{CurrencyPolicy, EnrichmentPolicy, MAX_RECOMMENDATIONS};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: String,
    pub policy: EnrichmentPolicy,
    /// JSON catalog seeding the in-memory catalog; `None` uses the bundled one.
    pub catalog_path: Option<PathBuf>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            policy: EnrichmentPolicy::default(),
            catalog_path: None,
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unset keys take their defaults; unparseable
    /// values are logged and also take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let bind_addr = lookup("BIND_ADDR").unwrap_or(defaults.bind_addr);

        let shipping_default = lookup("SHIPPING_DEFAULT_CURRENCY")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.policy.currency.shipping_default);

        // Empty is meaningful here: no conversion for catalog flows.
        let catalog_default = lookup("CATALOG_DEFAULT_CURRENCY")
            .map(|v| v.trim().to_string())
            .unwrap_or(defaults.policy.currency.catalog_default);

        let max_recommendations = match lookup("MAX_RECOMMENDATIONS") {
            None => MAX_RECOMMENDATIONS,
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) => n,
                Err(e) => {
                    tracing::warn!(value = %raw, error = %e, "invalid MAX_RECOMMENDATIONS; using default");
                    MAX_RECOMMENDATIONS
                }
            },
        };

        let catalog_path = lookup("CATALOG_PATH")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Self {
            bind_addr,
            policy: EnrichmentPolicy {
                currency: CurrencyPolicy {
                    shipping_default,
                    catalog_default,
                },
                max_recommendations,
            },
            catalog_path,
        }
    }
}
