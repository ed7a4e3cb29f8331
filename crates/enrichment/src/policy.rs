//! Per-endpoint defaults.
//!
//! Endpoints deliberately disagree on what "no currency requested" means:
//! shipping quotes default to USD, while catalog-backed flows (products, cart,
//! checkout, recommendations) default to the empty code, which leaves catalog
//! prices in USD without calling the converter.

use storefront_core::USD;

/// Recommendations enriched per request; the ranked list is cut to this length
/// before any catalog lookup.
pub const MAX_RECOMMENDATIONS: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyPolicy {
    /// Used when a shipping request names no currency.
    pub shipping_default: String,
    /// Used when a catalog-backed request names no currency. Empty = no conversion.
    pub catalog_default: String,
}

impl Default for CurrencyPolicy {
    fn default() -> Self {
        Self {
            shipping_default: USD.to_string(),
            catalog_default: String::new(),
        }
    }
}

impl CurrencyPolicy {
    pub fn shipping_currency<'a>(&'a self, requested: Option<&'a str>) -> &'a str {
        resolve(requested, &self.shipping_default)
    }

    pub fn catalog_currency<'a>(&'a self, requested: Option<&'a str>) -> &'a str {
        resolve(requested, &self.catalog_default)
    }
}

fn resolve<'a>(requested: Option<&'a str>, default: &'a str) -> &'a str {
    match requested.map(str::trim) {
        Some(code) if !code.is_empty() => code,
        _ => default,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichmentPolicy {
    pub currency: CurrencyPolicy,
    pub max_recommendations: usize,
}

impl Default for EnrichmentPolicy {
    fn default() -> Self {
        Self {
            currency: CurrencyPolicy::default(),
            max_recommendations: MAX_RECOMMENDATIONS,
        }
    }
}
