//! Catalog records: the canonical USD product and its priced, response-facing form.

use serde::{Deserialize, Serialize};

use crate::money::Money;

/// Catalog-of-record product. `price_usd` is always USD.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub picture: String,
    pub price_usd: Money,
    #[serde(default)]
    pub categories: Vec<String>,
}

impl Product {
    /// Attach a resolved price, dropping the USD one.
    pub fn with_price(self, price: Money) -> PricedProduct {
        PricedProduct {
            id: self.id,
            name: self.name,
            description: self.description,
            picture: self.picture,
            price,
            categories: self.categories,
        }
    }
}

/// A product carrying exactly one price, in whichever currency the request resolved to.
///
/// Built fresh for every response; never cached across requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricedProduct {
    pub id: String,
    pub name: String,
    pub description: String,
    pub picture: String,
    pub price: Money,
    pub categories: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn telescope() -> Product {
        Product {
            id: "P1".to_string(),
            name: "Explorascope".to_string(),
            description: "A telescope".to_string(),
            picture: "/images/scope.jpg".to_string(),
            price_usd: Money::usd(10, 0).unwrap(),
            categories: vec!["telescopes".to_string()],
        }
    }

    #[test]
    fn with_price_replaces_usd_price() {
        let eur = Money::new("EUR", 9, 0).unwrap();
        let priced = telescope().with_price(eur.clone());
        assert_eq!(priced.id, "P1");
        assert_eq!(priced.price, eur);
        assert_eq!(priced.categories, vec!["telescopes".to_string()]);
    }

    #[test]
    fn priced_product_json_has_no_price_usd() {
        let priced = telescope().with_price(Money::new("EUR", 9, 0).unwrap());
        let json = serde_json::to_value(&priced).unwrap();
        assert!(json.get("priceUsd").is_none());
        assert_eq!(json["price"]["currencyCode"], "EUR");
        assert_eq!(json["price"]["units"], 9);
    }

    #[test]
    fn product_deserializes_with_optional_fields_missing() {
        let p: Product = serde_json::from_str(
            r#"{"id":"X","name":"n","priceUsd":{"currencyCode":"USD","units":1,"nanos":0}}"#,
        )
        .unwrap();
        assert!(p.categories.is_empty());
        assert_eq!(p.description, "");
    }
}
