use async_trait::async_trait;

use storefront_core::Ad;

use crate::r#trait::{AdGateway, GatewayResult};

/// Number of ads served when no context key matches.
const DEFAULT_AD_COUNT: usize = 2;

/// Ads indexed by product category.
#[derive(Debug, Clone)]
pub struct InMemoryAds {
    by_category: Vec<(String, Ad)>,
}

impl Default for InMemoryAds {
    fn default() -> Self {
        let table = [
            ("binoculars", "/product/2ZYFJ3GM2N", "Roof Binoculars for sale. 50% off."),
            ("telescopes", "/product/66VCHSJNUP", "Starsense Explorer Refractor Telescope for sale. 20% off."),
            ("accessories", "/product/0PUK6V6EV0", "Solar System Color Imager for sale. 30% off."),
            ("assembly", "/product/9SIQT8TOJO", "Optical Tube Assembly for sale. 10% off."),
            ("travel", "/product/1YMWWN1N4O", "Eclipsmart Travel Refractor Telescope for sale. Buy one, get second kit for free"),
            ("books", "/product/HQTGWGPNH4", "The Comet Book for sale. 15% off."),
        ];
        Self {
            by_category: table
                .into_iter()
                .map(|(category, url, text)| (category.to_string(), Ad::new(url, text)))
                .collect(),
        }
    }
}

impl InMemoryAds {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AdGateway for InMemoryAds {
    async fn list_ads(&self, context_keys: &[String]) -> GatewayResult<Vec<Ad>> {
        let matched: Vec<Ad> = self
            .by_category
            .iter()
            .filter(|(category, _)| context_keys.iter().any(|k| k == category))
            .map(|(_, ad)| ad.clone())
            .collect();

        if !matched.is_empty() {
            return Ok(matched);
        }
        Ok(self
            .by_category
            .iter()
            .take(DEFAULT_AD_COUNT)
            .map(|(_, ad)| ad.clone())
            .collect())
    }
}
