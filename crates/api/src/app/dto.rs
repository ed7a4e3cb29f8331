//! Query-string DTOs and the parsing helpers behind them.
//!
//! Request bodies reuse the `storefront_core` types directly; only query
//! parameters need their own shapes here.

use serde::Deserialize;
use serde::de::DeserializeOwned;

use storefront_core::{Address, CartItem};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyQuery {
    pub currency_code: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartQuery {
    #[serde(default)]
    pub session_id: String,
    pub currency_code: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingQuery {
    pub item_list: Option<String>,
    pub address: Option<String>,
    pub currency_code: Option<String>,
}

/// Shipping parameters after their JSON payloads have been decoded.
#[derive(Debug)]
pub struct ShippingRequest {
    pub items: Vec<CartItem>,
    pub address: Address,
}

impl ShippingQuery {
    pub fn parse(&self) -> Result<ShippingRequest, String> {
        Ok(ShippingRequest {
            items: json_param("itemList", self.item_list.as_deref())?,
            address: json_param("address", self.address.as_deref())?,
        })
    }
}

/// Decode a query parameter carrying a JSON document. Absent counts as malformed.
pub fn json_param<T: DeserializeOwned>(name: &str, raw: Option<&str>) -> Result<T, String> {
    let raw = raw.ok_or_else(|| format!("missing query parameter `{name}`"))?;
    serde_json::from_str(raw).map_err(|e| format!("`{name}` is not valid JSON: {e}"))
}

/// Every value of a list parameter, in request order.
///
/// Accepts `key=a&key=b`, `key[]=a`, and `key=a,b` (or any mix of them);
/// blank entries are dropped.
pub fn multi_value(pairs: &[(String, String)], key: &str) -> Vec<String> {
    let bracketed = format!("{key}[]");
    pairs
        .iter()
        .filter(|(k, _)| k == key || *k == bracketed)
        .flat_map(|(_, v)| v.split(','))
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}

/// First value of a scalar parameter, if present.
pub fn single_value<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}
