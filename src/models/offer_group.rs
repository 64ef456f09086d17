use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

/// A single priced compute instance configuration. Display-only.
///
/// Wire names differ from ours: the API sends `_id` and snake_case
/// price fields, and is loose about numeric types, so the display
/// fields accept strings or numbers.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Offer {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default, deserialize_with = "f64_from_number_or_string")]
    pub price_per_unit: f64,
    #[serde(default)]
    pub instance_type: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub unit: String,
}

/// One table row: every offer sharing a vcpu/memory shape. Received
/// wholesale from the server and never mutated on our side.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OfferGroup {
    #[serde(default, deserialize_with = "string_from_number_or_string")]
    pub vcpu: String,
    #[serde(default, deserialize_with = "string_from_number_or_string")]
    pub memory: String,
    #[serde(rename = "instances", default)]
    pub offers: Vec<Offer>,
}

/// Response envelope of `/api/products/filter`. `totalRecords` is
/// decoded but drives no paging.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OfferPage {
    #[serde(default)]
    pub data: Vec<OfferGroup>,
    #[serde(rename = "totalRecords", default)]
    pub total_records: Option<u64>,
}

fn string_from_number_or_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::Null => Ok(String::new()),
        other => Err(D::Error::custom(format!("expected string or number, got {other}"))),
    }
}

fn f64_from_number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| D::Error::custom("price does not fit in an f64")),
        serde_json::Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|e| D::Error::custom(format!("invalid price {s:?}: {e}"))),
        serde_json::Value::Null => Ok(0.0),
        other => Err(D::Error::custom(format!("expected number or string, got {other}"))),
    }
}
