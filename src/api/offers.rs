use crate::models::{Bounds, OfferPage};

use super::client;
use super::error::ApiError;

/// Path of the one upstream endpoint this tool talks to.
pub const FILTER_ENDPOINT: &str = "/api/products/filter";

/// Build the upstream query from the coerced bounds.
///
/// An unset bound is omitted entirely; the endpoint treats a missing
/// parameter as unbounded. A set bound is forwarded exactly as parsed,
/// under the endpoint's camelCase names.
pub fn filter_params(bounds: &Bounds) -> Vec<(String, String)> {
    let mut params = Vec::new();
    if let Some(v) = bounds.min_ram {
        params.push(("minRAM".to_string(), v.to_string()));
    }
    if let Some(v) = bounds.max_ram {
        params.push(("maxRAM".to_string(), v.to_string()));
    }
    if let Some(v) = bounds.min_cpu {
        params.push(("minCPU".to_string(), v.to_string()));
    }
    if let Some(v) = bounds.max_cpu {
        params.push(("maxCPU".to_string(), v.to_string()));
    }
    params
}

/// Fetch the offer groups matching `bounds` from the pricing API.
pub async fn load_offer_groups(
    client: &reqwest::Client,
    api_base_url: &str,
    bounds: &Bounds,
) -> Result<OfferPage, ApiError> {
    let url = format!("{}{}", api_base_url, FILTER_ENDPOINT);
    let params = filter_params(bounds);
    client::log_request("GET", &url, &params);

    let resp = client.get(&url).query(&params).send().await?;
    let status = resp.status();
    if !status.is_success() {
        return Err(ApiError::Status(status.as_u16()));
    }

    let payload: serde_json::Value = resp.json().await?;
    client::log_response(&payload);
    let page: OfferPage = serde_json::from_value(payload)?;
    Ok(page)
}
