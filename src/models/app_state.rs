use std::sync::{Arc, Mutex};

use crate::models::offer_group::OfferGroup;

#[derive(Clone)]
pub struct AppState {
    pub api_base_url: String,
    pub client: reqwest::Client,
    /// Most recently fetched result set, shown as-is when a later
    /// fetch fails. Overlapping requests are last-write-wins, so the
    /// response that arrives last determines what a failed refresh
    /// falls back to.
    pub last_results: Arc<Mutex<Option<Vec<OfferGroup>>>>,
    pub custom_css: Option<String>,
}
