use std::env;
use std::path::Path;

// Default configuration constants
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_API_BASE_URL: &str = "";

/// Select-box catalogs offered by the filter form. The upstream API
/// currently prices a single provider/region/currency combination, so
/// the lists are short on the service side, not the UI side.
pub const PROVIDERS: &[&str] = &["All", "AWS"];
pub const REGIONS: &[&str] = &["All", "Europe"];
pub const CURRENCIES: &[&str] = &["EUR"];

// Initial form selection shown before the user touches anything.
pub const DEFAULT_PROVIDER: &str = "AWS";
pub const DEFAULT_REGION: &str = "Europe";
pub const DEFAULT_CURRENCY: &str = "EUR";

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        dotenvy::from_path(Path::new(path)).ok();
    } else {
        dotenvy::dotenv().ok();
    }
}

pub fn get_api_base_url() -> String {
    sanitize_base_url(&env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()))
}

/// Trim whitespace and trailing slashes; an empty value falls back to
/// the local development pricing API.
pub fn sanitize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        "http://localhost:5020".to_string()
    } else {
        trimmed.to_string()
    }
}
