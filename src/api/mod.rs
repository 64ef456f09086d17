// Atomic API modules
pub mod client;
pub mod error;
pub mod offers;

// Re-export commonly used items
pub use client::{build_client, set_silent};
pub use error::ApiError;
pub use offers::{filter_params, load_offer_groups, FILTER_ENDPOINT};
