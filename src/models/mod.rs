pub mod app_state;
pub mod filter_form;
pub mod offer_group;
pub mod row_view;
pub mod select_option;
pub mod visible_rows;

// Re-export commonly used types
pub use app_state::AppState;
pub use filter_form::{Bounds, FilterForm};
pub use offer_group::{Offer, OfferGroup, OfferPage};
pub use row_view::{OfferRow, OfferView};
pub use select_option::{select_options, SelectOption};
pub use visible_rows::{VisibleRows, DEFAULT_VISIBLE};
