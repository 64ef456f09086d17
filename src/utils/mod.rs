// URL handling utilities
pub mod query_string;
pub mod url_parser;

// Parsing and display utilities
pub mod parse_int;
pub mod price;

// Re-export all utilities for convenient access
pub use parse_int::parse_optional_u32;
pub use price::format_price;
pub use query_string::build_query_string;
pub use url_parser::hostname_from_url;
