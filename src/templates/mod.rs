// Individual template files
pub mod offers_page_template;

// Re-export all templates
pub use offers_page_template::OffersPageTemplate;
