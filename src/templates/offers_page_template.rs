use askama::Template;

use crate::models::{FilterForm, OfferRow, SelectOption};

#[derive(Template)]
#[template(path = "offers.html")]
pub struct OffersPageTemplate {
    pub api_hostname: String,
    pub form: FilterForm,
    pub providers: Vec<SelectOption>,
    pub regions: Vec<SelectOption>,
    pub currencies: Vec<SelectOption>,
    pub clear_href: String,
    pub rows: Vec<OfferRow>,
}
