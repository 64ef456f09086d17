use axum::extract::{Query, State};
use axum::response::IntoResponse;
use std::collections::HashMap;

use crate::api::load_offer_groups;
use crate::config;
use crate::models::{
    select_options, AppState, FilterForm, OfferGroup, OfferRow, OfferView, VisibleRows,
    DEFAULT_VISIBLE,
};
use crate::templates::OffersPageTemplate;
use crate::utils::{build_query_string, format_price, hostname_from_url};

use super::helpers::render_template;

/// GET `/`: the filter-and-results page.
///
/// The page is a pure function of its query string: filter fields and
/// the `rows` expansion parameter round-trip through every link. A
/// bare `/` performs the initial unfiltered fetch.
pub async fn offers_page(
    State(state): State<AppState>,
    Query(query): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    let form = FilterForm::from_query(&query);
    let rows_state = VisibleRows::parse(query.get("rows").map(String::as_str));

    let groups = match load_offer_groups(&state.client, &state.api_base_url, &form.bounds()).await {
        Ok(page) => {
            tracing::debug!(
                groups = page.data.len(),
                total = ?page.total_records,
                "offer groups fetched"
            );
            *state.last_results.lock().unwrap() = Some(page.data.clone());
            page.data
        }
        Err(e) => {
            // The contract here is a log line, not an error page: keep
            // showing whatever the user already had.
            tracing::error!(%e, "offer filter request failed, serving previous results");
            state.last_results.lock().unwrap().clone().unwrap_or_default()
        }
    };

    let rows = build_rows(&groups, &rows_state, &form);

    render_template(OffersPageTemplate {
        api_hostname: hostname_from_url(&state.api_base_url),
        providers: select_options(config::PROVIDERS, &form.provider),
        regions: select_options(config::REGIONS, &form.region),
        currencies: select_options(config::CURRENCIES, &form.currency),
        clear_href: clear_href(),
        form,
        rows,
    })
}

/// Assemble display rows: the visible slice of each group plus its
/// show more / show less links.
pub fn build_rows(
    groups: &[OfferGroup],
    rows_state: &VisibleRows,
    form: &FilterForm,
) -> Vec<OfferRow> {
    groups
        .iter()
        .enumerate()
        .map(|(index, group)| {
            let total = group.offers.len();
            let shown = rows_state.visible_for(index, total);
            let offers = group.offers[..shown]
                .iter()
                .map(|offer| OfferView {
                    id: offer.id.clone(),
                    instance_type: offer.instance_type.clone(),
                    location: offer.location.clone(),
                    price_display: format_price(offer.price_per_unit),
                    unit: offer.unit.clone(),
                })
                .collect();

            // Mirrors the control logic of the form view: "show more"
            // while offers remain hidden, otherwise "show less" once a
            // row sits above the default count.
            let more_href =
                (shown < total).then(|| page_href(form, &rows_state.expanded(index, total)));
            let less_href = (shown >= total && rows_state.count_for(index) > DEFAULT_VISIBLE)
                .then(|| page_href(form, &rows_state.collapsed(index)));

            OfferRow {
                vcpu: group.vcpu.clone(),
                memory: group.memory.clone(),
                offers,
                shown,
                total,
                more_href,
                less_href,
            }
        })
        .collect()
}

/// A page link preserving the submitted filter plus an expansion state.
pub fn page_href(form: &FilterForm, rows_state: &VisibleRows) -> String {
    let mut pairs = form.to_query_pairs();
    if !rows_state.is_default() {
        pairs.push(("rows".to_string(), rows_state.encode()));
    }
    format!("/?{}", build_query_string(&pairs))
}

/// The Clear control: every criterion present-but-empty, so the next
/// request fetches unfiltered and the form renders emptied.
pub fn clear_href() -> String {
    format!(
        "/?{}",
        build_query_string(&FilterForm::cleared().to_query_pairs())
    )
}
