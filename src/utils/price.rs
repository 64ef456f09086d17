/// Format a unit price for display: dollar sign, four decimal places.
/// Hourly cloud prices live in the fractions of a cent, so two places
/// would round most offers to the same value.
pub fn format_price(price: f64) -> String {
    format!("${:.4}", price)
}
