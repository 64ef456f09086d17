use std::collections::HashMap;

use prix::models::{Bounds, FilterForm};

fn query(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_bare_query_renders_initial_defaults() {
    let form = FilterForm::from_query(&HashMap::new());

    assert_eq!(form.provider, "AWS");
    assert_eq!(form.region, "Europe");
    assert_eq!(form.currency, "EUR");
    assert_eq!(form.min_cpu, "");
    assert_eq!(form.max_cpu, "");
    assert_eq!(form.min_ram, "");
    assert_eq!(form.max_ram, "");
    assert_eq!(form.bounds(), Bounds::default());
}

#[test]
fn test_present_but_empty_fields_stay_empty() {
    // This is the state the Clear control produces: every key present,
    // every value empty. The form must render emptied, not snap back
    // to the initial defaults.
    let form = FilterForm::from_query(&query(&[
        ("provider", ""),
        ("region", ""),
        ("currency", ""),
        ("min_cpu", ""),
        ("max_cpu", ""),
        ("min_ram", ""),
        ("max_ram", ""),
    ]));

    assert_eq!(form, FilterForm::cleared());
    assert_eq!(form.bounds(), Bounds::default());
}

#[test]
fn test_raw_input_is_preserved_verbatim() {
    let form = FilterForm::from_query(&query(&[("min_cpu", " 4 "), ("max_ram", "16")]));

    assert_eq!(form.min_cpu, " 4 ");
    assert_eq!(form.max_ram, "16");
}

#[test]
fn test_bounds_coercion() {
    let form = FilterForm::from_query(&query(&[
        ("min_cpu", "2"),
        ("max_cpu", " 8 "),
        ("min_ram", ""),
        ("max_ram", "abc"),
    ]));

    let bounds = form.bounds();
    assert_eq!(bounds.min_cpu, Some(2));
    assert_eq!(bounds.max_cpu, Some(8));
    // Empty and unparseable input are both unbounded, never zero.
    assert_eq!(bounds.min_ram, None);
    assert_eq!(bounds.max_ram, None);
}

#[test]
fn test_query_pairs_round_trip() {
    let submitted = query(&[
        ("provider", "All"),
        ("region", "Europe"),
        ("currency", "EUR"),
        ("min_cpu", "2"),
        ("max_cpu", ""),
        ("min_ram", "4"),
        ("max_ram", ""),
    ]);
    let form = FilterForm::from_query(&submitted);

    let round_tripped: HashMap<String, String> = form.to_query_pairs().into_iter().collect();
    let reparsed = FilterForm::from_query(&round_tripped);

    assert_eq!(reparsed, form);
}

#[test]
fn test_cleared_pairs_keep_every_criterion_present() {
    let pairs = FilterForm::cleared().to_query_pairs();

    assert_eq!(pairs.len(), 7);
    for (_, value) in &pairs {
        assert_eq!(value, "");
    }
}
