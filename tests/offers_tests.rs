use std::collections::HashMap;

use prix::api::filter_params;
use prix::handlers::offers::{build_rows, clear_href};
use prix::models::{Bounds, FilterForm, Offer, OfferGroup, OfferPage, VisibleRows};
use prix::utils::format_price;

#[test]
fn test_filter_params_forwards_bounds_unmodified() {
    let bounds = Bounds {
        min_cpu: Some(2),
        max_cpu: Some(8),
        min_ram: Some(4),
        max_ram: Some(16),
    };

    assert_eq!(
        filter_params(&bounds),
        vec![
            ("minRAM".to_string(), "4".to_string()),
            ("maxRAM".to_string(), "16".to_string()),
            ("minCPU".to_string(), "2".to_string()),
            ("maxCPU".to_string(), "8".to_string()),
        ]
    );
}

#[test]
fn test_filter_params_omits_unset_bounds() {
    // An empty field is an unbounded filter: no parameter at all,
    // never zero.
    assert_eq!(filter_params(&Bounds::default()), vec![]);

    let bounds = Bounds {
        max_ram: Some(32),
        ..Bounds::default()
    };
    assert_eq!(
        filter_params(&bounds),
        vec![("maxRAM".to_string(), "32".to_string())]
    );
}

#[test]
fn test_envelope_decodes_wire_names() {
    let body = r#"{
        "data": [
            {
                "vcpu": "2",
                "memory": "8",
                "instances": [
                    {
                        "_id": "65a1",
                        "price_per_unit": 0.0464,
                        "instance_type": "t3.large",
                        "location": "eu-west-1",
                        "unit": "Hrs"
                    }
                ]
            },
            {
                "vcpu": 4,
                "memory": 16,
                "instances": [
                    {
                        "_id": "65a2",
                        "price_per_unit": "0.1840",
                        "instance_type": "m5.xlarge",
                        "location": "eu-central-1",
                        "unit": "Hrs"
                    }
                ]
            }
        ],
        "totalRecords": 42
    }"#;

    let page: OfferPage = serde_json::from_str(body).unwrap();

    assert_eq!(page.total_records, Some(42));
    assert_eq!(page.data.len(), 2);
    assert_eq!(page.data[0].vcpu, "2");
    assert_eq!(page.data[0].offers[0].id, "65a1");
    assert_eq!(page.data[0].offers[0].price_per_unit, 0.0464);
    // Numeric vcpu/memory and string prices both decode.
    assert_eq!(page.data[1].vcpu, "4");
    assert_eq!(page.data[1].memory, "16");
    assert_eq!(page.data[1].offers[0].price_per_unit, 0.184);
}

#[test]
fn test_envelope_tolerates_missing_fields() {
    let page: OfferPage = serde_json::from_str(r#"{"data": []}"#).unwrap();
    assert_eq!(page.total_records, None);
    assert!(page.data.is_empty());

    let page: OfferPage = serde_json::from_str(r#"{}"#).unwrap();
    assert!(page.data.is_empty());
}

fn five_offer_group() -> OfferGroup {
    let offer = |id: &str| Offer {
        id: id.to_string(),
        price_per_unit: 0.05,
        instance_type: format!("t3.{id}"),
        location: "eu-west-1".to_string(),
        unit: "Hrs".to_string(),
    };
    OfferGroup {
        vcpu: "2".to_string(),
        memory: "4 GiB".to_string(),
        offers: vec![offer("a"), offer("b"), offer("c"), offer("d"), offer("e")],
    }
}

#[test]
fn test_row_shows_three_offers_by_default() {
    let groups = vec![five_offer_group()];
    let form = FilterForm::default();

    let rows = build_rows(&groups, &VisibleRows::default(), &form);

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].shown, 3);
    assert_eq!(rows[0].total, 5);
    assert_eq!(rows[0].offers.len(), 3);
    assert!(rows[0].more_href.is_some());
    assert!(rows[0].less_href.is_none());
}

#[test]
fn test_one_expansion_shows_all_five_offers() {
    // offers=[A,B,C,D,E]: one "show more" caps at five, the control
    // flips from "show more" to "show less".
    let groups = vec![five_offer_group()];
    let form = FilterForm::default();

    let expanded = VisibleRows::default().expanded(0, 5);
    let rows = build_rows(&groups, &expanded, &form);

    assert_eq!(rows[0].shown, 5);
    assert_eq!(rows[0].offers.len(), 5);
    assert!(rows[0].more_href.is_none());
    assert!(rows[0].less_href.is_some());

    let collapsed = expanded.collapsed(0);
    let rows = build_rows(&groups, &collapsed, &form);
    assert_eq!(rows[0].shown, 3);
}

#[test]
fn test_expansion_links_preserve_the_active_filter() {
    let mut query = HashMap::new();
    query.insert("min_cpu".to_string(), "2".to_string());
    let form = FilterForm::from_query(&query);

    let rows = build_rows(&[five_offer_group()], &VisibleRows::default(), &form);

    let href = rows[0].more_href.as_ref().unwrap();
    assert!(href.starts_with("/?"));
    assert!(href.contains("min_cpu=2"));
    assert!(href.contains("provider=AWS"));
    // The row grows from three to five (clamped), encoded as `0:5`.
    assert!(href.contains("rows=0%3A5"));
}

#[test]
fn test_row_with_three_or_fewer_offers_has_no_controls() {
    let mut group = five_offer_group();
    group.offers.truncate(3);

    let rows = build_rows(&[group], &VisibleRows::default(), &FilterForm::default());

    assert_eq!(rows[0].shown, 3);
    assert!(rows[0].more_href.is_none());
    assert!(rows[0].less_href.is_none());
}

#[test]
fn test_clear_href_empties_every_criterion() {
    let href = clear_href();
    assert_eq!(
        href,
        "/?provider=&region=&currency=&min_cpu=&max_cpu=&min_ram=&max_ram="
    );
}

#[test]
fn test_format_price_keeps_four_decimals() {
    assert_eq!(format_price(0.0464), "$0.0464");
    assert_eq!(format_price(1.5), "$1.5000");
    assert_eq!(format_price(0.0), "$0.0000");
}
