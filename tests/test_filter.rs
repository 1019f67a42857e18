//! Filter behavior: AND semantics, omitted constraints, order preservation.

mod common;

use labdados_sdk::{Region, SalesFilter};

// ---------------------------------------------------------------------------
// Omitted constraints
// ---------------------------------------------------------------------------

#[test]
fn default_filter_passes_everything() {
    let report = common::sample_report();
    let filtered = report.filter(&SalesFilter::default());
    assert_eq!(filtered.len(), report.len());
}

#[test]
fn empty_seller_set_passes_all_sellers() {
    let filtered = common::sample_report().filter(&SalesFilter::default());
    assert_eq!(filtered.sellers().summary().len(), 3);
}

// ---------------------------------------------------------------------------
// Seller set
// ---------------------------------------------------------------------------

#[test]
fn seller_set_keeps_exactly_those_sellers() {
    let filter = SalesFilter {
        sellers: vec!["Ana".into(), "Beto".into()],
        ..Default::default()
    };
    let filtered = common::sample_report().filter(&filter);
    let sellers: Vec<String> = filtered
        .sellers()
        .summary()
        .into_iter()
        .map(|r| r.seller)
        .collect();
    assert_eq!(sellers, vec!["Ana", "Beto"]);
}

#[test]
fn filtering_preserves_record_order() {
    let filter = SalesFilter {
        sellers: vec!["Ana".into()],
        ..Default::default()
    };
    let filtered = common::sample_report().filter(&filter);
    let prices: Vec<f64> = filtered.records().iter().map(|r| r.price).collect();
    assert_eq!(prices, vec![100.0, 50.0]);
}

// ---------------------------------------------------------------------------
// Year
// ---------------------------------------------------------------------------

#[test]
fn year_filter_drops_other_years() {
    let filtered = common::sample_report().filter(&SalesFilter {
        year: Some(2021),
        ..Default::default()
    });
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered.records()[0].price, 150.0);
}

#[test]
fn year_and_seller_constraints_combine_with_and() {
    let filter = SalesFilter {
        year: Some(2022),
        sellers: vec!["Beto".into()],
        ..Default::default()
    };
    let filtered = common::sample_report().filter(&filter);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered.records()[0].price, 900.0);
}

// ---------------------------------------------------------------------------
// Edge cases
// ---------------------------------------------------------------------------

#[test]
fn unmatched_filter_yields_empty_valid_input() {
    let filtered = common::sample_report().filter(&SalesFilter {
        sellers: vec!["Zeca".into()],
        ..Default::default()
    });
    assert!(filtered.is_empty());
    assert_eq!(filtered.total_revenue(), 0.0);
    assert!(filtered.locations().revenue().unwrap().is_empty());
    assert!(filtered.monthly().revenue().is_empty());
    assert!(filtered.categories().sales().is_empty());
    assert!(filtered.sellers().summary().is_empty());
}

#[test]
fn all_regions_enumerate_the_dataset_options() {
    let names: Vec<&str> = Region::ALL.iter().map(|r| r.name()).collect();
    assert_eq!(
        names,
        vec!["Brasil", "Centro Oeste", "Nordeste", "Norte", "Sudeste", "Sul"]
    );
}

#[test]
fn region_narrows_upstream_not_locally() {
    // Region only shapes the `regiao` query value; the server scopes the
    // records before the core sees them.
    let report = common::sample_report();
    let filtered = report.filter(&SalesFilter {
        region: Region::Sudeste,
        ..Default::default()
    });
    assert_eq!(filtered.len(), report.len());
    assert_eq!(Region::Sudeste.query_value(), "sudeste");
    assert_eq!(Region::CentroOeste.query_value(), "centro oeste");
    assert_eq!(Region::Brasil.query_value(), "");
}
