//! By-category aggregation: descending revenue, lexicographic counts.

mod common;

use labdados_sdk::SalesReport;

#[test]
fn revenue_is_sorted_descending_with_stable_ties() {
    let rows = common::sample_report().categories().revenue();
    let order: Vec<&str> = rows.iter().map(|r| r.category.as_str()).collect();
    // livros and moveis tie at 300.00; livros was encountered first
    assert_eq!(order, vec!["eletronicos", "livros", "moveis"]);
    assert_eq!(rows[0].revenue, 900.0);
    assert_eq!(rows[1].revenue, 300.0);
}

#[test]
fn sales_counts_are_ordered_by_category_name() {
    let rows = common::sample_report().categories().sales();
    let order: Vec<&str> = rows.iter().map(|r| r.category.as_str()).collect();
    assert_eq!(order, vec!["eletronicos", "livros", "moveis"]);
    let counts: Vec<u64> = rows.iter().map(|r| r.sales).collect();
    assert_eq!(counts, vec![1, 3, 1]);
}

#[test]
fn count_ordering_is_independent_of_revenue_ordering() {
    // A category can lead on revenue while trailing alphabetically.
    let report = SalesReport::from_raw(vec![
        common::raw_row("utilidades", 900.0, "01/01/2022", "Bahia", -12.0, -38.0, "Ana"),
        common::raw_row("brinquedos", 10.0, "01/01/2022", "Bahia", -12.0, -38.0, "Ana"),
    ])
    .unwrap();
    assert_eq!(report.categories().revenue()[0].category, "utilidades");
    assert_eq!(report.categories().sales()[0].category, "brinquedos");
}
