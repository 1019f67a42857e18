//! Monthly bucketing: merge, chronology, month names, parallel series.

mod common;

use labdados_sdk::SalesReport;

#[test]
fn buckets_merge_records_sharing_year_and_month() {
    // 5 records across 3 distinct (year, month) keys
    let rows = common::sample_report().monthly().revenue();
    assert_eq!(rows.len(), 3);
}

#[test]
fn buckets_are_chronological_with_year_and_month_name() {
    let rows = common::sample_report().monthly().revenue();
    let labels: Vec<(i32, &str)> = rows.iter().map(|r| (r.year, r.month.as_str())).collect();
    assert_eq!(
        labels,
        vec![(2021, "December"), (2022, "January"), (2022, "February")]
    );
}

#[test]
fn revenue_series_sums_each_bucket() {
    let rows = common::sample_report().monthly().revenue();
    assert_eq!(rows[0].revenue, 150.0);
    assert_eq!(rows[1].revenue, 1000.0);
    assert_eq!(rows[2].revenue, 350.0);
}

#[test]
fn sales_series_parallels_the_revenue_buckets() {
    let report = common::sample_report();
    let revenue = report.monthly().revenue();
    let sales = report.monthly().sales();
    assert_eq!(revenue.len(), sales.len());
    let counts: Vec<u64> = sales.iter().map(|r| r.sales).collect();
    assert_eq!(counts, vec![1, 2, 2]);
}

#[test]
fn same_month_in_different_years_stays_separate() {
    let report = SalesReport::from_raw(vec![
        common::raw_row("livros", 10.0, "05/03/2021", "Bahia", -12.0, -38.0, "Ana"),
        common::raw_row("livros", 20.0, "09/03/2022", "Bahia", -12.0, -38.0, "Ana"),
    ])
    .unwrap();
    let rows = report.monthly().revenue();
    assert_eq!(rows.len(), 2);
    assert_eq!((rows[0].year, rows[0].month.as_str()), (2021, "March"));
    assert_eq!((rows[1].year, rows[1].month.as_str()), (2022, "March"));
}

#[test]
fn empty_input_yields_an_empty_series() {
    let report = SalesReport::default();
    assert!(report.monthly().revenue().is_empty());
    assert!(report.monthly().sales().is_empty());
}
