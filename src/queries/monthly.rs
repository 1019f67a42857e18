//! Monthly views: revenue and sales count bucketed by (year, month).

use std::collections::BTreeMap;

use chrono::{Datelike, Month};

use crate::models::{MonthlyRevenue, MonthlySales, SaleRecord};

// ---------------------------------------------------------------------------
// MonthlyQuery
// ---------------------------------------------------------------------------

/// Query interface for (year, month) aggregates over a sales snapshot.
///
/// Bucketing is date-only: no time-of-day or timezone enters the key. The
/// revenue and count views are two parallel series over the same buckets,
/// emitted in chronological order.
pub struct MonthlyQuery<'a> {
    records: &'a [SaleRecord],
}

impl<'a> MonthlyQuery<'a> {
    /// Create a new `MonthlyQuery` over the given records.
    pub fn new(records: &'a [SaleRecord]) -> Self {
        Self { records }
    }

    /// Revenue per (year, month) bucket, chronological.
    pub fn revenue(&self) -> Vec<MonthlyRevenue> {
        bucket(self.records)
            .into_iter()
            .map(|((year, month), (revenue, _))| MonthlyRevenue {
                year,
                month: month_name(month),
                revenue,
            })
            .collect()
    }

    /// Sales count per (year, month) bucket, chronological.
    pub fn sales(&self) -> Vec<MonthlySales> {
        bucket(self.records)
            .into_iter()
            .map(|((year, month), (_, sales))| MonthlySales {
                year,
                month: month_name(month),
                sales,
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Sum and count per (year, month), keyed for chronological iteration.
/// Records sharing a bucket always merge into one entry.
fn bucket(records: &[SaleRecord]) -> BTreeMap<(i32, u32), (f64, u64)> {
    let mut buckets: BTreeMap<(i32, u32), (f64, u64)> = BTreeMap::new();
    for record in records {
        let key = (record.purchase_date.year(), record.purchase_date.month());
        let entry = buckets.entry(key).or_insert((0.0, 0));
        entry.0 += record.price;
        entry.1 += 1;
    }
    buckets
}

/// English month name for chart axis labels.
fn month_name(month: u32) -> String {
    Month::try_from(month as u8)
        .map(|m| m.name().to_string())
        .unwrap_or_default()
}
