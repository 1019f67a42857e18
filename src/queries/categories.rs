//! By-category views: revenue and sales count.

use std::collections::{BTreeMap, HashMap};

use crate::models::{CategoryRevenue, CategorySales, SaleRecord};

// ---------------------------------------------------------------------------
// CategoryQuery
// ---------------------------------------------------------------------------

/// Query interface for by-category aggregates over a sales snapshot.
pub struct CategoryQuery<'a> {
    records: &'a [SaleRecord],
}

impl<'a> CategoryQuery<'a> {
    /// Create a new `CategoryQuery` over the given records.
    pub fn new(records: &'a [SaleRecord]) -> Self {
        Self { records }
    }

    /// Revenue per category, descending by revenue (ties keep
    /// first-encountered order).
    pub fn revenue(&self) -> Vec<CategoryRevenue> {
        let mut order: Vec<&str> = Vec::new();
        let mut totals: HashMap<&str, f64> = HashMap::new();
        for record in self.records {
            if !totals.contains_key(record.category.as_str()) {
                order.push(&record.category);
            }
            *totals.entry(&record.category).or_insert(0.0) += record.price;
        }
        order.sort_by(|a, b| totals[b].total_cmp(&totals[a]));

        order
            .into_iter()
            .map(|category| CategoryRevenue {
                category: category.to_string(),
                revenue: totals[category],
            })
            .collect()
    }

    /// Sales count per category, ordered lexicographically by category name.
    ///
    /// The ordering is independent of the revenue view's ordering; callers
    /// must not assume the two series line up row-for-row.
    pub fn sales(&self) -> Vec<CategorySales> {
        let mut counts: BTreeMap<&str, u64> = BTreeMap::new();
        for record in self.records {
            *counts.entry(&record.category).or_insert(0) += 1;
        }

        counts
            .into_iter()
            .map(|(category, sales)| CategorySales {
                category: category.to_string(),
                sales,
            })
            .collect()
    }
}
