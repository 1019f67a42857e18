//! By-seller view: combined revenue/count rows plus top-N rankings.

use std::collections::HashMap;

use crate::config;
use crate::error::{LabdadosError, Result};
use crate::models::{SaleRecord, SellerSummary};

// ---------------------------------------------------------------------------
// SellerQuery
// ---------------------------------------------------------------------------

/// Query interface for by-seller aggregates over a sales snapshot.
pub struct SellerQuery<'a> {
    records: &'a [SaleRecord],
}

impl<'a> SellerQuery<'a> {
    /// Create a new `SellerQuery` over the given records.
    pub fn new(records: &'a [SaleRecord]) -> Self {
        Self { records }
    }

    /// One row per seller carrying revenue and sales count together.
    ///
    /// The view itself is unranked; rows come out in first-encountered order
    /// (which is deterministic, unlike bare map iteration). Use
    /// [`top_by_revenue`](Self::top_by_revenue) or
    /// [`top_by_sales`](Self::top_by_sales) for ranked, truncated views.
    pub fn summary(&self) -> Vec<SellerSummary> {
        let mut order: Vec<&str> = Vec::new();
        let mut metrics: HashMap<&str, (f64, u64)> = HashMap::new();
        for record in self.records {
            if !metrics.contains_key(record.seller.as_str()) {
                order.push(&record.seller);
            }
            let entry = metrics.entry(&record.seller).or_insert((0.0, 0));
            entry.0 += record.price;
            entry.1 += 1;
        }

        order
            .into_iter()
            .map(|seller| {
                let (revenue, sales) = metrics[seller];
                SellerSummary {
                    seller: seller.to_string(),
                    revenue,
                    sales,
                }
            })
            .collect()
    }

    /// The `size` sellers with the highest revenue, descending.
    ///
    /// `size` must lie in the inclusive range
    /// [`config::SELLER_RANKING_MIN`, `config::SELLER_RANKING_MAX`].
    pub fn top_by_revenue(&self, size: usize) -> Result<Vec<SellerSummary>> {
        check_ranking_size(size)?;
        let mut rows = self.summary();
        rows.sort_by(|a, b| b.revenue.total_cmp(&a.revenue));
        rows.truncate(size);
        Ok(rows)
    }

    /// The `size` sellers with the most sales, descending. Same `size`
    /// bounds as [`top_by_revenue`](Self::top_by_revenue).
    pub fn top_by_sales(&self, size: usize) -> Result<Vec<SellerSummary>> {
        check_ranking_size(size)?;
        let mut rows = self.summary();
        rows.sort_by(|a, b| b.sales.cmp(&a.sales));
        rows.truncate(size);
        Ok(rows)
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn check_ranking_size(size: usize) -> Result<()> {
    if !(config::SELLER_RANKING_MIN..=config::SELLER_RANKING_MAX).contains(&size) {
        return Err(LabdadosError::InvalidArgument(format!(
            "seller ranking size must be between {} and {}, got {}",
            config::SELLER_RANKING_MIN,
            config::SELLER_RANKING_MAX,
            size
        )));
    }
    Ok(())
}
