//! In-memory snapshot of validated sales records.

use crate::error::Result;
use crate::filter::SalesFilter;
use crate::models::{RawProduct, SaleRecord};
use crate::queries::{CategoryQuery, LocationQuery, MonthlyQuery, SellerQuery};

// ---------------------------------------------------------------------------
// SalesReport
// ---------------------------------------------------------------------------

/// An ordered batch of validated sales records and the aggregation views
/// over it.
///
/// Construction validates every raw record; one malformed record fails the
/// whole batch rather than being silently dropped from the totals. The
/// report never mutates its records -- every view is recomputed per call from
/// the same snapshot.
#[derive(Debug, Clone, Default)]
pub struct SalesReport {
    records: Vec<SaleRecord>,
}

impl SalesReport {
    /// Validate a batch of raw upstream records into a report.
    ///
    /// Fails with [`LabdadosError::Validation`](crate::LabdadosError::Validation)
    /// on the first record whose purchase date cannot be parsed as
    /// day/month/year (or whose price is negative).
    pub fn from_raw(raw: Vec<RawProduct>) -> Result<Self> {
        let records = raw
            .into_iter()
            .map(SaleRecord::try_from)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { records })
    }

    /// Build a report from already-validated records.
    pub fn from_records(records: Vec<SaleRecord>) -> Self {
        Self { records }
    }

    /// Derive a new report containing only the records matching `filter`,
    /// preserving record order.
    pub fn filter(&self, filter: &SalesFilter) -> SalesReport {
        SalesReport {
            records: filter.apply(&self.records),
        }
    }

    /// The validated records, in upstream order.
    pub fn records(&self) -> &[SaleRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    // -- Headline metrics --------------------------------------------------

    /// Sum of price over every record in the snapshot.
    pub fn total_revenue(&self) -> f64 {
        self.records.iter().map(|r| r.price).sum()
    }

    /// Total number of records in the snapshot.
    pub fn total_sales(&self) -> usize {
        self.records.len()
    }

    // -- View accessors ----------------------------------------------------

    /// Access the by-location views (geo-joined revenue and sales count).
    pub fn locations(&self) -> LocationQuery<'_> {
        LocationQuery::new(&self.records)
    }

    /// Access the (year, month) bucket views.
    pub fn monthly(&self) -> MonthlyQuery<'_> {
        MonthlyQuery::new(&self.records)
    }

    /// Access the by-category views.
    pub fn categories(&self) -> CategoryQuery<'_> {
        CategoryQuery::new(&self.records)
    }

    /// Access the by-seller view and rankings.
    pub fn sellers(&self) -> SellerQuery<'_> {
        SellerQuery::new(&self.records)
    }
}
