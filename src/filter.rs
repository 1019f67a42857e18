//! Record filtering: region selector, purchase year and seller set.
//!
//! The region-to-record mapping lives server-side -- [`Region`] only shapes
//! the `regiao` query value sent by the [`ApiClient`](crate::client::ApiClient).
//! Year and seller constraints are enforced locally on the parsed records.

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::models::SaleRecord;

// ---------------------------------------------------------------------------
// Region
// ---------------------------------------------------------------------------

/// The fixed set of dataset regions. [`Region::Brasil`] selects the whole
/// country (no upstream constraint).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Region {
    #[default]
    Brasil,
    CentroOeste,
    Nordeste,
    Norte,
    Sudeste,
    Sul,
}

impl Region {
    /// All regions, in the order the dataset presents them.
    pub const ALL: [Region; 6] = [
        Region::Brasil,
        Region::CentroOeste,
        Region::Nordeste,
        Region::Norte,
        Region::Sudeste,
        Region::Sul,
    ];

    /// The region name as the dataset spells it.
    pub fn name(&self) -> &'static str {
        match self {
            Region::Brasil => "Brasil",
            Region::CentroOeste => "Centro Oeste",
            Region::Nordeste => "Nordeste",
            Region::Norte => "Norte",
            Region::Sudeste => "Sudeste",
            Region::Sul => "Sul",
        }
    }

    /// Value for the `regiao` query parameter: the lowercased name, or the
    /// empty string for [`Region::Brasil`].
    pub fn query_value(&self) -> &'static str {
        match self {
            Region::Brasil => "",
            Region::CentroOeste => "centro oeste",
            Region::Nordeste => "nordeste",
            Region::Norte => "norte",
            Region::Sudeste => "sudeste",
            Region::Sul => "sul",
        }
    }
}

// ---------------------------------------------------------------------------
// SalesFilter
// ---------------------------------------------------------------------------

/// Filter constraints for a sales snapshot.
///
/// Constraints combine with logical AND; omitted constraints pass everything
/// ([`Region::Brasil`], `year: None` and an empty seller list are each
/// "no constraint"). There are no error cases: an unmatched filter yields an
/// empty collection, which every aggregation view accepts.
#[derive(Debug, Clone, Default)]
pub struct SalesFilter {
    pub region: Region,
    pub year: Option<i32>,
    pub sellers: Vec<String>,
}

impl SalesFilter {
    /// True if the record satisfies every locally-checkable constraint.
    ///
    /// The year is checked against the parsed purchase date even though the
    /// upstream query already narrows by year -- the core re-validates rather
    /// than trusting upstream filtering.
    pub fn matches(&self, record: &SaleRecord) -> bool {
        if let Some(year) = self.year {
            if record.purchase_date.year() != year {
                return false;
            }
        }
        if !self.sellers.is_empty() && !self.sellers.iter().any(|s| s == &record.seller) {
            return false;
        }
        true
    }

    /// The subset of `records` satisfying all constraints, in input order.
    pub fn apply(&self, records: &[SaleRecord]) -> Vec<SaleRecord> {
        records.iter().filter(|r| self.matches(r)).cloned().collect()
    }
}
