//! By-location (state) views: revenue and sales count, geo-joined.

use std::collections::HashMap;

use crate::error::{LabdadosError, Result};
use crate::models::{LocationRevenue, LocationSales, SaleRecord};

// ---------------------------------------------------------------------------
// LocationQuery
// ---------------------------------------------------------------------------

/// Query interface for by-location aggregates over a sales snapshot.
///
/// Both views join one coordinate pair per location onto the aggregated
/// rows -- the pair carried by the first record bearing that location, which
/// is a deterministic, order-stable choice.
pub struct LocationQuery<'a> {
    records: &'a [SaleRecord],
}

impl<'a> LocationQuery<'a> {
    /// Create a new `LocationQuery` over the given records.
    pub fn new(records: &'a [SaleRecord]) -> Self {
        Self { records }
    }

    /// Revenue per location, descending by revenue.
    ///
    /// Ties keep first-encountered order (the sort is stable). Empty input
    /// yields an empty vector.
    pub fn revenue(&self) -> Result<Vec<LocationRevenue>> {
        let coords = coordinate_table(self.records);

        let mut order: Vec<&str> = Vec::new();
        let mut totals: HashMap<&str, f64> = HashMap::new();
        for record in self.records {
            if !totals.contains_key(record.location.as_str()) {
                order.push(&record.location);
            }
            *totals.entry(&record.location).or_insert(0.0) += record.price;
        }
        order.sort_by(|a, b| totals[b].total_cmp(&totals[a]));

        order
            .into_iter()
            .map(|location| {
                let (lat, lon) = resolve(&coords, location)?;
                Ok(LocationRevenue {
                    location: location.to_string(),
                    lat,
                    lon,
                    revenue: totals[location],
                })
            })
            .collect()
    }

    /// Sales count per location, descending by count.
    ///
    /// Same ordering and join rules as [`revenue`](Self::revenue), applied to
    /// the count metric.
    pub fn sales(&self) -> Result<Vec<LocationSales>> {
        let coords = coordinate_table(self.records);

        let mut order: Vec<&str> = Vec::new();
        let mut counts: HashMap<&str, u64> = HashMap::new();
        for record in self.records {
            if !counts.contains_key(record.location.as_str()) {
                order.push(&record.location);
            }
            *counts.entry(&record.location).or_insert(0) += 1;
        }
        order.sort_by(|a, b| counts[b].cmp(&counts[a]));

        order
            .into_iter()
            .map(|location| {
                let (lat, lon) = resolve(&coords, location)?;
                Ok(LocationSales {
                    location: location.to_string(),
                    lat,
                    lon,
                    sales: counts[location],
                })
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// The first lat/lon pair seen for each distinct location.
fn coordinate_table(records: &[SaleRecord]) -> HashMap<&str, (f64, f64)> {
    let mut coords: HashMap<&str, (f64, f64)> = HashMap::new();
    for record in records {
        coords
            .entry(&record.location)
            .or_insert((record.lat, record.lon));
    }
    coords
}

/// Look up a location's coordinate pair, failing fast rather than emitting a
/// row with missing geometry. Records are the source of truth for both the
/// aggregates and the coordinate table, so a miss indicates corrupt input.
fn resolve(coords: &HashMap<&str, (f64, f64)>, location: &str) -> Result<(f64, f64)> {
    coords.get(location).copied().ok_or_else(|| {
        LabdadosError::NotFound(format!("no coordinate pair for location '{}'", location))
    })
}
