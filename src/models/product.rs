use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config;
use crate::error::LabdadosError;

// ---------------------------------------------------------------------------
// RawProduct — upstream JSON shape (ingestion schema)
// ---------------------------------------------------------------------------

/// One product sale exactly as the labdados API serves it.
///
/// Field names mirror the upstream Portuguese column names; fields the SDK
/// does not aggregate over are ignored during deserialization. The purchase
/// date arrives as a day/month/year string and is only parsed during
/// conversion to [`SaleRecord`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawProduct {
    #[serde(rename = "Categoria do Produto")]
    pub category: String,
    #[serde(rename = "Preço")]
    pub price: f64,
    #[serde(rename = "Data da Compra")]
    pub purchase_date: String,
    #[serde(rename = "Local da compra")]
    pub location: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(rename = "Vendedor")]
    pub seller: String,
}

// ---------------------------------------------------------------------------
// SaleRecord — validated record
// ---------------------------------------------------------------------------

/// A validated sales transaction.
///
/// Records form an ordered sequence; duplicates are valid (they are distinct
/// sales). Every record sharing a location string carries that location's
/// lat/lon pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SaleRecord {
    pub category: String,
    pub price: f64,
    pub purchase_date: NaiveDate,
    pub location: String,
    pub lat: f64,
    pub lon: f64,
    pub seller: String,
}

impl TryFrom<RawProduct> for SaleRecord {
    type Error = LabdadosError;

    /// The schema-validation step: parses the purchase date and checks the
    /// price invariant. A failure here aborts the whole batch (see
    /// [`SalesReport::from_raw`](crate::report::SalesReport::from_raw)) --
    /// a silently dropped record would corrupt revenue totals.
    fn try_from(raw: RawProduct) -> Result<Self, LabdadosError> {
        let purchase_date = NaiveDate::parse_from_str(&raw.purchase_date, config::DATE_FORMAT)
            .map_err(|e| {
                LabdadosError::Validation(format!(
                    "unparseable purchase date '{}' (expected day/month/year): {}",
                    raw.purchase_date, e
                ))
            })?;

        if !(raw.price >= 0.0) {
            return Err(LabdadosError::Validation(format!(
                "negative or non-finite price {} on record sold by '{}'",
                raw.price, raw.seller
            )));
        }

        Ok(Self {
            category: raw.category,
            price: raw.price,
            purchase_date,
            location: raw.location,
            lat: raw.lat,
            lon: raw.lon,
            seller: raw.seller,
        })
    }
}
