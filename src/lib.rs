//! Labdados SDK for Rust.
//!
//! Provides a high-level client for the labdados sales dataset. Records are
//! fetched from the public API as JSON, validated into typed records, and
//! aggregated in-memory into the views a sales dashboard displays: revenue
//! and sales count by state (geo-joined for map charts), by month, by
//! product category, and by seller.
//!
//! # Quick start
//!
//! ```no_run
//! use labdados_sdk::{format_magnitude, LabdadosSdk, Region, SalesFilter};
//!
//! let sdk = LabdadosSdk::builder().build().unwrap();
//!
//! let filter = SalesFilter {
//!     region: Region::Sul,
//!     year: Some(2022),
//!     ..Default::default()
//! };
//! let report = sdk.sales(&filter).unwrap();
//!
//! // Geo-joined revenue per state, for the map chart
//! let by_state = report.locations().revenue().unwrap();
//!
//! // Headline metric tile
//! println!("{}", format_magnitude(report.total_revenue(), "R$"));
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod client;
pub mod config;
pub mod error;
pub mod filter;
pub mod format;
pub mod models;
pub mod queries;
pub mod report;

#[cfg(feature = "async")]
pub use async_client::AsyncLabdadosSdk;
pub use client::ApiClient;
pub use error::{LabdadosError, Result};
pub use filter::{Region, SalesFilter};
pub use format::format_magnitude;
pub use report::SalesReport;

use std::fmt;
use std::time::Duration;

// ---------------------------------------------------------------------------
// LabdadosSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`LabdadosSdk`] instance.
///
/// Use [`LabdadosSdk::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](LabdadosSdkBuilder::build) to create the SDK.
pub struct LabdadosSdkBuilder {
    base_url: String,
    timeout: Duration,
}

impl Default for LabdadosSdkBuilder {
    fn default() -> Self {
        Self {
            base_url: config::API_BASE.to_string(),
            timeout: Duration::from_secs(120),
        }
    }
}

impl LabdadosSdkBuilder {
    /// Point the SDK at a different API host (e.g. a local test server).
    ///
    /// Defaults to the public labdados host.
    pub fn base_url<S: Into<String>>(mut self, url: S) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the HTTP request timeout for dataset fetches.
    ///
    /// Defaults to 120 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the SDK, initializing the HTTP client.
    ///
    /// No request is sent eagerly -- data is fetched per
    /// [`sales()`](LabdadosSdk::sales) call.
    pub fn build(self) -> Result<LabdadosSdk> {
        let client = ApiClient::new(self.base_url, self.timeout)?;
        Ok(LabdadosSdk { client })
    }
}

// ---------------------------------------------------------------------------
// LabdadosSdk
// ---------------------------------------------------------------------------

/// The main entry point for the labdados SDK.
///
/// Owns the [`ApiClient`] I/O edge and produces [`SalesReport`] snapshots,
/// which expose the aggregation views. Aggregation itself is synchronous,
/// pure and in-memory; the SDK re-fetches a fresh snapshot per filter change.
///
/// Created via [`LabdadosSdk::builder()`].
pub struct LabdadosSdk {
    client: ApiClient,
}

impl LabdadosSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> LabdadosSdkBuilder {
        LabdadosSdkBuilder::default()
    }

    /// Fetch, validate and filter a sales snapshot.
    ///
    /// Region and year narrow the upstream query; the seller set -- and the
    /// year again, since the core re-validates rather than trusting upstream
    /// filtering -- are enforced locally on the parsed records.
    pub fn sales(&self, filter: &SalesFilter) -> Result<SalesReport> {
        let raw = self.client.fetch_products(filter.region, filter.year)?;
        let report = SalesReport::from_raw(raw)?;
        Ok(report.filter(filter))
    }

    /// Fetch and validate the full dataset with no narrowing.
    pub fn all_sales(&self) -> Result<SalesReport> {
        self.sales(&SalesFilter::default())
    }

    /// Return a reference to the underlying [`ApiClient`] for advanced usage.
    pub fn client(&self) -> &ApiClient {
        &self.client
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for LabdadosSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LabdadosSdk(base_url={})", self.client.base_url())
    }
}
