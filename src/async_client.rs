//! Async wrapper around [`LabdadosSdk`] for use in async runtimes (Tokio, etc.).
//!
//! Runs all SDK operations on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free. A
//! `sales()` call is blocking HTTP plus CPU-bound aggregation, both of which
//! belong off the event loop.
//!
//! # Example
//!
//! ```no_run
//! use labdados_sdk::{AsyncLabdadosSdk, SalesFilter};
//!
//! # async fn example() -> labdados_sdk::Result<()> {
//! let sdk = AsyncLabdadosSdk::builder().build().await?;
//!
//! // Convenience method for the usual fetch-and-aggregate pass
//! let report = sdk.sales(&SalesFilter::default()).await?;
//!
//! // Or run any sync SDK method via closure
//! let total = sdk.run(|s| {
//!     let report = s.all_sales()?;
//!     Ok(report.total_revenue())
//! }).await?;
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;
use std::time::Duration;

use crate::error::{LabdadosError, Result};
use crate::filter::SalesFilter;
use crate::report::SalesReport;
use crate::LabdadosSdk;

// ---------------------------------------------------------------------------
// AsyncLabdadosSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncLabdadosSdk`] instance.
pub struct AsyncLabdadosSdkBuilder {
    base_url: Option<String>,
    timeout: Duration,
}

impl Default for AsyncLabdadosSdkBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: Duration::from_secs(120),
        }
    }
}

impl AsyncLabdadosSdkBuilder {
    /// Point the SDK at a different API host.
    pub fn base_url<S: Into<String>>(mut self, url: S) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the HTTP request timeout for dataset fetches.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the async SDK.
    ///
    /// Initialization runs on the blocking thread pool so it won't block the
    /// async event loop.
    pub async fn build(self) -> Result<AsyncLabdadosSdk> {
        tokio::task::spawn_blocking(move || {
            let mut builder = LabdadosSdk::builder();
            if let Some(url) = self.base_url {
                builder = builder.base_url(url);
            }
            builder = builder.timeout(self.timeout);
            let sdk = builder.build()?;
            Ok(AsyncLabdadosSdk {
                inner: Arc::new(sdk),
            })
        })
        .await
        .map_err(|e| LabdadosError::InvalidArgument(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncLabdadosSdk
// ---------------------------------------------------------------------------

/// Async wrapper around [`LabdadosSdk`].
///
/// All operations are dispatched to a blocking thread pool via
/// [`tokio::task::spawn_blocking`]. The sync SDK is shared behind an [`Arc`]
/// so concurrent calls never block each other on a lock.
pub struct AsyncLabdadosSdk {
    inner: Arc<LabdadosSdk>,
}

impl AsyncLabdadosSdk {
    /// Create a new builder for configuring the async SDK.
    pub fn builder() -> AsyncLabdadosSdkBuilder {
        AsyncLabdadosSdkBuilder::default()
    }

    /// Run a sync SDK operation on the blocking thread pool.
    ///
    /// The closure receives an `&LabdadosSdk` reference and should return a
    /// `Result<T>`.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&LabdadosSdk) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let sdk = self.inner.clone();
        tokio::task::spawn_blocking(move || f(&sdk))
            .await
            .map_err(|e| LabdadosError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Fetch, validate and filter a sales snapshot asynchronously.
    ///
    /// Convenience wrapper around [`run()`](Self::run) for
    /// [`LabdadosSdk::sales()`].
    pub async fn sales(&self, filter: &SalesFilter) -> Result<SalesReport> {
        let filter = filter.clone();
        self.run(move |s| s.sales(&filter)).await
    }

    /// Fetch and validate the full dataset asynchronously.
    pub async fn all_sales(&self) -> Result<SalesReport> {
        self.run(|s| s.all_sales()).await
    }
}
