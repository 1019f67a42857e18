//! HTTP retrieval of raw product records from the labdados API.
//!
//! This is the crate's only I/O edge; everything downstream of it operates
//! on the in-memory batch. Region and year narrowing happen server-side via
//! the `regiao` and `ano` query parameters; the core re-checks the year
//! against the parsed dates anyway (see [`SalesFilter`](crate::SalesFilter)).

use std::time::Duration;

use reqwest::blocking::Client;

use crate::error::Result;
use crate::filter::Region;
use crate::models::RawProduct;

/// Fetches the products array from the dataset API.
pub struct ApiClient {
    base_url: String,
    http: Client,
}

impl ApiClient {
    /// Create a client against `base_url` with the given request timeout.
    pub fn new(base_url: String, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(Self { base_url, http })
    }

    /// The API host this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch every product record for the given region/year narrowing.
    ///
    /// Sends `regiao` as the lowercased region name (empty for
    /// [`Region::Brasil`]) and `ano` as the year (empty when unset), which is
    /// the parameter shape the dataset API expects.
    pub fn fetch_products(&self, region: Region, year: Option<i32>) -> Result<Vec<RawProduct>> {
        let url = format!("{}/produtos", self.base_url);
        let ano = year.map(|y| y.to_string()).unwrap_or_default();
        eprintln!("Fetching {}", url);

        let resp = self
            .http
            .get(&url)
            .query(&[("regiao", region.query_value()), ("ano", ano.as_str())])
            .send()?
            .error_for_status()?;

        let body = resp.text()?;
        let products: Vec<RawProduct> = serde_json::from_str(&body)?;
        Ok(products)
    }
}
