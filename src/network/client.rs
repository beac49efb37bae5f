//! Country repository - fetches the dataset and single records over HTTP

use std::sync::Arc;
use std::time::Instant;

use serde::Deserialize;

use crate::constants::{COUNTRY_FIELDS, REQUEST_TIMEOUT};
use crate::error::{FetchError, Result};
use crate::models::Country;
use crate::text::sort_by_name;

/// HTTP access to the countries data source
#[derive(Clone, Debug)]
pub struct CountryClient {
    http: reqwest::Client,
    base_url: String,
}

impl CountryClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        CountryClient {
            http: create_client(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn all_url(&self) -> String {
        format!("{}/all?fields={}", self.base_url, COUNTRY_FIELDS)
    }

    pub fn alpha_url(&self, code: &str) -> String {
        format!("{}/alpha/{}?fields={}", self.base_url, code, COUNTRY_FIELDS)
    }

    async fn get(&self, url: &str) -> Result<Vec<u8>> {
        let resp = self.http.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(resp.bytes().await?.to_vec())
    }

    /// Every country, sorted by common name
    pub async fn load_all(&self) -> Result<Vec<Arc<Country>>> {
        let url = self.all_url();
        let start = Instant::now();
        tracing::info!(url = %url, "Fetching all countries");
        let body = self.get(&url).await?;
        let countries = parse_all(&body)?;
        tracing::info!(
            count = countries.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Countries loaded"
        );
        Ok(countries)
    }

    /// One country by its short code
    pub async fn load_one(&self, code: &str) -> Result<Country> {
        let url = self.alpha_url(code);
        tracing::debug!(url = %url, "Fetching country");
        let body = self.get(&url).await?;
        parse_one(code, &body)
    }
}

/// Decodes and sorts the full dataset
pub fn parse_all(body: &[u8]) -> Result<Vec<Arc<Country>>> {
    let decoded: Vec<Country> = serde_json::from_slice(body)?;
    let mut countries: Vec<Arc<Country>> = decoded.into_iter().map(Arc::new).collect();
    sort_by_name(&mut countries);
    Ok(countries)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(Box<Country>),
    Many(Vec<Country>),
}

/// Decodes a single-country answer, which may come wrapped in an array
pub fn parse_one(code: &str, body: &[u8]) -> Result<Country> {
    match serde_json::from_slice::<OneOrMany>(body)? {
        OneOrMany::One(country) => Ok(*country),
        OneOrMany::Many(list) => list
            .into_iter()
            .next()
            .ok_or_else(|| FetchError::NotFound(code.to_string())),
    }
}

/// Create an HTTP client with default configuration
pub fn create_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}
