//! Errors raised while fetching country data

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, timeout or body transfer failure
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server answered {status} for {url}")]
    Status { status: u16, url: String },

    #[error("Could not decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("No country found for code {0}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, FetchError>;
