//! Scraping error types.

use thiserror::Error;

/// Errors that can occur when fetching a bond product page.
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Page responded with a non-success status
    #[error("page fetch for {url} returned status {status}")]
    BadStatus { url: String, status: u16 },
}
