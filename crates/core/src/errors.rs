//! Core error types for bondwatch.
//!
//! Module-specific failures (sheet access, scraping, volume calculation)
//! carry their own enums and are wrapped into the root [`Error`] here. The
//! split the callers care about: [`Error::Volume`] means "no alert this
//! cycle, nothing is broken"; everything else is fatal for the invocation.

use thiserror::Error;

use crate::scraping::ScrapeError;
use crate::sheets::SheetsError;
use crate::volume::VolumeError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the bondwatch application.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Sheet access failed: {0}")]
    Sheets(#[from] SheetsError),

    #[error("Volume calculation failed: {0}")]
    Volume(#[from] VolumeError),

    #[error("Scrape failed: {0}")]
    Scrape(#[from] ScrapeError),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl Error {
    /// True when the error means "the data needed for this report is not in
    /// the sheet (yet)" rather than an operational failure. Callers skip the
    /// notification and move on.
    pub fn is_data_unavailable(&self) -> bool {
        matches!(self, Error::Volume(_))
    }
}
