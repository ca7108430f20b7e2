//! Sheet access error types.

use thiserror::Error;

/// Errors that can occur when talking to the snapshot sheet. All of these
/// are fatal for the current invocation: logged, never retried.
#[derive(Error, Debug)]
pub enum SheetsError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Service account key file missing or malformed
    #[error("Service account key error: {0}")]
    Key(String),

    /// Token endpoint rejected the assertion
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Sheets API returned an error
    #[error("Sheets API error: {0}")]
    Api(String),
}
