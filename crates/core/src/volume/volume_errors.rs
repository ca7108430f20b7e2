//! Volume calculation error types.

use thiserror::Error;

/// Data-unavailable failures: the sheet does not hold enough usable snapshot
/// columns for the requested range. These are expected between scrapes; the
/// caller logs them and skips the notification.
#[derive(Error, Debug)]
pub enum VolumeError {
    /// No snapshot column lies within the matching tolerance of a target.
    #[error("no snapshot column within {tolerance_minutes} minutes of {target}")]
    NoSnapshotInWindow {
        target: String,
        tolerance_minutes: i64,
    },

    /// Fewer than two usable snapshot columns in the requested range.
    #[error("insufficient data: {0}")]
    InsufficientData(String),
}
