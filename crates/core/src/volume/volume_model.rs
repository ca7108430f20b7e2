//! Volume calculation domain models.

use chrono::DateTime;
use chrono_tz::Tz;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::constants::{
    DEFAULT_MAX_GAP_MINUTES, DEFAULT_SNAPSHOT_PREFIX, DEFAULT_TZ, DEFAULT_WINDOW_TOLERANCE_MINUTES,
};

/// Tunables for the volume calculation.
#[derive(Debug, Clone)]
pub struct VolumeConfig {
    /// Label prefix a column must carry to count as a snapshot.
    pub snapshot_prefix: String,
    /// Zone the label timestamps and target times are interpreted in.
    pub tz: Tz,
    /// How far a snapshot may sit from a requested endpoint and still match.
    pub window_tolerance_minutes: i64,
    /// Widest consecutive-column gap that still yields a trusted interval.
    pub max_gap_minutes: i64,
}

impl Default for VolumeConfig {
    fn default() -> Self {
        VolumeConfig {
            snapshot_prefix: DEFAULT_SNAPSHOT_PREFIX.to_string(),
            tz: DEFAULT_TZ,
            window_tolerance_minutes: DEFAULT_WINDOW_TOLERANCE_MINUTES,
            max_gap_minutes: DEFAULT_MAX_GAP_MINUTES,
        }
    }
}

/// Delta between one consecutive snapshot pair.
///
/// Sign convention: quantity change is `earlier - later`, so a positive
/// change means inventory decreased, i.e. units were sold. `net_change` is
/// the face-value-adjusted sum, `raw_change` the unadjusted quantity sum.
/// A pair spaced wider than the configured gap limit is reported with
/// `missing = true`, zero sums, and is excluded from the report totals.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntervalDelta {
    pub from_label: String,
    pub to_label: String,
    pub from_time: DateTime<Tz>,
    pub to_time: DateTime<Tz>,
    pub raw_change: Decimal,
    pub net_change: Decimal,
    /// Rows that contributed to this interval (all three cells numeric).
    pub entities: usize,
    pub missing: bool,
}

/// Aggregated result over a requested time range.
///
/// `start_time`/`end_time` echo the requested targets; `first_label` and
/// `last_label` identify the snapshot columns actually used as endpoints.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeReport {
    pub net_change: Decimal,
    pub raw_change: Decimal,
    pub start_time: DateTime<Tz>,
    pub end_time: DateTime<Tz>,
    pub first_label: String,
    pub last_label: String,
    /// Rows that contributed to at least one non-missing interval.
    pub entities: usize,
    pub intervals: Vec<IntervalDelta>,
}
