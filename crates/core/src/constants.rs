//! Shared defaults and fixed sheet geometry.

use chrono_tz::Tz;

/// Default timezone for snapshot labels and alert windows.
/// The marketplace operates on Indian civil time, so every label written to
/// the sheet and every alert window is interpreted in IST unless configured
/// otherwise.
pub const DEFAULT_TZ: Tz = chrono_tz::Asia::Kolkata;

/// Prefix a column label must carry to count as a snapshot column.
pub const DEFAULT_SNAPSHOT_PREFIX: &str = "Snapshot";

/// How far (in minutes) a snapshot column may sit from a requested target
/// time and still be used as a range endpoint.
pub const DEFAULT_WINDOW_TOLERANCE_MINUTES: i64 = 45;

/// Largest gap (in minutes) between consecutive snapshot columns that still
/// yields a trusted interval. Wider gaps are reported as missing intervals.
pub const DEFAULT_MAX_GAP_MINUTES: i64 = 120;

/// Fixed sheet geometry (0-based column positions).
/// Column A holds the bond name, column B the product page link, column C
/// the face value. Snapshot columns are appended from column D onward.
pub const NAME_COLUMN: usize = 0;
pub const LINK_COLUMN: usize = 1;
pub const FACE_VALUE_COLUMN: usize = 2;
pub const FIRST_SNAPSHOT_COLUMN: usize = 3;

/// Timestamp pattern embedded in snapshot column labels.
pub const LABEL_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";
