//! Snapshot column domain model.

use chrono::DateTime;
use chrono_tz::Tz;

/// One timestamped snapshot column in the sheet.
///
/// `index` is the 0-based position in the header row, `label` the full
/// header text, `taken_at` the timestamp parsed out of the label. Columns
/// are not necessarily contiguous or evenly spaced; a skipped scrape leaves
/// a gap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotColumn {
    pub index: usize,
    pub label: String,
    pub taken_at: DateTime<Tz>,
}
