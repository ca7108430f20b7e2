//! Pure functions over the header row: building the ordered snapshot index
//! and resolving target times to real columns.

use std::sync::OnceLock;

use chrono::{DateTime, Duration, NaiveDateTime};
use chrono_tz::Tz;
use regex::Regex;

use crate::constants::LABEL_TIMESTAMP_FORMAT;

use super::snapshot_model::SnapshotColumn;

/// Matches the timestamp embedded in a snapshot label, e.g.
/// `Snapshot (2025-10-01 12:01)`.
fn label_timestamp_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\((\d{4}-\d{2}-\d{2} \d{2}:\d{2})\)").expect("label timestamp pattern")
    })
}

/// Extracts the embedded timestamp from a column label, interpreted in `tz`.
/// Returns `None` when the label carries no parseable timestamp.
pub fn parse_label_timestamp(label: &str, tz: Tz) -> Option<DateTime<Tz>> {
    let captures = label_timestamp_re().captures(label)?;
    let naive = NaiveDateTime::parse_from_str(&captures[1], LABEL_TIMESTAMP_FORMAT).ok()?;
    naive.and_local_timezone(tz).single()
}

/// Builds the snapshot index from the header row: every column whose label
/// starts with `prefix` and carries a parseable embedded timestamp, sorted
/// ascending by timestamp. Columns without a parseable timestamp are
/// silently excluded; an empty header yields an empty index.
pub fn snapshot_columns(header: &[String], prefix: &str, tz: Tz) -> Vec<SnapshotColumn> {
    let mut columns: Vec<SnapshotColumn> = header
        .iter()
        .enumerate()
        .filter(|(_, label)| label.starts_with(prefix))
        .filter_map(|(index, label)| {
            parse_label_timestamp(label, tz).map(|taken_at| SnapshotColumn {
                index,
                label: label.clone(),
                taken_at,
            })
        })
        .collect();
    columns.sort_by_key(|column| column.taken_at);
    columns
}

/// Returns the column nearest to `target` among those within `tolerance` of
/// it, or `None` when no column qualifies. Equidistant candidates resolve to
/// the first one in ascending-time order.
pub fn closest_column<'a>(
    columns: &'a [SnapshotColumn],
    target: DateTime<Tz>,
    tolerance: Duration,
) -> Option<&'a SnapshotColumn> {
    let mut best: Option<(&SnapshotColumn, Duration)> = None;
    for column in columns {
        let distance = (column.taken_at - target).abs();
        if distance > tolerance {
            continue;
        }
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((column, distance)),
        }
    }
    best.map(|(column, _)| column)
}
