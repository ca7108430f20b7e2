//! Tests for the snapshot index and closest-column lookup.

use chrono::{DateTime, Duration, TimeZone};
use chrono_tz::Tz;

use crate::constants::DEFAULT_TZ;
use crate::snapshots::{closest_column, parse_label_timestamp, snapshot_columns};

fn ist(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Tz> {
    DEFAULT_TZ
        .with_ymd_and_hms(y, mo, d, h, mi, 0)
        .single()
        .unwrap()
}

fn header(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_parse_label_timestamp() {
    let parsed = parse_label_timestamp("Snapshot (2025-10-01 12:01)", DEFAULT_TZ).unwrap();
    assert_eq!(parsed, ist(2025, 10, 1, 12, 1));
}

#[test]
fn test_parse_label_timestamp_rejects_garbage() {
    assert!(parse_label_timestamp("Snapshot", DEFAULT_TZ).is_none());
    assert!(parse_label_timestamp("Snapshot (yesterday)", DEFAULT_TZ).is_none());
    assert!(parse_label_timestamp("Snapshot (2025-13-40 99:99)", DEFAULT_TZ).is_none());
}

#[test]
fn test_snapshot_columns_excludes_unparseable_and_sorts_ascending() {
    let header = header(&[
        "Bond Name",
        "Link",
        "Face Value",
        "Snapshot (2025-10-02 11:00)",
        "Snapshot (2025-10-01 11:00)",
        "Snapshot (broken)",
        "Notes",
        "Snapshot (2025-10-01 18:00)",
    ]);
    let columns = snapshot_columns(&header, "Snapshot", DEFAULT_TZ);

    assert_eq!(columns.len(), 3);
    assert_eq!(columns[0].index, 4);
    assert_eq!(columns[0].taken_at, ist(2025, 10, 1, 11, 0));
    assert_eq!(columns[1].taken_at, ist(2025, 10, 1, 18, 0));
    assert_eq!(columns[2].taken_at, ist(2025, 10, 2, 11, 0));
}

#[test]
fn test_snapshot_columns_requires_prefix() {
    let header = header(&["Hourly Change (2025-10-01 11:00)", "Snapshot (2025-10-01 12:00)"]);
    let columns = snapshot_columns(&header, "Snapshot", DEFAULT_TZ);
    assert_eq!(columns.len(), 1);
    assert_eq!(columns[0].index, 1);
}

#[test]
fn test_snapshot_columns_empty_header() {
    assert!(snapshot_columns(&[], "Snapshot", DEFAULT_TZ).is_empty());
}

#[test]
fn test_closest_column_none_outside_tolerance() {
    let header = header(&["Snapshot (2025-10-01 09:00)"]);
    let columns = snapshot_columns(&header, "Snapshot", DEFAULT_TZ);
    let found = closest_column(&columns, ist(2025, 10, 1, 11, 0), Duration::minutes(45));
    assert!(found.is_none());
}

#[test]
fn test_closest_column_picks_minimum_distance() {
    let header = header(&[
        "Snapshot (2025-10-01 10:20)",
        "Snapshot (2025-10-01 11:05)",
        "Snapshot (2025-10-01 11:40)",
    ]);
    let columns = snapshot_columns(&header, "Snapshot", DEFAULT_TZ);
    let found = closest_column(&columns, ist(2025, 10, 1, 11, 0), Duration::minutes(45)).unwrap();
    assert_eq!(found.taken_at, ist(2025, 10, 1, 11, 5));
}

#[test]
fn test_closest_column_tie_resolves_to_earlier() {
    let header = header(&[
        "Snapshot (2025-10-01 10:50)",
        "Snapshot (2025-10-01 11:10)",
    ]);
    let columns = snapshot_columns(&header, "Snapshot", DEFAULT_TZ);
    let found = closest_column(&columns, ist(2025, 10, 1, 11, 0), Duration::minutes(45)).unwrap();
    assert_eq!(found.taken_at, ist(2025, 10, 1, 10, 50));
}
