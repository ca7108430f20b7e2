//! Pure delta aggregation over an ascending run of snapshot columns.
//!
//! Kept free of I/O so the telescoping and skip policies are testable
//! against in-memory tables.

use std::collections::HashSet;

use chrono::Duration;
use rust_decimal::Decimal;

use crate::constants::FACE_VALUE_COLUMN;
use crate::snapshots::SnapshotColumn;

use super::volume_model::IntervalDelta;

/// What [`aggregate_run`] produces: the per-interval breakdown plus totals
/// over the non-missing intervals.
#[derive(Debug)]
pub struct AggregateOutcome {
    pub intervals: Vec<IntervalDelta>,
    pub raw_change: Decimal,
    pub net_change: Decimal,
    /// Rows that contributed to at least one non-missing interval.
    pub entities: usize,
}

impl AggregateOutcome {
    /// True when no interval in the run could be trusted.
    pub fn all_missing(&self) -> bool {
        self.intervals.iter().all(|interval| interval.missing)
    }
}

/// Parses a raw sheet cell as a number. Blank and non-numeric cells yield
/// `None`; grouping commas are tolerated.
pub fn parse_cell(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.replace(',', "").parse().ok()
}

fn cell(row: &[String], index: usize) -> &str {
    row.get(index).map(String::as_str).unwrap_or("")
}

/// Aggregates value changes over `columns`, an ascending run of snapshot
/// columns, against `rows` (data rows only, header stripped).
///
/// Deltas are taken between consecutive columns only and summed - never
/// first-to-last directly, so uneven sampling gaps cannot bias the total. A
/// pair spaced wider than `max_gap` becomes a missing interval: present in
/// the breakdown, excluded from the sums, never fatal. A row contributes to
/// an interval only when both quantities and the face value parse as
/// numbers; anything else is skipped for that interval, not zeroed.
pub fn aggregate_run(
    columns: &[SnapshotColumn],
    rows: &[Vec<String>],
    max_gap: Duration,
) -> AggregateOutcome {
    let mut intervals = Vec::new();
    let mut total_raw = Decimal::ZERO;
    let mut total_net = Decimal::ZERO;
    let mut contributing: HashSet<usize> = HashSet::new();

    for pair in columns.windows(2) {
        let (earlier, later) = (&pair[0], &pair[1]);

        if later.taken_at - earlier.taken_at > max_gap {
            intervals.push(IntervalDelta {
                from_label: earlier.label.clone(),
                to_label: later.label.clone(),
                from_time: earlier.taken_at,
                to_time: later.taken_at,
                raw_change: Decimal::ZERO,
                net_change: Decimal::ZERO,
                entities: 0,
                missing: true,
            });
            continue;
        }

        let mut raw = Decimal::ZERO;
        let mut net = Decimal::ZERO;
        let mut entities = 0usize;

        for (row_index, row) in rows.iter().enumerate() {
            let Some(earlier_qty) = parse_cell(cell(row, earlier.index)) else {
                continue;
            };
            let Some(later_qty) = parse_cell(cell(row, later.index)) else {
                continue;
            };
            let Some(face_value) = parse_cell(cell(row, FACE_VALUE_COLUMN)) else {
                continue;
            };

            let quantity_change = earlier_qty - later_qty;
            raw += quantity_change;
            net += quantity_change * face_value;
            entities += 1;
            contributing.insert(row_index);
        }

        total_raw += raw;
        total_net += net;
        intervals.push(IntervalDelta {
            from_label: earlier.label.clone(),
            to_label: later.label.clone(),
            from_time: earlier.taken_at,
            to_time: later.taken_at,
            raw_change: raw,
            net_change: net,
            entities,
            missing: false,
        });
    }

    AggregateOutcome {
        intervals,
        raw_change: total_raw,
        net_change: total_net,
        entities: contributing.len(),
    }
}
