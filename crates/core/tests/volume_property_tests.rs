//! Property-based integration tests for the volume calculator.
//!
//! These tests verify that universal properties of the delta aggregation
//! hold across all valid inputs, using the `proptest` crate for random test
//! case generation.

use chrono::{DateTime, Duration, TimeZone};
use chrono_tz::Tz;
use proptest::prelude::*;
use rust_decimal::Decimal;

use bondwatch_core::constants::DEFAULT_TZ;
use bondwatch_core::snapshots::SnapshotColumn;
use bondwatch_core::volume::aggregate_run;

// =============================================================================
// Generators
// =============================================================================

fn base_time() -> DateTime<Tz> {
    DEFAULT_TZ
        .with_ymd_and_hms(2025, 10, 1, 11, 0, 0)
        .single()
        .unwrap()
}

/// Builds an hourly-spaced run of snapshot columns starting at column D.
fn hourly_columns(count: usize) -> Vec<SnapshotColumn> {
    (0..count)
        .map(|position| {
            let taken_at = base_time() + Duration::hours(position as i64);
            SnapshotColumn {
                index: 3 + position,
                label: format!("Snapshot ({})", taken_at.format("%Y-%m-%d %H:%M")),
                taken_at,
            }
        })
        .collect()
}

/// A fully numeric sheet: per row, a face value and one quantity per column.
fn arb_numeric_rows(columns: usize) -> impl Strategy<Value = Vec<Vec<String>>> {
    proptest::collection::vec(
        (1u32..=10_000, proptest::collection::vec(0u32..=10_000, columns)),
        1..8,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(position, (face, quantities))| {
                let mut row = vec![
                    format!("BOND {}", position),
                    String::new(),
                    face.to_string(),
                ];
                row.extend(quantities.into_iter().map(|q| q.to_string()));
                row
            })
            .collect()
    })
}

/// A row no interval can use: face value and quantities all unparseable.
fn arb_garbage_row(columns: usize) -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[a-z ]{0,6}", columns + 3).prop_map(|mut cells| {
        cells[0] = "GARBAGE".to_string();
        cells
    })
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// **Property: consecutive deltas telescope.**
    ///
    /// Over a gapless run, the sum of the (N-1) consecutive deltas must
    /// equal the direct first-to-last two-column delta, and for N=2 the two
    /// are the same computation.
    #[test]
    fn prop_consecutive_deltas_telescope(
        column_count in 2usize..6,
        rows in arb_numeric_rows(6),
    ) {
        let columns = hourly_columns(column_count);
        let max_gap = Duration::minutes(90);

        let consecutive = aggregate_run(&columns, &rows, max_gap);
        let direct = aggregate_run(
            &[columns[0].clone(), columns[column_count - 1].clone()],
            &rows,
            Duration::hours(24),
        );

        prop_assert_eq!(consecutive.intervals.len(), column_count - 1);
        prop_assert_eq!(consecutive.raw_change, direct.raw_change);
        prop_assert_eq!(consecutive.net_change, direct.net_change);
    }

    /// **Property: net change is row-order independent.**
    #[test]
    fn prop_row_order_independence(
        rows in arb_numeric_rows(3),
    ) {
        let columns = hourly_columns(3);
        let max_gap = Duration::minutes(90);

        let forward = aggregate_run(&columns, &rows, max_gap);
        let reversed: Vec<Vec<String>> = rows.iter().rev().cloned().collect();
        let backward = aggregate_run(&columns, &reversed, max_gap);

        prop_assert_eq!(forward.net_change, backward.net_change);
        prop_assert_eq!(forward.raw_change, backward.raw_change);
        prop_assert_eq!(forward.entities, backward.entities);
    }

    /// **Property: unparseable rows never move the totals.**
    #[test]
    fn prop_garbage_rows_are_inert(
        rows in arb_numeric_rows(3),
        garbage in arb_garbage_row(3),
    ) {
        let columns = hourly_columns(3);
        let max_gap = Duration::minutes(90);

        let baseline = aggregate_run(&columns, &rows, max_gap);
        let mut polluted = rows;
        polluted.push(garbage);
        let outcome = aggregate_run(&columns, &polluted, max_gap);

        prop_assert_eq!(outcome.net_change, baseline.net_change);
        prop_assert_eq!(outcome.raw_change, baseline.raw_change);
        prop_assert_eq!(outcome.entities, baseline.entities);
    }

    /// **Property: the net change matches the closed form.**
    ///
    /// For a fully numeric sheet the total must equal
    /// sum over rows of (first - last) * face_value.
    #[test]
    fn prop_net_change_matches_closed_form(
        rows in arb_numeric_rows(4),
    ) {
        let columns = hourly_columns(4);
        let outcome = aggregate_run(&columns, &rows, Duration::minutes(90));

        let expected: Decimal = rows
            .iter()
            .map(|row| {
                let face: Decimal = row[2].parse().unwrap();
                let first: Decimal = row[3].parse().unwrap();
                let last: Decimal = row[6].parse().unwrap();
                (first - last) * face
            })
            .sum();

        prop_assert_eq!(outcome.net_change, expected);
        prop_assert_eq!(outcome.entities, rows.len());
    }
}
