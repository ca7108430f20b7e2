//! Volume service - resolves a requested time range against the snapshot
//! sheet and aggregates traded volume over it.

use std::sync::Arc;

use chrono::{DateTime, Duration};
use chrono_tz::Tz;
use log::{debug, info};

use crate::errors::Result;
use crate::sheets::SnapshotStoreTrait;
use crate::snapshots::{closest_column, snapshot_columns, SnapshotColumn};

use super::volume_calculator::aggregate_run;
use super::volume_errors::VolumeError;
use super::volume_model::{VolumeConfig, VolumeReport};

pub struct VolumeService {
    store: Arc<dyn SnapshotStoreTrait>,
    config: VolumeConfig,
}

impl VolumeService {
    pub fn new(store: Arc<dyn SnapshotStoreTrait>, config: VolumeConfig) -> Self {
        VolumeService { store, config }
    }

    /// Computes traded volume between the snapshot columns closest to
    /// `start_target` and `end_target`.
    ///
    /// The sheet is read in two batch fetches (header row, full table);
    /// never cell-by-cell. Either endpoint failing to resolve within the
    /// matching tolerance, or the range collapsing to fewer than two
    /// columns, yields a [`VolumeError`] - an explicit error result, never a
    /// silent zero.
    pub async fn compute_window(
        &self,
        start_target: DateTime<Tz>,
        end_target: DateTime<Tz>,
    ) -> Result<VolumeReport> {
        let header = self.store.get_header_row().await?;
        let columns = snapshot_columns(&header, &self.config.snapshot_prefix, self.config.tz);
        debug!(
            "Snapshot index holds {} columns out of {} headers",
            columns.len(),
            header.len()
        );

        let tolerance = Duration::minutes(self.config.window_tolerance_minutes);
        let first = closest_column(&columns, start_target, tolerance)
            .ok_or_else(|| self.no_snapshot(start_target))?;
        let last = closest_column(&columns, end_target, tolerance)
            .ok_or_else(|| self.no_snapshot(end_target))?;

        if last.taken_at <= first.taken_at {
            return Err(VolumeError::InsufficientData(format!(
                "range resolved to a single snapshot ({})",
                first.label
            ))
            .into());
        }

        let run: Vec<SnapshotColumn> = columns
            .iter()
            .filter(|column| column.taken_at >= first.taken_at && column.taken_at <= last.taken_at)
            .cloned()
            .collect();
        info!(
            "Aggregating {} snapshot columns between {} and {}",
            run.len(),
            first.label,
            last.label
        );

        let rows = self.store.get_all_rows().await?;
        let data_rows = if rows.is_empty() { &rows[..] } else { &rows[1..] };

        let outcome = aggregate_run(
            &run,
            data_rows,
            Duration::minutes(self.config.max_gap_minutes),
        );
        if outcome.all_missing() {
            return Err(VolumeError::InsufficientData(
                "every interval in range exceeds the gap limit".to_string(),
            )
            .into());
        }

        Ok(VolumeReport {
            net_change: outcome.net_change,
            raw_change: outcome.raw_change,
            start_time: start_target,
            end_time: end_target,
            first_label: first.label.clone(),
            last_label: last.label.clone(),
            entities: outcome.entities,
            intervals: outcome.intervals,
        })
    }

    fn no_snapshot(&self, target: DateTime<Tz>) -> VolumeError {
        VolumeError::NoSnapshotInWindow {
            target: target.to_string(),
            tolerance_minutes: self.config.window_tolerance_minutes,
        }
    }
}
