//! Snapshot column index - locating timestamped snapshot columns in the
//! sheet header and matching them to target times.

mod snapshot_index;
mod snapshot_model;

pub use snapshot_index::*;
pub use snapshot_model::*;

#[cfg(test)]
mod snapshot_index_tests;
