//! Traded-volume calculation from snapshot columns.
//!
//! The calculator walks an ascending run of snapshot columns, takes deltas
//! between consecutive columns only, and sums them. The service resolves a
//! requested time range to real columns and feeds the calculator from one
//! batch read of the sheet.

pub mod volume_calculator;
mod volume_errors;
mod volume_model;
mod volume_service;

pub use volume_calculator::*;
pub use volume_errors::VolumeError;
pub use volume_model::*;
pub use volume_service::VolumeService;
