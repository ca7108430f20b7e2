//! Alert scheduling - time-of-day window dispatch and per-report target
//! ranges. Everything here is a pure function of the current time; the
//! external scheduler owns recurrence and double-invocation avoidance.

mod schedule_model;

pub use schedule_model::*;
