//! Window dispatch model.

use chrono::{DateTime, Datelike, Duration, NaiveTime, TimeZone};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// A named report the dispatcher can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobKind {
    /// Trailing 24 hours ending at the 11:00 snapshot.
    Daily11,
    /// Trailing 24 hours ending at the 18:00 snapshot.
    Daily18,
    /// From the 1st of the month 11:00 to the latest 11:00 snapshot.
    MonthToDate,
}

impl JobKind {
    pub fn title(&self) -> &'static str {
        match self {
            JobKind::Daily11 => "24hr Volume Report (11 AM - 11 AM)",
            JobKind::Daily18 => "24hr Volume Report (6 PM - 6 PM)",
            JobKind::MonthToDate => "Month-to-Date (MTD) Volume Report",
        }
    }

    /// The (start, end) target range for this report, anchored on `now`.
    ///
    /// The end anchor is today's scheduled snapshot hour; when `now` is
    /// earlier than half past that hour the snapshot cannot have landed yet,
    /// so the anchor shifts back one day. Returns `None` when the range
    /// collapses (month-to-date invoked before the month's first snapshot).
    pub fn target_range(&self, now: DateTime<Tz>) -> Option<(DateTime<Tz>, DateTime<Tz>)> {
        match self {
            JobKind::Daily11 => {
                let end = end_anchor(now, 11)?;
                Some((end - Duration::days(1), end))
            }
            JobKind::Daily18 => {
                let end = end_anchor(now, 18)?;
                Some((end - Duration::days(1), end))
            }
            JobKind::MonthToDate => {
                let tz = now.timezone();
                let start = tz
                    .with_ymd_and_hms(now.year(), now.month(), 1, 11, 0, 0)
                    .single()?;
                let end = end_anchor(now, 11)?;
                if end <= start {
                    return None;
                }
                Some((start, end))
            }
        }
    }
}

fn end_anchor(now: DateTime<Tz>, hour: u32) -> Option<DateTime<Tz>> {
    let tz = now.timezone();
    let mut anchor = tz
        .with_ymd_and_hms(now.year(), now.month(), now.day(), hour, 0, 0)
        .single()?;
    if now < anchor + Duration::minutes(30) {
        anchor = anchor - Duration::days(1);
    }
    Some(anchor)
}

/// A time-of-day window [start, end) in the configured zone. When the
/// current time falls inside it, every job listed fires.
#[derive(Debug, Clone)]
pub struct AlertWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub jobs: Vec<JobKind>,
}

impl AlertWindow {
    pub fn new(start: NaiveTime, end: NaiveTime, jobs: Vec<JobKind>) -> Self {
        AlertWindow { start, end, jobs }
    }

    fn contains(&self, time: NaiveTime) -> bool {
        time >= self.start && time < self.end
    }
}

/// The production window set: both daily reports fire in a five-minute
/// window half past their snapshot hour; month-to-date rides along with the
/// morning report.
pub fn default_windows() -> Vec<AlertWindow> {
    let hm = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
    vec![
        AlertWindow::new(hm(11, 30), hm(11, 35), vec![JobKind::Daily11, JobKind::MonthToDate]),
        AlertWindow::new(hm(18, 30), hm(18, 35), vec![JobKind::Daily18]),
    ]
}

/// Which jobs are due at `now`. Stateless: invoked twice inside the same
/// window, it answers the same twice - the external scheduler avoids the
/// double run. Outside every window the answer is empty and the invocation
/// is a no-op.
pub fn due_jobs(now: DateTime<Tz>, windows: &[AlertWindow]) -> Vec<JobKind> {
    let time = now.time();
    let mut due = Vec::new();
    for window in windows {
        if window.contains(time) {
            due.extend(window.jobs.iter().copied());
        }
    }
    due
}
