use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::shared::event::Event;

/// The three stoppage families whose durations make up total stoppage time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StoppageFamily {
    Restart,
    Goal,
    Var,
}

impl StoppageFamily {
    pub const ALL: &'static [StoppageFamily] =
        &[StoppageFamily::Restart, StoppageFamily::Goal, StoppageFamily::Var];
}

impl fmt::Display for StoppageFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoppageFamily::Restart => write!(f, "Restart"),
            StoppageFamily::Goal => write!(f, "Goal"),
            StoppageFamily::Var => write!(f, "VAR"),
        }
    }
}

/// Instant a stoppage is dated by.
///
/// Restart and VAR stoppages are dated on the wall clock (decision or
/// review start); goal stoppages on the match clock of the goal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ReferenceTime {
    WallClock(DateTime<Utc>),
    MatchClock(f64),
}

/// A single stoppage extracted from the event stream.
///
/// `duration_secs` is not validated: malformed source data may yield a
/// negative value, which is kept and aggregated as-is.
#[derive(Clone, Debug, PartialEq)]
pub struct StoppageInterval<'a> {
    pub family: StoppageFamily,
    pub reference_time: ReferenceTime,
    pub duration_secs: f64,
    pub source_event: &'a Event,
}

/// Raw duration values of a sequence of intervals, in emission order.
pub fn durations(intervals: &[StoppageInterval<'_>]) -> Vec<f64> {
    intervals.iter().map(|i| i.duration_secs).collect()
}
