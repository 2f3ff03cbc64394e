use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Segment of a match an event belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Half {
    FirstHalf,
    SecondHalf,
    FirstHalfExtra,
    SecondHalfExtra,
}

impl Half {
    pub const ALL: &'static [Half] = &[
        Half::FirstHalf,
        Half::SecondHalf,
        Half::FirstHalfExtra,
        Half::SecondHalfExtra,
    ];

    /// Identifier used in event files and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Half::FirstHalf => "firstHalf",
            Half::SecondHalf => "secondHalf",
            Half::FirstHalfExtra => "firstHalfExtra",
            Half::SecondHalfExtra => "secondHalfExtra",
        }
    }

    pub fn parse(value: &str) -> Option<Half> {
        Half::ALL.iter().copied().find(|h| h.as_str() == value)
    }
}

impl fmt::Display for Half {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A normalized match event as supplied by an event provider.
///
/// `match_clock` is seconds since the half began; `wall_clock` is the
/// absolute instant at which the event was recorded. `metadata` carries the
/// category-specific qualifier payload and is usually, but not necessarily,
/// a JSON object.
#[derive(Clone, Debug, PartialEq)]
pub struct Event {
    pub category_id: String,
    pub match_clock: f64,
    pub wall_clock: DateTime<Utc>,
    pub metadata: Option<Value>,
    pub half: Half,
    pub team: String,
}
