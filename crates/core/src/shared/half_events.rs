use std::fmt;

use serde::Serialize;

use super::event::{Event, Half};

/// Identifies one per-half, per-team event segment of a match.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HalfKey {
    pub match_id: String,
    pub half: Half,
    pub team: String,
}

impl fmt::Display for HalfKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {} / {}", self.match_id, self.half, self.team)
    }
}

/// Events of a single segment, ordered by match clock ascending.
#[derive(Clone, Debug, PartialEq)]
pub struct HalfEvents {
    pub key: HalfKey,
    pub events: Vec<Event>,
}

impl HalfEvents {
    pub fn matches(&self, half: Half, team: &str) -> bool {
        self.key.half == half && self.key.team == team
    }
}
