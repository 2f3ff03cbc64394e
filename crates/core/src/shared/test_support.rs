use chrono::{DateTime, Duration, TimeZone, Utc};
use serde_json::{json, Value};

use super::event::{Event, Half};

/// Kick-off instant of the synthetic half used throughout the tests.
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2022, 8, 5, 18, 30, 0).unwrap()
}

pub fn at(offset_secs: f64) -> DateTime<Utc> {
    base_time() + Duration::milliseconds((offset_secs * 1000.0).round() as i64)
}

pub fn rfc3339(offset_secs: f64) -> String {
    at(offset_secs).to_rfc3339()
}

/// Event whose wall clock tracks its match clock one-to-one.
pub fn event(category: &str, match_clock: f64) -> Event {
    Event {
        category_id: category.to_string(),
        match_clock,
        wall_clock: at(match_clock),
        metadata: None,
        half: Half::FirstHalf,
        team: "Home".to_string(),
    }
}

pub fn event_with_metadata(category: &str, match_clock: f64, metadata: Value) -> Event {
    Event {
        metadata: Some(metadata),
        ..event(category, match_clock)
    }
}

/// Restart decided `delay_secs` before it was taken.
pub fn restart(category: &str, match_clock: f64, delay_secs: f64) -> Event {
    event_with_metadata(
        category,
        match_clock,
        json!({ "DecisionTimestamp": rfc3339(match_clock - delay_secs) }),
    )
}

pub fn var_action(match_clock: f64, start_offset: f64, end_offset: f64) -> Event {
    event_with_metadata(
        "VideoAssistantAction",
        match_clock,
        json!({
            "TimestampStartAction": rfc3339(start_offset),
            "TimestampEndAction": rfc3339(end_offset),
        }),
    )
}
