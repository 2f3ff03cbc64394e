use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::shared::clock::parse_timestamp;

/// Typed access to timestamp qualifiers nested in event metadata.
///
/// Missing metadata, a non-object payload, a missing key, a non-string value
/// and an unparsable timestamp are all reported the same way: `None`.
/// Calculators rely on this to drop incomplete events silently.
pub struct QualifierExtractor;

impl QualifierExtractor {
    pub fn extract(metadata: Option<&Value>, field_name: &str) -> Option<DateTime<Utc>> {
        metadata?
            .as_object()?
            .get(field_name)?
            .as_str()
            .and_then(parse_timestamp)
    }
}
