use std::path::Path;

use crate::shared::half_events::HalfEvents;

/// Supplies normalized, per-half event segments from some source.
///
/// Implementations own the file format. Every returned segment must be
/// ordered by match clock ascending; the engine does not re-sort.
pub trait EventProvider: Send {
    fn load(&self, path: &Path) -> Result<Vec<HalfEvents>, Box<dyn std::error::Error>>;
}
