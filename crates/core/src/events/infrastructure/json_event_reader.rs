use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::events::domain::event_provider::EventProvider;
use crate::shared::clock::parse_timestamp;
use crate::shared::event::{Event, Half};
use crate::shared::half_events::{HalfEvents, HalfKey};

use super::match_directory::MatchDirectory;

#[derive(Error, Debug)]
pub enum EventReadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse events in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid timestamp '{value}' for {category_id} at match clock {match_clock} in {path}")]
    InvalidTimestamp {
        path: PathBuf,
        value: String,
        category_id: String,
        match_clock: f64,
    },
    #[error("data directory not found: {0}")]
    MissingDirectory(PathBuf),
}

#[derive(Deserialize)]
struct RawEvent {
    #[serde(rename = "eID", alias = "categoryId")]
    category_id: String,
    #[serde(rename = "gameclock", alias = "matchClock")]
    match_clock: f64,
    #[serde(rename = "timestamp", alias = "wallClock")]
    wall_clock: String,
    #[serde(rename = "qualifier", alias = "metadata", default)]
    metadata: Option<Value>,
    half: Half,
    team: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum EventFile {
    Match {
        #[serde(rename = "matchId", default)]
        match_id: Option<String>,
        events: Vec<RawEvent>,
    },
    Bare(Vec<RawEvent>),
}

/// Reads normalized JSON event files.
///
/// A file holds either a bare array of events or `{"matchId", "events"}`.
/// Events are grouped into one segment per `(half, team)` in order of first
/// appearance, and each segment is stably sorted by match clock. An event
/// whose wall clock cannot be parsed fails the whole file.
pub struct JsonEventReader;

impl JsonEventReader {
    pub fn new() -> Self {
        Self
    }

    pub fn read_file(&self, path: &Path) -> Result<Vec<HalfEvents>, EventReadError> {
        let json = fs::read_to_string(path).map_err(|e| EventReadError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        self.read_str(&json, path)
    }

    /// Parses the contents of the event file at `path`. The file stem names
    /// the match when the contents do not carry a `matchId`.
    pub fn read_str(&self, json: &str, path: &Path) -> Result<Vec<HalfEvents>, EventReadError> {
        let file = serde_json::from_str::<EventFile>(json).map_err(|e| EventReadError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
        let (match_id, raw_events) = match file {
            EventFile::Match {
                match_id: Some(id),
                events,
            } => (id, events),
            EventFile::Match {
                match_id: None,
                events,
            }
            | EventFile::Bare(events) => (file_stem(path), events),
        };
        group_by_half(&match_id, raw_events, path)
    }

    pub fn read_directory(&self, dir: &Path) -> Result<Vec<HalfEvents>, EventReadError> {
        let files = MatchDirectory::new(dir).event_files()?;
        log::info!("Found {} event file(s) in {}", files.len(), dir.display());
        let mut halves = Vec::new();
        for file in files {
            halves.extend(self.read_file(&file)?);
        }
        Ok(halves)
    }
}

impl Default for JsonEventReader {
    fn default() -> Self {
        Self::new()
    }
}

impl EventProvider for JsonEventReader {
    fn load(&self, path: &Path) -> Result<Vec<HalfEvents>, Box<dyn std::error::Error>> {
        let halves = if path.is_dir() {
            self.read_directory(path)?
        } else {
            self.read_file(path)?
        };
        Ok(halves)
    }
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn group_by_half(
    match_id: &str,
    raw_events: Vec<RawEvent>,
    path: &Path,
) -> Result<Vec<HalfEvents>, EventReadError> {
    let mut segments: Vec<HalfEvents> = Vec::new();
    let mut index: HashMap<(Half, String), usize> = HashMap::new();

    for raw in raw_events {
        let wall_clock =
            parse_timestamp(&raw.wall_clock).ok_or_else(|| EventReadError::InvalidTimestamp {
                path: path.to_path_buf(),
                value: raw.wall_clock.clone(),
                category_id: raw.category_id.clone(),
                match_clock: raw.match_clock,
            })?;
        let slot = *index
            .entry((raw.half, raw.team.clone()))
            .or_insert_with(|| {
                segments.push(HalfEvents {
                    key: HalfKey {
                        match_id: match_id.to_string(),
                        half: raw.half,
                        team: raw.team.clone(),
                    },
                    events: Vec::new(),
                });
                segments.len() - 1
            });
        segments[slot].events.push(Event {
            category_id: raw.category_id,
            match_clock: raw.match_clock,
            wall_clock,
            metadata: raw.metadata,
            half: raw.half,
            team: raw.team,
        });
    }

    for segment in &mut segments {
        segment
            .events
            .sort_by(|a, b| a.match_clock.total_cmp(&b.match_clock));
    }
    Ok(segments)
}
