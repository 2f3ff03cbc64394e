use std::fs;
use std::path::{Path, PathBuf};

use crate::shared::constants::EVENT_FILE_EXTENSION;

use super::json_event_reader::EventReadError;

/// A data directory holding one normalized event file per match.
pub struct MatchDirectory {
    root: PathBuf,
}

impl MatchDirectory {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    /// Event files directly inside the directory, sorted by file name so
    /// batch output is deterministic.
    pub fn event_files(&self) -> Result<Vec<PathBuf>, EventReadError> {
        if !self.root.is_dir() {
            return Err(EventReadError::MissingDirectory(self.root.clone()));
        }
        let entries = fs::read_dir(&self.root).map_err(|e| EventReadError::Io {
            path: self.root.clone(),
            source: e,
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let path = entry
                .map_err(|e| EventReadError::Io {
                    path: self.root.clone(),
                    source: e,
                })?
                .path();
            if path.is_file() && is_event_file(&path) {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }
}

fn is_event_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(EVENT_FILE_EXTENSION))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::json("match.json", true)]
    #[case::upper("MATCH.JSON", true)]
    #[case::xml("events_raw.xml", false)]
    #[case::no_ext("README", false)]
    fn test_is_event_file(#[case] name: &str, #[case] expected: bool) {
        assert_eq!(is_event_file(Path::new(name)), expected);
    }

    #[test]
    fn test_lists_sorted_json_files_only() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["m3.json", "m1.json", "m2.JSON", "info.xml"] {
            fs::write(dir.path().join(name), "[]").unwrap();
        }
        fs::create_dir(dir.path().join("nested.json")).unwrap();

        let files = MatchDirectory::new(dir.path()).event_files().unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["m1.json", "m2.JSON", "m3.json"]);
    }

    #[test]
    fn test_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(MatchDirectory::new(dir.path()).event_files().unwrap().is_empty());
    }

    #[test]
    fn test_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let err = MatchDirectory::new(&dir.path().join("absent"))
            .event_files()
            .unwrap_err();
        assert!(matches!(err, EventReadError::MissingDirectory(_)));
    }
}
