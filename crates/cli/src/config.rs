use std::fs;
use std::path::{Path, PathBuf};

use npt_core::pipeline::npt_config::NptConfig;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("restart category patterns must not contain an empty string")]
    EmptyPattern,
}

/// Per-user config location, e.g. `~/.config/npt/config.json` on Linux.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("npt").join("config.json"))
}

pub fn load(path: &Path) -> Result<NptConfig, ConfigError> {
    let json = fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_json::from_str(&json).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Resolution order: explicit file, then the per-user file if it exists,
/// then defaults. `restart_patterns` overrides whichever was chosen. An
/// empty pattern would match every category and is rejected.
pub fn resolve(
    explicit: Option<&Path>,
    user_path: Option<PathBuf>,
    restart_patterns: Option<Vec<String>>,
) -> Result<NptConfig, ConfigError> {
    let mut config = match (explicit, user_path) {
        (Some(path), _) => load(path)?,
        (None, Some(path)) if path.is_file() => {
            log::debug!("Using config {}", path.display());
            load(&path)?
        }
        _ => NptConfig::default(),
    };
    if let Some(patterns) = restart_patterns {
        config.restart_category_patterns = patterns;
    }
    if config.restart_category_patterns.iter().any(|p| p.is_empty()) {
        return Err(ConfigError::EmptyPattern);
    }
    Ok(config)
}
