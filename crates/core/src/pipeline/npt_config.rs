use serde::{Deserialize, Serialize};

use crate::shared::constants::DEFAULT_RESTART_PATTERNS;
use crate::stoppage::domain::stoppage_classifier::StoppageClassifier;

/// Tunable input of the net playing time engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NptConfig {
    #[serde(default = "default_restart_patterns")]
    pub restart_category_patterns: Vec<String>,
}

fn default_restart_patterns() -> Vec<String> {
    DEFAULT_RESTART_PATTERNS.iter().map(|p| p.to_string()).collect()
}

impl Default for NptConfig {
    fn default() -> Self {
        Self {
            restart_category_patterns: default_restart_patterns(),
        }
    }
}

impl NptConfig {
    pub fn with_restart_patterns(patterns: Vec<String>) -> Self {
        Self {
            restart_category_patterns: patterns,
        }
    }

    pub fn classifier(&self) -> StoppageClassifier {
        StoppageClassifier::new(&self.restart_category_patterns)
    }
}
