//! Extraction configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Tunable constants of the extraction pipeline.
///
/// These encode judgment calls about legal-document phrasing with no
/// derivable rationale, so they are carried as configuration rather than
/// re-derived.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Amount-reconciliation epsilon in ten-thousand-yuan units. When the
    /// adjudicated amount exceeds the alleged amount and the opinion calls
    /// the alleged figure imprecise, the adjudicated amount becomes
    /// alleged minus this value (one hundred yuan by default).
    pub amount_epsilon: f64,

    /// Longest defendant name accepted, in characters. Longer captures are
    /// treated as pattern overshoot and discarded.
    pub max_name_chars: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            amount_epsilon: 0.01,
            max_name_chars: 10,
        }
    }
}

impl ExtractionConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)
            .map_err(crate::error::DocumentError::Json)?;
        Ok(config)
    }
}
