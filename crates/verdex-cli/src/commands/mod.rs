//! CLI subcommands.

pub mod export;
pub mod process;

use std::fs;
use std::path::Path;

use verdex_core::{store, CaseDocument, ExtractionConfig};

/// Load the extraction configuration, falling back to defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<ExtractionConfig> {
    match config_path {
        Some(path) => Ok(ExtractionConfig::from_file(Path::new(path))?),
        None => Ok(ExtractionConfig::default()),
    }
}

/// Read one judgment document from disk. A `.b64` file holds the encoded
/// blob form; anything else is treated as plain JSON.
pub fn read_document(path: &Path) -> anyhow::Result<CaseDocument> {
    let content = fs::read_to_string(path)?;
    let json = if path.extension().and_then(|e| e.to_str()) == Some("b64") {
        store::decode(&content)?
    } else {
        content
    };
    Ok(CaseDocument::parse(&json)?)
}

/// Document id from the numeric file stem; files named otherwise get id 0.
pub fn document_id(path: &Path) -> u64 {
    path.file_stem()
        .and_then(|s| s.to_str())
        .and_then(|s| s.parse().ok())
        .unwrap_or(0)
}
