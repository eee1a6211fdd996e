//! Document blob storage.
//!
//! Documents at rest are zlib-compressed JSON wrapped in base64 so they
//! survive text-only transport. [`encode`]/[`decode`] are the codec;
//! [`RecordStore`] abstracts where blobs live, with [`DirStore`] as the
//! directory-of-files implementation.

use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use tracing::trace;

use crate::error::StoreError;

/// Compress a JSON payload to its storage form.
///
/// The payload is validated as JSON first; compressing a corrupt document
/// would only defer the failure to every future read.
pub fn encode(json: &str) -> Result<String, StoreError> {
    if serde_json::from_str::<serde_json::Value>(json).is_err() {
        return Err(StoreError::NotJson);
    }
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(json.as_bytes()).map_err(StoreError::Io)?;
    let compressed = encoder.finish().map_err(StoreError::Io)?;
    Ok(STANDARD.encode(compressed))
}

/// Inflate a stored blob back to its JSON payload.
pub fn decode(blob: &str) -> Result<String, StoreError> {
    let compressed = STANDARD.decode(blob.trim())?;
    let mut decoder = ZlibDecoder::new(compressed.as_slice());
    let mut json = String::new();
    decoder
        .read_to_string(&mut json)
        .map_err(StoreError::Decompress)?;
    if serde_json::from_str::<serde_json::Value>(&json).is_err() {
        return Err(StoreError::NotJson);
    }
    Ok(json)
}

/// A source of document JSON payloads keyed by document id.
pub trait RecordStore {
    /// Fetch one document's JSON, or `None` when the id is unknown.
    fn fetch(&self, id: u64) -> Result<Option<String>, StoreError>;
}

/// One-file-per-document store rooted at a directory.
///
/// A document lives at `{id}.json` (plain JSON) or `{id}.b64` (encoded
/// blob); plain JSON wins when both exist.
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl RecordStore for DirStore {
    fn fetch(&self, id: u64) -> Result<Option<String>, StoreError> {
        let json_path = self.root.join(format!("{id}.json"));
        if json_path.is_file() {
            trace!(id, path = %json_path.display(), "reading plain document");
            return fs::read_to_string(&json_path)
                .map(Some)
                .map_err(StoreError::Io);
        }

        let blob_path = self.root.join(format!("{id}.b64"));
        if blob_path.is_file() {
            trace!(id, path = %blob_path.display(), "reading encoded document");
            let blob = fs::read_to_string(&blob_path).map_err(StoreError::Io)?;
            return decode(&blob).map(Some);
        }

        Ok(None)
    }
}
