//! Error types for the verdex-core library.

use thiserror::Error;

/// Main error type for the verdex library.
///
/// Field derivation never surfaces here: a section that is missing, a date
/// that fails to parse, or an ambiguous numeral all degrade to an absent
/// field. These variants cover the document boundary only.
#[derive(Error, Debug)]
pub enum VerdexError {
    /// Document decoding error.
    #[error("document error: {0}")]
    Document(#[from] DocumentError),

    /// Stored-document access or codec error.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors related to decoding an input document.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The document payload is not valid JSON.
    #[error("invalid document JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors related to the record store and its blob codec.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The stored token is not valid base64.
    #[error("invalid base64 token: {0}")]
    Base64(#[from] base64::DecodeError),

    /// The compressed payload failed to inflate.
    #[error("decompression failed: {0}")]
    Decompress(#[source] std::io::Error),

    /// The decoded payload is not JSON, so the stored blob is corrupt.
    #[error("decoded payload is not valid JSON")]
    NotJson,

    /// Reading the underlying storage failed.
    #[error("storage I/O error: {0}")]
    Io(#[source] std::io::Error),
}

/// Result type for the verdex library.
pub type Result<T> = std::result::Result<T, VerdexError>;
