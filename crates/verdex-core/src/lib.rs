//! Core library for Chinese court-judgment field extraction.
//!
//! This crate provides:
//! - Document models for the upstream judgment feed (paragraph tree plus
//!   case metadata)
//! - Text normalization and Chinese numeral parsing
//! - Rule-based field extraction for first-instance criminal judgments
//!   (defendant, procedure, sentencing, corruption amounts)
//! - A flat 54-column output record and the blob codec documents are
//!   stored with

pub mod error;
pub mod judgment;
pub mod models;
pub mod segment;
pub mod store;
pub mod text;

pub use error::{DocumentError, Result, StoreError, VerdexError};
pub use judgment::{CaseCategory, JudgmentProfile};
pub use models::{CaseDocument, CaseRecord, ExtractionConfig, FieldValue};
pub use segment::{Segmenter, Token};
pub use store::{DirStore, RecordStore};
