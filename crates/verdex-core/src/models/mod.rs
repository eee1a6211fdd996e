//! Data models: the input document tree, the output record, and
//! extraction configuration.

pub mod config;
pub mod document;
pub mod record;

pub use config::ExtractionConfig;
pub use document::{CaseDocument, LawArticle, Paragraph, SectionLabel, Sentence, SubParagraph};
pub use record::{CaseRecord, FieldValue};
