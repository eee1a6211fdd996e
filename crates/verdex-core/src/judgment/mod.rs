//! Judgment field derivation: the rule catalog and the per-document
//! profile that composes it.

pub mod profile;
pub mod rules;

pub use profile::{CaseCategory, JudgmentProfile};
