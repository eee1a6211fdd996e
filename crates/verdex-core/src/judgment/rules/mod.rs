//! Rule-based field extractors for first-instance criminal judgments.
//!
//! Every function here is a pure read of normalized document text plus the
//! shared pattern catalog; nothing mutates shared state, so documents can be
//! processed in parallel with no coordination.

pub mod amounts;
pub mod dates;
pub mod defendant;
pub mod facts;
pub mod metadata;
pub mod money;
pub mod opinion;
pub mod patterns;
pub mod penalty;
pub mod procedure;

pub use amounts::{reconcile_amounts, AmountRecord};
pub use dates::extract_dates;
pub use defendant::{extract_defendant, DefendantProfile};
pub use facts::count_facts;
pub use metadata::{classify_court_level, classify_province, duration_days, is_panel_trial};
pub use money::extract_moneys;
pub use opinion::{defense_acceptance, defensive_sentences, DefenseAcceptance};
pub use penalty::{extract_penalty, FreedomTerm, PenaltyRecord, PropertyPenalty, RightsTerm};
