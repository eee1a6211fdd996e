//! Sentencing extraction from the judgment-result section.

use crate::text::{normalize, numerals};

use super::money::extract_moneys;
use super::patterns::{
    CONFISCATION, DEATH_PENALTY, DETENTION, EXEMPTION, FINE, FIXED_TERM, LIFE_TERM,
    OFFENSE_COUNT, PROBATION, RIGHTS_TERM, SENTENCE_SPLIT,
};

/// Primary (freedom) sentence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FreedomTerm {
    /// Months of fixed-term imprisonment; negative months mean detention
    /// without labor (拘役), zero means no freedom penalty.
    Months(i64),
    /// Life imprisonment.
    Life,
    /// Death penalty.
    Death,
}

/// Property penalty.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropertyPenalty {
    /// Ten-thousand-yuan amount; positive is a fine, negative a
    /// confiscation, zero no property penalty.
    Amount(f64),
    /// Confiscation of all property.
    All,
    /// A fine and a confiscation together, summed and tagged.
    Combined(f64),
}

/// Deprivation of political rights.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RightsTerm {
    /// Months of deprivation; zero means none.
    Months(i64),
    /// Deprivation for life.
    Life,
}

/// A parsed sentencing record.
///
/// Exists only when at least one offense declaration was found; once it
/// exists, every sub-field is resolved (zero-equivalents at minimum), never
/// absent.
#[derive(Debug, Clone, PartialEq)]
pub struct PenaltyRecord {
    /// Number of 犯…罪 offense declarations.
    pub counts: usize,
    pub freedom: FreedomTerm,
    pub property: PropertyPenalty,
    pub rights: RightsTerm,
    /// Probation length in months.
    pub probation: i64,
}

/// Parse the sentencing record out of the judgment-result section.
///
/// Only the text before the first blank-run delimiter is considered (later
/// runs hold appeal instructions). Returns `None` when no offense
/// declaration is found; a malformed operative clause is not guessed at.
pub fn extract_penalty(judgment_text: &str) -> Option<PenaltyRecord> {
    let clean = normalize::clean(judgment_text);
    let head = clean.split("    ").next().unwrap_or("");

    let counts = OFFENSE_COUNT.find_iter(head).count();
    if counts == 0 {
        return None;
    }

    // Everything before the last offense declaration or 执行 marker is
    // per-offense discussion; the operative clause is what follows it.
    let operative = SENTENCE_SPLIT.split(head).last().unwrap_or(head);

    let mut record = PenaltyRecord {
        counts,
        freedom: FreedomTerm::Months(0),
        property: PropertyPenalty::Amount(0.0),
        rights: RightsTerm::Months(0),
        probation: 0,
    };

    // Freedom penalty, first match wins in this priority order.
    if let Some(caps) = DETENTION.captures(operative) {
        if let Some(months) = numerals::parse_period(&caps[1]) {
            record.freedom = FreedomTerm::Months(-months);
        }
    } else if let Some(caps) = FIXED_TERM.captures(operative) {
        if let Some(months) = numerals::parse_period(&caps[1]) {
            record.freedom = FreedomTerm::Months(months);
        }
    } else if LIFE_TERM.is_match(operative) {
        record.freedom = FreedomTerm::Life;
    } else if DEATH_PENALTY.is_match(operative) {
        record.freedom = FreedomTerm::Death;
    }

    // Property penalty. A literal 全部 (all property) outranks any numeric
    // amount; a fine plus a confiscation fold into one combined value.
    if operative.contains("全部") {
        record.property = PropertyPenalty::All;
    } else {
        let fine = FINE
            .captures(operative)
            .and_then(|c| extract_moneys(&c[1]).first().copied());
        let confiscation = CONFISCATION
            .captures(operative)
            .and_then(|c| extract_moneys(&c[1]).first().copied());
        record.property = match (fine, confiscation) {
            (Some(f), Some(c)) => PropertyPenalty::Combined(f + c),
            (Some(f), None) => PropertyPenalty::Amount(f),
            (None, Some(c)) => PropertyPenalty::Amount(-c),
            (None, None) => PropertyPenalty::Amount(0.0),
        };
    }

    // Political rights.
    if operative.contains("政治权利终身") {
        record.rights = RightsTerm::Life;
    } else if let Some(caps) = RIGHTS_TERM.captures(operative) {
        if let Some(months) = numerals::parse_period(&caps[1]) {
            record.rights = RightsTerm::Months(months);
        }
    }

    // Probation.
    if let Some(caps) = PROBATION.captures(operative) {
        if let Some(months) = numerals::parse_period(&caps[1]) {
            record.probation = months;
        }
    }

    // Exemption from punishment or acquittal resets every sub-field, as the
    // final and highest-priority override.
    if EXEMPTION.is_match(operative) {
        record.freedom = FreedomTerm::Months(0);
        record.property = PropertyPenalty::Amount(0.0);
        record.rights = RightsTerm::Months(0);
        record.probation = 0;
    }

    Some(record)
}
