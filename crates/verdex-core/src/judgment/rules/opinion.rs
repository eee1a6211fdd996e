//! Court-opinion analysis: defensive-opinion handling and sentencing
//! circumstance flags.

use crate::text::normalize;

use super::patterns::CONFESSION;

/// Ternary outcome of the defense's arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefenseAcceptance {
    /// Every qualifying sentence rejects the defense.
    Rejected,
    /// Both accepting and rejecting sentences appear.
    Partial,
    /// Every qualifying sentence accepts the defense.
    Accepted,
}

impl DefenseAcceptance {
    pub fn as_code(self) -> i64 {
        match self {
            DefenseAcceptance::Rejected => 0,
            DefenseAcceptance::Partial => 1,
            DefenseAcceptance::Accepted => 2,
        }
    }
}

/// Sentences of the court opinion that discuss the defense (辩护).
///
/// Guarded on the opinion's first sentence containing 本院认为: without that
/// anchor the section was misrouted and is not the court's own reasoning.
pub fn defensive_sentences(opinion_text: &str) -> Vec<String> {
    let sentences = normalize::sentences(&normalize::clean(opinion_text));
    match sentences.first() {
        Some(first) if first.contains("本院认为") => sentences
            .iter()
            .filter(|s| s.contains("辩护"))
            .cloned()
            .collect(),
        _ => Vec::new(),
    }
}

/// Classify whether the defensive opinions were accepted.
///
/// Scans for the positive marker 予以 and the negative marker 不予 per
/// sentence; a single sentence carrying both is an immediate partial
/// acceptance. Absent when no qualifying sentence carries either marker.
pub fn defense_acceptance(defensive: &[String]) -> Option<DefenseAcceptance> {
    let mut saw_positive = false;
    let mut saw_negative = false;

    for sentence in defensive {
        if sentence.contains("予以") {
            if sentence.contains("不予") {
                return Some(DefenseAcceptance::Partial);
            }
            saw_positive = true;
        } else if sentence.contains("不予") {
            saw_negative = true;
        }
    }

    match (saw_positive, saw_negative) {
        (true, true) => Some(DefenseAcceptance::Partial),
        (true, false) => Some(DefenseAcceptance::Accepted),
        (false, true) => Some(DefenseAcceptance::Rejected),
        (false, false) => None,
    }
}

/// The opinion text with the defensive sentences cut out.
///
/// Circumstance flags must reflect the court's own findings, not arguments
/// the defense merely raised.
pub fn opinion_without_defense(opinion_text: &str, defensive: &[String]) -> String {
    let mut text = normalize::clean(opinion_text);
    for sentence in defensive {
        text = text.replace(sentence.as_str(), "");
    }
    text
}

/// Recidivism finding (累犯).
pub fn is_recidivist(court_findings: &str) -> bool {
    court_findings.contains("累犯")
}

/// Meritorious-service finding (立功).
pub fn has_merit(court_findings: &str) -> bool {
    court_findings.contains("立功")
}

/// Voluntary-surrender finding (自首).
pub fn has_surrender(court_findings: &str) -> bool {
    court_findings.contains("自首")
}

/// Confession finding. Surrender implies confession; otherwise any of the
/// four confession phrasings counts.
pub fn has_confession(court_findings: &str) -> bool {
    has_surrender(court_findings) || CONFESSION.is_match(court_findings)
}
