//! Input document model.
//!
//! A judgment document arrives as JSON: a flat case-metadata map plus an
//! ordered paragraph tree (paragraphs → sub-paragraphs → sentences). The
//! serde field names follow the upstream feed; every key is optional, so a
//! missing key deserializes to `None` and downstream fields come out absent
//! rather than erroring.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::DocumentError;

/// A complete judgment document, read-only once constructed.
#[derive(Debug, Clone, Deserialize)]
pub struct CaseDocument {
    /// Upstream document identifier.
    pub jid: Option<String>,

    /// Document type code (1 = judgment).
    #[serde(rename = "type")]
    pub doc_type: Option<i64>,

    #[serde(rename = "all_caseinfo_casenumber")]
    pub case_number: Option<String>,

    #[serde(rename = "all_caseinfo_casename")]
    pub title: Option<String>,

    /// Cause-of-action hierarchy, broadest level first.
    #[serde(rename = "level1_case")]
    pub cause_level1: Option<String>,
    #[serde(rename = "level2_case")]
    pub cause_level2: Option<String>,
    #[serde(rename = "level3_case")]
    pub cause_level3: Option<String>,
    #[serde(rename = "level4_case")]
    pub cause_level4: Option<String>,
    #[serde(rename = "level5_case")]
    pub cause_level5: Option<String>,

    #[serde(rename = "all_text_cause")]
    pub cause: Option<String>,

    #[serde(rename = "all_caseinfo_court")]
    pub court: Option<String>,

    /// Free-text court level ("基层", "中级", ...).
    pub court_level: Option<String>,

    /// Trial level code (1 = first instance).
    #[serde(rename = "all_caseinfo_leveloftria")]
    pub trial_level: Option<i64>,

    pub province: Option<String>,

    /// Region suffix; the full region is province + suffix.
    pub region: Option<String>,

    /// City suffix; the full city is province + suffix.
    pub city: Option<String>,

    /// Acceptance date as `YYYY-MM-DD`.
    pub accept_date: Option<String>,

    /// Adjudication date as `YYYY-MM-DD`.
    #[serde(rename = "all_judgementinfo_date")]
    pub judge_date: Option<String>,

    #[serde(rename = "all_chief_judge")]
    pub chief_judge: Option<String>,

    #[serde(rename = "all_judges")]
    pub judges: Option<Vec<String>>,

    /// Jurors as a single `;`-separated string.
    #[serde(rename = "all_people_jury")]
    pub jury: Option<String>,

    #[serde(rename = "all_clerk")]
    pub clerk: Option<String>,

    #[serde(rename = "all_litigant")]
    pub litigants: Option<Vec<String>>,

    #[serde(rename = "lawyer_term")]
    pub lawyers: Option<Vec<String>>,

    #[serde(rename = "lawfirm_term")]
    pub law_firms: Option<Vec<String>>,

    #[serde(rename = "prosecution_organ_term")]
    pub prosecution_organs: Option<Vec<String>>,

    #[serde(rename = "law_regu_details")]
    pub law_articles: Option<Vec<LawArticle>>,

    /// Litigant basic-information section.
    #[serde(rename = "all_text_litigantinfo")]
    pub litigant_info: Option<String>,

    /// Evidence listing.
    pub evidence: Option<String>,

    /// First-instance case overview.
    #[serde(rename = "firstinstance_text_basicinfo")]
    pub first_overview: Option<String>,

    /// First-instance facts as established by the court.
    #[serde(rename = "firstinstance_text_fact")]
    pub first_fact: Option<String>,

    /// First-instance court opinion ("本院认为").
    #[serde(rename = "firstinstance_text_opinion")]
    pub first_opinion: Option<String>,

    /// First-instance judgment result ("判决如下").
    #[serde(rename = "firstinstance_text_judgement")]
    pub first_judgment: Option<String>,

    #[serde(default)]
    pub paragraphs: Vec<Paragraph>,
}

/// One applicable-law reference.
#[derive(Debug, Clone, Deserialize)]
pub struct LawArticle {
    #[serde(rename = "lawName")]
    pub law: Option<String>,
    #[serde(rename = "tiaoName")]
    pub article: Option<String>,
}

/// A labeled paragraph of the document body.
#[derive(Debug, Clone, Deserialize)]
pub struct Paragraph {
    /// Section role code, see [`SectionLabel`].
    #[serde(rename = "labelType")]
    pub label_type: Option<i64>,

    /// Human-readable label. The feed misspells this key.
    #[serde(rename = "lableName")]
    pub label_name: Option<String>,

    pub length: Option<i64>,

    pub text: Option<String>,

    #[serde(rename = "subParagraphs", default)]
    pub sub_paragraphs: Vec<SubParagraph>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubParagraph {
    #[serde(default)]
    pub sentences: Vec<Sentence>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Sentence {
    pub length: Option<i64>,
    pub text: Option<String>,
}

/// Enumerated paragraph roles within a first-instance judgment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionLabel {
    Body,
    LitigantInfo,
    CaseOverview,
    FactsEstablished,
    CourtOpinion,
    JudgmentResult,
    Adjudicators,
    Attachment,
}

impl SectionLabel {
    /// Map a feed label-type code to a known section role.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Body),
            1 => Some(Self::LitigantInfo),
            2 => Some(Self::CaseOverview),
            6 => Some(Self::FactsEstablished),
            7 => Some(Self::CourtOpinion),
            8 => Some(Self::JudgmentResult),
            9 => Some(Self::Adjudicators),
            10 => Some(Self::Attachment),
            _ => None,
        }
    }
}

impl CaseDocument {
    /// Decode a document from its JSON payload.
    pub fn parse(json: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Cause-of-action hierarchy depth (number of populated levels).
    pub fn cause_depth(&self) -> usize {
        [
            &self.cause_level1,
            &self.cause_level2,
            &self.cause_level3,
            &self.cause_level4,
            &self.cause_level5,
        ]
        .iter()
        .filter(|l| l.is_some())
        .count()
    }

    /// Acceptance date, or `None` when missing or malformed.
    pub fn accept_date(&self) -> Option<NaiveDate> {
        parse_iso_date(self.accept_date.as_deref()?)
    }

    /// Adjudication date, or `None` when missing or malformed.
    pub fn judge_date(&self) -> Option<NaiveDate> {
        parse_iso_date(self.judge_date.as_deref()?)
    }

    /// Jurors split out of the `;`-separated feed string. Empty when the
    /// field is missing or blank.
    pub fn jurors(&self) -> Vec<String> {
        match self.jury.as_deref() {
            Some(s) if !s.is_empty() => s.split(';').map(str::to_string).collect(),
            _ => Vec::new(),
        }
    }

    /// Concatenated text of every paragraph.
    pub fn all_text(&self) -> String {
        let mut out = String::new();
        for para in &self.paragraphs {
            if let Some(text) = &para.text {
                out.push_str(text);
            }
        }
        out
    }

    /// Text of the last paragraph carrying the given section label.
    pub fn section_text(&self, label: SectionLabel) -> Option<&str> {
        self.paragraphs
            .iter()
            .filter(|p| p.label_type.and_then(SectionLabel::from_code) == Some(label))
            .filter_map(|p| p.text.as_deref())
            .next_back()
    }

    /// All sentences of paragraphs carrying the given section label, in
    /// document order.
    pub fn section_sentences(&self, label: SectionLabel) -> Vec<&str> {
        self.paragraphs
            .iter()
            .filter(|p| p.label_type.and_then(SectionLabel::from_code) == Some(label))
            .flat_map(|p| &p.sub_paragraphs)
            .flat_map(|sp| &sp.sentences)
            .filter_map(|s| s.text.as_deref())
            .collect()
    }
}

fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}
