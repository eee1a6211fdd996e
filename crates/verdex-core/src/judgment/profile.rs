//! Per-document judgment profile.
//!
//! A [`JudgmentProfile`] wraps one parsed document together with the
//! extraction configuration and answers every output field. Fields are
//! capability-gated: criminal fields exist only for criminal cases,
//! corruption amounts only for corruption causes, and first-instance-only
//! fields come out absent on appeal and retrial documents. A gated-out
//! field is absent, never an error.

use tracing::debug;

use crate::models::{CaseDocument, CaseRecord, ExtractionConfig, FieldValue};
use crate::text::normalize;

use super::rules::patterns::OCCUPATION_FALLBACK;
use super::rules::{
    count_facts, classify_court_level, classify_province, defense_acceptance,
    defensive_sentences, duration_days, extract_defendant, extract_penalty, is_panel_trial,
    opinion, procedure, reconcile_amounts, AmountRecord, DefendantProfile, DefenseAcceptance,
    FreedomTerm, PenaltyRecord, PropertyPenalty, RightsTerm,
};

/// Broad case category, from the top cause-of-action level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseCategory {
    Civil,
    Criminal,
    Other,
}

impl CaseCategory {
    fn from_cause(cause_level1: Option<&str>) -> Self {
        match cause_level1 {
            Some("刑事案件") => Self::Criminal,
            Some("民事案件") => Self::Civil,
            _ => Self::Other,
        }
    }
}

/// One document plus everything derivable from it.
///
/// The expensive derivations (defense sentences, the spliced findings text,
/// the defendant profile) are resolved once at construction; every field
/// method and `record()` read the cached results.
pub struct JudgmentProfile {
    id: u64,
    config: ExtractionConfig,
    doc: CaseDocument,
    category: CaseCategory,
    /// Defense-related opinion sentences; both the acceptance verdict and
    /// the findings splice read them.
    defensive: Vec<String>,
    /// Court opinion with the defensive sentences cut out; the source for
    /// the recidivist, merit, surrender and confession flags, so a defense
    /// claim of surrender does not count as a court finding.
    findings: String,
    defendant: Option<DefendantProfile>,
}

impl JudgmentProfile {
    pub fn new(id: u64, doc: CaseDocument, config: ExtractionConfig) -> Self {
        let category = CaseCategory::from_cause(doc.cause_level1.as_deref());
        let first_instance = doc.trial_level == Some(1);
        let criminal_first = category == CaseCategory::Criminal && first_instance;

        let (defensive, findings) = if criminal_first {
            let opinion_text = doc.first_opinion.as_deref().unwrap_or("");
            let defensive = defensive_sentences(opinion_text);
            let findings = opinion::opinion_without_defense(opinion_text, &defensive);
            (defensive, findings)
        } else {
            (Vec::new(), String::new())
        };
        let defendant = criminal_first.then(|| {
            extract_defendant(
                doc.litigant_info.as_deref().unwrap_or(""),
                doc.judge_date(),
                &config,
            )
        });

        Self {
            id,
            config,
            doc,
            category,
            defensive,
            findings,
            defendant,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn document(&self) -> &CaseDocument {
        &self.doc
    }

    pub fn category(&self) -> CaseCategory {
        self.category
    }

    pub fn is_first_instance(&self) -> bool {
        self.doc.trial_level == Some(1)
    }

    /// Corruption and bribery causes get the amount pipeline.
    pub fn is_corruption(&self) -> bool {
        self.category == CaseCategory::Criminal
            && self.doc.cause_level2.as_deref() == Some("贪污贿赂罪")
    }

    fn criminal_first_instance(&self) -> bool {
        self.category == CaseCategory::Criminal && self.is_first_instance()
    }

    fn corruption_first_instance(&self) -> bool {
        self.is_corruption() && self.is_first_instance()
    }

    // Base fields, available for every category.

    pub fn court_level(&self) -> Option<i64> {
        classify_court_level(self.doc.court_level.as_deref())
    }

    pub fn province_code(&self) -> Option<i64> {
        classify_province(self.doc.province.as_deref())
    }

    /// Full region name: province prefix plus the feed's region suffix.
    pub fn region(&self) -> Option<String> {
        self.prefixed(self.doc.region.as_deref())
    }

    /// Full city name: province prefix plus the feed's city suffix.
    pub fn city(&self) -> Option<String> {
        self.prefixed(self.doc.city.as_deref())
    }

    fn prefixed(&self, suffix: Option<&str>) -> Option<String> {
        let suffix = suffix?;
        match self.doc.province.as_deref() {
            Some(province) => Some(format!("{province}{suffix}")),
            None => Some(suffix.to_string()),
        }
    }

    pub fn duration_days(&self) -> Option<i64> {
        duration_days(self.doc.accept_date(), self.doc.judge_date())
    }

    pub fn is_panel(&self) -> bool {
        is_panel_trial(self.doc.judges.as_deref(), &self.doc.jurors())
    }

    // Criminal procedural fields, first instance only.

    pub fn is_delayed(&self) -> Option<bool> {
        self.overview().map(procedure::is_delayed)
    }

    pub fn is_designated_jurisdiction(&self) -> Option<bool> {
        self.overview().map(procedure::is_designated_jurisdiction)
    }

    pub fn is_simplified_procedure(&self) -> Option<bool> {
        self.overview().map(procedure::is_simplified_procedure)
    }

    pub fn has_supplementary_investigation(&self) -> Option<bool> {
        self.overview().map(procedure::has_supplementary_investigation)
    }

    pub fn prosecutors(&self) -> Option<Vec<String>> {
        self.overview().map(procedure::prosecutors)
    }

    pub fn indictment_number(&self) -> Option<String> {
        procedure::indictment_number(self.overview()?)
    }

    /// The case-overview text when the first-instance criminal gate is open.
    /// A missing section still passes the gate as empty text, so downstream
    /// flags resolve to their negative default instead of absent.
    fn overview(&self) -> Option<&str> {
        self.criminal_first_instance()
            .then(|| self.doc.first_overview.as_deref().unwrap_or(""))
    }

    pub fn prosecution(&self) -> Option<&str> {
        if self.category != CaseCategory::Criminal {
            return None;
        }
        self.doc
            .prosecution_organs
            .as_ref()?
            .first()
            .map(String::as_str)
    }

    pub fn criminal_law_version(&self) -> Option<i64> {
        if self.category != CaseCategory::Criminal {
            return None;
        }
        procedure::criminal_law_version(self.doc.law_articles.as_deref().unwrap_or(&[]))
    }

    pub fn defendant(&self) -> Option<&DefendantProfile> {
        self.defendant.as_ref()
    }

    pub fn defense_opinion(&self) -> Option<DefenseAcceptance> {
        if !self.criminal_first_instance() {
            return None;
        }
        defense_acceptance(&self.defensive)
    }

    pub fn is_recidivist(&self) -> Option<bool> {
        self.criminal_first_instance()
            .then(|| opinion::is_recidivist(&self.findings))
    }

    pub fn has_merit(&self) -> Option<bool> {
        self.criminal_first_instance()
            .then(|| opinion::has_merit(&self.findings))
    }

    pub fn has_surrender(&self) -> Option<bool> {
        self.criminal_first_instance()
            .then(|| opinion::has_surrender(&self.findings))
    }

    pub fn has_confession(&self) -> Option<bool> {
        self.criminal_first_instance()
            .then(|| opinion::has_confession(&self.findings))
    }

    pub fn penalty(&self) -> Option<PenaltyRecord> {
        if !self.criminal_first_instance() {
            return None;
        }
        extract_penalty(self.doc.first_judgment.as_deref().unwrap_or(""))
    }

    // Corruption fields, first instance only.

    pub fn amounts(&self) -> Option<AmountRecord> {
        self.corruption_first_instance().then(|| {
            reconcile_amounts(
                self.doc.first_overview.as_deref(),
                self.doc.first_opinion.as_deref(),
                self.doc.first_fact.as_deref(),
                self.config.amount_epsilon,
            )
        })
    }

    pub fn fact_count(&self) -> Option<i64> {
        if !self.corruption_first_instance() {
            return None;
        }
        count_facts(self.doc.first_fact.as_deref()?)
    }

    /// Position the defendant held, preferring the litigant-information
    /// statement and falling back to a 任…职 scan of the facts section.
    pub fn occupation(&self) -> Option<String> {
        if !self.corruption_first_instance() {
            return None;
        }
        if let Some(occupation) = self.defendant.as_ref().and_then(|d| d.occupation.clone()) {
            return Some(occupation);
        }
        let fact = normalize::clean(self.doc.first_fact.as_deref()?);
        let parts: Vec<&str> = fact.split('：').collect();
        let scope = if parts.len() > 1 { parts[1] } else { parts[0] };
        OCCUPATION_FALLBACK
            .captures(scope)
            .map(|c| c[1].to_string())
    }

    /// Flatten the document to its output record, every column resolved.
    pub fn record(&self) -> CaseRecord {
        debug!(id = self.id, category = ?self.category, "flattening document");

        let doc = &self.doc;
        let penalty = self.penalty();
        let amounts = self.amounts().unwrap_or_default();

        let jurors = match &doc.jury {
            Some(_) => FieldValue::from(doc.jurors()),
            None => FieldValue::Absent,
        };

        let mut fields: Vec<FieldValue> = Vec::with_capacity(CaseRecord::COLUMNS.len());
        fields.push(FieldValue::Int(self.id as i64));
        fields.push(doc.doc_type.into());
        fields.push(doc.case_number.clone().into());
        fields.push(doc.cause.clone().into());
        fields.push(doc.court.clone().into());
        fields.push(self.court_level().into());
        fields.push(doc.trial_level.into());
        fields.push(self.province_code().into());
        fields.push(self.region().into());
        fields.push(self.city().into());
        fields.push(doc.accept_date().into());
        fields.push(doc.judge_date().into());
        fields.push(self.duration_days().into());
        fields.push(doc.chief_judge.clone().into());
        fields.push(doc.judges.clone().into());
        fields.push(jurors);
        fields.push(self.is_panel().into());
        fields.push(doc.clerk.clone().into());
        fields.push(doc.litigants.clone().into());
        fields.push(doc.lawyers.clone().into());
        fields.push(doc.law_firms.clone().into());
        fields.push(self.is_delayed().into());
        fields.push(self.is_designated_jurisdiction().into());
        fields.push(self.is_simplified_procedure().into());
        fields.push(self.prosecution().into());
        fields.push(self.criminal_law_version().into());
        fields.push(self.prosecutors().into());
        fields.push(self.indictment_number().into());
        match &self.defendant {
            Some(d) => {
                fields.push(d.name.clone().into());
                fields.push(d.name_redacted.into());
                fields.push(d.sex.into());
                fields.push(d.birth.into());
                fields.push(d.age.into());
                fields.push(d.ethnicity.clone().into());
                fields.push(d.is_minority.into());
                fields.push(d.education.into());
                fields.push(d.occupation.clone().into());
            }
            None => fields.extend(std::iter::repeat(FieldValue::Absent).take(9)),
        }
        fields.push(self.has_supplementary_investigation().into());
        fields.push(self.defense_opinion().map(DefenseAcceptance::as_code).into());
        fields.push(self.is_recidivist().into());
        fields.push(self.has_merit().into());
        fields.push(self.has_surrender().into());
        fields.push(self.has_confession().into());
        fields.push(amounts.alleged.into());
        fields.push(amounts.adjudicated.into());
        fields.push(self.fact_count().into());
        fields.push(self.occupation().into());
        fields.push(FieldValue::Absent); // occupation_type, reserved
        fields.push(FieldValue::Absent); // occupation_grade, reserved
        match penalty {
            Some(p) => {
                fields.push(FieldValue::Int(p.counts as i64));
                fields.push(render_freedom(p.freedom));
                fields.push(render_property(p.property));
                fields.push(render_rights(p.rights));
                fields.push(p.probation.into());
            }
            None => fields.extend(std::iter::repeat(FieldValue::Absent).take(5)),
        }

        CaseRecord::from_fields(fields)
    }
}

fn render_freedom(term: FreedomTerm) -> FieldValue {
    match term {
        FreedomTerm::Months(m) => FieldValue::Int(m),
        FreedomTerm::Life => FieldValue::Text("无期徒刑".to_string()),
        FreedomTerm::Death => FieldValue::Text("死刑".to_string()),
    }
}

fn render_property(penalty: PropertyPenalty) -> FieldValue {
    match penalty {
        PropertyPenalty::Amount(v) => FieldValue::Float(v),
        PropertyPenalty::All => FieldValue::Text("全部".to_string()),
        PropertyPenalty::Combined(v) => FieldValue::Text(format!("±{:.2}", v)),
    }
}

fn render_rights(term: RightsTerm) -> FieldValue {
    match term {
        RightsTerm::Months(m) => FieldValue::Int(m),
        RightsTerm::Life => FieldValue::Text("终身".to_string()),
    }
}
