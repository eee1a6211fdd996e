//! Defendant-profile extraction from the litigant-information section.

use chrono::{Datelike, NaiveDate};

use crate::models::ExtractionConfig;
use crate::text::normalize;

use super::dates::extract_dates;
use super::patterns::{
    DEFENDANT_AGE, DEFENDANT_BIRTH, DEFENDANT_EDUCATION, DEFENDANT_EDUCATION_ALT,
    DEFENDANT_ETHNICITY, DEFENDANT_NAME, DEFENDANT_OCCUPATION,
};

/// Education levels, matched by substring in this order.
/// 1 primary, 2 junior secondary, 3 senior secondary / technical secondary,
/// 4 junior college, 5 university, 6 postgraduate.
const EDUCATION_LEVELS: &[(&str, i64)] = &[
    ("小学", 1),
    ("初中", 2),
    ("高中", 3),
    ("中专", 3),
    ("大专", 4),
    ("专科", 4),
    ("大学", 5),
    ("本科", 5),
    ("研究生", 6),
];

/// Extracted defendant attributes.
///
/// Defaults are policy, not placeholders: sex defaults to male (1) and
/// ethnicity to 汉族, matching the population baseline the rule set was
/// calibrated on. When no name can be anchored, the whole record stays at
/// these defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct DefendantProfile {
    pub name: Option<String>,
    /// Whether the name is a redaction placeholder (contains 某 or any
    /// non-Chinese-script character). Only known once a name is found.
    pub name_redacted: Option<bool>,
    /// 1 male (default), 0 female.
    pub sex: i64,
    pub birth: Option<NaiveDate>,
    pub age: Option<i64>,
    pub ethnicity: String,
    pub is_minority: bool,
    pub education: Option<i64>,
    pub occupation: Option<String>,
}

impl Default for DefendantProfile {
    fn default() -> Self {
        Self {
            name: None,
            name_redacted: None,
            sex: 1,
            birth: None,
            age: None,
            ethnicity: "汉族".to_string(),
            is_minority: false,
            education: None,
            occupation: None,
        }
    }
}

/// Derive the defendant profile from the litigant-information text.
///
/// Only the second blank-run-delimited segment is used, truncated at its
/// first full stop; the first segment is the court header and anything later
/// describes counsel. If the name anchor cannot be found the record returns
/// unmodified: without the anchor entity the rest of the sentence is not
/// trusted (fail-fast per document, not per field).
pub fn extract_defendant(
    litigant_text: &str,
    judge_date: Option<NaiveDate>,
    config: &ExtractionConfig,
) -> DefendantProfile {
    let mut profile = DefendantProfile::default();

    let text = normalize::clean(litigant_text);
    if text.is_empty() {
        return profile;
    }

    let segments: Vec<&str> = text.split("    ").collect();
    if segments.len() < 2 {
        return profile;
    }
    let clause = defendant_clause(segments[1]);

    // Name anchors everything else.
    let name = DEFENDANT_NAME
        .captures(&clause)
        .map(|c| c[1].to_string())
        .filter(|n| n.chars().count() < config.max_name_chars);
    let Some(name) = name else {
        return profile;
    };
    profile.name_redacted = Some(is_redacted(&name));
    profile.name = Some(name);

    if clause.contains("，女") {
        profile.sex = 0;
    }

    if let Some(birth_match) = DEFENDANT_BIRTH.find(&clause) {
        if let Some(birth) = extract_dates(birth_match.as_str()).first().copied() {
            profile.birth = Some(birth);
            profile.age = judge_date.map(|j| i64::from(j.year() - birth.year()));
        }
    }
    // Some judgments state the age directly.
    if profile.age.unwrap_or(0) == 0 {
        if let Some(caps) = DEFENDANT_AGE.captures(&clause) {
            profile.age = caps[1].parse().ok();
        }
    }

    if let Some(caps) = DEFENDANT_ETHNICITY.captures(&clause) {
        profile.ethnicity = caps[1].to_string();
        profile.is_minority = profile.ethnicity != "汉族";
    }

    let education_name = DEFENDANT_EDUCATION
        .captures(&clause)
        .or_else(|| DEFENDANT_EDUCATION_ALT.captures(&clause))
        .map(|c| c[1].to_string());
    if let Some(education_name) = education_name {
        profile.education = EDUCATION_LEVELS
            .iter()
            .find(|(key, _)| education_name.contains(key))
            .map(|(_, level)| *level);
    }

    profile.occupation = find_occupation(&clause);

    profile
}

/// The defendant clause is the second segment up to its first full stop.
/// A segment without one loses its final character instead, so a dangling
/// separator never ends up inside the clause.
fn defendant_clause(segment: &str) -> String {
    let head = match segment.find('。') {
        Some(i) => &segment[..i],
        None => {
            let mut chars = segment.chars();
            chars.next_back();
            chars.as_str()
        }
    };
    format!("{}。", head)
}

fn is_redacted(name: &str) -> bool {
    name.contains('某') || name.chars().any(|c| !('\u{4e00}'..='\u{9fff}').contains(&c))
}

/// Find the occupation after an appointment verb (任/系/原), skipping runs
/// preceded by 主 or 责 (主任, 负责 are not appointments). Emulates the
/// lookbehind the pattern cannot express: on a rejected candidate the scan
/// resumes one character later, not past the whole match.
pub(crate) fn find_occupation(text: &str) -> Option<String> {
    let mut start = 0;
    while let Some(caps) = DEFENDANT_OCCUPATION.captures(&text[start..]) {
        let m = caps.get(0).expect("group 0 always present");
        let abs_start = start + m.start();
        let preceding = text[..abs_start].chars().next_back();
        if !matches!(preceding, Some('主') | Some('责')) {
            return Some(caps[1].to_string());
        }
        let first_char_len = m.as_str().chars().next().map_or(1, char::len_utf8);
        start = abs_start + first_char_len;
    }
    None
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const LITIGANT_TEXT: &str = "公诉机关某市人民检察院。    被告人张三，男，1965年4月2日出生，汉族，大学文化，系某局局长。辩护人李律师。";

    fn judge_date() -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(2016, 3, 1)
    }

    #[test]
    fn test_full_profile() {
        let profile = extract_defendant(LITIGANT_TEXT, judge_date(), &ExtractionConfig::default());
        assert_eq!(profile.name.as_deref(), Some("张三"));
        assert_eq!(profile.name_redacted, Some(false));
        assert_eq!(profile.sex, 1);
        assert_eq!(profile.birth, NaiveDate::from_ymd_opt(1965, 4, 2));
        assert_eq!(profile.age, Some(51));
        assert_eq!(profile.ethnicity, "汉族");
        assert!(!profile.is_minority);
        assert_eq!(profile.education, Some(5));
        assert_eq!(profile.occupation.as_deref(), Some("某局局长"));
    }

    #[test]
    fn test_redacted_name_and_female() {
        let text = "头部。    被告人王某，女，回族，初中文化。";
        let profile = extract_defendant(text, judge_date(), &ExtractionConfig::default());
        assert_eq!(profile.name.as_deref(), Some("王某"));
        assert_eq!(profile.name_redacted, Some(true));
        assert_eq!(profile.sex, 0);
        assert_eq!(profile.ethnicity, "回族");
        assert!(profile.is_minority);
        assert_eq!(profile.education, Some(2));
    }

    #[test]
    fn test_stated_age_fallback() {
        let text = "头部。    被告人李四，男，45岁，汉族。";
        let profile = extract_defendant(text, None, &ExtractionConfig::default());
        assert_eq!(profile.age, Some(45));
        assert!(profile.birth.is_none());
    }

    #[test]
    fn test_missing_name_short_circuits() {
        let text = "头部。    本案当事人情况不详，男，回族，30岁。";
        let profile = extract_defendant(text, judge_date(), &ExtractionConfig::default());
        assert_eq!(profile, DefendantProfile::default());
    }

    #[test]
    fn test_single_segment_short_circuits() {
        let profile = extract_defendant(
            "被告人张三，男，汉族。",
            judge_date(),
            &ExtractionConfig::default(),
        );
        assert_eq!(profile, DefendantProfile::default());
    }

    #[test]
    fn test_overlong_name_discarded() {
        let text = "头部。    被告人某某某某某某某某某某某，男。";
        let profile = extract_defendant(text, judge_date(), &ExtractionConfig::default());
        assert!(profile.name.is_none());
        assert_eq!(profile, DefendantProfile::default());
    }

    #[test]
    fn test_occupation_skips_manager_title() {
        // 主任 must not anchor an occupation; the later 系 clause does.
        assert_eq!(
            find_occupation("曾为办公室主任秘书，系某公司经理，汉族。"),
            Some("某公司经理".to_string())
        );
    }
}
