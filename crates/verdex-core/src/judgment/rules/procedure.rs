//! Procedural flags and prosecution details from the first-instance case
//! overview.

use crate::models::document::LawArticle;
use crate::text::normalize;

use super::patterns::{CRIMINAL_LAW_VERSION, DELAYED, INDICTMENT_NUMBER, PROSECUTORS, PROSECUTOR_TITLES};

/// Whether the trial was delayed (延长/延期审理).
pub fn is_delayed(overview_text: &str) -> bool {
    DELAYED.is_match(&normalize::clean(overview_text))
}

/// Whether jurisdiction was designated (指定管辖).
pub fn is_designated_jurisdiction(overview_text: &str) -> bool {
    normalize::clean(overview_text).contains("管辖")
}

/// Whether the simplified procedure applied. Mentioning 简易程序 is not
/// enough: a case converted back to the ordinary procedure
/// (转为普通程序) does not count.
pub fn is_simplified_procedure(overview_text: &str) -> bool {
    let text = normalize::clean(overview_text);
    text.contains("简易程序") && !text.contains("转为普通程序")
}

/// Whether a supplementary investigation took place (补充侦查).
pub fn has_supplementary_investigation(overview_text: &str) -> bool {
    normalize::clean(overview_text).contains("补充侦查")
}

/// Prosecutor names from the 指派…出庭 assignment clause, with rank titles
/// stripped. Non-standard phrasings yield an empty list.
pub fn prosecutors(overview_text: &str) -> Vec<String> {
    let text = normalize::clean(overview_text);
    let Some(caps) = PROSECUTORS.captures(&text) else {
        return Vec::new();
    };
    caps[1]
        .split('、')
        .map(|name| PROSECUTOR_TITLES.replace_all(name, "").into_owned())
        .collect()
}

/// The indictment number between 院以 and 起诉书.
pub fn indictment_number(overview_text: &str) -> Option<String> {
    let text = normalize::clean(overview_text);
    INDICTMENT_NUMBER.captures(&text).map(|c| c[1].to_string())
}

/// The criminal-law amendment year cited by the applicable-law list.
/// Matched against raw law names: normalization would strip the
/// parenthesized span carrying the year.
pub fn criminal_law_version(law_articles: &[LawArticle]) -> Option<i64> {
    law_articles
        .iter()
        .filter_map(|a| a.law.as_deref())
        .find_map(|law| {
            CRIMINAL_LAW_VERSION
                .captures(law)
                .and_then(|c| c[1].parse().ok())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const OVERVIEW: &str =
        "某市人民检察院以某检刑诉（2015）100号起诉书指控被告人犯受贿罪，指派检察员张三、代理检察员李四出庭支持公诉。本案适用简易程序审理。";

    #[test]
    fn test_procedural_flags() {
        assert!(!is_delayed(OVERVIEW));
        assert!(is_delayed("本案经批准延期审理三个月。"));
        assert!(!is_designated_jurisdiction(OVERVIEW));
        assert!(is_designated_jurisdiction("上级法院指定管辖本案。"));
        assert!(has_supplementary_investigation("退回补充侦查两次。"));
    }

    #[test]
    fn test_simplified_procedure_conversion_negates() {
        assert!(is_simplified_procedure(OVERVIEW));
        assert!(!is_simplified_procedure("本案适用简易程序审理，后转为普通程序。"));
        assert!(!is_simplified_procedure("本案适用普通程序审理。"));
    }

    #[test]
    fn test_prosecutors_titles_stripped() {
        assert_eq!(prosecutors(OVERVIEW), vec!["张三", "李四"]);
        assert!(prosecutors("检察员张三到庭。").is_empty());
    }

    #[test]
    fn test_indictment_number() {
        // The parenthesized year is editorial and removed by normalization.
        assert_eq!(indictment_number(OVERVIEW).as_deref(), Some("某检刑诉100号"));
        assert_eq!(indictment_number("口头起诉。"), None);
    }

    #[test]
    fn test_criminal_law_version() {
        let articles = vec![
            LawArticle {
                law: Some("中华人民共和国刑事诉讼法".to_string()),
                article: Some("第一百九十五条".to_string()),
            },
            LawArticle {
                law: Some("中华人民共和国刑法（1997修正）".to_string()),
                article: Some("第三百八十五条".to_string()),
            },
        ];
        assert_eq!(criminal_law_version(&articles), Some(1997));
        assert_eq!(criminal_law_version(&[]), None);
    }
}
