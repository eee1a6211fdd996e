//! Classification of flat case-metadata fields.

use chrono::NaiveDate;

/// Provinces by administrative code, checked by substring in this order.
const PROVINCES: &[(&str, i64)] = &[
    ("北京", 11),
    ("天津", 12),
    ("河北", 13),
    ("山西", 14),
    ("内蒙古", 15),
    ("辽宁", 21),
    ("吉林", 22),
    ("黑龙江", 23),
    ("上海", 31),
    ("江苏", 32),
    ("浙江", 33),
    ("安徽", 34),
    ("福建", 35),
    ("江西", 36),
    ("山东", 37),
    ("河南", 41),
    ("湖北", 42),
    ("湖南", 43),
    ("广东", 44),
    ("广西", 45),
    ("海南", 46),
    ("重庆", 50),
    ("四川", 51),
    ("贵州", 52),
    ("云南", 53),
    ("西藏", 54),
    ("陕西", 61),
    ("甘肃", 62),
    ("青海", 63),
    ("宁夏", 64),
    ("新疆", 65),
];

/// Classify the free-text court level.
/// 1 basic, 2 intermediate, 3 high, 4 supreme, 9 anything else non-empty;
/// first match wins in that order. Empty or absent stays absent.
pub fn classify_court_level(court_level: Option<&str>) -> Option<i64> {
    let s = court_level?;
    if s.is_empty() {
        return None;
    }
    let level = if s.contains("基层") {
        1
    } else if s.contains("中级") {
        2
    } else if s.contains("高级") {
        3
    } else if s.contains("最高") {
        4
    } else {
        9
    };
    Some(level)
}

/// Map a province string to its administrative code.
pub fn classify_province(province: Option<&str>) -> Option<i64> {
    let s = province?;
    PROVINCES
        .iter()
        .find(|(name, _)| s.contains(name))
        .map(|(_, code)| *code)
}

/// Days between acceptance and adjudication; absent unless both dates are
/// present.
pub fn duration_days(accept: Option<NaiveDate>, judge: Option<NaiveDate>) -> Option<i64> {
    Some((judge? - accept?).num_days())
}

/// Whether the case was heard by a panel. Defaults to panel (true); only a
/// single listed judge with an empty juror list means a sole adjudicator.
pub fn is_panel_trial(judges: Option<&[String]>, jurors: &[String]) -> bool {
    match judges {
        Some(judges) if judges.len() == 1 && jurors.is_empty() => false,
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_court_level() {
        assert_eq!(classify_court_level(Some("基层人民法院")), Some(1));
        assert_eq!(classify_court_level(Some("中级人民法院")), Some(2));
        assert_eq!(classify_court_level(Some("高级人民法院")), Some(3));
        assert_eq!(classify_court_level(Some("最高人民法院")), Some(4));
        assert_eq!(classify_court_level(Some("军事法院")), Some(9));
        assert_eq!(classify_court_level(Some("")), None);
        assert_eq!(classify_court_level(None), None);
    }

    #[test]
    fn test_province_codes() {
        assert_eq!(classify_province(Some("湖南省")), Some(43));
        assert_eq!(classify_province(Some("内蒙古自治区")), Some(15));
        assert_eq!(classify_province(Some("未知地区")), None);
        assert_eq!(classify_province(None), None);
    }

    #[test]
    fn test_duration() {
        let accept = NaiveDate::from_ymd_opt(2016, 1, 10);
        let judge = NaiveDate::from_ymd_opt(2016, 3, 1);
        assert_eq!(duration_days(accept, judge), Some(51));
        assert_eq!(duration_days(accept, None), None);
        assert_eq!(duration_days(None, judge), None);
    }

    #[test]
    fn test_panel_trial() {
        let one = vec!["张法官".to_string()];
        let three = vec!["张".to_string(), "王".to_string(), "李".to_string()];
        let jurors = vec!["陪审员".to_string()];

        assert!(!is_panel_trial(Some(&one), &[]));
        assert!(is_panel_trial(Some(&one), &jurors));
        assert!(is_panel_trial(Some(&three), &[]));
        assert!(is_panel_trial(None, &[]));
        let nobody: Vec<String> = Vec::new();
        assert!(is_panel_trial(Some(&nobody), &[]));
    }
}
