//! Common regex patterns for judgment field extraction.
//!
//! Every rule here is applied to normalized text only (see
//! [`crate::text::normalize`]). The catalog is fixed and hand-authored for
//! first-instance criminal judgments; known misses of non-standard phrasings
//! are documented on the individual rules and are limitations, not bugs.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Money: a leading-Arabic-digit run (with optional separators and a
    // trailing 万/亿 multiplier), or a pure-Chinese-numeral run. Both accept
    // the "余元" ("...-odd yuan") suffix.
    pub static ref MONEY: Regex = Regex::new(
        r"\d[0-9,.]*[万亿]?余?元|[零一壹二两贰三叁四肆五伍六陆七柒八捌九玖十拾百佰千仟万亿]+余?元"
    ).unwrap();

    // Dates written YYYY年M月D日.
    pub static ref DATE: Regex = Regex::new(r"\d{4}年\d{1,2}月\d{1,2}日").unwrap();

    // Criminal-law amendment year inside an applicable-law name, e.g.
    // 刑法（1997修正）. Matched against the raw law name: normalization would
    // strip the parenthesized span this rule needs.
    pub static ref CRIMINAL_LAW_VERSION: Regex = Regex::new(r"刑法（(\d{4})修正）").unwrap();

    // Prosecutors: requires the "指派…出庭" assignment phrasing and silently
    // misses any other wording.
    pub static ref PROSECUTORS: Regex = Regex::new(r"指派(.+?)出庭").unwrap();

    // Rank/role titles stripped from prosecutor names.
    pub static ref PROSECUTOR_TITLES: Regex = Regex::new(
        r"(?:副|助理|代理)?检察[长官员](?:助理)?|书记员"
    ).unwrap();

    // Indictment number: the span between 院以 and 起诉书.
    pub static ref INDICTMENT_NUMBER: Regex = Regex::new(r"院以(.+?)起诉书").unwrap();

    // Trial-delay phrasing, both 延长审理 and 延期审理.
    pub static ref DELAYED: Regex = Regex::new(r"延[长期]审理").unwrap();

    // Defendant clause anchors. The name rule requires a comma-terminated
    // 被告人X， clause; without it the whole profile is abandoned.
    pub static ref DEFENDANT_NAME: Regex = Regex::new(r"被告人?(.+?)，").unwrap();
    pub static ref DEFENDANT_BIRTH: Regex = Regex::new(
        r"\d{4}年\d{1,2}月\d{1,2}日出?生|生于\d{4}年\d{1,2}月\d{1,2}日"
    ).unwrap();
    pub static ref DEFENDANT_AGE: Regex = Regex::new(r"(\d{2})岁").unwrap();
    pub static ref DEFENDANT_ETHNICITY: Regex = Regex::new(
        r"，([\u{4e00}-\u{9fff}]+?族)[，。]"
    ).unwrap();
    // Education, two phrasings tried in order: X文化 then 文化程度X.
    pub static ref DEFENDANT_EDUCATION: Regex = Regex::new(
        r"，([\u{4e00}-\u{9fff}]+?)文化"
    ).unwrap();
    pub static ref DEFENDANT_EDUCATION_ALT: Regex = Regex::new(
        r"文化程度([\u{4e00}-\u{9fff}]+?)[，。]"
    ).unwrap();
    // Occupation after 任/系/原. The preceding character must not be 主 or
    // 责 (主任/负责 are not appointment verbs); the regex crate has no
    // lookbehind, so the caller checks that separately.
    pub static ref DEFENDANT_OCCUPATION: Regex = Regex::new(
        r"[任系原]+([\u{4e00}-\u{9fff}].+?)[，。、]"
    ).unwrap();

    // "The alleged amount was imprecise" marker in the court opinion.
    pub static ref IMPRECISE_AMOUNT: Regex = Regex::new(r"[数金]额[^罪名]*?不准").unwrap();

    // Confession phrasings: 坦白 / 认罪 / 如实供述 / 配合.
    pub static ref CONFESSION: Regex = Regex::new(r"坦白|认罪|如实供述|配合").unwrap();

    // Penalty rules. COUNT matches one 犯…罪 offense declaration; SPLIT
    // isolates the final operative sentencing clause by cutting after the
    // last offense declaration or 执行 marker.
    pub static ref OFFENSE_COUNT: Regex = Regex::new(r"犯[\u{4e00}-\u{9fff}、]+?罪").unwrap();
    pub static ref SENTENCE_SPLIT: Regex = Regex::new(r"犯[\u{4e00}-\u{9fff}]+?罪|执行").unwrap();

    // Freedom penalties, evaluated in this priority order.
    pub static ref DETENTION: Regex = Regex::new(
        r"拘役([一二两三四五六七八九十]{1,2}年?又?零?[一二两三四五六七八九十]*个?月?)"
    ).unwrap();
    pub static ref FIXED_TERM: Regex = Regex::new(
        r"有期徒刑([一二两三四五六七八九十]{1,2}年?又?零?[一二两三四五六七八九十]*个?月?)"
    ).unwrap();
    pub static ref LIFE_TERM: Regex = Regex::new(r"无期徒刑").unwrap();
    pub static ref DEATH_PENALTY: Regex = Regex::new(r"死刑").unwrap();

    // Property penalties: fine (罚金) and confiscation (没收…财产).
    pub static ref FINE: Regex = Regex::new(
        r"罚金[人民币]*([0-9,.零一壹二贰两三叁四肆五伍六陆七柒八捌九玖十拾百佰千仟万亿]+元)"
    ).unwrap();
    pub static ref CONFISCATION: Regex = Regex::new(
        r"财产[人民币]*([0-9,.零一壹二贰两三叁四肆五伍六陆七柒八捌九玖十拾百佰千仟万亿]+元)"
    ).unwrap();

    // Deprivation of political rights, for a term.
    pub static ref RIGHTS_TERM: Regex = Regex::new(
        r"政治权利([一二两三四五六七八九十]{1,2}年?又?零?[一二两三四五六七八九十]*个?月?)"
    ).unwrap();

    // Probation (缓刑/缓期, with optional 考验期 wording).
    pub static ref PROBATION: Regex = Regex::new(
        r"缓[刑期]考?验?期?([一二两三四五六七八九十]{1,2}年?又?零?[一二两三四五六七八九十]*个?月?)"
    ).unwrap();

    // Exemption from punishment or acquittal; overrides everything else.
    pub static ref EXEMPTION: Regex = Regex::new(r"免[予于除]|无罪").unwrap();

    // Fact dates: a year plus an optional numeric month or season.
    pub static ref FACT_DATE: Regex = Regex::new(r"(\d{4})年([0-9春夏秋冬]{0,2})").unwrap();

    // Occupation fallback scanned over the facts section.
    pub static ref OCCUPATION_FALLBACK: Regex = Regex::new(
        r"任([^某何免务用凭教由职能的、，。； ][\u{4e00}-\u{9fff}0-9a-zA-Z]+?)[期以时的职、，。； ]"
    ).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_pattern_both_branches() {
        let matches: Vec<&str> = MONEY
            .find_iter("收受13000元，另收受一万三千余元")
            .map(|m| m.as_str())
            .collect();
        assert_eq!(matches, vec!["13000元", "一万三千余元"]);
    }

    #[test]
    fn test_date_pattern() {
        assert!(DATE.is_match("1980年3月15日"));
        assert!(!DATE.is_match("80年3月15日"));
    }

    #[test]
    fn test_offense_count_pattern() {
        let text = "被告人犯受贿罪、贪污罪，数罪并罚";
        assert_eq!(OFFENSE_COUNT.find_iter(text).count(), 1);
        let two = "犯受贿罪，判处……犯贪污罪，判处……";
        assert_eq!(OFFENSE_COUNT.find_iter(two).count(), 2);
    }

    #[test]
    fn test_prosecutors_requires_assignment_phrasing() {
        let caps = PROSECUTORS.captures("指派检察员张三、李四出庭支持公诉").unwrap();
        assert_eq!(&caps[1], "检察员张三、李四");
        assert!(PROSECUTORS.captures("检察员张三到庭").is_none());
    }

    #[test]
    fn test_criminal_law_version() {
        let caps = CRIMINAL_LAW_VERSION.captures("中华人民共和国刑法（1997修正）").unwrap();
        assert_eq!(&caps[1], "1997");
    }
}
