//! Judgment text normalization.
//!
//! Every pattern in the rule catalog is written against normalized text, so
//! all extractors funnel raw paragraph text through [`clean`] first. The
//! transform is idempotent: cleaning already-clean text is a no-op.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Full-width parentheses carry editorial annotations in the source feed.
    static ref BRACKETED: Regex = Regex::new(r"（.*?）").unwrap();
    static ref SENTENCE_BREAK: Regex = Regex::new(r"[。！？]").unwrap();
}

/// Punctuation removed by [`strip_punctuation`], ASCII and full-width.
const PUNCTUATION: &str = r#",.?!:;()"'-，。？！：；（）“”‘’《》、"#;

/// Normalize raw judgment text.
///
/// In order: trim, replace newlines with a 4-space run (keeps the visual
/// paragraph join without multi-line ambiguity in later regexes), map ASCII
/// `:;()` to their full-width equivalents, drop slashes/backslashes/ASCII
/// quotes, fold full-width digits to ASCII, delete full-width parenthesized
/// spans. Empty or absent input yields an empty string.
pub fn clean(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let mut out = String::with_capacity(trimmed.len());
    for c in trimmed.chars() {
        match c {
            '\n' => out.push_str("    "),
            ':' => out.push('：'),
            ';' => out.push('；'),
            '(' => out.push('（'),
            ')' => out.push('）'),
            '\'' | '"' | '/' | '\\' => {}
            '０'..='９' => {
                // Full-width digits sit at a fixed offset from ASCII.
                let digit = (c as u32) - ('０' as u32);
                out.push(char::from(b'0' + digit as u8));
            }
            _ => out.push(c),
        }
    }

    BRACKETED.replace_all(&out, "").into_owned()
}

/// Remove the fixed punctuation set from already-normalized text, for
/// word-boundary-insensitive matching.
pub fn strip_punctuation(text: &str) -> String {
    text.chars().filter(|c| !PUNCTUATION.contains(*c)).collect()
}

/// Split normalized text into sentences on 。！？, dropping empty pieces.
pub fn sentences(text: &str) -> Vec<String> {
    SENTENCE_BREAK
        .split(text)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_basic() {
        assert_eq!(clean("  本院认为:被告人\"张三\"有罪  "), "本院认为：被告人张三有罪");
    }

    #[test]
    fn test_clean_newlines_and_digits() {
        assert_eq!(clean("第１２３条\n下一段"), "第123条    下一段");
    }

    #[test]
    fn test_clean_removes_bracketed_spans() {
        assert_eq!(clean("判处罚金（人民币）五万元"), "判处罚金五万元");
        // ASCII parentheses are folded to full-width first, then removed.
        assert_eq!(clean("判决书(2019年版)正文"), "判决书正文");
    }

    #[test]
    fn test_clean_empty_input() {
        assert_eq!(clean(""), "");
        assert_eq!(clean("   \n  "), "");
    }

    #[test]
    fn test_clean_idempotent() {
        let samples = [
            "被告人李某（化名），男，１９８０年3月5日出生",
            "经审理查明:\n2015年春",
            "判处有期徒刑三年，缓刑四年。",
        ];
        for raw in samples {
            let once = clean(raw);
            assert_eq!(clean(&once), once);
        }
    }

    #[test]
    fn test_strip_punctuation() {
        assert_eq!(strip_punctuation("本院认为：有罪。"), "本院认为有罪");
        assert_eq!(strip_punctuation("《刑法》、第一条"), "刑法第一条");
        assert_eq!(strip_punctuation(""), "");
    }

    #[test]
    fn test_sentences() {
        let parts = sentences("本院认为有罪。辩护意见不予采纳！还押？");
        assert_eq!(parts, vec!["本院认为有罪", "辩护意见不予采纳", "还押"]);
        assert!(sentences("").is_empty());
    }
}
