//! Chinese and mixed numeral conversion.
//!
//! Two independent conversions, both single left-to-right folds over
//! character classes with no recursion:
//!
//! - [`parse_money`] turns a monetary numeral string into a value in
//!   ten-thousand-yuan units.
//! - [`parse_period`] turns a duration string (years/months) into months.

/// Character classes recognized by the money fold.
enum MoneyChar {
    /// A bare digit, Chinese or Arabic (零一二…玖, 0-9).
    Digit(i64),
    /// 十/百/千 and their formal variants: multiply the pending digit.
    Unit(i64),
    /// 万: carry the low accumulator into the ten-thousand scope.
    Myriad,
    /// 亿: carry everything into the hundred-million accumulator.
    HundredMillion,
}

fn classify_money_char(c: char) -> Option<MoneyChar> {
    let class = match c {
        '零' => MoneyChar::Digit(0),
        '一' | '壹' => MoneyChar::Digit(1),
        '二' | '两' | '贰' => MoneyChar::Digit(2),
        '三' | '叁' => MoneyChar::Digit(3),
        '四' | '肆' => MoneyChar::Digit(4),
        '五' | '伍' => MoneyChar::Digit(5),
        '六' | '陆' => MoneyChar::Digit(6),
        '七' | '柒' => MoneyChar::Digit(7),
        '八' | '捌' => MoneyChar::Digit(8),
        '九' | '玖' => MoneyChar::Digit(9),
        '0'..='9' => MoneyChar::Digit(i64::from(c as u8 - b'0')),
        '十' | '拾' => MoneyChar::Unit(10),
        '百' | '佰' => MoneyChar::Unit(100),
        '千' | '仟' => MoneyChar::Unit(1_000),
        '万' => MoneyChar::Myriad,
        '亿' => MoneyChar::HundredMillion,
        _ => return None,
    };
    Some(class)
}

/// Accumulate a pure-Chinese numeral string ("一万三千", "两亿零五百万").
///
/// Three running totals: `top` holds completed hundred-million blocks, `low`
/// holds the current sub-万 scope, and `pending` holds a digit run that has
/// not yet met its unit. A unit multiplies the pending digit, defaulting to
/// 1 when none was read ("十三" is 13, not 1×10+3).
///
/// All arithmetic is checked: the source text is arbitrary, and a garbled
/// run long enough to overflow the accumulators reads as no amount.
fn chinese_numeral_value(s: &str) -> Option<i64> {
    let mut low: i64 = 0;
    let mut pending: i64 = 0;
    let mut top: i64 = 0;

    for c in s.chars() {
        match classify_money_char(c)? {
            MoneyChar::Digit(d) => pending = pending.checked_mul(10)?.checked_add(d)?,
            MoneyChar::Unit(u) => {
                let multiplier = if pending == 0 { 1 } else { pending };
                low = low.checked_add(u.checked_mul(multiplier)?)?;
                pending = 0;
            }
            MoneyChar::Myriad => {
                low = low.checked_add(pending)?.checked_mul(10_000)?;
                pending = 0;
            }
            MoneyChar::HundredMillion => {
                low = low.checked_add(pending)?.checked_mul(100_000_000)?;
                top = top.checked_mul(100_000_000)?.checked_add(low)?;
                low = 0;
                pending = 0;
            }
        }
    }

    low.checked_add(pending)?.checked_add(top)
}

/// Parse a monetary numeral string into ten-thousand-yuan units.
///
/// Accepts trailing `元`/`余元` and thousand-separator commas, pure-Chinese
/// numerals ("一万三千元"), Arabic floats ("13000元", "1.3万元") and the
/// 万/亿-suffixed mixed form. Returns `None` for strings with more than one
/// decimal point and for a zero amount, which is indistinguishable from "no
/// amount found".
pub fn parse_money(raw: &str) -> Option<f64> {
    let s: String = raw
        .chars()
        .filter(|c| !matches!(c, '余' | '元' | ','))
        .collect();

    if s.matches('.').count() > 1 {
        return None;
    }

    let has_arabic = s.chars().any(|c| c.is_ascii_digit());
    let yuan = if has_arabic {
        if let Some(prefix) = s.strip_suffix('万') {
            prefix.parse::<f64>().ok()? * 10_000.0
        } else if let Some(prefix) = s.strip_suffix('亿') {
            prefix.parse::<f64>().ok()? * 100_000_000.0
        } else {
            s.parse::<f64>().ok()?
        }
    } else {
        chinese_numeral_value(&s)? as f64
    };

    if yuan == 0.0 {
        None
    } else {
        Some(yuan / 10_000.0)
    }
}

/// Parse a duration string ("三年又六个月", "十三个月") into months.
///
/// Single accumulator: 十 before any digit means 10, after a nonzero
/// accumulator means "times 10" (disambiguating 二十=20 from 十二=12 by
/// order of appearance); 年 converts the months accumulated so far into
/// years. A zero result is reported as `None`.
pub fn parse_period(s: &str) -> Option<i64> {
    let mut acc: i64 = 0;
    for c in s.chars() {
        match c {
            '十' => {
                if acc < 1 {
                    acc += 10;
                } else {
                    acc *= 10;
                }
            }
            '年' => acc *= 12,
            '零' => {}
            '一' => acc += 1,
            '二' | '两' => acc += 2,
            '三' => acc += 3,
            '四' => acc += 4,
            '五' => acc += 5,
            '六' => acc += 6,
            '七' => acc += 7,
            '八' => acc += 8,
            '九' => acc += 9,
            _ => {}
        }
    }
    (acc > 0).then_some(acc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_pure_chinese() {
        assert_eq!(parse_money("一万三千元"), Some(1.3));
        assert_eq!(parse_money("五千元"), Some(0.5));
        assert_eq!(parse_money("两亿元"), Some(20_000.0));
        assert_eq!(parse_money("壹拾万元"), Some(10.0));
    }

    #[test]
    fn test_money_compound_chinese() {
        // 2亿 + 350万 + 6000
        assert_eq!(parse_money("两亿三百五十万六千元"), Some(20_350.6));
        assert_eq!(parse_money("一百二十三万元"), Some(123.0));
    }

    #[test]
    fn test_money_arabic_and_mixed() {
        assert_eq!(parse_money("13000元"), Some(1.3));
        assert_eq!(parse_money("1.3万元"), Some(1.3));
        assert_eq!(parse_money("2亿元"), Some(20_000.0));
        assert_eq!(parse_money("3,500元"), Some(0.35));
        assert_eq!(parse_money("5000余元"), Some(0.5));
    }

    #[test]
    fn test_money_rejects_ambiguous() {
        assert_eq!(parse_money("1.2.3元"), None);
        assert_eq!(parse_money("零元"), None);
        assert_eq!(parse_money("0元"), None);
    }

    #[test]
    fn test_money_overflow_reads_as_absent() {
        let long_run = format!("{}元", "九".repeat(20));
        assert_eq!(parse_money(&long_run), None);
        assert_eq!(parse_money("九亿亿亿元"), None);
    }

    #[test]
    fn test_money_embedded_arabic_run_in_chinese() {
        // Arabic digit runs accumulate positionally inside the fold.
        assert_eq!(chinese_numeral_value("12"), Some(12));
        assert_eq!(chinese_numeral_value("12万"), Some(120_000));
    }

    #[test]
    fn test_period_basic() {
        assert_eq!(parse_period("十三个月"), Some(13));
        assert_eq!(parse_period("二十"), Some(20));
        assert_eq!(parse_period("十"), Some(10));
        assert_eq!(parse_period("六个月"), Some(6));
    }

    #[test]
    fn test_period_years() {
        assert_eq!(parse_period("三年"), Some(36));
        assert_eq!(parse_period("三年又六个月"), Some(42));
        assert_eq!(parse_period("一年零三个月"), Some(15));
    }

    #[test]
    fn test_period_zero_is_absent() {
        assert_eq!(parse_period("零个月"), None);
        assert_eq!(parse_period(""), None);
    }
}
