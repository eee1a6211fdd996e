//! Monetary-amount extraction.

use crate::text::{normalize, numerals};

use super::patterns::MONEY;

/// Extract every monetary amount mentioned in `text`, in ten-thousand-yuan
/// units and document order. Unparseable mentions are dropped silently.
pub fn extract_moneys(text: &str) -> Vec<f64> {
    // Full-width comma and full stop double as thousand separators and
    // decimal points inside amounts; fold them to ASCII before matching.
    let clean = normalize::clean(text).replace('，', ",").replace('。', ".");

    MONEY
        .find_iter(&clean)
        .filter_map(|m| numerals::parse_money(m.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_mixed_mentions() {
        let text = "收受贿赂13000元，另贪污一万三千元，合计2.6万元。";
        assert_eq!(extract_moneys(text), vec![1.3, 1.3, 2.6]);
    }

    #[test]
    fn test_extract_with_fullwidth_separators() {
        // １３，０００元 normalizes to 13,000元 before matching.
        assert_eq!(extract_moneys("受贿１３，０００元"), vec![1.3]);
    }

    #[test]
    fn test_no_mentions() {
        assert!(extract_moneys("本院认为被告人有罪。").is_empty());
        assert!(extract_moneys("").is_empty());
    }

    #[test]
    fn test_zero_amount_dropped() {
        assert!(extract_moneys("罚金0元").is_empty());
    }

    #[test]
    fn test_garbled_numeral_run_dropped() {
        // Long enough to overflow the numeral accumulators.
        let text = format!("收受{}元贿赂", "九".repeat(30));
        assert!(extract_moneys(&text).is_empty());
    }
}
