//! Fact counting from the facts-established section.

use std::collections::BTreeSet;

use crate::text::normalize;

use super::patterns::FACT_DATE;

/// Count distinct offense instances from the dates the facts section cites.
///
/// Every year(+month/season) token is canonicalized to a `YYYYMM` integer
/// (seasons map to their middle month: spring 3, summer 6, autumn 9,
/// winter 12; a bare year gets month 00), deduplicated and sorted. One
/// distinct date is one fact; N>1 distinct dates are N-1 facts, treating the
/// last date as the closing or reference date rather than a separate
/// instance. No dates at all leaves the count absent.
pub fn count_facts(fact_text: &str) -> Option<i64> {
    let clean = normalize::clean(fact_text);

    let mut stamps: BTreeSet<i64> = BTreeSet::new();
    for caps in FACT_DATE.captures_iter(&clean) {
        let year: i64 = match caps[1].parse() {
            Ok(y) => y,
            Err(_) => continue,
        };
        let month_str: String = caps[2]
            .chars()
            .map(|c| match c {
                '春' => "3".to_string(),
                '夏' => "6".to_string(),
                '秋' => "9".to_string(),
                '冬' => "12".to_string(),
                other => other.to_string(),
            })
            .collect();
        let stamp = if month_str.is_empty() {
            year * 100
        } else {
            year * 100 + month_str.parse::<i64>().unwrap_or(0)
        };
        stamps.insert(stamp);
    }

    match stamps.len() {
        0 => None,
        1 => Some(1),
        n => Some(n as i64 - 1),
    }
}
