//! Date extraction from judgment text.

use chrono::NaiveDate;

use crate::text::normalize;

use super::patterns::DATE;

/// Extract every `YYYY年M月D日` date from `text`, in document order.
/// Calendar-invalid dates (e.g. 2月30日) are dropped silently.
pub fn extract_dates(text: &str) -> Vec<NaiveDate> {
    let clean = normalize::clean(text);
    DATE.find_iter(&clean)
        .filter_map(|m| NaiveDate::parse_from_str(m.as_str(), "%Y年%m月%d日").ok())
        .collect()
}
