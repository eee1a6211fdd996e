//! Case-amount reconciliation between prosecution and court.

use crate::text::normalize;

use super::money::extract_moneys;
use super::patterns::IMPRECISE_AMOUNT;

/// Reconciled case amounts, in ten-thousand-yuan units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AmountRecord {
    /// Amount asserted in the prosecution's case overview.
    pub alleged: Option<f64>,
    /// Amount the court found proven.
    pub adjudicated: Option<f64>,
}

/// Derive and reconcile the alleged and adjudicated amounts.
///
/// The alleged amount is the largest money mention in the case overview;
/// the adjudicated amount is the largest mention in the court opinion,
/// falling back to the facts section only when the opinion has none.
///
/// Reconciliation: a court cannot find more than was prosecuted, so when
/// adjudicated exceeds alleged the opinion is re-checked for an
/// "amount imprecise" marker. With the marker, adjudicated becomes alleged
/// minus `epsilon`; without it, the alleged figure is authoritative and
/// adjudicated is clamped to it. An absent adjudicated amount inherits the
/// alleged one.
pub fn reconcile_amounts(
    overview_text: Option<&str>,
    opinion_text: Option<&str>,
    fact_text: Option<&str>,
    epsilon: f64,
) -> AmountRecord {
    let alleged = max_money(overview_text);
    let adjudicated = max_money(opinion_text).or_else(|| max_money(fact_text));

    let mut record = AmountRecord {
        alleged,
        adjudicated,
    };

    if let Some(alleged) = alleged {
        match adjudicated {
            Some(adjudicated) if alleged < adjudicated => {
                let opinion = normalize::clean(opinion_text.unwrap_or(""));
                record.adjudicated = if IMPRECISE_AMOUNT.is_match(&opinion) {
                    Some(alleged - epsilon)
                } else {
                    Some(alleged)
                };
            }
            Some(_) => {}
            None => record.adjudicated = Some(alleged),
        }
    }

    record
}

fn max_money(text: Option<&str>) -> Option<f64> {
    extract_moneys(text?)
        .into_iter()
        .fold(None, |acc: Option<f64>, v| {
            Some(acc.map_or(v, |a| a.max(v)))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 0.01;

    #[test]
    fn test_opinion_within_overview_is_kept() {
        // Overview mentions 50万 and 30万; the opinion confirms 50万.
        let record = reconcile_amounts(
            Some("起诉指控受贿50万元，其中30万元尚未查实"),
            Some("本院认定受贿50万元"),
            None,
            EPSILON,
        );
        assert_eq!(record.alleged, Some(50.0));
        assert_eq!(record.adjudicated, Some(50.0));
    }

    #[test]
    fn test_larger_adjudicated_without_marker_clamps() {
        let record = reconcile_amounts(
            Some("指控受贿40万元"),
            Some("本院认定受贿45万元"),
            None,
            EPSILON,
        );
        assert_eq!(record.alleged, Some(40.0));
        assert_eq!(record.adjudicated, Some(40.0));
    }

    #[test]
    fn test_larger_adjudicated_with_imprecision_marker() {
        let record = reconcile_amounts(
            Some("指控受贿40万元"),
            Some("指控数额不准，本院认定受贿45万元"),
            None,
            EPSILON,
        );
        assert_eq!(record.adjudicated, Some(40.0 - EPSILON));
    }

    #[test]
    fn test_fact_section_fallback() {
        let record = reconcile_amounts(
            Some("指控受贿40万元"),
            Some("本院认为事实清楚"),
            Some("经查明收受30万元"),
            EPSILON,
        );
        assert_eq!(record.adjudicated, Some(30.0));
    }

    #[test]
    fn test_absent_adjudicated_inherits_alleged() {
        let record = reconcile_amounts(Some("指控受贿40万元"), None, None, EPSILON);
        assert_eq!(record.adjudicated, Some(40.0));
    }

    #[test]
    fn test_adjudicated_stands_alone() {
        let record = reconcile_amounts(None, Some("本院认定受贿45万元"), None, EPSILON);
        assert_eq!(record.alleged, None);
        assert_eq!(record.adjudicated, Some(45.0));
    }

    #[test]
    fn test_both_absent() {
        assert_eq!(reconcile_amounts(None, None, None, EPSILON), AmountRecord::default());
    }
}
