//! Output record model.
//!
//! Every document flattens to one [`CaseRecord`]: a fixed column list with
//! one [`FieldValue`] per column. Rendering follows the export contract:
//! absent fields print the `None` sentinel, floats print with two decimals,
//! dates as `YYYY-MM-DD`, lists join their rendered elements with `+`, and
//! commas are stripped from text so the comma-delimited output stays intact.

use chrono::NaiveDate;
use serde::ser::{Serialize, SerializeSeq, Serializer};

/// Sentinel printed for an absent field.
pub const ABSENT: &str = "None";

/// A typed extracted value, or an explicit absent marker.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Absent,
    Int(i64),
    Float(f64),
    Text(String),
    Date(NaiveDate),
    List(Vec<FieldValue>),
}

impl FieldValue {
    /// Render to the flat export form.
    pub fn render(&self) -> String {
        match self {
            FieldValue::Absent => ABSENT.to_string(),
            FieldValue::Int(v) => v.to_string(),
            FieldValue::Float(v) => format!("{:.2}", v),
            FieldValue::Text(s) => s.replace(',', ""),
            FieldValue::Date(d) => d.format("%Y-%m-%d").to_string(),
            FieldValue::List(items) => items
                .iter()
                .map(FieldValue::render)
                .collect::<Vec<_>>()
                .join("+"),
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, FieldValue::Absent)
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Absent => serializer.serialize_none(),
            FieldValue::Int(v) => serializer.serialize_i64(*v),
            FieldValue::Float(v) => serializer.serialize_f64(*v),
            FieldValue::Text(s) => serializer.serialize_str(s),
            FieldValue::Date(d) => serializer.serialize_str(&d.format("%Y-%m-%d").to_string()),
            FieldValue::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
        }
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::Int(v)
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Float(v)
    }
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        FieldValue::Int(i64::from(v))
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(d: NaiveDate) -> Self {
        FieldValue::Date(d)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(FieldValue::Absent)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(items: Vec<String>) -> Self {
        FieldValue::List(items.into_iter().map(FieldValue::Text).collect())
    }
}

/// The flat per-document output record.
#[derive(Debug, Clone)]
pub struct CaseRecord {
    fields: Vec<FieldValue>,
}

impl CaseRecord {
    /// Output columns, in export order.
    pub const COLUMNS: [&'static str; 54] = [
        "id",
        "doc_type",
        "case_number",
        "cause",
        "court",
        "court_level",
        "trial_level",
        "province",
        "region",
        "city",
        "accept_date",
        "judge_date",
        "duration_days",
        "chief_judge",
        "judges",
        "jurors",
        "is_panel",
        "clerk",
        "litigants",
        "lawyers",
        "law_firms",
        "is_delayed",
        "is_designated_jurisdiction",
        "is_simplified_procedure",
        "prosecution",
        "criminal_law_version",
        "prosecutors",
        "indictment_number",
        "defendant_name",
        "defendant_name_redacted",
        "defendant_sex",
        "defendant_birth",
        "defendant_age",
        "defendant_ethnicity",
        "defendant_is_minority",
        "defendant_education",
        "defendant_occupation",
        "has_supplementary_investigation",
        "defense_opinion_accepted",
        "is_recidivist",
        "has_merit",
        "has_surrender",
        "has_confession",
        "amount_alleged",
        "amount_adjudicated",
        "fact_count",
        "occupation",
        "occupation_type",
        "occupation_grade",
        "penalty_counts",
        "penalty_freedom",
        "penalty_property",
        "penalty_rights",
        "penalty_probation",
    ];

    /// Build a record from values in column order.
    ///
    /// # Panics
    /// Panics if the value count does not match the column count; the
    /// profile is the only constructor and always supplies every column.
    pub fn from_fields(fields: Vec<FieldValue>) -> Self {
        assert_eq!(fields.len(), Self::COLUMNS.len(), "record column mismatch");
        Self { fields }
    }

    pub fn fields(&self) -> &[FieldValue] {
        &self.fields
    }

    /// Look up one value by column name.
    pub fn get(&self, column: &str) -> Option<&FieldValue> {
        Self::COLUMNS
            .iter()
            .position(|c| *c == column)
            .map(|i| &self.fields[i])
    }

    /// Render every column to its flat export form.
    pub fn row(&self) -> Vec<String> {
        self.fields.iter().map(FieldValue::render).collect()
    }

    /// The record as a JSON object keyed by column name.
    pub fn to_json(&self) -> serde_json::Value {
        let map: serde_json::Map<String, serde_json::Value> = Self::COLUMNS
            .iter()
            .zip(&self.fields)
            .map(|(name, value)| {
                (
                    (*name).to_string(),
                    serde_json::to_value(value).unwrap_or(serde_json::Value::Null),
                )
            })
            .collect();
        serde_json::Value::Object(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_scalars() {
        assert_eq!(FieldValue::Absent.render(), "None");
        assert_eq!(FieldValue::Int(-6).render(), "-6");
        assert_eq!(FieldValue::Float(1.3).render(), "1.30");
        assert_eq!(
            FieldValue::Date(NaiveDate::from_ymd_opt(2016, 3, 1).unwrap()).render(),
            "2016-03-01"
        );
    }

    #[test]
    fn test_render_strips_commas() {
        assert_eq!(FieldValue::Text("a,b，c".into()).render(), "ab，c");
    }

    #[test]
    fn test_render_list_joins_with_plus() {
        let list = FieldValue::List(vec![
            FieldValue::Text("张三".into()),
            FieldValue::Text("李四".into()),
        ]);
        assert_eq!(list.render(), "张三+李四");
        assert_eq!(FieldValue::List(vec![]).render(), "");
    }

    #[test]
    fn test_from_option() {
        assert_eq!(FieldValue::from(None::<i64>), FieldValue::Absent);
        assert_eq!(FieldValue::from(Some(3i64)), FieldValue::Int(3));
    }

    #[test]
    fn test_record_lookup_and_json() {
        let mut fields = vec![FieldValue::Absent; CaseRecord::COLUMNS.len()];
        fields[0] = FieldValue::Int(42);
        let record = CaseRecord::from_fields(fields);
        assert_eq!(record.get("id"), Some(&FieldValue::Int(42)));
        assert_eq!(record.get("no_such_column"), None);

        let json = record.to_json();
        assert_eq!(json["id"], serde_json::json!(42));
        assert_eq!(json["cause"], serde_json::Value::Null);
        assert_eq!(record.row()[0], "42");
    }
}
