//! Typed record values
//!
//! Records arrive from the REST API as JSON objects. `Record::from_json`
//! coerces each declared field according to its `FieldType`, so layouts work
//! with `FieldValue`s instead of indexing raw JSON by string key.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use super::field_type::FieldType;
use super::types::{EntitySchema, FieldDef};

#[derive(Debug, Error, PartialEq)]
pub enum RecordError {
    #[error("record is not a JSON object")]
    NotAnObject,
    #[error("record has no id")]
    MissingId,
    #[error("field '{field}' expects {expected}, got {found}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        found: String,
    },
}

/// A single typed field value
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum FieldValue {
    #[default]
    Null,
    Text(String),
    Number(f64),
    Bool(bool),
    Date(NaiveDate),
    DateTime(DateTime<Utc>),
    List(Vec<String>),
    Json(Value),
}

impl FieldValue {
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Null, blank text and empty lists count as empty
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Text(s) => s.trim().is_empty(),
            Self::List(items) => items.is_empty(),
            _ => false,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(d) => Some(*d),
            Self::DateTime(dt) => Some(dt.date_naive()),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Coerce a raw JSON value according to the declared field type
    pub fn from_json(field: &FieldDef, raw: &Value) -> Result<Self, RecordError> {
        if raw.is_null() {
            return Ok(Self::Null);
        }
        let mismatch = |expected: &'static str| RecordError::TypeMismatch {
            field: field.key.to_string(),
            expected,
            found: json_kind(raw).to_string(),
        };

        let ty = field.field_type;
        match ty {
            FieldType::Json => Ok(Self::Json(raw.clone())),
            FieldType::Switch => match raw {
                Value::Bool(b) => Ok(Self::Bool(*b)),
                Value::Number(n) => Ok(Self::Bool(n.as_f64().unwrap_or(0.0) != 0.0)),
                Value::String(s) => match s.as_str() {
                    "true" | "1" | "yes" => Ok(Self::Bool(true)),
                    "false" | "0" | "no" | "" => Ok(Self::Bool(false)),
                    _ => Err(mismatch("a boolean")),
                },
                _ => Err(mismatch("a boolean")),
            },
            _ if ty.is_numeric() => match raw {
                Value::Number(n) => n.as_f64().map(Self::Number).ok_or_else(|| mismatch("a number")),
                Value::String(s) if s.trim().is_empty() => Ok(Self::Null),
                Value::String(s) => s
                    .trim()
                    .parse::<f64>()
                    .map(Self::Number)
                    .map_err(|_| mismatch("a number")),
                _ => Err(mismatch("a number")),
            },
            FieldType::Date => match raw {
                Value::String(s) if s.trim().is_empty() => Ok(Self::Null),
                Value::String(s) => parse_date(s).map(Self::Date).ok_or_else(|| mismatch("a date")),
                _ => Err(mismatch("a date")),
            },
            FieldType::DateTime => match raw {
                Value::String(s) if s.trim().is_empty() => Ok(Self::Null),
                Value::String(s) => parse_datetime(s)
                    .map(Self::DateTime)
                    .ok_or_else(|| mismatch("a timestamp")),
                _ => Err(mismatch("a timestamp")),
            },
            _ if ty.is_list() => match raw {
                Value::Array(items) => items
                    .iter()
                    .map(|item| match item {
                        Value::String(s) => Ok(s.clone()),
                        Value::Number(n) => Ok(n.to_string()),
                        _ => Err(mismatch("a list of strings")),
                    })
                    .collect::<Result<Vec<_>, _>>()
                    .map(Self::List),
                Value::String(s) => Ok(Self::List(
                    s.split(',')
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .map(str::to_string)
                        .collect(),
                )),
                _ => Err(mismatch("a list of strings")),
            },
            FieldType::Relation | FieldType::Select => match raw {
                Value::String(s) => Ok(Self::Text(s.clone())),
                Value::Number(n) => Ok(Self::Text(n.to_string())),
                // Expanded relations: {"id": ..., "name": ...}
                Value::Object(obj) if ty == FieldType::Relation => match obj.get("id") {
                    Some(Value::String(s)) => Ok(Self::Text(s.clone())),
                    Some(Value::Number(n)) => Ok(Self::Text(n.to_string())),
                    _ => Err(mismatch("a reference id")),
                },
                _ => Err(mismatch("a string")),
            },
            // Text-like fields: phone numbers and codes often arrive as JSON numbers
            _ => match raw {
                Value::String(s) => Ok(Self::Text(s.clone())),
                Value::Number(n) => Ok(Self::Text(n.to_string())),
                Value::Bool(b) => Ok(Self::Text(b.to_string())),
                _ => Err(mismatch("a string")),
            },
        }
    }

    /// JSON form sent back to the REST API
    pub fn to_json(&self) -> Value {
        match self {
            Self::Null => Value::Null,
            Self::Text(s) => Value::String(s.clone()),
            Self::Number(n) => serde_json::Number::from_f64(*n)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            Self::Bool(b) => Value::Bool(*b),
            Self::Date(d) => Value::String(d.format("%Y-%m-%d").to_string()),
            Self::DateTime(dt) => Value::String(dt.to_rfc3339()),
            Self::List(items) => Value::Array(items.iter().cloned().map(Value::String).collect()),
            Self::Json(v) => v.clone(),
        }
    }

    /// Raw text without field-aware formatting
    pub fn to_plain_string(&self) -> String {
        match self {
            Self::Null => String::new(),
            Self::Text(s) => s.clone(),
            Self::Number(n) => format_number(*n),
            Self::Bool(true) => "Yes".to_string(),
            Self::Bool(false) => "No".to_string(),
            Self::Date(d) => d.format("%Y-%m-%d").to_string(),
            Self::DateTime(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
            Self::List(items) => items.join(", "),
            Self::Json(v) => v.to_string(),
        }
    }

    /// Display text for table cells and detail rows
    pub fn display(&self, field: &FieldDef) -> String {
        match (self, field.field_type) {
            (Self::Text(s), FieldType::Select) => field.option_label(s).to_string(),
            (Self::List(items), FieldType::MultiSelect) => items
                .iter()
                .map(|v| field.option_label(v))
                .collect::<Vec<_>>()
                .join(", "),
            (Self::Number(n), FieldType::Currency) => format_money(*n),
            (Self::Number(n), FieldType::Percent) => format!("{:.1}%", n),
            (Self::Number(n), FieldType::Rating) => format!("{}/5", format_number(*n)),
            _ => self.to_plain_string(),
        }
    }

    /// Ordering used by client-side sorting; nulls sort last
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Null, Self::Null) => Ordering::Equal,
            (Self::Null, _) => Ordering::Greater,
            (_, Self::Null) => Ordering::Less,
            (Self::Number(a), Self::Number(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
            (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
            (Self::Date(a), Self::Date(b)) => a.cmp(b),
            (Self::DateTime(a), Self::DateTime(b)) => a.cmp(b),
            (a, b) => a
                .to_plain_string()
                .to_lowercase()
                .cmp(&b.to_plain_string().to_lowercase()),
        }
    }
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .or_else(|| parse_datetime(s).map(|dt| dt.date_naive()))
}

fn parse_datetime(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn format_thousands(n: i64) -> String {
    let s = n.abs().to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    if n < 0 {
        result.push('-');
    }
    result.chars().rev().collect()
}

/// Integers without decimals, everything else with two
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format_thousands(n as i64)
    } else {
        format!("{:.2}", n)
    }
}

pub fn format_money(n: f64) -> String {
    let cents = (n.abs() * 100.0).round() as i64;
    let whole = format_thousands(cents / 100);
    let sign = if n < 0.0 && cents != 0 { "-" } else { "" };
    format!("{}{}.{:02}", sign, whole, cents % 100)
}

// ============================================================================
// Records
// ============================================================================

/// Typed access to a record's fields; layouts are generic over it
pub trait EntityRecord {
    fn record_id(&self) -> String;

    fn field_value(&self, key: &str) -> Option<FieldValue>;

    /// Display text of a field, empty when unset
    fn display_value(&self, field: &FieldDef) -> String {
        self.field_value(field.key)
            .map(|v| v.display(field))
            .unwrap_or_default()
    }
}

/// Generic record: id plus typed values keyed by field
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub values: BTreeMap<String, FieldValue>,
}

impl Record {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            values: BTreeMap::new(),
        }
    }

    /// Builder-style setter
    pub fn with(mut self, key: &str, value: FieldValue) -> Self {
        self.values.insert(key.to_string(), value);
        self
    }

    pub fn set(&mut self, key: &str, value: FieldValue) {
        self.values.insert(key.to_string(), value);
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.values.get(key)
    }

    /// Coerce a JSON object using the schema's field types.
    /// Keys the schema does not declare are dropped.
    pub fn from_json(schema: &EntitySchema, raw: &Value) -> Result<Self, RecordError> {
        let obj = raw.as_object().ok_or(RecordError::NotAnObject)?;
        let id = match obj.get("id") {
            Some(Value::String(s)) if !s.is_empty() => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => return Err(RecordError::MissingId),
        };

        let mut record = Self::new(id);
        for field in schema.fields {
            if let Some(raw_value) = obj.get(field.key) {
                record.set(field.key, FieldValue::from_json(field, raw_value)?);
            }
        }
        Ok(record)
    }

    /// Coerce a JSON array of records
    pub fn list_from_json(schema: &EntitySchema, raw: &Value) -> Result<Vec<Self>, RecordError> {
        match raw {
            Value::Array(items) => items.iter().map(|v| Self::from_json(schema, v)).collect(),
            // Envelope shape: {"items": [...]}
            Value::Object(obj) => match obj.get("items").or_else(|| obj.get("data")) {
                Some(inner @ Value::Array(_)) => Self::list_from_json(schema, inner),
                _ => Err(RecordError::NotAnObject),
            },
            _ => Err(RecordError::NotAnObject),
        }
    }

    /// JSON body for create/update requests (only schema fields)
    pub fn to_json(&self, schema: &EntitySchema) -> Value {
        let mut obj = serde_json::Map::new();
        if !self.id.is_empty() {
            obj.insert("id".to_string(), Value::String(self.id.clone()));
        }
        for field in schema.fields {
            if let Some(value) = self.values.get(field.key) {
                obj.insert(field.key.to_string(), value.to_json());
            }
        }
        Value::Object(obj)
    }

    /// Copy every schema field out of any record type
    pub fn snapshot(schema: &EntitySchema, source: &dyn EntityRecord) -> Self {
        let mut record = Self::new(source.record_id());
        for field in schema.fields {
            if let Some(value) = source.field_value(field.key) {
                record.set(field.key, value);
            }
        }
        record
    }
}

impl EntityRecord for Record {
    fn record_id(&self) -> String {
        self.id.clone()
    }

    fn field_value(&self, key: &str) -> Option<FieldValue> {
        self.values.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::schema::types::SelectOption;
    use serde_json::json;

    const STATUS_OPTIONS: &[SelectOption] = &[
        SelectOption::new("todo", "To do"),
        SelectOption::new("done", "Done"),
    ];
    const STATUS: FieldDef =
        FieldDef::new("status", "Status", FieldType::Select).options(STATUS_OPTIONS);

    #[test]
    fn numeric_fields_accept_numeric_strings() {
        let field = FieldDef::new("amount", "Amount", FieldType::Currency);
        assert_eq!(
            FieldValue::from_json(&field, &json!("1250.5")).unwrap(),
            FieldValue::Number(1250.5)
        );
        assert_eq!(
            FieldValue::from_json(&field, &json!("")).unwrap(),
            FieldValue::Null
        );
        assert!(matches!(
            FieldValue::from_json(&field, &json!(true)),
            Err(RecordError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn text_fields_take_scalar_json() {
        let phone = FieldDef::new("phone", "Phone", FieldType::Phone);
        assert_eq!(
            FieldValue::from_json(&phone, &json!(5550101)).unwrap(),
            FieldValue::text("5550101")
        );
        let code = FieldDef::new("code", "Code", FieldType::Text);
        assert_eq!(
            FieldValue::from_json(&code, &json!(false)).unwrap(),
            FieldValue::text("false")
        );
        assert!(matches!(
            FieldValue::from_json(&code, &json!({"nested": 1})),
            Err(RecordError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn numeric_phone_does_not_sink_the_list() {
        use crate::domain::a005_venue::schema::VENUE_SCHEMA;

        let raw = json!([
            {"id": "v1", "contact_phone": "555-0100"},
            {"id": "v2", "contact_phone": 5550101}
        ]);
        let records = Record::list_from_json(&VENUE_SCHEMA, &raw).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(
            records[1].get("contact_phone"),
            Some(&FieldValue::text("5550101"))
        );
    }

    #[test]
    fn dates_accept_plain_and_rfc3339() {
        let field = FieldDef::new("due", "Due", FieldType::Date);
        let expected = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(
            FieldValue::from_json(&field, &json!("2024-03-09")).unwrap(),
            FieldValue::Date(expected)
        );
        assert_eq!(
            FieldValue::from_json(&field, &json!("2024-03-09T10:00:00Z")).unwrap(),
            FieldValue::Date(expected)
        );
    }

    #[test]
    fn relation_accepts_expanded_object() {
        let field = FieldDef::new("company_id", "Company", FieldType::Relation).relation("companies");
        assert_eq!(
            FieldValue::from_json(&field, &json!({"id": 42, "name": "Acme"})).unwrap(),
            FieldValue::text("42")
        );
    }

    #[test]
    fn list_fields_split_comma_strings() {
        let field = FieldDef::new("tags", "Tags", FieldType::Tags);
        assert_eq!(
            FieldValue::from_json(&field, &json!("vip, press,")).unwrap(),
            FieldValue::List(vec!["vip".into(), "press".into()])
        );
    }

    #[test]
    fn select_displays_option_label() {
        assert_eq!(FieldValue::text("done").display(&STATUS), "Done");
        assert_eq!(FieldValue::text("unknown").display(&STATUS), "unknown");
    }

    #[test]
    fn money_formatting() {
        assert_eq!(format_money(1234567.891), "1,234,567.89");
        assert_eq!(format_money(-12.5), "-12.50");
        assert_eq!(format_money(0.0), "0.00");
        assert_eq!(format_number(1500.0), "1,500");
        assert_eq!(format_number(2.5), "2.50");
    }

    #[test]
    fn nulls_sort_last() {
        let mut values = vec![
            FieldValue::Null,
            FieldValue::Number(3.0),
            FieldValue::Number(1.0),
        ];
        values.sort_by(|a, b| a.compare(b));
        assert_eq!(values[0], FieldValue::Number(1.0));
        assert_eq!(values[2], FieldValue::Null);
    }

    #[test]
    fn record_requires_id() {
        let schema = &crate::domain::a002_task::schema::TASK_SCHEMA;
        assert_eq!(
            Record::from_json(schema, &json!({"title": "x"})),
            Err(RecordError::MissingId)
        );
        assert_eq!(
            Record::from_json(schema, &json!([1, 2])),
            Err(RecordError::NotAnObject)
        );
    }

    #[test]
    fn record_drops_unknown_keys_and_round_trips_body() {
        let schema = &crate::domain::a002_task::schema::TASK_SCHEMA;
        let record = Record::from_json(
            schema,
            &json!({"id": 7, "title": "Book crew", "status": "todo", "legacy": 1}),
        )
        .unwrap();
        assert_eq!(record.id, "7");
        assert!(record.get("legacy").is_none());

        let body = record.to_json(schema);
        assert_eq!(body["title"], json!("Book crew"));
        assert!(body.get("legacy").is_none());
    }

    #[test]
    fn list_from_json_unwraps_envelope() {
        let schema = &crate::domain::a002_task::schema::TASK_SCHEMA;
        let rows = Record::list_from_json(
            schema,
            &json!({"items": [{"id": "a", "title": "One"}, {"id": "b", "title": "Two"}]}),
        )
        .unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].id, "b");
    }
}
