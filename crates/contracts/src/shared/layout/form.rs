//! Form state: values vs. initial values, validation and submit gating

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;

use crate::shared::schema::{
    DefaultValue, EntitySchema, FieldDef, FieldType, FieldValue, Record,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

impl FormMode {
    /// Header copy: "New Task" / "Edit Task"
    pub fn title(&self, schema: &EntitySchema) -> String {
        match self {
            Self::Create => format!("New {}", schema.identity.name),
            Self::Edit => format!("Edit {}", schema.identity.name),
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            Self::Create => "Create",
            Self::Edit => "Save",
        }
    }
}

/// Edit forms stay disabled until something changes; create forms only
/// need valid values
pub fn is_submit_disabled(mode: FormMode, saving: bool, is_valid: bool, is_dirty: bool) -> bool {
    saving || !is_valid || (mode == FormMode::Edit && !is_dirty)
}

#[derive(Debug, Clone)]
pub struct FormState {
    schema: &'static EntitySchema,
    mode: FormMode,
    initial: Record,
    values: Record,
    submitted: bool,
}

impl FormState {
    /// Create form seeded with field defaults
    pub fn create(schema: &'static EntitySchema, now: DateTime<Utc>) -> Self {
        let mut values = Record::new("");
        for field in schema.fields {
            if let Some(default) = field.default {
                values.set(field.key, default_to_value(default, now));
            }
        }
        Self {
            schema,
            mode: FormMode::Create,
            initial: values.clone(),
            values,
            submitted: false,
        }
    }

    pub fn edit(schema: &'static EntitySchema, record: Record) -> Self {
        Self {
            schema,
            mode: FormMode::Edit,
            initial: record.clone(),
            values: record,
            submitted: false,
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn schema(&self) -> &'static EntitySchema {
        self.schema
    }

    pub fn value(&self, key: &str) -> FieldValue {
        self.values.get(key).cloned().unwrap_or_default()
    }

    pub fn set(&mut self, key: &str, value: FieldValue) {
        self.values.set(key, value);
    }

    /// Store raw input text, coerced by the field's type
    pub fn set_input(&mut self, key: &str, raw: &str) {
        if let Some(field) = self.schema.field(key) {
            self.values.set(key, parse_input(field, raw));
        }
    }

    /// Text shown inside the field's input element
    pub fn input_value(&self, key: &str) -> String {
        match self.value(key) {
            FieldValue::Null => String::new(),
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Date(d) => d.format("%Y-%m-%d").to_string(),
            FieldValue::DateTime(dt) => dt.format("%Y-%m-%dT%H:%M").to_string(),
            FieldValue::Bool(b) => b.to_string(),
            other => other.to_plain_string(),
        }
    }

    /// Changed relative to the initial values; unset and null are equal
    pub fn is_dirty(&self) -> bool {
        self.schema.fields.iter().any(|f| {
            let before = self.initial.get(f.key).cloned().unwrap_or_default();
            let after = self.value(f.key);
            !(before == after || (before.is_empty() && after.is_empty()))
        })
    }

    /// Validation errors of every form field, keyed by field
    pub fn errors(&self) -> BTreeMap<&'static str, String> {
        let mut out = BTreeMap::new();
        for field in self.schema.form_fields() {
            if let Err(message) = validate_field(field, &self.value(field.key)) {
                out.insert(field.key, message);
            }
        }
        out
    }

    pub fn error_for(&self, key: &str) -> Option<String> {
        let field = self.schema.field(key)?;
        validate_field(field, &self.value(key)).err()
    }

    pub fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }

    /// Errors are shown once the user tried to submit or the field changed
    pub fn visible_error(&self, key: &str) -> Option<String> {
        let changed = self.initial.get(key) != self.values.get(key);
        if self.submitted || changed {
            self.error_for(key)
        } else {
            None
        }
    }

    pub fn mark_submitted(&mut self) {
        self.submitted = true;
    }

    pub fn is_submit_disabled(&self, saving: bool) -> bool {
        is_submit_disabled(self.mode, saving, self.is_valid(), self.is_dirty())
    }

    pub fn reset(&mut self) {
        self.values = self.initial.clone();
        self.submitted = false;
    }

    /// Accept the current values as the new baseline after a save
    pub fn commit(&mut self) {
        self.initial = self.values.clone();
    }

    pub fn record(&self) -> &Record {
        &self.values
    }

    /// Request body with schema fields only
    pub fn to_json(&self) -> Value {
        self.values.to_json(self.schema)
    }
}

fn default_to_value(default: DefaultValue, now: DateTime<Utc>) -> FieldValue {
    match default {
        DefaultValue::Text(s) | DefaultValue::Option(s) => FieldValue::text(s),
        DefaultValue::Number(n) => FieldValue::Number(n),
        DefaultValue::Bool(b) => FieldValue::Bool(b),
        DefaultValue::Options(items) => {
            FieldValue::List(items.iter().map(|s| s.to_string()).collect())
        }
        DefaultValue::Today => FieldValue::Date(now.date_naive()),
        DefaultValue::Now => FieldValue::DateTime(now),
    }
}

/// Coerce input element text by field type. Unparseable numbers and dates
/// are kept as text so validation can report them.
pub fn parse_input(field: &FieldDef, raw: &str) -> FieldValue {
    let trimmed = raw.trim();
    let ty = field.field_type;
    if trimmed.is_empty() && ty != FieldType::Switch {
        return FieldValue::Null;
    }
    match ty {
        FieldType::Switch => FieldValue::Bool(matches!(trimmed, "true" | "on" | "1")),
        _ if ty.is_numeric() => trimmed
            .parse::<f64>()
            .map(FieldValue::Number)
            .unwrap_or_else(|_| FieldValue::text(raw)),
        FieldType::Date => NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            .map(FieldValue::Date)
            .unwrap_or_else(|_| FieldValue::text(raw)),
        FieldType::DateTime => NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M")
            .map(|dt| FieldValue::DateTime(dt.and_utc()))
            .unwrap_or_else(|_| FieldValue::text(raw)),
        _ if ty.is_list() => FieldValue::List(
            trimmed
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        ),
        FieldType::Json => serde_json::from_str(trimmed)
            .map(FieldValue::Json)
            .unwrap_or_else(|_| FieldValue::text(raw)),
        _ => FieldValue::text(raw),
    }
}

/// Validation rules plus type checks for values that failed to parse
pub fn validate_field(field: &FieldDef, value: &FieldValue) -> Result<(), String> {
    if let FieldValue::Text(_) = value {
        let ty = field.field_type;
        if ty.is_numeric() {
            return Err(format!("{} must be a number", field.label));
        }
        if ty.is_temporal() {
            return Err(format!("{} must be a valid date", field.label));
        }
        if ty == FieldType::Json {
            return Err(format!("{} must be valid JSON", field.label));
        }
    }
    if let FieldValue::Text(s) = value {
        if field.field_type == FieldType::Select && field.option(s).is_none() {
            return Err(format!("{} has an unknown option", field.label));
        }
    }
    field.validation.validate(value, field.label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_task::schema::TASK_SCHEMA;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 9, 30, 0).unwrap()
    }

    fn valid_task() -> Record {
        Record::new("t1")
            .with("title", FieldValue::text("Book crew"))
            .with("status", FieldValue::text("todo"))
            .with("priority", FieldValue::text("medium"))
    }

    #[test]
    fn gating_truth_table() {
        // edit + clean + valid + not saving
        assert!(is_submit_disabled(FormMode::Edit, false, true, false));
        assert!(!is_submit_disabled(FormMode::Create, false, true, false));
        assert!(!is_submit_disabled(FormMode::Edit, false, true, true));
        assert!(is_submit_disabled(FormMode::Create, true, true, true));
        assert!(is_submit_disabled(FormMode::Create, false, false, true));
    }

    #[test]
    fn header_copy() {
        assert_eq!(FormMode::Create.title(&TASK_SCHEMA), "New Task");
        assert_eq!(FormMode::Edit.title(&TASK_SCHEMA), "Edit Task");
    }

    #[test]
    fn create_seeds_defaults() {
        let form = FormState::create(&TASK_SCHEMA, now());
        assert_eq!(form.value("status"), FieldValue::text("todo"));
        assert!(!form.is_dirty());
    }

    #[test]
    fn edit_form_tracks_dirty_state() {
        let mut form = FormState::edit(&TASK_SCHEMA, valid_task());
        assert!(form.is_valid());
        assert!(form.is_submit_disabled(false));

        form.set_input("title", "Book lighting crew");
        assert!(form.is_dirty());
        assert!(!form.is_submit_disabled(false));

        form.set_input("title", "Book crew");
        assert!(!form.is_dirty());
    }

    #[test]
    fn clearing_an_unset_field_is_not_dirty() {
        let mut form = FormState::edit(&TASK_SCHEMA, valid_task());
        form.set_input("description", "   ");
        assert!(!form.is_dirty());
    }

    #[test]
    fn required_and_numeric_errors() {
        let mut form = FormState::edit(&TASK_SCHEMA, valid_task());
        form.set_input("title", "");
        form.set_input("estimate_hours", "abc");
        let errors = form.errors();
        assert_eq!(errors.get("title").map(String::as_str), Some("Title is required"));
        assert!(errors.contains_key("estimate_hours"));
        assert!(form.is_submit_disabled(false));
    }

    #[test]
    fn errors_hidden_until_change_or_submit() {
        let mut form = FormState::create(&TASK_SCHEMA, now());
        assert!(form.visible_error("title").is_none());
        form.mark_submitted();
        assert!(form.visible_error("title").is_some());
    }

    #[test]
    fn input_round_trip() {
        let mut form = FormState::create(&TASK_SCHEMA, now());
        form.set_input("due_date", "2024-07-04");
        assert_eq!(form.input_value("due_date"), "2024-07-04");
        form.set_input("estimate_hours", "12.5");
        assert_eq!(form.value("estimate_hours"), FieldValue::Number(12.5));
    }
}
