use contracts::shared::layout::form::validate_field;
use contracts::shared::schema::{EntityRecord, EntitySchema, FieldValue, Record};
use leptos::prelude::*;
use serde_json::{json, Value};

use crate::domain::entity::model;

/// One parsed row of pasted JSON
#[derive(Debug, Clone, PartialEq)]
pub struct ImportRow {
    pub record: Record,
    /// The source object carried its own id
    pub has_id: bool,
    pub problems: Vec<String>,
}

/// Parse an object or an array of objects. Rows without an id get a
/// placeholder that is dropped again when the row is created.
pub fn parse_import(schema: &EntitySchema, text: &str) -> Result<Vec<ImportRow>, String> {
    let raw: Value =
        serde_json::from_str(text.trim()).map_err(|e| format!("Not valid JSON: {}", e))?;
    let items = match raw {
        Value::Array(items) => items,
        obj @ Value::Object(_) => vec![obj],
        _ => return Err("Expected an object or an array of objects".to_string()),
    };
    if items.is_empty() {
        return Err("Nothing to import".to_string());
    }

    items
        .into_iter()
        .enumerate()
        .map(|(index, mut item)| {
            let has_id = match item.get("id") {
                Some(Value::String(s)) => !s.is_empty(),
                Some(Value::Number(_)) => true,
                _ => false,
            };
            if let (false, Some(obj)) = (has_id, item.as_object_mut()) {
                obj.insert("id".to_string(), json!(format!("row-{}", index + 1)));
            }
            let record = Record::from_json(schema, &item)
                .map_err(|e| format!("Row {}: {}", index + 1, e))?;
            let problems = row_problems(schema, &record);
            Ok(ImportRow { record, has_id, problems })
        })
        .collect()
}

fn row_problems(schema: &EntitySchema, record: &Record) -> Vec<String> {
    schema
        .form_fields()
        .into_iter()
        .filter_map(|field| {
            let value = record.field_value(field.key).unwrap_or(FieldValue::Null);
            validate_field(field, &value).err()
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImportSummary {
    pub created: usize,
    pub updated: usize,
    pub failed: usize,
}

impl ImportSummary {
    pub fn message(&self) -> String {
        let mut parts = vec![format!("{} created", self.created)];
        if self.updated > 0 {
            parts.push(format!("{} updated", self.updated));
        }
        if self.failed > 0 {
            parts.push(format!("{} failed", self.failed));
        }
        parts.join(", ")
    }
}

pub const STEP_PASTE: usize = 0;
pub const STEP_REVIEW: usize = 1;
pub const STEP_EXISTING: usize = 2;

#[derive(Clone, Copy)]
pub struct ImportViewModel {
    pub schema: &'static EntitySchema,
    pub step: RwSignal<usize>,
    pub text: RwSignal<String>,
    /// Rows with their own id are updated instead of created
    pub update_existing: RwSignal<bool>,
    pub submitting: RwSignal<bool>,
    pub parsed: Memo<Result<Vec<ImportRow>, String>>,
}

impl ImportViewModel {
    pub fn new(schema: &'static EntitySchema) -> Self {
        let text = RwSignal::new(String::new());
        Self {
            schema,
            step: RwSignal::new(STEP_PASTE),
            text,
            update_existing: RwSignal::new(false),
            submitting: RwSignal::new(false),
            parsed: Memo::new(move |_| text.with(|t| parse_import(schema, t))),
        }
    }

    pub fn is_step_valid(&self) -> bool {
        let ok = self.parsed.with(|p| p.is_ok());
        match self.step.get() {
            STEP_PASTE => ok,
            STEP_REVIEW => self
                .parsed
                .with(|p| p.as_ref().is_ok_and(|rows| rows.iter().all(|r| r.problems.is_empty()))),
            _ => ok,
        }
    }

    /// Send every row; failures are counted, not fatal
    pub async fn import(self) -> ImportSummary {
        let rows = self.parsed.get_untracked().unwrap_or_default();
        let update_existing = self.update_existing.get_untracked();
        let mut summary = ImportSummary::default();
        for row in rows {
            let updating = row.has_id && update_existing;
            let result = if updating {
                model::update(self.schema, &row.record).await.map(|_| ())
            } else {
                model::create(self.schema, &row.record).await.map(|_| ())
            };
            match result {
                Ok(()) if updating => summary.updated += 1,
                Ok(()) => summary.created += 1,
                Err(e) => {
                    log::error!("import into {} failed: {}", self.schema.slug(), e);
                    summary.failed += 1;
                }
            }
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_task::schema::TASK_SCHEMA;

    #[test]
    fn rows_without_ids_get_placeholders() {
        let rows = parse_import(
            &TASK_SCHEMA,
            r#"[{"title": "Hang banners", "status": "todo", "priority": "low"}, {"id": "t-9", "title": "Strike"}]"#,
        )
        .unwrap();
        assert_eq!(rows.len(), 2);
        assert!(!rows[0].has_id);
        assert_eq!(rows[0].record.id, "row-1");
        assert!(rows[1].has_id);
        assert_eq!(rows[1].record.id, "t-9");
    }

    #[test]
    fn bad_input_is_reported() {
        assert!(parse_import(&TASK_SCHEMA, "not json").unwrap_err().starts_with("Not valid JSON"));
        assert_eq!(parse_import(&TASK_SCHEMA, "[]").unwrap_err(), "Nothing to import");
        assert!(parse_import(&TASK_SCHEMA, "42").is_err());
    }

    #[test]
    fn missing_required_values_are_problems() {
        let rows = parse_import(&TASK_SCHEMA, r#"{"status": "todo"}"#).unwrap();
        assert!(!rows[0].problems.is_empty());
    }

    #[test]
    fn summary_omits_zero_counts() {
        let s = ImportSummary { created: 3, updated: 0, failed: 1 };
        assert_eq!(s.message(), "3 created, 1 failed");
    }
}
