use contracts::shared::layout::form::FormMode;
use contracts::shared::schema::{EntitySchema, Record};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::entity::model;

/// Values of `source` as the starting point of a new record
pub fn duplicate_prefill(schema: &EntitySchema, source: &Record) -> Record {
    let mut prefill = Record::new("");
    for field in schema.form_fields() {
        if let Some(value) = source.get(field.key) {
            prefill.set(field.key, value.clone());
        }
    }
    prefill
}

#[derive(Clone, Copy)]
pub struct EntityFormViewModel {
    pub schema: &'static EntitySchema,
    /// Record being edited
    pub record: RwSignal<Option<Record>>,
    /// Values a new record starts from
    pub prefill: RwSignal<Option<Record>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl EntityFormViewModel {
    pub fn new(schema: &'static EntitySchema) -> Self {
        Self {
            schema,
            record: RwSignal::new(None),
            prefill: RwSignal::new(None),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    /// Edit mode: fetch the record to edit
    pub fn load_command(self, id: String) {
        self.fetch(id, false);
    }

    /// Create mode: copy the values of an existing record
    pub fn load_prefill_command(self, from: String) {
        self.fetch(from, true);
    }

    fn fetch(self, id: String, as_prefill: bool) {
        self.loading.set(true);
        self.error.set(None);
        let schema = self.schema;
        spawn_local(async move {
            match model::fetch_by_id(schema, &id).await {
                Ok(record) if as_prefill => {
                    self.prefill.try_set(Some(duplicate_prefill(schema, &record)));
                }
                Ok(record) => {
                    self.record.try_set(Some(record));
                }
                Err(e) => {
                    log::error!("loading {}/{} failed: {}", schema.slug(), id, e);
                    self.error.try_set(Some(e));
                }
            }
            self.loading.try_set(false);
        });
    }

    /// Create or update; returns the stored record
    pub async fn save(self, mode: FormMode, values: Record) -> Result<Record, String> {
        let saved = match mode {
            FormMode::Create => model::create(self.schema, &values).await?,
            FormMode::Edit => model::update(self.schema, &values).await?,
        };
        log::info!("saved {}/{}", self.schema.slug(), saved.id);
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_task::schema::TASK_SCHEMA;
    use contracts::shared::schema::FieldValue;

    #[test]
    fn duplicate_drops_the_id() {
        let source = Record::new("42")
            .with("title", FieldValue::text("Load-in"))
            .with("unknown", FieldValue::text("x"));
        let prefill = duplicate_prefill(&TASK_SCHEMA, &source);
        assert!(prefill.id.is_empty());
        assert_eq!(prefill.get("title"), Some(&FieldValue::text("Load-in")));
        assert_eq!(prefill.get("unknown"), None);
    }
}
