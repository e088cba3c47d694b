use chrono::{NaiveDate, Utc};
use contracts::shared::layout::list::matches_fragment;
use contracts::shared::schema::{EntityRecord, EntitySchema, Record, Subpage};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::entity::model;
use crate::layout::global_context::{AppGlobalContext, NoticeKind};
use crate::shared::layouts::CellEdit;

/// Query parameters naming a schema field become equality filters,
/// e.g. `?company_id=42` coming from a related-list link
pub fn route_filters(schema: &EntitySchema, query: &[(String, String)]) -> Vec<(String, String)> {
    query
        .iter()
        .filter(|(key, value)| !value.is_empty() && schema.has_field(key))
        .cloned()
        .collect()
}

fn matches_filters(record: &Record, filters: &[(String, String)]) -> bool {
    filters.iter().all(|(key, value)| {
        record
            .field_value(key)
            .is_some_and(|v| v.to_plain_string() == *value)
    })
}

/// Records shown for a subpage and route filters
pub fn visible_records(
    records: &[Record],
    subpage: Option<&Subpage>,
    filters: &[(String, String)],
    today: NaiveDate,
) -> Vec<Record> {
    records
        .iter()
        .filter(|r| subpage.is_none_or(|s| matches_fragment(*r, &s.filter, today)))
        .filter(|r| matches_filters(r, filters))
        .cloned()
        .collect()
}

#[derive(Clone, Copy)]
pub struct EntityListViewModel {
    pub schema: &'static EntitySchema,
    pub items: RwSignal<Vec<Record>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub subpage: Option<&'static Subpage>,
    filters: StoredValue<Vec<(String, String)>>,
}

impl EntityListViewModel {
    pub fn new(
        schema: &'static EntitySchema,
        subpage: Option<&'static Subpage>,
        filters: Vec<(String, String)>,
    ) -> Self {
        Self {
            schema,
            items: RwSignal::new(Vec::new()),
            loading: RwSignal::new(true),
            error: RwSignal::new(None),
            subpage,
            filters: StoredValue::new(filters),
        }
    }

    pub fn filters(&self) -> Vec<(String, String)> {
        self.filters.get_value()
    }

    /// Rows after subpage and route filters
    pub fn visible(&self) -> Signal<Vec<Record>> {
        let vm = *self;
        Signal::derive(move || {
            let filters = vm.filters.get_value();
            let today = Utc::now().date_naive();
            vm.items.with(|items| visible_records(items, vm.subpage, &filters, today))
        })
    }

    /// Fetch the list; the skeleton shows only on the first load
    pub async fn load(self) -> Result<(), String> {
        let filters = self.filters.get_value();
        let result = if filters.is_empty() {
            model::fetch_list(self.schema).await
        } else {
            model::fetch_filtered(self.schema, &filters).await
        };
        match result {
            Ok(items) => {
                self.items.try_set(items);
                self.error.try_set(None);
                self.loading.try_set(false);
                Ok(())
            }
            Err(e) => {
                log::error!("loading {} failed: {}", self.schema.slug(), e);
                self.error.try_set(Some(e.clone()));
                self.loading.try_set(false);
                Err(e)
            }
        }
    }

    pub fn load_command(self) {
        spawn_local(async move {
            let _ = self.load().await;
        });
    }

    /// Save an inline edit; the row is replaced once the server confirms
    pub fn cell_edit_command(self, edit: CellEdit, app: AppGlobalContext) {
        let Some(mut record) = self
            .items
            .with_untracked(|items| items.iter().find(|r| r.id == edit.row_id).cloned())
        else {
            return;
        };
        record.set(edit.field, edit.value);
        let schema = self.schema;
        spawn_local(async move {
            match model::update(schema, &record).await {
                Ok(saved) => {
                    self.items.try_update(|items| {
                        if let Some(slot) = items.iter_mut().find(|r| r.id == saved.id) {
                            *slot = saved;
                        }
                    });
                }
                Err(e) => app.notify(NoticeKind::Error, format!("Could not save: {}", e)),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_task::schema::TASK_SCHEMA;
    use contracts::shared::schema::FieldValue;

    fn task(id: &str, status: &str, production: &str) -> Record {
        Record::new(id)
            .with("status", FieldValue::text(status))
            .with("production_id", FieldValue::text(production))
    }

    #[test]
    fn only_schema_fields_become_filters() {
        let query = vec![
            ("production_id".to_string(), "p1".to_string()),
            ("view".to_string(), "kanban".to_string()),
            ("assignee_id".to_string(), String::new()),
        ];
        assert_eq!(
            route_filters(&TASK_SCHEMA, &query),
            vec![("production_id".to_string(), "p1".to_string())]
        );
    }

    #[test]
    fn subpage_and_filters_combine() {
        let records = vec![task("1", "done", "p1"), task("2", "todo", "p1"), task("3", "done", "p2")];
        let today = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let completed = TASK_SCHEMA.subpage("completed");
        let filters = vec![("production_id".to_string(), "p1".to_string())];

        let ids = |rows: Vec<Record>| rows.into_iter().map(|r| r.id).collect::<Vec<_>>();
        assert_eq!(ids(visible_records(&records, completed, &filters, today)), vec!["1"]);
        assert_eq!(ids(visible_records(&records, completed, &[], today)), vec!["1", "3"]);
        assert_eq!(ids(visible_records(&records, None, &[], today)).len(), 3);
    }
}
