use contracts::shared::schema::{EntitySchema, Record};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::entity::model;

/// A 404 reply means the record is gone, which the layout shows as
/// "not found" rather than as a load error
pub fn is_not_found(error: &str) -> bool {
    error.starts_with("HTTP 404")
}

#[derive(Clone, Copy)]
pub struct EntityDetailsViewModel {
    pub schema: &'static EntitySchema,
    pub record: RwSignal<Option<Record>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    id: StoredValue<String>,
}

impl EntityDetailsViewModel {
    pub fn new(schema: &'static EntitySchema, id: String) -> Self {
        Self {
            schema,
            record: RwSignal::new(None),
            loading: RwSignal::new(true),
            error: RwSignal::new(None),
            id: StoredValue::new(id),
        }
    }

    pub fn id(&self) -> String {
        self.id.get_value()
    }

    pub async fn load(self) -> Result<(), String> {
        let id = self.id.get_value();
        let result = model::fetch_by_id(self.schema, &id).await;
        self.loading.try_set(false);
        match result {
            Ok(record) => {
                self.record.try_set(Some(record));
                self.error.try_set(None);
                Ok(())
            }
            Err(e) if is_not_found(&e) => {
                self.record.try_set(None);
                self.error.try_set(None);
                Ok(())
            }
            Err(e) => {
                log::error!("loading {}/{} failed: {}", self.schema.slug(), id, e);
                self.error.try_set(Some(e.clone()));
                Err(e)
            }
        }
    }

    pub fn load_command(self) {
        spawn_local(async move {
            let _ = self.load().await;
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_404_counts_as_missing() {
        assert!(is_not_found("HTTP 404"));
        assert!(is_not_found("HTTP 404: no such task"));
        assert!(!is_not_found("HTTP 500"));
        assert!(!is_not_found("network error"));
    }
}
