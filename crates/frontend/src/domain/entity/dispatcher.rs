//! Executes schema actions on behalf of an entity page.
//!
//! `ActionDispatcher` is synchronous; API handlers park their request in
//! `pending` and `run` awaits it, so the layout's busy flag stays raised
//! until the server answers.

use std::cell::RefCell;
use std::future::Future;
use std::pin::Pin;

use contracts::shared::error_message::get_error_message;
use contracts::shared::schema::{
    ActionDispatcher, ActionError, ActionPayload, EntitySchema, HttpMethod, Record,
};
use leptos::prelude::*;
use serde_json::{json, Value};

use crate::layout::global_context::{use_app_context, AppGlobalContext, NoticeKind};
use crate::layout::modal_host;
use crate::layout::modal_service::{use_modal_service, ModalRequest, ModalService};
use crate::shared::api_utils::send_empty;
use crate::shared::async_callback::AsyncCallback;
use crate::shared::clipboard::{absolute_url, copy_to_clipboard};
use crate::shared::export::export_records;
use crate::shared::layouts::{ActionArgs, OnAction};

/// Named client-side functions schemas may reference
pub const EXPORT_CSV: &str = "export_csv";
pub const DUPLICATE: &str = "duplicate";
pub const PRINT: &str = "print";
pub const COPY_LINK: &str = "copy_link";

type PendingCall = Pin<Box<dyn Future<Output = Result<(), String>>>>;

/// What a page lends the dispatcher
#[derive(Clone, Copy)]
pub struct PageActions {
    pub schema: &'static EntitySchema,
    pub navigate: Callback<String>,
    /// Records the page holds; exports read from here
    pub records: Signal<Vec<Record>>,
    /// Runs after an API action succeeds
    pub after_api: Option<Callback<HttpMethod>>,
}

pub fn record_path(schema: &EntitySchema, id: &str) -> String {
    format!("/e/{}/{}", schema.slug(), id)
}

/// Create form pre-filled from the row
pub fn duplicate_path(
    schema: &EntitySchema,
    action_id: &'static str,
    payload: &ActionPayload,
) -> Result<String, ActionError> {
    let id = payload.row_id().ok_or(ActionError::MissingRecord(action_id))?;
    Ok(format!("/e/{}/new?from={}", schema.slug(), urlencoding::encode(id)))
}

/// Request body of an API action
pub fn api_body(schema: &EntitySchema, payload: &ActionPayload) -> Option<Value> {
    match payload {
        ActionPayload::Global => None,
        ActionPayload::Row(record) => Some(record.to_json(schema)),
        ActionPayload::Bulk(ids) => Some(json!({ "ids": ids })),
    }
}

/// Selected rows for bulk exports, everything otherwise
pub fn records_for_export(records: Vec<Record>, payload: &ActionPayload) -> Vec<Record> {
    match payload {
        ActionPayload::Global => records,
        other => {
            let ids = other.ids();
            records.into_iter().filter(|r| ids.contains(&r.id)).collect()
        }
    }
}

pub struct PageDispatcher {
    page: PageActions,
    app: AppGlobalContext,
    modals: ModalService,
    pending: RefCell<Option<(HttpMethod, PendingCall)>>,
}

impl PageDispatcher {
    pub fn new(page: PageActions, app: AppGlobalContext, modals: ModalService) -> Self {
        Self {
            page,
            app,
            modals,
            pending: RefCell::new(None),
        }
    }

    /// Resolve `action_id` on the page's schema and execute it
    pub async fn run(&self, action_id: &str, payload: ActionPayload) -> Result<(), String> {
        let schema = self.page.schema;
        let Some(action) = schema.action(action_id) else {
            let err = ActionError::UnknownAction(action_id.to_string()).to_string();
            self.app.notify(NoticeKind::Error, err.clone());
            return Err(err);
        };
        log::debug!("action {}.{} ({})", schema.slug(), action.id, action.handler.kind());

        if let Err(e) = self.dispatch(action, &payload) {
            self.app.notify(NoticeKind::Error, e.to_string());
            return Err(e.to_string());
        }

        let pending = self.pending.borrow_mut().take();
        let Some((method, call)) = pending else {
            return Ok(());
        };
        match call.await {
            Ok(()) => {
                self.app.notify(NoticeKind::Success, format!("{}: done", action.label));
                if let Some(after) = self.page.after_api {
                    after.run(method);
                }
                Ok(())
            }
            Err(e) => {
                self.app.notify(NoticeKind::Error, get_error_message(&e));
                Err(e)
            }
        }
    }
}

impl ActionDispatcher for PageDispatcher {
    fn navigate(&self, path: String) -> Result<(), ActionError> {
        self.page.navigate.run(path);
        Ok(())
    }

    fn call_function(&self, name: &'static str, payload: &ActionPayload) -> Result<(), ActionError> {
        let schema = self.page.schema;
        match name {
            EXPORT_CSV => {
                let records = records_for_export(self.page.records.get_untracked(), payload);
                let filename = format!("{}.csv", schema.slug());
                export_records(schema, &records, &filename).map_err(ActionError::Failed)?;
                self.app
                    .notify(NoticeKind::Success, format!("Exported {} rows", records.len()));
                Ok(())
            }
            DUPLICATE => self.navigate(duplicate_path(schema, name, payload)?),
            PRINT => web_sys::window()
                .ok_or_else(|| ActionError::Failed("No window object".to_string()))?
                .print()
                .map_err(|e| ActionError::Failed(format!("{:?}", e))),
            COPY_LINK => {
                let id = payload.row_id().ok_or(ActionError::MissingRecord(name))?;
                let app = self.app;
                copy_to_clipboard(&absolute_url(&record_path(schema, id)), move |result| {
                    match result {
                        Ok(()) => app.notify(NoticeKind::Info, "Link copied"),
                        Err(e) => app.notify(NoticeKind::Error, e),
                    }
                });
                Ok(())
            }
            other => Err(ActionError::UnknownFunction(other.to_string())),
        }
    }

    fn call_api(
        &self,
        method: HttpMethod,
        endpoint: String,
        payload: &ActionPayload,
    ) -> Result<(), ActionError> {
        let body = api_body(self.page.schema, payload);
        let call: PendingCall =
            Box::pin(async move { send_empty(method.as_str(), &endpoint, body.as_ref()).await });
        *self.pending.borrow_mut() = Some((method, call));
        Ok(())
    }

    fn open_modal(&self, component: &'static str, payload: &ActionPayload) -> Result<(), ActionError> {
        if !modal_host::is_registered(component) {
            return Err(ActionError::Failed(format!("unknown modal '{}'", component)));
        }
        self.modals.open(ModalRequest {
            component,
            schema: self.page.schema,
            payload: payload.clone(),
        });
        Ok(())
    }

    fn open_external(&self, url: String) -> Result<(), ActionError> {
        web_sys::window()
            .ok_or_else(|| ActionError::Failed("No window object".to_string()))?
            .open_with_url_and_target(&url, "_blank")
            .map(|_| ())
            .map_err(|e| ActionError::Failed(format!("{:?}", e)))
    }
}

/// `on_action` handler for the entity layouts of one page
pub fn use_action_handler(page: PageActions) -> OnAction {
    let app = use_app_context();
    let modals = use_modal_service();
    AsyncCallback::new(move |(action_id, payload): ActionArgs| async move {
        PageDispatcher::new(page, app, modals).run(action_id, payload).await
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_task::schema::TASK_SCHEMA;
    use contracts::shared::schema::FieldValue;

    #[test]
    fn duplicate_needs_a_row() {
        let row = ActionPayload::Row(Record::new("t 1"));
        assert_eq!(
            duplicate_path(&TASK_SCHEMA, DUPLICATE, &row).unwrap(),
            "/e/tasks/new?from=t%201"
        );
        assert_eq!(
            duplicate_path(&TASK_SCHEMA, DUPLICATE, &ActionPayload::Global),
            Err(ActionError::MissingRecord(DUPLICATE))
        );
    }

    #[test]
    fn api_body_follows_payload() {
        assert_eq!(api_body(&TASK_SCHEMA, &ActionPayload::Global), None);
        let bulk = ActionPayload::Bulk(vec!["1".to_string(), "2".to_string()]);
        assert_eq!(api_body(&TASK_SCHEMA, &bulk), Some(json!({ "ids": ["1", "2"] })));
        let row = Record::new("7").with("title", FieldValue::text("Rig lights"));
        let body = api_body(&TASK_SCHEMA, &ActionPayload::Row(row)).unwrap();
        assert_eq!(body["id"], json!("7"));
        assert_eq!(body["title"], json!("Rig lights"));
    }

    #[test]
    fn bulk_export_keeps_selected_rows() {
        let records = vec![Record::new("1"), Record::new("2"), Record::new("3")];
        let bulk = ActionPayload::Bulk(vec!["3".to_string(), "1".to_string()]);
        let ids: Vec<String> = records_for_export(records.clone(), &bulk)
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec!["1", "3"]);
        assert_eq!(records_for_export(records, &ActionPayload::Global).len(), 3);
    }
}
