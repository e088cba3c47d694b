//! Entity actions and their handlers
//!
//! A handler describes what an action does; layouts never interpret it.
//! They only report `(action_id, payload)` and the page resolves the
//! action and hands it to an `ActionDispatcher`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::value::{EntityRecord, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionScope {
    /// Shown per row / on the detail page
    Row,
    /// Applies to the current selection
    Bulk,
    /// Shown in the list header
    Global,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

/// Navigation target: literal path or computed from the record
#[derive(Debug, Clone, Copy)]
pub enum PathSpec {
    Literal(&'static str),
    Computed(fn(&dyn EntityRecord) -> String),
}

#[derive(Debug, Clone, Copy)]
pub enum ActionHandler {
    Navigate(PathSpec),
    /// Named client-side function, resolved by the dispatcher
    Function { name: &'static str },
    /// `{id}` in the endpoint is replaced with the row id
    Api {
        endpoint: &'static str,
        method: HttpMethod,
    },
    Modal { component: &'static str },
    /// `{id}` in the url is replaced with the row id
    External { url: &'static str },
}

impl ActionHandler {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Navigate(_) => "navigate",
            Self::Function { .. } => "function",
            Self::Api { .. } => "api",
            Self::Modal { .. } => "modal",
            Self::External { .. } => "external",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ActionDef {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: Option<&'static str>,
    pub scope: ActionScope,
    pub handler: ActionHandler,
    /// Confirmation prompt shown before dispatch
    pub confirm: Option<&'static str>,
    pub destructive: bool,
}

/// What an action was triggered on
#[derive(Debug, Clone, PartialEq)]
pub enum ActionPayload {
    Global,
    Row(Record),
    Bulk(Vec<String>),
}

impl ActionPayload {
    pub fn row_id(&self) -> Option<&str> {
        match self {
            Self::Row(record) => Some(&record.id),
            _ => None,
        }
    }

    pub fn ids(&self) -> Vec<String> {
        match self {
            Self::Global => Vec::new(),
            Self::Row(record) => vec![record.id.clone()],
            Self::Bulk(ids) => ids.clone(),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ActionError {
    #[error("action '{0}' not found")]
    UnknownAction(String),
    #[error("action '{0}' needs a record")]
    MissingRecord(&'static str),
    #[error("no handler registered for function '{0}'")]
    UnknownFunction(String),
    #[error("{0}")]
    Failed(String),
}

/// Replace `{id}` with the payload's row id
pub fn interpolate_id(
    template: &str,
    action_id: &'static str,
    payload: &ActionPayload,
) -> Result<String, ActionError> {
    if !template.contains("{id}") {
        return Ok(template.to_string());
    }
    let id = payload.row_id().ok_or(ActionError::MissingRecord(action_id))?;
    Ok(template.replace("{id}", id))
}

/// Executes action handlers; `dispatch` matches on the handler tag
pub trait ActionDispatcher {
    fn navigate(&self, path: String) -> Result<(), ActionError>;

    fn call_function(&self, name: &'static str, payload: &ActionPayload) -> Result<(), ActionError>;

    fn call_api(
        &self,
        method: HttpMethod,
        endpoint: String,
        payload: &ActionPayload,
    ) -> Result<(), ActionError>;

    fn open_modal(&self, component: &'static str, payload: &ActionPayload) -> Result<(), ActionError>;

    fn open_external(&self, url: String) -> Result<(), ActionError>;

    fn dispatch(&self, action: &ActionDef, payload: &ActionPayload) -> Result<(), ActionError> {
        match action.handler {
            ActionHandler::Navigate(PathSpec::Literal(path)) => {
                let path = interpolate_id(path, action.id, payload)?;
                self.navigate(path)
            }
            ActionHandler::Navigate(PathSpec::Computed(f)) => match payload {
                ActionPayload::Row(record) => self.navigate(f(record)),
                _ => Err(ActionError::MissingRecord(action.id)),
            },
            ActionHandler::Function { name } => self.call_function(name, payload),
            ActionHandler::Api { endpoint, method } => {
                let endpoint = interpolate_id(endpoint, action.id, payload)?;
                self.call_api(method, endpoint, payload)
            }
            ActionHandler::Modal { component } => self.open_modal(component, payload),
            ActionHandler::External { url } => {
                let url = interpolate_id(url, action.id, payload)?;
                self.open_external(url)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        calls: RefCell<Vec<String>>,
    }

    impl ActionDispatcher for Recorder {
        fn navigate(&self, path: String) -> Result<(), ActionError> {
            self.calls.borrow_mut().push(format!("navigate {path}"));
            Ok(())
        }

        fn call_function(&self, name: &'static str, _: &ActionPayload) -> Result<(), ActionError> {
            self.calls.borrow_mut().push(format!("function {name}"));
            Ok(())
        }

        fn call_api(
            &self,
            method: HttpMethod,
            endpoint: String,
            payload: &ActionPayload,
        ) -> Result<(), ActionError> {
            self.calls.borrow_mut().push(format!(
                "api {} {} {:?}",
                method.as_str(),
                endpoint,
                payload.ids()
            ));
            Ok(())
        }

        fn open_modal(&self, component: &'static str, _: &ActionPayload) -> Result<(), ActionError> {
            self.calls.borrow_mut().push(format!("modal {component}"));
            Ok(())
        }

        fn open_external(&self, url: String) -> Result<(), ActionError> {
            self.calls.borrow_mut().push(format!("external {url}"));
            Ok(())
        }
    }

    fn edit_path(record: &dyn EntityRecord) -> String {
        format!("/e/tasks/{}/edit", record.record_id())
    }

    fn action(id: &'static str, handler: ActionHandler) -> ActionDef {
        ActionDef {
            id,
            label: id,
            icon: None,
            scope: ActionScope::Row,
            handler,
            confirm: None,
            destructive: false,
        }
    }

    #[test]
    fn routes_each_handler_kind() {
        let d = Recorder::default();
        let row = ActionPayload::Row(Record::new("t1"));

        d.dispatch(&action("edit", ActionHandler::Navigate(PathSpec::Computed(edit_path))), &row)
            .unwrap();
        d.dispatch(
            &action(
                "archive",
                ActionHandler::Api {
                    endpoint: "/api/tasks/{id}/archive",
                    method: HttpMethod::Post,
                },
            ),
            &row,
        )
        .unwrap();
        d.dispatch(&action("dup", ActionHandler::Function { name: "duplicate" }), &row)
            .unwrap();
        d.dispatch(&action("assign", ActionHandler::Modal { component: "assign" }), &row)
            .unwrap();
        d.dispatch(
            &action("map", ActionHandler::External { url: "https://maps.example.com/?q={id}" }),
            &row,
        )
        .unwrap();

        assert_eq!(
            d.calls.into_inner(),
            vec![
                "navigate /e/tasks/t1/edit",
                "api POST /api/tasks/t1/archive [\"t1\"]",
                "function duplicate",
                "modal assign",
                "external https://maps.example.com/?q=t1",
            ]
        );
    }

    #[test]
    fn computed_path_needs_a_row() {
        let d = Recorder::default();
        let err = d
            .dispatch(
                &action("edit", ActionHandler::Navigate(PathSpec::Computed(edit_path))),
                &ActionPayload::Bulk(vec!["a".into()]),
            )
            .unwrap_err();
        assert_eq!(err, ActionError::MissingRecord("edit"));
    }

    #[test]
    fn bulk_api_without_placeholder_passes_ids() {
        let d = Recorder::default();
        d.dispatch(
            &action(
                "bulk-delete",
                ActionHandler::Api {
                    endpoint: "/api/tasks/bulk-delete",
                    method: HttpMethod::Post,
                },
            ),
            &ActionPayload::Bulk(vec!["a".into(), "b".into()]),
        )
        .unwrap();
        assert_eq!(
            d.calls.into_inner(),
            vec!["api POST /api/tasks/bulk-delete [\"a\", \"b\"]"]
        );
    }
}
