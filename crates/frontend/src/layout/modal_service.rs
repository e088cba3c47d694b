use contracts::shared::schema::{ActionPayload, EntitySchema};
use leptos::prelude::*;

/// A modal opened by an action handler
#[derive(Debug, Clone)]
pub struct ModalRequest {
    /// Registered modal component name
    pub component: &'static str,
    pub schema: &'static EntitySchema,
    pub payload: ActionPayload,
}

/// Single modal slot shared by every page; the shell renders it
#[derive(Clone, Copy)]
pub struct ModalService {
    current: RwSignal<Option<ModalRequest>>,
}

impl ModalService {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
        }
    }

    pub fn open(&self, request: ModalRequest) {
        self.current.set(Some(request));
    }

    pub fn close(&self) {
        self.current.set(None);
    }

    pub fn current(&self) -> Option<ModalRequest> {
        self.current.get()
    }
}

impl Default for ModalService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_modal_service() -> ModalService {
    expect_context::<ModalService>()
}
