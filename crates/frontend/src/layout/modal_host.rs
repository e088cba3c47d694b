//! Renders the modal currently held by `ModalService`

use contracts::shared::schema::{ActionPayload, EntityRecord};
use leptos::prelude::*;

use crate::layout::modal_service::{use_modal_service, ModalRequest};
use crate::shared::layouts::FieldRows;
use crate::shared::modal::Modal;

/// Modal components action handlers may open
pub const QUICK_VIEW: &str = "quick_view";

pub fn is_registered(component: &str) -> bool {
    component == QUICK_VIEW
}

#[component]
pub fn ModalHost() -> impl IntoView {
    let modals = use_modal_service();
    let close = Callback::new(move |_| modals.close());

    move || modals.current().map(|request| render_modal(request, close))
}

fn render_modal(request: ModalRequest, on_close: Callback<()>) -> AnyView {
    let ModalRequest { component, schema, payload } = request;
    match (component, payload) {
        (QUICK_VIEW, ActionPayload::Row(record)) => {
            let title = schema.title_of(&record as &dyn EntityRecord);
            view! {
                <Modal title=title on_close=on_close>
                    <FieldRows fields=schema.detail_fields() item=record />
                </Modal>
            }
            .into_any()
        }
        (name, _) => {
            log::warn!("modal '{}' has nothing to show", name);
            ().into_any()
        }
    }
}
