//! Entity detail page

mod view_model;

pub use view_model::EntityDetailsViewModel;

use contracts::shared::schema::{EntitySchema, HttpMethod, Record};
use leptos::prelude::*;

use crate::domain::entity::dispatcher::{use_action_handler, PageActions};
use crate::routes::use_go;
use crate::shared::async_callback::AsyncCallback;
use crate::shared::layouts::DetailLayout;

#[component]
pub fn EntityDetailsPage(
    schema: &'static EntitySchema,
    id: String,
    /// Tab from `?tab=`
    #[prop(optional_no_strip)]
    tab: Option<String>,
) -> impl IntoView {
    let vm = EntityDetailsViewModel::new(schema, id);
    vm.load_command();

    let go = use_go();
    let list_path = format!("/e/{}", schema.slug());
    let back_path = list_path.clone();

    let on_action = use_action_handler(PageActions {
        schema,
        navigate: go,
        records: Signal::derive(move || vm.record.get().into_iter().collect::<Vec<Record>>()),
        after_api: Some(Callback::new(move |method: HttpMethod| match method {
            HttpMethod::Delete => go.run(list_path.clone()),
            _ => vm.load_command(),
        })),
    });

    view! {
        <DetailLayout<Record>
            schema=schema
            record=vm.record
            loading=vm.loading
            error=Signal::derive(move || vm.error.get())
            initial_tab=tab
            on_back=Callback::new(move |_| go.run(back_path.clone()))
            on_edit=Callback::new(move |_| go.run(format!("/e/{}/{}/edit", schema.slug(), vm.id())))
            on_refresh=AsyncCallback::new(move |_| vm.load())
            on_action=on_action
        />
    }
}
