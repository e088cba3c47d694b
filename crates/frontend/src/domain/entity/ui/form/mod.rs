//! Create and edit pages for an entity

mod view_model;

pub use view_model::EntityFormViewModel;

use contracts::shared::layout::form::FormMode;
use contracts::shared::schema::{EntitySchema, Record};
use leptos::prelude::*;

use crate::domain::entity::dispatcher::record_path;
use crate::routes::use_go;
use crate::shared::async_callback::AsyncCallback;
use crate::shared::components::Skeleton;
use crate::shared::layouts::{ErrorLayout, FormLayout};

#[component]
pub fn EntityFormPage(
    schema: &'static EntitySchema,
    mode: FormMode,
    /// Record to edit
    #[prop(optional_no_strip)]
    id: Option<String>,
    /// Record to copy into a new one (`?from=`)
    #[prop(optional_no_strip)]
    from: Option<String>,
) -> impl IntoView {
    let vm = EntityFormViewModel::new(schema);
    let reload = {
        let id = id.clone();
        move || match (mode, id.clone(), from.clone()) {
            (FormMode::Edit, Some(id), _) => vm.load_command(id),
            (FormMode::Create, _, Some(source)) => vm.load_prefill_command(source),
            _ => {}
        }
    };
    reload();

    let go = use_go();
    let cancel_path = match &id {
        Some(id) => record_path(schema, id),
        None => format!("/e/{}", schema.slug()),
    };

    let on_submit = AsyncCallback::new(move |values: Record| async move {
        let saved = vm.save(mode, values).await?;
        go.run(record_path(schema, &saved.id));
        Ok(())
    });
    let on_cancel = Callback::new(move |_| go.run(cancel_path.clone()));
    let retry = Callback::new(move |_| reload());

    view! {
        {move || match vm.error.get() {
            Some(e) => view! { <ErrorLayout error=e on_retry=Some(retry) /> }.into_any(),
            None => view! {
                <Show when=move || !vm.loading.get() fallback=|| view! { <Skeleton rows=8 /> }>
                    <FormLayout<Record>
                        schema=schema
                        mode=mode
                        record=vm.record
                        prefill=vm.prefill.get_untracked()
                        on_submit=on_submit
                        on_cancel=on_cancel
                    />
                </Show>
            }
            .into_any(),
        }}
    }
}
