//! Entity list page

mod view_model;

pub use view_model::EntityListViewModel;

use std::sync::Arc;

use contracts::shared::schema::{EntitySchema, HttpMethod, Record, ViewType};
use leptos::prelude::*;
use leptos_router::components::A;

use crate::domain::entity::dispatcher::{record_path, use_action_handler, PageActions};
use crate::layout::global_context::use_app_context;
use crate::routes::use_go;
use crate::shared::async_callback::AsyncCallback;
use crate::shared::layouts::{CellEdit, ListLayout};

#[component]
pub fn EntityListPage(
    schema: &'static EntitySchema,
    /// Subpage id from `?subpage=`
    #[prop(optional_no_strip)]
    subpage: Option<String>,
    /// Raw query pairs; schema fields among them filter the list
    #[prop(optional)]
    query: Vec<(String, String)>,
    #[prop(optional_no_strip)]
    initial_view: Option<ViewType>,
) -> impl IntoView {
    let subpage = subpage.and_then(|id| schema.subpage(&id));
    let filters = view_model::route_filters(schema, &query);
    let vm = EntityListViewModel::new(schema, subpage, filters);
    vm.load_command();

    let app = use_app_context();
    let go = use_go();

    let records = vm.visible();
    let on_action = use_action_handler(PageActions {
        schema,
        navigate: go,
        records,
        after_api: Some(Callback::new(move |_: HttpMethod| vm.load_command())),
    });

    let toolbar_extra: ChildrenFn = Arc::new(move || {
        let active = vm.subpage.map(|s| s.id);
        let base = format!("/e/{}", schema.slug());
        let chips = (!schema.subpages.is_empty()).then(|| {
            let all = base.clone();
            view! {
                <div class="subpage-tabs" role="tablist">
                    <A href=all attr:class=if active.is_none() { "chip chip--active" } else { "chip" }>
                        "All"
                    </A>
                    {schema
                        .subpages
                        .iter()
                        .map(|s| {
                            let class = if active == Some(s.id) { "chip chip--active" } else { "chip" };
                            view! {
                                <A href=format!("{}?subpage={}", base, s.id) attr:class=class>
                                    {s.label}
                                </A>
                            }
                        })
                        .collect_view()}
                </div>
            }
        });
        let filtered = (!vm.filters().is_empty()).then(|| {
            view! {
                <div class="list-filters">
                    <span>"Filtered by related record"</span>
                    <A href=base.clone() attr:class="chip">"Show all"</A>
                </div>
            }
        });
        let import = schema.permissions.create.then(|| {
            view! {
                <A href=format!("{}/import", base) attr:class="button button--ghost button--sm">
                    "Import"
                </A>
            }
        });
        view! {
            {chips}
            {filtered}
            {import}
        }
        .into_any()
    });

    view! {
        <ListLayout<Record>
            schema=schema
            data=records
            initial_view=initial_view
            loading=vm.loading
            error=Signal::derive(move || vm.error.get())
            on_refresh=AsyncCallback::new(move |_| vm.load())
            on_row_click=Callback::new(move |row: Record| go.run(record_path(schema, &row.id)))
            on_action=on_action
            on_cell_edit=Callback::new(move |edit: CellEdit| vm.cell_edit_command(edit, app))
            on_create=Callback::new(move |_| go.run(format!("/e/{}/new", schema.slug())))
            toolbar_extra=toolbar_extra
        />
    }
}
