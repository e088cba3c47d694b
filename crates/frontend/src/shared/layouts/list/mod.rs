//! Schema-driven list: header, stat cards, toolbar, body and pagination.
//!
//! Without a controlled search or view the layout filters, sorts and
//! paginates on its own. With either one supplied the data is rendered as
//! given, and with a `render` prop the body is handed over entirely.

mod board;
mod table;
mod toolbar;

use contracts::shared::layout::list::{
    compute_stats, present, resolve_view, ColumnVisibility, EmptyVariant, ListBody, ListContext,
    ListMode, ListPage, ListQuery, Selection,
};
use contracts::shared::schema::{
    ActionPayload, ActionScope, EntityRecord, EntitySchema, FieldValue, ViewType,
};
use leptos::prelude::*;

use self::board::{CalendarAgenda, CardGrid, KanbanBoard};
use self::table::TableView;
use self::toolbar::ListToolbar;
use super::actions::{ActionBar, OnAction};
use crate::shared::async_callback::AsyncCallback;
use crate::shared::components::{
    EmptyState, PageErrorState, PageHeader, PaginationControls, Skeleton, StatCards, StateAction,
};
use crate::shared::components::ui::Button;

/// An inline cell edit reported to the page
#[derive(Debug, Clone, PartialEq)]
pub struct CellEdit {
    pub row_id: String,
    pub field: &'static str,
    pub value: FieldValue,
}

/// Handlers and state every body view needs
pub(crate) struct RowContext<T: 'static> {
    pub schema: &'static EntitySchema,
    pub selection: RwSignal<Selection>,
    pub query: RwSignal<ListQuery>,
    pub action_busy: RwSignal<bool>,
    pub on_row_click: Option<Callback<T>>,
    pub on_action: Option<OnAction>,
    pub on_cell_edit: Option<Callback<CellEdit>>,
    /// Column headers sort the data (uncontrolled mode only)
    pub sortable: bool,
    /// Rows carry checkboxes (bulk actions exist)
    pub selectable: bool,
}

impl<T: 'static> Clone for RowContext<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for RowContext<T> {}

#[component]
pub fn ListLayout<T>(
    schema: &'static EntitySchema,
    #[prop(into)]
    data: Signal<Vec<T>>,
    /// Row identity; defaults to `EntityRecord::record_id`
    #[prop(optional)]
    get_row_id: Option<fn(&T) -> String>,
    /// Controlled search text
    #[prop(optional)]
    search: Option<Signal<String>>,
    #[prop(optional)]
    on_search_change: Option<Callback<String>>,
    /// Controlled view type
    #[prop(optional)]
    view: Option<Signal<ViewType>>,
    #[prop(optional)]
    on_view_change: Option<Callback<ViewType>>,
    /// Starting view when the view is not controlled
    #[prop(optional_no_strip)]
    initial_view: Option<ViewType>,
    #[prop(optional, into)]
    loading: MaybeProp<bool>,
    #[prop(optional, into)]
    error: MaybeProp<String>,
    #[prop(optional)]
    on_refresh: Option<AsyncCallback>,
    #[prop(optional)]
    on_row_click: Option<Callback<T>>,
    #[prop(optional)]
    on_action: Option<OnAction>,
    #[prop(optional)]
    on_cell_edit: Option<Callback<CellEdit>>,
    #[prop(optional)]
    on_create: Option<Callback<()>>,
    /// Replaces the body; receives the unfiltered data
    #[prop(optional)]
    render: Option<Callback<Vec<T>, AnyView>>,
    /// Rendered between the toolbar and the body
    #[prop(optional)]
    toolbar_extra: Option<ChildrenFn>,
) -> impl IntoView
where
    T: EntityRecord + Clone + Send + Sync + 'static,
{
    let mode = ListMode::resolve(search.is_some(), view.is_some(), render.is_some());
    let can_create = schema.permissions.create && on_create.is_some();
    let has_bulk_actions = !schema.actions_for(ActionScope::Bulk).is_empty();
    let bulk_actions = StoredValue::new(schema.actions_for(ActionScope::Bulk));
    let global_actions = StoredValue::new(schema.actions_for(ActionScope::Global));
    let own_filters = mode == ListMode::Uncontrolled;

    let query = RwSignal::new(ListQuery::for_schema(schema));
    let own_view = RwSignal::new(resolve_view(schema, initial_view));
    let columns = RwSignal::new(ColumnVisibility::default());
    let selection = RwSignal::new(Selection::default());
    let refreshing = RwSignal::new(false);
    let action_busy = RwSignal::new(false);

    let row_id = move |item: &T| match get_row_id {
        Some(f) => f(item),
        None => item.record_id(),
    };

    let search_text = Signal::derive(move || match search {
        Some(s) => s.get(),
        None => query.with(|q| q.search.clone()),
    });
    let current_view = Signal::derive(move || match view {
        Some(v) => resolve_view(schema, Some(v.get())),
        None => own_view.get(),
    });
    let is_loading = move || loading.get().unwrap_or(false);

    let set_search = Callback::new(move |text: String| match (search, on_search_change) {
        (Some(_), Some(cb)) => cb.run(text),
        (Some(_), None) => {}
        (None, _) => query.update(|q| q.set_search(text)),
    });
    let set_view = Callback::new(move |next: ViewType| match (view, on_view_change) {
        (Some(_), Some(cb)) => cb.run(next),
        (Some(_), None) => {}
        (None, _) => own_view.set(next),
    });

    let body = Memo::new(move |_| {
        let mut q = query.get();
        q.search = search_text.get();
        let error = error.get();
        let ctx = ListContext {
            mode,
            loading: is_loading(),
            error: error.as_deref(),
            can_create,
        };
        data.with(|d| present(schema, d, &q, ctx))
    });

    let stats = Signal::derive(move || data.with(|d| compute_stats(schema, d)));

    // Rows that disappear from the data leave the selection
    Effect::new(move |_| {
        let ids: Vec<String> = data.with(|d| d.iter().map(row_id).collect());
        selection.update(|s| s.retain_existing(&ids));
    });

    let refresh = move || {
        if let Some(cb) = on_refresh {
            cb.run_busy((), refreshing, |_| {});
        }
    };

    let ctx = RowContext {
        schema,
        selection,
        query,
        action_busy,
        on_row_click,
        on_action,
        on_cell_edit,
        sortable: own_filters,
        selectable: has_bulk_actions && on_action.is_some(),
    };

    let page_rows = move |page: &ListPage| -> Vec<(String, T)> {
        data.with(|d| {
            page.indices
                .iter()
                .filter_map(|&i| d.get(i))
                .map(|item| (row_id(item), item.clone()))
                .collect()
        })
    };

    let empty_view = move |variant: EmptyVariant| match variant {
        EmptyVariant::NoData { create } => {
            let primary = create
                .then_some(on_create)
                .flatten()
                .map(|cb| StateAction::new(format!("New {}", schema.identity.name), cb));
            view! {
                <EmptyState
                    icon_name=schema.identity.icon
                    title=format!("No {} yet", schema.identity.plural_name.to_lowercase())
                    message=Some(schema.identity.description.to_string())
                    primary=primary
                />
            }
            .into_any()
        }
        EmptyVariant::NoResults => {
            let clear = StateAction::new(
                "Clear search",
                Callback::new(move |_| set_search.run(String::new())),
            );
            view! {
                <EmptyState
                    icon_name="search-x"
                    title="No results"
                    message=Some(format!("Nothing matches \"{}\"", search_text.get_untracked().trim()))
                    secondary=Some(clear)
                />
            }
            .into_any()
        }
    };

    let rows_view = move |page: ListPage| -> AnyView {
        if let Some(render) = render {
            return render.run(data.get());
        }
        let rows = page_rows(&page);
        let body = match current_view.get() {
            ViewType::Table => {
                let visible = columns.get().visible_columns(schema);
                view! { <TableView ctx=ctx rows=rows columns=visible /> }.into_any()
            }
            ViewType::Kanban => view! { <KanbanBoard ctx=ctx rows=rows /> }.into_any(),
            ViewType::Calendar => view! { <CalendarAgenda ctx=ctx rows=rows /> }.into_any(),
            ViewType::Grid => view! { <CardGrid ctx=ctx rows=rows /> }.into_any(),
        };
        let pagination = own_filters.then(|| {
            view! {
                <PaginationControls
                    page=page.page
                    page_count=page.page_count
                    total=page.total
                    page_size=Signal::derive(move || query.with(|q| q.page_size))
                    on_page_change=Callback::new(move |p| query.update(|q| q.page = p))
                    on_page_size_change=Callback::new(move |size| {
                        query.update(|q| {
                            q.page_size = size;
                            q.page = 0;
                        })
                    })
                />
            }
        });
        view! {
            {body}
            {pagination}
        }
        .into_any()
    };

    let bulk_bar = move || {
        let on_action = on_action?;
        if !ctx.selectable || !selection.with(|s| s.bulk_enabled()) {
            return None;
        }
        let count = selection.with(|s| s.len());
        Some(view! {
            <div class="list-layout__bulk-bar">
                <span class="list-layout__bulk-count">{format!("{} selected", count)}</span>
                <ActionBar
                    actions=bulk_actions.get_value()
                    payload=Callback::new(move |_| ActionPayload::Bulk(selection.with_untracked(|s| s.ids())))
                    on_action=on_action
                    busy=action_busy
                    size="sm"
                />
                <Button variant="ghost" size="sm" on_click=Callback::new(move |_| selection.update(|s| s.clear()))>
                    "Clear selection"
                </Button>
            </div>
        })
    };

    view! {
        <Show when=move || !is_loading() fallback=|| view! { <Skeleton /> }>
            <div class="list-layout" data-entity=schema.slug()>
                <PageHeader
                    title=schema.identity.plural_name.to_string()
                    subtitle=schema.identity.description.to_string()
                    icon_name=schema.identity.icon
                >
                    {on_action.map(|on_action| view! {
                        <ActionBar
                            actions=global_actions.get_value()
                            payload=Callback::new(|_| ActionPayload::Global)
                            on_action=on_action
                            busy=action_busy
                        />
                    })}
                    {on_refresh.is_some().then(|| view! {
                        <Button
                            variant="secondary"
                            title="Refresh"
                            icon_name="refresh"
                            busy=refreshing
                            on_click=Callback::new(move |_| refresh())
                        >
                            <span class="button__label">"Refresh"</span>
                        </Button>
                    })}
                    {on_create.filter(|_| can_create).map(|cb| view! {
                        <Button icon_name="plus" on_click=Callback::new(move |_| cb.run(()))>
                            <span class="button__label">{format!("New {}", schema.identity.name)}</span>
                        </Button>
                    })}
                </PageHeader>

                <StatCards stats=stats />

                <ListToolbar
                    schema=schema
                    search=search_text
                    on_search=set_search
                    quick_filters=own_filters
                    query=query
                    columns=columns
                    current_view=current_view
                    on_view=set_view
                />

                {toolbar_extra.clone().map(|extra| extra())}
                {bulk_bar}

                <div class="list-layout__body">
                    {move || match body.get() {
                        ListBody::Loading => view! { <Skeleton /> }.into_any(),
                        ListBody::Error(e) => {
                            let retry = on_refresh.map(|_| Callback::new(move |_| refresh()));
                            view! { <PageErrorState error=e on_retry=retry /> }.into_any()
                        }
                        ListBody::Empty(variant) => empty_view(variant),
                        ListBody::Rows(page) => rows_view(page),
                    }}
                </div>
            </div>
        </Show>
    }
}
