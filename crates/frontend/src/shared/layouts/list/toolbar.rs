use contracts::shared::layout::list::{ColumnVisibility, ListQuery};
use contracts::shared::schema::{EntitySchema, ViewType};
use leptos::prelude::*;
use thaw::{Flex, FlexAlign, FlexGap};

use crate::shared::components::SearchInput;
use crate::shared::icons::icon;

#[component]
pub fn ListToolbar(
    schema: &'static EntitySchema,
    search: Signal<String>,
    on_search: Callback<String>,
    /// Quick filter chips apply only when the layout filters its own data
    quick_filters: bool,
    query: RwSignal<ListQuery>,
    columns: RwSignal<ColumnVisibility>,
    current_view: Signal<ViewType>,
    on_view: Callback<ViewType>,
) -> impl IntoView {
    let placeholder = schema
        .search
        .placeholder
        .map(str::to_string)
        .unwrap_or_else(|| format!("Search {}…", schema.identity.plural_name.to_lowercase()));

    view! {
        <Flex class="list-toolbar" align=FlexAlign::Center gap=FlexGap::Small>
            <SearchInput value=search on_change=on_search placeholder=placeholder />
            {(quick_filters && !schema.filters.quick.is_empty())
                .then(|| view! { <QuickFilterChips schema=schema query=query /> })}
            <div class="list-toolbar__spacer"></div>
            {move || (current_view.get() == ViewType::Table)
                .then(|| view! { <ColumnPicker schema=schema columns=columns /> })}
            <ViewSwitcher schema=schema current=current_view on_change=on_view />
        </Flex>
    }
}

#[component]
fn QuickFilterChips(schema: &'static EntitySchema, query: RwSignal<ListQuery>) -> impl IntoView {
    let active = move || query.with(|q| q.quick_filter);

    view! {
        <div class="quick-filters" role="group">
            <button
                class="quick-filters__chip"
                class:quick-filters__chip--active=move || active().is_none()
                on:click=move |_| query.update(|q| q.set_quick_filter(None))
            >
                "All"
            </button>
            {schema
                .filters
                .quick
                .iter()
                .map(|filter| {
                    let id = filter.id;
                    view! {
                        <button
                            class="quick-filters__chip"
                            class:quick-filters__chip--active=move || active() == Some(id)
                            on:click=move |_| {
                                let next = (active() != Some(id)).then_some(id);
                                query.update(|q| q.set_quick_filter(next));
                            }
                        >
                            {filter.label}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Dropdown of table columns; the last visible column cannot be hidden
#[component]
fn ColumnPicker(schema: &'static EntitySchema, columns: RwSignal<ColumnVisibility>) -> impl IntoView {
    let open = RwSignal::new(false);

    view! {
        <div class="column-picker">
            <button
                class="button button--ghost"
                title="Columns"
                on:click=move |_| open.update(|o| *o = !*o)
            >
                {icon("columns")}
            </button>
            <Show when=move || open.get()>
                <div class="column-picker__menu">
                    {schema
                        .table_columns()
                        .into_iter()
                        .map(|field| {
                            let key = field.key;
                            let visible = move || columns.with(|c| c.is_visible(key));
                            let locked = move || {
                                visible() && columns.with(|c| c.visible_columns(schema).len() == 1)
                            };
                            view! {
                                <label class="column-picker__item">
                                    <input
                                        type="checkbox"
                                        prop:checked=visible
                                        disabled=locked
                                        on:change=move |_| columns.update(|c| c.toggle(schema, key))
                                    />
                                    {field.label}
                                </label>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}

/// Buttons for the views the schema declares; hidden with a single view
#[component]
fn ViewSwitcher(
    schema: &'static EntitySchema,
    current: Signal<ViewType>,
    on_change: Callback<ViewType>,
) -> impl IntoView {
    let available = schema.views.available();
    (available.len() > 1).then(|| {
        view! {
            <div class="view-switcher" role="group">
                {available
                    .into_iter()
                    .map(|view_type| {
                        view! {
                            <button
                                class="view-switcher__button"
                                class:view-switcher__button--active=move || current.get() == view_type
                                title=view_type.label()
                                on:click=move |_| on_change.run(view_type)
                            >
                                {icon(view_type.icon())}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        }
    })
}
