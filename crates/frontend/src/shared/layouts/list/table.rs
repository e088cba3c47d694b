use contracts::shared::layout::form::parse_input;
use contracts::shared::schema::{
    ActionPayload, ActionScope, EntityRecord, FieldDef, FieldType, FieldValue, Record,
};
use leptos::prelude::*;
use thaw::*;

use super::{CellEdit, RowContext};
use crate::shared::layouts::actions::ActionBar;
use crate::shared::layouts::cells::field_view;

#[component]
pub fn TableView<T>(
    ctx: RowContext<T>,
    rows: Vec<(String, T)>,
    columns: Vec<&'static FieldDef>,
) -> impl IntoView
where
    T: EntityRecord + Clone + Send + Sync + 'static,
{
    let schema = ctx.schema;
    let page_ids: Vec<String> = rows.iter().map(|(id, _)| id.clone()).collect();
    let has_row_actions = ctx.on_action.is_some() && !schema.actions_for(ActionScope::Row).is_empty();
    let header_columns = columns.clone();

    let header_checkbox = ctx.selectable.then(|| {
        let ids_checked = page_ids.clone();
        let ids_toggle = page_ids.clone();
        view! {
            <TableHeaderCell min_width=40.0>
                <input
                    type="checkbox"
                    class="table__checkbox"
                    prop:checked=move || ctx.selection.with(|s| s.all_selected(&ids_checked))
                    on:change=move |_| ctx.selection.update(|s| s.toggle_all(&ids_toggle))
                />
            </TableHeaderCell>
        }
    });

    view! {
        <div class="table-container">
            <Table>
                <TableHeader>
                    <TableRow>
                        {header_checkbox}
                        {header_columns
                            .into_iter()
                            .map(|field| view! { <HeaderCell ctx=ctx field=field /> })
                            .collect_view()}
                        {has_row_actions.then(|| view! {
                            <TableHeaderCell min_width=120.0>""</TableHeaderCell>
                        })}
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {rows
                        .into_iter()
                        .map(|(id, item)| {
                            view! {
                                <DataRow
                                    ctx=ctx
                                    row_id=id
                                    item=item
                                    columns=columns.clone()
                                    has_row_actions=has_row_actions
                                />
                            }
                        })
                        .collect_view()}
                </TableBody>
            </Table>
        </div>
    }
}

#[component]
fn HeaderCell<T>(ctx: RowContext<T>, field: &'static FieldDef) -> impl IntoView
where
    T: 'static,
{
    let sortable = ctx.sortable && field.display.sortable;
    let indicator = move || {
        ctx.query.with(|q| match q.sort {
            Some(sort) if sort.field == field.key => {
                if sort.ascending {
                    " ▲"
                } else {
                    " ▼"
                }
            }
            _ => "",
        })
    };
    let min_width = field.display.width.map(f64::from).unwrap_or(100.0);

    view! {
        <TableHeaderCell resizable=true min_width=min_width>
            <div
                class="table__header"
                class:table__header--sortable=sortable
                on:click=move |_| {
                    if sortable {
                        ctx.query.update(|q| q.toggle_sort(field.key));
                    }
                }
            >
                {field.label}
                <span class="table__sort-indicator">{indicator}</span>
            </div>
        </TableHeaderCell>
    }
}

#[component]
fn DataRow<T>(
    ctx: RowContext<T>,
    row_id: String,
    item: T,
    columns: Vec<&'static FieldDef>,
    has_row_actions: bool,
) -> impl IntoView
where
    T: EntityRecord + Clone + Send + Sync + 'static,
{
    let schema = ctx.schema;
    let snapshot = Record::snapshot(schema, &item);
    let id = row_id;
    let selected_id = id.clone();
    let is_selected = move || ctx.selection.with(|s| s.contains(&selected_id));
    let click_item = item.clone();

    let checkbox = ctx.selectable.then(|| {
        let toggle_id = id.clone();
        let checked = is_selected.clone();
        view! {
            <TableCell class="fixed-checkbox-column" on:click=|e| e.stop_propagation()>
                <input
                    type="checkbox"
                    class="table__checkbox"
                    prop:checked=checked
                    on:change=move |_| ctx.selection.update(|s| s.toggle(&toggle_id))
                />
            </TableCell>
        }
    });

    let cells = columns
        .into_iter()
        .map(|field| {
            let content = match ctx.on_cell_edit {
                Some(on_edit) if is_inline_editable(field) => {
                    inline_editor(field, &item, id.clone(), on_edit)
                }
                _ => field_view(field, &item),
            };
            view! {
                <TableCell>
                    <TableCellLayout truncate=true>{content}</TableCellLayout>
                </TableCell>
            }
        })
        .collect_view();

    let actions = ctx.on_action.filter(|_| has_row_actions).map(|on_action| {
        let payload = Callback::new(move |_| ActionPayload::Row(snapshot.clone()));
        view! {
            <TableCell on:click=|e| e.stop_propagation()>
                <ActionBar
                    actions=schema.actions_for(ActionScope::Row)
                    payload=payload
                    on_action=on_action
                    busy=ctx.action_busy
                    size="sm"
                />
            </TableCell>
        }
    });

    view! {
        <TableRow
            class:table__row--selected=is_selected
            class:table__row--clickable=ctx.on_row_click.is_some()
            on:click=move |_| {
                if let Some(cb) = ctx.on_row_click {
                    cb.run(click_item.clone());
                }
            }
        >
            {checkbox}
            {cells}
            {actions}
        </TableRow>
    }
}

/// Selects and switches can be changed in place
fn is_inline_editable(field: &FieldDef) -> bool {
    matches!(field.field_type, FieldType::Select | FieldType::Switch)
}

fn inline_editor<T: EntityRecord>(
    field: &'static FieldDef,
    item: &T,
    row_id: String,
    on_edit: Callback<CellEdit>,
) -> AnyView {
    let current = item.field_value(field.key).unwrap_or(FieldValue::Null);
    match field.field_type {
        FieldType::Switch => {
            let checked = current.as_bool().unwrap_or(false);
            view! {
                <input
                    type="checkbox"
                    class="table__inline-switch"
                    prop:checked=checked
                    on:click=|e| e.stop_propagation()
                    on:change=move |ev| {
                        on_edit.run(CellEdit {
                            row_id: row_id.clone(),
                            field: field.key,
                            value: FieldValue::Bool(event_target_checked(&ev)),
                        })
                    }
                />
            }
            .into_any()
        }
        _ => {
            let selected = current.as_text().unwrap_or_default().to_string();
            view! {
                <select
                    class="table__inline-select"
                    on:click=|e| e.stop_propagation()
                    on:change=move |ev| {
                        on_edit.run(CellEdit {
                            row_id: row_id.clone(),
                            field: field.key,
                            value: parse_input(field, &event_target_value(&ev)),
                        })
                    }
                >
                    <option value="" selected={selected.is_empty()}>"-"</option>
                    {field
                        .options
                        .iter()
                        .map(|opt| view! {
                            <option value=opt.value selected={selected == opt.value}>{opt.label}</option>
                        })
                        .collect_view()}
                </select>
            }
            .into_any()
        }
    }
}
