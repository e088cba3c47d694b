//! Card-based bodies: kanban board, calendar agenda and card grid

use contracts::shared::layout::list::{group_calendar, group_kanban};
use contracts::shared::schema::{EntityRecord, EntitySchema};
use leptos::prelude::*;

use super::RowContext;
use crate::shared::components::ui::{variant_for_color, Badge};

fn text_of<T: EntityRecord>(schema: &EntitySchema, item: &T, key: &str) -> Option<String> {
    let field = schema.field(key)?;
    Some(item.display_value(field)).filter(|s| !s.is_empty())
}

/// One clickable card; selection is not offered outside the table
#[component]
fn RecordCard<T>(
    ctx: RowContext<T>,
    item: T,
    title: String,
    #[prop(optional_no_strip)]
    subtitle: Option<String>,
    #[prop(optional_no_strip)]
    image: Option<String>,
) -> impl IntoView
where
    T: EntityRecord + Clone + Send + Sync + 'static,
{
    view! {
        <div
            class="record-card"
            class:record-card--clickable=ctx.on_row_click.is_some()
            on:click=move |_| {
                if let Some(cb) = ctx.on_row_click {
                    cb.run(item.clone());
                }
            }
        >
            {image.map(|src| view! { <img class="record-card__image" src=src alt="" /> })}
            <div class="record-card__title">{title}</div>
            {subtitle.map(|s| view! { <div class="record-card__subtitle">{s}</div> })}
        </div>
    }
}

#[component]
pub fn KanbanBoard<T>(ctx: RowContext<T>, rows: Vec<(String, T)>) -> impl IntoView
where
    T: EntityRecord + Clone + Send + Sync + 'static,
{
    let schema = ctx.schema;
    let items: Vec<T> = rows.into_iter().map(|(_, item)| item).collect();
    let all: Vec<usize> = (0..items.len()).collect();
    let columns = group_kanban(schema, &items, &all);
    let kanban = schema.views.kanban;

    view! {
        <div class="kanban-board">
            {columns
                .into_iter()
                .map(|column| {
                    let cards = column
                        .indices
                        .iter()
                        .map(|&i| {
                            let item = items[i].clone();
                            let title = kanban
                                .and_then(|k| text_of(schema, &item, k.card_title))
                                .unwrap_or_else(|| schema.title_of(&item));
                            let subtitle = kanban
                                .and_then(|k| k.card_subtitle)
                                .and_then(|key| text_of(schema, &item, key));
                            view! { <RecordCard ctx=ctx item=item title=title subtitle=subtitle /> }
                        })
                        .collect_view();
                    let count = column.indices.len();
                    view! {
                        <div class="kanban-column" data-value=column.value.unwrap_or("")>
                            <div class="kanban-column__header">
                                <Badge variant=variant_for_color(column.color)>{column.label}</Badge>
                                <span class="kanban-column__count">{count}</span>
                            </div>
                            <div class="kanban-column__cards">{cards}</div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Records grouped by start date, earliest first
#[component]
pub fn CalendarAgenda<T>(ctx: RowContext<T>, rows: Vec<(String, T)>) -> impl IntoView
where
    T: EntityRecord + Clone + Send + Sync + 'static,
{
    let schema = ctx.schema;
    let items: Vec<T> = rows.into_iter().map(|(_, item)| item).collect();
    let all: Vec<usize> = (0..items.len()).collect();
    let days = group_calendar(schema, &items, &all);
    let calendar = schema.views.calendar;

    if days.is_empty() {
        return view! {
            <div class="calendar-agenda calendar-agenda--empty">"Nothing scheduled"</div>
        }
        .into_any();
    }

    view! {
        <div class="calendar-agenda">
            {days
                .into_iter()
                .map(|day| {
                    let entries = day
                        .indices
                        .iter()
                        .map(|&i| {
                            let item = items[i].clone();
                            let title = calendar
                                .and_then(|c| text_of(schema, &item, c.title_field))
                                .unwrap_or_else(|| schema.title_of(&item));
                            let until = calendar
                                .and_then(|c| c.end_field)
                                .and_then(|key| text_of(schema, &item, key))
                                .map(|end| format!("until {}", end));
                            view! { <RecordCard ctx=ctx item=item title=title subtitle=until /> }
                        })
                        .collect_view();
                    view! {
                        <section class="calendar-agenda__day">
                            <h3 class="calendar-agenda__date">
                                {day.date.format("%A, %d %B %Y").to_string()}
                            </h3>
                            <div class="calendar-agenda__entries">{entries}</div>
                        </section>
                    }
                })
                .collect_view()}
        </div>
    }
    .into_any()
}

#[component]
pub fn CardGrid<T>(ctx: RowContext<T>, rows: Vec<(String, T)>) -> impl IntoView
where
    T: EntityRecord + Clone + Send + Sync + 'static,
{
    let schema = ctx.schema;
    let grid = schema.views.grid;

    view! {
        <div class="card-grid">
            {rows
                .into_iter()
                .map(|(_, item)| {
                    let title = grid
                        .and_then(|g| text_of(schema, &item, g.title_field))
                        .unwrap_or_else(|| schema.title_of(&item));
                    let subtitle = grid
                        .and_then(|g| g.subtitle_field)
                        .and_then(|key| text_of(schema, &item, key))
                        .or_else(|| schema.subtitle_of(&item));
                    let image = grid
                        .and_then(|g| g.image_field)
                        .and_then(|key| text_of(schema, &item, key))
                        .or_else(|| schema.image_of(&item));
                    view! {
                        <RecordCard ctx=ctx item=item title=title subtitle=subtitle image=image />
                    }
                })
                .collect_view()}
        </div>
    }
}
