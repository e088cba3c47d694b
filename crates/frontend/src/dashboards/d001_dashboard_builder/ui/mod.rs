//! Dashboard builder: arrange widgets, bind them to entities, preview counts.

pub mod view_model;

use std::sync::Arc;

use contracts::shared::layout::dashboard::{BuilderTab, Widget, WidgetKind, MAX_SPAN, MIN_SPAN};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Card, Flex, FlexGap};

use crate::shared::async_callback::AsyncCallback;
use crate::shared::components::ui::Button;
use crate::shared::components::EmptyState;
use crate::shared::layouts::{CanvasLayout, DashboardLayout, DashboardLayoutConfig};
use crate::shared::schemas::{use_schemas, SchemaContext};
use view_model::DashboardBuilderViewModel;

const REFRESH_CHOICES: [(Option<u32>, &str); 4] = [
    (None, "Off"),
    (Some(10), "Every 10s"),
    (Some(30), "Every 30s"),
    (Some(60), "Every minute"),
];

fn source_name(schemas: SchemaContext, widget: &Widget) -> String {
    widget
        .source
        .as_deref()
        .and_then(|slug| schemas.get(slug))
        .map(|s| s.identity.plural_name.to_string())
        .unwrap_or_else(|| "No data source".to_string())
}

#[component]
pub fn DashboardBuilderPage() -> impl IntoView {
    let vm = DashboardBuilderViewModel::new();
    let schemas = use_schemas();

    let config = Signal::derive(move || DashboardLayoutConfig {
        title: "Dashboard builder".to_string(),
        subtitle: Some("Arrange widgets and pick the records behind them".to_string()),
        auto_refresh_secs: vm.auto_refresh.get(),
    });
    let on_refresh = AsyncCallback::new(move |_| vm.refresh_counts(schemas));

    spawn_local(async move {
        if let Err(e) = vm.refresh_counts(schemas).await {
            log::error!("dashboard: counting records failed: {}", e);
        }
    });

    let actions: ChildrenFn = Arc::new(move || {
        view! {
            <select
                class="dashboard-builder__refresh"
                title="Auto-refresh"
                on:change=move |ev| {
                    let index = event_target_value(&ev).parse::<usize>().unwrap_or(0);
                    vm.auto_refresh.set(REFRESH_CHOICES.get(index).and_then(|(secs, _)| *secs));
                }
            >
                {REFRESH_CHOICES
                    .iter()
                    .enumerate()
                    .map(|(index, (secs, label))| {
                        let secs = *secs;
                        view! {
                            <option value=index.to_string() selected=move || vm.auto_refresh.get() == secs>
                                {*label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        }
        .into_any()
    });

    let tab = move || vm.builder.with(|b| b.tab);

    view! {
        <DashboardLayout config=config on_refresh=on_refresh actions=actions>
            <div class="tab-strip" role="tablist">
                {BuilderTab::ALL
                    .into_iter()
                    .map(|t| view! {
                        <button
                            role="tab"
                            class="tab-strip__tab"
                            class:tab-strip__tab--active=move || tab() == t
                            data-tab=t.as_str()
                            on:click=move |_| vm.builder.update(|b| b.tab = t)
                        >
                            {t.label()}
                        </button>
                    })
                    .collect_view()}
            </div>
            {move || match tab() {
                BuilderTab::Layout => view! { <LayoutTab vm=vm /> }.into_any(),
                BuilderTab::Data => view! { <DataTab vm=vm schemas=schemas /> }.into_any(),
                BuilderTab::Preview => view! { <PreviewTab vm=vm schemas=schemas /> }.into_any(),
            }}
        </DashboardLayout>
    }
}

#[component]
fn LayoutTab(vm: DashboardBuilderViewModel) -> impl IntoView {
    let sidebar: ChildrenFn = Arc::new(move || view! { <WidgetInspector vm=vm /> }.into_any());
    let selected = move || vm.builder.with(|b| b.selected.clone());

    view! {
        <Flex class="dashboard-builder__palette" gap=FlexGap::Small>
            {WidgetKind::ALL
                .into_iter()
                .map(|kind| view! {
                    <Button
                        variant="secondary"
                        size="sm"
                        on_click=Callback::new(move |_| vm.edit(|b| {
                            b.add(kind);
                        }))
                    >
                        {format!("+ {}", kind.label())}
                    </Button>
                })
                .collect_view()}
        </Flex>
        <CanvasLayout
            title="Layout"
            on_undo=Callback::new(move |_| vm.undo())
            on_redo=Callback::new(move |_| vm.redo())
            can_undo=Signal::derive(move || vm.can_undo())
            can_redo=Signal::derive(move || vm.can_redo())
            sidebar=sidebar
        >
            <div class="dashboard-grid" on:click=move |_| vm.select(None)>
                <For
                    each=move || vm.builder.get().widgets
                    key=|w| (w.id.clone(), w.title.clone(), w.span)
                    children=move |w| {
                        let id = w.id.clone();
                        let is_selected = {
                            let id = id.clone();
                            move || selected().as_deref() == Some(id.as_str())
                        };
                        view! {
                            <div
                                class="dashboard-grid__widget"
                                class:dashboard-grid__widget--selected=is_selected
                                style=format!("grid-column: span {}", w.span)
                                on:click=move |ev| {
                                    ev.stop_propagation();
                                    vm.select(Some(id.clone()));
                                }
                            >
                                <span class="dashboard-grid__kind">{w.kind.label()}</span>
                                <span class="dashboard-grid__title">{w.title.clone()}</span>
                            </div>
                        }
                    }
                />
            </div>
            <Show when=move || vm.builder.with(|b| b.widgets.is_empty())>
                <EmptyState
                    icon_name="layout-dashboard"
                    title="No widgets yet"
                    message=Some("Add one from the palette above".to_string())
                />
            </Show>
        </CanvasLayout>
    }
}

/// Properties of the selected widget
#[component]
fn WidgetInspector(vm: DashboardBuilderViewModel) -> impl IntoView {
    move || {
        let Some(widget) = vm.builder.with(|b| b.selected_widget().cloned()) else {
            return view! { <p class="dashboard-builder__hint">"Select a widget to edit it"</p> }
                .into_any();
        };
        let id = StoredValue::new(widget.id.clone());
        view! {
            <div class="dashboard-builder__inspector">
                <h3>{widget.kind.label()}</h3>
                <label class="form-field">
                    <span class="form-field__label">"Title"</span>
                    <input
                        class="form-field__input"
                        prop:value=widget.title.clone()
                        on:change=move |ev| {
                            let title = event_target_value(&ev);
                            vm.edit(|b| b.rename(&id.get_value(), &title));
                        }
                    />
                </label>
                <label class="form-field">
                    <span class="form-field__label">{format!("Width: {} of {}", widget.span, MAX_SPAN)}</span>
                    <input
                        type="range"
                        min=MIN_SPAN.to_string()
                        max=MAX_SPAN.to_string()
                        prop:value=widget.span.to_string()
                        on:change=move |ev| {
                            if let Ok(span) = event_target_value(&ev).parse::<u8>() {
                                vm.edit(|b| b.resize(&id.get_value(), span));
                            }
                        }
                    />
                </label>
                <Flex class="dashboard-builder__inspector-actions" gap=FlexGap::Small>
                    <Button variant="ghost" size="sm" on_click=Callback::new(move |_| vm.edit(|b| b.move_up(&id.get_value())))>
                        "Move up"
                    </Button>
                    <Button variant="ghost" size="sm" on_click=Callback::new(move |_| vm.edit(|b| b.move_down(&id.get_value())))>
                        "Move down"
                    </Button>
                    <Button variant="danger" size="sm" on_click=Callback::new(move |_| vm.edit(|b| b.remove(&id.get_value())))>
                        "Remove"
                    </Button>
                </Flex>
            </div>
        }
        .into_any()
    }
}

#[component]
fn DataTab(vm: DashboardBuilderViewModel, schemas: SchemaContext) -> impl IntoView {
    let entities = schemas.registry().list();
    move || {
        let widgets = vm.builder.with(|b| b.widgets.clone());
        if widgets.is_empty() {
            return view! {
                <EmptyState icon_name="inbox" title="Nothing to bind" message=Some("Add widgets on the Layout tab first".to_string()) />
            }
            .into_any();
        }
        let entities = entities.clone();
        view! {
            <table class="dashboard-builder__sources">
                <thead>
                    <tr><th>"Widget"</th><th>"Records from"</th></tr>
                </thead>
                <tbody>
                    {widgets
                        .into_iter()
                        .map(|w| {
                            let id = w.id.clone();
                            let current = w.source.clone().unwrap_or_default();
                            view! {
                                <tr>
                                    <td>{w.title.clone()}</td>
                                    <td>
                                        <select on:change=move |ev| {
                                            let slug = event_target_value(&ev);
                                            let slug = (!slug.is_empty()).then_some(slug);
                                            vm.edit(|b| b.set_source(&id, slug));
                                        }>
                                            <option value="" selected=current.is_empty()>"None"</option>
                                            {entities
                                                .iter()
                                                .map(|s| view! {
                                                    <option value=s.slug() selected=current == s.slug()>
                                                        {s.identity.plural_name}
                                                    </option>
                                                })
                                                .collect_view()}
                                        </select>
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        }
        .into_any()
    }
}

#[component]
fn PreviewTab(vm: DashboardBuilderViewModel, schemas: SchemaContext) -> impl IntoView {
    view! {
        <div class="dashboard-grid dashboard-grid--preview">
            {move || {
                let counts = vm.counts.get();
                vm.builder
                    .with(|b| b.widgets.clone())
                    .into_iter()
                    .map(|w| {
                        let count = w.source.as_ref().and_then(|slug| counts.get(slug).copied());
                        let style = format!("grid-column: span {}", w.span);
                        view! {
                            <Card class="dashboard-grid__widget" attr:style=style>
                                <span class="dashboard-grid__title">{w.title.clone()}</span>
                                <span class="dashboard-grid__value">
                                    {count.map(|c| c.to_string()).unwrap_or_else(|| "–".to_string())}
                                </span>
                                <span class="dashboard-grid__caption">{source_name(schemas, &w)}</span>
                            </Card>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
