//! Record detail: header projections, tabs and related lists

use contracts::shared::layout::detail::{
    present, related_lists, related_path, resolve_active_tab, tab_fields, tab_for_shortcut,
    DetailBody, DetailHeader,
};
use contracts::shared::schema::{
    ActionPayload, ActionScope, DetailTab, EntityRecord, EntitySchema, Record,
    TabContent,
};
use leptos::prelude::*;
use leptos_router::components::A;

use super::actions::{ActionBar, OnAction};
use super::cells::FieldRows;
use crate::shared::async_callback::AsyncCallback;
use crate::shared::components::ui::{variant_for_color, Badge, Button};
use crate::shared::components::{EmptyState, PageErrorState, Skeleton, StateAction};
use crate::shared::icons::icon;
use crate::shared::keyboard::use_scoped_keydown;

#[component]
pub fn DetailLayout<T>(
    schema: &'static EntitySchema,
    #[prop(into)]
    record: Signal<Option<T>>,
    #[prop(optional, into)]
    loading: MaybeProp<bool>,
    #[prop(optional, into)]
    error: MaybeProp<String>,
    /// Tab to open first; unknown ids fall back to the first tab
    #[prop(optional_no_strip)]
    initial_tab: Option<String>,
    #[prop(optional)]
    on_back: Option<Callback<()>>,
    #[prop(optional)]
    on_edit: Option<Callback<()>>,
    #[prop(optional)]
    on_refresh: Option<AsyncCallback>,
    #[prop(optional)]
    on_action: Option<OnAction>,
    /// Overrides a tab's content when it returns `Some`
    #[prop(optional)]
    render_tab: Option<Callback<(&'static str, T), Option<AnyView>>>,
) -> impl IntoView
where
    T: EntityRecord + Clone + Send + Sync + 'static,
{
    let tabs = schema.layouts.detail.tabs;
    let active_tab = RwSignal::new(resolve_active_tab(schema, initial_tab.as_deref()));
    let refreshing = RwSignal::new(false);
    let action_busy = RwSignal::new(false);
    let is_loading = move || loading.get().unwrap_or(false);

    use_scoped_keydown("detail-tabs", move |chord, ev| {
        if let Some(index) = tab_for_shortcut(tabs.len(), chord) {
            ev.prevent_default();
            active_tab.set(Some(tabs[index].id));
        }
    });

    let body = Memo::new(move |_| {
        let error = error.get();
        record.with(|r| present(is_loading(), error.as_deref(), r.is_some()))
    });

    let retry = on_refresh.map(|cb| {
        Callback::new(move |_| cb.run_busy((), refreshing, |_| {}))
    });

    let back_button = move || {
        on_back.map(|cb| {
            view! {
                <Button variant="ghost" title="Back" on_click=Callback::new(move |_| cb.run(()))>
                    {icon("arrow-left")}
                </Button>
            }
        })
    };

    let ready_view = move || -> AnyView {
        let Some(item) = record.get() else {
            return ().into_any();
        };
        let header = DetailHeader::resolve(schema, &item);
        let snapshot = Record::snapshot(schema, &item);
        let record_id = item.record_id();
        let row_actions = schema.actions_for(ActionScope::Row);

        view! {
            <div class="detail-layout" data-entity=schema.slug()>
                <div class="detail-layout__header">
                    {back_button()}
                    {header.image.map(|src| view! {
                        <img class="detail-layout__image" src=src alt="" />
                    })}
                    <div class="detail-layout__heading">
                        <h1 class="detail-layout__title">{header.title}</h1>
                        {header.subtitle.map(|s| view! {
                            <div class="detail-layout__subtitle">{s}</div>
                        })}
                    </div>
                    {header.badge.map(|b| view! {
                        <Badge variant=variant_for_color(header.badge_color)>{b}</Badge>
                    })}
                    <div class="detail-layout__actions">
                        {on_action.map(|on_action| view! {
                            <ActionBar
                                actions=row_actions
                                payload=Callback::new(move |_| ActionPayload::Row(snapshot.clone()))
                                on_action=on_action
                                busy=action_busy
                            />
                        })}
                        {on_edit.filter(|_| schema.permissions.update).map(|cb| view! {
                            <Button icon_name="pencil" on_click=Callback::new(move |_| cb.run(()))>
                                <span class="button__label">"Edit"</span>
                            </Button>
                        })}
                    </div>
                </div>

                {if tabs.is_empty() {
                    view! { <FieldRows fields=schema.detail_fields() item=item.clone() /> }.into_any()
                } else {
                    view! {
                        <TabStrip tabs=tabs active=active_tab />
                        <div class="detail-layout__tab-content">
                            {move || {
                                let tab = tabs.iter().find(|t| Some(t.id) == active_tab.get())?;
                                Some(tab_view(schema, tab, item.clone(), render_tab))
                            }}
                        </div>
                    }
                    .into_any()
                }}

                <RelatedPanel schema=schema record_id=record_id />
            </div>
        }
        .into_any()
    };

    view! {
        {move || match body.get() {
            DetailBody::Loading => view! { <Skeleton /> }.into_any(),
            DetailBody::Error(e) => view! {
                <div class="detail-layout">
                    {back_button()}
                    <PageErrorState error=e on_retry=retry />
                </div>
            }
            .into_any(),
            DetailBody::NotFound => {
                let back = on_back.map(|cb| StateAction::new("Back to list", cb));
                view! {
                    <EmptyState
                        icon_name="search-x"
                        title=format!("{} not found", schema.identity.name)
                        message=Some("It may have been deleted or the link is wrong.".to_string())
                        primary=back
                    />
                }
                .into_any()
            }
            DetailBody::Ready => ready_view(),
        }}
    }
}

fn tab_view<T>(
    schema: &'static EntitySchema,
    tab: &'static DetailTab,
    item: T,
    render_tab: Option<Callback<(&'static str, T), Option<AnyView>>>,
) -> AnyView
where
    T: EntityRecord + Clone + Send + Sync + 'static,
{
    if let Some(custom) = render_tab.and_then(|cb| cb.run((tab.id, item.clone()))) {
        return custom;
    }
    match tab.content {
        TabContent::Fields(_) => {
            view! { <FieldRows fields=tab_fields(schema, tab) item=item /> }.into_any()
        }
        TabContent::Related(name) => {
            let rel = schema.relationships.iter().find(|r| r.name == name);
            match rel {
                Some(rel) => {
                    let path = related_path(rel, &item.record_id());
                    view! {
                        <div class="detail-layout__related-tab">
                            <A href=path>{format!("Open {}", rel.label)}</A>
                        </div>
                    }
                    .into_any()
                }
                None => view! { <p class="detail-layout__placeholder">"Nothing to show"</p> }
                    .into_any(),
            }
        }
        TabContent::Custom => {
            view! { <p class="detail-layout__placeholder">"Nothing to show"</p> }.into_any()
        }
    }
}

#[component]
fn TabStrip(tabs: &'static [DetailTab], active: RwSignal<Option<&'static str>>) -> impl IntoView {
    view! {
        <div class="tab-strip" role="tablist">
            {tabs
                .iter()
                .enumerate()
                .map(|(index, tab)| {
                    let id = tab.id;
                    let hint = (index < 9).then(|| format!("{} (Ctrl+{})", tab.label, index + 1));
                    view! {
                        <button
                            role="tab"
                            class="tab-strip__tab"
                            class:tab-strip__tab--active=move || active.get() == Some(id)
                            title=hint
                            on:click=move |_| active.set(Some(id))
                        >
                            {icon(tab.icon)}
                            <span>{tab.label}</span>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn RelatedPanel(schema: &'static EntitySchema, record_id: String) -> impl IntoView {
    let lists = related_lists(schema);
    (!lists.is_empty()).then(|| {
        view! {
            <aside class="related-panel">
                <h3 class="related-panel__title">"Related"</h3>
                <ul class="related-panel__list">
                    {lists
                        .into_iter()
                        .map(|rel| {
                            let path = related_path(rel, &record_id);
                            view! {
                                <li>
                                    <A href=path>{rel.label}</A>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </aside>
        }
    })
}
