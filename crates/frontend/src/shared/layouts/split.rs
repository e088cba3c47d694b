//! Master/detail layout with keyboard navigation.
//!
//! Wide viewports show resizable side-by-side panels; below the breakpoint
//! the master list and the detail take the full screen in turn.

use contracts::shared::layout::split::{
    filter_items, handle_key, split_view, PanelBounds, SplitKey, SplitOutcome, SplitView,
    DEFAULT_BREAKPOINT,
};
use leptos::ev;
use leptos::html::Div;
use leptos::prelude::*;
use web_sys::MouseEvent;

use crate::shared::components::{SearchInput, Skeleton};
use crate::shared::icons::icon;
use crate::shared::keyboard::use_scoped_keydown;

#[derive(Debug, Clone, Copy)]
pub struct SplitLayoutConfig {
    pub breakpoint: f64,
    pub bounds: PanelBounds,
    pub search_placeholder: &'static str,
}

impl Default for SplitLayoutConfig {
    fn default() -> Self {
        Self {
            breakpoint: DEFAULT_BREAKPOINT,
            bounds: PanelBounds::default(),
            search_placeholder: "Filter…",
        }
    }
}

fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(DEFAULT_BREAKPOINT)
}

#[component]
pub fn SplitLayout<T>(
    #[prop(into)]
    items: Signal<Vec<T>>,
    /// Text used for filtering and the default row label
    label: fn(&T) -> String,
    key: fn(&T) -> String,
    #[prop(into)]
    selected: Signal<Option<String>>,
    on_select: Callback<Option<String>>,
    render_detail: Callback<T, AnyView>,
    /// Row content; defaults to the label
    #[prop(optional)]
    render_item: Option<Callback<T, AnyView>>,
    #[prop(optional)]
    config: Option<SplitLayoutConfig>,
    #[prop(optional, into)]
    title: MaybeProp<String>,
    #[prop(optional, into)]
    loading: MaybeProp<bool>,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
{
    let config = config.unwrap_or_default();
    let bounds = config.bounds;
    let search = RwSignal::new(String::new());
    let focused = RwSignal::new(None::<usize>);
    let width = RwSignal::new(viewport_width());
    let master_pct = RwSignal::new(bounds.default_pct);
    let container = NodeRef::<Div>::new();

    let filtered = Memo::new(move |_| {
        let needle = search.get();
        items.with(|all| filter_items(all, &needle, label))
    });

    // Focus indexes the filtered list, so it restarts when the filter changes
    Effect::new(move |_| {
        filtered.track();
        focused.set(None);
    });

    let resize = window_event_listener(ev::resize, move |_| width.set(viewport_width()));
    on_cleanup(move || resize.remove());

    let item_at = move |index: usize| -> Option<T> {
        let source = filtered.with_untracked(|f| f.get(index).copied())?;
        items.with_untracked(|all| all.get(source).cloned())
    };

    use_scoped_keydown("split", move |chord, ev| {
        if chord.has_modifier() {
            return;
        }
        let Some(split_key) = SplitKey::from_key(&chord.key) else {
            return;
        };
        let len = filtered.with_untracked(|f| f.len());
        match handle_key(split_key, focused.get_untracked(), len) {
            SplitOutcome::Focus(index) => {
                ev.prevent_default();
                focused.set(Some(index));
            }
            SplitOutcome::Select(index) => {
                ev.prevent_default();
                if let Some(item) = item_at(index) {
                    on_select.run(Some(key(&item)));
                }
            }
            SplitOutcome::ClearSelection => on_select.run(None),
            SplitOutcome::Ignore => {}
        }
    });

    let drag = StoredValue::new_local(Vec::<WindowListenerHandle>::new());
    let stop_drag = move || {
        drag.try_update_value(|handles| {
            for handle in handles.drain(..) {
                handle.remove();
            }
        });
    };
    on_cleanup(stop_drag);

    let start_drag = move |ev: MouseEvent| {
        ev.prevent_default();
        stop_drag();
        let container_width = container
            .get_untracked()
            .map(|el| el.get_bounding_client_rect().width())
            .unwrap_or(0.0);
        let start_x = ev.client_x() as f64;
        let start_pct = master_pct.get_untracked();
        let on_move = window_event_listener(ev::mousemove, move |e: MouseEvent| {
            master_pct.set(bounds.resize(start_pct, e.client_x() as f64 - start_x, container_width));
        });
        let on_up = window_event_listener(ev::mouseup, move |_| stop_drag());
        drag.update_value(|handles| handles.extend([on_move, on_up]));
    };

    let mode = move || split_view(width.get(), config.breakpoint, selected.with(|s| s.is_some()));

    let master = move || {
        let rows = filtered.get();
        let rows = items.with(|all| {
            rows.iter()
                .enumerate()
                .filter_map(|(pos, &i)| all.get(i).map(|item| (pos, item.clone())))
                .collect::<Vec<_>>()
        });
        view! {
            <div class="split-layout__master-panel">
                <SearchInput
                    value=search
                    on_change=Callback::new(move |text| search.set(text))
                    placeholder=config.search_placeholder
                />
                <ul class="split-layout__items" role="listbox">
                    {rows
                        .into_iter()
                        .map(|(pos, item)| {
                            let item_key = key(&item);
                            let selected_key = item_key.clone();
                            let content = match render_item {
                                Some(render) => render.run(item.clone()),
                                None => view! { <span>{label(&item)}</span> }.into_any(),
                            };
                            view! {
                                <li
                                    role="option"
                                    class="split-layout__item"
                                    class:split-layout__item--focused=move || focused.get() == Some(pos)
                                    class:split-layout__item--selected=move || {
                                        selected.with(|s| s.as_deref() == Some(selected_key.as_str()))
                                    }
                                    on:click=move |_| {
                                        focused.set(Some(pos));
                                        on_select.run(Some(item_key.clone()));
                                    }
                                >
                                    {content}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <Show when=move || filtered.with(|f| f.is_empty())>
                    <div class="split-layout__no-items">"No matches"</div>
                </Show>
            </div>
        }
    };

    let detail = move |with_back: bool| {
        let current = selected.get().and_then(|sel| {
            items.with(|all| all.iter().find(|item| key(item) == sel).cloned())
        });
        view! {
            <div class="split-layout__detail-panel">
                {with_back.then(|| view! {
                    <button class="button button--ghost split-layout__back" on:click=move |_| on_select.run(None)>
                        {icon("arrow-left")}
                        <span class="button__label">"Back"</span>
                    </button>
                })}
                {match current {
                    Some(item) => render_detail.run(item),
                    None => view! {
                        <div class="split-layout__placeholder">"Select an item to see its details"</div>
                    }
                    .into_any(),
                }}
            </div>
        }
    };

    view! {
        <Show when=move || !loading.get().unwrap_or(false) fallback=|| view! { <Skeleton /> }>
            <div class="split-layout" node_ref=container>
                {move || title.get().map(|t| view! { <h1 class="split-layout__title">{t}</h1> })}
                {move || match mode() {
                    SplitView::SideBySide => view! {
                        <div class="split-layout__panels">
                            <div
                                class="split-layout__master"
                                style=move || format!("width: {:.1}%", master_pct.get())
                            >
                                {master}
                            </div>
                            <div class="split-layout__handle" on:mousedown=start_drag></div>
                            <div class="split-layout__detail">{detail(false)}</div>
                        </div>
                    }
                    .into_any(),
                    SplitView::Master => view! { <div class="split-layout__stacked">{master}</div> }.into_any(),
                    SplitView::Detail => view! { <div class="split-layout__stacked">{detail(true)}</div> }.into_any(),
                }}
            </div>
        </Show>
    }
}
