//! Zoomable, pannable canvas with a tool palette.
//!
//! Shortcuts: Ctrl/Cmd `+` `-` `0` for zoom, Ctrl/Cmd+Z and Ctrl/Cmd+Shift+Z
//! for history, bare `V` `H` `M` for tools and `G` for the grid.

use contracts::shared::layout::canvas::{
    command_for, CanvasCommand, CanvasState, CanvasTool, DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM,
    SLIDER_STEP,
};
use leptos::prelude::*;
use thaw::{Flex, FlexAlign, FlexGap};
use web_sys::MouseEvent;

use crate::shared::components::Skeleton;
use crate::shared::icons::icon;
use crate::shared::keyboard::{is_typing, use_scoped_keydown};

#[derive(Debug, Clone, Copy)]
pub struct CanvasLayoutConfig {
    pub min_zoom: u32,
    pub max_zoom: u32,
}

impl Default for CanvasLayoutConfig {
    fn default() -> Self {
        Self {
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
        }
    }
}

#[component]
pub fn CanvasLayout(
    #[prop(optional)]
    config: Option<CanvasLayoutConfig>,
    #[prop(optional, into)]
    title: MaybeProp<String>,
    #[prop(optional)]
    on_undo: Option<Callback<()>>,
    #[prop(optional)]
    on_redo: Option<Callback<()>>,
    #[prop(optional, into)]
    can_undo: MaybeProp<bool>,
    #[prop(optional, into)]
    can_redo: MaybeProp<bool>,
    #[prop(optional, into)]
    loading: MaybeProp<bool>,
    /// Properties panel on the right
    #[prop(optional)]
    sidebar: Option<ChildrenFn>,
    children: ChildrenFn,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let state = RwSignal::new(CanvasState::with_zoom_bounds(config.min_zoom, config.max_zoom));
    let drag_from = RwSignal::new(None::<(f64, f64)>);

    let run = move |command: CanvasCommand| {
        let forwarded = state.try_update(|s| s.apply(command)).flatten();
        match forwarded {
            Some(CanvasCommand::Undo) => {
                if let Some(cb) = on_undo {
                    cb.run(());
                }
            }
            Some(CanvasCommand::Redo) => {
                if let Some(cb) = on_redo {
                    cb.run(());
                }
            }
            _ => {}
        }
    };

    use_scoped_keydown("canvas", move |chord, ev| {
        if is_typing(ev) {
            return;
        }
        if let Some(command) = command_for(chord) {
            ev.prevent_default();
            run(command);
        }
    });

    let zoom = move || state.with(|s| s.zoom.value());
    let tool = move || state.with(|s| s.tool);

    let on_mouse_down = move |ev: MouseEvent| {
        if tool() == CanvasTool::Hand {
            drag_from.set(Some((ev.client_x() as f64, ev.client_y() as f64)));
        }
    };
    let on_mouse_move = move |ev: MouseEvent| {
        let Some((x, y)) = drag_from.get_untracked() else {
            return;
        };
        let (nx, ny) = (ev.client_x() as f64, ev.client_y() as f64);
        state.update(|s| s.pan_by(nx - x, ny - y));
        drag_from.set(Some((nx, ny)));
    };
    let stop_drag = move |_: MouseEvent| drag_from.set(None);

    let content_style = move || {
        state.with(|s| {
            format!(
                "transform: translate({}px, {}px) scale({}); transform-origin: 0 0;",
                s.pan.0,
                s.pan.1,
                s.zoom.scale()
            )
        })
    };

    view! {
        <Show when=move || !loading.get().unwrap_or(false) fallback=|| view! { <Skeleton /> }>
            <div class="canvas-layout">
                <div class="canvas-layout__toolbar">
                    {move || title.get().map(|t| view! { <span class="canvas-layout__title">{t}</span> })}
                    <div class="canvas-layout__tools" role="group">
                        {CanvasTool::ALL
                            .into_iter()
                            .map(|t| view! {
                                <button
                                    class="canvas-layout__tool"
                                    class:canvas-layout__tool--active=move || tool() == t
                                    title=t.label()
                                    on:click=move |_| run(CanvasCommand::Tool(t))
                                >
                                    {icon(t.icon())}
                                </button>
                            })
                            .collect_view()}
                    </div>
                    <button
                        class="canvas-layout__tool"
                        class:canvas-layout__tool--active=move || state.with(|s| s.show_grid)
                        title="Grid (G)"
                        on:click=move |_| run(CanvasCommand::ToggleGrid)
                    >
                        {icon("grid")}
                    </button>
                    <Flex class="canvas-layout__history" gap=FlexGap::Small>
                        <button
                            class="canvas-layout__tool"
                            title="Undo"
                            disabled=move || on_undo.is_none() || !can_undo.get().unwrap_or(true)
                            on:click=move |_| run(CanvasCommand::Undo)
                        >
                            "↶"
                        </button>
                        <button
                            class="canvas-layout__tool"
                            title="Redo"
                            disabled=move || on_redo.is_none() || !can_redo.get().unwrap_or(true)
                            on:click=move |_| run(CanvasCommand::Redo)
                        >
                            "↷"
                        </button>
                    </Flex>
                    <Flex class="canvas-layout__zoom" align=FlexAlign::Center gap=FlexGap::Small>
                        <button
                            class="canvas-layout__tool"
                            title="Zoom out"
                            disabled=move || !state.with(|s| s.zoom.can_zoom_out())
                            on:click=move |_| run(CanvasCommand::ZoomOut)
                        >
                            {icon("minus")}
                        </button>
                        <input
                            type="range"
                            class="canvas-layout__slider"
                            min=config.min_zoom.to_string()
                            max=config.max_zoom.to_string()
                            step=SLIDER_STEP.to_string()
                            prop:value=move || zoom().to_string()
                            on:input=move |ev| {
                                if let Ok(value) = event_target_value(&ev).parse::<u32>() {
                                    state.update(|s| s.zoom.set(value));
                                }
                            }
                        />
                        <button
                            class="canvas-layout__tool"
                            title="Zoom in"
                            disabled=move || !state.with(|s| s.zoom.can_zoom_in())
                            on:click=move |_| run(CanvasCommand::ZoomIn)
                        >
                            {icon("plus")}
                        </button>
                        <button
                            class="canvas-layout__zoom-value"
                            title="Reset zoom"
                            on:click=move |_| run(CanvasCommand::ZoomReset)
                        >
                            {move || format!("{}%", zoom())}
                        </button>
                    </Flex>
                </div>

                <div class="canvas-layout__main">
                    <div
                        class="canvas-layout__viewport"
                        class:canvas-layout__viewport--grid=move || state.with(|s| s.show_grid)
                        style=move || format!("cursor: {}", tool().cursor())
                        on:mousedown=on_mouse_down
                        on:mousemove=on_mouse_move
                        on:mouseup=stop_drag
                        on:mouseleave=stop_drag
                    >
                        <div class="canvas-layout__content" style=content_style>
                            {children()}
                        </div>
                    </div>
                    {sidebar.clone().map(|panel| view! {
                        <aside class="canvas-layout__sidebar">{panel()}</aside>
                    })}
                </div>
            </div>
        </Show>
    }
}
