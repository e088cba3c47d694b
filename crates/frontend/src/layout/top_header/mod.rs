//! Top navigation bar: sidebar toggle, brand, theme and settings

use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use crate::shared::theme::{use_theme, Theme};
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_app_context();
    let theme = use_theme();

    let is_sidebar_visible = move || ctx.left_open.get();
    let is_dark = move || theme.theme.get() == Theme::Dark;

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <A href="/" attr:class="top-header__title">"Business Workspace"</A>
            </div>

            <div class="top-header__actions">
                <A href="/notes" attr:class="top-header__icon-btn" attr:title="Notes">
                    {icon("file-text")}
                </A>
                <A href="/dashboards/builder" attr:class="top-header__icon-btn" attr:title="Dashboard builder">
                    {icon("layout-dashboard")}
                </A>
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| theme.toggle()
                    title=move || if is_dark() { "Switch to light theme" } else { "Switch to dark theme" }
                >
                    {move || if is_dark() { icon("sun") } else { icon("moon") }}
                </button>
                <A href="/settings" attr:class="top-header__icon-btn" attr:title="Settings">
                    {icon("settings")}
                </A>
            </div>
        </div>
    }
}
