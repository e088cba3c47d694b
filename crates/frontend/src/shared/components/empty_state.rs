use crate::shared::components::ui::Button;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// A button shown inside an empty or error state
#[derive(Clone)]
pub struct StateAction {
    pub label: String,
    pub on_click: Callback<()>,
}

impl StateAction {
    pub fn new(label: impl Into<String>, on_click: Callback<()>) -> Self {
        Self {
            label: label.into(),
            on_click,
        }
    }
}

/// Icon, title and message with up to two actions
#[component]
pub fn EmptyState(
    #[prop(into)]
    icon_name: String,
    #[prop(into)]
    title: String,
    #[prop(optional_no_strip)]
    message: Option<String>,
    #[prop(optional_no_strip)]
    primary: Option<StateAction>,
    #[prop(optional_no_strip)]
    secondary: Option<StateAction>,
) -> impl IntoView {
    view! {
        <div class="empty-state">
            <div class="empty-state__icon">{icon(&icon_name)}</div>
            <h3 class="empty-state__title">{title}</h3>
            {message.map(|m| view! { <p class="empty-state__message">{m}</p> })}
            <div class="empty-state__actions">
                {primary.map(|a| {
                    let cb = a.on_click;
                    view! {
                        <Button on_click=Callback::new(move |_| cb.run(()))>{a.label}</Button>
                    }
                })}
                {secondary.map(|a| {
                    let cb = a.on_click;
                    view! {
                        <Button variant="secondary" on_click=Callback::new(move |_| cb.run(()))>
                            {a.label}
                        </Button>
                    }
                })}
            </div>
        </div>
    }
}
