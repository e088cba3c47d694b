//! Action buttons shared by the list and detail layouts.
//!
//! Layouts never interpret a handler: a click is reported as
//! `(action_id, payload)` and the page dispatches it.

use contracts::shared::schema::{ActionDef, ActionPayload};
use leptos::prelude::*;

use crate::shared::async_callback::AsyncCallback;
use crate::shared::components::ui::Button;
use crate::shared::icons::icon;

pub type ActionArgs = (&'static str, ActionPayload);

/// Async `on_action` handler of the entity layouts
pub type OnAction = AsyncCallback<ActionArgs>;

/// Native confirm for actions that declare a prompt
pub fn confirm_action(action: &ActionDef) -> bool {
    match action.confirm {
        None => true,
        Some(prompt) => web_sys::window()
            .and_then(|w| w.confirm_with_message(prompt).ok())
            .unwrap_or(false),
    }
}

/// Confirm if needed, then run `on_action` with the busy flag raised
pub fn trigger_action(
    action: &'static ActionDef,
    payload: ActionPayload,
    on_action: OnAction,
    busy: RwSignal<bool>,
) {
    if !confirm_action(action) {
        return;
    }
    on_action.run_busy((action.id, payload), busy, |_| {});
}

#[component]
pub fn ActionButton(
    action: &'static ActionDef,
    /// Built on click so row payloads always carry the current values
    payload: Callback<(), ActionPayload>,
    on_action: OnAction,
    busy: RwSignal<bool>,
    #[prop(optional, into)]
    size: MaybeProp<String>,
) -> impl IntoView {
    let variant = if action.destructive { "danger" } else { "secondary" };

    view! {
        <Button
            variant=variant
            size=size
            title=action.label
            disabled=Signal::derive(move || busy.get())
            on_click=Callback::new(move |ev: leptos::ev::MouseEvent| {
                ev.stop_propagation();
                trigger_action(action, payload.run(()), on_action, busy);
            })
        >
            {action.icon.map(icon)}
            <span class="button__label">{action.label}</span>
        </Button>
    }
}

/// A row of buttons for the given actions; nothing when the list is empty
#[component]
pub fn ActionBar(
    actions: Vec<&'static ActionDef>,
    payload: Callback<(), ActionPayload>,
    on_action: OnAction,
    busy: RwSignal<bool>,
    #[prop(optional, into)]
    size: MaybeProp<String>,
) -> impl IntoView {
    (!actions.is_empty()).then(|| {
        view! {
            <div class="action-bar">
                {actions
                    .into_iter()
                    .map(|action| {
                        view! {
                            <ActionButton
                                action=action
                                payload=payload
                                on_action=on_action
                                busy=busy
                                size=size
                            />
                        }
                    })
                    .collect_view()}
            </div>
        }
    })
}
