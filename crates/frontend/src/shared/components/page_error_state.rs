use crate::shared::components::empty_state::{EmptyState, StateAction};
use contracts::shared::error_message::get_error_message;
use leptos::prelude::*;

/// Load failure with a single user-triggered retry
#[component]
pub fn PageErrorState(
    #[prop(into)]
    error: String,
    #[prop(optional_no_strip)]
    on_retry: Option<Callback<()>>,
) -> impl IntoView {
    let message = get_error_message(&error);
    let retry = on_retry.map(|cb| StateAction::new("Try again", cb));

    view! {
        <div class="page-error-state" role="alert">
            <EmptyState
                icon_name="alert-triangle"
                title="Could not load this page"
                message=Some(message)
                primary=retry
            />
        </div>
    }
}
