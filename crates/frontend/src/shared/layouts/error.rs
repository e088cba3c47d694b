use contracts::shared::error_message::{get_error_message, http_status};
use leptos::prelude::*;

use crate::shared::components::{EmptyState, Skeleton, StateAction};

/// Full-page error with a human-readable message and an optional retry
#[component]
pub fn ErrorLayout(
    #[prop(into)]
    error: String,
    #[prop(optional, into)]
    title: Option<String>,
    #[prop(optional_no_strip)]
    on_retry: Option<Callback<()>>,
    /// Secondary way out, e.g. back to the home page
    #[prop(optional_no_strip)]
    secondary: Option<StateAction>,
    #[prop(optional, into)]
    loading: MaybeProp<bool>,
) -> impl IntoView {
    let icon_name = match http_status(&error) {
        Some(404) => "search-x",
        Some(401) | Some(403) => "lock",
        _ => "alert-triangle",
    };
    let title = title.unwrap_or_else(|| "Something went wrong".to_string());
    let message = get_error_message(&error);
    let retry = on_retry.map(|cb| StateAction::new("Try again", cb));

    view! {
        <Show when=move || !loading.get().unwrap_or(false) fallback=|| view! { <Skeleton /> }>
            <div class="error-layout" role="alert">
                <EmptyState
                    icon_name=icon_name
                    title=title.clone()
                    message=Some(message.clone())
                    primary=retry.clone()
                    secondary=secondary.clone()
                />
            </div>
        </Show>
    }
}
