use leptos::prelude::*;

use crate::shared::components::{EmptyState, Skeleton, StateAction};

/// Full-page empty state
#[component]
pub fn EmptyLayout(
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
    #[prop(optional, into)]
    loading: MaybeProp<bool>,
) -> impl IntoView {
    view! {
        <Show when=move || !loading.get().unwrap_or(false) fallback=|| view! { <Skeleton /> }>
            <div class="empty-layout">
                <EmptyState
                    icon_name=icon_name.clone()
                    title=title.clone()
                    message=message.clone()
                    primary=primary.clone()
                    secondary=secondary.clone()
                />
            </div>
        </Show>
    }
}
