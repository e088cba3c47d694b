use crate::shared::icons::icon;
use leptos::prelude::*;

/// Page title block with an optional icon and subtitle; children render
/// as the action area on the right
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: Signal<String>,

    #[prop(optional, into)]
    subtitle: MaybeProp<String>,

    /// Icon name from the icon() helper
    #[prop(optional, into)]
    icon_name: Option<String>,

    children: Children,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__content">
                {icon_name.map(|name| view! {
                    <div class="page-header__icon">{icon(&name)}</div>
                })}
                <div class="page-header__text">
                    <h1 class="page-header__title">{move || title.get()}</h1>
                    {move || subtitle.get().filter(|s| !s.is_empty()).map(|s| view! {
                        <div class="page-header__subtitle">{s}</div>
                    })}
                </div>
            </div>
            <div class="page-header__actions">
                {children()}
            </div>
        </div>
    }
}
