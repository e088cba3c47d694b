//! Workspace: page header with tabbed areas below it

use contracts::shared::layout::sections::{resolve_current, SectionEntry};
use leptos::prelude::*;

use crate::shared::components::{PageHeader, Skeleton};
use crate::shared::icons::icon;

#[component]
pub fn WorkspaceLayout(
    #[prop(into)]
    title: String,
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,
    tabs: Vec<SectionEntry>,
    #[prop(into)]
    current: Signal<Option<String>>,
    on_change: Callback<String>,
    render_tab: Callback<String, AnyView>,
    #[prop(optional, into)]
    loading: MaybeProp<bool>,
    /// Header actions
    #[prop(optional)]
    actions: Option<ChildrenFn>,
) -> impl IntoView {
    let tabs = StoredValue::new(tabs);
    let active = Memo::new(move |_| {
        let requested = current.get();
        tabs.with_value(|t| resolve_current(t, requested.as_deref()).map(str::to_string))
    });

    let header = move || {
        let actions = actions.clone();
        view! {
            <PageHeader title=title.clone() subtitle=subtitle>
                {actions.map(|a| a())}
            </PageHeader>
        }
    };

    view! {
        <Show when=move || !loading.get().unwrap_or(false) fallback=|| view! { <Skeleton /> }>
            <div class="workspace-layout">
                {header()}
                <div class="tab-strip" role="tablist">
                    {tabs.get_value()
                        .into_iter()
                        .map(|tab| {
                            let id = tab.id.clone();
                            let click_id = tab.id.clone();
                            view! {
                                <button
                                    role="tab"
                                    class="tab-strip__tab"
                                    class:tab-strip__tab--active=move || {
                                        active.with(|a| a.as_deref() == Some(id.as_str()))
                                    }
                                    on:click=move |_| on_change.run(click_id.clone())
                                >
                                    {tab.icon.as_deref().map(icon)}
                                    <span>{tab.label}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="workspace-layout__content">
                    {move || active.get().map(|id| render_tab.run(id))}
                </div>
            </div>
        </Show>
    }
}
