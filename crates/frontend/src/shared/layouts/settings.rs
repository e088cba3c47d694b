//! Settings page: grouped section navigation on the left, section content
//! on the right

use contracts::shared::layout::sections::{grouped, resolve_current, SectionEntry};
use leptos::prelude::*;

use crate::shared::components::Skeleton;
use crate::shared::icons::icon;

#[component]
pub fn SettingsLayout(
    #[prop(into)]
    title: String,
    sections: Vec<SectionEntry>,
    /// Requested section; unknown or missing ids show the first one
    #[prop(into)]
    current: Signal<Option<String>>,
    on_change: Callback<String>,
    render_section: Callback<String, AnyView>,
    #[prop(optional, into)]
    loading: MaybeProp<bool>,
) -> impl IntoView {
    let groups = grouped(&sections);
    let sections = StoredValue::new(sections);
    let active = Memo::new(move |_| {
        let requested = current.get();
        sections.with_value(|s| resolve_current(s, requested.as_deref()).map(str::to_string))
    });
    let groups = StoredValue::new(groups);

    view! {
        <Show when=move || !loading.get().unwrap_or(false) fallback=|| view! { <Skeleton /> }>
            <div class="settings-layout">
                <nav class="settings-layout__nav">
                    <h1 class="settings-layout__title">{title.clone()}</h1>
                    {groups.get_value()
                        .into_iter()
                        .map(|(group, entries)| view! {
                            <div class="settings-layout__group">
                                {group.map(|g| view! { <div class="settings-layout__group-title">{g}</div> })}
                                {entries
                                    .into_iter()
                                    .map(|entry| {
                                        let id = entry.id.clone();
                                        let click_id = entry.id.clone();
                                        view! {
                                            <button
                                                class="settings-layout__item"
                                                class:settings-layout__item--active=move || {
                                                    active.with(|a| a.as_deref() == Some(id.as_str()))
                                                }
                                                on:click=move |_| on_change.run(click_id.clone())
                                            >
                                                {entry.icon.as_deref().map(icon)}
                                                <span>{entry.label}</span>
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        })
                        .collect_view()}
                </nav>
                <section class="settings-layout__content">
                    {move || active.get().map(|id| render_section.run(id))}
                </section>
            </div>
        </Show>
    }
}
