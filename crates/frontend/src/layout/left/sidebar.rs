//! Navigation sidebar: one collapsible group per business module,
//! one item per entity schema

use crate::shared::icons::icon;
use crate::shared::schemas::use_schemas;
use leptos::prelude::*;
use leptos_router::hooks::use_location;
use leptos_router::components::A;

/// Entity slug of the current `/e/:slug...` path
fn active_slug(path: &str) -> Option<&str> {
    path.strip_prefix("/e/")?.split(['/', '?']).next().filter(|s| !s.is_empty())
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let schemas = use_schemas();
    let location = use_location();
    let current = Memo::new(move |_| {
        location.pathname.with(|p| active_slug(p).map(str::to_string))
    });

    // Every module starts expanded
    let collapsed = RwSignal::new(Vec::<&'static str>::new());

    view! {
        <div class="app-sidebar__content">
            <A href="/" attr:class="app-sidebar__item">
                <div class="app-sidebar__item-content">
                    {icon("home")}
                    <span>"Home"</span>
                </div>
            </A>
            {schemas.modules().into_iter().map(|(module, entities)| {
                let group_id = module.as_str();
                let is_expanded = move || !collapsed.with(|c| c.contains(&group_id));
                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            on:click=move |_| {
                                collapsed.update(|items| {
                                    if let Some(pos) = items.iter().position(|x| *x == group_id) {
                                        items.remove(pos);
                                    } else {
                                        items.push(group_id);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                <span>{module.label()}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=is_expanded
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        <Show when=is_expanded>
                            <div class="app-sidebar__children">
                                {entities.iter().map(|&schema| {
                                    let slug = schema.slug();
                                    view! {
                                        <A href=format!("/e/{}", slug) attr:class="app-sidebar__link">
                                            <div
                                                class="app-sidebar__item"
                                                class:app-sidebar__item--active=move || {
                                                    current.with(|c| c.as_deref() == Some(slug))
                                                }
                                            >
                                                <div class="app-sidebar__item-content">
                                                    {icon(schema.identity.icon)}
                                                    <span>{schema.identity.plural_name}</span>
                                                </div>
                                            </div>
                                        </A>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_is_taken_from_entity_paths() {
        assert_eq!(active_slug("/e/tasks"), Some("tasks"));
        assert_eq!(active_slug("/e/tasks/42/edit"), Some("tasks"));
        assert_eq!(active_slug("/settings"), None);
        assert_eq!(active_slug("/e/"), None);
    }
}
