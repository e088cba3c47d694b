use contracts::shared::layout::sections::SectionEntry;
use contracts::shared::schema::BusinessModule;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::icons::icon;
use crate::shared::layouts::WorkspaceLayout;
use crate::shared::schemas::use_schemas;

/// Start page: one tab per business module with its entities
#[component]
pub fn HomePage() -> impl IntoView {
    let schemas = use_schemas();
    let modules = schemas.modules();
    let tabs: Vec<SectionEntry> = modules
        .iter()
        .map(|(module, _)| SectionEntry::new(module.as_str(), module.label()))
        .collect();
    let current = RwSignal::new(None::<String>);

    let render_tab = Callback::new(move |id: String| {
        let entities = BusinessModule::ALL
            .into_iter()
            .find(|m| m.as_str() == id)
            .map(|m| schemas.registry().by_module(m))
            .unwrap_or_default();
        view! {
            <div class="entity-cards">
                {entities
                    .into_iter()
                    .map(|schema| view! {
                        <A href=format!("/e/{}", schema.slug()) attr:class="entity-card">
                            <span class="entity-card__icon">{icon(schema.identity.icon)}</span>
                            <span class="entity-card__name">{schema.identity.plural_name}</span>
                            <span class="entity-card__description">{schema.identity.description}</span>
                        </A>
                    })
                    .collect_view()}
            </div>
        }
        .into_any()
    });

    view! {
        <WorkspaceLayout
            title="Workspace"
            subtitle=format!("{} entities across {} modules", schemas.registry().len(), modules.len())
            tabs=tabs
            current=current
            on_change=Callback::new(move |id| current.set(Some(id)))
            render_tab=render_tab
        />
    }
}
