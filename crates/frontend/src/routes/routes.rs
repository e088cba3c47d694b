//! Route table. Entity routes resolve `:slug` against the schema registry
//! and remount their page whenever the slug, id or query changes.

use contracts::shared::layout::form::FormMode;
use contracts::shared::schema::{EntitySchema, ViewType};
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::{use_location, use_params_map, use_query_map};
use leptos_router::path;

use crate::dashboards::d001_dashboard_builder::DashboardBuilderPage;
use crate::domain::entity::ui::details::EntityDetailsPage;
use crate::domain::entity::ui::form::EntityFormPage;
use crate::domain::entity::ui::import::EntityImportPage;
use crate::domain::entity::ui::list::EntityListPage;
use crate::layout::Shell;
use crate::routes::use_go;
use crate::shared::components::StateAction;
use crate::shared::layouts::EmptyLayout;
use crate::shared::schemas::use_schemas;
use crate::system::pages::home::HomePage;
use crate::system::pages::notes::NotesPage;
use crate::system::pages::settings::SettingsPage;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/e/:slug") view=ListRoute />
                    <Route path=path!("/e/:slug/new") view=|| view! { <FormRoute mode=FormMode::Create /> } />
                    <Route path=path!("/e/:slug/import") view=ImportRoute />
                    <Route path=path!("/e/:slug/:id") view=DetailsRoute />
                    <Route path=path!("/e/:slug/:id/edit") view=|| view! { <FormRoute mode=FormMode::Edit /> } />
                    <Route path=path!("/dashboards/builder") view=DashboardBuilderPage />
                    <Route path=path!("/settings") view=SettingsPage />
                    <Route path=path!("/notes") view=NotesPage />
                </Routes>
            </Shell>
        </Router>
    }
}

/// Schema named by the `:slug` param
fn use_route_schema() -> Memo<Option<&'static EntitySchema>> {
    let schemas = use_schemas();
    let params = use_params_map();
    Memo::new_with_compare(
        move |_| params.with(|p| p.get("slug")).and_then(|slug| schemas.get(&slug)),
        schema_changed,
    )
}

/// Schemas are registry statics, so identity is pointer identity
fn schema_changed(
    prev: Option<&Option<&'static EntitySchema>>,
    next: Option<&Option<&'static EntitySchema>>,
) -> bool {
    match (prev, next) {
        (Some(Some(a)), Some(Some(b))) => !std::ptr::eq(*a, *b),
        (Some(None), Some(None)) => false,
        _ => true,
    }
}

fn use_param(name: &'static str) -> Memo<Option<String>> {
    let params = use_params_map();
    Memo::new(move |_| params.with(|p| p.get(name)))
}

pub fn use_query_param(name: &'static str) -> Memo<Option<String>> {
    let query = use_query_map();
    Memo::new(move |_| query.with(|q| q.get(name)).filter(|v| !v.is_empty()))
}

/// `?a=1&b=x%20y` as decoded pairs, in order
pub fn query_pairs(search: &str) -> Vec<(String, String)> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let (key, value) = part.split_once('=').unwrap_or((part, ""));
            let decode = |s: &str| {
                urlencoding::decode(&s.replace('+', " "))
                    .map(|d| d.into_owned())
                    .unwrap_or_else(|_| s.to_string())
            };
            (decode(key), decode(value))
        })
        .collect()
}

#[component]
fn ListRoute() -> impl IntoView {
    let schema = use_route_schema();
    let location = use_location();
    move || {
        let Some(schema) = schema.get() else {
            return view! { <UnknownEntity /> }.into_any();
        };
        let pairs = location.search.with(|s| query_pairs(s));
        let lookup = |key: &str| pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone());
        let subpage = lookup("subpage");
        let initial_view = lookup("view").and_then(|v| ViewType::from_str(&v));
        view! {
            <EntityListPage schema=schema subpage=subpage query=pairs initial_view=initial_view />
        }
        .into_any()
    }
}

#[component]
fn DetailsRoute() -> impl IntoView {
    let schema = use_route_schema();
    let id = use_param("id");
    let tab = use_query_param("tab");
    move || match (schema.get(), id.get()) {
        (Some(schema), Some(id)) => {
            view! { <EntityDetailsPage schema=schema id=id tab=tab.get_untracked() /> }.into_any()
        }
        _ => view! { <UnknownEntity /> }.into_any(),
    }
}

#[component]
fn FormRoute(mode: FormMode) -> impl IntoView {
    let schema = use_route_schema();
    let id = use_param("id");
    let from = use_query_param("from");
    move || match schema.get() {
        Some(schema) => view! {
            <EntityFormPage schema=schema mode=mode id=id.get() from=from.get() />
        }
        .into_any(),
        None => view! { <UnknownEntity /> }.into_any(),
    }
}

#[component]
fn ImportRoute() -> impl IntoView {
    let schema = use_route_schema();
    move || match schema.get() {
        Some(schema) if schema.permissions.create => {
            view! { <EntityImportPage schema=schema /> }.into_any()
        }
        Some(schema) => view! {
            <EmptyLayout
                icon_name="lock"
                title=format!("{} are read-only", schema.identity.plural_name)
                message=Some("Records of this kind cannot be created here.".to_string())
            />
        }
        .into_any(),
        None => view! { <UnknownEntity /> }.into_any(),
    }
}

#[component]
fn UnknownEntity() -> impl IntoView {
    let go = use_go();
    let home = StateAction::new("Go home", Callback::new(move |_| go.run("/".to_string())));
    view! {
        <EmptyLayout
            icon_name="search-x"
            title="Unknown entity"
            message=Some("No schema is registered under this address.".to_string())
            primary=Some(home)
        />
    }
}

#[component]
fn NotFound() -> impl IntoView {
    let go = use_go();
    let home = StateAction::new("Go home", Callback::new(move |_| go.run("/".to_string())));
    view! {
        <EmptyLayout
            icon_name="map-pin"
            title="Page not found"
            message=Some("Nothing lives at this address.".to_string())
            primary=Some(home)
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_pairs_are_decoded() {
        assert_eq!(
            query_pairs("?company_id=a%20b&view=kanban&flag"),
            vec![
                ("company_id".to_string(), "a b".to_string()),
                ("view".to_string(), "kanban".to_string()),
                ("flag".to_string(), String::new()),
            ]
        );
        assert!(query_pairs("").is_empty());
        assert!(query_pairs("?").is_empty());
    }

    #[test]
    fn route_schema_changes_by_identity() {
        use contracts::domain::a002_task::schema::TASK_SCHEMA;
        use contracts::domain::a005_venue::schema::VENUE_SCHEMA;

        let tasks: Option<&'static EntitySchema> = Some(&TASK_SCHEMA);
        let venues: Option<&'static EntitySchema> = Some(&VENUE_SCHEMA);
        assert!(!schema_changed(Some(&tasks), Some(&tasks)));
        assert!(schema_changed(Some(&tasks), Some(&venues)));
        assert!(schema_changed(Some(&None), Some(&tasks)));
        assert!(!schema_changed(Some(&None), Some(&None)));
        assert!(schema_changed(None, Some(&None)));
    }
}
