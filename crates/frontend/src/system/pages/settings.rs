use contracts::shared::layout::sections::SectionEntry;
use contracts::shared::schema::{
    lint_registry, LintRegistryResponse, SchemaIssue, SchemaLintReport,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::routes::routes::use_query_param;
use crate::routes::use_go;
use crate::shared::api_utils::{api_base, get_json};
use crate::shared::layouts::{SettingsLayout, SplitLayout};
use crate::shared::schemas::{use_schemas, SchemaContext};
use crate::shared::theme::{use_theme, Theme};

const GENERAL: &str = "general";
const APPEARANCE: &str = "appearance";
const SCHEMAS: &str = "schemas";

fn sections() -> Vec<SectionEntry> {
    vec![
        SectionEntry::new(GENERAL, "General").icon("settings").group("Workspace"),
        SectionEntry::new(APPEARANCE, "Appearance").icon("eye").group("Workspace"),
        SectionEntry::new(SCHEMAS, "Schemas").icon("check-square").group("Developer"),
    ]
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let current = use_query_param("section");
    let go = use_go();

    let render_section = Callback::new(move |id: String| match id.as_str() {
        APPEARANCE => view! { <AppearanceSection /> }.into_any(),
        SCHEMAS => view! { <SchemasSection /> }.into_any(),
        _ => view! { <GeneralSection /> }.into_any(),
    });

    view! {
        <SettingsLayout
            title="Settings"
            sections=sections()
            current=current
            on_change=Callback::new(move |id: String| go.run(format!("/settings?section={}", id)))
            render_section=render_section
        />
    }
}

#[component]
fn GeneralSection() -> impl IntoView {
    let schemas = use_schemas();
    view! {
        <dl class="field-rows">
            <dt>"Version"</dt>
            <dd>{env!("CARGO_PKG_VERSION")}</dd>
            <dt>"API"</dt>
            <dd>{api_base()}</dd>
            <dt>"Entities"</dt>
            <dd>{schemas.registry().len()}</dd>
            <dt>"Modules"</dt>
            <dd>{schemas.modules().len()}</dd>
        </dl>
    }
}

#[component]
fn AppearanceSection() -> impl IntoView {
    let theme = use_theme();
    view! {
        <fieldset class="form-section">
            <legend class="form-section__title">"Theme"</legend>
            {Theme::all()
                .into_iter()
                .map(|t| view! {
                    <label class="form-field__choice">
                        <input
                            type="radio"
                            name="theme"
                            prop:checked=move || theme.theme.get() == t
                            on:change=move |_| theme.set_theme(t)
                        />
                        {t.display_name()}
                    </label>
                })
                .collect_view()}
        </fieldset>
    }
}

/// Lint reports from the server, or computed locally when it is unreachable
async fn load_reports(schemas: SchemaContext) -> (Vec<SchemaLintReport>, bool) {
    match get_json::<LintRegistryResponse>("/api/schemas/lint").await {
        Ok(response) => (response.reports, false),
        Err(e) => {
            log::warn!("settings: lint endpoint failed ({}), linting locally", e);
            (lint_registry(schemas.registry()), true)
        }
    }
}

#[component]
fn SchemasSection() -> impl IntoView {
    let schemas = use_schemas();
    let reports = RwSignal::new(Vec::<SchemaLintReport>::new());
    let local = RwSignal::new(false);
    let loading = RwSignal::new(true);
    let selected = RwSignal::new(None::<String>);

    spawn_local(async move {
        let (loaded, is_local) = load_reports(schemas).await;
        reports.try_set(loaded);
        local.try_set(is_local);
        loading.try_set(false);
    });

    let summary = move || {
        reports.with(|r| {
            let invalid = r.iter().filter(|r| !r.is_valid()).count();
            format!("{} schemas, {} with errors", r.len(), invalid)
        })
    };

    view! {
        <p class="settings-layout__hint">
            {summary}
            <Show when=move || local.get()>" (checked in the browser)"</Show>
        </p>
        <SplitLayout<SchemaLintReport>
            items=reports
            label=|r: &SchemaLintReport| r.slug.clone()
            key=|r: &SchemaLintReport| r.slug.clone()
            selected=selected
            on_select=Callback::new(move |key| selected.set(key))
            render_item=Callback::new(|r: SchemaLintReport| view! {
                <span>{r.slug.clone()}</span>
                <span
                    class="badge"
                    class:badge--danger=!r.is_valid()
                    class:badge--success=r.is_valid()
                >
                    {if r.is_valid() { "ok".to_string() } else { format!("{} errors", r.errors.len()) }}
                </span>
            }
            .into_any())
            render_detail=Callback::new(|r: SchemaLintReport| view! { <LintReport report=r /> }.into_any())
            loading=loading
        />
    }
}

#[component]
fn LintReport(report: SchemaLintReport) -> impl IntoView {
    let issues = |title: &'static str, items: Vec<SchemaIssue>| {
        (!items.is_empty()).then(|| view! {
            <h3>{title}</h3>
            <ul class="lint-issues">
                {items
                    .into_iter()
                    .map(|issue| view! {
                        <li>
                            <code>{issue.location}</code>
                            " "
                            {issue.message}
                        </li>
                    })
                    .collect_view()}
            </ul>
        })
    };
    let clean = report.errors.is_empty() && report.warnings.is_empty();

    view! {
        <div class="lint-report">
            <h2>{report.slug.clone()}</h2>
            {clean.then(|| view! { <p>"No problems found"</p> })}
            {issues("Errors", report.errors)}
            {issues("Warnings", report.warnings)}
        </div>
    }
}
