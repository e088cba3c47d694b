//! Import wizard: paste JSON, review the parsed rows, then create them

mod view_model;

pub use view_model::ImportViewModel;

use contracts::shared::layout::wizard::{WizardNavigation, WizardStep};
use contracts::shared::schema::EntitySchema;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::layout::global_context::{use_app_context, NoticeKind};
use crate::routes::use_go;
use crate::shared::layouts::{FieldRows, WizardLayout, WizardLayoutConfig};
use view_model::{STEP_EXISTING, STEP_PASTE, STEP_REVIEW};

const PREVIEW_ROWS: usize = 20;

fn import_steps() -> Vec<WizardStep> {
    vec![
        WizardStep::new("paste", "Paste data")
            .description("A JSON object or an array of objects keyed by field"),
        WizardStep::new("review", "Review").description("Rows with problems must be fixed first"),
        WizardStep::new("existing", "Existing records")
            .description("Choose what happens to rows that carry an id")
            .optional(),
    ]
}

#[component]
pub fn EntityImportPage(schema: &'static EntitySchema) -> impl IntoView {
    let vm = ImportViewModel::new(schema);
    let app = use_app_context();
    let go = use_go();
    let list_path = format!("/e/{}", schema.slug());

    let config = WizardLayoutConfig {
        navigation: WizardNavigation {
            allow_back: true,
            allow_skip: true,
        },
        finish_label: "Import".to_string(),
        ..WizardLayoutConfig::new(format!("Import {}", schema.identity.plural_name), import_steps())
    };

    let finish = {
        let list_path = list_path.clone();
        Callback::new(move |_| {
            if vm.submitting.get_untracked() {
                return;
            }
            vm.submitting.set(true);
            let list_path = list_path.clone();
            spawn_local(async move {
                let summary = vm.import().await;
                vm.submitting.try_set(false);
                let kind = if summary.failed > 0 { NoticeKind::Error } else { NoticeKind::Success };
                app.notify(kind, format!("Import finished: {}", summary.message()));
                go.run(list_path);
            });
        })
    };

    view! {
        <WizardLayout
            config=config
            current_step=vm.step
            on_step_change=Callback::new(move |step| vm.step.set(step))
            on_finish=finish
            on_cancel=Callback::new(move |_| go.run(list_path.clone()))
            is_step_valid=Signal::derive(move || vm.is_step_valid())
            is_submitting=vm.submitting
        >
            {move || match vm.step.get() {
                STEP_PASTE => view! { <PasteStep vm=vm /> }.into_any(),
                STEP_REVIEW => view! { <ReviewStep vm=vm /> }.into_any(),
                STEP_EXISTING => view! { <ExistingStep vm=vm /> }.into_any(),
                _ => ().into_any(),
            }}
        </WizardLayout>
    }
}

#[component]
fn PasteStep(vm: ImportViewModel) -> impl IntoView {
    let hint = vm
        .schema
        .form_fields()
        .iter()
        .map(|f| f.key)
        .collect::<Vec<_>>()
        .join(", ");

    view! {
        <div class="import-step">
            <p class="import-step__hint">{format!("Fields: {}", hint)}</p>
            <textarea
                class="form-field__input form-field__input--multiline import-step__input"
                rows="14"
                placeholder="[{ \"title\": \"...\" }]"
                prop:value=move || vm.text.get()
                on:input=move |ev| vm.text.set(event_target_value(&ev))
            ></textarea>
            {move || {
                let text_empty = vm.text.with(|t| t.trim().is_empty());
                vm.parsed.with(|p| match p {
                    Err(e) if !text_empty => Some(view! { <div class="form-field__error">{e.clone()}</div> }.into_any()),
                    Ok(rows) => Some(view! {
                        <div class="import-step__ok">{format!("{} rows ready", rows.len())}</div>
                    }.into_any()),
                    _ => None,
                })
            }}
        </div>
    }
}

#[component]
fn ReviewStep(vm: ImportViewModel) -> impl IntoView {
    let schema = vm.schema;
    let rows = vm.parsed.get_untracked().unwrap_or_default();
    let total = rows.len();
    let with_problems = rows.iter().filter(|r| !r.problems.is_empty()).count();

    view! {
        <div class="import-step">
            <p class="import-step__summary">
                {format!("{} rows, {} with problems", total, with_problems)}
            </p>
            <ul class="import-review">
                {rows
                    .into_iter()
                    .take(PREVIEW_ROWS)
                    .enumerate()
                    .map(|(index, row)| {
                        let title = schema.title_of(&row.record);
                        let has_problems = !row.problems.is_empty();
                        view! {
                            <li class="import-review__row" class:import-review__row--invalid=has_problems>
                                <div class="import-review__title">
                                    {format!("{}. {}", index + 1, if title.is_empty() { "(untitled)".to_string() } else { title })}
                                </div>
                                {row.problems
                                    .into_iter()
                                    .map(|p| view! { <div class="form-field__error">{p}</div> })
                                    .collect_view()}
                                <details>
                                    <summary>"Values"</summary>
                                    <FieldRows fields=schema.form_fields() item=row.record />
                                </details>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            {(total > PREVIEW_ROWS).then(|| view! {
                <p class="import-step__more">{format!("and {} more", total - PREVIEW_ROWS)}</p>
            })}
        </div>
    }
}

#[component]
fn ExistingStep(vm: ImportViewModel) -> impl IntoView {
    let with_ids = vm
        .parsed
        .with_untracked(|p| p.as_ref().map_or(0, |rows| rows.iter().filter(|r| r.has_id).count()));

    view! {
        <div class="import-step">
            <p>{format!("{} rows carry an id.", with_ids)}</p>
            <label class="form-field__choice">
                <input
                    type="checkbox"
                    prop:checked=move || vm.update_existing.get()
                    on:change=move |ev| vm.update_existing.set(event_target_checked(&ev))
                />
                "Update those records instead of creating copies"
            </label>
            <p class="import-step__hint">
                {move || if vm.update_existing.get() {
                    "Rows with an id are sent as updates."
                } else {
                    "Every row is created as a new record."
                }}
            </p>
        </div>
    }
}
