//! Create/edit form built from the schema's form sections

use chrono::Utc;
use contracts::shared::error_message::get_error_message;
use contracts::shared::layout::form::{FormMode, FormState};
use contracts::shared::schema::{EntityRecord, EntitySchema, FieldDef, FieldType, Record};
use leptos::prelude::*;

use crate::shared::async_callback::AsyncCallback;
use crate::shared::components::ui::Button;
use crate::shared::components::{PageHeader, Skeleton};

#[component]
pub fn FormLayout<T>(
    schema: &'static EntitySchema,
    mode: FormMode,
    /// Record to edit; the form initialises once it arrives
    #[prop(optional, into)]
    record: Option<Signal<Option<T>>>,
    /// Values applied over the defaults of a new record
    #[prop(optional_no_strip)]
    prefill: Option<Record>,
    #[prop(optional, into)]
    loading: MaybeProp<bool>,
    #[prop(optional, into)]
    saving: MaybeProp<bool>,
    on_submit: AsyncCallback<Record>,
    #[prop(optional)]
    on_cancel: Option<Callback<()>>,
) -> impl IntoView
where
    T: EntityRecord + Clone + Send + Sync + 'static,
{
    let initial = match mode {
        FormMode::Create => {
            let mut state = FormState::create(schema, Utc::now());
            if let Some(prefill) = &prefill {
                for (key, value) in &prefill.values {
                    state.set(key, value.clone());
                }
            }
            Some(state)
        }
        FormMode::Edit => None,
    };
    let form = RwSignal::new(initial);
    let submitting = RwSignal::new(false);
    let submit_error = RwSignal::new(None::<String>);

    if let (FormMode::Edit, Some(record)) = (mode, record) {
        Effect::new(move |_| {
            if let Some(item) = record.get() {
                form.set(Some(FormState::edit(schema, Record::snapshot(schema, &item))));
            }
        });
    }

    let is_saving = move || saving.get().unwrap_or(false) || submitting.get();
    let is_loading = move || loading.get().unwrap_or(false) || form.with(|f| f.is_none());
    let submit_disabled = Signal::derive(move || {
        let saving = is_saving();
        form.with(|f| f.as_ref().map(|f| f.is_submit_disabled(saving)).unwrap_or(true))
    });
    let is_dirty = move || form.with(|f| f.as_ref().is_some_and(|f| f.is_dirty()));

    let submit = move || {
        form.update(|f| {
            if let Some(f) = f {
                f.mark_submitted();
            }
        });
        if submit_disabled.get_untracked() {
            return;
        }
        let Some(values) = form.with_untracked(|f| f.as_ref().map(|f| f.record().clone())) else {
            return;
        };
        submit_error.set(None);
        on_submit.run_busy(values, submitting, move |result| match result {
            Ok(()) => {
                form.try_update(|f| {
                    if let Some(f) = f {
                        f.commit();
                    }
                });
            }
            Err(e) => {
                submit_error.try_set(Some(get_error_message(&e)));
            }
        });
    };

    let sections = move || -> Vec<(Option<&'static str>, Option<&'static str>, Vec<&'static FieldDef>)> {
        let declared = schema.layouts.form.sections;
        if declared.is_empty() {
            return vec![(None, None, schema.form_fields())];
        }
        let mut out: Vec<_> = declared
            .iter()
            .map(|s| {
                let fields = s
                    .fields
                    .iter()
                    .filter_map(|k| schema.field(k))
                    .filter(|f| f.display.in_form)
                    .collect::<Vec<_>>();
                (Some(s.title), s.description, fields)
            })
            .collect();
        let placed: Vec<&str> = out.iter().flat_map(|(_, _, f)| f.iter().map(|f| f.key)).collect();
        let rest: Vec<_> = schema
            .form_fields()
            .into_iter()
            .filter(|f| !placed.contains(&f.key))
            .collect();
        if !rest.is_empty() {
            out.push((Some("Other"), None, rest));
        }
        out
    };
    let columns = schema.layouts.form.columns.clamp(1, 3);

    view! {
        <Show when=move || !is_loading() fallback=|| view! { <Skeleton rows=8 /> }>
            <div class="form-layout" data-entity=schema.slug()>
                <PageHeader title=mode.title(schema) icon_name=schema.identity.icon>
                    {on_cancel.map(|cb| view! {
                        <Button variant="ghost" on_click=Callback::new(move |_| cb.run(()))>
                            "Cancel"
                        </Button>
                    })}
                </PageHeader>

                {move || submit_error.get().map(|e| view! {
                    <div class="form-layout__error" role="alert">{e}</div>
                })}

                <form
                    class="form-layout__form"
                    novalidate=true
                    on:submit=move |ev| {
                        ev.prevent_default();
                        submit();
                    }
                >
                    {sections()
                        .into_iter()
                        .map(|(title, description, fields)| view! {
                            <fieldset class="form-section">
                                {title.map(|t| view! { <legend class="form-section__title">{t}</legend> })}
                                {description.map(|d| view! { <p class="form-section__description">{d}</p> })}
                                <div class=format!("form-grid form-grid--cols-{}", columns)>
                                    {fields
                                        .into_iter()
                                        .map(|field| view! { <FormField field=field form=form /> })
                                        .collect_view()}
                                </div>
                            </fieldset>
                        })
                        .collect_view()}

                    <div class="form-layout__footer">
                        <Show when=is_dirty>
                            <Button
                                variant="ghost"
                                on_click=Callback::new(move |_| form.update(|f| {
                                    if let Some(f) = f {
                                        f.reset();
                                    }
                                }))
                            >
                                "Reset"
                            </Button>
                        </Show>
                        <Button button_type="submit" disabled=submit_disabled>
                            {move || if is_saving() { "Saving…" } else { mode.submit_label() }}
                        </Button>
                    </div>
                </form>
            </div>
        </Show>
    }
}

/// One labelled input with its validation message
#[component]
fn FormField(field: &'static FieldDef, form: RwSignal<Option<FormState>>) -> impl IntoView {
    let key = field.key;
    let value = move || form.with(|f| f.as_ref().map(|f| f.input_value(key)).unwrap_or_default());
    let set_raw = move |raw: String| {
        form.update(|f| {
            if let Some(f) = f {
                f.set_input(key, &raw);
            }
        })
    };
    let error = move || form.with(|f| f.as_ref().and_then(|f| f.visible_error(key)));
    let input_id = format!("field-{}", key);
    let placeholder = field.placeholder.unwrap_or_default();

    let control = match field.field_type {
        FieldType::Textarea | FieldType::RichText | FieldType::Json => view! {
            <textarea
                id=input_id.clone()
                class="form-field__input form-field__input--multiline"
                placeholder=placeholder
                prop:value=value
                on:input=move |ev| set_raw(event_target_value(&ev))
            ></textarea>
        }
        .into_any(),
        FieldType::Select => view! {
            <select
                id=input_id.clone()
                class="form-field__input"
                on:change=move |ev| set_raw(event_target_value(&ev))
            >
                <option value="" selected=move || value().is_empty()>
                    {placeholder.to_string()}
                </option>
                {field
                    .options
                    .iter()
                    .map(|opt| {
                        let option_value = opt.value;
                        view! {
                            <option value=option_value selected=move || value() == option_value>
                                {opt.label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        }
        .into_any(),
        FieldType::MultiSelect => view! {
            <div class="form-field__choices" id=input_id.clone()>
                {field
                    .options
                    .iter()
                    .map(|opt| {
                        let option_value = opt.value;
                        let checked = move || {
                            form.with(|f| {
                                f.as_ref()
                                    .and_then(|f| f.value(key).as_list().map(|l| l.iter().any(|v| v == option_value)))
                                    .unwrap_or(false)
                            })
                        };
                        view! {
                            <label class="form-field__choice">
                                <input
                                    type="checkbox"
                                    prop:checked=checked
                                    on:change=move |_| toggle_choice(form, key, option_value)
                                />
                                {opt.label}
                            </label>
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_any(),
        FieldType::Switch => view! {
            <input
                id=input_id.clone()
                type="checkbox"
                class="form-field__switch"
                prop:checked=move || value() == "true"
                on:change=move |ev| set_raw(event_target_checked(&ev).to_string())
            />
        }
        .into_any(),
        other => view! {
            <input
                id=input_id.clone()
                type=input_type(other)
                step=step_for(other)
                class="form-field__input"
                placeholder=placeholder
                prop:value=value
                on:input=move |ev| set_raw(event_target_value(&ev))
            />
        }
        .into_any(),
    };

    view! {
        <div class="form-field" class:form-field--invalid=move || error().is_some()>
            <label class="form-field__label" for=input_id>
                {field.label}
                {(!field.is_optional()).then(|| view! { <span class="form-field__required">"*"</span> })}
            </label>
            {control}
            {field.help.map(|h| view! { <div class="form-field__help">{h}</div> })}
            {move || error().map(|e| view! { <div class="form-field__error">{e}</div> })}
        </div>
    }
}

fn toggle_choice(form: RwSignal<Option<FormState>>, key: &'static str, option: &'static str) {
    form.update(|f| {
        let Some(f) = f else { return };
        let mut items: Vec<String> = f.value(key).as_list().map(<[String]>::to_vec).unwrap_or_default();
        match items.iter().position(|v| v == option) {
            Some(pos) => {
                items.remove(pos);
            }
            None => items.push(option.to_string()),
        }
        f.set_input(key, &items.join(","));
    });
}

fn input_type(field_type: FieldType) -> &'static str {
    match field_type {
        FieldType::Number | FieldType::Currency | FieldType::Percent | FieldType::Rating => {
            "number"
        }
        FieldType::Date => "date",
        FieldType::DateTime => "datetime-local",
        FieldType::Time => "time",
        FieldType::Email => "email",
        FieldType::Phone => "tel",
        FieldType::Url | FieldType::Image | FieldType::File => "url",
        FieldType::Color => "color",
        _ => "text",
    }
}

fn step_for(field_type: FieldType) -> Option<&'static str> {
    match field_type {
        FieldType::Currency => Some("0.01"),
        FieldType::Number | FieldType::Percent => Some("any"),
        FieldType::Rating => Some("1"),
        _ => None,
    }
}
