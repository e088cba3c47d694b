//! Field values rendered for table cells, cards and detail rows

use contracts::shared::schema::{EntityRecord, FieldDef, FieldType, FieldValue};
use leptos::prelude::*;

use crate::shared::components::ui::{variant_for_color, Badge};

fn option_badge(field: &'static FieldDef, value: &str) -> AnyView {
    let color = field.option(value).and_then(|o| o.color);
    let label = field.option_label(value).to_string();
    view! { <Badge variant=variant_for_color(color)>{label}</Badge> }.into_any()
}

/// Typed rendering of a field; unset values render a muted placeholder
pub fn field_view(field: &'static FieldDef, record: &dyn EntityRecord) -> AnyView {
    let Some(value) = record.field_value(field.key).filter(|v| !v.is_empty()) else {
        return view! { <span class="field-value field-value--empty">"-"</span> }.into_any();
    };
    value_view(field, &value)
}

pub fn value_view(field: &'static FieldDef, value: &FieldValue) -> AnyView {
    match (field.field_type, value) {
        (FieldType::Select, FieldValue::Text(v)) => option_badge(field, v),
        (FieldType::MultiSelect | FieldType::Tags, FieldValue::List(items)) => {
            let badges = items
                .iter()
                .map(|v| option_badge(field, v))
                .collect_view();
            view! { <span class="field-value field-value--list">{badges}</span> }.into_any()
        }
        (FieldType::Switch, FieldValue::Bool(on)) => {
            let (variant, label) = if *on { ("success", "Yes") } else { ("neutral", "No") };
            view! { <Badge variant=variant>{label}</Badge> }.into_any()
        }
        (FieldType::Image, FieldValue::Text(src)) => {
            let src = src.clone();
            view! { <img class="field-value__image" src=src alt=field.label /> }.into_any()
        }
        (FieldType::Url, FieldValue::Text(url)) => {
            let (href, text) = (url.clone(), url.clone());
            view! {
                <a class="field-value__link" href=href target="_blank" rel="noopener"
                    on:click=|ev| ev.stop_propagation()>{text}</a>
            }
            .into_any()
        }
        (FieldType::Email, FieldValue::Text(email)) => {
            let (href, text) = (format!("mailto:{}", email), email.clone());
            view! { <a class="field-value__link" href=href>{text}</a> }.into_any()
        }
        (FieldType::Phone, FieldValue::Text(phone)) => {
            let (href, text) = (format!("tel:{}", phone), phone.clone());
            view! { <a class="field-value__link" href=href>{text}</a> }.into_any()
        }
        (FieldType::Color, FieldValue::Text(color)) => {
            let style = format!("background: {}", color);
            let text = color.clone();
            view! {
                <span class="field-value field-value--color">
                    <span class="field-value__swatch" style=style></span>
                    {text}
                </span>
            }
            .into_any()
        }
        _ => {
            let text = value.display(field);
            view! { <span class="field-value">{text}</span> }.into_any()
        }
    }
}

/// Label/value rows
#[component]
pub fn FieldRows<T>(fields: Vec<&'static FieldDef>, item: T) -> impl IntoView
where
    T: EntityRecord + Clone + Send + Sync + 'static,
{
    view! {
        <dl class="field-rows">
            {fields
                .into_iter()
                .map(|field| {
                    view! {
                        <div class="field-rows__row">
                            <dt class="field-rows__label">{field.label}</dt>
                            <dd class="field-rows__value">{field_view(field, &item)}</dd>
                        </div>
                    }
                })
                .collect_view()}
        </dl>
    }
}
