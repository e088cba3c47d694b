use leptos::prelude::*;
use thaw::{Spinner, SpinnerSize};

use crate::shared::icons::icon;

/// CSS classes for a variant/size pair; unknown variants render as primary
pub fn button_class(variant: Option<&str>, size: Option<&str>, extra: Option<&str>) -> String {
    let mut classes = vec!["button"];
    classes.push(match variant.unwrap_or("primary") {
        "secondary" => "button--secondary",
        "ghost" => "button--ghost",
        "danger" => "button--danger",
        _ => "button--primary",
    });
    if size == Some("sm") {
        classes.push("button--small");
    }
    if let Some(extra) = extra.filter(|c| !c.is_empty()) {
        classes.push(extra);
    }
    classes.join(" ")
}

/// Themed button. `busy` disables it and marks it `aria-busy` while an
/// async handler runs.
#[component]
pub fn Button(
    /// "primary" (default), "secondary", "ghost" or "danger"
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// "md" (default) or "sm"
    #[prop(optional, into)]
    size: MaybeProp<String>,
    #[prop(optional, into)]
    class: MaybeProp<String>,
    #[prop(optional, into)]
    title: MaybeProp<String>,
    /// Leading icon
    #[prop(optional)]
    icon_name: Option<&'static str>,
    #[prop(optional, into)]
    button_type: MaybeProp<String>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    #[prop(optional, into)]
    busy: MaybeProp<bool>,
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let is_busy = move || busy.get().unwrap_or(false);
    let classes = move || {
        button_class(
            variant.get().as_deref(),
            size.get().as_deref(),
            class.get().as_deref(),
        )
    };

    view! {
        <button
            type=move || button_type.get().unwrap_or_else(|| "button".to_string())
            title=move || title.get()
            class=classes
            aria-busy=move || is_busy().then_some("true")
            disabled=move || disabled.get().unwrap_or(false) || is_busy()
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {move || is_busy().then(|| view! { <Spinner size=SpinnerSize::Tiny /> })}
            {icon_name.map(icon)}
            {children()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classes_follow_variant_and_size() {
        assert_eq!(button_class(None, None, None), "button button--primary");
        assert_eq!(
            button_class(Some("ghost"), Some("sm"), Some("list-action")),
            "button button--ghost button--small list-action"
        );
        assert_eq!(button_class(Some("bogus"), Some("md"), Some("")), "button button--primary");
    }
}
