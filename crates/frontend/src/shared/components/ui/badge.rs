use leptos::prelude::*;

/// Map a schema colour token to a badge variant
pub fn variant_for_color(color: Option<&str>) -> &'static str {
    match color {
        Some("primary") | Some("info") | Some("blue") => "primary",
        Some("success") | Some("green") => "success",
        Some("warning") | Some("orange") | Some("yellow") => "warning",
        Some("error") | Some("danger") | Some("red") => "error",
        _ => "neutral",
    }
}

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "warning", "error", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    children: Children,
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    };

    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge {} {}", variant_class(), additional_class())>
            {children()}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_colors_are_neutral() {
        assert_eq!(variant_for_color(Some("success")), "success");
        assert_eq!(variant_for_color(Some("danger")), "error");
        assert_eq!(variant_for_color(Some("#ff00ff")), "neutral");
        assert_eq!(variant_for_color(None), "neutral");
    }
}
