use leptos::prelude::*;

/// Placeholder shown while a layout is loading
#[component]
pub fn Skeleton(
    /// Number of placeholder rows
    #[prop(default = 6)]
    rows: usize,
    /// Draw a header bar above the rows
    #[prop(default = true)]
    header: bool,
) -> impl IntoView {
    view! {
        <div class="skeleton" aria-busy="true">
            {header.then(|| view! { <div class="skeleton__header"></div> })}
            {(0..rows)
                .map(|_| view! { <div class="skeleton__row"></div> })
                .collect_view()}
        </div>
    }
}
