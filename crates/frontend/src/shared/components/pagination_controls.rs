use leptos::prelude::*;

use crate::shared::icons::icon;

const PAGE_SIZES: [usize; 4] = [10, 25, 50, 100];

/// Sizes offered in the picker; a schema's own page size is always one of them
pub fn page_size_options(current: usize) -> Vec<usize> {
    let mut sizes = PAGE_SIZES.to_vec();
    if current > 0 && !sizes.contains(&current) {
        sizes.push(current);
        sizes.sort_unstable();
    }
    sizes
}

/// 1-based first and last row shown on `page`; `(0, 0)` when there are no rows
pub fn row_range(page: usize, page_size: usize, total: usize) -> (usize, usize) {
    if total == 0 {
        return (0, 0);
    }
    let size = page_size.max(1);
    let first = (page * size + 1).min(total);
    (first, (first + size - 1).min(total))
}

/// Page navigation under a list body. `page` is 0-based and already clamped.
#[component]
pub fn PaginationControls(
    page: usize,
    page_count: usize,
    total: usize,
    #[prop(into)]
    page_size: Signal<usize>,
    on_page_change: Callback<usize>,
    on_page_size_change: Callback<usize>,
) -> impl IntoView {
    let last = page_count.saturating_sub(1);
    let nav = move |target: usize, disabled: bool, title: &'static str, icon_name: &'static str| {
        view! {
            <button
                class="pagination-btn"
                title=title
                disabled=disabled
                on:click=move |_| on_page_change.run(target)
            >
                {icon(icon_name)}
            </button>
        }
    };

    let summary = move || {
        let (first, to) = row_range(page, page_size.get(), total);
        format!("{}–{} of {}", first, to, total)
    };

    view! {
        <nav class="pagination-controls" aria-label="Pagination">
            {nav(0, page == 0, "First page", "chevrons-left")}
            {nav(page.saturating_sub(1), page == 0, "Previous page", "chevron-left")}
            <span class="pagination-info">{summary}</span>
            {nav((page + 1).min(last), page >= last, "Next page", "chevron-right")}
            {nav(last, page >= last, "Last page", "chevrons-right")}
            <select
                class="page-size-select"
                title="Rows per page"
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                        on_page_size_change.run(size);
                    }
                }
            >
                {move || {
                    let current = page_size.get();
                    page_size_options(current)
                        .into_iter()
                        .map(|size| view! {
                            <option value=size.to_string() selected=size == current>
                                {size.to_string()}
                            </option>
                        })
                        .collect_view()
                }}
            </select>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_size_is_offered() {
        assert_eq!(page_size_options(25), vec![10, 25, 50, 100]);
        assert_eq!(page_size_options(20), vec![10, 20, 25, 50, 100]);
        assert_eq!(page_size_options(0), vec![10, 25, 50, 100]);
    }

    #[test]
    fn range_of_last_partial_page() {
        assert_eq!(row_range(0, 25, 0), (0, 0));
        assert_eq!(row_range(0, 25, 7), (1, 7));
        assert_eq!(row_range(2, 25, 60), (51, 60));
    }
}
