use crate::shared::icons::icon;
use crate::shared::table_options::{DEFAULT_PAGE_SIZE, PAGE_SIZES};
use leptos::prelude::*;

/// Индекс последней страницы при данном количестве записей
pub fn last_page(total_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_count.div_ceil(page_size).saturating_sub(1)
}

/// Подпись вида "21–40 of 57"
pub fn range_label(current_page: usize, page_size: usize, total_count: usize) -> String {
    if total_count == 0 {
        return "0 of 0".to_string();
    }
    let from = current_page * page_size + 1;
    if from > total_count {
        return format!("0 of {}", total_count);
    }
    let to = ((current_page + 1) * page_size).min(total_count);
    format!("{}–{} of {}", from, to, total_count)
}

/// PaginationControls component - reusable pagination controls
#[component]
pub fn PaginationControls(
    /// Current page (0-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total count of items
    #[prop(into)]
    total_count: Signal<usize>,

    /// Current page size
    #[prop(into)]
    page_size: Signal<usize>,

    /// Callback when page changes
    on_page_change: Callback<usize>,

    /// Callback when page size changes
    on_page_size_change: Callback<usize>,

    /// Available page size options (optional, defaults to [20, 50, 100])
    #[prop(optional)]
    page_size_options: Option<Vec<usize>>,
) -> impl IntoView {
    let page_size_opts = page_size_options.unwrap_or_else(|| PAGE_SIZES.to_vec());
    let last = move || last_page(total_count.get(), page_size.get());

    view! {
        <div class="pagination-controls">
            <span class="pagination-info">
                {move || range_label(current_page.get(), page_size.get(), total_count.get())}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(0)
                disabled=move || current_page.get() == 0
                title="First page"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 0 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=move || current_page.get() == 0
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page < last() {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=move || current_page.get() >= last()
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(last())
                disabled=move || current_page.get() >= last()
                title="Last page"
            >
                {icon("chevrons-right")}
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    let val = event_target_value(&ev).parse().unwrap_or(DEFAULT_PAGE_SIZE);
                    on_page_size_change.run(val);
                }
                prop:value=move || page_size.get().to_string()
            >
                {page_size_opts.iter().map(|&size| {
                    view! {
                        <option value={size.to_string()} selected=move || page_size.get() == size>
                            {size.to_string()}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_page() {
        assert_eq!(last_page(0, 20), 0);
        assert_eq!(last_page(20, 20), 0);
        assert_eq!(last_page(21, 20), 1);
        assert_eq!(last_page(100, 50), 1);
    }

    #[test]
    fn test_range_label() {
        assert_eq!(range_label(0, 20, 0), "0 of 0");
        assert_eq!(range_label(0, 20, 57), "1–20 of 57");
        assert_eq!(range_label(2, 20, 57), "41–57 of 57");
        // Страница за пределами списка
        assert_eq!(range_label(4, 100, 100), "0 of 100");
    }
}
