//! Компонент сортируемой ячейки заголовка таблицы
//!
//! # Примеры
//!
//! ```text
//! <SortableHeaderCell
//!     label="Floor"
//!     sort_field="floor"
//!     current_sort_field=Signal::derive(move || options.sorting_by())
//!     sort_order=Signal::derive(move || options.sorting_order())
//!     on_sort=Callback::new(move |field: String| options.on_sort(&field))
//! />
//! ```

use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use contracts::domain::common::SortOrder;
use leptos::prelude::*;
use thaw::TableHeaderCell;

/// Поле, по которому нужно сортировать после клика.
/// Для несортируемой колонки клик ничего не делает.
pub fn sort_request(sortable: bool, sort_field: &str) -> Option<String> {
    sortable.then(|| sort_field.to_string())
}

/// Компонент сортируемой ячейки заголовка таблицы
///
/// Автоматически:
/// - Добавляет индикатор сортировки (▲▼)
/// - Обрабатывает клики для изменения сортировки
#[component]
pub fn SortableHeaderCell(
    /// Текст заголовка
    #[prop(into)]
    label: String,

    /// Поле для сортировки
    #[prop(into)]
    sort_field: String,

    /// Текущее поле сортировки из state
    #[prop(into)]
    current_sort_field: Signal<String>,

    /// Направление сортировки из state
    #[prop(into)]
    sort_order: Signal<SortOrder>,

    /// Callback при клике на заголовок
    on_sort: Callback<String>,

    /// Можно ли сортировать по колонке
    #[prop(optional, default = true)]
    sortable: bool,

    #[prop(optional, default = 100.0)]
    min_width: f64,

    /// Дополнительный CSS-класс колонки
    #[prop(optional, into)]
    class: String,
) -> impl IntoView {
    let sort_field_for_click = sort_field.clone();
    let sort_field_for_indicator = sort_field.clone();
    let sort_field_for_class = sort_field;

    let handle_click = move |_| {
        if let Some(field) = sort_request(sortable, &sort_field_for_click) {
            on_sort.run(field);
        }
    };

    let header_class = if sortable {
        "table__sortable-header"
    } else {
        "table__header-label"
    };

    let indicator = sortable.then(move || {
        view! {
            <span class=move || get_sort_class(&current_sort_field.get(), &sort_field_for_class)>
                {move || {
                    get_sort_indicator(
                        &current_sort_field.get(),
                        &sort_field_for_indicator,
                        sort_order.get(),
                    )
                }}
            </span>
        }
    });

    view! {
        <TableHeaderCell resizable=false min_width=min_width class=class>
            <div class=header_class on:click=handle_click>
                {label}
                {indicator}
            </div>
        </TableHeaderCell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_request() {
        assert_eq!(sort_request(true, "floor"), Some("floor".to_string()));
        assert_eq!(sort_request(false, "techIds"), None);
    }
}
