/// Утилиты для заголовков списков (индикаторы сортировки)
use contracts::domain::common::SortOrder;

/// Получить индикатор сортировки для заголовка
pub fn get_sort_indicator(current_field: &str, field: &str, order: SortOrder) -> &'static str {
    if current_field == field {
        if order.is_ascending() { " ▲" } else { " ▼" }
    } else {
        " ⇅"
    }
}

/// CSS-класс индикатора: активная колонка подсвечивается
pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator("name", "name", SortOrder::Asc), " ▲");
        assert_eq!(get_sort_indicator("name", "name", SortOrder::Desc), " ▼");
        assert_eq!(get_sort_indicator("id", "name", SortOrder::Asc), " ⇅");
    }

    #[test]
    fn test_sort_class() {
        assert!(get_sort_class("id", "id").ends_with("--active"));
        assert_eq!(get_sort_class("id", "name"), "table__sort-indicator");
    }
}
