//! Tab labels - заголовки табов по ключу.

use super::registry::{parse_tab_key, TabRoute};
use crate::domain::catalog::title_for;

/// Возвращает читаемый заголовок таба для данного ключа. Fallback: сам ключ.
pub fn tab_label_for_key(key: &str) -> String {
    let label = match parse_tab_key(key) {
        Some(TabRoute::List(entity_key)) => title_for(entity_key).map(str::to_string),
        Some(TabRoute::Details { entity_key, id }) => title_for(entity_key).map(|title| match id {
            Some(id) => format!("{} #{}", title, id),
            None => format!("{}: new", title),
        }),
        None => None,
    };
    label.unwrap_or_else(|| key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_label_for_key() {
        assert_eq!(tab_label_for_key("rooms"), "Rooms");
        assert_eq!(tab_label_for_key("rooms/12"), "Rooms #12");
        assert_eq!(tab_label_for_key("news/new"), "News: new");
        assert_eq!(tab_label_for_key("orders"), "orders");
    }
}
