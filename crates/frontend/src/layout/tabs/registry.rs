//! Tab content registry - единственный источник правды для маппинга tab.key → View
//!
//! Ключи табов:
//! - `rooms` - список сущности
//! - `rooms/new` - форма создания
//! - `rooms/12` - карточка записи

use crate::domain::catalog;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabRoute<'a> {
    List(&'a str),
    Details { entity_key: &'a str, id: Option<i64> },
}

pub fn parse_tab_key(key: &str) -> Option<TabRoute<'_>> {
    match key.split_once('/') {
        None if !key.is_empty() => Some(TabRoute::List(key)),
        None => None,
        Some((entity_key, "new")) => Some(TabRoute::Details {
            entity_key,
            id: None,
        }),
        Some((entity_key, id)) => id.parse().ok().map(|id| TabRoute::Details {
            entity_key,
            id: Some(id),
        }),
    }
}

/// Рендерит контент таба по его ключу.
///
/// Для неизвестных ключей возвращается placeholder.
pub fn render_tab_content(key: &str) -> AnyView {
    let content = match parse_tab_key(key) {
        Some(TabRoute::List(entity_key)) => catalog::list_view(entity_key),
        Some(TabRoute::Details { entity_key, id }) => catalog::details_view(entity_key, id),
        None => None,
    };

    content.unwrap_or_else(|| {
        log::warn!("Unknown tab type: {}", key);
        view! { <div class="placeholder">{"Not implemented yet"}</div> }.into_any()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tab_key() {
        assert_eq!(parse_tab_key("rooms"), Some(TabRoute::List("rooms")));
        assert_eq!(
            parse_tab_key("rooms/12"),
            Some(TabRoute::Details {
                entity_key: "rooms",
                id: Some(12)
            })
        );
        assert_eq!(
            parse_tab_key("push-notifications/new"),
            Some(TabRoute::Details {
                entity_key: "push-notifications",
                id: None
            })
        );
        assert_eq!(parse_tab_key("rooms/abc"), None);
        assert_eq!(parse_tab_key(""), None);
    }
}
