//! Каталог сущностей админки: пункты навигации и страницы по ключу сущности.

use contracts::domain::a001_building::aggregate::Building;
use contracts::domain::a002_room::aggregate::Room;
use contracts::domain::a003_ship::aggregate::Ship;
use contracts::domain::a004_technology::aggregate::Technology;
use contracts::domain::a005_news::aggregate::News;
use contracts::domain::a006_tag::aggregate::Tag;
use contracts::domain::a007_push_notification::aggregate::PushNotification;
use contracts::domain::common::Entity;
use contracts::system::users::User;
use leptos::prelude::*;

use crate::shared::entity_page::{EntityDetails, EntityListPage};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub key: &'static str,
    pub title: &'static str,
}

const fn entry<E: Entity>() -> CatalogEntry {
    CatalogEntry {
        key: E::ENTITY_KEY,
        title: E::TITLE,
    }
}

/// Порядок пунктов левой навигации
pub const CATALOG: &[CatalogEntry] = &[
    entry::<Building>(),
    entry::<Room>(),
    entry::<Ship>(),
    entry::<Technology>(),
    entry::<News>(),
    entry::<Tag>(),
    entry::<PushNotification>(),
    entry::<User>(),
];

pub fn title_for(entity_key: &str) -> Option<&'static str> {
    CATALOG
        .iter()
        .find(|e| e.key == entity_key)
        .map(|e| e.title)
}

/// Конструкторы страниц одной сущности
#[derive(Clone, Copy)]
pub struct EntityPages {
    pub list: fn() -> AnyView,
    pub details: fn(Option<i64>) -> AnyView,
}

fn list_page<E: Entity>() -> AnyView {
    view! { <EntityListPage<E> /> }.into_any()
}

fn details_page<E: Entity>(id: Option<i64>) -> AnyView {
    view! { <EntityDetails<E> id=id /> }.into_any()
}

fn pages<E: Entity>() -> EntityPages {
    EntityPages {
        list: list_page::<E>,
        details: details_page::<E>,
    }
}

pub fn pages_for(entity_key: &str) -> Option<EntityPages> {
    let pages = match entity_key {
        "buildings" => pages::<Building>(),
        "rooms" => pages::<Room>(),
        "ships" => pages::<Ship>(),
        "technologies" => pages::<Technology>(),
        "news" => pages::<News>(),
        "tags" => pages::<Tag>(),
        "push-notifications" => pages::<PushNotification>(),
        "users" => pages::<User>(),
        _ => return None,
    };
    Some(pages)
}

pub fn list_view(entity_key: &str) -> Option<AnyView> {
    pages_for(entity_key).map(|p| (p.list)())
}

/// Карточка записи; `id == None` открывает форму создания
pub fn details_view(entity_key: &str, id: Option<i64>) -> Option<AnyView> {
    pages_for(entity_key).map(|p| (p.details)(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_keys_are_unique() {
        let mut keys: Vec<&str> = CATALOG.iter().map(|e| e.key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), CATALOG.len());
    }

    #[test]
    fn test_every_catalog_entry_has_pages() {
        for entry in CATALOG {
            assert!(pages_for(entry.key).is_some(), "no pages for {}", entry.key);
        }
        assert!(pages_for("orders").is_none());
    }

    #[test]
    fn test_title_for() {
        assert_eq!(title_for("rooms"), Some("Rooms"));
        assert_eq!(title_for("push-notifications"), Some("Push notifications"));
        assert_eq!(title_for("orders"), None);
    }
}
