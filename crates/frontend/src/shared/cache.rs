//! Инвалидация кэша запросов.
//!
//! Каждый ключ сущности имеет счётчик версий. Запросы списка читают версию
//! реактивно, поэтому `invalidate(key)` перезапускает все активные запросы
//! с этим ключом.

use leptos::prelude::*;
use std::collections::HashMap;

/// Порт инвалидации кэша (подменяется в тестах)
pub trait CacheInvalidator {
    fn invalidate(&self, entity_key: &str);
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheVersions {
    versions: HashMap<String, u64>,
}

impl CacheVersions {
    pub fn version(&self, entity_key: &str) -> u64 {
        self.versions.get(entity_key).copied().unwrap_or(0)
    }

    pub fn bump(&mut self, entity_key: &str) -> u64 {
        let version = self.versions.entry(entity_key.to_string()).or_insert(0);
        *version += 1;
        *version
    }
}

#[derive(Clone, Copy)]
pub struct QueryCache {
    versions: RwSignal<CacheVersions>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self {
            versions: RwSignal::new(CacheVersions::default()),
        }
    }

    /// Текущая версия ключа (отслеживается реактивно)
    pub fn version(&self, entity_key: &str) -> u64 {
        self.versions.with(|v| v.version(entity_key))
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new()
    }
}

impl CacheInvalidator for QueryCache {
    fn invalidate(&self, entity_key: &str) {
        let version = self
            .versions
            .try_update(|v| v.bump(entity_key))
            .unwrap_or_default();
        log::debug!("cache invalidated: '{}' -> v{}", entity_key, version);
    }
}

pub fn use_query_cache() -> QueryCache {
    use_context::<QueryCache>().expect("QueryCache not found in context")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_versions_are_per_key() {
        let mut versions = CacheVersions::default();
        assert_eq!(versions.version("rooms"), 0);
        assert_eq!(versions.bump("rooms"), 1);
        assert_eq!(versions.bump("rooms"), 2);
        assert_eq!(versions.version("rooms"), 2);
        assert_eq!(versions.version("tags"), 0);
    }
}
