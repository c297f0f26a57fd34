//! Универсальный API-клиент сущности.
//!
//! Один тип на все сущности: путь берётся из `Entity::ENTITY_KEY`, все методы
//! делегируют в [`crate::shared::http::request`].

use async_trait::async_trait;
use contracts::domain::common::{Entity, ListQuery, ListResponse, MutationCount};
use serde_json::{Map, Value};
use std::marker::PhantomData;

use crate::shared::http::{request, ApiError, ApiReply, Method};
use crate::shared::row_actions::MutationClient;

pub struct EntityApiClient<E> {
    token: Option<String>,
    _entity: PhantomData<E>,
}

impl<E: Entity> EntityApiClient<E> {
    pub fn new(token: Option<String>) -> Self {
        Self {
            token,
            _entity: PhantomData,
        }
    }

    fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub async fn get_all(&self, query: &ListQuery) -> Result<ListResponse<E>, ApiError> {
        request(&list_path(E::ENTITY_KEY, query), Method::Get, None, self.token())
            .await
            .map(|reply| reply.data)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<E, ApiError> {
        request(&item_path(E::ENTITY_KEY, id), Method::Get, None, self.token())
            .await
            .map(|reply| reply.data)
    }

    /// Создать запись. Тело ответа сервером не гарантируется, поэтому возвращается
    /// только статус.
    pub async fn create(&self, payload: &Map<String, Value>) -> Result<ApiReply<Option<Value>>, ApiError> {
        let body = Value::Object(payload.clone());
        request(&collection_path(E::ENTITY_KEY), Method::Post, Some(&body), self.token()).await
    }

    pub async fn update(
        &self,
        id: i64,
        payload: &Map<String, Value>,
    ) -> Result<ApiReply<Option<Value>>, ApiError> {
        let body = Value::Object(payload.clone());
        request(&item_path(E::ENTITY_KEY, id), Method::Put, Some(&body), self.token()).await
    }

    pub async fn delete(&self, ids: &[i64]) -> Result<ApiReply<MutationCount>, ApiError> {
        let body = ids_body(ids);
        request(&collection_path(E::ENTITY_KEY), Method::Delete, Some(&body), self.token()).await
    }

    pub async fn restore(&self, ids: &[i64]) -> Result<ApiReply<MutationCount>, ApiError> {
        let body = ids_body(ids);
        let path = format!("{}/restore", collection_path(E::ENTITY_KEY));
        request(&path, Method::Patch, Some(&body), self.token()).await
    }
}

#[async_trait(?Send)]
impl<E: Entity> MutationClient for EntityApiClient<E> {
    async fn delete(&self, ids: &[i64]) -> Result<ApiReply<MutationCount>, ApiError> {
        EntityApiClient::delete(self, ids).await
    }

    async fn restore(&self, ids: &[i64]) -> Result<ApiReply<MutationCount>, ApiError> {
        EntityApiClient::restore(self, ids).await
    }
}

fn collection_path(entity_key: &str) -> String {
    format!("/{}", entity_key)
}

fn item_path(entity_key: &str, id: i64) -> String {
    format!("/{}/{}", entity_key, id)
}

fn list_path(entity_key: &str, query: &ListQuery) -> String {
    match serde_qs::to_string(query) {
        Ok(qs) => format!("/{}?{}", entity_key, qs),
        Err(e) => {
            log::error!("failed to encode list query {:?}: {}", query, e);
            collection_path(entity_key)
        }
    }
}

fn ids_body(ids: &[i64]) -> Value {
    Value::Array(ids.iter().map(|id| Value::from(*id)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::SortOrder;

    #[test]
    fn test_paths() {
        assert_eq!(collection_path("rooms"), "/rooms");
        assert_eq!(item_path("push-notifications", 9), "/push-notifications/9");
    }

    #[test]
    fn test_list_path_encodes_query() {
        let query = ListQuery {
            sort: "dateOfCreation".to_string(),
            order: SortOrder::Desc,
            page: 2,
            page_size: 50,
        };
        assert_eq!(
            list_path("news", &query),
            "/news?sort=dateOfCreation&order=DESC&page=2&pageSize=50"
        );
    }

    #[test]
    fn test_ids_body() {
        assert_eq!(ids_body(&[3, 5]), serde_json::json!([3, 5]));
    }
}
