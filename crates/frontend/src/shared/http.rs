//! HTTP request collaborator.
//!
//! Единая точка выхода в сеть: все API-клиенты делегируют сюда. Ошибки сети и
//! не-2xx ответы превращаются в [`ApiError`] и никогда не пробрасываются дальше
//! как паника.

use gloo_net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;
use thiserror::Error;

use super::api_utils::api_url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    fn builder(self, url: &str) -> RequestBuilder {
        match self {
            Method::Get => Request::get(url),
            Method::Post => Request::post(url),
            Method::Put => Request::put(url),
            Method::Patch => Request::patch(url),
            Method::Delete => Request::delete(url),
        }
    }
}

/// Успешный ответ: тело + (нормализованный) HTTP-статус
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiReply<T> {
    pub data: T,
    pub status: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Not found")]
    NotFound,

    #[error("Not authenticated")]
    Unauthenticated,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            ApiError::NotFound => Some(404),
            ApiError::Unauthenticated => Some(401),
            ApiError::Network(_) | ApiError::Decode(_) => None,
        }
    }

    /// Ключ уведомления: строка HTTP-статуса либо "network"/"decode"
    pub fn notification_key(&self) -> String {
        match self {
            ApiError::Network(_) => "network".to_string(),
            ApiError::Decode(_) => "decode".to_string(),
            other => other
                .status()
                .map(|s| s.to_string())
                .unwrap_or_else(|| "error".to_string()),
        }
    }
}

/// 204 No Content показывается пользователю как 201 (запись принята)
pub fn normalize_status(status: u16) -> u16 {
    if status == 204 {
        201
    } else {
        status
    }
}

fn check_status(status: u16, body: &str) -> Result<(), ApiError> {
    match status {
        200..=299 => Ok(()),
        401 => Err(ApiError::Unauthenticated),
        404 => Err(ApiError::NotFound),
        _ => Err(ApiError::Http {
            status,
            message: body.trim().to_string(),
        }),
    }
}

/// Пустое тело (204) читается как JSON `null`, поэтому `()` и `Option<T>` декодируются без ошибки
fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let raw = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(raw).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Выполнить запрос к REST API.
///
/// `path` задаётся относительно префикса API (`/rooms?sort=id`). При наличии
/// `token` добавляется заголовок `Authorization: Bearer <token>`.
pub async fn request<T: DeserializeOwned>(
    path: &str,
    method: Method,
    body: Option<&serde_json::Value>,
    token: Option<&str>,
) -> Result<ApiReply<T>, ApiError> {
    let url = api_url(path);
    let mut builder = method
        .builder(&url)
        .header("Accept", "application/json");
    if let Some(token) = token {
        builder = builder.header("Authorization", &format!("Bearer {}", token));
    }

    let request = match body {
        Some(body) => builder.json(body),
        None => builder.build(),
    }
    .map_err(|e| {
        log::error!("{:?} {}: failed to build request: {}", method, url, e);
        ApiError::Network(e.to_string())
    })?;

    let response = request.send().await.map_err(|e| {
        log::error!("{:?} {}: failed to send request: {}", method, url, e);
        ApiError::Network(e.to_string())
    })?;

    let status = response.status();
    let text = response.text().await.map_err(|e| {
        log::error!("{:?} {}: failed to read body: {}", method, url, e);
        ApiError::Network(e.to_string())
    })?;

    if let Err(e) = check_status(status, &text) {
        log::error!("{:?} {}: {}", method, url, e);
        return Err(e);
    }

    let data = decode_body(&text).map_err(|e| {
        log::error!("{:?} {}: {}", method, url, e);
        e
    })?;

    Ok(ApiReply {
        data,
        status: normalize_status(status),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::MutationCount;

    #[test]
    fn test_normalize_status() {
        assert_eq!(normalize_status(204), 201);
        assert_eq!(normalize_status(200), 200);
        assert_eq!(normalize_status(201), 201);
        assert_eq!(normalize_status(400), 400);
    }

    #[test]
    fn test_check_status_classification() {
        assert_eq!(check_status(200, ""), Ok(()));
        assert_eq!(check_status(204, ""), Ok(()));
        assert_eq!(check_status(404, "missing"), Err(ApiError::NotFound));
        assert_eq!(check_status(401, ""), Err(ApiError::Unauthenticated));
        assert_eq!(
            check_status(409, " locked \n"),
            Err(ApiError::Http {
                status: 409,
                message: "locked".to_string()
            })
        );
    }

    #[test]
    fn test_notification_keys() {
        assert_eq!(ApiError::NotFound.notification_key(), "404");
        assert_eq!(
            ApiError::Http { status: 400, message: String::new() }.notification_key(),
            "400"
        );
        assert_eq!(ApiError::Network("offline".into()).notification_key(), "network");
        assert_eq!(ApiError::Decode("eof".into()).notification_key(), "decode");
    }

    #[test]
    fn test_decode_empty_body() {
        let unit: () = decode_body("").unwrap();
        assert_eq!(unit, ());
        let none: Option<MutationCount> = decode_body("  ").unwrap();
        assert_eq!(none, None);
        let count: MutationCount = decode_body(r#"{"count":3}"#).unwrap();
        assert_eq!(count.count, 3);
        assert!(matches!(
            decode_body::<MutationCount>("{oops"),
            Err(ApiError::Decode(_))
        ));
    }
}
