use contracts::system::auth::{LoginRequest, LoginResponse, UserInfo};

use crate::shared::http::{request, ApiError, Method};

/// Login with username and password
pub async fn login(username: String, password: String) -> Result<LoginResponse, ApiError> {
    let body = serde_json::to_value(LoginRequest { username, password })
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    request("/auth/login", Method::Post, Some(&body), None)
        .await
        .map(|reply| reply.data)
}

/// Logout (revoke access token on the server)
pub async fn logout(access_token: &str) -> Result<(), ApiError> {
    request::<Option<serde_json::Value>>("/auth/logout", Method::Post, None, Some(access_token))
        .await
        .map(|_| ())
}

/// Get current user info
pub async fn get_current_user(access_token: &str) -> Result<UserInfo, ApiError> {
    request("/auth/me", Method::Get, None, Some(access_token))
        .await
        .map(|reply| reply.data)
}
