//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

use super::config::AppConfig;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using the configured backend port.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    AppConfig::from_build_env().base_url(&protocol, &hostname)
}

/// Build a full API URL from a path relative to the API prefix
///
/// # Example
/// ```text
/// let url = api_url("/rooms/12"); // http://host:3000/api/rooms/12
/// ```
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), AppConfig::from_build_env().api_prefix, path)
}

fn join_url(base: &str, prefix: &str, path: &str) -> String {
    let prefix = prefix.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}{}", base, prefix, path)
    } else {
        format!("{}{}/{}", base, prefix, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("http://localhost:3000", "/api", "/rooms"),
            "http://localhost:3000/api/rooms"
        );
        assert_eq!(
            join_url("http://localhost:3000", "/api/", "rooms/1"),
            "http://localhost:3000/api/rooms/1"
        );
    }
}
