//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and reading
//! responses into the shared [`ApiError`] type.

use super::config::{FrontendConfig, DEFAULT_API_PORT};
use contracts::domain::common::ApiError;

/// Get the base URL for API requests
///
/// Uses `API_BASE_URL` when it was set at build time, otherwise the current
/// window location with port 3000 for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    if let Some(base) = FrontendConfig::from_build_env().api_base_url {
        return base;
    }

    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, DEFAULT_API_PORT)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/image/upload");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Send a request and return `(status, body)`.
///
/// Status interpretation is left to the contracts parsers so that every
/// endpoint applies its own success rule.
pub async fn send(request: gloo_net::http::Request) -> Result<(u16, String), ApiError> {
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Malformed(e.to_string()))?;
    Ok((status, body))
}
