//! API utilities for frontend-backend communication
//!
//! Builds API URLs from the configured base and wraps `gloo-net` requests with
//! typed errors and a bounded retry for idempotent GETs.

use crate::config::config;
use contracts::shared::api::ApiErrorBody;
use gloo_net::http::{Request, Response};
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("{message}")]
    Http { status: u16, message: String },
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Network failures and server-side errors may succeed on a second try;
    /// client errors and configuration problems will not.
    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::Network(_) => true,
            ApiError::Http { status, .. } => *status >= 500,
            ApiError::Config(_) | ApiError::Decode(_) => false,
        }
    }
}

/// Human-readable message for a non-2xx response
pub fn error_message_from_body(status: u16, body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|b| b.text().map(str::to_string))
        .unwrap_or_else(|| format!("Request failed with status {}", status))
}

/// `attempt` is 1-based: the number of attempts already made
pub fn should_retry(err: &ApiError, attempt: u32, max_attempts: u32) -> bool {
    err.is_retryable() && attempt < max_attempts
}

pub fn retry_delay_ms(attempt: u32, base_delay_ms: u32) -> u32 {
    base_delay_ms.saturating_mul(attempt.max(1))
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/products")?;
/// ```
pub fn api_url(path: &str) -> Result<String, ApiError> {
    Ok(format!("{}{}", config().api_base()?, path))
}

/// Path of a single entity, e.g. `/api/products/{id}`
pub fn entity_path(collection: &str, id: &str) -> String {
    format!("{}/{}", collection, urlencoding::encode(id))
}

async fn read_body(response: Response) -> Result<String, ApiError> {
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !response.ok() {
        return Err(ApiError::Http {
            status,
            message: error_message_from_body(status, &text),
        });
    }
    Ok(text)
}

async fn get_text_once(url: &str) -> Result<String, ApiError> {
    let response = Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_body(response).await
}

/// GET with bounded retry; returns the raw body
pub async fn get_text(path_and_query: &str) -> Result<String, ApiError> {
    let url = api_url(path_and_query)?;
    let cfg = config();
    let max_attempts = cfg.max_attempts.max(1);
    let mut attempt = 1;
    loop {
        match get_text_once(&url).await {
            Ok(text) => return Ok(text),
            Err(e) if should_retry(&e, attempt, max_attempts) => {
                let delay = retry_delay_ms(attempt, cfg.retry_delay_ms);
                log::warn!(
                    "GET {} failed (attempt {}/{}): {}; retrying in {}ms",
                    path_and_query,
                    attempt,
                    max_attempts,
                    e,
                    delay
                );
                TimeoutFuture::new(delay).await;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

pub fn decode<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn get_json<T: DeserializeOwned>(path_and_query: &str) -> Result<T, ApiError> {
    let text = get_text(path_and_query).await?;
    decode(&text)
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    let response = Request::post(&api_url(path)?)
        .json(body)
        .map_err(|e| ApiError::Decode(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(&read_body(response).await?)
}

pub async fn patch_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    let response = Request::patch(&api_url(path)?)
        .json(body)
        .map_err(|e| ApiError::Decode(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(&read_body(response).await?)
}

pub async fn delete(path: &str) -> Result<(), ApiError> {
    let response = Request::delete(&api_url(path)?)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_body(response).await.map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_from_json_body() {
        assert_eq!(
            error_message_from_body(400, r#"{"message":"Invalid company"}"#),
            "Invalid company"
        );
        assert_eq!(
            error_message_from_body(422, r#"{"error":"startPeriod is malformed"}"#),
            "startPeriod is malformed"
        );
    }

    #[test]
    fn test_error_message_fallback() {
        assert_eq!(
            error_message_from_body(502, "<html>Bad gateway</html>"),
            "Request failed with status 502"
        );
        assert_eq!(error_message_from_body(500, ""), "Request failed with status 500");
    }

    #[test]
    fn test_retry_policy() {
        let server = ApiError::Http {
            status: 503,
            message: "unavailable".into(),
        };
        let client = ApiError::Http {
            status: 404,
            message: "not found".into(),
        };
        let network = ApiError::Network("reset".into());

        assert!(should_retry(&server, 1, 3));
        assert!(should_retry(&network, 2, 3));
        assert!(!should_retry(&network, 3, 3));
        assert!(!should_retry(&client, 1, 3));
        assert!(!should_retry(&ApiError::Config("x".into()), 1, 3));
    }

    #[test]
    fn test_retry_delay_grows_linearly() {
        assert_eq!(retry_delay_ms(1, 300), 300);
        assert_eq!(retry_delay_ms(2, 300), 600);
        assert_eq!(retry_delay_ms(0, 300), 300);
    }

    #[test]
    fn test_http_error_displays_server_message() {
        let err = ApiError::Http {
            status: 400,
            message: "Invalid company".into(),
        };
        assert_eq!(err.to_string(), "Invalid company");
    }

    #[test]
    fn test_entity_path_encodes_id() {
        assert_eq!(entity_path("/api/products", "a b"), "/api/products/a%20b");
    }
}
