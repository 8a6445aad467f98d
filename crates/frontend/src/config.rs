//! Runtime configuration of the dashboard
//!
//! Values come from an embedded default, optionally overridden at build time
//! through environment variables (`DASHBOARD_API_BASE`, `DASHBOARD_MAX_ATTEMPTS`).

use crate::shared::api_utils::ApiError;
use once_cell::sync::Lazy;
use serde::Deserialize;

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"{
    "api_base": null,
    "api_port": 3000,
    "max_attempts": 3,
    "retry_delay_ms": 300,
    "page_size_options": [10, 25, 50, 100],
    "toast_timeout_ms": 5000,
    "cache_capacity": 64
}"#;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Explicit API base URL; derived from the window location when absent
    pub api_base: Option<String>,
    pub api_port: u16,
    /// Total attempts per GET request, first try included
    pub max_attempts: u32,
    pub retry_delay_ms: u32,
    pub page_size_options: Vec<u32>,
    pub toast_timeout_ms: u32,
    pub cache_capacity: usize,
}

static CONFIG: Lazy<AppConfig> = Lazy::new(|| {
    AppConfig::load(option_env!("DASHBOARD_API_BASE"), option_env!("DASHBOARD_MAX_ATTEMPTS"))
});

pub fn config() -> &'static AppConfig {
    &CONFIG
}

impl AppConfig {
    fn embedded() -> Self {
        match serde_json::from_str(DEFAULT_CONFIG) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::error!("embedded config is invalid: {}", e);
                Self {
                    api_base: None,
                    api_port: 3000,
                    max_attempts: 3,
                    retry_delay_ms: 300,
                    page_size_options: vec![10, 25, 50, 100],
                    toast_timeout_ms: 5000,
                    cache_capacity: 64,
                }
            }
        }
    }

    pub fn load(api_base: Option<&str>, max_attempts: Option<&str>) -> Self {
        let mut cfg = Self::embedded();
        if let Some(base) = api_base.map(str::trim).filter(|b| !b.is_empty()) {
            cfg.api_base = Some(base.trim_end_matches('/').to_string());
        }
        if let Some(attempts) = max_attempts.and_then(|a| a.trim().parse::<u32>().ok()) {
            cfg.max_attempts = attempts.clamp(1, 5);
        }
        cfg
    }

    /// API base URL: explicit setting first, then `{protocol}//{hostname}:{port}`
    /// of the current page.
    pub fn api_base(&self) -> Result<String, ApiError> {
        if let Some(base) = &self.api_base {
            return Ok(base.clone());
        }
        let location = web_sys::window().map(|w| w.location());
        let origin = location.and_then(|loc| {
            let protocol = loc.protocol().ok()?;
            let hostname = loc.hostname().ok()?;
            Some((protocol, hostname))
        });
        resolve_api_base(None, origin, self.api_port)
    }
}

/// Pure resolution rule, separated from the browser lookup
pub fn resolve_api_base(
    explicit: Option<&str>,
    origin: Option<(String, String)>,
    port: u16,
) -> Result<String, ApiError> {
    if let Some(base) = explicit.map(str::trim).filter(|b| !b.is_empty()) {
        return Ok(base.trim_end_matches('/').to_string());
    }
    match origin {
        Some((protocol, hostname)) if !hostname.is_empty() => {
            Ok(format!("{}//{}:{}", protocol, hostname, port))
        }
        _ => Err(ApiError::Config(
            "API base URL is not configured and cannot be derived from the page location"
                .to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::query::DEFAULT_PAGE_SIZE;

    #[test]
    fn test_default_config_loads() {
        let cfg = AppConfig::load(None, None);
        assert_eq!(cfg.api_base, None);
        assert_eq!(cfg.max_attempts, 3);
        assert!(cfg.page_size_options.contains(&DEFAULT_PAGE_SIZE));
    }

    #[test]
    fn test_overrides_are_applied() {
        let cfg = AppConfig::load(Some("https://api.example.com/"), Some("9"));
        assert_eq!(cfg.api_base.as_deref(), Some("https://api.example.com"));
        assert_eq!(cfg.max_attempts, 5);
    }

    #[test]
    fn test_resolve_api_base() {
        assert_eq!(
            resolve_api_base(None, Some(("http:".into(), "localhost".into())), 3000).unwrap(),
            "http://localhost:3000"
        );
        assert_eq!(
            resolve_api_base(Some("https://x.io/"), None, 3000).unwrap(),
            "https://x.io"
        );
        assert!(matches!(
            resolve_api_base(None, None, 3000),
            Err(ApiError::Config(_))
        ));
    }
}
