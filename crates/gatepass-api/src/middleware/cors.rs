//! Cross-origin policy for browser clients.

use std::time::Duration;

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::warn;

use gatepass_core::config::CorsConfig;

/// Builds the CORS layer. A `"*"` entry allows any origin; entries that are
/// not valid header values or HTTP methods are skipped with a warning.
pub fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(allowed_origins(&config.allowed_origins))
        .allow_methods(allowed_methods(&config.allowed_methods))
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
        .max_age(Duration::from_secs(config.max_age_seconds))
}

fn allowed_origins(origins: &[String]) -> AllowOrigin {
    if origins.iter().any(|o| o == "*") {
        return Any.into();
    }

    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    AllowOrigin::list(parsed)
}

fn allowed_methods(methods: &[String]) -> Vec<Method> {
    methods
        .iter()
        .filter_map(|method| match method.parse::<Method>() {
            Ok(m) => Some(m),
            Err(_) => {
                warn!(%method, "Ignoring invalid CORS method");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_methods_are_skipped() {
        let methods = vec!["GET".to_string(), "NOT A METHOD".to_string()];
        assert_eq!(allowed_methods(&methods), vec![Method::GET]);
    }
}
