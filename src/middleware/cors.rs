// ABOUTME: CORS middleware configuration for HTTP API endpoints
// ABOUTME: Provides Cross-Origin Resource Sharing setup for the web client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrocycle Contributors

use http::{header::HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::config::ServerConfig;

/// Configure CORS for the tracker API.
///
/// Origins come from `CORS_ALLOWED_ORIGINS`: `*` (the default, suiting the
/// single-user local deployment) allows any origin, otherwise the value is a
/// comma-separated origin list. An allowlist that parses to nothing falls
/// back to any origin.
pub fn setup_cors(config: &ServerConfig) -> CorsLayer {
    let allow_origin =
        if config.cors_allowed_origins.is_empty() || config.cors_allowed_origins == "*" {
            AllowOrigin::any()
        } else {
            let origins: Vec<HeaderValue> = config
                .cors_allowed_origins
                .split(',')
                .filter_map(|s| {
                    let trimmed = s.trim();
                    if trimmed.is_empty() {
                        None
                    } else {
                        HeaderValue::from_str(trimmed).ok()
                    }
                })
                .collect();

            if origins.is_empty() {
                AllowOrigin::any()
            } else {
                AllowOrigin::list(origins)
            }
        };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_headers([
            HeaderName::from_static("content-type"),
            HeaderName::from_static("accept"),
            HeaderName::from_static("origin"),
            HeaderName::from_static("x-requested-with"),
        ])
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcard_and_empty_configs_allow_any_origin() {
        for origins in ["*", ""] {
            let config = ServerConfig {
                cors_allowed_origins: origins.to_owned(),
                ..ServerConfig::default()
            };
            // Building the layer must not panic on the permissive settings
            let _layer = setup_cors(&config);
        }
    }

    #[test]
    fn origin_list_builds_a_layer() {
        let config = ServerConfig {
            cors_allowed_origins: "http://localhost:5173, http://localhost:3000".to_owned(),
            ..ServerConfig::default()
        };
        let _layer = setup_cors(&config);
    }
}
