use axum::{
    extract::{OriginalUri, Request, State},
    http::Method,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::{
    config::Config,
    error::{AppError, Result},
};

pub const API_KEY_HEADER: &str = "x-api-key";

/// Paths reachable without a key in every mode.
pub const PUBLIC_PATHS: &[&str] = &["/health", "/api/ping-public"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Preflight,
    PublicPath,
    Bypass,
    Authorized,
    Rejected,
}

impl GateDecision {
    pub fn is_allowed(self) -> bool {
        !matches!(self, GateDecision::Rejected)
    }
}

/// Shared-secret gate in front of the `/api` routes.
///
/// The decision only looks at the method, the path and the presented key, so
/// the same gate instance is shared by every request.
#[derive(Debug, Clone)]
pub struct ApiKeyGate {
    expected_key: String,
    bypass: bool,
    public_paths: Vec<String>,
}

impl ApiKeyGate {
    pub fn new(expected_key: impl Into<String>, bypass: bool) -> Self {
        Self {
            expected_key: expected_key.into(),
            bypass,
            public_paths: PUBLIC_PATHS.iter().map(|p| p.to_string()).collect(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.api_key.clone(), config.skip_auth)
    }

    pub fn is_bypassed(&self) -> bool {
        self.bypass
    }

    pub fn decide(&self, method: &Method, path: &str, presented: Option<&str>) -> GateDecision {
        if *method == Method::OPTIONS {
            return GateDecision::Preflight;
        }

        let path = normalize_path(path);
        if self.public_paths.iter().any(|p| p == path) {
            return GateDecision::PublicPath;
        }

        if self.bypass {
            return GateDecision::Bypass;
        }

        match presented {
            Some(key) if !self.expected_key.is_empty() && key == self.expected_key => {
                GateDecision::Authorized
            }
            _ => GateDecision::Rejected,
        }
    }
}

fn normalize_path(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

/// Middleware applying [`ApiKeyGate::decide`] to every request of the router
/// it is layered on.
pub async fn require_api_key(
    State(gate): State<Arc<ApiKeyGate>>,
    request: Request,
    next: Next,
) -> Result<Response> {
    let decision = {
        // Nested routers see a stripped URI; the original one carries the full path.
        let path = request
            .extensions()
            .get::<OriginalUri>()
            .map(|uri| uri.path())
            .unwrap_or_else(|| request.uri().path());
        let presented = request
            .headers()
            .get(API_KEY_HEADER)
            .and_then(|value| value.to_str().ok());

        let decision = gate.decide(request.method(), path, presented);
        if !decision.is_allowed() {
            tracing::warn!(
                method = %request.method(),
                path = %path,
                key_present = presented.is_some(),
                "Rejected request without a valid API key"
            );
        }
        decision
    };

    if !decision.is_allowed() {
        return Err(AppError::Unauthorized("API key inválida o ausente".to_string()));
    }

    Ok(next.run(request).await)
}
