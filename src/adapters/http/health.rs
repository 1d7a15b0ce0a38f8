//! Service liveness endpoints.

use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

pub const SERVICE_NAME: &str = "llm-chat-api";

#[derive(Debug, Clone, Serialize)]
pub struct ServiceBanner {
    pub message: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub service: &'static str,
}

/// GET /
pub async fn root() -> Json<ServiceBanner> {
    Json(ServiceBanner {
        message: "LLM Chat API is running",
    })
}

/// GET /health
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy",
        service: SERVICE_NAME,
    })
}

/// Routes that need no application state.
pub fn service_routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn health_reports_service_name() {
        let Json(body) = health().await;
        assert_eq!(body.status, "healthy");
        assert_eq!(body.service, "llm-chat-api");
    }

    #[tokio::test]
    async fn root_reports_running() {
        let Json(body) = root().await;
        assert_eq!(body.message, "LLM Chat API is running");
    }
}
