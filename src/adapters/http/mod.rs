//! HTTP adapters - REST API implementations.

pub mod conversation;
pub mod cors;
pub mod health;

use axum::Router;

pub use conversation::{chat_router, ChatApiError, ChatAppState};
pub use cors::cors_layer;
pub use health::service_routes;

/// Full application router: chat endpoints plus service endpoints.
///
/// Middleware (CORS, tracing, compression) is layered on by the binary.
pub fn api_router(state: ChatAppState) -> Router {
    chat_router().merge(service_routes()).with_state(state)
}
