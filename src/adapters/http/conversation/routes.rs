//! Axum routes for chat endpoints.
//!
//! Defines the routing table for all conversation-related HTTP endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    create_conversation, delete_conversation, get_conversation, get_messages, list_conversations,
    send_message, ChatAppState,
};

/// Creates routes for chat endpoints.
///
/// REST Endpoints:
/// - POST /send - Run one exchange
/// - GET /conversations - List conversations
/// - POST /conversations - Create conversation
/// - GET /conversations/:id - Get conversation
/// - DELETE /conversations/:id - Delete conversation
/// - GET /conversations/:id/messages - Get messages
pub fn chat_routes() -> Router<ChatAppState> {
    Router::new()
        .route("/send", post(send_message))
        .route(
            "/conversations",
            get(list_conversations).post(create_conversation),
        )
        .route(
            "/conversations/:conversation_id",
            get(get_conversation).delete(delete_conversation),
        )
        .route("/conversations/:conversation_id/messages", get(get_messages))
}

/// Combined router with all chat routes under /api/chat.
pub fn chat_router() -> Router<ChatAppState> {
    Router::new().nest("/api/chat", chat_routes())
}
