//! HTTP DTOs for chat endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::application::handlers::conversation::ListConversationsQuery;
use crate::domain::conversation::{Conversation, Message, Metadata, Role};

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// View of a message for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct MessageView {
    pub id: String,
    pub role: Role,
    pub content: String,
    /// When the message was created (RFC 3339).
    pub timestamp: String,
    pub metadata: Option<Metadata>,
}

impl From<&Message> for MessageView {
    fn from(message: &Message) -> Self {
        Self {
            id: message.id().to_string(),
            role: message.role(),
            content: message.content().to_string(),
            timestamp: message.created_at().to_rfc3339(),
            metadata: message.metadata().cloned(),
        }
    }
}

/// View of a conversation, including its full message history.
#[derive(Debug, Clone, Serialize)]
pub struct ConversationView {
    pub id: String,
    pub title: Option<String>,
    pub messages: Vec<MessageView>,
    pub created_at: String,
    pub updated_at: String,
    pub metadata: Option<Metadata>,
}

impl From<&Conversation> for ConversationView {
    fn from(conversation: &Conversation) -> Self {
        Self {
            id: conversation.id().to_string(),
            title: conversation.title().map(str::to_string),
            messages: conversation.messages().iter().map(MessageView::from).collect(),
            created_at: conversation.created_at().to_rfc3339(),
            updated_at: conversation.updated_at().to_rfc3339(),
            metadata: conversation.metadata().cloned(),
        }
    }
}

/// Result of one exchange.
#[derive(Debug, Clone, Serialize)]
pub struct SendMessageResponse {
    /// The stored user message.
    pub message: MessageView,
    pub conversation_id: String,
    pub assistant_response: MessageView,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConversationResponse {
    pub conversation: ConversationView,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConversationListResponse {
    pub conversations: Vec<ConversationView>,
    /// Number of stored conversations, regardless of paging.
    pub total: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct MessagesResponse {
    pub messages: Vec<MessageView>,
}

/// Plain acknowledgement body.
#[derive(Debug, Clone, Serialize)]
pub struct StatusMessage {
    pub message: String,
}

impl StatusMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Body of `POST /send`.
#[derive(Debug, Clone, Deserialize)]
pub struct SendMessageRequest {
    pub content: String,
    /// Kept as a string so a malformed id is reported as not found.
    #[serde(default)]
    pub conversation_id: Option<String>,
    #[serde(default)]
    pub metadata: Option<Metadata>,
}

/// Query parameters for conversation listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationParams {
    #[serde(default)]
    pub limit: Option<usize>,
    #[serde(default)]
    pub offset: Option<usize>,
}

impl PaginationParams {
    /// Fills missing values from [`ListConversationsQuery::default`].
    pub fn into_query(self) -> ListConversationsQuery {
        let defaults = ListConversationsQuery::default();
        ListConversationsQuery {
            limit: self.limit.unwrap_or(defaults.limit),
            offset: self.offset.unwrap_or(defaults.offset),
        }
    }
}

/// Query parameters for `POST /conversations`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateConversationParams {
    #[serde(default)]
    pub title: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Response
// ════════════════════════════════════════════════════════════════════════════════

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
        }
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: format!("{} not found: {}", resource_type, id),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
        }
    }
}
