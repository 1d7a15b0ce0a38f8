//! HTTP handlers for chat endpoints.
//!
//! These handlers connect Axum routes to application layer operations.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::conversation::{
    CreateConversationCommand, CreateConversationHandler, DeleteConversationCommand,
    DeleteConversationHandler, GetConversationHandler, GetConversationQuery,
    ListConversationsHandler, SendMessageCommand, SendMessageError, SendMessageHandler,
};
use crate::domain::foundation::{ConversationId, DomainError, ErrorCode};
use crate::ports::{ConversationStore, ResponseGenerator};

use super::dto::{
    ConversationListResponse, ConversationResponse, ConversationView, CreateConversationParams,
    ErrorResponse, MessageView, MessagesResponse, PaginationParams, SendMessageRequest,
    SendMessageResponse, StatusMessage,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state for chat handlers.
#[derive(Clone)]
pub struct ChatAppState {
    pub store: Arc<dyn ConversationStore>,
    pub generator: Arc<dyn ResponseGenerator>,
}

impl ChatAppState {
    pub fn new(store: Arc<dyn ConversationStore>, generator: Arc<dyn ResponseGenerator>) -> Self {
        Self { store, generator }
    }

    fn send_message_handler(&self) -> SendMessageHandler {
        SendMessageHandler::new(self.store.clone(), self.generator.clone())
    }
}

/// Identifiers are opaque to clients, so an unparseable one is simply unknown.
fn parse_conversation_id(raw: &str) -> Result<ConversationId, ChatApiError> {
    raw.parse()
        .map_err(|_| ChatApiError::NotFound("Conversation".to_string(), raw.to_string()))
}

// ════════════════════════════════════════════════════════════════════════════════
// POST /api/chat/send
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/chat/send - Run one exchange.
///
/// Creates a conversation when `conversation_id` is absent.
///
/// # Errors
/// - 400 Bad Request: Malformed body or empty message content
/// - 404 Not Found: Unknown conversation
pub async fn send_message(
    State(state): State<ChatAppState>,
    payload: Result<Json<SendMessageRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ChatApiError> {
    let Json(request) = payload?;
    let mut cmd = SendMessageCommand::new(request.content);
    if let Some(raw) = request.conversation_id.as_deref() {
        cmd = cmd.in_conversation(parse_conversation_id(raw)?);
    }
    if let Some(metadata) = request.metadata {
        cmd = cmd.with_metadata(metadata);
    }

    let result = state.send_message_handler().handle(cmd).await?;

    let response = SendMessageResponse {
        message: MessageView::from(&result.user_message),
        conversation_id: result.conversation_id.to_string(),
        assistant_response: MessageView::from(&result.assistant_message),
    };
    Ok((StatusCode::OK, Json(response)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Conversation CRUD
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/chat/conversations - Page of conversations, most recent first.
pub async fn list_conversations(
    State(state): State<ChatAppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, ChatApiError> {
    let handler = ListConversationsHandler::new(state.store.clone());
    let page = handler.handle(params.into_query()).await?;

    let response = ConversationListResponse {
        conversations: page.conversations.iter().map(ConversationView::from).collect(),
        total: page.total,
    };
    Ok((StatusCode::OK, Json(response)))
}

/// POST /api/chat/conversations - Create an empty conversation.
pub async fn create_conversation(
    State(state): State<ChatAppState>,
    Query(params): Query<CreateConversationParams>,
) -> Result<impl IntoResponse, ChatApiError> {
    let handler = CreateConversationHandler::new(state.store.clone());
    let conversation = handler
        .handle(CreateConversationCommand {
            title: params.title,
        })
        .await?;

    let response = ConversationResponse {
        conversation: ConversationView::from(&conversation),
    };
    Ok((StatusCode::OK, Json(response)))
}

/// GET /api/chat/conversations/:id
///
/// # Errors
/// - 404 Not Found: Unknown conversation
pub async fn get_conversation(
    State(state): State<ChatAppState>,
    Path(conversation_id): Path<String>,
) -> Result<impl IntoResponse, ChatApiError> {
    let conversation_id = parse_conversation_id(&conversation_id)?;

    let handler = GetConversationHandler::new(state.store.clone());
    let conversation = handler
        .handle(GetConversationQuery { conversation_id })
        .await?;

    let response = ConversationResponse {
        conversation: ConversationView::from(&conversation),
    };
    Ok((StatusCode::OK, Json(response)))
}

/// DELETE /api/chat/conversations/:id
///
/// # Errors
/// - 404 Not Found: Unknown conversation
pub async fn delete_conversation(
    State(state): State<ChatAppState>,
    Path(conversation_id): Path<String>,
) -> Result<impl IntoResponse, ChatApiError> {
    let conversation_id = parse_conversation_id(&conversation_id)?;

    let handler = DeleteConversationHandler::new(state.store.clone());
    handler
        .handle(DeleteConversationCommand { conversation_id })
        .await?;

    Ok((
        StatusCode::OK,
        Json(StatusMessage::new("Conversation deleted successfully")),
    ))
}

/// GET /api/chat/conversations/:id/messages - Full history in append order.
///
/// # Errors
/// - 404 Not Found: Unknown conversation
pub async fn get_messages(
    State(state): State<ChatAppState>,
    Path(conversation_id): Path<String>,
) -> Result<impl IntoResponse, ChatApiError> {
    let conversation_id = parse_conversation_id(&conversation_id)?;

    let handler = GetConversationHandler::new(state.store.clone());
    let messages = handler
        .messages(GetConversationQuery { conversation_id })
        .await?;

    let response = MessagesResponse {
        messages: messages.iter().map(MessageView::from).collect(),
    };
    Ok((StatusCode::OK, Json(response)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type for chat endpoints.
#[derive(Debug)]
pub enum ChatApiError {
    BadRequest(String),
    NotFound(String, String),
    Internal(String),
}

impl From<DomainError> for ChatApiError {
    fn from(err: DomainError) -> Self {
        match err.code() {
            ErrorCode::ConversationNotFound => {
                let id = err
                    .details
                    .get("conversation_id")
                    .cloned()
                    .unwrap_or_default();
                ChatApiError::NotFound("Conversation".to_string(), id)
            }
            ErrorCode::ValidationFailed => ChatApiError::BadRequest(err.message),
            _ => ChatApiError::Internal(err.to_string()),
        }
    }
}

impl From<JsonRejection> for ChatApiError {
    fn from(rejection: JsonRejection) -> Self {
        ChatApiError::BadRequest(rejection.body_text())
    }
}

impl From<SendMessageError> for ChatApiError {
    fn from(err: SendMessageError) -> Self {
        match err {
            SendMessageError::EmptyContent => {
                ChatApiError::BadRequest("Message content cannot be empty".to_string())
            }
            SendMessageError::ConversationNotFound(id) => {
                ChatApiError::NotFound("Conversation".to_string(), id.to_string())
            }
            other => ChatApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ChatApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ChatApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg))
            }
            ChatApiError::NotFound(resource, id) => {
                (StatusCode::NOT_FOUND, ErrorResponse::not_found(&resource, &id))
            }
            ChatApiError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::internal("An internal error occurred"),
                )
            }
        };

        (status, Json(error)).into_response()
    }
}
