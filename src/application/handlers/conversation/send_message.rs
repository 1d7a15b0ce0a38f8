//! SendMessage command handler.
//!
//! Runs one exchange: resolve or create the conversation, store the user
//! message, generate a reply, store the reply.
//!
//! # Partial effects
//!
//! Nothing is rolled back. If generation or the second append fails, the
//! user message (and an implicitly created conversation) stays in the store.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::conversation::{Message, Metadata};
use crate::domain::foundation::{ConversationId, DomainError};
use crate::ports::{ConversationStore, GenerationError, ResponseGenerator};

/// Command to send a message, optionally into an existing conversation.
#[derive(Debug, Clone)]
pub struct SendMessageCommand {
    /// The message content.
    pub content: String,
    /// Target conversation; a new one is created when absent.
    pub conversation_id: Option<ConversationId>,
    /// Client metadata stored on the user message.
    pub metadata: Option<Metadata>,
}

impl SendMessageCommand {
    /// Creates a command that starts a new conversation.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            conversation_id: None,
            metadata: None,
        }
    }

    /// Targets an existing conversation.
    pub fn in_conversation(mut self, conversation_id: ConversationId) -> Self {
        self.conversation_id = Some(conversation_id);
        self
    }

    /// Attaches client metadata.
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

/// Errors that can occur when sending a message.
#[derive(Debug, Clone, Error)]
pub enum SendMessageError {
    /// Message content is empty or whitespace only.
    #[error("Validation error: message content cannot be empty")]
    EmptyContent,

    /// The referenced conversation does not exist.
    #[error("Conversation not found: {0}")]
    ConversationNotFound(ConversationId),

    /// Reply generation failed.
    #[error("Generation error: {0}")]
    GenerationFailed(String),

    /// Store failure during the exchange.
    #[error("Store error: {0}")]
    StoreFailed(String),
}

impl From<DomainError> for SendMessageError {
    fn from(err: DomainError) -> Self {
        SendMessageError::StoreFailed(err.to_string())
    }
}

impl From<GenerationError> for SendMessageError {
    fn from(err: GenerationError) -> Self {
        SendMessageError::GenerationFailed(err.to_string())
    }
}

/// Result of a completed exchange.
#[derive(Debug, Clone)]
pub struct SendMessageResult {
    /// The stored user message.
    pub user_message: Message,
    /// Conversation the exchange landed in.
    pub conversation_id: ConversationId,
    /// The stored assistant reply.
    pub assistant_message: Message,
}

/// Handler for SendMessage commands.
pub struct SendMessageHandler {
    store: Arc<dyn ConversationStore>,
    generator: Arc<dyn ResponseGenerator>,
}

impl SendMessageHandler {
    /// Creates a new handler with the given dependencies.
    pub fn new(store: Arc<dyn ConversationStore>, generator: Arc<dyn ResponseGenerator>) -> Self {
        Self { store, generator }
    }

    /// Handles a send message command.
    ///
    /// No store lock is held while the generator runs.
    pub async fn handle(
        &self,
        cmd: SendMessageCommand,
    ) -> Result<SendMessageResult, SendMessageError> {
        if cmd.content.trim().is_empty() {
            return Err(SendMessageError::EmptyContent);
        }

        let conversation_id = match cmd.conversation_id {
            Some(id) => self
                .store
                .get(&id)
                .await?
                .ok_or(SendMessageError::ConversationNotFound(id))?
                .id(),
            None => self.store.create(None).await?.id(),
        };

        let user_message = Message::user(cmd.content).with_metadata(cmd.metadata);
        let conversation = self
            .store
            .append_message(&conversation_id, user_message.clone())
            .await?
            .ok_or(SendMessageError::ConversationNotFound(conversation_id))?;

        let reply = self.generator.generate(&conversation, &user_message).await?;

        let assistant_message = Message::assistant(reply);
        self.store
            .append_message(&conversation_id, assistant_message.clone())
            .await?
            .ok_or(SendMessageError::ConversationNotFound(conversation_id))?;

        tracing::info!(
            conversation_id = %conversation_id,
            "Processed message exchange"
        );

        Ok(SendMessageResult {
            user_message,
            conversation_id,
            assistant_message,
        })
    }
}
