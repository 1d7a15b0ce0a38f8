//! DeleteConversationHandler - removes a conversation and its messages.

use std::sync::Arc;

use crate::domain::foundation::{ConversationId, DomainError, ErrorCode};
use crate::ports::ConversationStore;

/// Command to delete a conversation.
#[derive(Debug, Clone)]
pub struct DeleteConversationCommand {
    pub conversation_id: ConversationId,
}

/// Handler for deleting conversations.
pub struct DeleteConversationHandler {
    store: Arc<dyn ConversationStore>,
}

impl DeleteConversationHandler {
    pub fn new(store: Arc<dyn ConversationStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: DeleteConversationCommand) -> Result<(), DomainError> {
        if self.store.delete(&cmd.conversation_id).await? {
            Ok(())
        } else {
            Err(DomainError::new(
                ErrorCode::ConversationNotFound,
                format!("Conversation not found: {}", cmd.conversation_id),
            )
            .with_detail("conversation_id", cmd.conversation_id.to_string()))
        }
    }
}
