//! CreateConversationHandler - explicit conversation creation.

use std::sync::Arc;

use crate::domain::conversation::Conversation;
use crate::domain::foundation::DomainError;
use crate::ports::ConversationStore;

/// Command to create an empty conversation.
#[derive(Debug, Clone, Default)]
pub struct CreateConversationCommand {
    pub title: Option<String>,
}

/// Handler for creating conversations.
pub struct CreateConversationHandler {
    store: Arc<dyn ConversationStore>,
}

impl CreateConversationHandler {
    pub fn new(store: Arc<dyn ConversationStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: CreateConversationCommand,
    ) -> Result<Conversation, DomainError> {
        self.store.create(cmd.title).await
    }
}
