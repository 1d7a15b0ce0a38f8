//! GetConversationHandler - Query handler for retrieving conversation data.

use std::sync::Arc;

use crate::domain::conversation::{Conversation, Message};
use crate::domain::foundation::{ConversationId, DomainError, ErrorCode};
use crate::ports::ConversationStore;

/// Query to get a conversation.
#[derive(Debug, Clone)]
pub struct GetConversationQuery {
    pub conversation_id: ConversationId,
}

/// Handler for getting conversations and their messages.
pub struct GetConversationHandler {
    store: Arc<dyn ConversationStore>,
}

impl GetConversationHandler {
    pub fn new(store: Arc<dyn ConversationStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetConversationQuery) -> Result<Conversation, DomainError> {
        match self.store.get(&query.conversation_id).await {
            Ok(Some(conversation)) => Ok(conversation),
            Ok(None) => Err(DomainError::new(
                ErrorCode::ConversationNotFound,
                format!("Conversation not found: {}", query.conversation_id),
            )
            .with_detail("conversation_id", query.conversation_id.to_string())),
            Err(e) => Err(e),
        }
    }

    /// Returns the messages of a conversation in append order.
    pub async fn messages(&self, query: GetConversationQuery) -> Result<Vec<Message>, DomainError> {
        let conversation = self.handle(query).await?;
        Ok(conversation.messages().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryConversationStore;

    #[tokio::test]
    async fn get_conversation_returns_stored_conversation() {
        let store = Arc::new(InMemoryConversationStore::new());
        let created = store.create(Some("Notes".to_string())).await.unwrap();
        let handler = GetConversationHandler::new(store);

        let result = handler
            .handle(GetConversationQuery {
                conversation_id: created.id(),
            })
            .await
            .unwrap();
        assert_eq!(result, created);
    }

    #[tokio::test]
    async fn get_conversation_returns_error_when_not_found() {
        let handler = GetConversationHandler::new(Arc::new(InMemoryConversationStore::new()));

        let result = handler
            .handle(GetConversationQuery {
                conversation_id: ConversationId::new(),
            })
            .await;
        assert_eq!(result.unwrap_err().code(), ErrorCode::ConversationNotFound);
    }

    #[tokio::test]
    async fn messages_come_back_in_append_order() {
        let store = Arc::new(InMemoryConversationStore::new());
        let created = store.create(None).await.unwrap();
        for content in ["one", "two", "three"] {
            store
                .append_message(&created.id(), Message::user(content))
                .await
                .unwrap();
        }
        let handler = GetConversationHandler::new(store);

        let messages = handler
            .messages(GetConversationQuery {
                conversation_id: created.id(),
            })
            .await
            .unwrap();
        let contents: Vec<_> = messages.iter().map(|m| m.content()).collect();
        assert_eq!(contents, vec!["one", "two", "three"]);
    }

    #[tokio::test]
    async fn messages_of_unknown_conversation_is_not_found() {
        let handler = GetConversationHandler::new(Arc::new(InMemoryConversationStore::new()));

        let result = handler
            .messages(GetConversationQuery {
                conversation_id: ConversationId::new(),
            })
            .await;
        assert_eq!(result.unwrap_err().code(), ErrorCode::ConversationNotFound);
    }
}
