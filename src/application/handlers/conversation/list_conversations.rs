//! ListConversationsHandler - paged listing, most recent activity first.

use std::sync::Arc;

use crate::domain::conversation::Conversation;
use crate::domain::foundation::DomainError;
use crate::ports::ConversationStore;

pub const DEFAULT_PAGE_LIMIT: usize = 50;

/// Query for a page of conversations.
#[derive(Debug, Clone, Copy)]
pub struct ListConversationsQuery {
    pub limit: usize,
    pub offset: usize,
}

impl Default for ListConversationsQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PAGE_LIMIT,
            offset: 0,
        }
    }
}

/// A page of conversations plus the overall count.
#[derive(Debug, Clone)]
pub struct ConversationPage {
    pub conversations: Vec<Conversation>,
    pub total: usize,
}

/// Handler for listing conversations.
pub struct ListConversationsHandler {
    store: Arc<dyn ConversationStore>,
}

impl ListConversationsHandler {
    pub fn new(store: Arc<dyn ConversationStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        query: ListConversationsQuery,
    ) -> Result<ConversationPage, DomainError> {
        let conversations = self.store.list(query.limit, query.offset).await?;
        let total = self.store.count().await?;
        Ok(ConversationPage {
            conversations,
            total,
        })
    }
}
