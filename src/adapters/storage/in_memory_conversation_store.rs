//! In-Memory Conversation Store Adapter
//!
//! Keeps conversations in a process-local map. Contents live until the
//! process exits or [`ConversationStore::clear`] is called.
//!
//! Each conversation sits behind its own mutex inside a map guarded by a
//! read/write lock:
//! - appends hold the map read lock plus the conversation's mutex, so two
//!   appends to one conversation are serialized while appends to different
//!   conversations run in parallel
//! - create, delete and clear hold the map write lock, which waits for every
//!   in-flight append to finish

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

use crate::domain::conversation::{Conversation, Message};
use crate::domain::foundation::{ConversationId, DomainError};
use crate::ports::ConversationStore;

type ConversationSlot = Arc<Mutex<Conversation>>;

/// In-memory storage for conversations
#[derive(Debug, Clone, Default)]
pub struct InMemoryConversationStore {
    conversations: Arc<RwLock<HashMap<ConversationId, ConversationSlot>>>,
}

impl InMemoryConversationStore {
    /// Create a new, empty store
    pub fn new() -> Self {
        tracing::info!("Initialized in-memory conversation store");
        Self::default()
    }

    /// Stores an existing conversation as-is, replacing any with the same ID.
    pub async fn insert(&self, conversation: Conversation) {
        let id = conversation.id();
        self.conversations
            .write()
            .await
            .insert(id, Arc::new(Mutex::new(conversation)));
    }
}

#[async_trait]
impl ConversationStore for InMemoryConversationStore {
    async fn create(&self, title: Option<String>) -> Result<Conversation, DomainError> {
        let conversation = Conversation::new(title);
        let id = conversation.id();

        self.conversations
            .write()
            .await
            .insert(id, Arc::new(Mutex::new(conversation.clone())));

        tracing::info!(conversation_id = %id, "Created conversation");
        Ok(conversation)
    }

    async fn get(&self, id: &ConversationId) -> Result<Option<Conversation>, DomainError> {
        let conversations = self.conversations.read().await;
        match conversations.get(id) {
            Some(slot) => Ok(Some(slot.lock().await.clone())),
            None => Ok(None),
        }
    }

    async fn list(&self, limit: usize, offset: usize) -> Result<Vec<Conversation>, DomainError> {
        let conversations = self.conversations.read().await;

        let mut snapshot = Vec::with_capacity(conversations.len());
        for slot in conversations.values() {
            snapshot.push(slot.lock().await.clone());
        }
        drop(conversations);

        snapshot.sort_by(|a, b| {
            b.updated_at()
                .cmp(&a.updated_at())
                .then_with(|| a.id().cmp(&b.id()))
        });

        Ok(snapshot.into_iter().skip(offset).take(limit).collect())
    }

    async fn append_message(
        &self,
        id: &ConversationId,
        message: Message,
    ) -> Result<Option<Conversation>, DomainError> {
        let conversations = self.conversations.read().await;
        let Some(slot) = conversations.get(id) else {
            tracing::warn!(conversation_id = %id, "Conversation not found");
            return Ok(None);
        };

        let mut conversation = slot.lock().await;
        let role = message.role();
        conversation.add_message(message);

        tracing::info!(
            conversation_id = %id,
            role = %role,
            message_count = conversation.message_count(),
            "Added message to conversation"
        );
        Ok(Some(conversation.clone()))
    }

    async fn delete(&self, id: &ConversationId) -> Result<bool, DomainError> {
        let removed = self.conversations.write().await.remove(id).is_some();
        if removed {
            tracing::info!(conversation_id = %id, "Deleted conversation");
        }
        Ok(removed)
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.conversations.read().await.len())
    }

    async fn clear(&self) -> Result<(), DomainError> {
        self.conversations.write().await.clear();
        tracing::info!("Cleared all conversations");
        Ok(())
    }
}
