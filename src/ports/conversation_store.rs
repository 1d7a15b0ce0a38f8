//! Conversation store port.
//!
//! Defines the contract for keeping Conversation aggregates and their
//! messages. The in-memory adapter is the only implementation today; a
//! durable storage engine only has to satisfy this trait.
//!
//! # Design
//!
//! - **Misses are values**: lookups that find nothing return `None`/`false`
//!   instead of an error, so callers branch without error-based control flow
//! - **Errors are infrastructure failures only**: `DomainError` is reserved
//!   for conditions the caller cannot act on
//! - **Snapshots out**: every read returns an owned copy; no caller holds a
//!   reference into the store

use crate::domain::conversation::{Conversation, Message};
use crate::domain::foundation::{ConversationId, DomainError};
use async_trait::async_trait;

/// Store port for Conversation aggregates.
///
/// Implementations must ensure:
/// - Messages are kept in append order
/// - Appends to the same conversation are serialized
/// - No partial append or partial delete is ever observable
#[async_trait]
pub trait ConversationStore: Send + Sync {
    /// Creates and stores a new, empty conversation.
    async fn create(&self, title: Option<String>) -> Result<Conversation, DomainError>;

    /// Finds a conversation by its ID.
    ///
    /// Returns `None` if not found.
    async fn get(&self, id: &ConversationId) -> Result<Option<Conversation>, DomainError>;

    /// Lists conversations, most recently updated first.
    ///
    /// Ties on `updated_at` are broken by ascending ID so that paging is
    /// stable across calls. `offset` is applied before `limit`.
    async fn list(&self, limit: usize, offset: usize) -> Result<Vec<Conversation>, DomainError>;

    /// Appends a message to a conversation.
    ///
    /// Runs title derivation and refreshes `updated_at`. Returns the updated
    /// conversation, or `None` without side effects if the ID is unknown.
    async fn append_message(
        &self,
        id: &ConversationId,
        message: Message,
    ) -> Result<Option<Conversation>, DomainError>;

    /// Deletes a conversation and all of its messages.
    ///
    /// Returns `false` if the conversation did not exist.
    async fn delete(&self, id: &ConversationId) -> Result<bool, DomainError>;

    /// Returns the number of stored conversations.
    async fn count(&self) -> Result<usize, DomainError>;

    /// Removes every conversation.
    async fn clear(&self) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn conversation_store_is_object_safe() {
        fn _accepts_dyn(_store: &dyn ConversationStore) {}
    }
}
