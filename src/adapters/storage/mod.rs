//! Storage adapters for conversations.
//!
//! - `InMemoryConversationStore` - process-local store, reset on restart

mod in_memory_conversation_store;

pub use in_memory_conversation_store::InMemoryConversationStore;
