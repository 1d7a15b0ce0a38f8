//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Response generator implementations
//! - `http` - Axum REST API
//! - `storage` - Conversation store implementations

pub mod ai;
pub mod http;
pub mod storage;

pub use ai::MockResponseGenerator;
pub use http::{api_router, ChatAppState};
pub use storage::InMemoryConversationStore;
