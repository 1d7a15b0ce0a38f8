//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ConversationStore` - Keeps conversations and their messages
//! - `ResponseGenerator` - Produces assistant replies

mod conversation_store;
mod response_generator;

pub use conversation_store::ConversationStore;
pub use response_generator::{GenerationError, GeneratorInfo, ResponseGenerator};
