//! Response Generator Port - produces assistant replies.
//!
//! This port hides how reply text is produced so the exchange orchestrator
//! never depends on a specific backend. Today the only implementation is a
//! heuristic stand-in; a language-model client plugs in behind the same trait.
//!
//! # Example
//!
//! ```ignore
//! use async_trait::async_trait;
//!
//! struct EchoGenerator;
//!
//! #[async_trait]
//! impl ResponseGenerator for EchoGenerator {
//!     async fn generate(
//!         &self,
//!         _conversation: &Conversation,
//!         user_message: &Message,
//!     ) -> Result<String, GenerationError> {
//!         Ok(user_message.content().to_string())
//!     }
//!
//!     fn generator_info(&self) -> GeneratorInfo {
//!         GeneratorInfo::new("echo", "echo-1")
//!     }
//! }
//! ```

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::conversation::{Conversation, Message};

/// Port for reply generation.
///
/// Implementations must not mutate conversation state; persisting the reply
/// is the orchestrator's job.
#[async_trait]
pub trait ResponseGenerator: Send + Sync {
    /// Produces reply text for `user_message`.
    ///
    /// `conversation` already contains `user_message` as its last entry.
    async fn generate(
        &self,
        conversation: &Conversation,
        user_message: &Message,
    ) -> Result<String, GenerationError>;

    /// Describes the backend (name and model) for logging.
    fn generator_info(&self) -> GeneratorInfo;
}

/// Static description of a generator backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorInfo {
    /// Backend name (e.g. "mock").
    pub name: String,
    /// Model identifier.
    pub model: String,
}

impl GeneratorInfo {
    pub fn new(name: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
        }
    }
}

/// Errors from reply generation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GenerationError {
    /// Backend could not be reached or refused the request.
    #[error("generator unavailable: {message}")]
    Unavailable {
        /// Error details.
        message: String,
    },
}

impl GenerationError {
    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_generator_is_object_safe() {
        fn _accepts_dyn(_generator: &dyn ResponseGenerator) {}
    }

    #[test]
    fn unavailable_error_displays_message() {
        let err = GenerationError::unavailable("connection refused");
        assert_eq!(err.to_string(), "generator unavailable: connection refused");
    }

    #[test]
    fn generator_info_keeps_fields() {
        let info = GeneratorInfo::new("mock", "mock-heuristic-1");
        assert_eq!(info.name, "mock");
        assert_eq!(info.model, "mock-heuristic-1");
    }
}
