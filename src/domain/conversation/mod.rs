//! Conversation domain module.
//!
//! A conversation is an append-only thread of messages with a derived title
//! and activity timestamps.

mod conversation;
mod message;

pub use conversation::{derive_title, Conversation, TITLE_MAX_CHARS};
pub use message::{Message, Metadata, Role};
