//! Conversation command and query handlers.
//!
//! Handles message exchanges plus conversation create/get/list/delete.

mod create_conversation;
mod delete_conversation;
mod get_conversation;
mod list_conversations;
mod send_message;

pub use create_conversation::{CreateConversationCommand, CreateConversationHandler};
pub use delete_conversation::{DeleteConversationCommand, DeleteConversationHandler};
pub use get_conversation::{GetConversationHandler, GetConversationQuery};
pub use list_conversations::{
    ConversationPage, ListConversationsHandler, ListConversationsQuery, DEFAULT_PAGE_LIMIT,
};
pub use send_message::{
    SendMessageCommand, SendMessageError, SendMessageHandler, SendMessageResult,
};
