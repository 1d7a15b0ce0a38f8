//! Conversation entity - ordered, append-only thread of messages.

use crate::domain::conversation::{Message, Metadata, Role};
use crate::domain::foundation::{ConversationId, Timestamp};

/// Maximum characters kept when a title is derived from message content.
pub const TITLE_MAX_CHARS: usize = 50;

/// Only the first two messages of a conversation may name it.
const TITLE_SOURCE_WINDOW: usize = 2;

/// Conversation entity - owns its messages exclusively.
///
/// # Invariants
///
/// - Messages keep append order
/// - `updated_at >= created_at`, and `updated_at` never moves backwards
/// - `id` is fixed at creation
#[derive(Debug, Clone, PartialEq)]
pub struct Conversation {
    id: ConversationId,
    title: Option<String>,
    messages: Vec<Message>,
    created_at: Timestamp,
    updated_at: Timestamp,
    metadata: Option<Metadata>,
}

impl Conversation {
    /// Creates an empty conversation with a fresh identifier.
    pub fn new(title: Option<String>) -> Self {
        let now = Timestamp::now();
        Self {
            id: ConversationId::new(),
            title,
            messages: Vec::new(),
            created_at: now,
            updated_at: now,
            metadata: None,
        }
    }

    /// Reconstitutes a conversation from persistence.
    pub fn reconstitute(
        id: ConversationId,
        title: Option<String>,
        messages: Vec<Message>,
        created_at: Timestamp,
        updated_at: Timestamp,
        metadata: Option<Metadata>,
    ) -> Self {
        Self {
            id,
            title,
            messages,
            created_at,
            updated_at,
            metadata,
        }
    }

    // === Accessors ===

    pub fn id(&self) -> ConversationId {
        self.id
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    pub fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }

    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    // === Mutations ===

    /// Appends a message, refreshes `updated_at`, and derives a title when
    /// the conversation is still unnamed.
    ///
    /// The title is taken from a user message that lands in the first two
    /// slots. A system or assistant message in those slots never names the
    /// conversation.
    pub fn add_message(&mut self, message: Message) {
        let derived_title = (!self.has_title()
            && message.role() == Role::User
            && self.messages.len() < TITLE_SOURCE_WINDOW)
            .then(|| derive_title(message.content()));

        self.messages.push(message);
        self.touch();

        if derived_title.is_some() {
            self.title = derived_title;
        }
    }

    fn has_title(&self) -> bool {
        self.title.as_deref().is_some_and(|t| !t.is_empty())
    }

    fn touch(&mut self) {
        let now = Timestamp::now();
        if self.updated_at.is_before(&now) {
            self.updated_at = now;
        }
    }
}

/// Builds a title from message content, truncating to [`TITLE_MAX_CHARS`]
/// characters with a trailing ellipsis.
pub fn derive_title(content: &str) -> String {
    match content.char_indices().nth(TITLE_MAX_CHARS) {
        Some((cut, _)) => format!("{}...", &content[..cut]),
        None => content.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    mod construction {
        use super::*;

        #[test]
        fn new_conversation_is_empty() {
            let conv = Conversation::new(None);
            assert_eq!(conv.message_count(), 0);
            assert!(conv.title().is_none());
            assert_eq!(conv.created_at(), conv.updated_at());
        }

        #[test]
        fn new_conversation_keeps_given_title() {
            let conv = Conversation::new(Some("Planning".to_string()));
            assert_eq!(conv.title(), Some("Planning"));
        }
    }

    mod title_derivation {
        use super::*;

        #[test]
        fn short_first_user_message_becomes_title() {
            let mut conv = Conversation::new(None);
            conv.add_message(Message::user("Hi"));
            assert_eq!(conv.title(), Some("Hi"));
        }

        #[test]
        fn long_first_user_message_is_truncated_with_ellipsis() {
            let content = "a".repeat(60);
            let mut conv = Conversation::new(None);
            conv.add_message(Message::user(content.clone()));

            let expected = format!("{}...", &content[..50]);
            assert_eq!(conv.title(), Some(expected.as_str()));
        }

        #[test]
        fn exactly_fifty_characters_is_not_truncated() {
            let content = "b".repeat(50);
            let mut conv = Conversation::new(None);
            conv.add_message(Message::user(content.clone()));
            assert_eq!(conv.title(), Some(content.as_str()));
        }

        #[test]
        fn truncation_counts_characters_not_bytes() {
            let content = "é".repeat(55);
            assert_eq!(derive_title(&content), format!("{}...", "é".repeat(50)));
        }

        #[test]
        fn existing_title_is_kept() {
            let mut conv = Conversation::new(Some("Named".to_string()));
            conv.add_message(Message::user("Hello"));
            assert_eq!(conv.title(), Some("Named"));
        }

        #[test]
        fn empty_title_counts_as_unset() {
            let mut conv = Conversation::new(Some(String::new()));
            conv.add_message(Message::user("Hello"));
            assert_eq!(conv.title(), Some("Hello"));
        }

        #[test]
        fn second_message_can_name_conversation() {
            let mut conv = Conversation::new(None);
            conv.add_message(Message::system("You are helpful"));
            assert!(conv.title().is_none());

            conv.add_message(Message::user("Second slot"));
            assert_eq!(conv.title(), Some("Second slot"));
        }

        #[test]
        fn third_message_never_names_conversation() {
            let mut conv = Conversation::new(None);
            conv.add_message(Message::system("one"));
            conv.add_message(Message::assistant("two"));
            conv.add_message(Message::user("three"));
            assert!(conv.title().is_none());
        }

        #[test]
        fn assistant_message_never_names_conversation() {
            let mut conv = Conversation::new(None);
            conv.add_message(Message::assistant("I speak first"));
            assert!(conv.title().is_none());
        }

        #[test]
        fn later_user_message_does_not_overwrite_derived_title() {
            let mut conv = Conversation::new(None);
            conv.add_message(Message::user("First"));
            conv.add_message(Message::user("Second"));
            assert_eq!(conv.title(), Some("First"));
        }
    }

    mod timestamps {
        use super::*;

        #[test]
        fn add_message_refreshes_updated_at() {
            let mut conv = Conversation::new(None);
            let before = conv.updated_at();
            std::thread::sleep(std::time::Duration::from_millis(5));

            conv.add_message(Message::user("Hello"));
            assert!(before.is_before(&conv.updated_at()));
        }

        #[test]
        fn updated_at_never_moves_backwards() {
            let future = Timestamp::now().plus_millis(60_000);
            let mut conv = Conversation::reconstitute(
                ConversationId::new(),
                None,
                Vec::new(),
                future,
                future,
                None,
            );

            conv.add_message(Message::user("Hello"));
            assert_eq!(conv.updated_at(), future);
            assert!(conv.updated_at() >= conv.created_at());
        }
    }

    fn role_strategy() -> impl Strategy<Value = Role> {
        prop_oneof![Just(Role::User), Just(Role::Assistant), Just(Role::System)]
    }

    proptest! {
        #[test]
        fn appends_preserve_order_and_monotonic_updated_at(
            entries in prop::collection::vec((role_strategy(), ".{0,80}"), 0..20)
        ) {
            let mut conv = Conversation::new(None);
            let mut expected_ids = Vec::new();
            let mut last_updated = conv.updated_at();

            for (role, content) in entries {
                let message = Message::new(role, content);
                expected_ids.push(*message.id());
                conv.add_message(message);

                prop_assert!(conv.updated_at() >= last_updated);
                prop_assert!(conv.updated_at() >= conv.created_at());
                last_updated = conv.updated_at();
            }

            let actual_ids: Vec<_> = conv.messages().iter().map(|m| *m.id()).collect();
            prop_assert_eq!(actual_ids, expected_ids);
        }
    }
}
