//! Mock Response Generator.
//!
//! Heuristic stand-in for a language-model backend. Replies are picked from
//! canned text by keyword matching and message shape, after a simulated
//! processing delay.
//!
//! # Selection order
//!
//! 1. First trigger phrase found in the lowercased, trimmed content
//! 2. Content containing `?` gets a question prefix plus a generic reply
//! 3. Content over 100 characters gets the "lot of detail" prefix
//! 4. Conversations with more than 5 messages get the "chatting for a while"
//!    prefix
//! 5. Otherwise a generic reply
//!
//! # Example
//!
//! ```ignore
//! let generator = MockResponseGenerator::new()
//!     .with_delay_range(Duration::ZERO, Duration::ZERO)
//!     .with_seed(7);
//!
//! let reply = generator.generate(&conversation, &message).await?;
//! ```

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::conversation::{Conversation, Message};
use crate::ports::{GenerationError, GeneratorInfo, ResponseGenerator};

/// Trigger phrases checked in this order; the first substring hit wins.
const TRIGGER_REPLIES: &[(&str, &str)] = &[
    ("hello", "Hello! How can I help you today?"),
    ("hi", "Hi there! What can I assist you with?"),
    (
        "how are you",
        "I'm doing well, thank you for asking! How can I help you?",
    ),
    (
        "what is your name",
        "I'm a helpful AI assistant. What would you like to know?",
    ),
    (
        "thanks",
        "You're welcome! Is there anything else I can help you with?",
    ),
    (
        "thank you",
        "You're very welcome! Feel free to ask if you need more help.",
    ),
    ("bye", "Goodbye! Have a great day!"),
    ("goodbye", "Goodbye! Feel free to come back anytime."),
];

const GENERIC_REPLIES: &[&str] = &[
    "That's an interesting question! Let me think about that.",
    "I understand what you're asking. Here's my perspective on that topic.",
    "That's a great point. I'd be happy to help you with that.",
    "I can definitely assist you with that. Let me provide some information.",
    "That's a thoughtful question. Here's what I think about it.",
    "I appreciate you asking that. Let me share some insights.",
    "That's something I can help with. Here's my response.",
    "Thanks for the question! I'll do my best to provide a helpful answer.",
    "I see what you're getting at. Let me elaborate on that topic.",
    "That's an excellent question. Here's how I would approach it.",
];

const QUESTION_PREFIXES: &[&str] = &[
    "That's a great question! ",
    "Let me think about that question. ",
    "I'd be happy to answer that. ",
];

const LONG_MESSAGE_PREFIX: &str = "I can see you've provided a lot of detail. ";
const LONG_CONVERSATION_PREFIX: &str = "I notice we've been chatting for a while. ";

/// Content longer than this many characters counts as a long message.
const LONG_MESSAGE_CHARS: usize = 100;
/// Conversations with more messages than this count as long-running.
const LONG_CONVERSATION_MESSAGES: usize = 5;

const DEFAULT_MIN_DELAY: Duration = Duration::from_millis(500);
const DEFAULT_MAX_DELAY: Duration = Duration::from_millis(2000);

/// Heuristic reply generator with simulated latency.
///
/// Cloning shares the RNG and call history.
#[derive(Debug, Clone)]
pub struct MockResponseGenerator {
    rng: Arc<Mutex<StdRng>>,
    min_delay: Duration,
    max_delay: Duration,
    model: String,
    /// Contents of every user message seen; only kept when enabled with
    /// [`MockResponseGenerator::with_call_recording`].
    calls: Option<Arc<Mutex<Vec<String>>>>,
}

impl Default for MockResponseGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl MockResponseGenerator {
    /// Creates a generator with an entropy-seeded RNG and the default
    /// 0.5–2.0 second delay.
    pub fn new() -> Self {
        Self {
            rng: Arc::new(Mutex::new(StdRng::from_entropy())),
            min_delay: DEFAULT_MIN_DELAY,
            max_delay: DEFAULT_MAX_DELAY,
            model: "mock".to_string(),
            calls: None,
        }
    }

    /// Seeds the RNG so reply and delay choices are reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Arc::new(Mutex::new(StdRng::seed_from_u64(seed)));
        self
    }

    /// Sets the simulated latency range. Bounds are swapped if reversed.
    pub fn with_delay_range(mut self, min: Duration, max: Duration) -> Self {
        self.min_delay = min.min(max);
        self.max_delay = min.max(max);
        self
    }

    /// Sets the model name reported in [`GeneratorInfo`].
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Keeps the content of every user message passed to `generate`.
    ///
    /// Off by default; the history grows without bound while enabled.
    pub fn with_call_recording(mut self) -> Self {
        self.calls = Some(Arc::new(Mutex::new(Vec::new())));
        self
    }

    /// Returns the number of recorded calls (zero when recording is off).
    pub fn call_count(&self) -> usize {
        self.calls.as_ref().map_or(0, |calls| {
            calls.lock().unwrap_or_else(PoisonError::into_inner).len()
        })
    }

    /// Returns the recorded user message contents.
    pub fn get_calls(&self) -> Vec<String> {
        self.calls.as_ref().map_or_else(Vec::new, |calls| {
            calls.lock().unwrap_or_else(PoisonError::into_inner).clone()
        })
    }

    fn pick_delay(&self) -> Duration {
        if self.max_delay.is_zero() {
            return Duration::ZERO;
        }
        let min = self.min_delay.as_millis() as u64;
        let max = self.max_delay.as_millis() as u64;
        let millis = self.with_rng(|rng| rng.gen_range(min..=max));
        Duration::from_millis(millis)
    }

    fn pick<'a>(&self, pool: &[&'a str]) -> &'a str {
        self.with_rng(|rng| pool.choose(rng).copied().unwrap_or_default())
    }

    fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut rng)
    }

    /// Chooses the reply text without any delay.
    pub fn compose_reply(&self, conversation: &Conversation, user_message: &Message) -> String {
        let content = user_message.content();
        let normalized = content.trim().to_lowercase();

        if let Some(reply) = trigger_reply(&normalized) {
            return reply.to_string();
        }

        if content.contains('?') {
            let prefix = self.pick(QUESTION_PREFIXES);
            format!("{}{}", prefix, self.pick(GENERIC_REPLIES))
        } else if content.chars().count() > LONG_MESSAGE_CHARS {
            format!("{}{}", LONG_MESSAGE_PREFIX, self.pick(GENERIC_REPLIES))
        } else if conversation.message_count() > LONG_CONVERSATION_MESSAGES {
            format!("{}{}", LONG_CONVERSATION_PREFIX, self.pick(GENERIC_REPLIES))
        } else {
            self.pick(GENERIC_REPLIES).to_string()
        }
    }
}

fn trigger_reply(normalized: &str) -> Option<&'static str> {
    TRIGGER_REPLIES
        .iter()
        .find(|(trigger, _)| normalized.contains(trigger))
        .map(|(_, reply)| *reply)
}

#[async_trait]
impl ResponseGenerator for MockResponseGenerator {
    async fn generate(
        &self,
        conversation: &Conversation,
        user_message: &Message,
    ) -> Result<String, GenerationError> {
        if let Some(calls) = &self.calls {
            calls
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(user_message.content().to_string());
        }

        tracing::debug!(
            conversation_id = %conversation.id(),
            preview = %preview(user_message.content()),
            "Generating response"
        );

        let delay = self.pick_delay();
        if !delay.is_zero() {
            sleep(delay).await;
        }

        let reply = self.compose_reply(conversation, user_message);
        tracing::debug!(preview = %preview(&reply), "Generated response");
        Ok(reply)
    }

    fn generator_info(&self) -> GeneratorInfo {
        GeneratorInfo::new("mock", self.model.clone())
    }
}

fn preview(text: &str) -> String {
    text.chars().take(50).collect()
}
