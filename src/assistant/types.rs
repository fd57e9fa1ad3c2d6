use serde::Serialize;

use crate::assistant::error::EndpointErrorKind;

/// Seeded greeting shown when a session starts or is reset.
pub const GREETING_TEXT: &str =
    "Hello! I'm your AI legal assistant. How can I help you today?";
pub const GREETING_REPLIES: [&str; 3] = ["Draft a contract", "Legal advice", "Consult a lawyer"];

/// The one user-visible failure presentation. Every endpoint error collapses
/// to this entry; the underlying kind survives only in telemetry and logs.
pub const FALLBACK_TEXT: &str = "I apologize, but I encountered an error. \
     Please try again or contact support if the issue persists.";
pub const FALLBACK_REPLIES: [&str; 2] = ["Try again", "Contact support"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    User,
    Assistant,
}

/// One turn of the conversation. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversationEntry {
    pub speaker: Speaker,
    pub text: String,
    pub suggested_replies: Vec<String>,
}

impl ConversationEntry {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::User,
            text: text.into(),
            suggested_replies: Vec::new(),
        }
    }

    pub fn assistant(text: impl Into<String>, suggested_replies: Vec<String>) -> Self {
        Self {
            speaker: Speaker::Assistant,
            text: text.into(),
            suggested_replies,
        }
    }

    pub fn fallback() -> Self {
        Self::assistant(
            FALLBACK_TEXT,
            FALLBACK_REPLIES.iter().map(|reply| reply.to_string()).collect(),
        )
    }

    fn greeting() -> Self {
        Self::assistant(
            GREETING_TEXT,
            GREETING_REPLIES.iter().map(|reply| reply.to_string()).collect(),
        )
    }
}

/// Ordered, append-only conversation log. Render order equals creation
/// order. Retention is bounded: appending beyond `max_entries` evicts the
/// oldest entries; retained entries are never reordered or mutated.
#[derive(Debug, Clone, Serialize)]
pub struct ConversationLog {
    entries: Vec<ConversationEntry>,
    max_entries: usize,
}

impl ConversationLog {
    /// A log seeded with the assistant greeting. `max_entries` is clamped to
    /// at least 2 so a user turn and its reply always fit.
    pub fn seeded(max_entries: usize) -> Self {
        let mut log = Self {
            entries: Vec::new(),
            max_entries: max_entries.max(2),
        };
        log.push(ConversationEntry::greeting());
        log
    }

    pub fn push(&mut self, entry: ConversationEntry) {
        if self.entries.len() == self.max_entries {
            self.entries.remove(0);
        }
        self.entries.push(entry);
    }

    pub fn reset(&mut self) {
        self.entries.clear();
        self.entries.push(ConversationEntry::greeting());
    }

    pub fn entries(&self) -> &[ConversationEntry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&ConversationEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Result of a `submit` call, reported to the caller alongside the log
/// mutation it performed.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Input was empty after trimming; the log is unchanged.
    Ignored,
    /// A request is already in flight; the log is unchanged.
    Busy,
    /// The endpoint answered; the assistant entry carries its reply.
    Completed { reply: ConversationEntry },
    /// The endpoint failed; the fallback entry was appended.
    Failed { kind: EndpointErrorKind },
}
