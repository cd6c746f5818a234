//! Core data types for the faqbot evaluation engine
//!
//! Knowledge entries and the persona are owned by the knowledge repository;
//! the engine only ever reads snapshots of them. Turns are owned by a
//! [`ConversationSession`](crate::session::ConversationSession).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a knowledge entry
///
/// Opaque string so hand-written ids (`faq-1`) and generated UUIDs coexist.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub String);

impl EntryId {
    /// Create a fresh random entry ID
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EntryId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// One question/answer pair of the knowledge base
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    pub id: EntryId,
    pub question: String,
    pub answer: String,
    pub category: String,
}

/// Draft of a knowledge entry before the repository assigns its id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEntry {
    pub question: String,
    pub answer: String,
    pub category: String,
}

/// Bot name and tone of voice embedded in the grounding contract
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Persona {
    pub name: String,
    pub tone_description: String,
}

impl Default for Persona {
    fn default() -> Self {
        Self {
            name: "UniBot".to_string(),
            tone_description: "um assistente acadêmico amigável e prestativo, sempre pronto para ajudar os alunos com suas dúvidas sobre a universidade.".to_string(),
        }
    }
}

/// Unique identifier for conversation turns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TurnId(pub Uuid);

impl TurnId {
    /// Create a new random turn ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a turn ID from a string
    pub fn from_string(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl Default for TurnId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TurnId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of one simulation run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Who produced a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    User,
    Bot,
}

impl std::fmt::Display for Speaker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Speaker::User => write!(f, "user"),
            Speaker::Bot => write!(f, "bot"),
        }
    }
}

/// Outcome of classifying a bot reply
///
/// User turns stay `Unset`. Bot turns are classified once, at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    Unset,
    Grounded,
    Fallback,
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Classification::Unset => write!(f, "unset"),
            Classification::Grounded => write!(f, "grounded"),
            Classification::Fallback => write!(f, "fallback"),
        }
    }
}

/// Human annotation on a bot turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feedback {
    Unset,
    Helpful,
    NotHelpful,
}

impl Feedback {
    pub fn is_set(&self) -> bool {
        !matches!(self, Feedback::Unset)
    }
}

impl From<bool> for Feedback {
    fn from(helpful: bool) -> Self {
        if helpful {
            Feedback::Helpful
        } else {
            Feedback::NotHelpful
        }
    }
}

/// One utterance in a conversation session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    pub id: TurnId,
    pub speaker: Speaker,
    pub text: String,
    pub classification: Classification,
    pub feedback: Feedback,
    pub created_at: DateTime<Utc>,
}

impl Turn {
    pub(crate) fn user(text: String) -> Self {
        Self {
            id: TurnId::new(),
            speaker: Speaker::User,
            text,
            classification: Classification::Unset,
            feedback: Feedback::Unset,
            created_at: Utc::now(),
        }
    }

    pub(crate) fn bot(text: String, classification: Classification) -> Self {
        Self {
            id: TurnId::new(),
            speaker: Speaker::Bot,
            text,
            classification,
            feedback: Feedback::Unset,
            created_at: Utc::now(),
        }
    }

    pub fn is_bot(&self) -> bool {
        self.speaker == Speaker::Bot
    }

    pub fn is_user(&self) -> bool {
        self.speaker == Speaker::User
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_id_roundtrip() {
        let id = TurnId::new();
        let parsed = TurnId::from_string(&id.to_string()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_entry_id_serializes_as_plain_string() {
        let entry = KnowledgeEntry {
            id: EntryId::from("faq-1"),
            question: "Q".to_string(),
            answer: "A".to_string(),
            category: "C".to_string(),
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["id"], "faq-1");
    }

    #[test]
    fn test_new_turns_start_unannotated() {
        let user = Turn::user("Oi".to_string());
        assert!(user.is_user());
        assert_eq!(user.classification, Classification::Unset);
        assert_eq!(user.feedback, Feedback::Unset);

        let bot = Turn::bot("Olá!".to_string(), Classification::Grounded);
        assert!(bot.is_bot());
        assert!(!bot.feedback.is_set());
    }

    #[test]
    fn test_feedback_from_bool() {
        assert_eq!(Feedback::from(true), Feedback::Helpful);
        assert_eq!(Feedback::from(false), Feedback::NotHelpful);
    }
}
