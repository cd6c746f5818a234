//! Conversation session: the append-only turn log of one simulation run
//!
//! Bot turns are classified when they are appended and never reclassified.
//! Feedback is the only post-creation mutation and the first write wins.
//! The session holds no lock; callers serialize dispatches themselves
//! (see [`ChatSimulator`](crate::simulator::ChatSimulator)).

use crate::error::{FaqbotError, Result};
use crate::evaluation::{summarize, EvaluationSnapshot};
use crate::grounding::classify;
use crate::types::{Feedback, SessionId, Turn, TurnId};
use tracing::debug;

#[derive(Debug, Default)]
pub struct ConversationSession {
    id: SessionId,
    turns: Vec<Turn>,
}

impl ConversationSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Record a user utterance
    ///
    /// Rejects text that is blank after trimming without touching the log.
    /// The stored text is trimmed.
    pub fn append_user_turn(&mut self, text: &str) -> Result<Turn> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(FaqbotError::Validation(
                "user utterance must not be empty".to_string(),
            ));
        }

        let turn = Turn::user(trimmed.to_string());
        debug!("Session {}: user turn {}", self.id, turn.id);
        self.turns.push(turn.clone());
        Ok(turn)
    }

    /// Record a bot reply, classifying it on the way in
    pub fn append_bot_turn(&mut self, text: &str) -> Turn {
        let classification = classify(text);
        let turn = Turn::bot(text.to_string(), classification);
        debug!(
            "Session {}: bot turn {} classified {}",
            self.id, turn.id, classification
        );
        self.turns.push(turn.clone());
        turn
    }

    /// Annotate a bot turn as helpful or not
    ///
    /// Unknown ids, user turns and already-annotated turns are ignored.
    /// Returns whether the annotation was applied.
    pub fn record_feedback(&mut self, turn_id: TurnId, helpful: bool) -> bool {
        let Some(turn) = self.turns.iter_mut().find(|t| t.id == turn_id) else {
            debug!("Feedback ignored: turn {} not found", turn_id);
            return false;
        };

        if !turn.is_bot() {
            debug!("Feedback ignored: turn {} is a user turn", turn_id);
            return false;
        }

        if turn.feedback.is_set() {
            debug!(
                "Feedback ignored: turn {} already marked {:?}",
                turn_id, turn.feedback
            );
            return false;
        }

        turn.feedback = Feedback::from(helpful);
        true
    }

    /// Discard every turn. Idempotent.
    pub fn reset(&mut self) {
        if !self.turns.is_empty() {
            debug!("Session {}: discarding {} turns", self.id, self.turns.len());
        }
        self.turns.clear();
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn get(&self, turn_id: TurnId) -> Option<&Turn> {
        self.turns.iter().find(|t| t.id == turn_id)
    }

    /// Bot turns in order, for 1-based addressing from the CLI
    pub fn bot_turns(&self) -> impl Iterator<Item = &Turn> {
        self.turns.iter().filter(|t| t.is_bot())
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Fresh statistics over the current log
    pub fn summarize(&self) -> EvaluationSnapshot {
        summarize(&self.turns)
    }
}
