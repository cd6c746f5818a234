//! Summary statistics over a turn log.

use crate::types::{Classification, Feedback, Turn};
use serde::{Deserialize, Serialize};

/// Feedback annotations on bot turns
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackTally {
    pub helpful: usize,
    pub not_helpful: usize,
    pub unset: usize,
}

/// Statistics derived from one session's turns
///
/// Always satisfies `grounded_count + fallback_count == total_bot_turns`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvaluationSnapshot {
    pub total_bot_turns: usize,
    pub grounded_count: usize,
    pub fallback_count: usize,
    /// Ratio in `[0.0, 1.0]`
    pub success_rate: f64,
    /// User text preceding each fallback reply, in log order
    pub unrecognized_questions: Vec<String>,
    pub feedback: FeedbackTally,
}

impl EvaluationSnapshot {
    pub fn success_percentage(&self) -> f64 {
        self.success_rate * 100.0
    }
}

/// Compute statistics from scratch over `turns`
pub fn summarize(turns: &[Turn]) -> EvaluationSnapshot {
    let mut snapshot = EvaluationSnapshot::default();

    for (index, turn) in turns.iter().enumerate() {
        if !turn.is_bot() {
            continue;
        }
        snapshot.total_bot_turns += 1;

        match turn.feedback {
            Feedback::Helpful => snapshot.feedback.helpful += 1,
            Feedback::NotHelpful => snapshot.feedback.not_helpful += 1,
            Feedback::Unset => snapshot.feedback.unset += 1,
        }

        if turn.classification == Classification::Fallback {
            snapshot.fallback_count += 1;

            // Only a directly preceding user turn counts as the question.
            if let Some(previous) = index.checked_sub(1).map(|i| &turns[i]) {
                if previous.is_user() {
                    snapshot.unrecognized_questions.push(previous.text.clone());
                }
            }
        } else {
            // Bot turns are always classified at creation; anything not
            // Fallback is a grounded reply.
            snapshot.grounded_count += 1;
        }
    }

    snapshot.success_rate = if snapshot.total_bot_turns == 0 {
        0.0
    } else {
        snapshot.grounded_count as f64 / snapshot.total_bot_turns as f64
    };

    snapshot
}
