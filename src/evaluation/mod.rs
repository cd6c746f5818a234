//! Evaluation of simulated conversations.
//!
//! Statistics are derived from the turn log on every request and never
//! cached, so the report always reflects exactly the turns that exist.
//!
//! # Architecture
//!
//! - **Aggregator**: counts grounded and fallback replies, computes the
//!   success rate and collects the questions the bot could not answer
//! - **Report**: renders a snapshot for the operator
//!
//! # Metric definition
//!
//! - `success_rate` is a ratio in `[0.0, 1.0]`: grounded replies over all
//!   bot replies, `0.0` when there are none
//! - Feedback annotations are tallied for display but never move the rate
//! - Technical-error replies count as grounded, since classification only
//!   looks at the reply text
//!
//! # Usage
//!
//! ```rust
//! use faqbot_core::evaluation::summarize;
//! use faqbot_core::grounding::FALLBACK_SENTENCE;
//! use faqbot_core::ConversationSession;
//!
//! let mut session = ConversationSession::new();
//! session.append_user_turn("Quando começam as aulas?").unwrap();
//! session.append_bot_turn(FALLBACK_SENTENCE);
//!
//! let snapshot = summarize(session.turns());
//! assert_eq!(snapshot.fallback_count, 1);
//! assert_eq!(snapshot.unrecognized_questions, vec!["Quando começam as aulas?"]);
//! ```

pub mod aggregator;
pub mod report;

pub use aggregator::{summarize, EvaluationSnapshot, FeedbackTally};
pub use report::SimulationReport;
