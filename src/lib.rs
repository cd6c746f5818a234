//! Faqbot - Knowledge-Grounded Conversation Evaluation Engine
//!
//! Lets an operator define a knowledge base of question/answer pairs and a
//! bot persona, simulate conversations against a language-model completion
//! service grounded on that knowledge base, and measure how well it answers:
//! - Deterministic grounding contract built from knowledge base + persona
//! - Prefix-based classification of replies as grounded or fallback
//! - Append-only conversation sessions with first-write-wins feedback
//! - Evaluation statistics recomputed from the turn log on demand
//!
//! # Architecture
//!
//! - **Types**: Core data structures (KnowledgeEntry, Persona, Turn)
//! - **Grounding**: Contract builder and reply classifier sharing the
//!   fallback sentence
//! - **Session / Evaluation**: Turn log and statistics derived from it
//! - **Services**: Completion gateway trait and Gemini client
//! - **Knowledge**: Injected repositories for entries and persona
//! - **Simulator**: Serialized dispatch loop tying everything together
//!
//! # Example
//!
//! ```ignore
//! use faqbot_core::{ChatSimulator, GeminiGateway, InMemoryKnowledgeBase, SimulatorConfig};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> faqbot_core::Result<()> {
//!     let config = SimulatorConfig::default();
//!     let gateway = Arc::new(GeminiGateway::new(config.llm_config())?);
//!     let kb = Arc::new(InMemoryKnowledgeBase::with_defaults());
//!     let mut sim = ChatSimulator::new(gateway, kb.clone(), kb, config);
//!
//!     sim.send("Quando começam as aulas?").await?;
//!     println!("{:.1}%", sim.report().success_percentage());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod evaluation;
pub mod grounding;
pub mod knowledge;
pub mod services;
pub mod session;
pub mod simulator;
pub mod types;

// Re-export commonly used types
pub use config::SimulatorConfig;
pub use error::{FaqbotError, Result};
pub use evaluation::{summarize, EvaluationSnapshot, SimulationReport};
pub use grounding::{
    classify, GroundingContract, GroundingContractBuilder, EMPTY_KNOWLEDGE_BASE_SENTINEL,
    FALLBACK_SENTENCE,
};
pub use knowledge::{InMemoryKnowledgeBase, JsonFileStore, KnowledgeRepository, PersonaStore};
pub use services::{CompletionGateway, GeminiGateway, LlmConfig};
pub use session::ConversationSession;
pub use simulator::{ChatSimulator, Exchange, TECHNICAL_ERROR_MESSAGE};
pub use types::{
    Classification, EntryId, Feedback, KnowledgeEntry, NewEntry, Persona, SessionId, Speaker,
    Turn, TurnId,
};
