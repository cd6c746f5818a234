//! Chat simulator: drives one conversation session against the gateway
//!
//! The simulator is the caller the session expects. It serializes
//! dispatches (`&mut self` allows only one in flight), applies the dispatch
//! timeout, and turns gateway failures into an ordinary bot turn so the
//! session always stays appendable.

use crate::config::SimulatorConfig;
use crate::error::Result;
use crate::evaluation::EvaluationSnapshot;
use crate::grounding::{GroundingContract, GroundingContractBuilder};
use crate::knowledge::{KnowledgeRepository, PersonaStore};
use crate::services::CompletionGateway;
use crate::session::ConversationSession;
use crate::types::{Classification, Turn, TurnId};
use std::sync::Arc;
use std::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Bot reply substituted when the completion service fails or times out
pub const TECHNICAL_ERROR_MESSAGE: &str =
    "Ops! Parece que estou com um pequeno problema técnico. Por favor, tente novamente em alguns instantes. 🤖";

/// Result of sending one utterance
#[derive(Debug, Clone)]
pub struct Exchange {
    pub user_turn: Turn,
    /// `None` when the dispatch was cancelled before the reply arrived
    pub bot_turn: Option<Turn>,
}

enum DispatchOutcome {
    Reply(String),
    Failed,
    Cancelled,
}

pub struct ChatSimulator {
    session: ConversationSession,
    gateway: Arc<dyn CompletionGateway>,
    knowledge: Arc<dyn KnowledgeRepository>,
    personas: Arc<dyn PersonaStore>,
    builder: GroundingContractBuilder,
    config: SimulatorConfig,
}

impl ChatSimulator {
    pub fn new(
        gateway: Arc<dyn CompletionGateway>,
        knowledge: Arc<dyn KnowledgeRepository>,
        personas: Arc<dyn PersonaStore>,
        config: SimulatorConfig,
    ) -> Self {
        Self {
            session: ConversationSession::new(),
            gateway,
            knowledge,
            personas,
            builder: GroundingContractBuilder::new(),
            config,
        }
    }

    pub fn session(&self) -> &ConversationSession {
        &self.session
    }

    /// Instruction the next dispatch would send
    pub fn preview_contract(&self) -> Result<GroundingContract> {
        let entries = self.knowledge.snapshot()?;
        let persona = self.personas.persona()?;
        Ok(self.builder.build(&entries, &persona))
    }

    /// Send an utterance and wait for the bot's reply
    pub async fn send(&mut self, utterance: &str) -> Result<Exchange> {
        self.send_cancellable(utterance, CancellationToken::new()).await
    }

    /// Send an utterance; abandon the reply if `cancel` fires first
    ///
    /// A cancelled dispatch keeps the user turn and appends nothing else.
    pub async fn send_cancellable(
        &mut self,
        utterance: &str,
        cancel: CancellationToken,
    ) -> Result<Exchange> {
        let user_turn = self.session.append_user_turn(utterance)?;

        let started = Instant::now();
        let outcome = self.dispatch(&user_turn, &cancel).await;

        let elapsed_ms = started.elapsed().as_millis();
        let bot_turn = match outcome {
            DispatchOutcome::Cancelled => {
                info!("Dispatch for turn {} cancelled after {}ms", user_turn.id, elapsed_ms);
                None
            }
            DispatchOutcome::Reply(text) => {
                let turn = self.session.append_bot_turn(&text);
                debug!("Reply classified {} in {}ms", turn.classification, elapsed_ms);
                Some(turn)
            }
            DispatchOutcome::Failed => {
                let turn = self.session.append_bot_turn(TECHNICAL_ERROR_MESSAGE);
                if turn.classification == Classification::Grounded {
                    warn!("Technical-error reply counted as grounded in success rate");
                }
                Some(turn)
            }
        };

        Ok(Exchange {
            user_turn,
            bot_turn,
        })
    }

    /// Build the contract and query the gateway; never fails past this point
    async fn dispatch(&self, user_turn: &Turn, cancel: &CancellationToken) -> DispatchOutcome {
        let contract = match self.preview_contract() {
            Ok(contract) => contract,
            Err(e) => {
                warn!("Could not snapshot knowledge base or persona: {}", e);
                return DispatchOutcome::Failed;
            }
        };

        debug!(
            "Dispatching turn {} ({} chars of instruction)",
            user_turn.id,
            contract.system_instruction.len()
        );

        tokio::select! {
            _ = cancel.cancelled() => DispatchOutcome::Cancelled,
            result = tokio::time::timeout(
                self.config.dispatch_timeout,
                self.gateway.dispatch(&user_turn.text, &contract.system_instruction),
            ) => match result {
                Ok(Ok(text)) => DispatchOutcome::Reply(text),
                Ok(Err(e)) => {
                    warn!("Completion gateway failed: {}", e);
                    DispatchOutcome::Failed
                }
                Err(_) => {
                    warn!(
                        "Completion gateway timed out after {:?}",
                        self.config.dispatch_timeout
                    );
                    DispatchOutcome::Failed
                }
            },
        }
    }

    pub fn record_feedback(&mut self, turn_id: TurnId, helpful: bool) -> bool {
        self.session.record_feedback(turn_id, helpful)
    }

    /// Feedback on the n-th bot turn, counting from 1
    pub fn record_feedback_by_index(&mut self, index: usize, helpful: bool) -> bool {
        let id = index
            .checked_sub(1)
            .and_then(|i| self.session.bot_turns().nth(i))
            .map(|turn| turn.id);

        match id {
            Some(id) => self.session.record_feedback(id, helpful),
            None => {
                debug!("Feedback ignored: no bot turn #{}", index);
                false
            }
        }
    }

    pub fn report(&self) -> EvaluationSnapshot {
        self.session.summarize()
    }

    /// Start a new simulation, discarding every turn
    pub fn restart(&mut self) {
        info!("Restarting simulation");
        self.session.reset();
    }

    /// Turn log as pretty JSON
    pub fn transcript_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self.session.turns())?)
    }
}
