//! Common test utilities and helpers

#![allow(dead_code)]

use async_trait::async_trait;
use faqbot_core::{
    ChatSimulator, CompletionGateway, EntryId, FaqbotError, InMemoryKnowledgeBase, KnowledgeEntry,
    KnowledgeRepository, NewEntry, Persona, PersonaStore, Result, SimulatorConfig,
};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// What the scripted gateway does on its next dispatch
pub enum Scripted {
    Reply(String),
    Fail(String),
    /// Never completes; exercises timeouts and cancellation
    Hang,
}

/// Gateway replaying a queue of canned outcomes
///
/// Records every prompt and instruction it receives. An exhausted queue
/// answers with a gateway error.
#[derive(Clone, Default)]
pub struct ScriptedGateway {
    script: Arc<Mutex<VecDeque<Scripted>>>,
    calls: Arc<Mutex<Vec<(String, String)>>>,
}

impl ScriptedGateway {
    pub fn new(script: Vec<Scripted>) -> Self {
        Self {
            script: Arc::new(Mutex::new(script.into())),
            calls: Arc::default(),
        }
    }

    pub fn replying(replies: &[&str]) -> Self {
        Self::new(
            replies
                .iter()
                .map(|r| Scripted::Reply(r.to_string()))
                .collect(),
        )
    }

    /// `(prompt, system_instruction)` pairs in dispatch order
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionGateway for ScriptedGateway {
    async fn dispatch(&self, prompt: &str, system_instruction: &str) -> Result<String> {
        self.calls
            .lock()
            .unwrap()
            .push((prompt.to_string(), system_instruction.to_string()));

        let next = self.script.lock().unwrap().pop_front();
        match next {
            Some(Scripted::Reply(text)) => Ok(text),
            Some(Scripted::Fail(reason)) => Err(FaqbotError::Gateway(reason)),
            Some(Scripted::Hang) => std::future::pending().await,
            None => Err(FaqbotError::Gateway("script exhausted".to_string())),
        }
    }
}

/// Store whose every read and write fails, like an unreadable backing file
pub struct UnavailableStore;

impl UnavailableStore {
    fn error() -> FaqbotError {
        FaqbotError::KnowledgeBase("store unavailable".to_string())
    }
}

impl KnowledgeRepository for UnavailableStore {
    fn snapshot(&self) -> Result<Vec<KnowledgeEntry>> {
        Err(Self::error())
    }

    fn add(&self, _draft: NewEntry) -> Result<KnowledgeEntry> {
        Err(Self::error())
    }

    fn remove(&self, _id: &EntryId) -> Result<bool> {
        Err(Self::error())
    }
}

impl PersonaStore for UnavailableStore {
    fn persona(&self) -> Result<Persona> {
        Err(Self::error())
    }

    fn set_persona(&self, _persona: Persona) -> Result<()> {
        Err(Self::error())
    }
}

/// Config with a short dispatch timeout
pub fn test_config() -> SimulatorConfig {
    SimulatorConfig {
        dispatch_timeout: Duration::from_secs(1),
        ..Default::default()
    }
}

pub fn single_entry_kb(question: &str, answer: &str) -> Arc<InMemoryKnowledgeBase> {
    let entry = KnowledgeEntry {
        id: "faq-1".into(),
        question: question.to_string(),
        answer: answer.to_string(),
        category: "Matrícula e Rematrícula".to_string(),
    };
    Arc::new(InMemoryKnowledgeBase::new(vec![entry], Persona::default()).expect("valid kb"))
}

pub fn create_test_simulator(
    gateway: ScriptedGateway,
    kb: Arc<InMemoryKnowledgeBase>,
) -> ChatSimulator {
    ChatSimulator::new(Arc::new(gateway), kb.clone(), kb, test_config())
}
