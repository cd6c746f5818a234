//! Services layer for the faqbot engine
//!
//! Provides the completion gateway abstraction and its Gemini client.

pub mod llm;

pub use llm::{CompletionGateway, GeminiGateway, LlmConfig};
