//! Completion service integration
//!
//! The engine talks to the language model through [`CompletionGateway`]:
//! a raw user utterance goes in as the prompt, the grounding contract goes
//! in as the system instruction, and free text comes back. The model itself
//! is untrusted beyond honoring the instruction.
//!
//! [`GeminiGateway`] implements the gateway over the Gemini
//! `generateContent` REST endpoint.

use crate::error::{FaqbotError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::env;
use tracing::debug;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_TEMPERATURE: f32 = 0.2;
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Adapter to an external text-completion service
///
/// Implementations report transport, auth and quota failures as errors;
/// callers decide how to surface them.
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    async fn dispatch(&self, prompt: &str, system_instruction: &str) -> Result<String>;
}

/// Configuration for the Gemini gateway
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Gemini API key
    pub api_key: String,

    /// Model to use (default: gemini-2.5-flash)
    pub model: String,

    /// Temperature for sampling
    pub temperature: f32,

    /// API root, overridable for proxies and tests
    pub base_url: String,
}

impl LlmConfig {
    /// API key from `GEMINI_API_KEY`, falling back to `API_KEY`
    pub fn api_key_from_env() -> String {
        env::var("GEMINI_API_KEY")
            .ok()
            .filter(|k| !k.is_empty())
            .or_else(|| env::var("API_KEY").ok())
            .unwrap_or_default()
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: Self::api_key_from_env(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Gemini-backed completion gateway
pub struct GeminiGateway {
    config: LlmConfig,
    client: reqwest::Client,
}

/// Gemini API request format
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    system_instruction: Content,
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
}

/// Gemini API response format
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl GeminiGateway {
    /// Create a new gateway with custom config
    pub fn new(config: LlmConfig) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(FaqbotError::Config(
                "GEMINI_API_KEY (or API_KEY) not set".to_string(),
            ));
        }

        Ok(Self {
            config,
            client: reqwest::Client::new(),
        })
    }

    /// Create with default config
    pub fn with_default() -> Result<Self> {
        Self::new(LlmConfig::default())
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    fn request_body(&self, prompt: &str, system_instruction: &str) -> GenerateContentRequest {
        GenerateContentRequest {
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: system_instruction.to_string(),
                }],
            },
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: self.config.temperature,
            },
        }
    }
}

#[async_trait]
impl CompletionGateway for GeminiGateway {
    async fn dispatch(&self, prompt: &str, system_instruction: &str) -> Result<String> {
        debug!("Calling Gemini API ({})", self.config.model);

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.config.api_key)
            .header("content-type", "application/json")
            .json(&self.request_body(prompt, system_instruction))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(FaqbotError::Gateway(format!(
                "API request failed with status {}: {}",
                status, error_text
            )));
        }

        let api_response: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| FaqbotError::Gateway(format!("Failed to parse response: {}", e)))?;

        extract_text(api_response)
    }
}

fn extract_text(response: GenerateContentResponse) -> Result<String> {
    response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .map(|part| part.text)
                .collect::<String>()
        })
        .ok_or_else(|| FaqbotError::Gateway("Empty response from API".to_string()))
}
