//! Grounding contract between the knowledge base and the completion service
//!
//! The system instruction built here is the only control channel the
//! completion service receives. It obliges the service to answer strictly
//! from the embedded knowledge base and to reply with [`FALLBACK_SENTENCE`]
//! verbatim when it cannot. The [`classifier`] relies on that exact prefix,
//! so the sentence lives here once and both sides reference it.

pub mod classifier;

pub use classifier::classify;

use crate::types::{KnowledgeEntry, Persona};
use serde::{Deserialize, Serialize};

/// Exact reply mandated for questions the knowledge base cannot answer
pub const FALLBACK_SENTENCE: &str = "Desculpe, não encontrei informações sobre isso.";

/// Stands in for the question/answer blocks when the knowledge base is empty
pub const EMPTY_KNOWLEDGE_BASE_SENTINEL: &str =
    "Nenhuma informação na base de conhecimento ainda.";

/// Instruction payload sent alongside every prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundingContract {
    pub system_instruction: String,
}

/// Builds grounding contracts from knowledge base snapshots
///
/// Stateless: the same entries and persona always yield byte-identical
/// instructions.
#[derive(Debug, Clone, Copy, Default)]
pub struct GroundingContractBuilder;

impl GroundingContractBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Build the system instruction for one dispatch
    ///
    /// Entries are emitted in the order given. Category grouping is a
    /// presentation concern and is not applied here.
    pub fn build(&self, entries: &[KnowledgeEntry], persona: &Persona) -> GroundingContract {
        let knowledge_base = render_knowledge_base(entries);

        let system_instruction = format!(
            r#"Você é {name}, {tone}. Sua principal função é ser um assistente para estudantes universitários.

Regras de Conversação Geral:
- Se o usuário disser "Olá", "Oi", "Bom dia", "Boa tarde", ou "Boa noite", responda com uma saudação amigável e pergunte como pode ajudar.
- Se o usuário disser "Obrigado", "Obrigada", ou "Valeu", responda de forma cordial, como "De nada! Se precisar de mais alguma coisa, é só perguntar.".
- Se o usuário disser "Tchau", "Até mais", ou "Adeus", responda com uma despedida amigável.
- Se o usuário se desculpar com "Desculpa", responda de forma compreensiva, como "Sem problemas!".

Base de Conhecimento para Dúvidas Acadêmicas:
---
{knowledge_base}
---

Regras Importantes:
- Para perguntas relacionadas à universidade, responda estritamente com base nas informações da Base de Conhecimento.
- Se a pergunta do usuário não puder ser respondida com as informações da Base de Conhecimento E não for uma saudação/agradecimento/despedida, você DEVE responder com a frase exata: "{fallback}"
- Mantenha sempre o tom de voz definido na sua persona.
- Responda em português do Brasil."#,
            name = persona.name,
            tone = persona.tone_description,
            knowledge_base = knowledge_base,
            fallback = FALLBACK_SENTENCE,
        );

        GroundingContract { system_instruction }
    }
}

fn render_knowledge_base(entries: &[KnowledgeEntry]) -> String {
    if entries.is_empty() {
        return EMPTY_KNOWLEDGE_BASE_SENTINEL.to_string();
    }

    entries
        .iter()
        .map(|entry| format!("P: {}\nR: {}", entry.question, entry.answer))
        .collect::<Vec<_>>()
        .join("\n\n")
}
