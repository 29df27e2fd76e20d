//! Fallback-aware question answering.

use crate::app::KnowledgeSlot;
use crate::domain::{
    ApiCredential, FallbackTable, STATEMENT_OF_FAITH, compose_request, compose_system_prompt,
};
use crate::ports::{ContentProvider, GenerationClient};

/// Answers visitor questions, preferring the generation API and degrading to
/// the keyword table.
///
/// `ask_question` is total: every fault in the external path is absorbed and
/// the caller always receives non-empty text, with no indication of which
/// path produced it.
pub struct AnswerResolver<C: GenerationClient> {
    client: C,
    credential: ApiCredential,
    knowledge: KnowledgeSlot,
    fallback: FallbackTable,
}

impl<C: GenerationClient> AnswerResolver<C> {
    pub fn new(client: C, credential: ApiCredential) -> Self {
        if !credential.is_usable() {
            tracing::info!("Generation API key not configured; answers will use the keyword table");
        }
        Self { client, credential, knowledge: KnowledgeSlot::new(), fallback: FallbackTable::default() }
    }

    pub fn with_fallback(mut self, fallback: FallbackTable) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn with_knowledge_slot(mut self, knowledge: KnowledgeSlot) -> Self {
        self.knowledge = knowledge;
        self
    }

    pub fn knowledge(&self) -> &KnowledgeSlot {
        &self.knowledge
    }

    /// Load knowledge before first use. Defaults are stored on failure.
    pub fn load_knowledge(&self, provider: &(impl ContentProvider + ?Sized)) {
        self.knowledge.load_from(provider);
    }

    /// System prompt for the current knowledge snapshot.
    pub fn system_prompt(&self) -> String {
        compose_system_prompt(self.knowledge.get(), STATEMENT_OF_FAITH)
    }

    /// Whether the external path would be attempted. No network I/O.
    pub fn is_service_available(&self) -> bool {
        self.credential.is_usable()
    }

    pub fn ask_question(&self, question: &str) -> String {
        if question.trim().is_empty() {
            tracing::debug!(source = "fallback", reason = "empty_question", "Answering question");
            return self.fallback_answer(question);
        }

        if !self.credential.is_usable() {
            tracing::debug!(source = "fallback", reason = "no_credential", "Answering question");
            return self.fallback_answer(question);
        }

        let request = compose_request(&self.system_prompt(), question);
        match self.client.generate(&request) {
            Ok(text) if !text.trim().is_empty() => {
                tracing::debug!(source = "model", "Answering question");
                text.trim().to_string()
            }
            Ok(_) => {
                tracing::warn!("Generation API returned empty text; using keyword table");
                self.fallback_answer(question)
            }
            Err(err) => {
                tracing::warn!(error = %err, "Generation API call failed; using keyword table");
                self.fallback_answer(question)
            }
        }
    }

    fn fallback_answer(&self, question: &str) -> String {
        self.fallback.answer_for(question).to_string()
    }
}
