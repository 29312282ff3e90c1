//! Answer resolution: the composition root over store, cascade, and model.
//!
//! Three tiers, tried in order: the external chat model, the local rule
//! cascade over freshly loaded store data, and one fixed capability sentence.
//! `resolve` never fails; every internal failure is absorbed by a later tier
//! and logged. The returned provenance tag says which tier produced the text.

use std::panic::{catch_unwind, AssertUnwindSafe};

use portfolio_qa_core::{answer_question, capability_sentence, ConversationTurn};
use portfolio_qa_model::{ChatModelClient, ModelAnswerer};
use portfolio_qa_store::KnowledgeSource;
use serde::Serialize;

/// Which tier produced an answer.
#[derive(Debug, Clone, Copy, Serialize, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum AnswerSource {
    Model,
    Rules,
    Default,
}

impl AnswerSource {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Model => "model",
            Self::Rules => "rules",
            Self::Default => "default",
        }
    }
}

/// A resolved answer plus its provenance.
#[derive(Debug, Clone, Serialize, Eq, PartialEq)]
pub struct ResolvedAnswer {
    pub answer: String,
    pub source: AnswerSource,
}

/// Orchestrates the answering tiers. Store data is loaded fresh on every
/// call, per tier, so answers always observe the latest saved edits.
#[derive(Debug, Clone)]
pub struct AnswerResolver<S, M> {
    store: S,
    model: Option<M>,
}

impl<S: KnowledgeSource> AnswerResolver<S, ChatModelClient> {
    /// Resolver with no remote tier; tier 1 is skipped entirely.
    #[must_use]
    pub fn offline(store: S) -> Self {
        Self { store, model: None }
    }

    /// Resolver whose remote tier comes from process configuration, if any.
    #[must_use]
    pub fn from_env(store: S) -> Self {
        Self { store, model: ChatModelClient::from_env() }
    }
}

impl<S: KnowledgeSource, M: ModelAnswerer> AnswerResolver<S, M> {
    #[must_use]
    pub fn new(store: S, model: Option<M>) -> Self {
        Self { store, model }
    }

    #[must_use]
    pub fn has_model(&self) -> bool {
        self.model.is_some()
    }

    /// Answer a question. Never fails: a model failure falls back to the rule
    /// cascade, and a cascade panic falls back to the fixed sentence.
    pub async fn resolve(
        &self,
        question: &str,
        context: Option<&str>,
        history: &[ConversationTurn],
    ) -> ResolvedAnswer {
        if let Some(model) = &self.model {
            let kb = self.store.load_knowledge_base();
            match model.answer(question, context, history, &kb).await {
                Ok(answer) => {
                    return ResolvedAnswer { answer, source: AnswerSource::Model };
                }
                Err(err) => {
                    tracing::warn!(error = %err, "model tier failed, falling back to rules");
                }
            }
        }

        let local = catch_unwind(AssertUnwindSafe(|| {
            // Re-fetch both resources for this tier.
            let kb = self.store.load_knowledge_base();
            let documents = self.store.load_documents();
            answer_question(question, &kb, &documents)
        }));

        match local {
            Ok(answer) => ResolvedAnswer { answer, source: AnswerSource::Rules },
            Err(_) => {
                tracing::error!("rule cascade tier panicked, returning fixed capability answer");
                ResolvedAnswer { answer: capability_sentence(), source: AnswerSource::Default }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_qa_core::{default_knowledge_base, Document, KnowledgeBase};
    use portfolio_qa_model::ModelError;
    use portfolio_qa_store::MemoryStore;

    struct SentinelModel;

    impl ModelAnswerer for SentinelModel {
        async fn answer(
            &self,
            _question: &str,
            _context: Option<&str>,
            _history: &[ConversationTurn],
            _kb: &KnowledgeBase,
        ) -> Result<String, ModelError> {
            Ok("SENTINEL-MODEL-ANSWER".to_string())
        }
    }

    struct FailingModel;

    impl ModelAnswerer for FailingModel {
        async fn answer(
            &self,
            _question: &str,
            _context: Option<&str>,
            _history: &[ConversationTurn],
            _kb: &KnowledgeBase,
        ) -> Result<String, ModelError> {
            Err(ModelError::Transport("connection refused".to_string()))
        }
    }

    struct PanickyStore;

    impl KnowledgeSource for PanickyStore {
        fn load_knowledge_base(&self) -> KnowledgeBase {
            panic!("store blew up");
        }

        fn load_documents(&self) -> Vec<Document> {
            Vec::new()
        }
    }

    fn seeded_store() -> MemoryStore {
        MemoryStore { knowledge_base: default_knowledge_base(), documents: Vec::new() }
    }

    // Test IDs: TRES-001 (model success passes through verbatim)
    #[tokio::test]
    async fn model_answer_is_returned_verbatim() {
        let resolver = AnswerResolver::new(seeded_store(), Some(SentinelModel));
        let resolved = resolver.resolve("What is the thesis about?", None, &[]).await;

        assert_eq!(resolved.answer, "SENTINEL-MODEL-ANSWER");
        assert_eq!(resolved.source, AnswerSource::Model);
    }

    // Test IDs: TRES-002 (model failure falls back to the rule cascade)
    #[tokio::test]
    async fn model_failure_falls_back_to_rules() {
        let resolver = AnswerResolver::new(seeded_store(), Some(FailingModel));
        let resolved = resolver.resolve("What is the Master's thesis about?", None, &[]).await;

        assert_eq!(resolved.source, AnswerSource::Rules);
        assert!(resolved.answer.contains("Aesthetic Language"));
        assert!(resolved.answer.contains("18/20"));
    }

    // Test IDs: TRES-003 (no configured model skips straight to rules)
    #[tokio::test]
    async fn missing_model_uses_rules_directly() {
        let resolver = AnswerResolver::offline(seeded_store());
        let resolved = resolver.resolve("Who is Yekta?", None, &[]).await;

        assert_eq!(resolved.source, AnswerSource::Rules);
        assert!(!resolved.answer.is_empty());
    }

    // Test IDs: TRES-004 (a panicking local tier still yields a sentence)
    #[tokio::test]
    async fn panicking_local_tier_returns_fixed_sentence() {
        let resolver = AnswerResolver::<_, FailingModel>::new(PanickyStore, None);
        let resolved = resolver.resolve("anything", None, &[]).await;

        assert_eq!(resolved.source, AnswerSource::Default);
        assert!(!resolved.answer.is_empty());
    }

    // Test IDs: TRES-005 (empty knowledge base plus no documents never fails)
    #[tokio::test]
    async fn empty_store_still_answers() {
        let resolver = AnswerResolver::offline(MemoryStore::default());
        let resolved = resolver.resolve("tell me something", None, &[]).await;

        assert_eq!(resolved.source, AnswerSource::Rules);
        assert!(!resolved.answer.is_empty());
    }
}
