//! External chat-model answering tier.
//!
//! One OpenAI-compatible chat-completions call per question: the system
//! message embeds the whole serialized knowledge base plus a behavioral
//! directive, the client's conversation history maps onto user/assistant
//! roles, and the new question closes the message list. One attempt, no
//! retries; the only timeout is the HTTP client's own. A missing credential
//! fails fast without touching the network so callers can distinguish
//! "not configured" from "remote failed" if they care to.

use std::future::Future;
use std::time::Duration;

use portfolio_qa_core::{ConversationTurn, KnowledgeBase, TurnKind};
use serde::{Deserialize, Serialize};

/// Environment variable holding the bearer credential.
pub const API_KEY_ENV: &str = "QA_MODEL_API_KEY";
/// Optional model-name override.
pub const MODEL_ENV: &str = "QA_MODEL_NAME";
/// Optional API-base override.
pub const API_BASE_ENV: &str = "QA_MODEL_API_BASE";

const DEFAULT_API_BASE: &str = "https://openrouter.ai/api/v1";
const DEFAULT_MODEL: &str = "meta-llama/llama-3.3-70b-instruct";

const SYSTEM_DIRECTIVE: &str = "You are the assistant for a personal academic \
portfolio. Answer visitor questions using only the knowledge base below. Be \
informative, professional, accurate, and concise.";

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("model credential is not configured")]
    MissingCredential,
    #[error("model request failed: {0}")]
    Transport(String),
    #[error("model API error {status}: {body}")]
    Api { status: u16, body: String },
    #[error("model response contained no completion text")]
    EmptyCompletion,
}

/// The remote answering strategy, kept behind a trait so the resolver can be
/// exercised with a stub in tests.
pub trait ModelAnswerer {
    /// Ask the external model to answer directly from the knowledge base.
    fn answer(
        &self,
        question: &str,
        context: Option<&str>,
        history: &[ConversationTurn],
        kb: &KnowledgeBase,
    ) -> impl Future<Output = Result<String, ModelError>> + Send;
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub(crate) struct ChatMessage {
    pub(crate) role: String,
    pub(crate) content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Debug, Deserialize)]
struct ChatMessageResponse {
    content: String,
}

/// OpenAI-compatible chat-completions client.
#[derive(Debug, Clone)]
pub struct ChatModelClient {
    api_key: String,
    model: String,
    api_base: String,
    client: reqwest::Client,
}

impl ChatModelClient {
    /// Build a client from process configuration. Returns `None` when no
    /// credential is set, which callers treat as "remote tier disabled".
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var(API_KEY_ENV).ok()?;
        let key = api_key.trim().to_string();
        if key.is_empty() {
            return None;
        }

        let mut client = Self::new(key);
        if let Ok(model) = std::env::var(MODEL_ENV) {
            if !model.trim().is_empty() {
                client = client.with_model(model.trim());
            }
        }
        if let Ok(api_base) = std::env::var(API_BASE_ENV) {
            if !api_base.trim().is_empty() {
                client = client.with_api_base(api_base.trim());
            }
        }
        Some(client)
    }

    #[must_use]
    pub fn new(api_key: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            api_key: api_key.trim().to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            client,
        }
    }

    #[must_use]
    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    #[must_use]
    pub fn with_api_base(mut self, api_base: &str) -> Self {
        self.api_base = api_base.trim_end_matches('/').to_string();
        self
    }
}

fn system_prompt(kb: &KnowledgeBase) -> String {
    let kb_json = serde_json::to_string_pretty(kb).unwrap_or_else(|_| "{}".to_string());
    format!("{SYSTEM_DIRECTIVE}\n\nKnowledge base (JSON):\n{kb_json}")
}

fn build_messages(
    question: &str,
    context: Option<&str>,
    history: &[ConversationTurn],
    kb: &KnowledgeBase,
) -> Vec<ChatMessage> {
    let mut messages = vec![ChatMessage { role: "system".to_string(), content: system_prompt(kb) }];

    for turn in history {
        let role = match turn.kind {
            TurnKind::Question => "user",
            TurnKind::Answer => "assistant",
        };
        messages.push(ChatMessage { role: role.to_string(), content: turn.content.clone() });
    }

    let mut user_text = question.to_string();
    if let Some(extra) = context {
        user_text.push_str("\n\nAdditional context from the page:\n");
        user_text.push_str(extra);
    }
    messages.push(ChatMessage { role: "user".to_string(), content: user_text });

    messages
}

impl ModelAnswerer for ChatModelClient {
    async fn answer(
        &self,
        question: &str,
        context: Option<&str>,
        history: &[ConversationTurn],
        kb: &KnowledgeBase,
    ) -> Result<String, ModelError> {
        if self.api_key.is_empty() {
            return Err(ModelError::MissingCredential);
        }

        let body = ChatRequest {
            model: self.model.clone(),
            messages: build_messages(question, context, history, kb),
            temperature: Some(0.3),
            max_tokens: Some(1024),
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.api_base))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|err| ModelError::Transport(err.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ModelError::Api { status, body });
        }

        let parsed: ChatResponse =
            response.json().await.map_err(|err| ModelError::Transport(err.to_string()))?;

        parsed
            .choices
            .first()
            .map(|choice| choice.message.content.trim().to_string())
            .ok_or(ModelError::EmptyCompletion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_qa_core::default_knowledge_base;

    // Test IDs: TMODEL-001 (system message embeds the serialized KB)
    #[test]
    fn system_message_embeds_knowledge_base_json() {
        let kb = default_knowledge_base();
        let messages = build_messages("What is the thesis about?", None, &[], &kb);

        assert_eq!(messages[0].role, "system");
        assert!(messages[0].content.contains("Knowledge base (JSON):"));
        assert!(messages[0].content.contains("Aesthetic Language"));
    }

    // Test IDs: TMODEL-002 (history roles map question->user, answer->assistant)
    #[test]
    fn history_maps_onto_chat_roles_in_order() {
        let kb = default_knowledge_base();
        let history = vec![
            ConversationTurn {
                kind: TurnKind::Question,
                content: "first question".to_string(),
                timestamp: None,
            },
            ConversationTurn {
                kind: TurnKind::Answer,
                content: "first answer".to_string(),
                timestamp: None,
            },
        ];

        let messages = build_messages("second question", None, &history, &kb);
        assert_eq!(messages.len(), 4);
        assert_eq!(messages[1].role, "user");
        assert_eq!(messages[1].content, "first question");
        assert_eq!(messages[2].role, "assistant");
        assert_eq!(messages[2].content, "first answer");
        assert_eq!(messages[3].role, "user");
        assert_eq!(messages[3].content, "second question");
    }

    // Test IDs: TMODEL-003 (page context rides along in the final user turn)
    #[test]
    fn context_is_appended_to_the_final_user_message() {
        let kb = default_knowledge_base();
        let messages = build_messages("question", Some("viewing the gallery page"), &[], &kb);

        let last = messages.last().unwrap_or_else(|| panic!("messages cannot be empty"));
        assert!(last.content.starts_with("question"));
        assert!(last.content.contains("viewing the gallery page"));
    }

    // Test IDs: TMODEL-004 (missing credential fails fast, no network)
    #[tokio::test]
    async fn empty_credential_rejects_before_any_request() {
        let client = ChatModelClient::new(String::new());
        let kb = default_knowledge_base();

        let result = client.answer("question", None, &[], &kb).await;
        assert!(matches!(result, Err(ModelError::MissingCredential)));
    }
}
