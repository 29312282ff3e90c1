use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Role of a single turn in the chat history a client sends along.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum TurnKind {
    Question,
    Answer,
}

impl TurnKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Question => "question",
            Self::Answer => "answer",
        }
    }
}

/// One request-scoped conversation turn. Never persisted server-side; only
/// forwarded to the external model as chat history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConversationTurn {
    #[serde(rename = "type")]
    pub kind: TurnKind,
    pub content: String,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub timestamp: Option<OffsetDateTime>,
}
