//! Read-only knowledge storage.
//!
//! The knowledge base and document list live in two hand-edited JSON files.
//! Loads always hit the disk so edits made by external editors are visible on
//! the very next question; nothing is cached and nothing here ever writes.
//! Load failures degrade instead of propagating: a broken knowledge-base file
//! substitutes the built-in default profile, a broken documents file degrades
//! to an empty list.

use std::fs;
use std::path::{Path, PathBuf};

use portfolio_qa_core::{default_knowledge_base, Document, KnowledgeBase};

/// Why a JSON resource could not be loaded. Callers of the [`KnowledgeSource`]
/// trait never see this; it surfaces only through the explicit `try_load_*`
/// accessors used by tooling.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("read failed for {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse failed for {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read access to the current knowledge base and document list.
///
/// Implementations must be safe to call once per request; the resolver
/// re-loads on every question to keep read-after-write consistency with the
/// external editors.
pub trait KnowledgeSource {
    /// Current knowledge base; substitutes a built-in default rather than
    /// failing, so consumers never receive an empty profile.
    fn load_knowledge_base(&self) -> KnowledgeBase;

    /// Current document list; empty on any failure.
    fn load_documents(&self) -> Vec<Document>;
}

/// File-backed store over the two JSON resources.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    knowledge_base_path: PathBuf,
    documents_path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(knowledge_base_path: impl Into<PathBuf>, documents_path: impl Into<PathBuf>) -> Self {
        Self {
            knowledge_base_path: knowledge_base_path.into(),
            documents_path: documents_path.into(),
        }
    }

    /// Load the knowledge base, surfacing read/parse failures.
    ///
    /// # Errors
    /// Returns [`LoadError`] when the file cannot be read or parsed.
    pub fn try_load_knowledge_base(&self) -> Result<KnowledgeBase, LoadError> {
        read_json(&self.knowledge_base_path)
    }

    /// Load the document list, surfacing read/parse failures.
    ///
    /// # Errors
    /// Returns [`LoadError`] when the file cannot be read or parsed.
    pub fn try_load_documents(&self) -> Result<Vec<Document>, LoadError> {
        read_json(&self.documents_path)
    }
}

impl KnowledgeSource for JsonFileStore {
    fn load_knowledge_base(&self) -> KnowledgeBase {
        match self.try_load_knowledge_base() {
            Ok(kb) => kb,
            Err(err) => {
                tracing::warn!(error = %err, "knowledge base unavailable, using built-in default");
                default_knowledge_base()
            }
        }
    }

    fn load_documents(&self) -> Vec<Document> {
        match self.try_load_documents() {
            Ok(documents) => documents,
            Err(err) => {
                tracing::warn!(error = %err, "documents unavailable, using empty list");
                Vec::new()
            }
        }
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let raw = fs::read_to_string(path)
        .map_err(|source| LoadError::Read { path: path.to_path_buf(), source })?;
    serde_json::from_str(&raw).map_err(|source| LoadError::Parse { path: path.to_path_buf(), source })
}

/// In-memory store for tests and fixtures.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub knowledge_base: KnowledgeBase,
    pub documents: Vec<Document>,
}

impl KnowledgeSource for MemoryStore {
    fn load_knowledge_base(&self) -> KnowledgeBase {
        self.knowledge_base.clone()
    }

    fn load_documents(&self) -> Vec<Document> {
        self.documents.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_qa_core::answer_question;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_temp_path(name: &str) -> PathBuf {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_else(|err| panic!("clock should be >= UNIX_EPOCH: {err}"))
            .as_nanos();
        std::env::temp_dir().join(format!("portfolio-qa-store-{name}-{now}.json"))
    }

    // Test IDs: TSTORE-001 (missing file substitutes the default profile)
    #[test]
    fn missing_knowledge_base_substitutes_default() {
        let store = JsonFileStore::new("/nonexistent/kb.json", "/nonexistent/docs.json");
        let kb = store.load_knowledge_base();

        let personal = kb.personal.as_ref().unwrap_or_else(|| panic!("default personal missing"));
        assert!(personal.name.as_deref().is_some_and(|name| !name.is_empty()));
        assert!(personal.title.as_deref().is_some_and(|title| !title.is_empty()));

        // The cascade must work against the substituted default.
        let answer = answer_question("Who is Yekta?", &kb, &[]);
        assert!(!answer.is_empty());
    }

    // Test IDs: TSTORE-002 (corrupt JSON substitutes, does not propagate)
    #[test]
    fn corrupt_knowledge_base_substitutes_default() {
        let path = unique_temp_path("corrupt-kb");
        fs::write(&path, "{ not json")
            .unwrap_or_else(|err| panic!("failed to write fixture: {err}"));

        let store = JsonFileStore::new(&path, "/nonexistent/docs.json");
        assert!(store.try_load_knowledge_base().is_err());
        let kb = store.load_knowledge_base();
        assert!(kb.personal.is_some());

        let _ = fs::remove_file(&path);
    }

    // Test IDs: TSTORE-003 (documents degrade to empty, never to samples)
    #[test]
    fn missing_documents_degrade_to_empty_list() {
        let store = JsonFileStore::new("/nonexistent/kb.json", "/nonexistent/docs.json");
        assert!(store.load_documents().is_empty());
    }

    // Test IDs: TSTORE-004 (every load reads fresh from disk)
    #[test]
    fn loads_observe_latest_saved_edits() {
        let path = unique_temp_path("fresh-kb");
        fs::write(&path, r#"{ "personal": { "name": "First" } }"#)
            .unwrap_or_else(|err| panic!("failed to write fixture: {err}"));
        let store = JsonFileStore::new(&path, "/nonexistent/docs.json");

        let before = store.load_knowledge_base();
        assert_eq!(
            before.personal.as_ref().and_then(|personal| personal.name.as_deref()),
            Some("First")
        );

        fs::write(&path, r#"{ "personal": { "name": "Second" } }"#)
            .unwrap_or_else(|err| panic!("failed to rewrite fixture: {err}"));
        let after = store.load_knowledge_base();
        assert_eq!(
            after.personal.as_ref().and_then(|personal| personal.name.as_deref()),
            Some("Second")
        );

        let _ = fs::remove_file(&path);
    }

    // Test IDs: TSTORE-005
    #[test]
    fn documents_file_round_trips() {
        use time::OffsetDateTime;
        use ulid::Ulid;

        let path = unique_temp_path("docs");
        let now = OffsetDateTime::UNIX_EPOCH;
        let documents = vec![Document {
            id: Ulid::new(),
            title: "Machine Learning Notes".to_string(),
            content: "Notes on training dynamics.".to_string(),
            category: "research".to_string(),
            tags: vec!["ai".to_string(), "ml".to_string()],
            created_at: now,
            updated_at: now,
            word_count: 4,
        }];
        let raw = serde_json::to_string_pretty(&documents)
            .unwrap_or_else(|err| panic!("serialize fixture: {err}"));
        fs::write(&path, raw).unwrap_or_else(|err| panic!("failed to write fixture: {err}"));

        let store = JsonFileStore::new("/nonexistent/kb.json", &path);
        let loaded = store.load_documents();
        assert_eq!(loaded, documents);

        let _ = fs::remove_file(&path);
    }
}
