use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use ulid::Ulid;

/// Maximum content characters quoted per document in supplementary context.
const SNIPPET_CHARS: usize = 200;

/// A short user-authored text record, searchable by question text.
///
/// Created and edited only by external editors; this crate reads it as-is.
/// `word_count` is whatever the editor computed at last save and is not
/// re-validated here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: Ulid,
    pub title: String,
    pub content: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
    pub word_count: usize,
}

impl Document {
    /// Concatenated lowercase text the search matches against.
    fn searchable_text(&self) -> String {
        format!("{} {} {} {}", self.title, self.content, self.category, self.tags.join(" "))
            .to_lowercase()
    }
}

/// Return every document plausibly relevant to the question.
///
/// A document matches when any of these hold, all case-insensitive:
/// the whole lowercased question is a substring of the document's searchable
/// text; one of the document's tags is a substring of the question; or one
/// whitespace token of the question is a substring of the searchable text.
///
/// Results keep document-list order. No scoring, no deduplication.
#[must_use]
pub fn search_documents<'a>(question: &str, documents: &'a [Document]) -> Vec<&'a Document> {
    let question_lower = question.to_lowercase();
    documents
        .iter()
        .filter(|document| document_matches(&question_lower, document))
        .collect()
}

fn document_matches(question_lower: &str, document: &Document) -> bool {
    let searchable = document.searchable_text();

    if searchable.contains(question_lower) {
        return true;
    }

    if document.tags.iter().any(|tag| question_lower.contains(&tag.to_lowercase())) {
        return true;
    }

    question_lower.split_whitespace().any(|token| searchable.contains(token))
}

/// Build the short supplementary context block quoted under answers:
/// one `"<title>": <first ~200 chars>...` line per matched document.
#[must_use]
pub fn supplementary_context(matches: &[&Document]) -> Option<String> {
    if matches.is_empty() {
        return None;
    }

    let lines = matches
        .iter()
        .map(|document| {
            let snippet: String = document.content.chars().take(SNIPPET_CHARS).collect();
            let ellipsis =
                if document.content.chars().count() > SNIPPET_CHARS { "..." } else { "" };
            format!("\"{}\": {snippet}{ellipsis}", document.title)
        })
        .collect::<Vec<_>>();

    Some(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn document(title: &str, content: &str, category: &str, tags: &[&str]) -> Document {
        let now = OffsetDateTime::UNIX_EPOCH;
        Document {
            id: Ulid::new(),
            title: title.to_string(),
            content: content.to_string(),
            category: category.to_string(),
            tags: tags.iter().map(ToString::to_string).collect(),
            created_at: now,
            updated_at: now,
            word_count: content.split_whitespace().count(),
        }
    }

    // Test IDs: TDOC-001
    #[test]
    fn tag_match_returns_document() {
        let documents = vec![document(
            "Machine Learning Notes",
            "Notes on training dynamics.",
            "research",
            &["ai", "ml"],
        )];

        let matches = search_documents("Tell me about ai research", &documents);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].title, "Machine Learning Notes");
    }

    // Test IDs: TDOC-002
    #[test]
    fn no_overlap_returns_empty() {
        let documents = vec![document(
            "Machine Learning Notes",
            "Notes on training dynamics.",
            "research",
            &["ai", "ml"],
        )];

        let matches = search_documents("quantum gravity", &documents);
        assert!(matches.is_empty());
    }

    // Test IDs: TDOC-003
    #[test]
    fn token_match_is_case_insensitive_and_order_stable() {
        let documents = vec![
            document("Cubes Study", "Spatial sketches for the cube series.", "art", &[]),
            document("Poetry Drafts", "Fragments about cubes and silence.", "writing", &[]),
        ];

        let matches = search_documents("CUBES", &documents);
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].title, "Cubes Study");
        assert_eq!(matches[1].title, "Poetry Drafts");
    }

    // Test IDs: TDOC-004
    #[test]
    fn empty_document_list_returns_empty() {
        assert!(search_documents("anything", &[]).is_empty());
    }

    // Test IDs: TDOC-005
    #[test]
    fn supplementary_context_truncates_long_content() {
        let long_content = "word ".repeat(100);
        let documents = vec![document("Long Notes", &long_content, "misc", &[])];
        let matches = search_documents("word", &documents);

        let context = supplementary_context(&matches)
            .unwrap_or_else(|| panic!("context expected for non-empty matches"));
        assert!(context.starts_with("\"Long Notes\": "));
        assert!(context.ends_with("..."));
        assert!(context.len() < long_content.len());
    }

    // Test IDs: TDOC-006
    #[test]
    fn supplementary_context_is_none_without_matches() {
        assert!(supplementary_context(&[]).is_none());
    }

    proptest! {
        // Test IDs: TDOC-007 (search idempotence: identical inputs, identical output)
        #[test]
        fn search_is_idempotent(question in "[a-zA-Z ]{0,40}") {
            let documents = vec![
                document("Alpha", "First entry about language.", "notes", &["language"]),
                document("Beta", "Second entry about cubes.", "notes", &["art"]),
            ];

            let first: Vec<String> = search_documents(&question, &documents)
                .into_iter()
                .map(|doc| doc.title.clone())
                .collect();
            let second: Vec<String> = search_documents(&question, &documents)
                .into_iter()
                .map(|doc| doc.title.clone())
                .collect();

            prop_assert_eq!(first, second);
        }
    }
}
