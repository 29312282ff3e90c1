//! Ordered keyword-rule cascade: the offline answering strategy.
//!
//! Rules live in one ordered slice and are evaluated top to bottom with
//! first-match-wins semantics. Several predicates overlap (for example
//! "thesis" questions also mention "language"); position in [`RULES`] is the
//! authoritative priority, not keyword specificity. That ordering contract is
//! covered by tests rather than silently re-derived.

use crate::document::{search_documents, supplementary_context, Document};
use crate::knowledge::KnowledgeBase;
use crate::responses;

/// One cascade entry: a keyword predicate over the lowercased question and a
/// response template over the knowledge base.
pub struct Rule {
    pub topic: &'static str,
    predicate: fn(&str) -> bool,
    respond: fn(&str, &KnowledgeBase) -> String,
}

impl Rule {
    #[must_use]
    pub fn matches(&self, question_lower: &str) -> bool {
        (self.predicate)(question_lower)
    }
}

fn contains_any(question: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| question.contains(keyword))
}

fn is_thesis(question: &str) -> bool {
    contains_any(question, &["thesis", "aesthetic language", "dissertation"])
}

fn is_studio(question: &str) -> bool {
    contains_any(question, &["sepand", "studio", "internship", "intern", "atelier"])
}

fn is_ai_protocols(question: &str) -> bool {
    question.contains("protocol")
}

fn is_methodology(question: &str) -> bool {
    contains_any(question, &["methodolog", "research method", "how do you research"])
}

fn is_wittgenstein(question: &str) -> bool {
    contains_any(question, &["wittgenstein", "mystic", "tractatus", "unsayable", "ineffable"])
}

fn is_trauma(question: &str) -> bool {
    contains_any(question, &["trauma", "wound", "inexpressib"])
}

fn is_spatial(question: &str) -> bool {
    contains_any(question, &["cube", "spatial", "installation"])
}

fn is_philosophy(question: &str) -> bool {
    // "working philosophy" belongs to a later, more specific rule.
    contains_any(question, &["philosoph", "theoretical framework"])
        && !question.contains("working philosophy")
}

fn is_celeste_and_william(question: &str) -> bool {
    // "william" alone is ambiguous with other titles; require the absence of
    // the competing work's keywords.
    question.contains("celeste")
        || (question.contains("william")
            && !question.contains("whispers")
            && !question.contains("vows"))
}

fn is_whispers_and_vows(question: &str) -> bool {
    contains_any(question, &["whispers", "vows"])
}

fn is_glass_garden(question: &str) -> bool {
    question.contains("glass garden")
}

fn is_poetry(question: &str) -> bool {
    contains_any(question, &["poetry", "poem", "verse"])
}

fn is_technical(question: &str) -> bool {
    contains_any(
        question,
        &["programming", "coding", "software", "technical", "python", "javascript"],
    )
}

fn is_ai_collaboration(question: &str) -> bool {
    contains_any(question, &["collaborat", "co-writ", "working with ai", "human-ai"])
}

fn is_archaeology(question: &str) -> bool {
    contains_any(question, &["archaeolog", "excavation", "artifact"])
}

fn is_languages(question: &str) -> bool {
    contains_any(question, &["language", "multilingual", "persian", "farsi", "french"])
}

fn is_education(question: &str) -> bool {
    contains_any(question, &["education", "degree", "university", "studied", "study"])
}

fn is_working_philosophy(question: &str) -> bool {
    contains_any(question, &["working philosophy", "work ethic", "how do you work", "discipline"])
}

fn is_current_future(question: &str) -> bool {
    contains_any(
        question,
        &["currently", "these days", "right now", "future", "plan", "next step"],
    )
}

fn is_recommendations(question: &str) -> bool {
    contains_any(question, &["recommendation", "mentor", "reference letter", "professor"])
}

fn is_contact(question: &str) -> bool {
    contains_any(question, &["contact", "email", "reach you", "get in touch"])
}

fn is_projects(question: &str) -> bool {
    question.contains("project")
}

fn is_skills(question: &str) -> bool {
    contains_any(question, &["skill", "good at", "abilities"])
}

fn is_academic_creative(question: &str) -> bool {
    contains_any(question, &["academic and creative", "creative and academic", "bridge", "connect"])
}

fn is_interdisciplinary(question: &str) -> bool {
    contains_any(question, &["interdisciplinary", "across disciplines", "between fields"])
}

fn is_cartographer(question: &str) -> bool {
    question.contains("cartographer")
}

fn is_salt_city(question: &str) -> bool {
    question.contains("salt city")
}

fn respond_celeste(_question: &str, kb: &KnowledgeBase) -> String {
    responses::named_work(kb, "Celeste and William")
}

fn respond_whispers(_question: &str, kb: &KnowledgeBase) -> String {
    responses::named_work(kb, "Whispers and Vows")
}

fn respond_glass_garden(_question: &str, kb: &KnowledgeBase) -> String {
    responses::named_work(kb, "The Glass Garden")
}

fn respond_cartographer(_question: &str, kb: &KnowledgeBase) -> String {
    responses::named_work(kb, "The Cartographer of Silence")
}

fn respond_salt_city(_question: &str, kb: &KnowledgeBase) -> String {
    responses::named_work(kb, "Letters from the Salt City")
}

/// The ordered cascade. Position is priority.
static RULES: &[Rule] = &[
    Rule { topic: "thesis", predicate: is_thesis, respond: responses::thesis },
    Rule { topic: "studio", predicate: is_studio, respond: responses::studio },
    Rule { topic: "ai-protocols", predicate: is_ai_protocols, respond: responses::ai_protocols },
    Rule { topic: "methodology", predicate: is_methodology, respond: responses::methodology },
    Rule { topic: "wittgenstein", predicate: is_wittgenstein, respond: responses::wittgenstein },
    Rule {
        topic: "trauma-expression",
        predicate: is_trauma,
        respond: responses::trauma_expression,
    },
    Rule { topic: "spatial-cubes", predicate: is_spatial, respond: responses::spatial_cubes },
    Rule { topic: "philosophy", predicate: is_philosophy, respond: responses::philosophy },
    Rule {
        topic: "work-celeste-and-william",
        predicate: is_celeste_and_william,
        respond: respond_celeste,
    },
    Rule {
        topic: "work-whispers-and-vows",
        predicate: is_whispers_and_vows,
        respond: respond_whispers,
    },
    Rule {
        topic: "work-glass-garden",
        predicate: is_glass_garden,
        respond: respond_glass_garden,
    },
    Rule { topic: "poetry", predicate: is_poetry, respond: responses::poetry },
    Rule { topic: "technical", predicate: is_technical, respond: responses::technical },
    Rule {
        topic: "ai-collaboration",
        predicate: is_ai_collaboration,
        respond: responses::ai_collaboration,
    },
    Rule { topic: "archaeology", predicate: is_archaeology, respond: responses::archaeology },
    Rule { topic: "languages", predicate: is_languages, respond: responses::languages },
    Rule {
        topic: "education-overview",
        predicate: is_education,
        respond: responses::education_overview,
    },
    Rule {
        topic: "working-philosophy",
        predicate: is_working_philosophy,
        respond: responses::working_philosophy,
    },
    Rule {
        topic: "current-future",
        predicate: is_current_future,
        respond: responses::current_and_future,
    },
    Rule {
        topic: "recommendations",
        predicate: is_recommendations,
        respond: responses::recommendations,
    },
    Rule { topic: "contact", predicate: is_contact, respond: responses::contact },
    Rule {
        topic: "projects-overview",
        predicate: is_projects,
        respond: responses::projects_overview,
    },
    Rule { topic: "skills-overview", predicate: is_skills, respond: responses::skills_overview },
    Rule {
        topic: "academic-creative",
        predicate: is_academic_creative,
        respond: responses::academic_creative,
    },
    Rule {
        topic: "interdisciplinary",
        predicate: is_interdisciplinary,
        respond: responses::interdisciplinary,
    },
    Rule {
        topic: "work-cartographer-of-silence",
        predicate: is_cartographer,
        respond: respond_cartographer,
    },
    Rule {
        topic: "work-letters-from-the-salt-city",
        predicate: is_salt_city,
        respond: respond_salt_city,
    },
];

/// The cascade in evaluation order, exposed so tests and tooling can inspect
/// the priority contract directly.
#[must_use]
pub fn rules() -> &'static [Rule] {
    RULES
}

fn is_profile_question(question: &str) -> bool {
    contains_any(question, &["who is", "who are", "tell me about", "introduce", "about yekta"])
}

fn with_context(mut answer: String, context: Option<&String>) -> String {
    if let Some(extra) = context {
        answer.push_str("\n\nFrom the documents:\n");
        answer.push_str(extra);
    }
    answer
}

/// Deterministically answer a question from local data only.
///
/// Lowercases the question once, runs document search, walks [`RULES`] in
/// order and returns the first match's template (with supplementary document
/// context appended when available). Falls through to a profile summary for
/// generic "who is" questions, then to a document-only summary, then to one
/// fixed default answer. Total: always returns a non-empty string.
#[must_use]
pub fn answer_question(question: &str, kb: &KnowledgeBase, documents: &[Document]) -> String {
    let question_lower = question.to_lowercase();
    let matches = search_documents(&question_lower, documents);
    let context = supplementary_context(&matches);

    for rule in RULES {
        if rule.matches(&question_lower) {
            return with_context((rule.respond)(&question_lower, kb), context.as_ref());
        }
    }

    if is_profile_question(&question_lower) {
        return with_context(responses::profile_summary(kb), context.as_ref());
    }

    if let Some(extra) = context {
        return responses::document_summary(&extra);
    }

    responses::default_answer()
}
