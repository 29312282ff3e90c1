//! Domain core for the portfolio Q&A assistant.
//!
//! Pure data and logic: the typed knowledge base, user-authored documents,
//! substring document search, and the ordered keyword-rule cascade that
//! answers questions offline. No I/O and no network live here; loading and
//! remote calls belong to the store and model crates.

mod cascade;
mod conversation;
mod document;
mod knowledge;
mod responses;

pub use cascade::{answer_question, rules, Rule};
pub use conversation::{ConversationTurn, TurnKind};
pub use document::{search_documents, supplementary_context, Document};
pub use knowledge::{
    default_knowledge_base, AcademicCreativeConnection, AiResearchFramework, CreativeWork,
    CulturalHeritage, CurrentContext, Degree, Education, FuturePlans, Influence,
    IntellectualInfluences, KnowledgeBase, LanguageSkill, MasterThesis, Mentor, NamedWork,
    Personal, Poetry, PracticalSkills, Project, Projects, RecommendationLetterQualities, Research,
    StudioExperience, TechnicalExpertise, WorkingPhilosophy,
};
pub use responses::capability_sentence;
