use serde::{Deserialize, Serialize};

/// Root of the hand-authored knowledge base.
///
/// Every section is optional: the backing JSON file is edited by hand and may
/// carry any subset of sections. Response templates must treat a missing
/// section or field as "omit the clause", never as a placeholder to print.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct KnowledgeBase {
    pub personal: Option<Personal>,
    pub education: Option<Education>,
    pub research: Option<Research>,
    pub creative_work: Option<CreativeWork>,
    pub projects: Option<Projects>,
    pub technical_expertise: Option<TechnicalExpertise>,
    pub studio_experience: Option<StudioExperience>,
    pub ai_research_framework: Option<AiResearchFramework>,
    pub intellectual_influences: Option<IntellectualInfluences>,
    pub practical_skills: Option<PracticalSkills>,
    pub working_philosophy: Option<WorkingPhilosophy>,
    pub current_context: Option<CurrentContext>,
    pub recommendation_letter_qualities: Option<RecommendationLetterQualities>,
    pub academic_creative_connection: Option<AcademicCreativeConnection>,
    pub cultural_heritage: Option<CulturalHeritage>,
    pub future_plans: Option<FuturePlans>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Personal {
    pub name: Option<String>,
    pub title: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    pub summary: Option<String>,
    pub languages: Vec<LanguageSkill>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct LanguageSkill {
    pub language: String,
    pub level: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Education {
    pub degrees: Vec<Degree>,
    pub master_thesis: Option<MasterThesis>,
    pub fieldwork: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Degree {
    pub degree: Option<String>,
    pub institution: Option<String>,
    pub field: Option<String>,
    pub years: Option<String>,
    pub grade: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct MasterThesis {
    pub title: Option<String>,
    pub grade: Option<String>,
    pub summary: Option<String>,
    pub advisor: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Research {
    pub focus: Option<String>,
    pub questions: Vec<String>,
    pub methodology: Option<String>,
    /// Optional deeper framing of the thesis; when present it enriches the
    /// thesis answer beyond `education.master_thesis`.
    pub master_thesis_core: Option<String>,
    pub expression_and_trauma: Option<String>,
    pub archaeology: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CreativeWork {
    pub overview: Option<String>,
    pub works: Vec<NamedWork>,
    pub poetry: Option<Poetry>,
    pub spatial_practice: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct NamedWork {
    pub title: String,
    pub form: Option<String>,
    pub year: Option<String>,
    pub synopsis: Option<String>,
    pub themes: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Poetry {
    pub description: Option<String>,
    pub themes: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Projects {
    pub overview: Option<String>,
    pub items: Vec<Project>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    pub name: String,
    pub description: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct TechnicalExpertise {
    pub summary: Option<String>,
    pub programming_languages: Vec<String>,
    pub tools: Vec<String>,
    pub ai_collaboration: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct StudioExperience {
    pub studio: Option<String>,
    pub mentor: Option<String>,
    pub role: Option<String>,
    pub duration: Option<String>,
    pub focus: Option<String>,
    pub takeaway: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct AiResearchFramework {
    pub name: Option<String>,
    pub description: Option<String>,
    pub protocols: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct IntellectualInfluences {
    pub figures: Vec<Influence>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Influence {
    pub name: String,
    pub domain: Option<String>,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct PracticalSkills {
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkingPhilosophy {
    pub statement: Option<String>,
    pub habits: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CurrentContext {
    pub status: Option<String>,
    pub location: Option<String>,
    pub activities: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct RecommendationLetterQualities {
    pub qualities: Vec<String>,
    pub mentors: Vec<Mentor>,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Mentor {
    pub name: String,
    pub role: Option<String>,
    pub relationship: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct AcademicCreativeConnection {
    pub statement: Option<String>,
    pub examples: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CulturalHeritage {
    pub background: Option<String>,
    pub influence: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct FuturePlans {
    pub short_term: Option<String>,
    pub long_term: Option<String>,
    pub goals: Vec<String>,
}

/// Built-in fallback knowledge base.
///
/// Substituted whenever the backing JSON resource is missing or corrupt, so
/// downstream answering never runs against an empty profile. It carries the
/// minimum the cascade needs: identity, one degree with the thesis record,
/// and one research question.
#[must_use]
pub fn default_knowledge_base() -> KnowledgeBase {
    KnowledgeBase {
        personal: Some(Personal {
            name: Some("Yekta".to_string()),
            title: Some("Interdisciplinary researcher and writer".to_string()),
            summary: Some(
                "Researcher and writer working across aesthetics, language, and \
                 creative practice."
                    .to_string(),
            ),
            ..Personal::default()
        }),
        education: Some(Education {
            degrees: vec![Degree {
                degree: Some("Master's".to_string()),
                field: Some("Philosophy of Art".to_string()),
                ..Degree::default()
            }],
            master_thesis: Some(MasterThesis {
                title: Some(
                    "Aesthetic Language: The Interplay Between Language, Art, and the Sensible"
                        .to_string(),
                ),
                grade: Some("18/20".to_string()),
                ..MasterThesis::default()
            }),
            fieldwork: None,
        }),
        research: Some(Research {
            questions: vec![
                "How can language carry experiences that resist being said?".to_string()
            ],
            ..Research::default()
        }),
        ..KnowledgeBase::default()
    }
}
