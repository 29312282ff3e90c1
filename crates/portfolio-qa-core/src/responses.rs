//! Response templates for the rule cascade.
//!
//! Every template builds its answer from optional clauses: a missing section
//! or field drops the clause instead of printing a placeholder. Each template
//! still returns *some* sentence when its whole section is absent, so the
//! cascade stays total over arbitrary partial knowledge bases.

use crate::knowledge::KnowledgeBase;

fn join(parts: Vec<String>) -> Option<String> {
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}

fn or_fallback(parts: Vec<String>, fallback: &str) -> String {
    join(parts).unwrap_or_else(|| fallback.to_string())
}

fn contains_any(question: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| question.contains(keyword))
}

pub(crate) fn thesis(_question: &str, kb: &KnowledgeBase) -> String {
    let fallback = "I don't have the thesis details on file right now.";
    let mut parts = Vec::new();

    if let Some(thesis) = kb.education.as_ref().and_then(|education| education.master_thesis.as_ref())
    {
        if let Some(title) = &thesis.title {
            parts.push(format!("The Master's thesis is titled \"{title}\"."));
        }
        if let Some(grade) = &thesis.grade {
            parts.push(format!("It was graded {grade}."));
        }
        if let Some(advisor) = &thesis.advisor {
            parts.push(format!("It was supervised by {advisor}."));
        }
        if let Some(summary) = &thesis.summary {
            parts.push(summary.clone());
        }
    }

    // Richer framing when the research section carries it.
    if let Some(core) = kb.research.as_ref().and_then(|research| research.master_thesis_core.as_ref())
    {
        parts.push(core.clone());
    }

    or_fallback(parts, fallback)
}

pub(crate) fn studio(_question: &str, kb: &KnowledgeBase) -> String {
    let fallback = "I don't have studio experience details on file right now.";
    let Some(studio) = kb.studio_experience.as_ref() else {
        return fallback.to_string();
    };

    let mut parts = Vec::new();
    match (&studio.studio, &studio.mentor) {
        (Some(name), Some(mentor)) => {
            parts.push(format!("Yekta interned at {name}, working under {mentor}."));
        }
        (Some(name), None) => parts.push(format!("Yekta interned at {name}.")),
        (None, Some(mentor)) => parts.push(format!("Yekta trained under {mentor}.")),
        (None, None) => {}
    }
    if let Some(role) = &studio.role {
        parts.push(format!("The role was {role}."));
    }
    if let Some(duration) = &studio.duration {
        parts.push(format!("The placement lasted {duration}."));
    }
    if let Some(focus) = &studio.focus {
        parts.push(format!("The work focused on {focus}."));
    }
    if let Some(takeaway) = &studio.takeaway {
        parts.push(takeaway.clone());
    }

    or_fallback(parts, fallback)
}

pub(crate) fn ai_protocols(_question: &str, kb: &KnowledgeBase) -> String {
    let fallback = "I don't have details about the AI research protocols on file right now.";
    let Some(framework) = kb.ai_research_framework.as_ref() else {
        return fallback.to_string();
    };

    let mut parts = Vec::new();
    match (&framework.name, &framework.description) {
        (Some(name), Some(description)) => {
            parts.push(format!("The AI research framework is called {name}: {description}"));
        }
        (Some(name), None) => {
            parts.push(format!("The AI research framework is called {name}."));
        }
        (None, Some(description)) => parts.push(description.clone()),
        (None, None) => {}
    }
    if !framework.protocols.is_empty() {
        parts.push(format!("Its protocols include: {}.", framework.protocols.join("; ")));
    }

    or_fallback(parts, fallback)
}

pub(crate) fn methodology(_question: &str, kb: &KnowledgeBase) -> String {
    let fallback = "I don't have research methodology notes on file right now.";
    let Some(research) = kb.research.as_ref() else {
        return fallback.to_string();
    };

    let mut parts = Vec::new();
    if let Some(methodology) = &research.methodology {
        parts.push(methodology.clone());
    }
    if let Some(focus) = &research.focus {
        parts.push(format!("The broader research focus is {focus}."));
    }

    or_fallback(parts, fallback)
}

pub(crate) fn wittgenstein(_question: &str, kb: &KnowledgeBase) -> String {
    let fallback = "I don't have notes on philosophical influences on file right now.";
    let Some(influences) = kb.intellectual_influences.as_ref() else {
        return fallback.to_string();
    };

    let mut parts = Vec::new();
    if let Some(figure) = influences
        .figures
        .iter()
        .find(|figure| figure.name.to_lowercase().contains("wittgenstein"))
    {
        match &figure.note {
            Some(note) => parts.push(format!("On {}: {note}", figure.name)),
            None => parts.push(format!("{} is a central influence.", figure.name)),
        }
    }
    if let Some(core) = kb.research.as_ref().and_then(|research| research.master_thesis_core.as_ref())
    {
        parts.push(core.clone());
    }

    or_fallback(parts, fallback)
}

pub(crate) fn trauma_expression(_question: &str, kb: &KnowledgeBase) -> String {
    let fallback = "I don't have notes on trauma and expression on file right now.";
    let mut parts = Vec::new();

    if let Some(statement) =
        kb.research.as_ref().and_then(|research| research.expression_and_trauma.as_ref())
    {
        parts.push(statement.clone());
    }
    if let Some(poetry) = kb.creative_work.as_ref().and_then(|creative| creative.poetry.as_ref()) {
        if poetry.themes.iter().any(|theme| theme.to_lowercase().contains("trauma")) {
            if let Some(description) = &poetry.description {
                parts.push(format!("The poetry practice works on the same ground: {description}"));
            }
        }
    }

    or_fallback(parts, fallback)
}

pub(crate) fn spatial_cubes(_question: &str, kb: &KnowledgeBase) -> String {
    let fallback = "I don't have notes on the spatial work on file right now.";
    kb.creative_work
        .as_ref()
        .and_then(|creative| creative.spatial_practice.clone())
        .unwrap_or_else(|| fallback.to_string())
}

pub(crate) fn philosophy(_question: &str, kb: &KnowledgeBase) -> String {
    let fallback = "I don't have the theoretical framework on file right now.";
    let mut parts = Vec::new();

    if let Some(focus) = kb.research.as_ref().and_then(|research| research.focus.as_ref()) {
        parts.push(format!("The theoretical framework centers on {focus}."));
    }
    if let Some(influences) = kb.intellectual_influences.as_ref() {
        let names: Vec<&str> =
            influences.figures.iter().map(|figure| figure.name.as_str()).collect();
        if !names.is_empty() {
            parts.push(format!("Key influences: {}.", names.join(", ")));
        }
    }
    if let Some(questions) = kb.research.as_ref().map(|research| &research.questions) {
        if let Some(first) = questions.first() {
            parts.push(format!("A guiding question: {first}"));
        }
    }

    or_fallback(parts, fallback)
}

pub(crate) fn named_work(kb: &KnowledgeBase, title: &str) -> String {
    let Some(work) = kb
        .creative_work
        .as_ref()
        .and_then(|creative| {
            creative.works.iter().find(|work| work.title.eq_ignore_ascii_case(title))
        })
    else {
        return format!("I don't have notes on \"{title}\" at the moment.");
    };

    let mut parts = Vec::new();
    match (&work.form, &work.year) {
        (Some(form), Some(year)) => {
            parts.push(format!("\"{}\" is a {form} from {year}.", work.title));
        }
        (Some(form), None) => parts.push(format!("\"{}\" is a {form}.", work.title)),
        (None, Some(year)) => parts.push(format!("\"{}\" dates from {year}.", work.title)),
        (None, None) => parts.push(format!("\"{}\" is one of the creative works.", work.title)),
    }
    if let Some(synopsis) = &work.synopsis {
        parts.push(synopsis.clone());
    }
    if !work.themes.is_empty() {
        parts.push(format!("Its themes: {}.", work.themes.join(", ")));
    }

    parts.join(" ")
}

pub(crate) fn poetry(_question: &str, kb: &KnowledgeBase) -> String {
    let fallback = "I don't have notes on the poetry practice on file right now.";
    let Some(poetry) = kb.creative_work.as_ref().and_then(|creative| creative.poetry.as_ref())
    else {
        return fallback.to_string();
    };

    let mut parts = Vec::new();
    if let Some(description) = &poetry.description {
        parts.push(description.clone());
    }
    if !poetry.themes.is_empty() {
        parts.push(format!("Recurring themes: {}.", poetry.themes.join(", ")));
    }

    or_fallback(parts, fallback)
}

pub(crate) fn technical(_question: &str, kb: &KnowledgeBase) -> String {
    let fallback = "I don't have technical details on file right now.";
    let Some(technical) = kb.technical_expertise.as_ref() else {
        return fallback.to_string();
    };

    let mut parts = Vec::new();
    if let Some(summary) = &technical.summary {
        parts.push(summary.clone());
    }
    if !technical.programming_languages.is_empty() {
        parts.push(format!(
            "Programming languages: {}.",
            technical.programming_languages.join(", ")
        ));
    }
    if !technical.tools.is_empty() {
        parts.push(format!("Tools: {}.", technical.tools.join(", ")));
    }

    or_fallback(parts, fallback)
}

pub(crate) fn ai_collaboration(_question: &str, kb: &KnowledgeBase) -> String {
    let fallback = "I don't have notes on AI collaboration on file right now.";
    let mut parts = Vec::new();

    if let Some(statement) =
        kb.technical_expertise.as_ref().and_then(|technical| technical.ai_collaboration.as_ref())
    {
        parts.push(statement.clone());
    }
    if let Some(framework) = kb.ai_research_framework.as_ref() {
        if let Some(name) = &framework.name {
            parts.push(format!("That practice feeds the {name} research framework."));
        }
    }

    or_fallback(parts, fallback)
}

pub(crate) fn archaeology(_question: &str, kb: &KnowledgeBase) -> String {
    let fallback = "I don't have notes on the archaeology interest on file right now.";
    let mut parts = Vec::new();

    if let Some(statement) = kb.research.as_ref().and_then(|research| research.archaeology.as_ref())
    {
        parts.push(statement.clone());
    }
    if let Some(fieldwork) = kb.education.as_ref().and_then(|education| education.fieldwork.as_ref())
    {
        parts.push(fieldwork.clone());
    }

    or_fallback(parts, fallback)
}

pub(crate) fn languages(_question: &str, kb: &KnowledgeBase) -> String {
    let fallback = "I don't have language details on file right now.";
    let Some(personal) = kb.personal.as_ref() else {
        return fallback.to_string();
    };

    if personal.languages.is_empty() {
        return fallback.to_string();
    }

    let listed = personal
        .languages
        .iter()
        .map(|skill| match &skill.level {
            Some(level) => format!("{} ({level})", skill.language),
            None => skill.language.clone(),
        })
        .collect::<Vec<_>>()
        .join(", ");
    format!("Languages: {listed}.")
}

pub(crate) fn education_overview(_question: &str, kb: &KnowledgeBase) -> String {
    let fallback = "I don't have education details on file right now.";
    let Some(education) = kb.education.as_ref() else {
        return fallback.to_string();
    };

    let mut parts = Vec::new();
    for degree in &education.degrees {
        let mut clause = Vec::new();
        if let Some(name) = &degree.degree {
            clause.push(name.clone());
        }
        if let Some(field) = &degree.field {
            clause.push(format!("in {field}"));
        }
        if let Some(institution) = &degree.institution {
            clause.push(format!("at {institution}"));
        }
        if let Some(years) = &degree.years {
            clause.push(format!("({years})"));
        }
        if !clause.is_empty() {
            parts.push(format!("{}.", clause.join(" ")));
        }
    }
    if let Some(title) = education.master_thesis.as_ref().and_then(|thesis| thesis.title.as_ref()) {
        parts.push(format!("The Master's thesis is \"{title}\"."));
    }

    or_fallback(parts, fallback)
}

pub(crate) fn working_philosophy(_question: &str, kb: &KnowledgeBase) -> String {
    let fallback = "I don't have working-philosophy notes on file right now.";
    let Some(philosophy) = kb.working_philosophy.as_ref() else {
        return fallback.to_string();
    };

    let mut parts = Vec::new();
    if let Some(statement) = &philosophy.statement {
        parts.push(statement.clone());
    }
    if !philosophy.habits.is_empty() {
        parts.push(format!("Day to day that means: {}.", philosophy.habits.join("; ")));
    }

    or_fallback(parts, fallback)
}

pub(crate) fn current_and_future(_question: &str, kb: &KnowledgeBase) -> String {
    let fallback = "I don't have notes on current work or future plans on file right now.";
    let mut parts = Vec::new();

    if let Some(current) = kb.current_context.as_ref() {
        if let Some(status) = &current.status {
            parts.push(status.clone());
        }
        if let Some(location) = &current.location {
            parts.push(format!("Currently based in {location}."));
        }
        if !current.activities.is_empty() {
            parts.push(format!("Ongoing: {}.", current.activities.join("; ")));
        }
    }
    if let Some(plans) = kb.future_plans.as_ref() {
        if let Some(short_term) = &plans.short_term {
            parts.push(format!("Near term: {short_term}"));
        }
        if let Some(long_term) = &plans.long_term {
            parts.push(format!("Longer term: {long_term}"));
        }
        if !plans.goals.is_empty() {
            parts.push(format!("Stated goals: {}.", plans.goals.join("; ")));
        }
    }

    or_fallback(parts, fallback)
}

/// Nested sub-cascade: letter qualities, then mentors, then a combined view.
pub(crate) fn recommendations(question: &str, kb: &KnowledgeBase) -> String {
    let fallback = "I don't have recommendation details on file right now.";
    let Some(section) = kb.recommendation_letter_qualities.as_ref() else {
        return fallback.to_string();
    };

    if contains_any(question, &["quality", "qualities", "letter"]) && !section.qualities.is_empty()
    {
        return format!(
            "Qualities a recommendation letter could speak to: {}.",
            section.qualities.join("; ")
        );
    }

    if contains_any(question, &["mentor", "professor", "advisor"]) && !section.mentors.is_empty() {
        let mentors = section
            .mentors
            .iter()
            .map(|mentor| {
                let mut clause = mentor.name.clone();
                if let Some(role) = &mentor.role {
                    clause.push_str(&format!(" ({role})"));
                }
                if let Some(relationship) = &mentor.relationship {
                    clause.push_str(&format!(", {relationship}"));
                }
                clause
            })
            .collect::<Vec<_>>()
            .join("; ");
        return format!("Mentors who know the work well: {mentors}.");
    }

    let mut parts = Vec::new();
    if let Some(note) = &section.note {
        parts.push(note.clone());
    }
    if !section.qualities.is_empty() {
        parts.push(format!("Qualities often highlighted: {}.", section.qualities.join("; ")));
    }
    if !section.mentors.is_empty() {
        let names: Vec<&str> = section.mentors.iter().map(|mentor| mentor.name.as_str()).collect();
        parts.push(format!("References: {}.", names.join(", ")));
    }

    or_fallback(parts, fallback)
}

pub(crate) fn contact(_question: &str, kb: &KnowledgeBase) -> String {
    let fallback = "I don't have contact details on file right now.";
    let Some(personal) = kb.personal.as_ref() else {
        return fallback.to_string();
    };

    let mut parts = Vec::new();
    if let Some(email) = &personal.email {
        parts.push(format!("You can reach Yekta at {email}."));
    }
    if let Some(location) = &personal.location {
        parts.push(format!("Based in {location}."));
    }

    or_fallback(parts, fallback)
}

pub(crate) fn projects_overview(_question: &str, kb: &KnowledgeBase) -> String {
    let fallback = "I don't have project details on file right now.";
    let Some(projects) = kb.projects.as_ref() else {
        return fallback.to_string();
    };

    let mut parts = Vec::new();
    if let Some(overview) = &projects.overview {
        parts.push(overview.clone());
    }
    for project in &projects.items {
        let mut clause = project.name.clone();
        if let Some(description) = &project.description {
            clause.push_str(&format!(": {description}"));
        }
        if let Some(status) = &project.status {
            clause.push_str(&format!(" ({status})"));
        }
        parts.push(format!("{clause}."));
    }

    or_fallback(parts, fallback)
}

pub(crate) fn skills_overview(_question: &str, kb: &KnowledgeBase) -> String {
    let fallback = "I don't have a skills list on file right now.";
    let mut parts = Vec::new();

    if let Some(skills) = kb.practical_skills.as_ref() {
        if !skills.items.is_empty() {
            parts.push(format!("Practical skills: {}.", skills.items.join("; ")));
        }
    }
    if let Some(summary) =
        kb.technical_expertise.as_ref().and_then(|technical| technical.summary.as_ref())
    {
        parts.push(summary.clone());
    }

    or_fallback(parts, fallback)
}

/// Nested sub-cascade: concrete examples when asked for, otherwise the
/// connecting statement.
pub(crate) fn academic_creative(question: &str, kb: &KnowledgeBase) -> String {
    let fallback = "I don't have notes on the academic-creative connection on file right now.";
    let Some(section) = kb.academic_creative_connection.as_ref() else {
        return fallback.to_string();
    };

    if contains_any(question, &["example", "instance", "concretely"]) && !section.examples.is_empty()
    {
        return format!("Some concrete crossings: {}.", section.examples.join("; "));
    }

    let mut parts = Vec::new();
    if let Some(statement) = &section.statement {
        parts.push(statement.clone());
    }
    if let Some(first) = section.examples.first() {
        parts.push(format!("One example: {first}."));
    }

    or_fallback(parts, fallback)
}

pub(crate) fn interdisciplinary(_question: &str, kb: &KnowledgeBase) -> String {
    let fallback = "I don't have notes on the interdisciplinary practice on file right now.";
    let mut parts = Vec::new();

    if let Some(statement) =
        kb.academic_creative_connection.as_ref().and_then(|section| section.statement.as_ref())
    {
        parts.push(statement.clone());
    }
    if let Some(heritage) = kb.cultural_heritage.as_ref() {
        if let Some(influence) = &heritage.influence {
            parts.push(influence.clone());
        }
    }
    if let Some(focus) = kb.research.as_ref().and_then(|research| research.focus.as_ref()) {
        parts.push(format!("The research focus ties the strands together: {focus}."));
    }

    or_fallback(parts, fallback)
}

/// Profile summary for generic "who is / tell me about / introduce" questions.
pub(crate) fn profile_summary(kb: &KnowledgeBase) -> String {
    let fallback = "This assistant answers questions about Yekta's academic and creative work.";
    let mut parts = Vec::new();

    if let Some(personal) = kb.personal.as_ref() {
        match (&personal.name, &personal.title) {
            (Some(name), Some(title)) => parts.push(format!("{name} is a {title}.")),
            (Some(name), None) => parts.push(format!("This portfolio belongs to {name}.")),
            (None, Some(title)) => parts.push(format!("The portfolio of a {title}.")),
            (None, None) => {}
        }
        if let Some(summary) = &personal.summary {
            parts.push(summary.clone());
        }
    }
    if let Some(research) = kb.research.as_ref() {
        if let Some(focus) = &research.focus {
            parts.push(format!("Research focus: {focus}."));
        }
        if let Some(first) = research.questions.first() {
            parts.push(format!("A guiding question: {first}"));
        }
    }

    or_fallback(parts, fallback)
}

/// Answer used when no rule matched but document search found material.
pub(crate) fn document_summary(context: &str) -> String {
    format!(
        "I didn't find a direct topic match, but these notes look relevant:\n{context}\n\n\
         Ask about one of them and I can go deeper."
    )
}

/// Fixed default answer describing the available topics.
pub(crate) fn default_answer() -> String {
    "I can tell you about Yekta's education and Master's thesis, research and AI \
     protocols, creative works and poetry, studio experience, technical skills, \
     languages, current work, and future plans. What would you like to know?"
        .to_string()
}

/// Final hardcoded sentence for the resolver's last tier.
#[must_use]
pub fn capability_sentence() -> String {
    "I'm an assistant for Yekta's portfolio: ask me about the education, research, \
     creative work, or projects described here."
        .to_string()
}
