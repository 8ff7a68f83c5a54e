use tracing::debug;

use super::KnowledgeSection;

/// Maximum number of sections embedded into one prompt
pub const DEFAULT_MAX_SECTIONS: usize = 4;

/// Sections used when a query mentions none of the keywords
pub const DEFAULT_SECTIONS: [KnowledgeSection; 3] = [
    KnowledgeSection::Profile,
    KnowledgeSection::Experience,
    KnowledgeSection::Skills,
];

/// Result of a retrieval: the chosen sections and their rendered text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetrievedContext {
    pub sections: Vec<KnowledgeSection>,
    pub text: String,
}

/// Keyword-based section selector for grounding the system prompt
#[derive(Debug, Clone)]
pub struct ContextRetriever {
    max_sections: usize,
}

impl Default for ContextRetriever {
    fn default() -> Self {
        Self {
            max_sections: DEFAULT_MAX_SECTIONS,
        }
    }
}

impl ContextRetriever {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pick the sections for a query.
    ///
    /// `profile` is always present and always first; the list never exceeds
    /// the section cap.
    pub fn select_sections(&self, query: &str) -> Vec<KnowledgeSection> {
        let lowered = query.to_lowercase();

        let mut sections: Vec<KnowledgeSection> = KnowledgeSection::ALL
            .into_iter()
            .filter(|s| s.matches(&lowered))
            .collect();

        if sections.is_empty() {
            sections = DEFAULT_SECTIONS.to_vec();
        }

        if !sections.contains(&KnowledgeSection::Profile) {
            sections.insert(0, KnowledgeSection::Profile);
        }

        sections.truncate(self.max_sections.max(1));
        sections
    }

    /// Retrieve and render the context blob for a query
    pub fn retrieve(&self, query: &str) -> RetrievedContext {
        let sections = self.select_sections(query);

        debug!(
            query = %query,
            sections = ?sections,
            "Matched knowledge sections"
        );

        let text = sections
            .iter()
            .map(KnowledgeSection::render)
            .collect::<Vec<_>>()
            .join("\n\n");

        RetrievedContext { sections, text }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use KnowledgeSection::*;

    #[test]
    fn test_email_query_matches_profile() {
        let retriever = ContextRetriever::new();

        let sections = retriever.select_sections("What is your email?");
        assert_eq!(sections, vec![Profile]);

        let context = retriever.retrieve("WHAT IS YOUR EMAIL?");
        assert!(context.text.starts_with("## Profile Information\n"));
        assert!(context.text.contains("alex.rivera@example.com"));
    }

    #[test]
    fn test_no_keyword_hits_uses_defaults() {
        let retriever = ContextRetriever::new();

        assert_eq!(retriever.select_sections("Hi!"), vec![Profile, Experience, Skills]);
    }

    #[test]
    fn test_profile_prepended_when_missing() {
        let retriever = ContextRetriever::new();

        let sections = retriever.select_sections("Which degree did you get?");
        assert_eq!(sections, vec![Profile, Education]);
    }

    #[test]
    fn test_never_more_than_four_sections() {
        let retriever = ContextRetriever::new();
        let query = "Tell me about your work experience, degree, python skills, \
                     projects you built and udemy certifications";

        let sections = retriever.select_sections(query);
        assert_eq!(sections.len(), 4);
        assert_eq!(sections[0], Profile);

        let context = retriever.retrieve(query);
        assert_eq!(context.text.matches("\n\n## ").count(), 3);
    }

    #[test]
    fn test_profile_first_even_if_matched_with_many_sections() {
        let retriever = ContextRetriever::new();

        for query in [
            "contact",
            "degree, job, python, projects, udemy, email",
            "Hi!",
            "where did you study engineering",
        ] {
            let sections = retriever.select_sections(query);
            assert_eq!(sections.first(), Some(&Profile), "query: {}", query);
            assert!(sections.len() <= DEFAULT_MAX_SECTIONS);
        }
    }

    #[test]
    fn test_retrieval_is_deterministic() {
        let retriever = ContextRetriever::new();
        let first = retriever.retrieve("What projects have you built with Python?");
        let second = retriever.retrieve("what projects have you built with python?");

        assert_eq!(first, second);
    }

    #[test]
    fn test_blocks_joined_with_blank_line() {
        let context = ContextRetriever::new().retrieve("Which degree did you get?");
        let expected = format!("{}\n\n{}", Profile.render(), Education.render());

        assert_eq!(context.text, expected);
    }
}
