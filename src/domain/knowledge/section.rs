use std::fmt;

use serde::Serialize;

use super::records::{CERTIFICATIONS, EDUCATION, EXPERIENCE, PROFILE, PROJECTS, SKILLS};

/// Fixed taxonomy of knowledge sections.
///
/// Declaration order is the order sections appear in a retrieved context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KnowledgeSection {
    Profile,
    Experience,
    Education,
    Skills,
    Projects,
    Certifications,
}

impl KnowledgeSection {
    pub const ALL: [KnowledgeSection; 6] = [
        KnowledgeSection::Profile,
        KnowledgeSection::Experience,
        KnowledgeSection::Education,
        KnowledgeSection::Skills,
        KnowledgeSection::Projects,
        KnowledgeSection::Certifications,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Profile => "profile",
            Self::Experience => "experience",
            Self::Education => "education",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Certifications => "certifications",
        }
    }

    /// Heading used when the section is rendered into a context block
    pub fn title(&self) -> &'static str {
        match self {
            Self::Profile => "Profile Information",
            Self::Experience => "Work Experience",
            Self::Education => "Education",
            Self::Skills => "Skills & Technologies",
            Self::Projects => "Projects",
            Self::Certifications => "Certifications",
        }
    }

    /// Lower-case keywords; a query matches when it contains any of them
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Self::Profile => &[
                "who", "about", "introduction", "overview", "summary", "yourself", "alex",
                "rivera", "contact", "email", "phone", "linkedin", "reach", "connect",
                "location", "where",
            ],
            Self::Experience => &[
                "experience", "work", "job", "role", "career", "employment", "working",
                "worked", "northwind", "position", "professional", "company", "intern",
                "internship", "backend", "engineer", "sdet",
            ],
            Self::Education => &[
                "education", "degree", "university", "college", "school", "study", "studied",
                "graduate", "gpa", "engineering", "lakeside", "academic", "bachelor", "b.e",
            ],
            Self::Skills => &[
                "skills", "technologies", "tech", "stack", "programming", "languages",
                "frameworks", "tools", "know", "proficient", "expertise", "capable", "good at",
                "python", "java", "javascript", "rust",
            ],
            Self::Projects => &[
                "projects", "built", "created", "developed", "portfolio", "work samples",
                "coder buddy", "nutriai", "interview assistant", "cifar", "applications", "apps",
            ],
            Self::Certifications => &[
                "certifications", "certificates", "certified", "courses", "training", "udemy",
                "learning", "credentials",
            ],
        }
    }

    /// Whether an already lower-cased query mentions this section
    pub fn matches(&self, lowered_query: &str) -> bool {
        self.keywords().iter().any(|k| lowered_query.contains(k))
    }

    /// Render the section's record as a labeled text block
    pub fn render(&self) -> String {
        let body = match self {
            Self::Profile => pretty(&PROFILE),
            Self::Experience => pretty(&EXPERIENCE),
            Self::Education => pretty(&EDUCATION),
            Self::Skills => pretty(&SKILLS),
            Self::Projects => pretty(&PROJECTS),
            Self::Certifications => pretty(&CERTIFICATIONS),
        };

        format!("## {}\n{}", self.title(), body)
    }
}

impl fmt::Display for KnowledgeSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn pretty<T: Serialize>(record: &T) -> String {
    serde_json::to_string_pretty(record).unwrap_or_default()
}
