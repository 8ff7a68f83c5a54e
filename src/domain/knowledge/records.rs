//! Static portfolio content compiled into the service

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub linkedin: &'static str,
    pub location: &'static str,
    pub summary: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Experience {
    pub title: &'static str,
    pub company: &'static str,
    pub duration: &'static str,
    pub location: &'static str,
    pub highlights: &'static [&'static str],
    pub technologies: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub gpa: &'static str,
    pub year: &'static str,
    pub highlights: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Skills {
    pub languages: &'static [&'static str],
    pub frameworks: &'static [&'static str],
    pub tools: &'static [&'static str],
    pub aiml: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub struct Project {
    pub name: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    #[serde(skip_serializing_if = "is_empty")]
    pub achievements: &'static [&'static str],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<&'static str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CertificationStatus {
    Completed,
    InProgress,
}

#[derive(Debug, Serialize)]
pub struct Certification {
    pub name: &'static str,
    pub provider: &'static str,
    pub status: CertificationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<&'static str>,
}

fn is_empty(items: &&'static [&'static str]) -> bool {
    items.is_empty()
}

pub static PROFILE: Profile = Profile {
    name: "Alex Rivera",
    role: "Backend Engineer (AI Platform)",
    company: "Northwind Health",
    email: "alex.rivera@example.com",
    phone: "+1-555-0142",
    linkedin: "https://www.linkedin.com/in/alex-rivera-example/",
    location: "Austin, Texas, USA",
    summary: "Backend engineer with hands-on experience building and operating LLM-powered \
              services and multi-agent systems. Currently on the AI platform team at Northwind \
              Health, owning the internal LLM gateway.",
};

pub static EXPERIENCE: [Experience; 2] = [
    Experience {
        title: "Backend Engineer (AI Platform)",
        company: "Northwind Health",
        duration: "June 2024 - Present",
        location: "Austin",
        highlights: &[
            "Built an LLM gateway service routing traffic for 15 models across 80+ production use cases",
            "Reworked a document extraction pipeline, lifting accuracy from 88% to 97% with 67% fewer tokens",
            "Raised automated claim adjudication from 40% to 70% through prompt tuning and data analysis",
            "Benchmarked and rolled out new hosted models for production workloads",
        ],
        technologies: &["Python", "FastAPI", "LLMs", "Prompt Engineering", "Java", "Kafka"],
    },
    Experience {
        title: "Backend SDET Intern",
        company: "Northwind Health",
        duration: "Feb 2024 - Jun 2024",
        location: "Austin",
        highlights: &[
            "Built an API automation framework from scratch with 200+ test cases",
            "Automated Kafka workflows to validate message flow across microservices",
            "Tested 40+ APIs covering consultations, prescriptions and pharmacy orders",
        ],
        technologies: &["Java", "TestNG", "Rest-Assured", "Microservices", "Kafka"],
    },
];

pub static EDUCATION: Education = Education {
    degree: "Bachelor of Engineering - Information Science and Engineering",
    institution: "Lakeside Institute of Technology",
    gpa: "3.7/4.0",
    year: "2024",
    highlights: "Computer science fundamentals including data structures, operating systems, \
                 databases, cloud computing, machine learning and deep learning",
};

pub static SKILLS: Skills = Skills {
    languages: &["Python", "Java", "JavaScript", "Rust", "C/C++", "HTML/CSS"],
    frameworks: &["Django", "FastAPI", "Dropwizard", "TestNG", "Rest Assured"],
    tools: &["Kubernetes", "Docker", "Kafka", "Git", "Maven", "MySQL", "Postman"],
    aiml: &[
        "Large Language Models",
        "Prompt Engineering",
        "RAG Systems",
        "Machine Learning",
        "Deep Learning",
        "NLP",
        "LangChain",
        "LangGraph",
        "PyTorch",
    ],
};

pub static PROJECTS: [Project; 4] = [
    Project {
        name: "Coder Buddy - AI Web App Builder",
        description: "Multi-agent system that plans, designs and codes complete web applications \
                      from natural language prompts",
        technologies: &["Python", "LangGraph", "Streamlit", "AI Agents", "LLMs"],
        achievements: &[
            "Reduced API failure rates by 60% with a fault-tolerant provider fallback",
            "Kept 99.9% uptime across distributed agents",
        ],
        link: Some("https://example.com/projects/coder-buddy"),
    },
    Project {
        name: "AI Interview Assistant",
        description: "Interview simulator that runs adaptive interviews and generates structured \
                      performance feedback",
        technologies: &["Python", "Streamlit", "OpenAI"],
        achievements: &[
            "Improved candidate evaluation efficiency by 40%",
            "Real-time conversational analysis with structured feedback",
        ],
        link: Some("https://example.com/projects/interview-assistant"),
    },
    Project {
        name: "NutriAI",
        description: "Chat assistant for infant health and nutrition guidance",
        technologies: &["AI Agent", "Prompt Engineering", "LLMs", "Python", "FastAPI", "Kotlin"],
        achievements: &[],
        link: Some("https://example.com/projects/nutriai"),
    },
    Project {
        name: "CIFAR-10 Image Classification",
        description: "CNN model reaching 86.4% accuracy with data augmentation and regularization",
        technologies: &["Python", "PyTorch", "CNN"],
        achievements: &[],
        link: None,
    },
];

pub static CERTIFICATIONS: [Certification; 3] = [
    Certification {
        name: "AI Engineer Bootcamp",
        provider: "Udemy",
        status: CertificationStatus::Completed,
        link: Some("https://example.com/certificates/ai-engineer"),
    },
    Certification {
        name: "Python and Django Full Stack Web Development",
        provider: "Udemy",
        status: CertificationStatus::Completed,
        link: Some("https://example.com/certificates/django"),
    },
    Certification {
        name: "Agentic AI Course",
        provider: "Online",
        status: CertificationStatus::InProgress,
        link: None,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_skips_empty_fields() {
        let json = serde_json::to_value(&PROJECTS[3]).unwrap();
        assert!(json.get("achievements").is_none());
        assert!(json.get("link").is_none());
    }

    #[test]
    fn test_certification_status_wire_name() {
        let json = serde_json::to_value(&CERTIFICATIONS[2]).unwrap();
        assert_eq!(json["status"], "in-progress");
    }
}
