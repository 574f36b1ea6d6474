//! Static site content.
//!
//! Everything the site displays lives here as literal data. [`portfolio`]
//! and [`projects`] are called once at startup and the records are passed
//! into the page components as props; nothing mutates them afterwards.

use serde::{Deserialize, Serialize};

/// Top-level portfolio record: identity, bio, contact, skills.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioContent {
    pub name: String,
    pub role: String,
    pub location: String,
    pub education: String,
    pub certifications: Vec<Certification>,
    pub bio: String,
    pub contact: ContactInfo,
    pub skills: Vec<SkillEntry>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub provider: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub linkedin: String,
    pub github: String,
    /// Path to the downloadable resume in the served asset directory.
    pub resume_file: String,
}

/// One entry of the scrolling skills ticker.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillEntry {
    pub name: String,
    /// Icon name, rendered as an `icon-*` class.
    pub icon: String,
    /// Display color modifier class for the icon.
    pub color: String,
}

/// One showcased project.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub category: String,
    pub stack: String,
    pub description: String,
    /// Gradient tag for the card glow and media tint classes.
    pub gradient: String,
    pub github: String,
    /// Live demo URL; not every project has one deployed.
    pub demo: Option<String>,
    /// Preview image path; a missing file falls back to a solid block.
    pub image: String,
}

/// The portfolio record rendered by the home page.
pub fn portfolio() -> PortfolioContent {
    PortfolioContent {
        name: "Manish M".into(),
        role: "Full Stack & AI Engineer".into(),
        location: "Udupi / Bangalore".into(),
        education: "SMVITM (CS)".into(),
        certifications: vec![Certification {
            name: "Get Started with Databricks for Machine Learning".into(),
            provider: "Databricks".into(),
        }],
        bio: "I build intelligent systems that bridge the gap between complex \
              backend logic and seamless user experiences. I'm passionate about \
              leveraging Generative AI to solve real-world problems and creating \
              intuitive digital products."
            .into(),
        contact: ContactInfo {
            email: "manishmahesh456@gmail.com".into(),
            linkedin: "https://www.linkedin.com/in/manish-m-5b7949258/".into(),
            github: "https://github.com/manishrao0312".into(),
            resume_file: "/resume.pdf".into(),
        },
        skills: vec![
            skill("Python", "terminal", "yellow"),
            skill("React.js", "code", "cyan"),
            skill("Node.js", "database", "green"),
            skill("FastAPI", "globe", "teal"),
            skill("Generative AI", "sparkles", "purple"),
            skill("Machine Learning", "cpu", "orange"),
        ],
    }
}

fn skill(name: &str, icon: &str, color: &str) -> SkillEntry {
    SkillEntry {
        name: name.into(),
        icon: icon.into(),
        color: color.into(),
    }
}

/// The showcased projects, in display order.
pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: "01".into(),
            title: "Virtual Try-On & Stylist".into(),
            category: "Generative AI".into(),
            stack: "React, FastAPI, Gemini API".into(),
            description: "A GenAI system allowing users to realistically swap \
                          clothing on photos. Features a 'Smart Stylist' engine \
                          that analyzes outfit choices for visual compatibility."
                .into(),
            gradient: "violet".into(),
            github: "https://github.com/manishrao0312".into(),
            demo: None,
            image: "/tryon.png".into(),
        },
        Project {
            id: "02".into(),
            title: "F1 Telemetry AI".into(),
            category: "Data Science".into(),
            stack: "TypeScript, Pandas, Scikit-learn".into(),
            description: "Real-time analytics dashboard processing race telemetry. \
                          Uses K-Means clustering to categorize driving styles and \
                          generates race strategy reports."
                .into(),
            gradient: "ember".into(),
            github: "https://github.com/manishrao0312/FORMULA-1".into(),
            demo: Some("https://maanishrraof1.netlify.app/".into()),
            image: "/f1.png".into(),
        },
        Project {
            id: "03".into(),
            title: "Skill Bartering Platform".into(),
            category: "Full Stack".into(),
            stack: "MERN Stack, WebRTC, Python".into(),
            description: "Peer-to-peer learning platform with real-time video \
                          exchange. Features a Python-based matchmaking algorithm \
                          for skill compatibility."
                .into(),
            gradient: "jade".into(),
            github: "https://github.com/manishrao0312".into(),
            demo: None,
            image: "/skill-barter.jpg".into(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn projects_keep_their_given_order() {
        let ids: Vec<String> = projects().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["01", "02", "03"]);
    }

    #[test]
    fn exactly_one_project_has_a_live_demo() {
        let with_demo: Vec<Project> = projects()
            .into_iter()
            .filter(|p| p.demo.is_some())
            .collect();
        assert_eq!(with_demo.len(), 1);
        assert_eq!(with_demo[0].id, "02");
    }

    #[test]
    fn outbound_urls_are_well_formed() {
        let content = portfolio();
        assert!(content.contact.github.starts_with("https://"));
        assert!(content.contact.linkedin.starts_with("https://"));
        assert!(content.contact.email.contains('@'));
        assert!(content.contact.resume_file.starts_with('/'));

        for project in projects() {
            assert!(project.github.starts_with("https://"), "{}", project.id);
            if let Some(demo) = &project.demo {
                assert!(demo.starts_with("https://"), "{}", project.id);
            }
            assert!(project.image.starts_with('/'), "{}", project.id);
        }
    }

    #[test]
    fn skills_are_complete() {
        let skills = portfolio().skills;
        assert_eq!(skills.len(), 6);
        for entry in &skills {
            assert!(!entry.name.is_empty());
            assert!(!entry.icon.is_empty());
            assert!(!entry.color.is_empty());
        }
    }
}
