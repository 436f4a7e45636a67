//! Canonical shape of the portfolio document plus its seed content.
//!
//! Every field carries `serde(default)` so a structurally-valid but
//! incomplete document deserializes with blanks instead of failing.
//! Import validation stays shallow on purpose (see `core::validate`);
//! the types here are the deep contract for code, not for imports.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The root aggregate. Fixed top-level sections; `services` is optional in
/// imported documents and defaults to empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PortfolioDocument {
    pub about: About,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<ProjectEntry>,
    pub services: Vec<ServiceEntry>,
    pub contact: Contact,
}

/// Singleton section: who the portfolio belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct About {
    pub name: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub email: String,
    pub website: String,
    pub avatar: String,
    pub skills: Vec<Skill>,
    pub expertise: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Skill {
    pub name: String,
    /// Self-assessed proficiency, 0-100.
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ExperienceEntry {
    pub id: String,
    pub company: String,
    pub position: String,
    /// Free-text range, e.g. "2023 - Present".
    pub duration: String,
    pub location: String,
    pub description: String,
    pub achievements: Vec<String>,
    pub technologies: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ProjectEntry {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub category: String,
    #[serde(rename = "techStack")]
    pub tech_stack: Vec<String>,
    pub links: ProjectLinks,
    pub featured: bool,
    pub status: ProjectStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ProjectLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docs: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, ValueEnum)]
pub enum ProjectStatus {
    Live,
    Beta,
    #[default]
    Development,
    Completed,
    Ongoing,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ServiceEntry {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Glyph shown next to the service title.
    pub icon: String,
    pub features: Vec<String>,
    pub pricing: String,
    pub duration: String,
}

/// Singleton section: how to reach the owner. Social keys are not fixed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Contact {
    pub email: String,
    pub phone: String,
    pub location: String,
    pub availability: String,
    pub social: BTreeMap<String, String>,
}

// ===== Shallow-merge patches =====
//
// Item edits merge field-by-field onto the stored entry. `None` means
// "leave as is". Patches deliberately carry no id: identifiers are assigned
// at add time and never reassigned.

#[derive(Debug, Clone, Default)]
pub struct ExperiencePatch {
    pub company: Option<String>,
    pub position: Option<String>,
    pub duration: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub achievements: Option<Vec<String>>,
    pub technologies: Option<Vec<String>>,
    pub logo: Option<String>,
}

impl ExperiencePatch {
    pub fn apply(self, entry: &mut ExperienceEntry) {
        if let Some(company) = self.company {
            entry.company = company;
        }
        if let Some(position) = self.position {
            entry.position = position;
        }
        if let Some(duration) = self.duration {
            entry.duration = duration;
        }
        if let Some(location) = self.location {
            entry.location = location;
        }
        if let Some(description) = self.description {
            entry.description = description;
        }
        if let Some(achievements) = self.achievements {
            entry.achievements = achievements;
        }
        if let Some(technologies) = self.technologies {
            entry.technologies = technologies;
        }
        if let Some(logo) = self.logo {
            entry.logo = Some(logo);
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub category: Option<String>,
    pub tech_stack: Option<Vec<String>>,
    pub github: Option<String>,
    pub demo: Option<String>,
    pub docs: Option<String>,
    pub featured: Option<bool>,
    pub status: Option<ProjectStatus>,
}

impl ProjectPatch {
    pub fn apply(self, entry: &mut ProjectEntry) {
        if let Some(title) = self.title {
            entry.title = title;
        }
        if let Some(description) = self.description {
            entry.description = description;
        }
        if let Some(image) = self.image {
            entry.image = image;
        }
        if let Some(category) = self.category {
            entry.category = category;
        }
        if let Some(tech_stack) = self.tech_stack {
            entry.tech_stack = tech_stack;
        }
        if let Some(github) = self.github {
            entry.links.github = Some(github);
        }
        if let Some(demo) = self.demo {
            entry.links.demo = Some(demo);
        }
        if let Some(docs) = self.docs {
            entry.links.docs = Some(docs);
        }
        if let Some(featured) = self.featured {
            entry.featured = featured;
        }
        if let Some(status) = self.status {
            entry.status = status;
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ServicePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub features: Option<Vec<String>>,
    pub pricing: Option<String>,
    pub duration: Option<String>,
}

impl ServicePatch {
    pub fn apply(self, entry: &mut ServiceEntry) {
        if let Some(title) = self.title {
            entry.title = title;
        }
        if let Some(description) = self.description {
            entry.description = description;
        }
        if let Some(icon) = self.icon {
            entry.icon = icon;
        }
        if let Some(features) = self.features {
            entry.features = features;
        }
        if let Some(pricing) = self.pricing {
            entry.pricing = pricing;
        }
        if let Some(duration) = self.duration {
            entry.duration = duration;
        }
    }
}

// ===== Seed content =====

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn skill(name: &str, level: u8) -> Skill {
    Skill {
        name: name.to_string(),
        level,
    }
}

/// The fully-populated default document. Every presentation field has a
/// defined value out of the box; consumers needing a working copy must
/// clone. `services` starts empty (the section is optional).
pub fn default_document() -> PortfolioDocument {
    PortfolioDocument {
        about: About {
            name: "Web3 Multi-Specialist".to_string(),
            title: "Content Creator • Crypto Event Organizer • Open Source Contributor • Community Builder • AI Prompt Engineer • Node Operator".to_string(),
            description: "Multi-talented Web3 professional with expertise across six key areas: creating viral crypto content, organizing impactful crypto events, contributing to open-source projects, building and helping communities grow, engineering AI prompts for blockchain applications, and operating validator nodes across multiple networks.".to_string(),
            location: "Indonesia".to_string(),
            email: "web3specialist@example.com".to_string(),
            website: "https://web3specialist.dev".to_string(),
            avatar: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=400&h=400&fit=crop&crop=face".to_string(),
            skills: vec![
                skill("Meme Creation & Viral Content", 95),
                skill("Crypto Event Organization", 92),
                skill("Open Source Contribution", 88),
                skill("Community Building & Support", 94),
                skill("AI Prompt Engineering", 90),
                skill("Node Operations & Validation", 87),
                skill("Social Media Marketing", 93),
                skill("Blockchain Technology", 89),
            ],
            expertise: strings(&[
                "Content Creator",
                "Crypto Event Organizer",
                "Open Source Contributor",
                "Community Builder",
                "AI Prompt Engineer",
                "Node Operator",
            ]),
        },
        experience: vec![
            ExperienceEntry {
                id: "1".to_string(),
                company: "Crypto Social Media & Events".to_string(),
                position: "Content Creator & Event Organizer".to_string(),
                duration: "2023 - Present".to_string(),
                location: "Remote/Indonesia".to_string(),
                description: "Creating viral crypto memes and entertaining content while organizing impactful crypto events across Indonesia. Combining humor with education to make Web3 more accessible and fun for everyone.".to_string(),
                achievements: strings(&[
                    "Created 500+ viral crypto memes with 2M+ total views",
                    "Organized 20+ crypto events and meetups",
                    "Built engaged community of 15K+ crypto enthusiasts",
                    "Collaborated with major crypto projects for content",
                ]),
                technologies: strings(&[
                    "Twitter", "Discord", "Telegram", "Canva", "Photoshop", "Event Management",
                ]),
                logo: Some("https://images.unsplash.com/photo-1559526324-4b87b5e36e44?w=100&h=100&fit=crop".to_string()),
            },
            ExperienceEntry {
                id: "2".to_string(),
                company: "Blockchain Infrastructure Networks".to_string(),
                position: "Node Operator & Community Helper".to_string(),
                duration: "2022 - Present".to_string(),
                location: "Remote".to_string(),
                description: "Operating validator nodes across multiple blockchain networks while actively helping community members with technical issues, staking guidance, and network participation.".to_string(),
                achievements: strings(&[
                    "Operating 8+ validator nodes with 99.9% uptime",
                    "Helped 200+ users with staking and node setup",
                    "Active governance participant in 5+ networks",
                    "Created comprehensive node operation guides",
                ]),
                technologies: strings(&[
                    "Ethereum", "Cosmos", "Polkadot", "Solana", "Docker", "Linux", "Monitoring",
                ]),
                logo: Some("https://images.unsplash.com/photo-1639762681485-074b7f938ba0?w=100&h=100&fit=crop".to_string()),
            },
            ExperienceEntry {
                id: "3".to_string(),
                company: "Open Source & AI Development".to_string(),
                position: "Project Contributor & AI Prompt Engineer".to_string(),
                duration: "2021 - Present".to_string(),
                location: "Remote".to_string(),
                description: "Contributing to open source Web3 projects and specializing in AI prompt engineering for blockchain applications. Building tools and solutions that benefit the entire crypto ecosystem.".to_string(),
                achievements: strings(&[
                    "Contributed to 25+ open source crypto projects",
                    "Developed 100+ specialized AI prompts for DeFi",
                    "Built community tools used by 5K+ developers",
                    "Mentored 75+ new contributors in Web3 development",
                ]),
                technologies: strings(&[
                    "GitHub", "OpenAI", "Claude", "Python", "JavaScript", "Solidity", "Documentation",
                ]),
                logo: Some("https://images.unsplash.com/photo-1621761191319-c6fb62004040?w=100&h=100&fit=crop".to_string()),
            },
        ],
        projects: vec![
            ProjectEntry {
                id: "1".to_string(),
                title: "Viral Crypto Meme Factory".to_string(),
                description: "Toolkit for creating viral crypto memes. Features AI-powered meme generation, trend analysis, and automated posting across social platforms.".to_string(),
                image: "https://images.unsplash.com/photo-1639762681485-074b7f938ba0?w=600&h=400&fit=crop".to_string(),
                category: "Content".to_string(),
                tech_stack: strings(&[
                    "Python", "OpenAI API", "Discord.py", "Twitter API", "Meme Templates", "DALL-E",
                ]),
                links: ProjectLinks {
                    github: Some("https://github.com/web3specialist/meme-factory".to_string()),
                    demo: Some("https://cryptomemes.lol".to_string()),
                    docs: None,
                },
                featured: true,
                status: ProjectStatus::Live,
            },
            ProjectEntry {
                id: "2".to_string(),
                title: "Indonesia Crypto Events Hub".to_string(),
                description: "Complete event management platform for crypto meetups, conferences, and workshops across Indonesia. From small community gatherings to major blockchain conferences.".to_string(),
                image: "https://images.unsplash.com/photo-1620321023374-d1a68fbc720d?w=600&h=400&fit=crop".to_string(),
                category: "Events".to_string(),
                tech_stack: strings(&[
                    "React", "Node.js", "MongoDB", "Stripe", "Google Maps API", "QR Codes",
                ]),
                links: ProjectLinks {
                    github: Some("https://github.com/web3specialist/crypto-events-id".to_string()),
                    demo: Some("https://cryptoevents.id".to_string()),
                    docs: None,
                },
                featured: true,
                status: ProjectStatus::Live,
            },
            ProjectEntry {
                id: "3".to_string(),
                title: "Multi-Chain Node Operations Suite".to_string(),
                description: "Professional node operator toolkit for managing validators across multiple blockchain networks. Includes monitoring, alerting, and automated maintenance features.".to_string(),
                image: "https://images.unsplash.com/photo-1551434678-e076c223a692?w=600&h=400&fit=crop".to_string(),
                category: "Node Operations".to_string(),
                tech_stack: strings(&[
                    "React", "Grafana", "Prometheus", "Docker", "Kubernetes", "Ansible",
                ]),
                links: ProjectLinks {
                    github: Some("https://github.com/web3specialist/node-ops-suite".to_string()),
                    demo: Some("https://nodes.web3specialist.dev".to_string()),
                    docs: None,
                },
                featured: true,
                status: ProjectStatus::Live,
            },
            ProjectEntry {
                id: "4".to_string(),
                title: "Community Helper Bot Network".to_string(),
                description: "Bot ecosystem for helping crypto communities. Features FAQ automation, price alerts, staking guides, and 24/7 community support across multiple platforms.".to_string(),
                image: "https://images.unsplash.com/photo-1557804506-669a67965ba0?w=600&h=400&fit=crop".to_string(),
                category: "Community".to_string(),
                tech_stack: strings(&[
                    "Node.js", "Discord.js", "Telegram Bot API", "Redis", "PostgreSQL",
                ]),
                links: ProjectLinks {
                    github: Some("https://github.com/web3specialist/community-helper-bots".to_string()),
                    demo: Some("https://discord.gg/cryptohelper".to_string()),
                    docs: None,
                },
                featured: false,
                status: ProjectStatus::Live,
            },
            ProjectEntry {
                id: "5".to_string(),
                title: "Open Source Crypto Contributions".to_string(),
                description: "Collection of contributions to major Web3 projects including DeFi protocols, wallet integrations, and developer tools. Focus on improving user experience and accessibility.".to_string(),
                image: "https://images.unsplash.com/photo-1621761191319-c6fb62004040?w=600&h=400&fit=crop".to_string(),
                category: "Open Source".to_string(),
                tech_stack: strings(&[
                    "Solidity", "JavaScript", "TypeScript", "React", "Python", "GitHub Actions",
                ]),
                links: ProjectLinks {
                    github: Some("https://github.com/web3specialist/contributions".to_string()),
                    demo: Some("https://contributions.web3specialist.dev".to_string()),
                    docs: None,
                },
                featured: false,
                status: ProjectStatus::Ongoing,
            },
        ],
        services: Vec::new(),
        contact: Contact {
            email: "web3specialist@example.com".to_string(),
            phone: "+62 813-6536-8638".to_string(),
            location: "Indonesia".to_string(),
            availability: "Available for content collaborations, event partnerships, node operations consulting, community building, AI prompt projects, and open source contributions".to_string(),
            social: BTreeMap::from([
                ("discord".to_string(), "web3specialist#1234".to_string()),
                ("github".to_string(), "https://github.com/web3specialist".to_string()),
                ("linkedin".to_string(), "https://linkedin.com/in/web3specialist".to_string()),
                ("twitter".to_string(), "https://twitter.com/web3specialist".to_string()),
            ]),
        },
    }
}

/// Reduced starter document for the `data sample` export: enough shape to
/// edit into a real portfolio, small enough to read in one screen.
pub fn sample_document() -> PortfolioDocument {
    PortfolioDocument {
        about: About {
            name: "Sample Web3 Specialist".to_string(),
            title: "Content Creator • Event Organizer • Node Operator".to_string(),
            description: "Sample description for a multi-role Web3 specialist portfolio.".to_string(),
            skills: vec![
                skill("Meme Creation & Viral Content", 95),
                skill("Crypto Event Organization", 90),
                skill("Node Operations & Validation", 85),
            ],
            ..About::default()
        },
        experience: vec![ExperienceEntry {
            id: "sample-1".to_string(),
            company: "Sample Web3 Ecosystem".to_string(),
            position: "Multi-Role Contributor".to_string(),
            duration: "2023 - Present".to_string(),
            description: "Sample multi-role Web3 experience".to_string(),
            ..ExperienceEntry::default()
        }],
        projects: vec![ProjectEntry {
            id: "sample-project-1".to_string(),
            title: "Sample Meme Factory".to_string(),
            description: "Sample content project description".to_string(),
            category: "Content".to_string(),
            tech_stack: strings(&["Python", "OpenAI API", "Meme Templates"]),
            featured: true,
            ..ProjectEntry::default()
        }],
        services: Vec::new(),
        contact: Contact {
            email: "sample@example.com".to_string(),
            ..Contact::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_document_is_fully_populated() {
        let doc = default_document();
        assert!(!doc.about.name.is_empty());
        assert!(!doc.about.skills.is_empty());
        assert!(!doc.experience.is_empty());
        assert!(!doc.projects.is_empty());
        assert!(!doc.contact.email.is_empty());
        assert!(!doc.contact.social.is_empty());
    }

    #[test]
    fn test_default_document_ids_are_unique_per_collection() {
        let doc = default_document();
        let mut ids: Vec<&str> = doc.experience.iter().map(|e| e.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), doc.experience.len());

        let mut ids: Vec<&str> = doc.projects.iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), doc.projects.len());
    }

    #[test]
    fn test_tech_stack_serializes_camel_case() {
        let doc = default_document();
        let json = serde_json::to_value(&doc.projects[0]).unwrap();
        assert!(json.get("techStack").is_some());
        assert!(json.get("tech_stack").is_none());
    }

    #[test]
    fn test_incomplete_document_deserializes_with_defaults() {
        let json = serde_json::json!({
            "about": { "name": "Just a name" },
            "experience": [],
            "projects": [{ "id": "p1", "title": "Bare project" }],
            "contact": {}
        });
        let doc: PortfolioDocument = serde_json::from_value(json).unwrap();
        assert_eq!(doc.about.name, "Just a name");
        assert!(doc.about.skills.is_empty());
        assert_eq!(doc.projects[0].status, ProjectStatus::Development);
        assert!(doc.services.is_empty());
    }
}
