//! Contact links shown in the footer and on the contact page

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::colors::color_for;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactType {
    Github,
    Linkedin,
    Twitter,
    Email,
}

impl ContactType {
    pub const ALL: [ContactType; 4] = [
        ContactType::Github,
        ContactType::Linkedin,
        ContactType::Twitter,
        ContactType::Email,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactType::Github => "github",
            ContactType::Linkedin => "linkedin",
            ContactType::Twitter => "twitter",
            ContactType::Email => "email",
        }
    }
}

/// Contact configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub twitter: String,
    pub site: String,
    pub calendly: Option<String>,
    pub links: IndexMap<ContactType, String>,
}

impl Default for ContactConfig {
    fn default() -> Self {
        let links = IndexMap::from([
            (ContactType::Github, "https://github.com/KiarashS".to_string()),
            (
                ContactType::Linkedin,
                "https://linkedin.com/in/thekiarash".to_string(),
            ),
            (
                ContactType::Twitter,
                "https://twitter.com/ItIsKiarash".to_string(),
            ),
            (
                ContactType::Email,
                "mailto:kiarash.s@hotmail.com".to_string(),
            ),
        ]);

        Self {
            twitter: "@ItIsKiarash".to_string(),
            site: "blog.kiarashs.ir".to_string(),
            calendly: Some("https://calendly.com/_kiarash_".to_string()),
            links,
        }
    }
}

/// A rendered social icon link
#[derive(Debug, Clone, Serialize)]
pub struct SocialLink {
    pub kind: &'static str,
    pub href: String,
    pub color: Option<&'static str>,
}

impl ContactConfig {
    /// Social links in declaration order, skipping blank entries
    pub fn social_links(&self) -> Vec<SocialLink> {
        self.links
            .iter()
            .filter(|(_, href)| !href.trim().is_empty())
            .map(|(kind, href)| SocialLink {
                kind: kind.as_str(),
                href: href.clone(),
                color: color_for(kind.as_str()),
            })
            .collect()
    }
}
