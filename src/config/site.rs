//! Site configuration (_config.yml)

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::pages::default_link_pages;
use super::{ContactConfig, LinkPage};
use crate::error::Result;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub author: String,
    pub shortname: String,
    pub occupation: String,
    pub description: String,
    pub cv_url: Option<String>,

    // URL
    pub url: String,
    pub root: String,

    // Directory
    pub content_dir: String,
    pub public_dir: String,
    pub tag_dir: String,

    // Writing
    pub default_category: String,
    pub highlight_theme: String,

    /// Fixed seed for the banner palette, entropy when unset
    pub palette_seed: Option<u64>,

    pub contact: ContactConfig,

    /// Footer link to a resources site
    pub resources_url: Option<String>,

    /// Link list pages, keyed by output directory
    pub pages: IndexMap<String, LinkPage>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Kiarash Soleimanzadeh".to_string(),
            author: "Kiarash Soleimanzadeh".to_string(),
            shortname: "Kiarash".to_string(),
            occupation: String::new(),
            description: "Things I blog about".to_string(),
            cv_url: None,

            url: "https://blog.kiarashs.ir".to_string(),
            root: "/".to_string(),

            content_dir: "data".to_string(),
            public_dir: "public".to_string(),
            tag_dir: "tags".to_string(),

            default_category: "blog".to_string(),
            highlight_theme: "base16-ocean.dark".to_string(),

            palette_seed: None,

            contact: ContactConfig::default(),

            resources_url: Some("https://resource.kiarashs.ir".to_string()),
            pages: default_link_pages(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        tracing::debug!("Loaded config from {:?}", path.as_ref());
        Ok(config)
    }

    /// Site-relative URL for a path, honoring `root`
    pub fn url_for(&self, path: &str) -> String {
        let root = self.root.trim_end_matches('/');
        let path = path.trim_start_matches('/');

        if path.is_empty() {
            format!("{}/", root)
        } else {
            format!("{}/{}", root, path)
        }
    }

    /// URL of the listing page for a tag slug
    pub fn tag_url(&self, slug: &str) -> String {
        self.url_for(&format!("{}/{}/", self.tag_dir, slug))
    }
}
