//! folio: tag index and page generator for a personal blog
//!
//! The heart of the crate is [`tags`]: it normalizes the tags found in a
//! category's content, counts them into a [`tags::TagIndex`] and finds the
//! items behind each tag. Around it sit the content accessors, the site
//! configuration tables and a Tera based generator for the tag, item and
//! home pages.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod generator;
pub mod layout;
pub mod palette;
pub mod server;
pub mod tags;
pub mod templates;

pub use error::{Error, Result};

use std::path::{Path, PathBuf};

/// The main application: configuration plus resolved directories
#[derive(Clone)]
pub struct Folio {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Content directory, one subdirectory per category
    pub content_dir: PathBuf,
    /// Public (output) directory
    pub public_dir: PathBuf,
}

impl Folio {
    /// Create a new instance from a directory, reading `_config.yml` if present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let config_path = base_dir.as_ref().join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let content_dir = base_dir.join(&config.content_dir);
        let public_dir = base_dir.join(&config.public_dir);

        Self {
            config,
            base_dir,
            content_dir,
            public_dir,
        }
    }

    /// Filesystem accessor over the content directory
    pub fn store(&self) -> content::FsContentStore {
        content::FsContentStore::new(&self.content_dir)
    }

    /// Generate the static pages
    pub fn generate(&self) -> anyhow::Result<()> {
        commands::generate::run(self)
    }

    /// Clean the public directory
    pub fn clean(&self) -> anyhow::Result<()> {
        commands::clean::run(self)
    }
}
