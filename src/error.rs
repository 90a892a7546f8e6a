//! Library error type

use thiserror::Error;

/// Errors produced while reading content and building the tag index
#[derive(Error, Debug)]
pub enum Error {
    /// The content for a category could not be enumerated or read
    #[error("Content for category '{category}' is unavailable: {source}")]
    CorpusUnavailable {
        category: String,
        #[source]
        source: std::io::Error,
    },

    /// An item's `tags` field is not a string or a list of strings
    #[error("Malformed tag list in {item}: {reason}")]
    MalformedTagList { item: String, reason: String },

    #[error("Unknown layout: {0}")]
    UnknownLayout(String),

    #[error("Config error: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
