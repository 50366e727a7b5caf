//! Where post documents are fetched from.
//!
//! Controllers only see the [`DocumentSource`] trait. The binary picks
//! [`HttpSource`] for a remote site root and [`DirSource`] for a local one.

mod dir;
mod http;

pub use dir::DirSource;
pub use http::HttpSource;

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::config::{Config, DocumentLocation};
use crate::constants::{INDEX_DOCUMENT, POSTS_DIR};

/// A document the controllers can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Document<'a> {
    /// The post list, `posts/posts.json`.
    Index,
    /// A single post, `posts/{id}.json`.
    Post(&'a str),
}

impl Document<'_> {
    /// Path relative to the site root, with the post id inserted verbatim.
    #[must_use]
    pub fn relative_path(&self) -> String {
        match self {
            Self::Index => INDEX_DOCUMENT.to_string(),
            Self::Post(id) => format!("{POSTS_DIR}/{id}.json"),
        }
    }
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("{url} returned status {status}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },
    #[error("invalid document URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("document not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("post id {0:?} cannot be mapped to a document")]
    InvalidId(String),
}

/// Fetches raw document bytes.
///
/// One call per page load; implementations do not retry.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Human-readable location, for logs.
    fn describe(&self) -> String;

    /// Fetch the raw bytes of a document.
    async fn fetch(&self, document: Document<'_>) -> Result<Vec<u8>, SourceError>;
}

/// Build the document source selected by the configuration.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be constructed.
pub fn from_config(config: &Config) -> Result<Arc<dyn DocumentSource>, SourceError> {
    let source: Arc<dyn DocumentSource> = match &config.documents {
        DocumentLocation::Remote(base) => {
            Arc::new(HttpSource::new(base.clone(), config.fetch_timeout)?)
        }
        DocumentLocation::Local(root) => Arc::new(DirSource::new(root.clone())),
    };
    Ok(source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_paths() {
        assert_eq!(Document::Index.relative_path(), "posts/posts.json");
        assert_eq!(
            Document::Post("2025-01-15-test").relative_path(),
            "posts/2025-01-15-test.json"
        );
        // Verbatim, no encoding
        assert_eq!(Document::Post("a b").relative_path(), "posts/a b.json");
    }

    #[test]
    fn test_from_config_local() {
        let config = Config::for_testing("/srv/site");
        let source = from_config(&config).unwrap();
        assert!(source.describe().contains("/srv/site"));
    }
}
