use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;
use url::Url;

use super::{Document, DocumentSource, SourceError};
use crate::constants::{INDEX_DOCUMENT, POSTS_DIR, USER_AGENT};

/// Fetches documents from a site root served over HTTP(S).
#[derive(Debug, Clone)]
pub struct HttpSource {
    http: reqwest::Client,
    base: Url,
}

impl HttpSource {
    /// Create a source rooted at `base`, which should end with `/`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(base: Url, timeout: Duration) -> Result<Self, SourceError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { http, base })
    }

    /// Resolve a document against the site root.
    ///
    /// Post ids are percent-encoded into a single path segment so they can
    /// never climb out of `posts/` or smuggle a query string.
    ///
    /// # Errors
    ///
    /// Returns an error if the joined URL is invalid.
    pub fn document_url(&self, document: Document<'_>) -> Result<Url, SourceError> {
        let url = match document {
            Document::Index => self.base.join(INDEX_DOCUMENT)?,
            Document::Post(id) => self
                .base
                .join(&format!("{POSTS_DIR}/{}.json", urlencoding::encode(id)))?,
        };
        Ok(url)
    }
}

#[async_trait]
impl DocumentSource for HttpSource {
    fn describe(&self) -> String {
        self.base.to_string()
    }

    async fn fetch(&self, document: Document<'_>) -> Result<Vec<u8>, SourceError> {
        let url = self.document_url(document)?;
        debug!(url = %url, "Fetching document");

        let response = self.http.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                status,
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        debug!(url = %url, bytes = body.len(), "Fetched document");
        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(base: &str) -> HttpSource {
        HttpSource::new(Url::parse(base).unwrap(), Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_document_url_index() {
        let src = source("https://example.github.io/aipost/");
        assert_eq!(
            src.document_url(Document::Index).unwrap().as_str(),
            "https://example.github.io/aipost/posts/posts.json"
        );
    }

    #[test]
    fn test_document_url_post() {
        let src = source("https://example.github.io/aipost/");
        assert_eq!(
            src.document_url(Document::Post("2025-01-15-мысль"))
                .unwrap()
                .as_str(),
            "https://example.github.io/aipost/posts/2025-01-15-%D0%BC%D1%8B%D1%81%D0%BB%D1%8C.json"
        );
    }

    #[test]
    fn test_document_url_post_cannot_escape() {
        let src = source("https://example.github.io/aipost/");
        let url = src.document_url(Document::Post("../secret?x=1")).unwrap();
        assert!(url.path().starts_with("/aipost/posts/"));
        assert!(url.query().is_none());
    }
}
