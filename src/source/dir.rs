use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use super::{Document, DocumentSource, SourceError};

/// Reads documents from a site root on the local filesystem.
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a document onto a file below the root.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::InvalidId`] for ids that are empty, contain a
    /// path separator or NUL, or name a relative directory.
    pub fn document_path(&self, document: Document<'_>) -> Result<PathBuf, SourceError> {
        if let Document::Post(id) = document {
            if id.is_empty()
                || id == "."
                || id == ".."
                || id.contains(&['/', '\\', '\0'][..])
            {
                return Err(SourceError::InvalidId(id.to_string()));
            }
        }
        Ok(self.root.join(document.relative_path()))
    }
}

#[async_trait]
impl DocumentSource for DirSource {
    fn describe(&self) -> String {
        self.root.display().to_string()
    }

    async fn fetch(&self, document: Document<'_>) -> Result<Vec<u8>, SourceError> {
        let path = self.document_path(document)?;
        debug!(path = %path.display(), "Reading document");

        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(SourceError::NotFound { path })
            }
            Err(e) => Err(SourceError::Io { path, source: e }),
        }
    }
}
