use super::{DocumentPath, DocumentSource};
use crate::error::FetchError;
use serde_json::Value;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Reads documents from the workspace directory that is served under `/static`.
#[derive(Debug, Clone)]
pub struct WorkspaceSource {
    root: PathBuf,
}

impl WorkspaceSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl DocumentSource for WorkspaceSource {
    async fn fetch(&self, path: DocumentPath) -> Result<Value, FetchError> {
        let relative = path.relative_path()?;
        let file = self.root.join(&relative);
        tracing::debug!(path = %file.display(), "reading document");

        let bytes = tokio::fs::read(&file).await.map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                FetchError::NotFound(relative.clone())
            } else {
                FetchError::Io {
                    path: relative.clone(),
                    source,
                }
            }
        })?;

        serde_json::from_slice(&bytes).map_err(|e| FetchError::Decode {
            path: relative,
            message: e.to_string(),
        })
    }
}
