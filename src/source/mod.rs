//! Transport for plan and instruction documents.
//!
//! A source only fetches JSON; parsing and compilation happen in the caller
//! so every failure of a selection surfaces through one error path.

use crate::error::FetchError;
use serde_json::Value;
use std::fmt;
use std::future::Future;

#[cfg(feature = "http")]
mod http;
mod workspace;

#[cfg(feature = "http")]
pub use http::HttpSource;
pub use workspace::WorkspaceSource;

/// The two documents this system reads.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DocumentPath {
    Plan,
    Instructions(String),
}

impl DocumentPath {
    /// Path relative to the static root. Task ids must be a single plain
    /// path segment.
    pub fn relative_path(&self) -> Result<String, FetchError> {
        match self {
            DocumentPath::Plan => Ok("plan.json".to_string()),
            DocumentPath::Instructions(task_id) => {
                let invalid = task_id.is_empty()
                    || task_id.contains(['/', '\\'])
                    || task_id.contains("..");
                if invalid {
                    return Err(FetchError::InvalidPath(task_id.clone()));
                }
                Ok(format!("{}.json", task_id))
            }
        }
    }
}

impl fmt::Display for DocumentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentPath::Plan => write!(f, "plan.json"),
            DocumentPath::Instructions(task_id) => write!(f, "{}.json", task_id),
        }
    }
}

/// Capability to fetch a JSON document.
pub trait DocumentSource {
    fn fetch(&self, path: DocumentPath) -> impl Future<Output = Result<Value, FetchError>> + Send;
}
