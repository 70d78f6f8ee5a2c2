use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while turning plan or instruction JSON into the typed model.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompileError {
    #[error("Failed to parse document: {0}")]
    InvalidDocument(String),

    #[error("Instruction {} is malformed: {message}", describe_seq(.seq))]
    MalformedInstruction { seq: Option<u64>, message: String },
}

fn describe_seq(seq: &Option<u64>) -> String {
    match seq {
        Some(seq) => format!("#{}", seq),
        None => "<unknown seq>".to_string(),
    }
}

impl From<serde_json::Error> for CompileError {
    fn from(err: serde_json::Error) -> Self {
        CompileError::InvalidDocument(err.to_string())
    }
}

/// Errors that can occur while fetching a plan or instruction document.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Document '{0}' not found")]
    NotFound(String),

    #[error("Request for '{path}' failed with status {status}")]
    Status { path: String, status: u16 },

    #[error("Invalid document path '{0}'")]
    InvalidPath(String),

    #[error("Could not read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Response for '{path}' is not valid JSON: {message}")]
    Decode { path: String, message: String },

    #[cfg(feature = "http")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Errors raised while loading the runtime configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Please set the WORKSPACE_PATH environment variable.")]
    MissingWorkspace,

    #[error("Workspace path '{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),
}

/// Errors surfaced by the presentation shell.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShellError {
    #[error("The plan has not been loaded")]
    NotReady,

    #[error("The {0} pane does not hold a graph")]
    NotAGraphPane(&'static str),

    #[error("Node '{node_id}' not found in the {pane} pane")]
    NodeNotFound { pane: &'static str, node_id: String },
}
