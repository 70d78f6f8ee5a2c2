use crate::error::ConfigError;
use crate::theme::Theme;
use std::path::PathBuf;

/// Environment variable naming the directory served under `/static`.
pub const WORKSPACE_ENV: &str = "WORKSPACE_PATH";

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub workspace_path: PathBuf,
    pub theme: Theme,
}

impl Config {
    pub fn new(workspace_path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let workspace_path = workspace_path.into();
        if !workspace_path.is_dir() {
            return Err(ConfigError::NotADirectory(workspace_path));
        }
        Ok(Self {
            workspace_path,
            theme: Theme::default(),
        })
    }

    /// Loads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads the configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let path = lookup(WORKSPACE_ENV)
            .filter(|p| !p.trim().is_empty())
            .ok_or(ConfigError::MissingWorkspace)?;
        Self::new(path)
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }
}
