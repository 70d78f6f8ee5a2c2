use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Color scheme of the rendered views. Detection is left to the frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Stroke used for task-dependency edges regardless of theme.
pub const TASK_EDGE_COLOR: &str = "red";

impl Theme {
    /// Stroke color for instruction-graph edges.
    pub fn edge_color(&self) -> &'static str {
        match self {
            Theme::Light => "blue",
            Theme::Dark => "aqua",
        }
    }

    /// Name of the tree-inspector theme.
    pub fn inspector_theme(&self) -> &'static str {
        match self {
            Theme::Light => "rjv-default",
            Theme::Dark => "monokai",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme '{}'", other)),
        }
    }
}
