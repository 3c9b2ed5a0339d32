use serde::{Deserialize, Serialize};

use crate::{error::Result, path::DEFAULT_SEPARATOR};

/// Default recursion budget.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Evaluation settings handed to [`Matcher`](crate::Matcher).
///
/// Deserializable so it can sit inside an application's own configuration;
/// missing fields take their defaults.
///
/// ```
/// use jsonmatch::MatchOptions;
///
/// let options = MatchOptions::from_json_str(r#"{"max_depth": 16}"#).unwrap();
/// assert_eq!(options.max_depth, 16);
/// assert_eq!(options.path_separator, '.');
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct MatchOptions {
    /// Maximum number of nested evaluation steps before giving up.
    pub max_depth: usize,
    /// Level separator for field paths.
    pub path_separator: char,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            path_separator: DEFAULT_SEPARATOR,
        }
    }
}

impl MatchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_path_separator(mut self, separator: char) -> Self {
        self.path_separator = separator;
        self
    }

    /// Loads options from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}
