//! Options for reading configuration text

use serde::{Deserialize, Serialize};

/// Configuration for the text reader
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigurationOptions {
    /// Fail on malformed lines instead of skipping them
    pub strict: bool,
    /// Strip surrounding whitespace from unquoted values
    pub trim_values: bool,
}

impl Default for ConfigurationOptions {
    fn default() -> Self {
        Self {
            strict: true,
            trim_values: true,
        }
    }
}

impl ConfigurationOptions {
    /// Reject any malformed input
    pub fn strict() -> Self {
        Self::default()
    }

    /// Skip malformed lines with a warning
    pub fn lenient() -> Self {
        Self {
            strict: false,
            trim_values: true,
        }
    }

    pub fn with_trim_values(mut self, trim_values: bool) -> Self {
        self.trim_values = trim_values;
        self
    }
}
