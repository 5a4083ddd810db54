//! Project Configuration (hostcall.toml)
//!
//! Handles project-level configuration stored in `hostcall.toml`.

use crate::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Project configuration from hostcall.toml
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Argument marshalling settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arguments: Option<ArgumentsConfig>,
}

/// Argument marshalling settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct ArgumentsConfig {
    /// How string arguments holding invalid UTF-8 are decoded (default: lossy)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utf8: Option<Utf8Policy>,
}

/// Decoding policy for byte strings read as text.
///
/// Scripting strings are raw byte sequences and need not be valid UTF-8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Utf8Policy {
    /// Replace invalid sequences with U+FFFD
    #[default]
    Lossy,
    /// Reject invalid sequences as a type mismatch
    Strict,
}

impl Utf8Policy {
    pub fn as_str(self) -> &'static str {
        match self {
            Utf8Policy::Lossy => "lossy",
            Utf8Policy::Strict => "strict",
        }
    }
}

impl fmt::Display for Utf8Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Utf8Policy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lossy" => Ok(Utf8Policy::Lossy),
            "strict" => Ok(Utf8Policy::Strict),
            other => Err(ConfigError::InvalidValue {
                field: "arguments.utf8".to_string(),
                reason: format!("expected 'lossy' or 'strict', found '{}'", other),
            }),
        }
    }
}

impl ProjectConfig {
    /// Load project configuration from a file
    pub fn load_from_file(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::NotFound(path.to_path_buf())
            } else {
                ConfigError::IoError(e)
            }
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::TomlParseError {
            file: path.to_path_buf(),
            error: e,
        })
    }

    /// Configured UTF-8 policy, if any
    pub fn utf8_policy(&self) -> Option<Utf8Policy> {
        self.arguments.as_ref().and_then(|a| a.utf8)
    }

    /// Set the UTF-8 policy, creating the `[arguments]` table when missing
    pub fn set_utf8_policy(&mut self, policy: Utf8Policy) {
        self.arguments.get_or_insert_with(Default::default).utf8 = Some(policy);
    }
}
