//! Error types for configuration resolution.
//!
//! This module provides [`ConfigError`], the primary error type for all
//! configuration operations. Errors are returned on the first violated rule
//! (fail-fast): a configuration error is deterministic and requires a source
//! edit to fix, so a single clear message beats a batch report.

use std::fmt;

/// Error type for configuration loading, validation and merging.
///
/// Every variant identifies exactly one violated rule. The calling build
/// process is expected to halt and surface the message to the developer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A field has the wrong shape (e.g. a number where a string sequence
    /// was expected).
    Type {
        /// The configuration field that failed the shape check.
        field: String,
        /// What the field was expected to contain.
        expected: String,
    },

    /// The class prefix contains characters that are not safe in a CSS
    /// class name.
    InvalidPrefix {
        /// The offending prefix value.
        prefix: String,
    },

    /// Two theme entries share the same name.
    DuplicateThemeName {
        /// The colliding name.
        name: String,
    },

    /// `dark_theme` names a theme that is not declared in `themes`.
    UnknownTheme {
        /// The unresolved theme name.
        name: String,
    },

    /// A theme entry references a base theme that is not a recognized
    /// built-in.
    UnknownBaseTheme {
        /// The unresolved base name.
        name: String,
        /// The names of the recognized built-in themes.
        known: Vec<String>,
    },

    /// `merge` was called before `validate` (internal ordering contract).
    NotValidated,

    /// The configuration document could not be parsed.
    Parse {
        /// Error message from the document parser.
        message: String,
    },

    /// The configuration file could not be read.
    Load {
        /// Error message from the file loader.
        message: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Type { field, expected } => {
                write!(f, "invalid value for '{}': expected {}", field, expected)
            }
            ConfigError::InvalidPrefix { prefix } => {
                write!(
                    f,
                    "invalid class prefix '{}': only [A-Za-z0-9_-] is allowed",
                    prefix
                )
            }
            ConfigError::DuplicateThemeName { name } => {
                write!(f, "duplicate theme name '{}'", name)
            }
            ConfigError::UnknownTheme { name } => {
                write!(f, "dark theme '{}' is not declared in 'themes'", name)
            }
            ConfigError::UnknownBaseTheme { name, known } => {
                write!(
                    f,
                    "unknown base theme '{}' (built-in themes: {})",
                    name,
                    known.join(", ")
                )
            }
            ConfigError::NotValidated => {
                write!(f, "configuration must be validated before merging")
            }
            ConfigError::Parse { message } => {
                write!(f, "failed to parse configuration: {}", message)
            }
            ConfigError::Load { message } => {
                write!(f, "failed to load configuration: {}", message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::Parse {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse {
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Load {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_error_display() {
        let err = ConfigError::Type {
            field: "content".to_string(),
            expected: "a sequence of glob strings".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("content"));
        assert!(msg.contains("sequence of glob strings"));
    }

    #[test]
    fn test_unknown_base_theme_lists_builtins() {
        let err = ConfigError::UnknownBaseTheme {
            name: "solarized".to_string(),
            known: vec!["light".to_string(), "dark".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("solarized"));
        assert!(msg.contains("light, dark"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ConfigError = io_err.into();
        assert!(matches!(err, ConfigError::Load { .. }));
    }

    #[test]
    fn test_from_yaml_error() {
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>("a: [").unwrap_err();
        let err: ConfigError = yaml_err.into();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
