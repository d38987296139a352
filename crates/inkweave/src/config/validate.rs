//! Configuration validation.
//!
//! Validation is a pure check over a [`RawConfig`]: no I/O, no mutation.
//! Checks run in a fixed order and stop at the first violated rule:
//!
//! 1. content globs are non-empty strings
//! 2. the class prefix is identifier-safe
//! 3. theme names are unique
//! 4. the dark theme name resolves to a declared entry
//!
//! Non-fatal findings (an empty glob list, a color value that does not look
//! like CSS) are collected as [`ConfigWarning`] values instead of errors, so
//! the build can proceed while still telling the developer about them.

use std::collections::BTreeSet;
use std::fmt;

use crate::color::ColorToken;
use crate::error::ConfigError;

use super::raw::{RawConfig, ThemeEntry};

/// A non-fatal validation finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// `content` is empty, so the external scanner will discover no source
    /// files and the generator will emit nothing.
    EmptyContentGlobs,
    /// A theme declares a color value this core cannot recognize as CSS.
    /// The value is still carried through; the downstream generator may
    /// understand forms this core does not.
    UnparsableColor {
        /// The declaring theme.
        theme: String,
        /// The color role.
        role: String,
        /// The offending value.
        value: String,
    },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigWarning::EmptyContentGlobs => {
                write!(f, "'content' is empty: no source files will be scanned")
            }
            ConfigWarning::UnparsableColor { theme, role, value } => {
                write!(
                    f,
                    "theme '{}' role '{}' has unrecognized color value '{}'",
                    theme, role, value
                )
            }
        }
    }
}

/// A configuration that has passed [`validate`].
///
/// Borrows the checked [`RawConfig`] and carries any warnings. This is the
/// only way to reach the merge step on the function API, so merging an
/// unvalidated document is a type error rather than a runtime one.
#[derive(Debug, Clone)]
pub struct Validated<'a> {
    raw: &'a RawConfig,
    warnings: Vec<ConfigWarning>,
}

impl<'a> Validated<'a> {
    /// The underlying configuration.
    pub fn raw(&self) -> &'a RawConfig {
        self.raw
    }

    /// Non-fatal findings collected during validation.
    pub fn warnings(&self) -> &[ConfigWarning] {
        &self.warnings
    }

    pub(crate) fn into_warnings(self) -> Vec<ConfigWarning> {
        self.warnings
    }
}

/// Returns true if `prefix` is safe to prepend to a CSS class name.
///
/// The allowed set is `[A-Za-z0-9_-]`. The empty prefix is valid (it is
/// also the default).
pub fn is_valid_prefix(prefix: &str) -> bool {
    prefix
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Validates a raw configuration.
///
/// Pure check, fail-fast: the first violated rule is returned as a
/// [`ConfigError`] and later rules are not evaluated.
///
/// # Example
///
/// ```rust
/// use inkweave::{validate, RawConfig, ThemeEntry};
///
/// let raw = RawConfig::new()
///     .content_glob("./src/**/*.html")
///     .theme(ThemeEntry::reference("black"))
///     .dark_theme("black");
///
/// let validated = validate(&raw).unwrap();
/// assert!(validated.warnings().is_empty());
/// ```
pub fn validate(raw: &RawConfig) -> Result<Validated<'_>, ConfigError> {
    // (1) glob shape
    for glob in &raw.content_globs {
        if glob.trim().is_empty() {
            return Err(ConfigError::Type {
                field: "content".to_string(),
                expected: "non-empty glob pattern strings".to_string(),
            });
        }
    }

    // (2) prefix charset
    if let Some(prefix) = &raw.class_prefix {
        if !is_valid_prefix(prefix) {
            return Err(ConfigError::InvalidPrefix {
                prefix: prefix.clone(),
            });
        }
    }

    // (3) unique theme names
    let mut seen = BTreeSet::new();
    for entry in &raw.themes {
        if !seen.insert(entry.name()) {
            return Err(ConfigError::DuplicateThemeName {
                name: entry.name().to_string(),
            });
        }
    }

    // (4) dark theme resolves
    if let Some(dark) = &raw.dark_theme_name {
        if !raw.themes.iter().any(|entry| entry.name() == dark.as_str()) {
            return Err(ConfigError::UnknownTheme { name: dark.clone() });
        }
    }

    let mut warnings = Vec::new();
    if raw.content_globs.is_empty() {
        warnings.push(ConfigWarning::EmptyContentGlobs);
    }
    for entry in &raw.themes {
        if let ThemeEntry::Inline { name, colors, .. } = entry {
            for (role, value) in colors {
                if ColorToken::parse(value).is_err() {
                    warnings.push(ConfigWarning::UnparsableColor {
                        theme: name.clone(),
                        role: role.clone(),
                        value: value.clone(),
                    });
                }
            }
        }
    }

    Ok(Validated { raw, warnings })
}
