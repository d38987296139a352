//! Default-merge and the resolver state machine.
//!
//! Merging turns a validated [`RawConfig`] into an [`EffectiveConfig`]:
//! every optional field defaulted, every theme entry resolved to a flat
//! color map, declaration order preserved. It is a pure data transformation
//! with no I/O.
//!
//! Two entry points exist:
//!
//! - [`Validated::merge`] on the function API, where the type system already
//!   guarantees validation happened;
//! - [`Resolver`], an owning wrapper with the explicit linear state machine
//!   `Unvalidated -> Validated -> Merged` for callers that hold the
//!   configuration across both steps. `merge` before `validate` fails with
//!   [`ConfigError::NotValidated`] even though the natural call order never
//!   reaches that path.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_yaml::Value;

use crate::error::ConfigError;
use crate::theme::{resolve_theme, ResolvedTheme};

use super::raw::{DarkModeStrategy, RawConfig};
use super::validate::{validate, ConfigWarning, Validated};

/// The fully resolved configuration, ready for the style generator.
///
/// Every optional field of the raw document has a concrete value here:
/// a missing prefix is the empty string, a missing dark mode strategy is
/// the media query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EffectiveConfig {
    /// Glob patterns for the external scanner, in declaration order.
    pub content_globs: Vec<String>,
    /// The process-wide class prefix. Empty when none was declared.
    pub class_prefix: String,
    /// Resolved themes in declaration order.
    pub themes: Vec<ResolvedTheme>,
    /// Name of the dark variant theme, if one was declared.
    pub dark_theme_name: Option<String>,
    /// How dark mode activation is detected downstream.
    pub dark_mode: DarkModeStrategy,
    /// Opaque style tokens, carried through from the raw document.
    pub theme_extensions: BTreeMap<String, Value>,
    /// Opaque per-plugin options, carried through from the raw document.
    pub plugin_options: BTreeMap<String, Value>,
}

impl EffectiveConfig {
    /// Looks up a resolved theme by name.
    pub fn theme(&self, name: &str) -> Option<&ResolvedTheme> {
        self.themes.iter().find(|theme| theme.name == name)
    }

    /// The resolved theme marked as the dark variant, if any.
    pub fn dark_theme(&self) -> Option<&ResolvedTheme> {
        self.themes.iter().find(|theme| theme.is_dark_variant)
    }

    /// Applies the class prefix to a utility class name.
    pub fn prefixed_class(&self, class: &str) -> String {
        format!("{}{}", self.class_prefix, class)
    }
}

impl Validated<'_> {
    /// Merges the validated configuration into an [`EffectiveConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownBaseTheme`] if a theme entry spreads
    /// from an unrecognized built-in. Base references are the one thing
    /// validation does not pre-check; they surface here, before any partial
    /// result escapes.
    pub fn merge(&self) -> Result<EffectiveConfig, ConfigError> {
        merge_config(self.raw())
    }
}

/// The merge algorithm. Callers go through [`Validated::merge`] or
/// [`Resolver::merge`], both of which guarantee validation happened.
fn merge_config(raw: &RawConfig) -> Result<EffectiveConfig, ConfigError> {
    let class_prefix = raw.class_prefix.clone().unwrap_or_default();
    let dark_mode = raw.dark_mode.clone().unwrap_or_default();

    let mut themes = Vec::with_capacity(raw.themes.len());
    for entry in &raw.themes {
        let mut resolved = resolve_theme(entry)?;
        // The prefix is process-wide, not per-theme.
        resolved.class_prefix = class_prefix.clone();
        if raw.dark_theme_name.as_deref() == Some(resolved.name.as_str()) {
            resolved.is_dark_variant = true;
        }
        themes.push(resolved);
    }

    Ok(EffectiveConfig {
        content_globs: raw.content_globs.clone(),
        class_prefix,
        themes,
        dark_theme_name: raw.dark_theme_name.clone(),
        dark_mode,
        theme_extensions: raw.theme_extensions.clone(),
        plugin_options: raw.plugin_options.clone(),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum State {
    Unvalidated,
    Validated,
    Merged,
}

/// Owning configuration resolver with an explicit lifecycle.
///
/// Wraps a [`RawConfig`] and walks it through
/// `Unvalidated -> Validated -> Merged`. No transition is reachable out of
/// order. Merging repeatedly is allowed; each call produces an independent,
/// identical [`EffectiveConfig`].
///
/// # Example
///
/// ```rust
/// use inkweave::{RawConfig, Resolver, ThemeEntry};
///
/// let raw = RawConfig::new()
///     .content_glob("./src/**/*.html")
///     .prefix("iw-")
///     .theme(ThemeEntry::reference("black"))
///     .dark_theme("black");
///
/// let mut resolver = Resolver::new(raw);
/// resolver.validate().unwrap();
/// let effective = resolver.merge().unwrap();
/// assert_eq!(effective.prefixed_class("btn"), "iw-btn");
/// ```
#[derive(Debug, Clone)]
pub struct Resolver {
    raw: RawConfig,
    state: State,
    warnings: Vec<ConfigWarning>,
}

impl Resolver {
    /// Wraps a raw configuration in the `Unvalidated` state.
    pub fn new(raw: RawConfig) -> Self {
        Self {
            raw,
            state: State::Unvalidated,
            warnings: Vec::new(),
        }
    }

    /// The wrapped configuration.
    pub fn raw(&self) -> &RawConfig {
        &self.raw
    }

    /// Warnings collected by [`validate`](Self::validate). Empty before
    /// validation has run.
    pub fn warnings(&self) -> &[ConfigWarning] {
        &self.warnings
    }

    /// Validates the configuration and advances to `Validated`.
    ///
    /// Returns the collected warnings on success. Validating an already
    /// validated resolver is a no-op re-check.
    pub fn validate(&mut self) -> Result<&[ConfigWarning], ConfigError> {
        let validated = validate(&self.raw)?;
        self.warnings = validated.into_warnings();
        if self.state == State::Unvalidated {
            self.state = State::Validated;
        }
        Ok(&self.warnings)
    }

    /// Merges the configuration and advances to `Merged`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotValidated`] if [`validate`](Self::validate)
    /// has not succeeded first, or [`ConfigError::UnknownBaseTheme`] from
    /// theme resolution.
    pub fn merge(&mut self) -> Result<EffectiveConfig, ConfigError> {
        if self.state < State::Validated {
            return Err(ConfigError::NotValidated);
        }
        let effective = merge_config(&self.raw)?;
        self.state = State::Merged;
        Ok(effective)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::raw::ThemeEntry;

    fn themed_config() -> RawConfig {
        RawConfig::new()
            .content_glob("./src/**/*.{vue,html,js}")
            .prefix("iw-")
            .theme(
                ThemeEntry::inline("light")
                    .with_base("light")
                    .color("primary", "#d6d3d1")
                    .color("secondary", "teal"),
            )
            .theme(ThemeEntry::reference("black"))
            .dark_theme("black")
    }

    #[test]
    fn test_merge_applies_defaults() {
        let raw = RawConfig::new().content_glob("./src/**/*.html");
        let effective = validate(&raw).unwrap().merge().unwrap();

        assert_eq!(effective.class_prefix, "");
        assert_eq!(effective.dark_mode, DarkModeStrategy::MediaQuery);
        assert_eq!(effective.dark_theme_name, None);
        assert!(effective.themes.is_empty());
        assert!(effective.dark_theme().is_none());
    }

    #[test]
    fn test_merge_resolves_themes_in_declaration_order() {
        let effective = validate(&themed_config()).unwrap().merge().unwrap();

        assert_eq!(effective.themes.len(), 2);
        assert_eq!(effective.themes[0].name, "light");
        assert_eq!(effective.themes[1].name, "black");
    }

    #[test]
    fn test_merge_marks_dark_variant() {
        let effective = validate(&themed_config()).unwrap().merge().unwrap();

        assert!(!effective.themes[0].is_dark_variant);
        assert!(effective.themes[1].is_dark_variant);
        assert_eq!(effective.dark_theme().map(|t| t.name.as_str()), Some("black"));
    }

    #[test]
    fn test_merge_attaches_shared_prefix() {
        let effective = validate(&themed_config()).unwrap().merge().unwrap();

        for theme in &effective.themes {
            assert_eq!(theme.class_prefix, "iw-");
        }
        assert_eq!(effective.prefixed_class("btn"), "iw-btn");
    }

    #[test]
    fn test_merge_surfaces_unknown_base() {
        let raw = RawConfig::new().theme(ThemeEntry::inline("x").with_base("solarized"));
        let err = validate(&raw).unwrap().merge().unwrap_err();
        assert!(matches!(err, ConfigError::UnknownBaseTheme { .. }));
    }

    #[test]
    fn test_resolver_merge_before_validate_fails() {
        let mut resolver = Resolver::new(themed_config());
        let err = resolver.merge().unwrap_err();
        assert_eq!(err, ConfigError::NotValidated);
    }

    #[test]
    fn test_resolver_linear_lifecycle() {
        let mut resolver = Resolver::new(themed_config());
        resolver.validate().unwrap();
        let first = resolver.merge().unwrap();
        // Repeat merges are independent and identical.
        let second = resolver.merge().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_resolver_validate_propagates_errors() {
        let raw = RawConfig::new().prefix("not valid");
        let mut resolver = Resolver::new(raw);
        assert!(matches!(
            resolver.validate(),
            Err(ConfigError::InvalidPrefix { .. })
        ));
        // Still unvalidated: merge remains rejected.
        assert_eq!(resolver.merge().unwrap_err(), ConfigError::NotValidated);
    }

    #[test]
    fn test_resolver_exposes_warnings() {
        let mut resolver = Resolver::new(RawConfig::new());
        assert!(resolver.warnings().is_empty());
        resolver.validate().unwrap();
        assert_eq!(resolver.warnings(), &[ConfigWarning::EmptyContentGlobs]);
    }

    #[test]
    fn test_merge_carries_extensions_and_plugins() {
        let mut raw = themed_config();
        raw.theme_extensions.insert(
            "spacing".to_string(),
            serde_yaml::from_str("{\"128\": \"32rem\"}").unwrap(),
        );
        raw.plugin_options.insert(
            "typography".to_string(),
            serde_yaml::from_str("{class: prose}").unwrap(),
        );

        let effective = validate(&raw).unwrap().merge().unwrap();
        assert!(effective.theme_extensions.contains_key("spacing"));
        assert!(effective.plugin_options.contains_key("typography"));
    }
}
