//! The raw configuration document and its declaration format.
//!
//! A [`RawConfig`] is the in-memory form of the static declaration an
//! external build-tool loader reads once at process start. It can be built
//! programmatically or loaded from YAML or JSON:
//!
//! ```yaml
//! content:
//!   - "./src/**/*.{vue,html,js}"
//! prefix: "iw-"
//! themes:
//!   - name: light
//!     base: light
//!     colors:
//!       primary: "#d6d3d1"
//!       secondary: teal
//!   - black
//! dark_theme: black
//! dark_mode: ["data-attribute", "[data-theme=\"black\"]"]
//! ```
//!
//! Shape errors are reported as [`ConfigError::Type`] naming the offending
//! field, not as raw parser messages. Unknown top-level keys are ignored so
//! a newer declaration still loads under an older resolver.

use std::collections::BTreeMap;
use std::path::Path;

use serde::ser::{Serialize, SerializeSeq, Serializer};
use serde_yaml::Value;

use crate::error::ConfigError;

/// File extensions recognized by [`RawConfig::from_file`].
pub const CONFIG_EXTENSIONS: &[&str] = &["yaml", "yml", "json"];

/// One entry in the `themes` sequence.
///
/// An entry is either a bare name referencing a built-in theme, or an inline
/// definition that may spread from a built-in base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeEntry {
    /// A named reference to a built-in theme (`- black`).
    Reference(String),
    /// An inline definition with its own color roles.
    Inline {
        /// The theme's name, unique within the sequence.
        name: String,
        /// Built-in theme to spread from before applying `colors`.
        base: Option<String>,
        /// Color role overrides, applied last-write-wins per key.
        colors: BTreeMap<String, String>,
    },
}

impl ThemeEntry {
    /// Creates a reference entry to a built-in theme.
    pub fn reference(name: impl Into<String>) -> Self {
        ThemeEntry::Reference(name.into())
    }

    /// Creates an inline entry with no base and no colors.
    ///
    /// Use [`with_base`](Self::with_base) and [`color`](Self::color) to
    /// fill it in.
    pub fn inline(name: impl Into<String>) -> Self {
        ThemeEntry::Inline {
            name: name.into(),
            base: None,
            colors: BTreeMap::new(),
        }
    }

    /// Sets the built-in base theme to spread from.
    ///
    /// No effect on reference entries.
    pub fn with_base(mut self, base_name: impl Into<String>) -> Self {
        if let ThemeEntry::Inline { ref mut base, .. } = self {
            *base = Some(base_name.into());
        }
        self
    }

    /// Adds a color role override.
    ///
    /// No effect on reference entries.
    pub fn color(mut self, role: impl Into<String>, value: impl Into<String>) -> Self {
        if let ThemeEntry::Inline { ref mut colors, .. } = self {
            colors.insert(role.into(), value.into());
        }
        self
    }

    /// The entry's name: the referenced name or the inline `name` field.
    pub fn name(&self) -> &str {
        match self {
            ThemeEntry::Reference(name) => name,
            ThemeEntry::Inline { name, .. } => name,
        }
    }

    /// Parses one entry of the `themes` sequence.
    fn parse_value(value: &Value) -> Result<Self, ConfigError> {
        match value {
            Value::String(name) => Ok(ThemeEntry::Reference(name.clone())),
            Value::Mapping(mapping) => {
                let name = match mapping.get("name") {
                    Some(Value::String(name)) => name.clone(),
                    _ => {
                        return Err(ConfigError::Type {
                            field: "themes.name".to_string(),
                            expected: "a string naming the theme".to_string(),
                        })
                    }
                };

                let base = match mapping.get("base") {
                    None | Some(Value::Null) => None,
                    Some(Value::String(base)) => Some(base.clone()),
                    Some(_) => {
                        return Err(ConfigError::Type {
                            field: format!("themes.{}.base", name),
                            expected: "a string naming a built-in theme".to_string(),
                        })
                    }
                };

                let mut colors = BTreeMap::new();
                match mapping.get("colors") {
                    None | Some(Value::Null) => {}
                    Some(Value::Mapping(roles)) => {
                        for (role, color) in roles {
                            let (Value::String(role), Value::String(color)) = (role, color) else {
                                return Err(ConfigError::Type {
                                    field: format!("themes.{}.colors", name),
                                    expected: "a mapping of role names to color strings"
                                        .to_string(),
                                });
                            };
                            colors.insert(role.clone(), color.clone());
                        }
                    }
                    Some(_) => {
                        return Err(ConfigError::Type {
                            field: format!("themes.{}.colors", name),
                            expected: "a mapping of role names to color strings".to_string(),
                        })
                    }
                }

                Ok(ThemeEntry::Inline { name, base, colors })
            }
            _ => Err(ConfigError::Type {
                field: "themes".to_string(),
                expected: "a theme name or an inline theme mapping".to_string(),
            }),
        }
    }
}

/// How the consuming environment signals that the dark theme is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DarkModeStrategy {
    /// `prefers-color-scheme` media query. The default.
    MediaQuery,
    /// A CSS class on an ancestor element (e.g. `.dark`).
    Class(String),
    /// A data attribute selector (e.g. `[data-theme="black"]`).
    DataAttribute(String),
}

impl DarkModeStrategy {
    /// Parses the `dark_mode` field.
    ///
    /// Accepts the string `"media-query"` or a two-element sequence
    /// `["class", <selector>]` / `["data-attribute", <selector>]`.
    pub fn parse_value(value: &Value) -> Result<Self, ConfigError> {
        let type_error = || ConfigError::Type {
            field: "dark_mode".to_string(),
            expected: "\"media-query\" or [\"class\"|\"data-attribute\", selector]".to_string(),
        };

        match value {
            Value::String(mode) if mode == "media-query" => Ok(DarkModeStrategy::MediaQuery),
            Value::Sequence(pair) => {
                let [Value::String(kind), Value::String(selector)] = pair.as_slice() else {
                    return Err(type_error());
                };
                match kind.as_str() {
                    "class" => Ok(DarkModeStrategy::Class(selector.clone())),
                    "data-attribute" => Ok(DarkModeStrategy::DataAttribute(selector.clone())),
                    _ => Err(type_error()),
                }
            }
            _ => Err(type_error()),
        }
    }
}

impl Default for DarkModeStrategy {
    fn default() -> Self {
        DarkModeStrategy::MediaQuery
    }
}

impl Serialize for DarkModeStrategy {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DarkModeStrategy::MediaQuery => serializer.serialize_str("media-query"),
            DarkModeStrategy::Class(selector) => {
                let mut seq = serializer.serialize_seq(Some(2))?;
                seq.serialize_element("class")?;
                seq.serialize_element(selector)?;
                seq.end()
            }
            DarkModeStrategy::DataAttribute(selector) => {
                let mut seq = serializer.serialize_seq(Some(2))?;
                seq.serialize_element("data-attribute")?;
                seq.serialize_element(selector)?;
                seq.end()
            }
        }
    }
}

/// The raw configuration document, before validation and merging.
///
/// Constructed once at process start, validated once, merged once, then
/// treated as immutable.
///
/// # Example: programmatic construction
///
/// ```rust
/// use inkweave::{RawConfig, ThemeEntry};
///
/// let raw = RawConfig::new()
///     .content_glob("./src/**/*.{vue,html,js}")
///     .prefix("iw-")
///     .theme(ThemeEntry::inline("light").with_base("light").color("primary", "#d6d3d1"))
///     .theme(ThemeEntry::reference("black"))
///     .dark_theme("black");
///
/// assert_eq!(raw.themes.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawConfig {
    /// Glob patterns selecting the source files the external scanner
    /// inspects. Carried, not interpreted.
    pub content_globs: Vec<String>,
    /// Opaque style tokens keyed by extension scope (e.g. `extend`).
    pub theme_extensions: BTreeMap<String, Value>,
    /// Opaque per-plugin option objects.
    pub plugin_options: BTreeMap<String, Value>,
    /// Prefix prepended to every generated utility class name.
    pub class_prefix: Option<String>,
    /// Theme entries in declaration order.
    pub themes: Vec<ThemeEntry>,
    /// Which theme entry is the dark variant.
    pub dark_theme_name: Option<String>,
    /// How dark mode activation is detected downstream.
    pub dark_mode: Option<DarkModeStrategy>,
}

impl RawConfig {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a content glob pattern, returning `self` for chaining.
    pub fn content_glob(mut self, pattern: impl Into<String>) -> Self {
        self.content_globs.push(pattern.into());
        self
    }

    /// Sets the class prefix.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = Some(prefix.into());
        self
    }

    /// Appends a theme entry.
    pub fn theme(mut self, entry: ThemeEntry) -> Self {
        self.themes.push(entry);
        self
    }

    /// Names the dark variant theme.
    pub fn dark_theme(mut self, name: impl Into<String>) -> Self {
        self.dark_theme_name = Some(name.into());
        self
    }

    /// Sets the dark mode strategy.
    pub fn dark_mode(mut self, strategy: DarkModeStrategy) -> Self {
        self.dark_mode = Some(strategy);
        self
    }

    /// Loads a configuration from a YAML document.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let value: Value = serde_yaml::from_str(yaml)?;
        Self::from_value(&value)
    }

    /// Loads a configuration from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(&value)
    }

    /// Loads a configuration file, dispatching on extension.
    ///
    /// Recognized extensions are listed in [`CONFIG_EXTENSIONS`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Load`] if the file cannot be read or has an
    /// unrecognized extension, or a parse/shape error from the document.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        if !CONFIG_EXTENSIONS.contains(&extension.as_str()) {
            return Err(ConfigError::Load {
                message: format!(
                    "unsupported config extension for {} (expected one of: {})",
                    path.display(),
                    CONFIG_EXTENSIONS.join(", ")
                ),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Load {
            message: format!("failed to read {}: {}", path.display(), e),
        })?;

        match extension.as_str() {
            "json" => Self::from_json(&content),
            _ => Self::from_yaml(&content),
        }
    }

    /// Builds a configuration from an already-parsed document value.
    ///
    /// This is where shape checking happens: every recognized field is
    /// traversed manually and malformed shapes produce
    /// [`ConfigError::Type`] naming the field.
    pub fn from_value(value: &Value) -> Result<Self, ConfigError> {
        let mapping = match value {
            Value::Mapping(mapping) => mapping,
            Value::Null => return Ok(Self::default()),
            _ => {
                return Err(ConfigError::Type {
                    field: "configuration".to_string(),
                    expected: "a mapping at the document root".to_string(),
                })
            }
        };

        let mut raw = Self::default();

        for (key, value) in mapping {
            let Value::String(key) = key else {
                return Err(ConfigError::Type {
                    field: "configuration".to_string(),
                    expected: "string keys at the document root".to_string(),
                });
            };

            match key.as_str() {
                "content" => raw.content_globs = parse_string_sequence("content", value)?,
                "prefix" => {
                    raw.class_prefix = Some(parse_string("prefix", value)?);
                }
                "themes" => {
                    let Value::Sequence(entries) = value else {
                        return Err(ConfigError::Type {
                            field: "themes".to_string(),
                            expected: "a sequence of theme entries".to_string(),
                        });
                    };
                    raw.themes = entries
                        .iter()
                        .map(ThemeEntry::parse_value)
                        .collect::<Result<Vec<_>, _>>()?;
                }
                "dark_theme" => {
                    raw.dark_theme_name = Some(parse_string("dark_theme", value)?);
                }
                "dark_mode" => {
                    raw.dark_mode = Some(DarkModeStrategy::parse_value(value)?);
                }
                "extend" => {
                    raw.theme_extensions = parse_opaque_mapping("extend", value)?;
                }
                "plugins" => {
                    raw.plugin_options = parse_opaque_mapping("plugins", value)?;
                }
                // Unknown keys are ignored for forward compatibility.
                _ => {}
            }
        }

        Ok(raw)
    }
}

fn parse_string(field: &str, value: &Value) -> Result<String, ConfigError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        _ => Err(ConfigError::Type {
            field: field.to_string(),
            expected: "a string".to_string(),
        }),
    }
}

fn parse_string_sequence(field: &str, value: &Value) -> Result<Vec<String>, ConfigError> {
    let Value::Sequence(items) = value else {
        return Err(ConfigError::Type {
            field: field.to_string(),
            expected: "a sequence of strings".to_string(),
        });
    };
    items
        .iter()
        .map(|item| parse_string(field, item))
        .collect()
}

fn parse_opaque_mapping(field: &str, value: &Value) -> Result<BTreeMap<String, Value>, ConfigError> {
    let Value::Mapping(mapping) = value else {
        return Err(ConfigError::Type {
            field: field.to_string(),
            expected: "a mapping".to_string(),
        });
    };
    let mut result = BTreeMap::new();
    for (key, value) in mapping {
        let Value::String(key) = key else {
            return Err(ConfigError::Type {
                field: field.to_string(),
                expected: "string keys".to_string(),
            });
        };
        result.insert(key.clone(), value.clone());
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_yaml_full_document() {
        let raw = RawConfig::from_yaml(
            r##"
            content:
              - "./src/**/*.{vue,html,js}"
            prefix: "iw-"
            themes:
              - name: light
                base: light
                colors:
                  primary: "#d6d3d1"
                  secondary: teal
              - black
            dark_theme: black
            dark_mode: ["data-attribute", "[data-theme=\"black\"]"]
            "##,
        )
        .unwrap();

        assert_eq!(raw.content_globs, vec!["./src/**/*.{vue,html,js}"]);
        assert_eq!(raw.class_prefix.as_deref(), Some("iw-"));
        assert_eq!(raw.themes.len(), 2);
        assert_eq!(raw.themes[0].name(), "light");
        assert_eq!(raw.themes[1], ThemeEntry::Reference("black".to_string()));
        assert_eq!(raw.dark_theme_name.as_deref(), Some("black"));
        assert_eq!(
            raw.dark_mode,
            Some(DarkModeStrategy::DataAttribute(
                "[data-theme=\"black\"]".to_string()
            ))
        );
    }

    #[test]
    fn test_from_yaml_empty_document() {
        let raw = RawConfig::from_yaml("").unwrap();
        assert_eq!(raw, RawConfig::default());
    }

    #[test]
    fn test_from_json() {
        let raw = RawConfig::from_json(
            r#"{
                "content": ["./src/**/*.html"],
                "prefix": "iw-",
                "themes": ["black"]
            }"#,
        )
        .unwrap();

        assert_eq!(raw.class_prefix.as_deref(), Some("iw-"));
        assert_eq!(raw.themes[0].name(), "black");
    }

    #[test]
    fn test_from_yaml_content_not_a_sequence() {
        let err = RawConfig::from_yaml("content: 42").unwrap_err();
        assert!(matches!(err, ConfigError::Type { ref field, .. } if field == "content"));
    }

    #[test]
    fn test_from_yaml_content_mixed_types() {
        let err = RawConfig::from_yaml("content: [\"./src\", 42]").unwrap_err();
        assert!(matches!(err, ConfigError::Type { ref field, .. } if field == "content"));
    }

    #[test]
    fn test_from_yaml_inline_theme_missing_name() {
        let err = RawConfig::from_yaml(
            r#"
            themes:
              - base: light
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Type { ref field, .. } if field == "themes.name"));
    }

    #[test]
    fn test_from_yaml_colors_must_be_strings() {
        let err = RawConfig::from_yaml(
            r#"
            themes:
              - name: light
                colors:
                  primary: 42
            "#,
        )
        .unwrap_err();
        assert!(
            matches!(err, ConfigError::Type { ref field, .. } if field == "themes.light.colors")
        );
    }

    #[test]
    fn test_from_yaml_dark_mode_media_query() {
        let raw = RawConfig::from_yaml("dark_mode: media-query").unwrap();
        assert_eq!(raw.dark_mode, Some(DarkModeStrategy::MediaQuery));
    }

    #[test]
    fn test_from_yaml_dark_mode_class_pair() {
        let raw = RawConfig::from_yaml("dark_mode: [class, \".dark\"]").unwrap();
        assert_eq!(
            raw.dark_mode,
            Some(DarkModeStrategy::Class(".dark".to_string()))
        );
    }

    #[test]
    fn test_from_yaml_dark_mode_rejects_unknown_kind() {
        let err = RawConfig::from_yaml("dark_mode: [cookie, \".dark\"]").unwrap_err();
        assert!(matches!(err, ConfigError::Type { ref field, .. } if field == "dark_mode"));
    }

    #[test]
    fn test_from_yaml_dark_mode_rejects_bare_string() {
        let err = RawConfig::from_yaml("dark_mode: class").unwrap_err();
        assert!(matches!(err, ConfigError::Type { ref field, .. } if field == "dark_mode"));
    }

    #[test]
    fn test_from_yaml_extend_and_plugins_carried_opaquely() {
        let raw = RawConfig::from_yaml(
            r#"
            extend:
              spacing:
                "128": "32rem"
            plugins:
              typography:
                class: prose
            "#,
        )
        .unwrap();

        assert!(raw.theme_extensions.contains_key("spacing"));
        assert!(raw.plugin_options.contains_key("typography"));
    }

    #[test]
    fn test_from_yaml_unknown_keys_ignored() {
        let raw = RawConfig::from_yaml("future_option: true").unwrap();
        assert_eq!(raw, RawConfig::default());
    }

    #[test]
    fn test_from_yaml_invalid_syntax() {
        let err = RawConfig::from_yaml("themes: [").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_builder_chaining() {
        let raw = RawConfig::new()
            .content_glob("./src/**/*.html")
            .prefix("iw-")
            .theme(ThemeEntry::inline("light").with_base("light").color("primary", "#d6d3d1"))
            .dark_mode(DarkModeStrategy::Class(".dark".to_string()));

        assert_eq!(raw.content_globs.len(), 1);
        assert_eq!(raw.themes[0].name(), "light");
        match &raw.themes[0] {
            ThemeEntry::Inline { base, colors, .. } => {
                assert_eq!(base.as_deref(), Some("light"));
                assert_eq!(colors.get("primary").map(String::as_str), Some("#d6d3d1"));
            }
            other => panic!("expected inline entry, got {:?}", other),
        }
    }

    #[test]
    fn test_dark_mode_strategy_serializes_to_document_form() {
        let media = serde_yaml::to_string(&DarkModeStrategy::MediaQuery).unwrap();
        assert_eq!(media.trim(), "media-query");

        let class = serde_json::to_string(&DarkModeStrategy::Class(".dark".to_string())).unwrap();
        assert_eq!(class, r#"["class",".dark"]"#);
    }
}
