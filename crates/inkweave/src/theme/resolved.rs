//! Theme resolution: base spreading and color overlay.

use serde::Serialize;

use super::builtin::{builtin, builtin_names, ColorRoles};
use crate::config::raw::ThemeEntry;
use crate::error::ConfigError;

/// A fully resolved theme: a flat color-role map with no remaining base
/// reference.
///
/// `class_prefix` and `is_dark_variant` are filled in by the merge step;
/// [`resolve_theme`] leaves them at their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedTheme {
    /// The theme's name.
    pub name: String,
    /// Flat mapping from color role to color value.
    pub colors: ColorRoles,
    /// The process-wide class prefix, shared by all themes.
    pub class_prefix: String,
    /// True for the theme named by `dark_theme`.
    pub is_dark_variant: bool,
}

impl ResolvedTheme {
    /// Looks up a color role.
    pub fn color(&self, role: &str) -> Option<&str> {
        self.colors.get(role).map(String::as_str)
    }
}

/// Resolves one theme entry to a flat color map.
///
/// A reference entry is a deep copy of the named built-in. An inline entry
/// starts from a deep copy of its `base` built-in (if declared) and overlays
/// its own colors key-by-key, with the entry's values winning on conflict.
/// Explicit overrides win over inherited base values, the same cascade rule
/// a stylesheet follows.
///
/// # Errors
///
/// Returns [`ConfigError::UnknownBaseTheme`] when a reference or `base`
/// names something that is not a recognized built-in.
///
/// # Example
///
/// ```rust
/// use inkweave::{resolve_theme, ThemeEntry};
///
/// let entry = ThemeEntry::inline("light")
///     .with_base("light")
///     .color("primary", "#d6d3d1");
///
/// let resolved = resolve_theme(&entry).unwrap();
/// assert_eq!(resolved.color("primary"), Some("#d6d3d1")); // override wins
/// assert_eq!(resolved.color("base-100"), Some("#ffffff")); // inherited
/// ```
pub fn resolve_theme(entry: &ThemeEntry) -> Result<ResolvedTheme, ConfigError> {
    let (name, colors) = match entry {
        ThemeEntry::Reference(name) => {
            let colors = lookup_builtin(name)?;
            (name.clone(), colors)
        }
        ThemeEntry::Inline { name, base, colors } => {
            let mut resolved = match base {
                Some(base_name) => lookup_builtin(base_name)?,
                None => ColorRoles::new(),
            };
            for (role, value) in colors {
                resolved.insert(role.clone(), value.clone());
            }
            (name.clone(), resolved)
        }
    };

    Ok(ResolvedTheme {
        name,
        colors,
        class_prefix: String::new(),
        is_dark_variant: false,
    })
}

fn lookup_builtin(name: &str) -> Result<ColorRoles, ConfigError> {
    builtin(name).ok_or_else(|| ConfigError::UnknownBaseTheme {
        name: name.to_string(),
        known: builtin_names(),
    })
}
