//! Built-in theme registry.
//!
//! Built-ins are the base palettes a configuration can reference by name or
//! spread from via `base:`. Each one maps every color role to a concrete CSS
//! color value, so a theme that only overrides one or two roles still resolves
//! to a complete palette.
//!
//! Lookups always return a fresh copy of the role map. Resolved themes must
//! never alias the registry's storage, otherwise one theme's overlay would
//! leak into another's.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;

/// A flat mapping from color role name to CSS color value.
pub type ColorRoles = BTreeMap<String, String>;

/// The color roles every built-in theme defines.
pub const COLOR_ROLES: &[&str] = &[
    "primary",
    "secondary",
    "accent",
    "neutral",
    "base-100",
    "info",
    "success",
    "warning",
    "error",
];

const LIGHT: &[(&str, &str)] = &[
    ("primary", "#570df8"),
    ("secondary", "#f000b8"),
    ("accent", "#37cdbe"),
    ("neutral", "#3d4451"),
    ("base-100", "#ffffff"),
    ("info", "#3abff8"),
    ("success", "#36d399"),
    ("warning", "#fbbd23"),
    ("error", "#f87272"),
];

const DARK: &[(&str, &str)] = &[
    ("primary", "#661ae6"),
    ("secondary", "#d926aa"),
    ("accent", "#1fb2a5"),
    ("neutral", "#191d24"),
    ("base-100", "#2a303c"),
    ("info", "#3abff8"),
    ("success", "#36d399"),
    ("warning", "#fbbd23"),
    ("error", "#f87272"),
];

const BLACK: &[(&str, &str)] = &[
    ("primary", "#343232"),
    ("secondary", "#343232"),
    ("accent", "#343232"),
    ("neutral", "#272626"),
    ("base-100", "#000000"),
    ("info", "#0000ff"),
    ("success", "#008000"),
    ("warning", "#ffff00"),
    ("error", "#ff0000"),
];

const CUPCAKE: &[(&str, &str)] = &[
    ("primary", "#65c3c8"),
    ("secondary", "#ef9fbc"),
    ("accent", "#eeaf3a"),
    ("neutral", "#291334"),
    ("base-100", "#faf7f5"),
    ("info", "#3abff8"),
    ("success", "#36d399"),
    ("warning", "#fbbd23"),
    ("error", "#f87272"),
];

static REGISTRY: Lazy<BTreeMap<&'static str, &'static [(&'static str, &'static str)]>> =
    Lazy::new(|| {
        let mut registry: BTreeMap<&'static str, &'static [(&'static str, &'static str)]> =
            BTreeMap::new();
        registry.insert("light", LIGHT);
        registry.insert("dark", DARK);
        registry.insert("black", BLACK);
        registry.insert("cupcake", CUPCAKE);
        registry
    });

/// Returns a copy of the named built-in theme's color roles, or `None` if
/// the name is not a recognized built-in.
///
/// # Example
///
/// ```rust
/// let light = inkweave::builtin("light").unwrap();
/// assert_eq!(light.get("base-100").map(String::as_str), Some("#ffffff"));
/// assert!(inkweave::builtin("solarized").is_none());
/// ```
pub fn builtin(name: &str) -> Option<ColorRoles> {
    REGISTRY.get(name).map(|roles| {
        roles
            .iter()
            .map(|(role, value)| (role.to_string(), value.to_string()))
            .collect()
    })
}

/// Returns true if `name` is a recognized built-in theme.
pub fn is_builtin(name: &str) -> bool {
    REGISTRY.contains_key(name)
}

/// Lists the names of all built-in themes, in sorted order.
///
/// Used for error messages when a base reference cannot be resolved.
pub fn builtin_names() -> Vec<String> {
    REGISTRY.keys().map(|name| name.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorToken;

    #[test]
    fn test_builtin_light_exists() {
        let light = builtin("light").unwrap();
        assert_eq!(light.get("primary").map(String::as_str), Some("#570df8"));
    }

    #[test]
    fn test_builtin_unknown_is_none() {
        assert!(builtin("solarized").is_none());
        assert!(!is_builtin("solarized"));
    }

    #[test]
    fn test_builtin_names_sorted() {
        let names = builtin_names();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        assert!(names.contains(&"black".to_string()));
    }

    #[test]
    fn test_every_builtin_covers_all_roles() {
        for name in builtin_names() {
            let roles = builtin(&name).unwrap();
            for role in COLOR_ROLES {
                assert!(
                    roles.contains_key(*role),
                    "built-in '{}' is missing role '{}'",
                    name,
                    role
                );
            }
        }
    }

    #[test]
    fn test_every_builtin_value_is_a_valid_color() {
        for name in builtin_names() {
            for (role, value) in builtin(&name).unwrap() {
                assert!(
                    ColorToken::parse(&value).is_ok(),
                    "built-in '{}' role '{}' has unparsable value '{}'",
                    name,
                    role,
                    value
                );
            }
        }
    }

    #[test]
    fn test_builtin_returns_independent_copies() {
        let mut first = builtin("light").unwrap();
        first.insert("primary".to_string(), "#000000".to_string());

        let second = builtin("light").unwrap();
        assert_eq!(second.get("primary").map(String::as_str), Some("#570df8"));
    }
}
