//! Built-in themes and theme resolution.
//!
//! A theme entry in the configuration is either a bare reference to a
//! built-in theme or an inline definition that may spread from one. This
//! module flattens both forms into [`ResolvedTheme`] values: plain color
//! maps with every base reference already applied.
//!
//! Resolution follows the cascade rule a stylesheet reader expects: start
//! from a deep copy of the base palette, then overlay the entry's own
//! declarations key-by-key, last write winning per key. Overlay order is
//! declaration order and is never reordered.
//!
//! ```rust
//! use inkweave::{resolve_theme, ThemeEntry};
//!
//! let resolved = resolve_theme(
//!     &ThemeEntry::inline("brand")
//!         .with_base("dark")
//!         .color("primary", "teal"),
//! ).unwrap();
//!
//! assert_eq!(resolved.color("primary"), Some("teal"));
//! ```

mod builtin;
mod resolved;

pub use builtin::{builtin, builtin_names, is_builtin, ColorRoles, COLOR_ROLES};
pub use resolved::{resolve_theme, ResolvedTheme};
