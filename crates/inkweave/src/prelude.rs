//! Convenience re-exports for the common resolution pipeline.
//!
//! ```rust
//! use inkweave::prelude::*;
//!
//! let raw = RawConfig::new().theme(ThemeEntry::reference("dark"));
//! let effective = validate(&raw).unwrap().merge().unwrap();
//! assert_eq!(effective.themes.len(), 1);
//! ```

pub use crate::config::{
    validate, ConfigWarning, DarkModeStrategy, EffectiveConfig, RawConfig, Resolver, ThemeEntry,
    Validated,
};
pub use crate::error::ConfigError;
pub use crate::theme::{resolve_theme, ResolvedTheme};
