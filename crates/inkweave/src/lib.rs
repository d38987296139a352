//! # Inkweave - Utility-Class Theming Configuration Resolver
//!
//! `inkweave` resolves a declarative theming configuration (content globs,
//! named themes, a class prefix, a dark-mode strategy) into a single
//! validated, fully-merged effective configuration for a downstream
//! utility-class style generator.
//!
//! The generator itself, the file scanner that interprets the content globs,
//! and the plugin loader are external collaborators. This crate owns only
//! the logical model: how configuration is declared, validated, and merged.
//!
//! ## Core Concepts
//!
//! - [`RawConfig`]: the declaration as written, built programmatically or
//!   loaded from YAML/JSON
//! - [`validate`]: pure fail-fast rule check producing a [`Validated`] view
//! - [`EffectiveConfig`]: every optional field defaulted, every theme
//!   flattened to a [`ResolvedTheme`]
//! - [`Resolver`]: owning wrapper with the explicit
//!   `Unvalidated -> Validated -> Merged` lifecycle
//!
//! ## Quick Start
//!
//! ```rust
//! use inkweave::{validate, RawConfig};
//!
//! let raw = RawConfig::from_yaml(r##"
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
//! "##).unwrap();
//!
//! let effective = validate(&raw).unwrap().merge().unwrap();
//!
//! assert_eq!(effective.class_prefix, "iw-");
//! assert_eq!(effective.themes[0].color("primary"), Some("#d6d3d1"));
//! assert!(effective.theme("black").unwrap().is_dark_variant);
//! ```
//!
//! ## Themes and Base Spreading
//!
//! A theme entry either references a built-in theme by name or declares its
//! own colors, optionally spread from a built-in base. Resolution is a
//! cascade: a deep copy of the base, then the entry's own colors overlaid
//! key-by-key with the entry winning on conflict. Declaration order is
//! preserved all the way into the effective configuration; the resolver
//! never reorders or deduplicates themes.
//!
//! ## Determinism
//!
//! Resolution is a pure, synchronous function. Identical input documents
//! always produce identical effective configurations, and repeated merges
//! of the same configuration are independent and identical.

// Internal modules
pub mod color;
pub mod config;
mod error;
pub mod prelude;
pub mod theme;

// Error type
pub use error::ConfigError;

// Configuration exports
pub use config::{
    is_valid_prefix, validate, ConfigWarning, DarkModeStrategy, EffectiveConfig, RawConfig,
    Resolver, ThemeEntry, Validated, CONFIG_EXTENSIONS,
};

// Theme exports
pub use theme::{builtin, builtin_names, is_builtin, resolve_theme, ColorRoles, ResolvedTheme};

// Color token exports
pub use color::ColorToken;
