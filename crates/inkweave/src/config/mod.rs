//! Configuration declaration, validation and merging.
//!
//! The pipeline is linear:
//!
//! ```text
//! raw document -> RawConfig -> validate -> Validated -> merge -> EffectiveConfig
//! ```
//!
//! [`RawConfig`](raw::RawConfig) is the declaration as written (optional
//! fields still optional), [`validate`](validate::validate) is the pure
//! fail-fast rule check, and the merge step produces the fully defaulted
//! [`EffectiveConfig`](resolver::EffectiveConfig) the style generator
//! consumes. A failed validation aborts before any theme merging, so a
//! partial effective configuration is never observable.

pub mod raw;
pub mod resolver;
pub mod validate;

pub use raw::{DarkModeStrategy, RawConfig, ThemeEntry, CONFIG_EXTENSIONS};
pub use resolver::{EffectiveConfig, Resolver};
pub use validate::{is_valid_prefix, validate, ConfigWarning, Validated};
