//! Shared option registries and defaults for the social-manager plugin.
//!
//! Collects the constants and enumerated value sets that several plugin
//! components agree on, so they are defined in exactly one place.

pub mod buttons;

pub use buttons::{ButtonsMode, ParseButtonsModeError};

/// Default prefix prepended to DOM attributes in rendered markup.
///
/// Themes may override it through their support declaration; a declared
/// prefix equal to this default is treated as "not customized".
pub const DEFAULT_ATTR_PREFIX: &str = "ninecodes";
