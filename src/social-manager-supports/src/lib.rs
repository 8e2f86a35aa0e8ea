//! Theme feature-support resolution for the social-manager plugin.
//!
//! A hosting theme may register a declaration under the plugin's feature
//! identifier to opt into optional rendering behavior: shipping its own
//! stylesheet, customizing the DOM attribute prefix, or choosing how the
//! share buttons are rendered. This crate normalizes that declaration once
//! and answers typed queries about it for the rest of the plugin.

pub mod declaration;
pub mod host;
pub mod resolver;

pub use declaration::Declaration;
pub use host::{SupportHost, SupportRegistry};
pub use resolver::{SupportValue, ThemeSupports, FEATURE_NAME};
