//! Feature support resolution.

use crate::declaration::Declaration;
use crate::host::SupportHost;
use serde_json::{Map, Value};
use social_manager_options::{ButtonsMode, DEFAULT_ATTR_PREFIX};
use tracing::debug;

/// Identifier the plugin registers with the host.
pub const FEATURE_NAME: &str = "ninecodes-social-manager";

/// Alias keys accepted for the attribute prefix, in priority order.
const ATTR_PREFIX_KEYS: [&str; 2] = ["attr_prefix", "attr-prefix"];

/// Alias keys accepted for the buttons mode, in priority order.
const BUTTONS_MODE_KEYS: [&str; 2] = ["buttons_mode", "buttons-mode"];

/// Result of the untyped [`ThemeSupports::is`] dispatch.
///
/// Queries either answer yes/no or carry a string (the attribute prefix or
/// the buttons-mode identifier); an unsupported feature is `Bool(false)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SupportValue {
    Bool(bool),
    Text(String),
}

impl SupportValue {
    /// Whether the query answered anything other than "unsupported".
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Bool(value) => *value,
            Self::Text(text) => !text.is_empty(),
        }
    }

    /// The carried string, if any.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Bool(_) => None,
        }
    }
}

impl From<bool> for SupportValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for SupportValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Resolved view of the theme's support declaration.
///
/// Built once from the injected [`SupportHost`] and immutable afterwards,
/// so it can be shared freely (behind an `Arc`, or published through a
/// `OnceLock` at startup) without further synchronization.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeSupports {
    declaration: Declaration,
}

impl ThemeSupports {
    /// Query the host and cache the normalized declaration.
    ///
    /// A host that does not know [`FEATURE_NAME`] yields an unset
    /// declaration; every sub-query then degrades to its default. No
    /// error path exists.
    pub fn resolve(host: &dyn SupportHost) -> Self {
        if !host.supports_feature(FEATURE_NAME) {
            debug!(feature = FEATURE_NAME, "host does not declare support");
            return Self {
                declaration: Declaration::Unset,
            };
        }

        let declaration = match host.feature_declaration(FEATURE_NAME) {
            Some(raw) => Declaration::normalize(raw),
            None => Declaration::Unset,
        };
        debug!(feature = FEATURE_NAME, ?declaration, "resolved theme support");

        Self { declaration }
    }

    /// Whether the theme ships its own stylesheet for the plugin output.
    ///
    /// An explicit `stylesheet` option wins; otherwise a customized
    /// attribute prefix implies the theme also styles the output itself.
    pub fn stylesheet(&self) -> bool {
        if let Some(value) = self.declaration.options().and_then(|o| o.get("stylesheet")) {
            return truthy(value);
        }

        self.attr_prefix().is_some()
    }

    /// The theme's custom attribute prefix, if it declared one.
    ///
    /// A prefix equal to the plugin default counts as not customized.
    pub fn attr_prefix(&self) -> Option<&str> {
        let options = self.declaration.options()?;
        let prefix = first_declared(options, &ATTR_PREFIX_KEYS)?.as_str()?;

        if prefix.is_empty() || prefix == DEFAULT_ATTR_PREFIX {
            return None;
        }

        Some(prefix)
    }

    /// The declared share-button rendering mode, if valid.
    pub fn buttons_mode(&self) -> Option<ButtonsMode> {
        let options = self.declaration.options()?;
        let mode = first_declared(options, &BUTTONS_MODE_KEYS)?.as_str()?;

        ButtonsMode::parse(mode)
    }

    /// Untyped query by feature name, for callers dispatching on strings.
    ///
    /// Empty or unrecognized names answer `Bool(false)`.
    pub fn is(&self, feature: &str) -> SupportValue {
        match feature {
            "stylesheet" => self.stylesheet().into(),
            "attr-prefix" | "attr_prefix" => match self.attr_prefix() {
                Some(prefix) => prefix.into(),
                None => false.into(),
            },
            "buttons-mode" | "buttons_mode" => match self.buttons_mode() {
                Some(mode) => mode.as_str().into(),
                None => false.into(),
            },
            _ => false.into(),
        }
    }

    /// The feature identifier used to query the host.
    pub fn feature_name(&self) -> &'static str {
        FEATURE_NAME
    }

    /// The cached declaration this view was resolved from.
    pub fn declaration(&self) -> &Declaration {
        &self.declaration
    }
}

/// First value among `keys` that the options mapping declares.
///
/// Presence decides precedence: a declared key wins over later aliases even
/// when its value fails the shape check downstream.
fn first_declared<'a>(options: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|key| options.get(*key))
}

/// Boolean coercion for option values: `false`, `0`, `""` and `null` are
/// false, everything else is true.
fn truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Null => false,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
