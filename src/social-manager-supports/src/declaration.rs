//! Normalized theme support declarations.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A theme's support declaration, normalized at the host boundary.
///
/// Hosts deliver declarations in a handful of raw shapes: a bare boolean
/// for flag-only registration, a structured mapping of option names to
/// values, or that mapping wrapped in a one-element array by the host's
/// registration mechanism. [`Declaration::normalize`] collapses all of them
/// into this tagged union exactly once; everything downstream works on the
/// normalized form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Declaration {
    /// The host does not know the feature.
    Unset,
    /// Flag-only registration: the feature is on but carries no options.
    Enabled,
    /// The feature is explicitly declared off.
    Disabled,
    /// Structured registration with per-option values.
    Options(Map<String, Value>),
}

impl Declaration {
    /// Normalize a raw host value into a declaration.
    ///
    /// Array-wrapped values are unwrapped once: only the first element is
    /// authoritative, later elements are never consulted. Scalars other
    /// than booleans carry no options and count as flag-only registration.
    pub fn normalize(raw: Value) -> Self {
        match raw {
            Value::Null => Self::Unset,
            Value::Bool(true) => Self::Enabled,
            Value::Bool(false) => Self::Disabled,
            Value::Object(map) => Self::Options(map),
            Value::Array(items) => match items.into_iter().next() {
                Some(Value::Object(map)) => Self::Options(map),
                Some(Value::Bool(true)) | None => Self::Enabled,
                Some(Value::Bool(false)) => Self::Disabled,
                Some(_) => Self::Enabled,
            },
            _ => Self::Enabled,
        }
    }

    /// The structured options, if the declaration has any.
    pub fn options(&self) -> Option<&Map<String, Value>> {
        match self {
            Self::Options(map) => Some(map),
            _ => None,
        }
    }

    /// Whether the host registered the feature at all.
    pub fn is_set(&self) -> bool {
        !matches!(self, Self::Unset)
    }
}
