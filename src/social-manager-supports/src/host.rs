//! Host registration boundary.
//!
//! The surrounding application owns feature registration; the resolver only
//! ever asks it two questions. Keeping that behind a trait lets the host be
//! injected explicitly instead of reached through global state.

use serde_json::Value;
use std::collections::HashMap;

/// Lookup interface onto the host's feature registration.
pub trait SupportHost {
    /// Whether the host registered the named feature at all.
    fn supports_feature(&self, feature: &str) -> bool;

    /// The raw declaration the host associates with the feature.
    ///
    /// The value keeps whatever shape the host's registration mechanism
    /// produced (bare boolean, mapping, or array-wrapped mapping);
    /// normalization happens in the resolver.
    fn feature_declaration(&self, feature: &str) -> Option<Value>;
}

/// In-memory feature registry implementing [`SupportHost`].
///
/// Mirrors the observable shape of the host registration API: flag-only
/// declarations are stored as boolean `true`, structured declarations are
/// stored wrapped in a one-element array.
#[derive(Debug, Clone, Default)]
pub struct SupportRegistry {
    features: HashMap<String, Value>,
}

impl SupportRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a feature with no options.
    pub fn declare(&mut self, feature: impl Into<String>) {
        self.features.insert(feature.into(), Value::Bool(true));
    }

    /// Register a feature with structured options.
    pub fn declare_with(&mut self, feature: impl Into<String>, options: Value) {
        self.features
            .insert(feature.into(), Value::Array(vec![options]));
    }

    /// Remove a registration.
    pub fn remove(&mut self, feature: &str) {
        self.features.remove(feature);
    }
}

impl SupportHost for SupportRegistry {
    fn supports_feature(&self, feature: &str) -> bool {
        self.features.contains_key(feature)
    }

    fn feature_declaration(&self, feature: &str) -> Option<Value> {
        self.features.get(feature).cloned()
    }
}
