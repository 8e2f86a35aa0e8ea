//! Share-button rendering modes.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Rendering mode for the share buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonsMode {
    /// Buttons are rendered as ready-made HTML markup.
    Html,
    /// Button data is emitted as JSON for client-side rendering.
    Json,
}

impl ButtonsMode {
    /// Every mode a theme is allowed to declare.
    pub const ALL: [ButtonsMode; 2] = [ButtonsMode::Html, ButtonsMode::Json];

    /// The identifier used in declarations and rendered output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Json => "json",
        }
    }

    /// Human-readable label, e.g. for settings screens.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Html => "HTML",
            Self::Json => "JSON",
        }
    }

    /// Parse an identifier, returning `None` when it is not a registered mode.
    pub fn parse(value: &str) -> Option<Self> {
        value.parse().ok()
    }
}

impl std::fmt::Display for ButtonsMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ButtonsMode {
    type Err = ParseButtonsModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "html" => Ok(Self::Html),
            "json" => Ok(Self::Json),
            other => Err(ParseButtonsModeError(other.to_string())),
        }
    }
}

/// Error returned when a string is not a registered buttons mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized buttons mode: '{0}'")]
pub struct ParseButtonsModeError(pub String);

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_registered_modes() {
        assert_eq!(ButtonsMode::parse("html"), Some(ButtonsMode::Html));
        assert_eq!(ButtonsMode::parse("json"), Some(ButtonsMode::Json));
    }

    #[test]
    fn test_parse_rejects_unknown_mode() {
        assert_eq!(ButtonsMode::parse("xml"), None);
        assert_eq!(ButtonsMode::parse(""), None);

        let err = "xml".parse::<ButtonsMode>().unwrap_err();
        assert_eq!(err, ParseButtonsModeError("xml".to_string()));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        // Declarations use lowercase identifiers only.
        assert_eq!(ButtonsMode::parse("HTML"), None);
    }

    #[test]
    fn test_serde_lowercase_identifiers() {
        let json = serde_json::to_string(&ButtonsMode::Html).unwrap();
        assert_eq!(json, "\"html\"");

        let mode: ButtonsMode = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(mode, ButtonsMode::Json);
    }

    #[test]
    fn test_all_covers_every_mode() {
        for mode in ButtonsMode::ALL {
            assert_eq!(ButtonsMode::parse(mode.as_str()), Some(mode));
        }
    }
}
