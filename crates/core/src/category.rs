//! The closed script category enumeration.
//!
//! The four lowercase string literals are part of the external
//! contract: they appear verbatim in API payloads and in the CHECK
//! constraint on the `scripts.category` column. Any other value is
//! rejected before it reaches storage.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The category of an automation script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptCategory {
    Software,
    Security,
    Configuration,
    Command,
}

impl ScriptCategory {
    /// All valid categories, in contract order.
    pub const ALL: [ScriptCategory; 4] = [
        Self::Software,
        Self::Security,
        Self::Configuration,
        Self::Command,
    ];

    /// String representation for display, logging, and database storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Software => "software",
            Self::Security => "security",
            Self::Configuration => "configuration",
            Self::Command => "command",
        }
    }
}

impl std::str::FromStr for ScriptCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "software" => Ok(Self::Software),
            "security" => Ok(Self::Security),
            "configuration" => Ok(Self::Configuration),
            "command" => Ok(Self::Command),
            other => Err(CoreError::Validation(format!(
                "invalid script category: {other}"
            ))),
        }
    }
}

// Used by the persistence layer to decode the TEXT column.
impl TryFrom<String> for ScriptCategory {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl std::fmt::Display for ScriptCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_str_returns_contract_literals() {
        assert_eq!(ScriptCategory::Software.as_str(), "software");
        assert_eq!(ScriptCategory::Security.as_str(), "security");
        assert_eq!(ScriptCategory::Configuration.as_str(), "configuration");
        assert_eq!(ScriptCategory::Command.as_str(), "command");
    }

    #[test]
    fn parse_roundtrips_every_variant() {
        for category in ScriptCategory::ALL {
            let parsed: ScriptCategory = category.as_str().parse().unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn parse_rejects_unknown_value() {
        let err = "unknown".parse::<ScriptCategory>().unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&ScriptCategory::Configuration).unwrap();
        assert_eq!(json, "\"configuration\"");
        let parsed: ScriptCategory = serde_json::from_str("\"command\"").unwrap();
        assert_eq!(parsed, ScriptCategory::Command);
    }

    #[test]
    fn serde_rejects_unknown_value() {
        assert!(serde_json::from_str::<ScriptCategory>("\"sicherheit\"").is_err());
    }
}
