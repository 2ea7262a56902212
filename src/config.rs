//! Summary budget configuration

use crate::error::{MinutesError, Result};
use serde::{Deserialize, Serialize};

/// Maximum combined characters across the four sections
pub const MAX_CHARACTERS: usize = 1000;

/// Minimum characters a non-empty section keeps under proportional truncation
pub const MIN_SECTION_CHARS: usize = 80;

/// Budget settings
///
/// Deserializes from a partial JSON settings blob; missing keys take defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    pub max_characters: usize,
    pub min_section_chars: usize,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            max_characters: MAX_CHARACTERS,
            min_section_chars: MIN_SECTION_CHARS,
        }
    }
}

impl SummaryConfig {
    /// Parses and validates a JSON settings string
    pub fn from_json(settings: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(settings)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_characters == 0 {
            return Err(MinutesError::Config(
                "max_characters must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Per-section floor for proportional truncation: `min(floor, limit / 4)`
    pub fn section_floor(&self) -> usize {
        self.min_section_chars.min(self.max_characters / 4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SummaryConfig::default();
        assert_eq!(config.max_characters, 1000);
        assert_eq!(config.section_floor(), 80);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = SummaryConfig::from_json(r#"{"max_characters": 200}"#).unwrap();
        assert_eq!(config.max_characters, 200);
        assert_eq!(config.min_section_chars, 80);
        assert_eq!(config.section_floor(), 50);
    }

    #[test]
    fn test_zero_budget_rejected() {
        let err = SummaryConfig::from_json(r#"{"max_characters": 0}"#).unwrap_err();
        assert!(matches!(err, MinutesError::Config(_)));
    }

    #[test]
    fn test_malformed_json() {
        let err = SummaryConfig::from_json("max_characters=5").unwrap_err();
        assert!(matches!(err, MinutesError::Serialization(_)));
    }
}
