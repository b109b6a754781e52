// Animation configuration with defaults matching the catalog view
use crate::constants::{
    DEFAULT_GRAVITY, DEFAULT_MAX_FRAMES, DEFAULT_MAX_SPEED_ATTEMPTS, DEFAULT_TIME_SCALE_MS,
    MIN_HORIZONTAL_SPAN,
};
use crate::error::{CartTossError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunables for solving and driving a throw
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub gravity: f64, // px / t²
    pub time_scale_ms: f64, // ms per unit of t
    pub max_speed_attempts: u32,
    pub max_frames: usize,
    pub min_horizontal_span: f64, // px
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            time_scale_ms: DEFAULT_TIME_SCALE_MS,
            max_speed_attempts: DEFAULT_MAX_SPEED_ATTEMPTS,
            max_frames: DEFAULT_MAX_FRAMES,
            min_horizontal_span: MIN_HORIZONTAL_SPAN,
        }
    }
}

impl AnimationConfig {
    /// Parse a JSON document; absent fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: AnimationConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.gravity.is_finite() || self.gravity <= 0.0 {
            return Err(CartTossError::InvalidConfig(format!(
                "gravity must be positive and finite, got {}",
                self.gravity
            )));
        }
        if !self.time_scale_ms.is_finite() || self.time_scale_ms <= 0.0 {
            return Err(CartTossError::InvalidConfig(format!(
                "time_scale_ms must be positive and finite, got {}",
                self.time_scale_ms
            )));
        }
        if self.max_speed_attempts == 0 {
            return Err("max_speed_attempts must be at least 1".to_string().into());
        }
        if self.max_frames == 0 {
            return Err("max_frames must be at least 1".to_string().into());
        }
        if !self.min_horizontal_span.is_finite() || self.min_horizontal_span <= 0.0 {
            return Err(CartTossError::InvalidConfig(format!(
                "min_horizontal_span must be positive and finite, got {}",
                self.min_horizontal_span
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let config = AnimationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.gravity, 10.0);
        assert_eq!(config.time_scale_ms, 60.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = AnimationConfig::from_json_str(r#"{ "gravity": 12.5 }"#).unwrap();
        assert_eq!(config.gravity, 12.5);
        assert_eq!(config.max_frames, DEFAULT_MAX_FRAMES);
    }

    #[test]
    fn test_rejects_non_positive_gravity() {
        let result = AnimationConfig::from_json_str(r#"{ "gravity": 0.0 }"#);
        assert!(matches!(result, Err(CartTossError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_zero_attempts() {
        let config = AnimationConfig {
            max_speed_attempts: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_span_threshold() {
        let result = AnimationConfig::from_json_str(r#"{ "min_horizontal_span": 0.0 }"#);
        assert!(matches!(result, Err(CartTossError::InvalidConfig(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = AnimationConfig::from_path("/nonexistent/cart-toss/settings.json");
        assert!(matches!(result, Err(CartTossError::Io(_))));
    }

    #[test]
    fn test_malformed_json() {
        let result = AnimationConfig::from_json_str("{ gravity: ");
        assert!(matches!(result, Err(CartTossError::Json(_))));
    }
}
