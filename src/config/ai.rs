//! Response generator configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Models the service knows how to serve.
pub const SUPPORTED_MODELS: &[&str] = &["mock"];

/// Response generator configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// Generator backend
    #[serde(default = "default_model")]
    pub model: String,

    /// Upper bound on reply length, reserved for real model backends
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Sampling temperature, reserved for real model backends
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Lower bound of the simulated latency
    #[serde(default = "default_min_delay")]
    pub min_delay_ms: u64,

    /// Upper bound of the simulated latency
    #[serde(default = "default_max_delay")]
    pub max_delay_ms: u64,

    /// Fixed RNG seed for reproducible replies
    pub seed: Option<u64>,
}

impl AiConfig {
    /// Simulated latency bounds as durations
    pub fn delay_range(&self) -> (Duration, Duration) {
        (
            Duration::from_millis(self.min_delay_ms),
            Duration::from_millis(self.max_delay_ms),
        )
    }

    /// Validate generator configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !SUPPORTED_MODELS.contains(&self.model.as_str()) {
            return Err(ValidationError::UnsupportedModel(self.model.clone()));
        }
        if self.max_tokens == 0 {
            return Err(ValidationError::InvalidMaxTokens);
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ValidationError::InvalidTemperature(self.temperature));
        }
        if self.min_delay_ms > self.max_delay_ms {
            return Err(ValidationError::InvalidDelayRange {
                min: self.min_delay_ms,
                max: self.max_delay_ms,
            });
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            min_delay_ms: default_min_delay(),
            max_delay_ms: default_max_delay(),
            seed: None,
        }
    }
}

fn default_model() -> String {
    "mock".to_string()
}

fn default_max_tokens() -> u32 {
    1000
}

fn default_temperature() -> f32 {
    0.7
}

fn default_min_delay() -> u64 {
    500
}

fn default_max_delay() -> u64 {
    2000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ai_config_defaults() {
        let config = AiConfig::default();
        assert_eq!(config.model, "mock");
        assert_eq!(config.max_tokens, 1000);
        assert_eq!(config.min_delay_ms, 500);
        assert_eq!(config.max_delay_ms, 2000);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_delay_range() {
        let config = AiConfig {
            min_delay_ms: 10,
            max_delay_ms: 20,
            ..Default::default()
        };
        assert_eq!(
            config.delay_range(),
            (Duration::from_millis(10), Duration::from_millis(20))
        );
    }

    #[test]
    fn test_validation_unknown_model() {
        let config = AiConfig {
            model: "gpt-4".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::UnsupportedModel(m)) if m == "gpt-4"
        ));
    }

    #[test]
    fn test_validation_temperature_out_of_range() {
        let config = AiConfig {
            temperature: 2.5,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_max_tokens() {
        let config = AiConfig {
            max_tokens: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_reversed_delay_range() {
        let config = AiConfig {
            min_delay_ms: 100,
            max_delay_ms: 10,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidDelayRange { min: 100, max: 10 })
        ));
    }

    #[test]
    fn test_zero_delay_is_valid() {
        let config = AiConfig {
            min_delay_ms: 0,
            max_delay_ms: 0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
