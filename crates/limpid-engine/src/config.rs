//! Configuration for the dispatch engine

use serde::{Deserialize, Serialize};

/// Configuration for chunking and dispatch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Maximum chunk size (bytes of UTF-8 text)
    pub max_chunk_size: usize,

    /// Attempts one worker makes on one claimed chunk before requeueing it
    pub max_attempts: u32,

    /// Backoff step after a rate-limited attempt (milliseconds, scaled by
    /// the attempt count)
    pub rate_limit_backoff_ms: u64,

    /// Backoff step after any other failed attempt (milliseconds, scaled
    /// by the attempt count)
    pub provider_backoff_ms: u64,

    /// Times a chunk may be requeued before the run is declared incomplete
    pub max_requeues: u32,
}

impl EngineConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_chunk_size == 0 {
            return Err("max_chunk_size must be greater than 0".to_string());
        }
        if self.max_attempts == 0 {
            return Err("max_attempts must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Aggressive preset: smaller chunks, shorter backoff, fewer bounces
    pub fn aggressive() -> Self {
        Self {
            max_chunk_size: 1_500,
            max_attempts: 2,
            rate_limit_backoff_ms: 1_000,
            provider_backoff_ms: 500,
            max_requeues: 4,
        }
    }

    /// Lenient preset: larger chunks, longer backoff, more bounces
    pub fn lenient() -> Self {
        Self {
            max_chunk_size: 6_000,
            max_attempts: 5,
            rate_limit_backoff_ms: 4_000,
            provider_backoff_ms: 2_000,
            max_requeues: 16,
        }
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to a TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for EngineConfig {
    /// Default configuration with balanced settings
    fn default() -> Self {
        Self {
            max_chunk_size: 3_000,
            max_attempts: 3,
            rate_limit_backoff_ms: 2_000,
            provider_backoff_ms: 1_000,
            max_requeues: 8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_chunk_size, 3_000);
        assert_eq!(config.max_attempts, 3);
    }

    #[test]
    fn test_aggressive_config_is_valid() {
        assert!(EngineConfig::aggressive().validate().is_ok());
    }

    #[test]
    fn test_lenient_config_is_valid() {
        assert!(EngineConfig::lenient().validate().is_ok());
    }

    #[test]
    fn test_invalid_max_chunk_size() {
        let mut config = EngineConfig::default();
        config.max_chunk_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_max_attempts() {
        let mut config = EngineConfig::default();
        config.max_attempts = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = EngineConfig::default();
        let toml_str = config.to_toml().unwrap();
        let parsed = EngineConfig::from_toml(&toml_str).unwrap();

        assert_eq!(config.max_chunk_size, parsed.max_chunk_size);
        assert_eq!(config.max_attempts, parsed.max_attempts);
        assert_eq!(config.rate_limit_backoff_ms, parsed.rate_limit_backoff_ms);
        assert_eq!(config.max_requeues, parsed.max_requeues);
    }
}
