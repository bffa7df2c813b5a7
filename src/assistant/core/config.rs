//! Configuration for the assistant.

use serde::{Deserialize, Serialize};

use crate::assistant::core::errors::{AssistantError, AssistantResult};

/// Top-level configuration for the conversational assistant.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AssistantConfig {
    /// Simulated thinking delay settings.
    pub compose: ComposeConfig,
    /// Channel sizing for controller plumbing.
    pub channels: ChannelConfig,
}

impl AssistantConfig {
    /// Validate configuration invariants.
    ///
    /// # Errors
    /// Returns an error if any values are out of range or inconsistent.
    pub fn validate(&self) -> AssistantResult<()> {
        if self.compose.max_delay_ms == 0 {
            return Err(AssistantError::InvalidConfig(
                "compose.max_delay_ms must be > 0".to_string(),
            ));
        }

        if self.compose.min_delay_ms > self.compose.max_delay_ms {
            return Err(AssistantError::InvalidConfig(
                "compose.min_delay_ms must not exceed compose.max_delay_ms".to_string(),
            ));
        }

        if self.channels.event_capacity == 0 {
            return Err(AssistantError::InvalidConfig(
                "channels.event_capacity must be > 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Simulated thinking delay settings.
///
/// The delay stands in for "thinking" latency between a submitted message
/// and the rendered answer. It is not a network timeout.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ComposeConfig {
    /// Minimum thinking delay in milliseconds.
    pub min_delay_ms: u64,
    /// Maximum thinking delay in milliseconds.
    pub max_delay_ms: u64,
}

impl Default for ComposeConfig {
    fn default() -> Self {
        Self {
            min_delay_ms: 1000,
            max_delay_ms: 2000,
        }
    }
}

/// Channel sizing for controller plumbing.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChannelConfig {
    /// Broadcast capacity for turn events.
    pub event_capacity: usize,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self { event_capacity: 64 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() -> AssistantResult<()> {
        AssistantConfig::default().validate()
    }

    #[test]
    fn test_zero_max_delay_rejected() {
        let mut config = AssistantConfig::default();
        config.compose.min_delay_ms = 0;
        config.compose.max_delay_ms = 0;
        assert!(matches!(
            config.validate(),
            Err(AssistantError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_inverted_delay_bounds_rejected() {
        let mut config = AssistantConfig::default();
        config.compose.min_delay_ms = 500;
        config.compose.max_delay_ms = 100;
        assert!(matches!(
            config.validate(),
            Err(AssistantError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_zero_event_capacity_rejected() {
        let mut config = AssistantConfig::default();
        config.channels.event_capacity = 0;
        assert!(matches!(
            config.validate(),
            Err(AssistantError::InvalidConfig(_))
        ));
    }
}
