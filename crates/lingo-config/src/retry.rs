//! Retry policy for transient store failures.
//!
//! Only the calling layer retries; the content engine itself never does.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

const fn default_max_attempts() -> u32 {
    4
}

const fn default_base_delay_ms() -> u64 {
    100
}

const fn default_max_delay_ms() -> u64 {
    2_000
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RetryConfig {
    /// Maximum number of attempts, including the first one. `1` disables retry.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Delay before the first retry; doubled on each subsequent one.
    #[serde(default = "default_base_delay_ms")]
    pub base_delay_ms: u64,

    /// Backoff cap.
    #[serde(default = "default_max_delay_ms")]
    pub max_delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            base_delay_ms: default_base_delay_ms(),
            max_delay_ms: default_max_delay_ms(),
        }
    }
}

impl RetryConfig {
    pub const fn base_delay(&self) -> Duration {
        Duration::from_millis(self.base_delay_ms)
    }

    pub const fn max_delay(&self) -> Duration {
        Duration::from_millis(self.max_delay_ms)
    }

    /// Reject policies that can never run an attempt or whose cap is below the base delay.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_attempts == 0 {
            return Err(ConfigError::InvalidValue {
                field: "retry.max_attempts".into(),
                reason: "must be at least 1".into(),
            });
        }
        if self.max_delay_ms < self.base_delay_ms {
            return Err(ConfigError::InvalidValue {
                field: "retry.max_delay_ms".into(),
                reason: format!("must be >= retry.base_delay_ms ({})", self.base_delay_ms),
            });
        }
        Ok(())
    }
}
