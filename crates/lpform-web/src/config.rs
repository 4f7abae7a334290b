use std::time::Duration;

use serde::Deserialize;

/// Timing and default values for the page tooling.
///
/// Every field falls back to its default when missing from the supplied
/// configuration object.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Quiet period after the last keystroke before the form is saved
    pub debounce_ms: u32,
    /// How long a notification banner stays up
    pub notification_ms: u32,
    /// Safety net after which a busy download control reverts
    pub busy_timeout_ms: u32,
    /// Value the Big-M penalty field is reset to
    pub penalty_default: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 500,
            notification_ms: 3000,
            busy_timeout_ms: 10_000,
            penalty_default: "1000".to_string(),
        }
    }
}

impl UiConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms.into())
    }

    pub fn notification_lifetime(&self) -> Duration {
        Duration::from_millis(self.notification_ms.into())
    }

    pub fn busy_timeout(&self) -> Duration {
        Duration::from_millis(self.busy_timeout_ms.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: UiConfig = serde_json::from_str(r#"{ "debounce_ms": 250 }"#).unwrap();
        assert_eq!(config.debounce(), Duration::from_millis(250));
        assert_eq!(config.notification_lifetime(), Duration::from_secs(3));
        assert_eq!(config.busy_timeout(), Duration::from_secs(10));
        assert_eq!(config.penalty_default, "1000");
    }
}
