use std::{fs, path::Path, time::Duration};

use anyhow::Context;
use serde::Deserialize;

use crate::{DirectionOverrides, DirectionPolicy, HoldTimes, SorterError};

/// Bench settings, read from a TOML file. Every field is optional.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SorterConfig {
    pub left_channel: u8,
    pub right_channel: u8,
    pub settle_hold_ms: u64,
    pub recenter_hold_ms: u64,
    /// Show the flap plot after every move
    pub plot: bool,
    pub directions: DirectionOverrides,
}

impl Default for SorterConfig {
    fn default() -> Self {
        let holds = HoldTimes::default();
        Self {
            left_channel: 17,
            right_channel: 18,
            settle_hold_ms: holds.settle.as_millis() as u64,
            recenter_hold_ms: holds.recenter.as_millis() as u64,
            plot: true,
            directions: DirectionOverrides::default(),
        }
    }
}

impl SorterConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, SorterError> {
        let config: SorterConfig =
            toml::from_str(raw).map_err(|e| SorterError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_toml_str(&raw)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SorterError> {
        if self.left_channel == self.right_channel {
            return Err(SorterError::Config(format!(
                "left and right servo share channel {}",
                self.left_channel
            )));
        }
        Ok(())
    }

    pub fn hold_times(&self) -> HoldTimes {
        HoldTimes {
            settle: Duration::from_millis(self.settle_hold_ms),
            recenter: Duration::from_millis(self.recenter_hold_ms),
        }
    }

    pub fn policy(&self) -> DirectionPolicy {
        DirectionPolicy::with_overrides(&self.directions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Direction, FlapPair};

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = SorterConfig::from_toml_str("").unwrap();
        assert_eq!(config, SorterConfig::default());
        assert_eq!(config.hold_times(), HoldTimes::default());
        assert_eq!(config.policy(), DirectionPolicy::default());
    }

    #[test]
    fn test_partial_file() {
        let raw = r#"
            settle_hold_ms = 250
            plot = false

            [directions]
            right = [140.0, 110.0]
        "#;
        let config = SorterConfig::from_toml_str(raw).unwrap();
        assert_eq!(config.left_channel, 17);
        assert_eq!(config.hold_times().settle, Duration::from_millis(250));
        assert_eq!(config.hold_times().recenter, Duration::from_millis(1000));
        assert!(!config.plot);
        assert_eq!(
            config.policy().angles_for(Direction::Right),
            FlapPair::new(140.0, 110.0)
        );
        assert_eq!(
            config.policy().angles_for(Direction::Left),
            FlapPair::new(65.0, 50.0)
        );
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let result = SorterConfig::from_toml_str("settle_hold = 3");
        assert!(matches!(result, Err(SorterError::Config(_))));
    }

    #[test]
    fn test_shared_channel_is_rejected() {
        let result = SorterConfig::from_toml_str("left_channel = 18");
        assert!(matches!(result, Err(SorterError::Config(_))));
    }
}
