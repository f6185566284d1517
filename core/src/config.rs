use serde::Deserialize;

use crate::constants::DEFAULT_CYCLE_HZ;
use crate::error::ConfigError;
use crate::quirks::QuirkSet;

/// # Config
/// Everything about the VM that can be chosen by whoever drives it.
///
/// Any field may be omitted from a TOML document, e.g.
/// ```toml
/// cycle_hz = 1000
///
/// [quirks]
/// vf_reset = false
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Instructions executed per second
    pub cycle_hz: f64,
    pub quirks: QuirkSet,
}

impl Config {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.cycle_hz.is_finite() && self.cycle_hz > 0.0 {
            Ok(())
        } else {
            Err(ConfigError::CycleRate(self.cycle_hz))
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            cycle_hz: DEFAULT_CYCLE_HZ,
            quirks: QuirkSet::default(),
        }
    }
}
