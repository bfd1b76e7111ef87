//! Configuration errors.

use std::path::PathBuf;

/// Errors raised while loading or validating a [`RobotConfig`](crate::RobotConfig).
///
/// Runtime control never fails: bumps and finished maneuvers are ordinary
/// control signals, so this is the only error type in the crate.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for [`RobotConfig`](crate::RobotConfig).
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value is outside the range the maneuvers can work with.
    #[error("invalid config value `{field}` = {value}: {reason}")]
    Invalid {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },
}
