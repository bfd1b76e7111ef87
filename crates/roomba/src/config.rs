//! Tuning constants shared by both controllers.

use std::env;
use std::path::Path;

use serde::Deserialize;

use crate::ConfigError;

/// Speeds, durations and spiral shape used by every maneuver.
///
/// Values are read-only once a controller is built. Missing TOML keys fall
/// back to [`RobotConfig::default`].
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RobotConfig {
    /// Fixed tick period in seconds.
    pub sample_time: f64,
    /// Linear speed while moving forward or spiralling (m/s).
    pub forward_speed: f64,
    /// Linear speed while retreating (m/s); negative.
    pub backward_speed: f64,
    /// Turn rate while rotating in place (rad/s).
    pub angular_speed: f64,
    pub move_forward_time: f64,
    pub move_in_spiral_time: f64,
    pub go_back_time: f64,
    /// Spiral radius at the start of the maneuver (m).
    pub initial_radius_spiral: f64,
    /// Radius growth per second of spiralling (m/s).
    pub spiral_factor: f64,
}

impl RobotConfig {
    pub const DEFAULT_SAMPLE_TIME: f64 = 0.01;
    pub const DEFAULT_FORWARD_SPEED: f64 = 0.5;
    pub const DEFAULT_BACKWARD_SPEED: f64 = -0.1;
    pub const DEFAULT_ANGULAR_SPEED: f64 = 2.0;
    pub const DEFAULT_MOVE_FORWARD_TIME: f64 = 3.0;
    pub const DEFAULT_MOVE_IN_SPIRAL_TIME: f64 = 20.0;
    pub const DEFAULT_GO_BACK_TIME: f64 = 0.5;
    pub const DEFAULT_INITIAL_RADIUS_SPIRAL: f64 = 0.2;
    pub const DEFAULT_SPIRAL_FACTOR: f64 = 0.05;

    pub const fn new() -> Self {
        Self {
            sample_time: Self::DEFAULT_SAMPLE_TIME,
            forward_speed: Self::DEFAULT_FORWARD_SPEED,
            backward_speed: Self::DEFAULT_BACKWARD_SPEED,
            angular_speed: Self::DEFAULT_ANGULAR_SPEED,
            move_forward_time: Self::DEFAULT_MOVE_FORWARD_TIME,
            move_in_spiral_time: Self::DEFAULT_MOVE_IN_SPIRAL_TIME,
            go_back_time: Self::DEFAULT_GO_BACK_TIME,
            initial_radius_spiral: Self::DEFAULT_INITIAL_RADIUS_SPIRAL,
            spiral_factor: Self::DEFAULT_SPIRAL_FACTOR,
        }
    }

    /// Loads a TOML file and validates the result.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parses TOML text and validates the result.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: RobotConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults with `ROOMBA_*` environment overrides applied.
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Applies environment overrides on top of `self`.
    ///
    /// Environment variables:
    /// - `ROOMBA_SAMPLE_TIME`
    /// - `ROOMBA_FORWARD_SPEED`
    /// - `ROOMBA_BACKWARD_SPEED`
    /// - `ROOMBA_ANGULAR_SPEED`
    /// - `ROOMBA_MOVE_FORWARD_TIME`
    /// - `ROOMBA_MOVE_IN_SPIRAL_TIME`
    /// - `ROOMBA_GO_BACK_TIME`
    /// - `ROOMBA_INITIAL_RADIUS_SPIRAL`
    /// - `ROOMBA_SPIRAL_FACTOR`
    ///
    /// Unset or unparseable variables leave the current value untouched.
    pub fn with_env_overrides(mut self) -> Self {
        let fields: [(&str, &mut f64); 9] = [
            ("ROOMBA_SAMPLE_TIME", &mut self.sample_time),
            ("ROOMBA_FORWARD_SPEED", &mut self.forward_speed),
            ("ROOMBA_BACKWARD_SPEED", &mut self.backward_speed),
            ("ROOMBA_ANGULAR_SPEED", &mut self.angular_speed),
            ("ROOMBA_MOVE_FORWARD_TIME", &mut self.move_forward_time),
            ("ROOMBA_MOVE_IN_SPIRAL_TIME", &mut self.move_in_spiral_time),
            ("ROOMBA_GO_BACK_TIME", &mut self.go_back_time),
            ("ROOMBA_INITIAL_RADIUS_SPIRAL", &mut self.initial_radius_spiral),
            ("ROOMBA_SPIRAL_FACTOR", &mut self.spiral_factor),
        ];
        for (key, field) in fields {
            if let Some(value) = read_env::<f64>(key) {
                *field = value;
            }
        }
        self
    }

    /// Checks every value is usable by the maneuvers.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("sample_time", self.sample_time)?;
        positive("forward_speed", self.forward_speed)?;
        positive("angular_speed", self.angular_speed)?;
        positive("move_forward_time", self.move_forward_time)?;
        positive("move_in_spiral_time", self.move_in_spiral_time)?;
        positive("go_back_time", self.go_back_time)?;
        positive("initial_radius_spiral", self.initial_radius_spiral)?;

        finite("backward_speed", self.backward_speed)?;
        if self.backward_speed >= 0.0 {
            return Err(invalid("backward_speed", self.backward_speed, "must be negative"));
        }

        finite("spiral_factor", self.spiral_factor)?;
        if self.spiral_factor < 0.0 {
            return Err(invalid("spiral_factor", self.spiral_factor, "must not be negative"));
        }

        Ok(())
    }
}

impl Default for RobotConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn invalid(field: &'static str, value: f64, reason: &'static str) -> ConfigError {
    ConfigError::Invalid {
        field,
        value,
        reason,
    }
}

fn finite(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(invalid(field, value, "must be finite"))
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, value, "must be positive"))
    }
}
