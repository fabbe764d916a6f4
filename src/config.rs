//! Configuration
//!
//! Level geometry settings and motion tuning, loadable from JSON.
//! Validation happens here, once, so the per-tick code can trust its inputs.

use std::collections::BTreeSet;
use serde::{Serialize, Deserialize};
use thiserror::Error;

use crate::level::grid::TileId;
use crate::motion::config::MotionConfig;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON document could not be parsed.
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A value that must be strictly positive is not.
    #[error("{field} must be positive, got {value}")]
    NotPositive {
        /// Field name
        field: &'static str,
        /// Offending value
        value: f32,
    },

    /// A value that must be non-negative is negative.
    #[error("{field} must not be negative, got {value}")]
    Negative {
        /// Field name
        field: &'static str,
        /// Offending value
        value: f32,
    },

    /// A multiplicative factor outside `0..=1`.
    #[error("{field} must be within 0..=1, got {value}")]
    OutOfUnitRange {
        /// Field name
        field: &'static str,
        /// Offending value
        value: f32,
    },

    /// The empty tile id is also listed as one-way.
    #[error("empty tile id {0} cannot be a one-way tile")]
    EmptyTileIsOneWay(TileId),
}

/// Level geometry settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelConfig {
    /// Grid cell size in pixels.
    pub tile_size: f32,
    /// Reserved id for "no tile".
    pub empty_tile_id: TileId,
    /// Ids treated as one-way platforms (sorted for deterministic output).
    pub one_way_tile_ids: BTreeSet<TileId>,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            tile_size: 16.0,
            empty_tile_id: 0,
            one_way_tile_ids: BTreeSet::new(),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Level geometry settings
    pub level: LevelConfig,
    /// Motion tuning
    pub motion: MotionConfig,
}

impl Config {
    /// Parse and validate a JSON document. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty JSON.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check every invariant the simulation relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let level = &self.level;
        let m = &self.motion;

        positive("tile_size", level.tile_size)?;
        if level.one_way_tile_ids.contains(&level.empty_tile_id) {
            return Err(ConfigError::EmptyTileIsOneWay(level.empty_tile_id));
        }

        positive("mass", m.mass)?;
        positive("one_way_sweep_divisor", m.one_way_sweep_divisor)?;
        positive("sensor_depth", m.sensor_depth)?;

        for (field, value) in [
            ("gravity", m.gravity),
            ("fast_fall_multiplier", m.fast_fall_multiplier),
            ("apex_threshold", m.apex_threshold),
            ("apex_gravity_multiplier", m.apex_gravity_multiplier),
            ("acceleration", m.acceleration),
            ("apex_acceleration_multiplier", m.apex_acceleration_multiplier),
            ("max_speed_x", m.max_speed_x),
            ("max_rise_speed", m.max_rise_speed),
            ("max_fall_speed", m.max_fall_speed),
            ("jump_force", m.jump_force),
            ("jump_hold_force", m.jump_hold_force),
            ("stop_speed", m.stop_speed),
            ("fall_speed_after_collision", m.fall_speed_after_collision),
            ("drop_through_impulse", m.drop_through_impulse),
        ] {
            non_negative(field, value)?;
        }

        for (field, value) in [
            ("ground_friction", m.ground_friction),
            ("air_resistance", m.air_resistance),
            ("jump_cut_multiplier", m.jump_cut_multiplier),
        ] {
            unit_range(field, value)?;
        }

        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}

fn unit_range(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfUnitRange { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = Config::from_json_str(
            r#"{ "level": { "one_way_tile_ids": [2, 3] }, "motion": { "gravity": 0.7 } }"#,
        )
        .unwrap();

        assert_eq!(config.motion.gravity, 0.7);
        assert_eq!(config.motion.coyote_time_frames, MotionConfig::default().coyote_time_frames);
        assert_eq!(config.level.tile_size, 16.0);
        assert!(config.level.one_way_tile_ids.contains(&3));
    }

    #[test]
    fn test_json_roundtrip() {
        let config = Config::default();
        let json = config.to_json_string().unwrap();
        assert_eq!(Config::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_invalid_mass_rejected() {
        let err = Config::from_json_str(r#"{ "motion": { "mass": 0.0 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::NotPositive { field: "mass", .. }));
    }

    #[test]
    fn test_negative_speed_cap_rejected() {
        let mut config = Config::default();
        config.motion.max_fall_speed = -1.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Negative { field: "max_fall_speed", .. })
        ));
    }

    #[test]
    fn test_friction_range_checked() {
        let mut config = Config::default();
        config.motion.ground_friction = 1.5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::OutOfUnitRange { field: "ground_friction", .. })
        ));
    }

    #[test]
    fn test_empty_tile_cannot_be_one_way() {
        let mut config = Config::default();
        config.level.one_way_tile_ids.insert(0);
        assert!(matches!(config.validate(), Err(ConfigError::EmptyTileIsOneWay(0))));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(Config::from_json_str("{ nope"), Err(ConfigError::Json(_))));
    }
}
