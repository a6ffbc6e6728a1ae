use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::geometry::BoundingSquare;
use crate::math::{Point2, DEDUP_EPSILON};
use crate::operations::line::{DRAG_EXTENSION, HANDLE_OFFSET};
use crate::operations::validate::SELF_INTERSECTION_TOLERANCE;

/// Tunables of the engine. Missing JSON fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub square: BoundingSquare,
    /// Corner whose region is `region1`.
    pub reference_corner: Point2,
    /// Self-crossings with clearance at or below this are repaired.
    pub self_intersection_tolerance: f64,
    pub dedup_epsilon: f64,
    pub handle_offset: f64,
    pub drag_extension: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        let square = BoundingSquare::graph();
        Self {
            square,
            reference_corner: Point2::new(square.max.x, square.min.y),
            self_intersection_tolerance: SELF_INTERSECTION_TOLERANCE,
            dedup_epsilon: DEDUP_EPSILON,
            handle_offset: HANDLE_OFFSET,
            drag_extension: DRAG_EXTENSION,
        }
    }
}

impl EngineConfig {
    /// Parses and validates a JSON config.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Json`] on malformed input, [`ConfigError::Invalid`] if
    /// [`EngineConfig::validate`] fails.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a JSON config file.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`EngineConfig::from_json_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let size = self.square.max - self.square.min;
        if size.x <= 0.0 || size.y <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "square must have positive extent, got {}x{}",
                size.x, size.y
            )));
        }
        if self.square.corner_index(&self.reference_corner).is_none() {
            return Err(ConfigError::Invalid(format!(
                "reference corner ({}, {}) is not a corner of the square",
                self.reference_corner.x, self.reference_corner.y
            )));
        }
        for (name, value) in [
            ("self_intersection_tolerance", self.self_intersection_tolerance),
            ("handle_offset", self.handle_offset),
            ("drag_extension", self.drag_extension),
        ] {
            if value.is_nan() || value < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be non-negative, got {value}"
                )));
            }
        }
        if self.dedup_epsilon.is_nan() || self.dedup_epsilon <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "dedup_epsilon must be positive, got {}",
                self.dedup_epsilon
            )));
        }
        Ok(())
    }
}
