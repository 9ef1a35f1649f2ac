//! Engine configuration.
//!
//! Defaults reproduce the fixed constants in [`crate::limits`]. A host may
//! override them from a JSON file; missing fields keep their defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Result, TracklineError};
use crate::limits;

/// Tunable parameters of the geometry engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Major grid used for drop and commit snapping.
    pub grid_size: f32,
    /// Minor grid, drawn but never snapped to.
    pub minor_grid_size: f32,
    /// Live guideline distance.
    pub guide_threshold: f32,
    /// Resize-commit guideline snap distance. Must stay below `guide_threshold`.
    pub commit_snap_threshold: f32,
    /// Pointer distance from a clip edge that arms a resize.
    pub edge_tolerance: f32,
    /// Duration of clips added without one.
    pub default_clip_duration: f32,
    /// Color of clips added without one.
    pub default_clip_color: String,
    /// Minimum width of the scrollable canvas.
    pub canvas_min_width: f32,
    /// Space kept after the rightmost clip.
    pub canvas_padding: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            grid_size: limits::GRID_SIZE,
            minor_grid_size: limits::MINOR_GRID_SIZE,
            guide_threshold: limits::GUIDE_THRESHOLD,
            commit_snap_threshold: limits::COMMIT_SNAP_THRESHOLD,
            edge_tolerance: limits::EDGE_TOLERANCE,
            default_clip_duration: limits::DEFAULT_CLIP_DURATION,
            default_clip_color: limits::DEFAULT_CLIP_COLOR.to_string(),
            canvas_min_width: limits::CANVAS_MIN_WIDTH,
            canvas_padding: limits::CANVAS_PADDING,
        }
    }
}

impl EngineConfig {
    /// Check that the values describe a usable engine.
    pub fn validate(&self) -> Result<()> {
        if self.grid_size <= 0.0 || self.minor_grid_size <= 0.0 {
            return Err(TracklineError::InvalidConfig(format!(
                "grid sizes must be positive (grid {}, minor {})",
                self.grid_size, self.minor_grid_size
            )));
        }
        if self.guide_threshold <= 0.0 || self.commit_snap_threshold <= 0.0 {
            return Err(TracklineError::InvalidConfig(
                "snap thresholds must be positive".into(),
            ));
        }
        if self.commit_snap_threshold >= self.guide_threshold {
            return Err(TracklineError::InvalidConfig(format!(
                "commit snap threshold {} must be tighter than guide threshold {}",
                self.commit_snap_threshold, self.guide_threshold
            )));
        }
        if self.edge_tolerance <= 0.0 {
            return Err(TracklineError::InvalidConfig(
                "edge tolerance must be positive".into(),
            ));
        }
        if self.default_clip_duration < limits::MIN_DURATION {
            return Err(TracklineError::InvalidConfig(format!(
                "default clip duration {} is below the minimum {}",
                self.default_clip_duration,
                limits::MIN_DURATION
            )));
        }
        Ok(())
    }

    /// Parse and validate a configuration from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)
            .map_err(|e| TracklineError::Serialization(format!("Invalid engine config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Load `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring engine config");
                Self::default()
            }
        }
    }

    /// Default config file path.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("trackline")
            .join("engine.json")
    }
}
