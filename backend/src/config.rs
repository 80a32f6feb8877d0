//! Layout configuration file support.
//!
//! This module provides utilities for reading timeline layout settings from
//! TOML configuration files.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::api::ViewMode;
use crate::error::{TimelineError, TimelineResult};
use crate::models::DisplayZone;
use crate::services::packer::PackingOrder;

/// Environment variable pointing at an explicit configuration file.
pub const CONFIG_PATH_ENV: &str = "TIMELINE_CONFIG";

/// Timeline configuration from file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimelineConfig {
    #[serde(default)]
    pub layout: LayoutSettings,
}

/// Layout settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSettings {
    /// Width of the full axis in pixels.
    #[serde(default = "default_axis_width_px")]
    pub axis_width_px: f64,
    /// Minimum rendered width of a period box in pixels.
    #[serde(default = "default_min_width_px")]
    pub min_width_px: f64,
    /// Zone calendar dates are anchored in, as minutes east of UTC.
    #[serde(default, rename = "utc_offset_minutes")]
    pub zone: DisplayZone,
    #[serde(default)]
    pub packing_order: PackingOrder,
    #[serde(default)]
    pub view_mode: ViewMode,
    /// Viewports narrower than this start in list mode.
    #[serde(default = "default_list_breakpoint_px")]
    pub list_breakpoint_px: f64,
}

fn default_axis_width_px() -> f64 {
    1200.0
}

fn default_min_width_px() -> f64 {
    180.0
}

fn default_list_breakpoint_px() -> f64 {
    768.0
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            axis_width_px: default_axis_width_px(),
            min_width_px: default_min_width_px(),
            zone: DisplayZone::default(),
            packing_order: PackingOrder::default(),
            view_mode: ViewMode::default(),
            list_breakpoint_px: default_list_breakpoint_px(),
        }
    }
}

impl LayoutSettings {
    /// Check that the pixel settings describe a drawable axis.
    pub fn validate(&self) -> TimelineResult<()> {
        if !self.axis_width_px.is_finite() || self.axis_width_px <= 0.0 {
            return Err(TimelineError::configuration(format!(
                "axis_width_px must be a positive number, got {}",
                self.axis_width_px
            )));
        }
        if !self.min_width_px.is_finite() || self.min_width_px < 0.0 {
            return Err(TimelineError::configuration(format!(
                "min_width_px must be a non-negative number, got {}",
                self.min_width_px
            )));
        }
        if !self.list_breakpoint_px.is_finite() || self.list_breakpoint_px < 0.0 {
            return Err(TimelineError::configuration(format!(
                "list_breakpoint_px must be a non-negative number, got {}",
                self.list_breakpoint_px
            )));
        }
        Ok(())
    }
}

impl TimelineConfig {
    /// Parse and validate configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> TimelineResult<Self> {
        let config: TimelineConfig = toml::from_str(content).map_err(|e| {
            TimelineError::configuration(format!("Failed to parse config file: {}", e))
        })?;
        config.layout.validate()?;
        Ok(config)
    }

    /// Load timeline configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(TimelineConfig)` if successful
    /// * `Err(TimelineError)` if file cannot be read, parsed or validated
    pub fn from_file<P: AsRef<Path>>(path: P) -> TimelineResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            TimelineError::configuration(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Self::from_toml_str(&content)
    }

    /// Load timeline configuration from the default location.
    ///
    /// Searches for `timeline.toml` in:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    pub fn from_default_location() -> TimelineResult<Self> {
        let search_paths = [
            PathBuf::from("timeline.toml"),
            PathBuf::from("backend/timeline.toml"),
            PathBuf::from("../timeline.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(TimelineError::configuration(
            "No timeline.toml found in standard locations",
        ))
    }

    /// Resolve the active configuration from `TIMELINE_CONFIG` or the
    /// default locations.
    pub fn load() -> TimelineResult<Self> {
        Self::load_from(std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from))
    }

    /// Resolve the active configuration.
    ///
    /// An explicit path must load successfully. Without one the default
    /// locations are searched, falling back to built-in defaults.
    pub fn load_from(explicit: Option<PathBuf>) -> TimelineResult<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        match Self::from_default_location() {
            Ok(config) => Ok(config),
            Err(TimelineError::Configuration { message })
                if message.starts_with("No timeline.toml") =>
            {
                log::warn!("{}; using default layout settings", message);
                Ok(Self::default())
            }
            Err(e) => Err(e),
        }
    }
}
