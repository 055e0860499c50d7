//! Centralized scene/motion options with TOML preset support.
//!
//! All tweakable settings (layout, motion, transitions, camera, colors)
//! are consolidated here. Options serialize to/from TOML presets, and the
//! JSON schema describes the subset a control panel may expose.

mod camera;
mod colors;
mod motion;
mod scene;
mod transition;

use std::path::Path;

pub use camera::CameraOptions;
pub use colors::{Color, ColorOptions};
pub use motion::MotionOptions;
pub use scene::SceneOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use transition::TransitionOptions;

use crate::error::ScrollscapeError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[motion]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Object column and particle layout.
    pub scene: SceneOptions,
    /// Spin and parallax parameters.
    pub motion: MotionOptions,
    /// Section transition parameters.
    pub transition: TransitionOptions,
    /// Camera projection parameters.
    pub camera: CameraOptions,
    /// Base material color.
    pub colors: ColorOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// The JSON schema as a string, for a control panel.
    pub fn schema_json() -> Result<String, ScrollscapeError> {
        serde_json::to_string(&Self::json_schema())
            .map_err(|e| ScrollscapeError::OptionsParse(e.to_string()))
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, ScrollscapeError> {
        toml::from_str(content)
            .map_err(|e| ScrollscapeError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, ScrollscapeError> {
        let content = std::fs::read_to_string(path).map_err(ScrollscapeError::Io)?;
        Self::from_toml(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), ScrollscapeError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ScrollscapeError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ScrollscapeError::Io)?;
        }
        std::fs::write(path, content).map_err(ScrollscapeError::Io)
    }
}
