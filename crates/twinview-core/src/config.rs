use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_CONTROL_SIZE, DEFAULT_DOUBLE_CLICK_MS, DEFAULT_EXTENSIONS, DEFAULT_SCROLL_DEBOUNCE_MS,
    DEFAULT_VIEWER_SIZE,
};
use crate::error::Result;
use crate::load::FailurePolicy;

/// Top-level configuration, read from TOML. Every section and field is
/// optional; missing ones take their defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub gesture: GestureConfig,
    pub loading: LoadingConfig,
    pub windows: WindowConfig,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Maximum gap between two presses that still counts as a double-click.
    pub double_click_ms: u64,
    /// Scroll events closer than this to the last accepted one are dropped.
    pub scroll_debounce_ms: u64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            double_click_ms: DEFAULT_DOUBLE_CLICK_MS,
            scroll_debounce_ms: DEFAULT_SCROLL_DEBOUNCE_MS,
        }
    }
}

impl GestureConfig {
    pub fn double_click(&self) -> Duration {
        Duration::from_millis(self.double_click_ms)
    }

    pub fn scroll_debounce(&self) -> Duration {
        Duration::from_millis(self.scroll_debounce_ms)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadingConfig {
    /// Extensions offered by the picker (without the dot).
    pub extensions: Vec<String>,
    pub failure_policy: FailurePolicy,
}

impl Default for LoadingConfig {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            failure_policy: FailurePolicy::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub viewer_size: [f32; 2],
    pub control_size: [f32; 2],
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            viewer_size: DEFAULT_VIEWER_SIZE,
            control_size: DEFAULT_CONTROL_SIZE,
        }
    }
}

impl ViewerConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::error::ViewerError::Config(e.to_string()))
    }
}
