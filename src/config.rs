//! Planner configuration sections.
//!
//! Sections are serde-backed so they can be loaded from a YAML file; every
//! field carries a default so partial files work. [`ToolSettings`] doubles as
//! the tool spec inside a [`PlanRequest`](crate::planner::PlanRequest).

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Tool geometry settings.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ToolSettings {
    /// Physical working width of the finishing tool (metres).
    #[serde(default = "defaults::tool_width")]
    pub tool_width: f64,

    /// Reduction per row so consecutive passes overlap (metres).
    #[serde(default = "defaults::overlap_margin")]
    pub overlap_margin: f64,
}

impl ToolSettings {
    /// Create tool settings from explicit values.
    pub fn new(tool_width: f64, overlap_margin: f64) -> Self {
        Self {
            tool_width,
            overlap_margin,
        }
    }

    /// Vertical spacing between consecutive coverage rows.
    #[inline]
    pub fn pitch(&self) -> f64 {
        self.tool_width - self.overlap_margin
    }
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            tool_width: defaults::tool_width(),
            overlap_margin: defaults::overlap_margin(),
        }
    }
}

/// Cell visit-order optimization settings.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderingSettings {
    /// Run the 2-opt refinement pass after greedy seeding.
    #[serde(default = "defaults::enabled")]
    pub two_opt: bool,

    /// Maximum number of 2-opt outer passes.
    #[serde(default = "defaults::max_passes")]
    pub max_passes: usize,
}

impl Default for OrderingSettings {
    fn default() -> Self {
        Self {
            two_opt: true,
            max_passes: 50,
        }
    }
}

/// Full planner configuration loaded from YAML.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
pub struct PlannerConfig {
    /// Tool geometry.
    #[serde(default)]
    pub tool: ToolSettings,

    /// Visit-order optimization.
    #[serde(default)]
    pub ordering: OrderingSettings,
}

impl PlannerConfig {
    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Load from the default config path (configs/planner.yaml).
    ///
    /// Falls back to the built-in defaults when the file does not exist.
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new("configs/planner.yaml");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }
}

/// Config load error
#[derive(Debug, Clone)]
pub enum ConfigLoadError {
    /// I/O error
    Io(String),
    /// Parse error
    Parse(String),
}

impl std::fmt::Display for ConfigLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigLoadError::Io(msg) => write!(f, "IO error: {}", msg),
            ConfigLoadError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigLoadError {}

mod defaults {
    pub fn tool_width() -> f64 {
        0.25
    }

    pub fn overlap_margin() -> f64 {
        0.0125
    }

    pub fn enabled() -> bool {
        true
    }

    pub fn max_passes() -> usize {
        50
    }
}
