use crate::types::{BorderSides, ControlKind};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_RESIZE_BORDER_THICKNESS: i32 = 5;
pub const DEFAULT_MIN_WIDTH: i32 = 200;
pub const DEFAULT_MIN_HEIGHT: i32 = 150;

/// Window behavior settings, persisted as frameless.toml.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FramelessConfig {
    /// Resize border thickness in pixels. Zero or negative disables resizing.
    pub resize_border_thickness: i32,
    pub min_width: i32,
    pub min_height: i32,
    /// Control kinds whose handles must not be intercepted.
    pub excluded_kinds: Vec<ControlKind>,
    /// Side toggles given to every newly created filter.
    pub default_sides: BorderSides,
}

impl Default for FramelessConfig {
    fn default() -> Self {
        Self {
            resize_border_thickness: DEFAULT_RESIZE_BORDER_THICKNESS,
            min_width: DEFAULT_MIN_WIDTH,
            min_height: DEFAULT_MIN_HEIGHT,
            excluded_kinds: Vec::new(),
            default_sides: BorderSides::ALL,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl FramelessConfig {
    /// Returns the config file path within the given directory.
    pub fn path(dir: &Path) -> PathBuf {
        dir.join("frameless.toml")
    }

    /// Loads config from a TOML file. Returns default config if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validates config values and returns list of validation errors.
    /// Returns empty vec if config is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.resize_border_thickness < 0 {
            errors.push("resize_border_thickness must not be negative".to_string());
        }

        if self.min_width <= 0 {
            errors.push("min_width must be at least 1".to_string());
        }

        if self.min_height <= 0 {
            errors.push("min_height must be at least 1".to_string());
        }

        let doubled = self.resize_border_thickness.saturating_mul(2);
        if doubled >= self.min_width.min(self.min_height) {
            errors.push(
                "resize_border_thickness must be less than half the minimum window size"
                    .to_string(),
            );
        }

        errors
    }

    /// Returns a validated config, replacing invalid values with defaults.
    pub fn with_defaults_for_invalid(&self) -> Self {
        let defaults = Self::default();
        let min_width = if self.min_width <= 0 {
            defaults.min_width
        } else {
            self.min_width
        };
        let min_height = if self.min_height <= 0 {
            defaults.min_height
        } else {
            self.min_height
        };
        let smallest = min_width.min(min_height);
        let thickness = self.resize_border_thickness;
        let resize_border_thickness = if thickness < 0 || thickness.saturating_mul(2) >= smallest {
            // The default must itself fit inside a small minimum size.
            defaults.resize_border_thickness.min((smallest - 1) / 2)
        } else {
            thickness
        };

        Self {
            resize_border_thickness,
            min_width,
            min_height,
            excluded_kinds: self.excluded_kinds.clone(),
            default_sides: self.default_sides,
        }
    }

    pub fn exclusions(&self) -> ExclusionList {
        self.excluded_kinds.iter().cloned().collect()
    }
}

/// Control kinds ineligible for native handle interception.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExclusionList {
    kinds: HashSet<ControlKind>,
}

impl ExclusionList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, kind: ControlKind) -> bool {
        self.kinds.insert(kind)
    }

    pub fn remove(&mut self, kind: &ControlKind) -> bool {
        self.kinds.remove(kind)
    }

    pub fn contains(&self, kind: &ControlKind) -> bool {
        self.kinds.contains(kind)
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

impl FromIterator<ControlKind> for ExclusionList {
    fn from_iter<I: IntoIterator<Item = ControlKind>>(iter: I) -> Self {
        Self {
            kinds: iter.into_iter().collect(),
        }
    }
}
