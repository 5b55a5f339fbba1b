//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::RecipeBookResult;

use super::loader::{self, ConfigWarning};

/// Output configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    /// Emit JSON events instead of human-readable text
    #[serde(default)]
    pub json: bool,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Map a `-v` count onto a level; zero keeps `self`
    pub fn raised_by(self, count: u8) -> Self {
        match count {
            0 => self,
            1 => self.max_with(Verbosity::Verbose),
            _ => Verbosity::Debug,
        }
    }

    fn max_with(self, other: Verbosity) -> Self {
        if other.rank() > self.rank() {
            other
        } else {
            self
        }
    }

    fn rank(self) -> u8 {
        match self {
            Verbosity::Quiet => 0,
            Verbosity::Normal => 1,
            Verbosity::Verbose => 2,
            Verbosity::Debug => 3,
        }
    }

    /// `tracing_subscriber::EnvFilter` directive for this level
    pub fn log_filter(self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "info",
            Verbosity::Debug => "debug",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "quiet" => Some(Verbosity::Quiet),
            "normal" => Some(Verbosity::Normal),
            "verbose" => Some(Verbosity::Verbose),
            "debug" => Some(Verbosity::Debug),
            _ => None,
        }
    }
}

/// How recipes are rendered in lists and menus
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Characters of the recipe id shown in lists and selection labels
    #[serde(default = "default_id_prefix_len")]
    pub id_prefix_len: usize,

    /// Characters of each timestamp shown (19 = seconds precision)
    #[serde(default = "default_timestamp_len")]
    pub timestamp_len: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            id_prefix_len: default_id_prefix_len(),
            timestamp_len: default_timestamp_len(),
        }
    }
}

fn default_id_prefix_len() -> usize {
    8
}

fn default_timestamp_len() -> usize {
    19
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> RecipeBookResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from an explicit file, project config, user config, or defaults,
    /// then apply environment overrides
    pub fn load_layered(
        explicit: Option<&Path>,
        project_root: Option<&Path>,
    ) -> RecipeBookResult<(Self, Vec<ConfigWarning>)> {
        loader::load_layered(explicit, project_root)
    }
}
