//! Configuration module for Recipebook
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (RECIPEBOOK_*)
//! 3. Explicit `--config` file
//! 4. Project config (./recipebook.toml)
//! 5. User config (<config_dir>/recipebook/config.toml)
//! 6. Built-in defaults (lowest priority)

mod loader;
#[cfg(test)]
mod tests;
mod types;

pub use loader::{apply_overrides, user_config_path, ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{Config, DisplayConfig, OutputConfig, Verbosity};
