//! Locating and loading the scoring configuration for the CLI.
//!
//! Precedence: an explicit `--config` (or `TRUSTGUARD_CONFIG`, which clap folds
//! into the same flag), then `<config dir>/trustguard/scoring.yaml` when it
//! exists, then the embedded defaults. A user file is merged over the defaults.

use anyhow::{Context, Result};
use log::{debug, info};
use std::path::{Path, PathBuf};

use trustguard_core::{merge_config, ScoringConfig};

pub const CONFIG_DIR_NAME: &str = "trustguard";
pub const CONFIG_FILE_NAME: &str = "scoring.yaml";

/// `<config dir>/trustguard/scoring.yaml`, whether or not it exists.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// The user configuration file to load, if any.
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    default_config_path().filter(|path| path.is_file())
}

/// Loads the effective configuration and reports which file, if any, it came from.
pub fn load_effective_config(explicit: Option<&Path>) -> Result<(ScoringConfig, Option<PathBuf>)> {
    let defaults = ScoringConfig::load_default()?;
    let Some(path) = resolve_config_path(explicit) else {
        debug!("No user scoring configuration found; using embedded defaults.");
        return Ok((defaults, None));
    };

    info!("Using scoring configuration {}", path.display());
    let user = ScoringConfig::load_from_file(&path)
        .with_context(|| format!("Failed to load scoring configuration '{}'", path.display()))?;
    Ok((merge_config(defaults, Some(user)), Some(path)))
}
