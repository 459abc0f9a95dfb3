//! CLI command implementations.

pub mod paint;
pub mod target;
pub mod vector;

use std::path::Path;

use anyhow::{bail, Context, Result};
use abiscope_targets::parse::load_config_toml;
use abiscope_targets::presets::resolve_preset;
use abiscope_targets::TargetConfig;

/// Pick the target from a preset name or a `.target.toml` file.
pub fn select_target(name: Option<&str>, config: Option<&Path>) -> Result<TargetConfig> {
    match (name, config) {
        (Some(_), Some(_)) => bail!("give either a preset name or --config, not both"),
        (None, Some(path)) => {
            load_config_toml(path).with_context(|| format!("loading {}", path.display()))
        }
        (Some(name), None) => match resolve_preset(name) {
            Some(config) => Ok(config),
            None => {
                bail!("unknown target: '{name}'. Use 'abiscope list' to see available targets.")
            }
        },
        (None, None) => bail!("no target given; pass a preset name or --config <file>"),
    }
}
