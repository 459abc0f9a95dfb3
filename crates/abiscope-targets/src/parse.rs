//! TOML parsing, serialization, and validation of target configurations.
//!
//! A target configuration is stored as a small `.target.toml` file:
//!
//! ```toml
//! os = "linux"
//! is-64bit = true
//! is-lp64 = true
//! ```

use std::fmt;
use std::path::Path;

use crate::config::{OsFamily, TargetConfig};
use crate::error::{Result, TargetError};
use crate::presets;

/// A suspicious combination found in a target configuration.
///
/// Every configuration still resolves, so issues are always warnings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Human-readable description.
    pub message: String,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "warning: {}", self.message)
    }
}

/// Load a target configuration from a `.target.toml` file.
pub fn load_config_toml(path: &Path) -> Result<TargetConfig> {
    if !path.exists() {
        return Err(TargetError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let content = std::fs::read_to_string(path)?;
    let config = parse_config_toml(&content)?;
    log::debug!("loaded target {config} from {}", path.display());
    Ok(config)
}

/// Parse a target configuration from a TOML string.
pub fn parse_config_toml(toml_str: &str) -> Result<TargetConfig> {
    let config: TargetConfig = toml::from_str(toml_str)?;
    Ok(config)
}

/// Serialize a target configuration to pretty TOML.
pub fn config_to_toml(config: &TargetConfig) -> Result<String> {
    let toml_str = toml::to_string_pretty(config)?;
    Ok(toml_str)
}

/// Check a configuration for combinations no shipping platform uses.
///
/// Every combination resolves; these are warnings about likely mistakes.
/// Returns `Ok(())` if nothing was found, or `Err(issues)`.
pub fn validate_config(config: &TargetConfig) -> std::result::Result<(), Vec<ValidationIssue>> {
    let mut issues = Vec::new();

    // 1. LP64 needs 64-bit registers
    if config.is_lp64 && !config.is_64bit {
        issues.push(ValidationIssue {
            message: format!(
                "{}: LP64 data model on a 32-bit instruction set",
                config.os
            ),
        });
    }

    // 2. macOS, the BSDs and Solaris ship no 32-bit data model on 64-bit hardware
    let unix_without_x32 = !matches!(config.os, OsFamily::Linux | OsFamily::Windows);
    if config.is_64bit && !config.is_lp64 && unix_without_x32 {
        issues.push(ValidationIssue {
            message: format!(
                "{}: 64-bit target with 4-byte pointers; only Linux ships such an ABI (x32)",
                config.os
            ),
        });
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}

/// Generate a `.target.toml` seeded from a built-in preset.
pub fn generate_template(preset: &str) -> Result<String> {
    let config = presets::require_preset(preset)?;
    config_to_toml(&config)
}
