//! Built-in target presets.

use crate::config::{OsFamily, TargetConfig};
use crate::error::{Result, TargetError};

const PRESETS: &[(&str, &str, TargetConfig)] = &[
    ("linux-x86", "Linux, 32-bit x86", TargetConfig::ilp32(OsFamily::Linux)),
    ("linux-x86_64", "Linux, x86-64 (LP64)", TargetConfig::lp64(OsFamily::Linux)),
    (
        "linux-x32",
        "Linux, x86-64 instructions with 32-bit pointers",
        TargetConfig::x32(OsFamily::Linux),
    ),
    ("windows-x86", "Windows, 32-bit x86", TargetConfig::ilp32(OsFamily::Windows)),
    ("windows-x86_64", "Windows, x86-64", TargetConfig::lp64(OsFamily::Windows)),
    ("macos-x86", "macOS, 32-bit x86", TargetConfig::ilp32(OsFamily::MacOS)),
    ("macos-x86_64", "macOS, x86-64", TargetConfig::lp64(OsFamily::MacOS)),
    ("freebsd-x86", "FreeBSD, 32-bit x86", TargetConfig::ilp32(OsFamily::FreeBSD)),
    ("freebsd-x86_64", "FreeBSD, x86-64", TargetConfig::lp64(OsFamily::FreeBSD)),
    ("openbsd-x86_64", "OpenBSD, x86-64", TargetConfig::lp64(OsFamily::OpenBSD)),
    (
        "dragonflybsd-x86_64",
        "DragonFly BSD, x86-64",
        TargetConfig::lp64(OsFamily::DragonFlyBSD),
    ),
    ("solaris-x86_64", "Solaris, x86-64", TargetConfig::lp64(OsFamily::Solaris)),
];

/// List all built-in target names with a short description.
pub fn builtin_targets() -> Vec<(&'static str, &'static str)> {
    PRESETS.iter().map(|(name, desc, _)| (*name, *desc)).collect()
}

/// Look up a built-in target by name.
pub fn resolve_preset(name: &str) -> Option<TargetConfig> {
    PRESETS
        .iter()
        .find(|(preset, _, _)| *preset == name)
        .map(|(_, _, config)| *config)
}

/// Like [`resolve_preset`], but an unknown name is an error.
pub fn require_preset(name: &str) -> Result<TargetConfig> {
    resolve_preset(name).ok_or_else(|| TargetError::UnknownPreset {
        name: name.to_string(),
    })
}
