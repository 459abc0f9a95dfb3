//! Target configuration.
//!
//! The host environment selects exactly one OS family plus the two width
//! flags once per compilation session. Everything else in this crate is
//! derived from a [`TargetConfig`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TargetError;

/// Operating system family of the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum OsFamily {
    Windows,
    Linux,
    MacOS,
    FreeBSD,
    OpenBSD,
    DragonFlyBSD,
    Solaris,
}

impl OsFamily {
    /// Every supported family.
    pub const ALL: [OsFamily; 7] = [
        OsFamily::Windows,
        OsFamily::Linux,
        OsFamily::MacOS,
        OsFamily::FreeBSD,
        OsFamily::OpenBSD,
        OsFamily::DragonFlyBSD,
        OsFamily::Solaris,
    ];

    /// Lowercase name, as used in configuration files.
    pub fn name(self) -> &'static str {
        match self {
            OsFamily::Windows => "windows",
            OsFamily::Linux => "linux",
            OsFamily::MacOS => "macos",
            OsFamily::FreeBSD => "freebsd",
            OsFamily::OpenBSD => "openbsd",
            OsFamily::DragonFlyBSD => "dragonflybsd",
            OsFamily::Solaris => "solaris",
        }
    }

    /// Every family except Windows follows POSIX conventions.
    pub fn is_posix(self) -> bool {
        !matches!(self, OsFamily::Windows)
    }
}

impl fmt::Display for OsFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OsFamily {
    type Err = TargetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        match lower.as_str() {
            "osx" | "darwin" => return Ok(OsFamily::MacOS),
            "win32" | "win64" => return Ok(OsFamily::Windows),
            _ => {}
        }
        OsFamily::ALL
            .into_iter()
            .find(|os| os.name() == lower)
            .ok_or_else(|| TargetError::UnknownOs {
                name: s.to_string(),
            })
    }
}

impl TryFrom<String> for OsFamily {
    type Error = TargetError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// The platform selection for one compilation session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TargetConfig {
    /// Operating system family.
    pub os: OsFamily,
    /// 64-bit instruction set (register width).
    #[serde(rename = "is-64bit")]
    pub is_64bit: bool,
    /// LP64 data model: `long` and pointers are 64 bits.
    #[serde(rename = "is-lp64")]
    pub is_lp64: bool,
}

impl TargetConfig {
    pub const fn new(os: OsFamily, is_64bit: bool, is_lp64: bool) -> Self {
        Self {
            os,
            is_64bit,
            is_lp64,
        }
    }

    /// A 32-bit target with the ILP32 data model.
    pub const fn ilp32(os: OsFamily) -> Self {
        Self::new(os, false, false)
    }

    /// A 64-bit target with the LP64 data model.
    pub const fn lp64(os: OsFamily) -> Self {
        Self::new(os, true, true)
    }

    /// A 64-bit target with 32-bit pointers (x32).
    pub const fn x32(os: OsFamily) -> Self {
        Self::new(os, true, false)
    }
}

impl fmt::Display for TargetConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let model = match (self.is_64bit, self.is_lp64) {
            (true, true) => "64-bit, LP64",
            (true, false) => "64-bit, ILP32",
            (false, true) => "32-bit, LP64",
            (false, false) => "32-bit, ILP32",
        };
        write!(f, "{} ({model})", self.os)
    }
}
