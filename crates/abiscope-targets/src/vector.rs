//! Vector (SIMD) type legality.
//!
//! Unlike the rest of the crate this validates user-written types, so the
//! outcome is a verdict for diagnostics rather than an error.

use std::fmt;

use serde::Serialize;

use abiscope_core::BasicType;

use crate::config::{OsFamily, TargetConfig};

/// Outcome of checking a `__vector(T[N])` type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum VectorCheck {
    Ok,
    /// The target has no vector types at all.
    UnsupportedPlatform,
    /// The vector is not 16 or 32 bytes wide.
    WrongSize,
    /// The element type cannot be vectorized.
    WrongBaseType,
}

impl VectorCheck {
    /// Numeric verdict code consumed by diagnostics.
    pub fn code(self) -> u8 {
        match self {
            VectorCheck::Ok => 0,
            VectorCheck::UnsupportedPlatform => 1,
            VectorCheck::WrongSize => 2,
            VectorCheck::WrongBaseType => 3,
        }
    }

    pub fn is_ok(self) -> bool {
        self == VectorCheck::Ok
    }
}

impl fmt::Display for VectorCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            VectorCheck::Ok => "ok",
            VectorCheck::UnsupportedPlatform => "vector types are not supported on this target",
            VectorCheck::WrongSize => "vector size must be 16 or 32 bytes",
            VectorCheck::WrongBaseType => "element type is not supported in vectors",
        };
        f.write_str(msg)
    }
}

/// Check whether a vector of `size` bytes of `element` is legal on the target.
pub fn check_vector_type(config: &TargetConfig, size: u64, element: BasicType) -> VectorCheck {
    if !config.is_64bit && config.os != OsFamily::MacOS {
        return VectorCheck::UnsupportedPlatform;
    }

    if size != 16 && size != 32 {
        return VectorCheck::WrongSize;
    }

    use BasicType::*;
    match element {
        Void | Int8 | Uns8 | Int16 | Uns16 | Int32 | Uns32 | Float32 | Int64 | Uns64
        | Float64 => VectorCheck::Ok,
        _ => VectorCheck::WrongBaseType,
    }
}
