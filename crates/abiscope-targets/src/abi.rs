//! ABI facts.
//!
//! Resolves the binary-interface constants every later phase depends on:
//! pointer and `long` widths, the extended-float storage layout, runtime
//! class-metadata size, and the static data cap.

use serde::{Deserialize, Serialize};

use abiscope_core::Linkage;

use crate::config::{OsFamily, TargetConfig};

/// Size of the runtime class metadata record with 4-byte pointers.
pub const CLASS_INFO_SIZE_32: u32 = 0x4C;
/// Size of the runtime class metadata record with 8-byte pointers.
pub const CLASS_INFO_SIZE_64: u32 = 0x98;

/// Largest single static data object.
///
/// Capped at `i32::MAX` even on 64-bit targets: sizes and offsets are
/// carried in 32-bit fields further down the pipeline.
pub const MAX_STATIC_DATA_SIZE: u64 = 0x7FFF_FFFF;

/// Static data cap for 32-bit Windows; the OMF linker rejects larger chunks.
pub const WIN32_MAX_STATIC_DATA_SIZE: u64 = 0x100_0000;

/// Storage layout of the widest native floating-point type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ExtendedFloatLayout {
    /// Storage size in bytes, padding included.
    pub size: u32,
    /// Trailing padding bytes after the significant bits.
    pub padding: u32,
    /// Required alignment in bytes.
    pub alignment: u32,
}

impl ExtendedFloatLayout {
    /// x87 80-bit value packed into 10 bytes (Windows).
    pub const PACKED_10: Self = Self::new(10, 0, 2);
    /// x87 80-bit value in 12 bytes (32-bit System V).
    pub const PADDED_12: Self = Self::new(12, 2, 4);
    /// x87 80-bit value in 16 bytes (x86-64 System V, macOS).
    pub const PADDED_16: Self = Self::new(16, 6, 16);

    pub const fn new(size: u32, padding: u32, alignment: u32) -> Self {
        Self {
            size,
            padding,
            alignment,
        }
    }
}

/// Binary-interface constants for one target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AbiFacts {
    /// Pointer size in bytes (4 or 8).
    pub pointer_size: u32,
    /// Size of the runtime class metadata record.
    pub class_info_size: u32,
    /// Largest single static data object.
    pub max_static_data_size: u64,
    /// Size of C `long`.
    pub c_long_size: u32,
    /// Size of C `long double`.
    pub c_long_double_size: u32,
    /// Layout of the extended-precision float.
    pub real: ExtendedFloatLayout,
    /// Whether C++ exceptions can be caught and thrown across the boundary.
    pub cpp_exceptions: bool,
    /// Whether C++ overloads are emitted in reverse declaration order.
    pub reverse_cpp_overloads: bool,
    /// Linkage used for `extern(System)`.
    pub system_linkage: Linkage,
}

impl AbiFacts {
    /// Resolve the ABI facts for a target configuration.
    pub fn resolve(config: &TargetConfig) -> Self {
        let (pointer_size, class_info_size) = if config.is_lp64 {
            (8, CLASS_INFO_SIZE_64)
        } else {
            (4, CLASS_INFO_SIZE_32)
        };

        let mut max_static_data_size = MAX_STATIC_DATA_SIZE;
        let mut reverse_cpp_overloads = false;

        let (mut real, mut c_long_size) = match config.os {
            OsFamily::Linux
            | OsFamily::FreeBSD
            | OsFamily::OpenBSD
            | OsFamily::DragonFlyBSD
            | OsFamily::Solaris => (ExtendedFloatLayout::PADDED_12, 4),
            OsFamily::MacOS => (ExtendedFloatLayout::PADDED_16, 4),
            OsFamily::Windows => {
                // TODO: confirm which MSVC overload-resolution behavior this
                // mirrors; it is kept for 32-bit only until then.
                reverse_cpp_overloads = !config.is_64bit;
                if pointer_size == 4 {
                    max_static_data_size = WIN32_MAX_STATIC_DATA_SIZE;
                }
                (ExtendedFloatLayout::PACKED_10, 4)
            }
        };

        if config.is_64bit {
            match config.os {
                OsFamily::Linux | OsFamily::FreeBSD | OsFamily::Solaris => {
                    real = ExtendedFloatLayout::PADDED_16;
                    c_long_size = 8;
                }
                OsFamily::MacOS => c_long_size = 8,
                OsFamily::Windows | OsFamily::OpenBSD | OsFamily::DragonFlyBSD => {}
            }
        }

        // Win64 has no extended-precision `long double`.
        let c_long_double_size = if config.is_64bit && config.os == OsFamily::Windows {
            8
        } else {
            real.size
        };

        let cpp_exceptions = matches!(
            config.os,
            OsFamily::Linux | OsFamily::FreeBSD | OsFamily::MacOS
        );

        Self {
            pointer_size,
            class_info_size,
            max_static_data_size,
            c_long_size,
            c_long_double_size,
            real,
            cpp_exceptions,
            reverse_cpp_overloads,
            system_linkage: system_linkage(config),
        }
    }
}

/// Default linkage for `extern(System)` declarations.
pub fn system_linkage(config: &TargetConfig) -> Linkage {
    match config.os {
        OsFamily::Windows => Linkage::Windows,
        _ => Linkage::C,
    }
}
