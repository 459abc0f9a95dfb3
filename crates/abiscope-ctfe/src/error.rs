//! Constant reinterpretation errors.
//!
//! Every variant is an internal compiler error: the front end must never
//! ask for a size-changing or unsupported reinterpretation.

use abiscope_core::BasicType;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaintError {
    /// Source and target types differ in size.
    #[error("cannot reinterpret `{from}` ({from_size} bytes) as `{to}` ({to_size} bytes)")]
    SizeMismatch {
        from: BasicType,
        to: BasicType,
        from_size: u32,
        to_size: u32,
    },

    /// The value's type cannot be held in a reinterpretable constant.
    #[error("cannot reinterpret a constant of type `{ty}`")]
    UnsupportedSource { ty: BasicType },

    /// The requested type is not a 32/64-bit integer or float.
    #[error("cannot reinterpret a constant as `{ty}`")]
    UnsupportedTarget { ty: BasicType },
}

/// Result type for reinterpretation.
pub type Result<T> = std::result::Result<T, PaintError>;
