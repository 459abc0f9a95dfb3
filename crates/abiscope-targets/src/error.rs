//! Error types for target ABI operations.

use std::path::PathBuf;

use abiscope_core::TypeRef;

/// Errors that can occur during target ABI operations.
#[derive(Debug, thiserror::Error)]
pub enum TargetError {
    /// TOML deserialization error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// I/O error reading/writing target files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Target file not found.
    #[error("target file not found: {}", path.display())]
    NotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// No built-in target with this name.
    #[error("unknown target preset: '{name}'")]
    UnknownPreset { name: String },

    /// The operating system family is not one of the supported ones.
    #[error("unsupported operating system: '{name}'")]
    UnknownOs { name: String },

    /// An alignment query was made for a type that is not basic.
    ///
    /// This is an internal compiler error, never a user error.
    #[error("alignment requested for non-basic type `{ty}`")]
    NotBasic { ty: TypeRef },
}

/// Result type for target operations.
pub type Result<T> = std::result::Result<T, TargetError>;
