//! Basic type tags and type references.
//!
//! [`BasicType`] enumerates the non-aggregate types whose layout is decided
//! by the target ABI. [`TypeRef`] is a minimal type language for the few
//! ABI-visible types that are not basic (pointers and opaque named tags).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Signedness of an integer type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Signedness {
    Signed,
    Unsigned,
}

/// IEEE 754 precision of a host-representable float.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FloatPrecision {
    /// Single precision (32 bits).
    F32,
    /// Double precision (64 bits).
    F64,
}

/// A basic (non-aggregate) scalar type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BasicType {
    Void,
    Bool,
    Char,
    Wchar,
    Dchar,
    Int8,
    Uns8,
    Int16,
    Uns16,
    Int32,
    Uns32,
    Int64,
    Uns64,
    Int128,
    Uns128,
    Float32,
    Float64,
    Float80,
    Imaginary32,
    Imaginary64,
    Imaginary80,
    Complex32,
    Complex64,
    Complex80,
}

impl BasicType {
    /// Every basic type, in declaration order.
    pub const ALL: [BasicType; 24] = [
        BasicType::Void,
        BasicType::Bool,
        BasicType::Char,
        BasicType::Wchar,
        BasicType::Dchar,
        BasicType::Int8,
        BasicType::Uns8,
        BasicType::Int16,
        BasicType::Uns16,
        BasicType::Int32,
        BasicType::Uns32,
        BasicType::Int64,
        BasicType::Uns64,
        BasicType::Int128,
        BasicType::Uns128,
        BasicType::Float32,
        BasicType::Float64,
        BasicType::Float80,
        BasicType::Imaginary32,
        BasicType::Imaginary64,
        BasicType::Imaginary80,
        BasicType::Complex32,
        BasicType::Complex64,
        BasicType::Complex80,
    ];

    /// Size in bytes when it does not depend on the target.
    ///
    /// Returns `None` for the extended-precision family, whose storage size
    /// is an ABI fact.
    pub fn natural_size(self) -> Option<u32> {
        use BasicType::*;
        let size = match self {
            Void | Bool | Char | Int8 | Uns8 => 1,
            Wchar | Int16 | Uns16 => 2,
            Dchar | Int32 | Uns32 | Float32 | Imaginary32 => 4,
            Int64 | Uns64 | Float64 | Imaginary64 | Complex32 => 8,
            Int128 | Uns128 | Complex64 => 16,
            Float80 | Imaginary80 | Complex80 => return None,
        };
        Some(size)
    }

    /// Size in bytes given the target's extended-float storage size.
    pub fn size_with_real(self, real_size: u32) -> u32 {
        match self {
            BasicType::Float80 | BasicType::Imaginary80 => real_size,
            BasicType::Complex80 => real_size * 2,
            other => other.natural_size().unwrap_or(real_size),
        }
    }


    /// The keyword used for this type in text form.
    pub fn name(self) -> &'static str {
        use BasicType::*;
        match self {
            Void => "void",
            Bool => "bool",
            Char => "char",
            Wchar => "wchar",
            Dchar => "dchar",
            Int8 => "int8",
            Uns8 => "uns8",
            Int16 => "int16",
            Uns16 => "uns16",
            Int32 => "int32",
            Uns32 => "uns32",
            Int64 => "int64",
            Uns64 => "uns64",
            Int128 => "int128",
            Uns128 => "uns128",
            Float32 => "float32",
            Float64 => "float64",
            Float80 => "float80",
            Imaginary32 => "imaginary32",
            Imaginary64 => "imaginary64",
            Imaginary80 => "imaginary80",
            Complex32 => "complex32",
            Complex64 => "complex64",
            Complex80 => "complex80",
        }
    }
}

impl fmt::Display for BasicType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when text does not name a known type or linkage.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: '{text}'")]
pub struct ParseError {
    /// What was being parsed ("type", "linkage").
    pub kind: &'static str,
    /// The rejected input.
    pub text: String,
}

impl FromStr for BasicType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let alias = match s {
            "i8" => Some(BasicType::Int8),
            "u8" => Some(BasicType::Uns8),
            "i16" => Some(BasicType::Int16),
            "u16" => Some(BasicType::Uns16),
            "i32" => Some(BasicType::Int32),
            "u32" => Some(BasicType::Uns32),
            "i64" => Some(BasicType::Int64),
            "u64" => Some(BasicType::Uns64),
            "i128" => Some(BasicType::Int128),
            "u128" => Some(BasicType::Uns128),
            "f32" => Some(BasicType::Float32),
            "f64" => Some(BasicType::Float64),
            "f80" => Some(BasicType::Float80),
            _ => None,
        };
        alias
            .or_else(|| BasicType::ALL.into_iter().find(|t| t.name() == s))
            .ok_or_else(|| ParseError {
                kind: "type",
                text: s.to_string(),
            })
    }
}

/// A reference to an ABI-visible type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TypeRef {
    /// A basic scalar type.
    Basic(BasicType),
    /// Pointer to another type.
    Pointer(Box<TypeRef>),
    /// An opaque type known only by its tag name (e.g. `__va_list_tag`).
    Named(String),
}

impl TypeRef {
    /// Build a reference to a named opaque tag type.
    pub fn named(name: impl Into<String>) -> Self {
        TypeRef::Named(name.into())
    }

    /// Wrap this type in a pointer.
    pub fn pointer_to(self) -> Self {
        TypeRef::Pointer(Box::new(self))
    }
}

impl From<BasicType> for TypeRef {
    fn from(t: BasicType) -> Self {
        TypeRef::Basic(t)
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Basic(t) => write!(f, "{t}"),
            TypeRef::Pointer(inner) => write!(f, "{inner}*"),
            TypeRef::Named(name) => f.write_str(name),
        }
    }
}

/// Linkage kind of a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Linkage {
    /// Plain C linkage.
    C,
    /// C++ linkage; names go through a C++ mangler.
    Cpp,
    /// The Windows system calling convention (`stdcall` on 32-bit).
    Windows,
}

impl fmt::Display for Linkage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Linkage::C => "c",
            Linkage::Cpp => "c++",
            Linkage::Windows => "windows",
        };
        f.write_str(s)
    }
}

impl FromStr for Linkage {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "c" => Ok(Linkage::C),
            "c++" | "cpp" => Ok(Linkage::Cpp),
            "windows" => Ok(Linkage::Windows),
            _ => Err(ParseError {
                kind: "linkage",
                text: s.to_string(),
            }),
        }
    }
}
