//! Compile-time constant values.

use std::fmt;

use serde::Serialize;

use abiscope_core::{BasicType, FloatPrecision, Signedness};

use crate::error::{PaintError, Result};

/// An integer constant of a 32- or 64-bit type.
///
/// `bits` is kept normalized: signed values sign-extended to 64 bits,
/// unsigned values zero-extended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct IntegerConst {
    ty: BasicType,
    bits: u64,
}

impl IntegerConst {
    /// Build from raw bits; only the low `width` bits of `raw` are kept.
    pub fn new(ty: BasicType, raw: u64) -> Result<Self> {
        let bits = match ty {
            BasicType::Int32 => raw as u32 as i32 as i64 as u64,
            BasicType::Uns32 => raw & 0xFFFF_FFFF,
            BasicType::Int64 | BasicType::Uns64 => raw,
            _ => return Err(PaintError::UnsupportedSource { ty }),
        };
        Ok(Self { ty, bits })
    }

    pub fn ty(&self) -> BasicType {
        self.ty
    }

    pub fn signedness(&self) -> Signedness {
        match self.ty {
            BasicType::Int32 | BasicType::Int64 => Signedness::Signed,
            _ => Signedness::Unsigned,
        }
    }

    /// Width in bytes.
    pub fn size(&self) -> u32 {
        match self.ty {
            BasicType::Int32 | BasicType::Uns32 => 4,
            _ => 8,
        }
    }

    /// The normalized 64-bit value.
    pub fn to_u64(&self) -> u64 {
        self.bits
    }

    /// The value as a signed integer, sign-extended for signed types.
    pub fn to_i64(&self) -> i64 {
        self.bits as i64
    }
}

impl fmt::Display for IntegerConst {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.signedness() {
            Signedness::Signed => write!(f, "{}", self.to_i64()),
            Signedness::Unsigned => write!(f, "{}", self.to_u64()),
        }
    }
}

/// A single- or double-precision float constant, stored as its exact bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FloatConst {
    precision: FloatPrecision,
    bits: u64,
}

impl FloatConst {
    pub fn from_f32(value: f32) -> Self {
        Self {
            precision: FloatPrecision::F32,
            bits: u64::from(value.to_bits()),
        }
    }

    pub fn from_f64(value: f64) -> Self {
        Self {
            precision: FloatPrecision::F64,
            bits: value.to_bits(),
        }
    }

    pub fn ty(&self) -> BasicType {
        match self.precision {
            FloatPrecision::F32 => BasicType::Float32,
            FloatPrecision::F64 => BasicType::Float64,
        }
    }

    pub fn size(&self) -> u32 {
        match self.precision {
            FloatPrecision::F32 => 4,
            FloatPrecision::F64 => 8,
        }
    }

    /// The IEEE 754 encoding, zero-extended to 64 bits.
    pub fn bits(&self) -> u64 {
        self.bits
    }

    /// The value as `f32`, if single precision.
    pub fn as_f32(&self) -> Option<f32> {
        (self.precision == FloatPrecision::F32).then(|| f32::from_bits(self.bits as u32))
    }
}

impl fmt::Display for FloatConst {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_f32() {
            Some(v) => write!(f, "{v:?}f"),
            None => write!(f, "{:?}", f64::from_bits(self.bits)),
        }
    }
}

/// A compile-time constant that can be reinterpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConstantValue {
    Integer(IntegerConst),
    Float(FloatConst),
}

impl ConstantValue {
    pub fn int32(value: i32) -> Self {
        ConstantValue::Integer(IntegerConst {
            ty: BasicType::Int32,
            bits: value as i64 as u64,
        })
    }

    pub fn uns32(value: u32) -> Self {
        ConstantValue::Integer(IntegerConst {
            ty: BasicType::Uns32,
            bits: u64::from(value),
        })
    }

    pub fn int64(value: i64) -> Self {
        ConstantValue::Integer(IntegerConst {
            ty: BasicType::Int64,
            bits: value as u64,
        })
    }

    pub fn uns64(value: u64) -> Self {
        ConstantValue::Integer(IntegerConst {
            ty: BasicType::Uns64,
            bits: value,
        })
    }

    pub fn float32(value: f32) -> Self {
        ConstantValue::Float(FloatConst::from_f32(value))
    }

    pub fn float64(value: f64) -> Self {
        ConstantValue::Float(FloatConst::from_f64(value))
    }

    /// An integer constant of type `ty` from raw bits.
    pub fn integer(ty: BasicType, raw: u64) -> Result<Self> {
        IntegerConst::new(ty, raw).map(ConstantValue::Integer)
    }

    pub fn ty(&self) -> BasicType {
        match self {
            ConstantValue::Integer(i) => i.ty(),
            ConstantValue::Float(f) => f.ty(),
        }
    }

    /// Size in bytes of the value's type.
    pub fn size(&self) -> u32 {
        match self {
            ConstantValue::Integer(i) => i.size(),
            ConstantValue::Float(f) => f.size(),
        }
    }

    pub fn as_integer(&self) -> Option<&IntegerConst> {
        match self {
            ConstantValue::Integer(i) => Some(i),
            ConstantValue::Float(_) => None,
        }
    }

    pub fn as_float(&self) -> Option<&FloatConst> {
        match self {
            ConstantValue::Float(f) => Some(f),
            ConstantValue::Integer(_) => None,
        }
    }
}

impl fmt::Display for ConstantValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstantValue::Integer(i) => write!(f, "{i}"),
            ConstantValue::Float(x) => write!(f, "{x}"),
        }
    }
}
