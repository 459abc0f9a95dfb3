//! Reinterpret a constant's bit pattern as another type of the same size.
//!
//! Equivalent to `*cast(T*)&value` at run time. The value is written into a
//! zeroed scratch buffer using its natural encoding (little-endian for
//! integers, the host's native layout for floats) and read back as the
//! target type.

use byteorder::{ByteOrder, LittleEndian, NativeEndian};

use abiscope_core::BasicType;

use crate::error::{PaintError, Result};
use crate::value::{ConstantValue, FloatConst, IntegerConst};

/// Scratch capacity in bytes; values up to 512 bits fit.
const BUFFER_SIZE: usize = 64;

/// Scratch space owned by a single reinterpretation.
struct PaintBuffer([u8; BUFFER_SIZE]);

impl PaintBuffer {
    fn new() -> Self {
        Self([0; BUFFER_SIZE])
    }

    fn encode(&mut self, value: &ConstantValue) {
        match value {
            ConstantValue::Integer(i) => {
                let size = i.size() as usize;
                LittleEndian::write_uint(&mut self.0[..size], i.to_u64() & mask(size), size);
            }
            ConstantValue::Float(f) => match f.as_f32() {
                Some(single) => NativeEndian::write_f32(&mut self.0[..4], single),
                None => NativeEndian::write_f64(&mut self.0[..8], f64::from_bits(f.bits())),
            },
        }
    }

    fn decode(&self, ty: BasicType) -> Result<ConstantValue> {
        match ty {
            BasicType::Int32 | BasicType::Uns32 | BasicType::Int64 | BasicType::Uns64 => {
                let size = if ty.natural_size() == Some(4) { 4 } else { 8 };
                let raw = LittleEndian::read_uint(&self.0[..size], size);
                IntegerConst::new(ty, raw).map(ConstantValue::Integer)
            }
            BasicType::Float32 => Ok(ConstantValue::Float(FloatConst::from_f32(
                NativeEndian::read_f32(&self.0[..4]),
            ))),
            BasicType::Float64 => Ok(ConstantValue::Float(FloatConst::from_f64(
                NativeEndian::read_f64(&self.0[..8]),
            ))),
            _ => Err(PaintError::UnsupportedTarget { ty }),
        }
    }
}

fn mask(size: usize) -> u64 {
    if size >= 8 {
        u64::MAX
    } else {
        (1u64 << (size * 8)) - 1
    }
}

/// Reinterpret `value` as `ty`, keeping the bit pattern unchanged.
///
/// `ty` must have the same size as the value's type and be a 32/64-bit
/// integer or float. Either violation is an internal error.
pub fn paint_as(value: &ConstantValue, ty: BasicType) -> Result<ConstantValue> {
    let from = value.ty();
    let from_size = value.size();
    let to_size = ty
        .natural_size()
        .ok_or(PaintError::UnsupportedTarget { ty })?;
    if from_size != to_size {
        return Err(PaintError::SizeMismatch {
            from,
            to: ty,
            from_size,
            to_size,
        });
    }

    let mut buffer = PaintBuffer::new();
    buffer.encode(value);
    let painted = buffer.decode(ty)?;
    log::trace!("painted {value} ({from}) as {painted} ({ty})");
    Ok(painted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn one_point_zero() {
        let v = ConstantValue::integer(BasicType::Int32, 0x3F80_0000).unwrap();
        let painted = paint_as(&v, BasicType::Float32).unwrap();
        assert_eq!(painted, ConstantValue::float32(1.0));
    }

    #[test]
    fn float_to_signed_and_unsigned() {
        let minus_one = ConstantValue::float32(-1.0);
        assert_eq!(
            paint_as(&minus_one, BasicType::Uns32).unwrap(),
            ConstantValue::uns32(0xBF80_0000)
        );
        assert_eq!(
            paint_as(&minus_one, BasicType::Int32).unwrap(),
            ConstantValue::int32(0xBF80_0000_u32 as i32)
        );
    }

    #[test]
    fn double_to_long() {
        let v = ConstantValue::float64(2.0);
        assert_eq!(
            paint_as(&v, BasicType::Uns64).unwrap(),
            ConstantValue::uns64(0x4000_0000_0000_0000)
        );
        let back = paint_as(&ConstantValue::int64(0x3FF0_0000_0000_0000), BasicType::Float64);
        assert_eq!(back.unwrap(), ConstantValue::float64(1.0));
    }

    #[test]
    fn integer_to_integer_changes_signedness_only() {
        let v = ConstantValue::uns64(u64::MAX);
        assert_eq!(paint_as(&v, BasicType::Int64).unwrap(), ConstantValue::int64(-1));
    }

    #[test]
    fn signaling_nan_survives() {
        let v = ConstantValue::uns32(0x7F80_0001);
        let f = paint_as(&v, BasicType::Float32).unwrap();
        assert_eq!(f.as_float().unwrap().bits(), 0x7F80_0001);
        assert_eq!(paint_as(&f, BasicType::Uns32).unwrap(), v);
    }

    #[test]
    fn size_mismatch_is_rejected() {
        let err = paint_as(&ConstantValue::int32(1), BasicType::Float64).unwrap_err();
        assert_eq!(
            err,
            PaintError::SizeMismatch {
                from: BasicType::Int32,
                to: BasicType::Float64,
                from_size: 4,
                to_size: 8,
            }
        );
        assert!(paint_as(&ConstantValue::float64(1.0), BasicType::Int32).is_err());
    }

    #[test]
    fn unsupported_targets_are_rejected() {
        let v = ConstantValue::int32(0);
        for ty in [BasicType::Dchar, BasicType::Imaginary32] {
            assert_eq!(paint_as(&v, ty), Err(PaintError::UnsupportedTarget { ty }));
        }
        assert_eq!(
            paint_as(&ConstantValue::float64(0.0), BasicType::Complex32),
            Err(PaintError::UnsupportedTarget {
                ty: BasicType::Complex32
            })
        );
        assert_eq!(
            paint_as(&v, BasicType::Float80),
            Err(PaintError::UnsupportedTarget {
                ty: BasicType::Float80
            })
        );
    }

    proptest! {
        #[test]
        fn u32_round_trips_through_float(bits: u32) {
            let v = ConstantValue::uns32(bits);
            let f = paint_as(&v, BasicType::Float32).unwrap();
            prop_assert_eq!(f.as_float().unwrap().bits(), u64::from(bits));
            prop_assert_eq!(paint_as(&f, BasicType::Uns32).unwrap(), v);
        }

        #[test]
        fn i32_round_trips_through_float(value: i32) {
            let v = ConstantValue::int32(value);
            let f = paint_as(&v, BasicType::Float32).unwrap();
            prop_assert_eq!(paint_as(&f, BasicType::Int32).unwrap(), v);
        }

        #[test]
        fn u64_round_trips_through_double(bits: u64) {
            let v = ConstantValue::uns64(bits);
            let f = paint_as(&v, BasicType::Float64).unwrap();
            prop_assert_eq!(f.as_float().unwrap().bits(), bits);
            prop_assert_eq!(paint_as(&f, BasicType::Uns64).unwrap(), v);
        }

        #[test]
        fn i64_round_trips_through_double(value: i64) {
            let v = ConstantValue::int64(value);
            let f = paint_as(&v, BasicType::Float64).unwrap();
            prop_assert_eq!(paint_as(&f, BasicType::Int64).unwrap(), v);
        }
    }
}
