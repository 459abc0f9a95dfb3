//! Floating-point type properties.
//!
//! The compile-time evaluator answers `.max`, `.min_normal`, `.epsilon` and
//! similar queries from these tables. Each table is filled from the host's
//! IEEE 754 characteristics for the matching width.

use serde::{Serialize, Serializer};

/// A host floating-point type whose IEEE 754 characteristics can be queried.
pub trait HostFloat: Copy + PartialEq + std::fmt::Debug {
    const MAX: Self;
    const MIN_NORMAL: Self;
    const INFINITY: Self;
    const NAN: Self;
    const EPSILON: Self;
    /// Decimal digits that survive a round trip through this type.
    const DIGITS: u32;
    const MANTISSA_DIGITS: u32;
    const MAX_EXP: i32;
    const MIN_EXP: i32;
    const MAX_10_EXP: i32;
    const MIN_10_EXP: i32;

    /// A signalling NaN (quiet bit clear, payload non-zero).
    fn signaling_nan() -> Self;

    /// The IEEE 754 encoding as zero-padded hex, e.g. `0x7FA00000`.
    fn bits_hex(self) -> String;
}

impl HostFloat for f32 {
    const MAX: Self = f32::MAX;
    const MIN_NORMAL: Self = f32::MIN_POSITIVE;
    const INFINITY: Self = f32::INFINITY;
    const NAN: Self = f32::NAN;
    const EPSILON: Self = f32::EPSILON;
    const DIGITS: u32 = f32::DIGITS;
    const MANTISSA_DIGITS: u32 = f32::MANTISSA_DIGITS;
    const MAX_EXP: i32 = f32::MAX_EXP;
    const MIN_EXP: i32 = f32::MIN_EXP;
    const MAX_10_EXP: i32 = f32::MAX_10_EXP;
    const MIN_10_EXP: i32 = f32::MIN_10_EXP;

    fn signaling_nan() -> Self {
        f32::from_bits(0x7FA0_0000)
    }

    fn bits_hex(self) -> String {
        format!("0x{:08X}", self.to_bits())
    }
}

impl HostFloat for f64 {
    const MAX: Self = f64::MAX;
    const MIN_NORMAL: Self = f64::MIN_POSITIVE;
    const INFINITY: Self = f64::INFINITY;
    const NAN: Self = f64::NAN;
    const EPSILON: Self = f64::EPSILON;
    const DIGITS: u32 = f64::DIGITS;
    const MANTISSA_DIGITS: u32 = f64::MANTISSA_DIGITS;
    const MAX_EXP: i32 = f64::MAX_EXP;
    const MIN_EXP: i32 = f64::MIN_EXP;
    const MAX_10_EXP: i32 = f64::MAX_10_EXP;
    const MIN_10_EXP: i32 = f64::MIN_10_EXP;

    fn signaling_nan() -> Self {
        f64::from_bits(0x7FF4_0000_0000_0000)
    }

    fn bits_hex(self) -> String {
        format!("0x{:016X}", self.to_bits())
    }
}

/// Write a float as its exact encoding; NaN payloads and infinities survive
/// both JSON and TOML.
fn serialize_bits<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: HostFloat,
    S: Serializer,
{
    serializer.serialize_str(&value.bits_hex())
}

/// Numeric properties of one floating-point category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case", bound(serialize = "T: HostFloat + Serialize"))]
pub struct FloatTypeProperties<T> {
    pub max: T,
    pub min_normal: T,
    #[serde(serialize_with = "serialize_bits")]
    pub nan: T,
    #[serde(serialize_with = "serialize_bits")]
    pub snan: T,
    #[serde(serialize_with = "serialize_bits")]
    pub infinity: T,
    pub epsilon: T,
    pub dig: i64,
    pub mant_dig: i64,
    pub max_exp: i64,
    pub min_exp: i64,
    pub max_10_exp: i64,
    pub min_10_exp: i64,
}

impl<T: HostFloat> FloatTypeProperties<T> {
    /// Read the properties of the host type `T`.
    pub fn of() -> Self {
        Self {
            max: T::MAX,
            min_normal: T::MIN_NORMAL,
            nan: T::NAN,
            snan: T::signaling_nan(),
            infinity: T::INFINITY,
            epsilon: T::EPSILON,
            dig: i64::from(T::DIGITS),
            mant_dig: i64::from(T::MANTISSA_DIGITS),
            max_exp: i64::from(T::MAX_EXP),
            min_exp: i64::from(T::MIN_EXP),
            max_10_exp: i64::from(T::MAX_10_EXP),
            min_10_exp: i64::from(T::MIN_10_EXP),
        }
    }
}

/// Properties of the three floating-point categories.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct FloatProperties {
    pub single: FloatTypeProperties<f32>,
    pub double: FloatTypeProperties<f64>,
    /// The host has no native type wider than `f64`, so the extended
    /// category is evaluated at double precision.
    pub extended: FloatTypeProperties<f64>,
}

impl FloatProperties {
    pub fn host() -> Self {
        Self {
            single: FloatTypeProperties::of(),
            double: FloatTypeProperties::of(),
            extended: FloatTypeProperties::of(),
        }
    }
}

impl Default for FloatProperties {
    fn default() -> Self {
        Self::host()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_precision() {
        let p = FloatTypeProperties::<f32>::of();
        assert_eq!(p.max, f32::MAX);
        assert_eq!(p.min_normal.to_bits(), 0x0080_0000);
        assert_eq!(p.epsilon.to_bits(), 0x3400_0000);
        assert_eq!(p.dig, 6);
        assert_eq!(p.mant_dig, 24);
        assert_eq!(p.max_exp, 128);
        assert_eq!(p.min_exp, -125);
        assert_eq!(p.max_10_exp, 38);
        assert_eq!(p.min_10_exp, -37);
        assert!(p.infinity.is_infinite());
    }

    #[test]
    fn double_precision() {
        let p = FloatTypeProperties::<f64>::of();
        assert_eq!(p.dig, 15);
        assert_eq!(p.mant_dig, 53);
        assert_eq!(p.max_exp, 1024);
        assert_eq!(p.min_exp, -1021);
        assert_eq!(p.max_10_exp, 308);
        assert_eq!(p.min_10_exp, -307);
        assert_eq!(p.epsilon, f64::EPSILON);
    }

    #[test]
    fn nans_are_distinct_kinds() {
        let p = FloatTypeProperties::<f32>::of();
        assert!(p.nan.is_nan());
        assert!(p.snan.is_nan());
        // Quiet bit is the top mantissa bit.
        assert_ne!(p.nan.to_bits() & 0x0040_0000, 0);
        assert_eq!(p.snan.to_bits() & 0x0040_0000, 0);

        let d = FloatTypeProperties::<f64>::of();
        assert!(d.snan.is_nan());
        assert_eq!(d.snan.to_bits() & 0x0008_0000_0000_0000, 0);
    }

    #[test]
    fn every_category_is_populated() {
        let props = FloatProperties::host();
        assert!(props.single.max.is_finite());
        assert!(props.double.max.is_finite());
        assert!(props.extended.max.is_finite());
        // NaN fields never compare equal, so compare the finite ones.
        assert_eq!(props.extended.max, props.double.max);
        assert_eq!(props.extended.mant_dig, props.double.mant_dig);
    }

    #[test]
    fn json_keeps_nan_payloads() {
        let value = serde_json::to_value(FloatProperties::host()).unwrap();
        for category in ["single", "double", "extended"] {
            let p = &value[category];
            for field in ["nan", "snan", "infinity"] {
                assert!(p[field].is_string(), "{category}.{field}");
            }
            assert_ne!(p["nan"], p["snan"], "{category}");
        }
        assert_eq!(value["single"]["snan"], "0x7FA00000");
        assert_eq!(value["single"]["infinity"], "0x7F800000");
        assert_eq!(value["double"]["snan"], "0x7FF4000000000000");
        assert_eq!(value["extended"]["infinity"], "0x7FF0000000000000");
        assert_eq!(value["single"]["mant-dig"], 24);
    }

    #[test]
    fn toml_keeps_nan_payloads() {
        let text = toml::to_string(&FloatTypeProperties::<f32>::of()).unwrap();
        assert!(text.contains("snan = \"0x7FA00000\""));
        assert!(text.contains("infinity = \"0x7F800000\""));
        assert!(!text.contains("= nan"));
    }
}
