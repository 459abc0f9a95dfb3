//! `abiscope paint`: reinterpret a literal's bits as another type.

use anyhow::{bail, Context, Result};
use abiscope_core::BasicType;
use abiscope_ctfe::{paint_as, ConstantValue};

pub fn run(value: &str, from: &str, to: &str) -> Result<()> {
    let from: BasicType = from.parse()?;
    let to: BasicType = to.parse()?;
    let source = parse_literal(value, from)?;
    let painted = paint_as(&source, to)?;
    println!("{source} ({from}) -> {painted} ({to})");
    println!("bits: {}", hex_bits(&painted));
    Ok(())
}

/// Parse `text` as a constant of type `ty`.
///
/// Integers accept decimal or `0x` hex; hex is taken as the raw bit pattern.
fn parse_literal(text: &str, ty: BasicType) -> Result<ConstantValue> {
    let text = text.trim();
    match ty {
        BasicType::Int32 | BasicType::Uns32 | BasicType::Int64 | BasicType::Uns64 => {
            let raw = parse_integer_bits(text, ty)?;
            Ok(ConstantValue::integer(ty, raw)?)
        }
        BasicType::Float32 => {
            let v: f32 = text
                .parse()
                .with_context(|| format!("'{text}' is not a float32 literal"))?;
            Ok(ConstantValue::float32(v))
        }
        BasicType::Float64 => {
            let v: f64 = text
                .parse()
                .with_context(|| format!("'{text}' is not a float64 literal"))?;
            Ok(ConstantValue::float64(v))
        }
        other => bail!(
            "cannot paint from {other}; expected int32, uns32, int64, uns64, float32 or float64"
        ),
    }
}

fn parse_integer_bits(text: &str, ty: BasicType) -> Result<u64> {
    let hex = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"));
    if let Some(digits) = hex {
        let raw = u64::from_str_radix(&digits.replace('_', ""), 16)
            .with_context(|| format!("'{text}' is not a hex literal"))?;
        if ty.natural_size() == Some(4) && raw > u64::from(u32::MAX) {
            bail!("'{text}' does not fit in {ty}");
        }
        return Ok(raw);
    }

    let digits = text.replace('_', "");
    let raw = match ty {
        BasicType::Int32 => digits.parse::<i32>().map(|v| v as i64 as u64),
        BasicType::Uns32 => digits.parse::<u32>().map(u64::from),
        BasicType::Int64 => digits.parse::<i64>().map(|v| v as u64),
        _ => digits.parse::<u64>(),
    };
    raw.with_context(|| format!("'{text}' is not a valid {ty} literal"))
}

fn hex_bits(value: &ConstantValue) -> String {
    let (bits, width) = match value {
        ConstantValue::Integer(i) => (i.to_u64(), i.size() as usize * 2),
        ConstantValue::Float(f) => (f.bits(), f.size() as usize * 2),
    };
    let bits = if width == 8 { bits & 0xFFFF_FFFF } else { bits };
    format!("0x{bits:0width$X}")
}
