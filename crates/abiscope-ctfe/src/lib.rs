//! Compile-time constant reinterpretation.
//!
//! The compile-time evaluator uses [`paint_as`] to emulate `*cast(T*)&x`:
//! the bit pattern of a 32- or 64-bit integer or float constant is viewed
//! as another type of the same size, without numeric conversion.

pub mod error;
pub mod paint;
pub mod value;

pub use error::{PaintError, Result};
pub use paint::paint_as;
pub use value::{ConstantValue, FloatConst, IntegerConst};
