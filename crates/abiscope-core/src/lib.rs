//! Shared vocabulary for the abiscope crates.
//!
//! Defines the basic scalar type tags that ABI queries are keyed by, the
//! small type-reference language used to describe ABI-visible types such as
//! the variadic argument cursor, and the linkage kinds a symbol can carry.

pub mod types;

pub use types::{BasicType, FloatPrecision, Linkage, ParseError, Signedness, TypeRef};
