//! Target ABI descriptor for the abiscope compiler toolchain.
//!
//! Resolves, once per compilation session, the binary-layout facts later
//! phases depend on:
//! - **ABI facts:** pointer and `long` sizes, extended-float layout, class
//!   metadata size, static data cap ([`abi`])
//! - **Float properties:** `.max`/`.epsilon`-style constants per category ([`float`])
//! - **Alignment, mutex size, `va_list`, vector legality** ([`align`], [`sync`],
//!   [`valist`], [`vector`])
//! - **Foreign linkage:** C++ mangler selection and symbol prefixes ([`linkage`])
//!
//! [`Target`] bundles all of it into one immutable snapshot.

pub mod abi;
pub mod align;
pub mod config;
pub mod error;
pub mod float;
pub mod linkage;
pub mod parse;
pub mod presets;
pub mod sync;
pub mod target;
pub mod valist;
pub mod vector;

pub use abi::{AbiFacts, ExtendedFloatLayout};
pub use config::{OsFamily, TargetConfig};
pub use error::{Result, TargetError};
pub use float::{FloatProperties, FloatTypeProperties};
pub use linkage::{CppMangler, ForeignLinkage, ManglingScheme};
pub use target::Target;
pub use vector::VectorCheck;
