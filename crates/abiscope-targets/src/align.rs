//! Memory alignment of basic types.

use abiscope_core::{BasicType, TypeRef};

use crate::abi::AbiFacts;
use crate::config::TargetConfig;
use crate::error::{Result, TargetError};

/// Required memory alignment of a basic type.
///
/// Types without a target-specific rule are aligned to their own size.
pub fn alignment_of(config: &TargetConfig, facts: &AbiFacts, ty: BasicType) -> u32 {
    use BasicType::*;
    let posix = config.os.is_posix();
    match ty {
        Float80 | Imaginary80 | Complex80 => return facts.real.alignment,
        Complex32 if posix => return 4,
        Int64 | Uns64 | Float64 | Imaginary64 | Complex64 if posix => {
            return if config.is_64bit { 8 } else { 4 };
        }
        _ => {}
    }
    ty.size_with_real(facts.real.size)
}

/// Alignment of an arbitrary type reference.
///
/// Only basic types have a target-defined alignment; asking for anything
/// else is an internal error.
pub fn alignment_of_type(config: &TargetConfig, facts: &AbiFacts, ty: &TypeRef) -> Result<u32> {
    match ty {
        TypeRef::Basic(basic) => Ok(alignment_of(config, facts, *basic)),
        other => Err(TargetError::NotBasic { ty: other.clone() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OsFamily;

    fn align(config: TargetConfig, ty: BasicType) -> u32 {
        alignment_of(&config, &AbiFacts::resolve(&config), ty)
    }

    #[test]
    fn extended_follows_real_layout() {
        assert_eq!(align(TargetConfig::lp64(OsFamily::Linux), BasicType::Float80), 16);
        assert_eq!(align(TargetConfig::ilp32(OsFamily::Linux), BasicType::Complex80), 4);
        assert_eq!(align(TargetConfig::ilp32(OsFamily::Windows), BasicType::Imaginary80), 2);
        assert_eq!(align(TargetConfig::ilp32(OsFamily::MacOS), BasicType::Float80), 16);
    }

    #[test]
    fn complex32_on_posix_and_windows() {
        assert_eq!(align(TargetConfig::lp64(OsFamily::Solaris), BasicType::Complex32), 4);
        assert_eq!(align(TargetConfig::ilp32(OsFamily::MacOS), BasicType::Complex32), 4);
        assert_eq!(align(TargetConfig::lp64(OsFamily::Windows), BasicType::Complex32), 8);
    }

    #[test]
    fn eight_byte_types_depend_on_bitness() {
        for ty in [
            BasicType::Int64,
            BasicType::Uns64,
            BasicType::Float64,
            BasicType::Imaginary64,
            BasicType::Complex64,
        ] {
            assert_eq!(align(TargetConfig::lp64(OsFamily::Linux), ty), 8, "{ty}");
            assert_eq!(align(TargetConfig::ilp32(OsFamily::Linux), ty), 4, "{ty}");
            assert_eq!(align(TargetConfig::ilp32(OsFamily::OpenBSD), ty), 4, "{ty}");
        }
        assert_eq!(align(TargetConfig::ilp32(OsFamily::Windows), BasicType::Int64), 8);
        assert_eq!(align(TargetConfig::ilp32(OsFamily::Windows), BasicType::Complex64), 16);
    }

    #[test]
    fn everything_else_is_natural() {
        let cfg = TargetConfig::lp64(OsFamily::Linux);
        assert_eq!(align(cfg, BasicType::Void), 1);
        assert_eq!(align(cfg, BasicType::Wchar), 2);
        assert_eq!(align(cfg, BasicType::Int32), 4);
        assert_eq!(align(cfg, BasicType::Float32), 4);
        assert_eq!(align(cfg, BasicType::Int128), 16);
    }

    #[test]
    fn non_basic_types_are_rejected() {
        let cfg = TargetConfig::lp64(OsFamily::Linux);
        let facts = AbiFacts::resolve(&cfg);
        let ptr = TypeRef::Basic(BasicType::Char).pointer_to();
        let err = alignment_of_type(&cfg, &facts, &ptr).unwrap_err();
        assert!(matches!(err, TargetError::NotBasic { .. }));
        assert!(err.to_string().contains("char*"));
        assert_eq!(
            alignment_of_type(&cfg, &facts, &BasicType::Uns16.into()).unwrap(),
            2
        );
    }
}
