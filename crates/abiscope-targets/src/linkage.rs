//! Foreign (C++) linkage.
//!
//! The two C++ mangling algorithms live outside this crate and are plugged in
//! through [`CppMangler`]. The target picks which one applies; this module only
//! dispatches and applies the platform's symbol prefix.

use std::fmt;

use serde::{Deserialize, Serialize};

use abiscope_core::{BasicType, Linkage};

use crate::config::{OsFamily, TargetConfig};

/// The C++ name-mangling family used by the platform toolchain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ManglingScheme {
    /// Itanium C++ ABI (GCC, Clang).
    Itanium,
    /// Microsoft Visual C++.
    Msvc,
}

impl ManglingScheme {
    pub fn for_os(os: OsFamily) -> Self {
        match os {
            OsFamily::Windows => ManglingScheme::Msvc,
            OsFamily::Linux
            | OsFamily::MacOS
            | OsFamily::FreeBSD
            | OsFamily::OpenBSD
            | OsFamily::DragonFlyBSD
            | OsFamily::Solaris => ManglingScheme::Itanium,
        }
    }
}

impl fmt::Display for ManglingScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManglingScheme::Itanium => f.write_str("itanium"),
            ManglingScheme::Msvc => f.write_str("msvc"),
        }
    }
}

/// A C++ name-mangling algorithm over the front end's symbol type `S`.
pub trait CppMangler<S: ?Sized> {
    /// Mangled name of a symbol with C++ linkage.
    fn mangle(&self, symbol: &S) -> String;

    /// Mangled name of a class's C++ type-info object.
    fn mangle_type_info(&self, class: &S) -> String;
}

/// The mangler selected for the target.
pub struct ForeignLinkage<'m, S: ?Sized> {
    scheme: ManglingScheme,
    mangler: &'m dyn CppMangler<S>,
}

impl<'m, S: ?Sized> ForeignLinkage<'m, S> {
    /// Choose between the two mangling families once, from the target OS.
    pub fn select(
        config: &TargetConfig,
        itanium: &'m dyn CppMangler<S>,
        msvc: &'m dyn CppMangler<S>,
    ) -> Self {
        let scheme = ManglingScheme::for_os(config.os);
        let mangler = match scheme {
            ManglingScheme::Itanium => itanium,
            ManglingScheme::Msvc => msvc,
        };
        Self { scheme, mangler }
    }

    pub fn scheme(&self) -> ManglingScheme {
        self.scheme
    }

    pub fn mangle(&self, symbol: &S) -> String {
        self.mangler.mangle(symbol)
    }

    pub fn mangle_type_info(&self, class: &S) -> String {
        self.mangler.mangle_type_info(class)
    }
}

impl<S: ?Sized> fmt::Debug for ForeignLinkage<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForeignLinkage")
            .field("scheme", &self.scheme)
            .finish_non_exhaustive()
    }
}

/// Apply the target's symbol prefix for `linkage` to an already-mangled name.
///
/// Mach-O prefixes C++ symbols with an underscore.
pub fn prefix_name(config: &TargetConfig, buf: &mut Vec<u8>, linkage: Linkage) {
    if linkage == Linkage::Cpp && config.os == OsFamily::MacOS {
        buf.insert(0, b'_');
    }
}

/// C++ mangling for vendor-specific types.
///
/// No target defines any, so this is always `None` and the generic mangler
/// handles every type.
pub fn cpp_type_mangle(_config: &TargetConfig, _ty: BasicType) -> Option<String> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(&'static str);

    impl CppMangler<str> for Fixed {
        fn mangle(&self, symbol: &str) -> String {
            format!("{}:{symbol}", self.0)
        }

        fn mangle_type_info(&self, class: &str) -> String {
            format!("{}:typeinfo:{class}", self.0)
        }
    }

    #[test]
    fn scheme_per_family() {
        assert_eq!(ManglingScheme::for_os(OsFamily::Windows), ManglingScheme::Msvc);
        for os in OsFamily::ALL.into_iter().filter(|os| os.is_posix()) {
            assert_eq!(ManglingScheme::for_os(os), ManglingScheme::Itanium, "{os}");
        }
    }

    #[test]
    fn dispatches_to_selected_mangler() {
        let itanium = Fixed("itanium");
        let msvc = Fixed("msvc");

        let linux_cfg = TargetConfig::lp64(OsFamily::Linux);
        let linux = ForeignLinkage::<str>::select(&linux_cfg, &itanium, &msvc);
        assert_eq!(linux.scheme(), ManglingScheme::Itanium);
        assert_eq!(linux.mangle("foo"), "itanium:foo");
        assert_eq!(linux.mangle_type_info("Base"), "itanium:typeinfo:Base");

        let win_cfg = TargetConfig::ilp32(OsFamily::Windows);
        let win = ForeignLinkage::<str>::select(&win_cfg, &itanium, &msvc);
        assert_eq!(win.scheme(), ManglingScheme::Msvc);
        assert_eq!(win.mangle("foo"), "msvc:foo");
    }

    #[test]
    fn macos_prefixes_cpp_symbols() {
        let mut buf = b"_Z3foov".to_vec();
        prefix_name(&TargetConfig::lp64(OsFamily::MacOS), &mut buf, Linkage::Cpp);
        assert_eq!(buf, b"__Z3foov");
    }

    #[test]
    fn other_linkages_and_targets_are_untouched() {
        let mut buf = b"foo".to_vec();
        prefix_name(&TargetConfig::lp64(OsFamily::MacOS), &mut buf, Linkage::C);
        prefix_name(&TargetConfig::lp64(OsFamily::Linux), &mut buf, Linkage::Cpp);
        prefix_name(&TargetConfig::ilp32(OsFamily::Windows), &mut buf, Linkage::Cpp);
        assert_eq!(buf, b"foo");
    }

    #[test]
    fn no_vendor_types() {
        let cfg = TargetConfig::lp64(OsFamily::Linux);
        assert!(BasicType::ALL
            .into_iter()
            .all(|t| cpp_type_mangle(&cfg, t).is_none()));
    }
}
