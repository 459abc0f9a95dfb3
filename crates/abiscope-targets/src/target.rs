//! The per-session target descriptor.
//!
//! A [`Target`] is resolved once from a [`TargetConfig`] before any phase
//! that depends on it runs, then shared by reference. It owns no interior
//! mutability, so concurrent readers need no locking.

use serde::Serialize;

use abiscope_core::{BasicType, Linkage, TypeRef};

use crate::abi::AbiFacts;
use crate::align;
use crate::config::TargetConfig;
use crate::error::Result;
use crate::float::FloatProperties;
use crate::linkage::{self, CppMangler, ForeignLinkage, ManglingScheme};
use crate::sync;
use crate::valist;
use crate::vector::{self, VectorCheck};

/// Resolved ABI description of the compilation target.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Target {
    config: TargetConfig,
    facts: AbiFacts,
    float: FloatProperties,
}

impl Target {
    /// Resolve every ABI fact for `config`.
    pub fn new(config: TargetConfig) -> Self {
        let facts = AbiFacts::resolve(&config);
        log::debug!(
            "resolved target {config}: pointer size {}, real {}/{}/{}",
            facts.pointer_size,
            facts.real.size,
            facts.real.padding,
            facts.real.alignment
        );
        Self {
            config,
            facts,
            float: FloatProperties::host(),
        }
    }

    pub fn config(&self) -> &TargetConfig {
        &self.config
    }

    pub fn facts(&self) -> &AbiFacts {
        &self.facts
    }

    pub fn float_properties(&self) -> &FloatProperties {
        &self.float
    }

    pub fn pointer_size(&self) -> u32 {
        self.facts.pointer_size
    }

    /// Size in bytes of a basic type on this target.
    pub fn size_of(&self, ty: BasicType) -> u32 {
        ty.size_with_real(self.facts.real.size)
    }

    /// Memory alignment of a basic type.
    pub fn alignment_of(&self, ty: BasicType) -> u32 {
        align::alignment_of(&self.config, &self.facts, ty)
    }

    /// Memory alignment of a type reference; errors for non-basic types.
    pub fn alignment_of_type(&self, ty: &TypeRef) -> Result<u32> {
        align::alignment_of_type(&self.config, &self.facts, ty)
    }

    /// Alignment of a basic type used as an aggregate field.
    pub fn field_alignment(&self, ty: BasicType) -> u32 {
        self.alignment_of(ty)
    }

    /// Size of the OS critical section / mutex.
    pub fn critical_section_size(&self) -> u32 {
        sync::critical_section_size(&self.config)
    }

    /// Type used to pass a `va_list` argument.
    pub fn va_list_type(&self) -> TypeRef {
        valist::va_list_type(&self.config)
    }

    /// Legality of a vector type of `size` bytes of `element`.
    pub fn check_vector_type(&self, size: u64, element: BasicType) -> VectorCheck {
        vector::check_vector_type(&self.config, size, element)
    }

    /// Default linkage for `extern(System)`.
    pub fn system_linkage(&self) -> Linkage {
        self.facts.system_linkage
    }

    pub fn mangling_scheme(&self) -> ManglingScheme {
        ManglingScheme::for_os(self.config.os)
    }

    /// Select the C++ mangler matching this target.
    pub fn foreign_linkage<'m, S: ?Sized>(
        &self,
        itanium: &'m dyn CppMangler<S>,
        msvc: &'m dyn CppMangler<S>,
    ) -> ForeignLinkage<'m, S> {
        ForeignLinkage::select(&self.config, itanium, msvc)
    }

    /// Apply the target's symbol prefix for `linkage`.
    pub fn prefix_name(&self, buf: &mut Vec<u8>, linkage: Linkage) {
        linkage::prefix_name(&self.config, buf, linkage)
    }

    /// Vendor-specific C++ mangling of a basic type, if any.
    pub fn cpp_type_mangle(&self, ty: BasicType) -> Option<String> {
        linkage::cpp_type_mangle(&self.config, ty)
    }
}

impl From<TargetConfig> for Target {
    fn from(config: TargetConfig) -> Self {
        Self::new(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abi::ExtendedFloatLayout;
    use crate::config::OsFamily;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn target_is_shareable() {
        assert_send_sync::<Target>();
    }

    #[test]
    fn linux_x86_64_snapshot() {
        let t = Target::new(TargetConfig::lp64(OsFamily::Linux));
        assert_eq!(t.pointer_size(), 8);
        assert_eq!(t.facts().real, ExtendedFloatLayout::new(16, 6, 16));
        assert_eq!(t.size_of(BasicType::Complex80), 32);
        assert_eq!(t.alignment_of(BasicType::Float64), 8);
        assert_eq!(t.field_alignment(BasicType::Float80), 16);
        assert_eq!(t.critical_section_size(), 40);
        assert_eq!(t.va_list_type().to_string(), "__va_list_tag*");
        assert_eq!(t.system_linkage(), Linkage::C);
        assert_eq!(t.mangling_scheme(), ManglingScheme::Itanium);
        assert!(t.check_vector_type(16, BasicType::Int32).is_ok());
        assert_eq!(t.float_properties().double.mant_dig, 53);
    }

    #[test]
    fn windows_x86_snapshot() {
        let t = Target::from(TargetConfig::ilp32(OsFamily::Windows));
        assert_eq!(t.pointer_size(), 4);
        assert_eq!(t.facts().max_static_data_size, 0x100_0000);
        assert!(t.facts().reverse_cpp_overloads);
        assert_eq!(t.size_of(BasicType::Float80), 10);
        assert_eq!(t.critical_section_size(), 24);
        assert_eq!(t.va_list_type().to_string(), "char*");
        assert_eq!(t.system_linkage(), Linkage::Windows);
        assert_eq!(t.mangling_scheme(), ManglingScheme::Msvc);
        assert_eq!(t.check_vector_type(16, BasicType::Int32).code(), 1);
    }

    #[test]
    fn macos_prefix_through_snapshot() {
        let t = Target::new(TargetConfig::lp64(OsFamily::MacOS));
        let mut buf = b"_ZN3foo3barEv".to_vec();
        t.prefix_name(&mut buf, Linkage::Cpp);
        assert_eq!(buf.first(), Some(&b'_'));
        assert_eq!(buf.len(), 14);
        assert!(t.cpp_type_mangle(BasicType::Int32).is_none());
    }

    #[test]
    fn snapshot_serializes() {
        let t = Target::new(TargetConfig::lp64(OsFamily::FreeBSD));
        let json = serde_json::to_value(&t).unwrap();
        assert_eq!(json["config"]["os"], "freebsd");
        assert_eq!(json["facts"]["pointer-size"], 8);
        assert_eq!(json["facts"]["real"]["alignment"], 16);
    }

    #[test]
    fn alignment_of_pointer_type_is_an_error() {
        let t = Target::new(TargetConfig::lp64(OsFamily::Linux));
        assert!(t.alignment_of_type(&t.va_list_type()).is_err());
        assert_eq!(t.alignment_of_type(&BasicType::Int64.into()).unwrap(), 8);
    }
}
