//! The variadic argument cursor type.

use abiscope_core::{BasicType, TypeRef};

use crate::config::TargetConfig;

/// Tag name of the x86-64 System V `va_list` element struct.
pub const VA_LIST_TAG: &str = "__va_list_tag";

/// The type used to pass a `va_list` argument on the target.
///
/// On 64-bit POSIX targets `va_list` is a one-element array of
/// `__va_list_tag`, so what is actually passed is a pointer to that tag.
pub fn va_list_type(config: &TargetConfig) -> TypeRef {
    if config.os.is_posix() && config.is_64bit {
        TypeRef::named(VA_LIST_TAG).pointer_to()
    } else {
        TypeRef::Basic(BasicType::Char).pointer_to()
    }
}
