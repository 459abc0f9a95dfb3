//! `abiscope vector`: check a `__vector(T[N])` type against a target.

use std::path::Path;

use anyhow::{bail, Result};
use abiscope_core::BasicType;
use abiscope_targets::{Target, VectorCheck};

use super::select_target;

pub fn run(size: u64, element: &str, name: Option<&str>, config: Option<&Path>) -> Result<()> {
    let element: BasicType = element.parse()?;
    let target = Target::new(select_target(name, config)?);
    let verdict = check(&target, size, element);
    println!(
        "__vector({element}[{size}]) on {}: {verdict} (code {})",
        target.config(),
        verdict.code()
    );
    if !verdict.is_ok() {
        bail!("illegal vector type");
    }
    Ok(())
}

fn check(target: &Target, size: u64, element: BasicType) -> VectorCheck {
    let verdict = target.check_vector_type(size, element);
    log::debug!("vector {size}x{element}: {verdict:?}");
    verdict
}

#[cfg(test)]
mod tests {
    use super::*;
    use abiscope_targets::presets::require_preset;

    #[test]
    fn verdicts_per_target() {
        let linux = Target::new(require_preset("linux-x86_64").unwrap());
        assert_eq!(check(&linux, 16, BasicType::Float32), VectorCheck::Ok);
        assert_eq!(check(&linux, 8, BasicType::Float32), VectorCheck::WrongSize);
        assert_eq!(check(&linux, 16, BasicType::Float80), VectorCheck::WrongBaseType);

        let win32 = Target::new(require_preset("windows-x86").unwrap());
        assert_eq!(check(&win32, 16, BasicType::Int32), VectorCheck::UnsupportedPlatform);
    }

    #[test]
    fn run_fails_on_illegal_vector() {
        assert!(run(16, "int32", Some("macos-x86"), None).is_ok());
        assert!(run(16, "bool", Some("linux-x86_64"), None).is_err());
        assert!(run(16, "int32", Some("linux-x86"), None).is_err());
    }
}
