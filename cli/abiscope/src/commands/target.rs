//! `abiscope list`, `describe`, `validate`, `template`.

use std::fmt::{self, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use abiscope_core::BasicType;
use abiscope_targets::float::HostFloat;
use abiscope_targets::parse::{generate_template, load_config_toml, validate_config};
use abiscope_targets::presets::builtin_targets;
use abiscope_targets::{FloatTypeProperties, Target};

use super::select_target;

/// Output format for `describe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Human,
    Toml,
    Json,
}

impl Format {
    fn parse(name: Option<&str>) -> Result<Self> {
        match name.unwrap_or("human") {
            "human" => Ok(Format::Human),
            "toml" => Ok(Format::Toml),
            "json" => Ok(Format::Json),
            other => bail!("unknown format '{other}' (expected human, toml, or json)"),
        }
    }
}

/// List all built-in target presets.
pub fn list() -> Result<()> {
    println!("Built-in targets:");
    println!();
    for (name, description) in builtin_targets() {
        println!("  {name:<22} {description}");
    }
    println!();
    println!("Use 'abiscope describe <name>' for details.");
    Ok(())
}

/// Describe a target's resolved ABI facts.
pub fn describe(name: Option<&str>, config: Option<&Path>, format: Option<&str>) -> Result<()> {
    let format = Format::parse(format)?;
    let target = Target::new(select_target(name, config)?);
    print!("{}", render(&target, format)?);
    Ok(())
}

fn render(target: &Target, format: Format) -> Result<String> {
    match format {
        Format::Human => render_human(target).context("formatting target description"),
        Format::Toml => toml::to_string_pretty(target).context("serializing target as TOML"),
        Format::Json => {
            let mut out =
                serde_json::to_string_pretty(target).context("serializing target as JSON")?;
            out.push('\n');
            Ok(out)
        }
    }
}

fn render_human(target: &Target) -> Result<String, fmt::Error> {
    let facts = target.facts();
    let mut out = String::new();
    writeln!(out, "=== Target: {} ===", target.config())?;
    writeln!(out)?;

    writeln!(out, "--- ABI ---")?;
    writeln!(out, "  Pointer size:        {} bytes", facts.pointer_size)?;
    writeln!(out, "  C long:              {} bytes", facts.c_long_size)?;
    writeln!(out, "  C long double:       {} bytes", facts.c_long_double_size)?;
    writeln!(
        out,
        "  real:                size {}, padding {}, align {}",
        facts.real.size, facts.real.padding, facts.real.alignment
    )?;
    writeln!(out, "  ClassInfo size:      0x{:X}", facts.class_info_size)?;
    writeln!(out, "  Max static data:     0x{:X}", facts.max_static_data_size)?;
    writeln!(out, "  Critical section:    {} bytes", target.critical_section_size())?;
    writeln!(out, "  va_list:             {}", target.va_list_type())?;
    writeln!(out)?;

    writeln!(out, "--- Linkage ---")?;
    writeln!(out, "  extern(System):      {}", target.system_linkage())?;
    writeln!(out, "  C++ mangling:        {}", target.mangling_scheme())?;
    writeln!(out, "  C++ exceptions:      {}", yes_no(facts.cpp_exceptions))?;
    writeln!(out, "  Reverse overloads:   {}", yes_no(facts.reverse_cpp_overloads))?;
    writeln!(out)?;

    writeln!(out, "--- Alignment ---")?;
    for ty in BasicType::ALL {
        if ty == BasicType::Void {
            continue;
        }
        writeln!(
            out,
            "  {:<12} size {:>2}  align {:>2}",
            ty.name(),
            target.size_of(ty),
            target.alignment_of(ty)
        )?;
    }
    writeln!(out)?;

    writeln!(out, "--- Floating point ---")?;
    let float = target.float_properties();
    float_row(&mut out, "float", &float.single)?;
    float_row(&mut out, "double", &float.double)?;
    float_row(&mut out, "real", &float.extended)?;
    Ok(out)
}

fn float_row<T: HostFloat>(
    out: &mut String,
    name: &str,
    p: &FloatTypeProperties<T>,
) -> fmt::Result {
    writeln!(
        out,
        "  {name:<7} dig {:>2}  mant_dig {:>2}  exp [{}, {}]  max {:?}  epsilon {:?}  snan {}",
        p.dig,
        p.mant_dig,
        p.min_exp,
        p.max_exp,
        p.max,
        p.epsilon,
        p.snan.bits_hex()
    )
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

/// Validate a `.target.toml` file and report any issues.
pub fn validate(path: &Path) -> Result<()> {
    let config = load_config_toml(path).with_context(|| format!("loading {}", path.display()))?;
    match validate_config(&config) {
        Ok(()) => {
            println!("{}: ok ({config})", path.display());
            Ok(())
        }
        Err(issues) => {
            for issue in &issues {
                println!("{}: {issue}", path.display());
            }
            Ok(())
        }
    }
}

/// Print a `.target.toml` seeded from a preset.
pub fn template(name: &str) -> Result<()> {
    let toml_str = generate_template(name)?;
    print!("{toml_str}");
    Ok(())
}
