//! `numport target`: target profile listing, description and validation.

use std::path::Path;

use anyhow::{bail, Result};

use numport_platform::parse::{
    generate_template, only_warnings, target_to_json, target_to_toml, validate_target, Severity,
};
use numport_platform::{DataModel, TargetProfile};

use super::OutputFormat;
use crate::catalog::{all_targets, resolve_target};

/// List built-in targets and those defined under `targets/`.
pub fn list(project_dir: Option<&Path>) -> Result<()> {
    println!("Available targets:");
    println!();
    for (name, description, source) in all_targets(project_dir)? {
        if source == "built-in" {
            println!("  {name:<20} {description}");
        } else {
            println!("  {name:<20} {description} [{source}]");
        }
    }
    println!();
    println!("Use 'numport target describe <name>' for details.");
    Ok(())
}

/// Describe a target profile.
pub fn describe(name: &str, project_dir: Option<&Path>, format: Option<&str>) -> Result<()> {
    let target = resolve_target(name, project_dir)?;
    match OutputFormat::parse(format)? {
        OutputFormat::Text => print!("{}", render(&target)),
        OutputFormat::Toml => print!("{}", target_to_toml(&target)?),
        OutputFormat::Json => println!("{}", target_to_json(&target)?),
    }
    Ok(())
}

/// Human-readable description of a target's widths and derived types.
pub fn render(target: &TargetProfile) -> String {
    let w = &target.widths;
    let mut lines = vec![format!("=== Target: {} ===", target.name)];
    if !target.description.is_empty() {
        lines.push(target.description.clone());
    }
    let model = target.data_model.map(|m| m.name()).unwrap_or("custom");
    lines.extend([
        format!("Data model: {model}"),
        format!("Endianness: {:?}", target.endianness),
        String::new(),
        "--- Widths ---".to_string(),
        format!("  long:         {} bytes", w.long_width),
        format!("  intptr:       {} bytes", w.address_width),
        format!("  size:         {} bytes", w.size_width),
        format!("  fn pointer:   {} bytes", w.function_pointer_width()),
        String::new(),
        "--- Derived ---".to_string(),
        format!("  natural word: {} bits", w.natural_bits()),
        format!(
            "  signed size:  {}..={}",
            w.signed_size_min(),
            w.signed_size_max()
        ),
    ]);
    lines.join("\n") + "\n"
}

/// Write a template `targets/<name>.target.toml`.
pub fn add(name: &str, project_dir: &Path, model: Option<&str>) -> Result<()> {
    if name.is_empty() || name.contains(['/', '\\']) || name == "host" {
        bail!("invalid target name: '{name}'");
    }
    let model: DataModel = model.unwrap_or("lp64").parse()?;

    let targets_dir = project_dir.join("targets");
    let path = targets_dir.join(format!("{name}.target.toml"));
    if path.exists() {
        bail!("target '{name}' already exists at {}", path.display());
    }
    std::fs::create_dir_all(&targets_dir)?;
    std::fs::write(&path, generate_template(name, model)?)?;
    println!("Created {}", path.display());
    Ok(())
}

/// Validate a target profile, failing if any issue is an error.
pub fn validate(name: &str, project_dir: Option<&Path>) -> Result<()> {
    let target = resolve_target(name, project_dir)?;
    match validate_target(&target) {
        Ok(()) => {
            println!("target '{name}': ok");
            Ok(())
        }
        Err(issues) => {
            for issue in &issues {
                let label = match issue.severity {
                    Severity::Error => "error",
                    Severity::Warning => "warning",
                };
                println!("  {label}: {}", issue.message);
            }
            if only_warnings(&issues) {
                println!("target '{name}': ok ({} warnings)", issues.len());
                Ok(())
            } else {
                bail!("target '{name}' failed validation")
            }
        }
    }
}
