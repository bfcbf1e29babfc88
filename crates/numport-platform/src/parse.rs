//! TOML parsing, serialization, validation, and discovery for target profiles.
//!
//! Target profiles are stored as `.target.toml` files in the `targets/`
//! directory of a project. This module loads, validates, serializes and
//! discovers them.

use std::path::{Path, PathBuf};

use crate::error::{PlatformError, Result};
use crate::target::{DataModel, Endianness, TargetProfile};

/// How serious a validation finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// A validation issue found in a target profile.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    /// Whether the issue makes the profile unusable.
    pub severity: Severity,
    /// Human-readable description.
    pub message: String,
}

/// Load a target profile from a `.target.toml` file.
pub fn load_target_toml(path: &Path) -> Result<TargetProfile> {
    if !path.exists() {
        return Err(PlatformError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let content = std::fs::read_to_string(path)?;
    parse_target_toml(&content)
}

/// Parse a target profile from a TOML string.
pub fn parse_target_toml(toml_str: &str) -> Result<TargetProfile> {
    let target: TargetProfile = toml::from_str(toml_str)?;
    Ok(target)
}

/// Serialize a target profile to pretty TOML.
pub fn target_to_toml(target: &TargetProfile) -> Result<String> {
    let toml_str = toml::to_string_pretty(target)?;
    Ok(toml_str)
}

/// Serialize a target profile to pretty JSON.
pub fn target_to_json(target: &TargetProfile) -> Result<String> {
    let json = serde_json::to_string_pretty(target)?;
    Ok(json)
}

/// Validate a target profile.
///
/// Returns `Ok(())` when there is nothing to report, or `Err(issues)`
/// otherwise. Only issues of [`Severity::Error`] make a profile unusable.
pub fn validate_target(target: &TargetProfile) -> std::result::Result<(), Vec<ValidationIssue>> {
    let mut issues = Vec::new();

    if target.name.trim().is_empty() {
        issues.push(ValidationIssue {
            severity: Severity::Error,
            message: "target name is empty".into(),
        });
    }

    // Same sentinel rule as the host profile.
    let w = &target.widths;
    issues.extend(w.width_errors().into_iter().map(|err| ValidationIssue {
        severity: Severity::Error,
        message: err.to_string(),
    }));

    if w.size_width != w.address_width {
        issues.push(ValidationIssue {
            severity: Severity::Warning,
            message: format!(
                "size width ({} bytes) differs from intptr width ({} bytes)",
                w.size_width, w.address_width
            ),
        });
    }

    if let Some(model) = target.data_model {
        if model.profile() != *w {
            issues.push(ValidationIssue {
                severity: Severity::Warning,
                message: format!(
                    "declared data model {model} expects {}, found {w}",
                    model.profile()
                ),
            });
        }
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}

/// True if none of the issues is an error.
pub fn only_warnings(issues: &[ValidationIssue]) -> bool {
    issues.iter().all(|i| i.severity == Severity::Warning)
}

/// Generate a template `.target.toml` for a new target.
pub fn generate_template(name: &str, model: DataModel) -> Result<String> {
    let target = TargetProfile::from_model(
        name,
        format!("Custom {model} target"),
        model,
        Endianness::Little,
    );
    target_to_toml(&target)
}

/// Find the `.target.toml` files under `<project_dir>/targets/`.
///
/// Returns (target name, path) pairs sorted by name. A project without a
/// `targets/` directory has no targets.
pub fn discover_targets(project_dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    let dir = project_dir.join("targets");
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut found = Vec::new();
    for entry in std::fs::read_dir(&dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let stem = path
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(|n| n.strip_suffix(".target.toml"))
            .filter(|stem| !stem.is_empty())
            .map(str::to_owned);
        if let Some(stem) = stem {
            found.push((stem, path));
        }
    }
    found.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));
    Ok(found)
}
