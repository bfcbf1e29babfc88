//! `numport.toml` project manifest and target lookup.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use numport_platform::parse::{discover_targets, load_target_toml};
use numport_platform::target::{builtin_target, builtin_targets};
use numport_platform::TargetProfile;

/// The top-level manifest of a numport project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NumportManifest {
    /// Project metadata (required).
    pub project: ProjectConfig,
    /// Target configuration.
    #[serde(default)]
    pub targets: Option<TargetsConfig>,
}

/// Project metadata section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Project name.
    pub name: String,
    /// Project version.
    #[serde(default = "default_version")]
    pub version: String,
}

fn default_version() -> String {
    "0.1.0".to_string()
}

/// Targets configuration section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetsConfig {
    /// Target used when a command is not given one.
    #[serde(default)]
    pub default: Option<String>,
}

impl NumportManifest {
    /// Search upward from `start_dir` for a `numport.toml` file, parse and
    /// return it along with the directory it was found in.
    pub fn find_and_load(start_dir: &Path) -> Result<Option<(Self, PathBuf)>> {
        let mut dir = start_dir.to_path_buf();
        loop {
            let candidate = dir.join("numport.toml");
            if candidate.is_file() {
                let content = std::fs::read_to_string(&candidate)
                    .with_context(|| format!("reading {}", candidate.display()))?;
                let manifest: NumportManifest = toml::from_str(&content)
                    .with_context(|| format!("parsing {}", candidate.display()))?;
                return Ok(Some((manifest, dir)));
            }
            if !dir.pop() {
                break;
            }
        }
        Ok(None)
    }

    /// The default target name, if the manifest sets one.
    pub fn default_target(&self) -> Option<&str> {
        self.targets.as_ref().and_then(|t| t.default.as_deref())
    }
}

/// Resolve a target by name: built-ins first, then `targets/*.target.toml`
/// under `project_dir`.
pub fn resolve_target(name: &str, project_dir: Option<&Path>) -> Result<TargetProfile> {
    if name == "host" {
        return Ok(TargetProfile::host());
    }
    if let Some(target) = builtin_target(name) {
        return Ok(target);
    }
    if let Some(dir) = project_dir {
        let found = discover_targets(dir)?
            .into_iter()
            .find(|(target_name, _)| target_name == name);
        if let Some((_, path)) = found {
            return load_target_toml(&path)
                .with_context(|| format!("loading {}", path.display()));
        }
    }
    bail!("unknown target: '{name}'. Use 'numport target list' to see available targets.")
}

/// All targets visible from `project_dir`: (name, description, source).
pub fn all_targets(project_dir: Option<&Path>) -> Result<Vec<(String, String, String)>> {
    let mut targets: Vec<_> = builtin_targets()
        .into_iter()
        .map(|t| (t.name, t.description, "built-in".to_string()))
        .collect();
    if let Some(dir) = project_dir {
        for (name, path) in discover_targets(dir)? {
            let description = match load_target_toml(&path) {
                Ok(t) => t.description,
                Err(e) => format!("(unreadable: {e})"),
            };
            targets.push((name, description, path.display().to_string()));
        }
    }
    Ok(targets)
}
