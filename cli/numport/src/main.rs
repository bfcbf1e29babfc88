//! numport CLI: inspect integer width profiles and shift primitives.

mod catalog;
mod commands;

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};

use catalog::NumportManifest;

#[derive(Parser)]
#[command(name = "numport", version, about = "Integer width portability profiles")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the integer width profile this binary was built for
    Profile {
        /// Output format (text, toml, json)
        #[arg(long)]
        format: Option<String>,
    },
    /// Manage target profiles
    Target {
        #[command(subcommand)]
        action: TargetAction,
    },
    /// Evaluate a right shift primitive
    Shift {
        /// Shift kind (arithmetic, logical)
        kind: String,
        /// Operand width (native, 32, 64)
        #[arg(long)]
        width: Option<String>,
        /// Operand in decimal, 0x hex or 0b binary
        #[arg(allow_negative_numbers = true)]
        value: String,
        /// Number of bits to shift by
        amount: u32,
    },
}

#[derive(Subcommand)]
enum TargetAction {
    /// List built-in and project target profiles
    List {
        /// Project directory (default: the one holding numport.toml)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
    /// Show details of a target profile
    Describe {
        /// Target name (default: [targets] default in numport.toml)
        name: Option<String>,
        /// Output format (text, toml, json)
        #[arg(long)]
        format: Option<String>,
    },
    /// Write a template target definition
    Add {
        /// Target name
        name: String,
        /// Data model to start from (ilp32, lp64, llp64)
        #[arg(long)]
        model: Option<String>,
    },
    /// Validate a target profile
    Validate {
        /// Target name
        name: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = run(cli);
    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;

    match cli.command {
        Commands::Profile { format } => commands::profile::run(format.as_deref()),

        Commands::Target { action } => {
            let (manifest, project_dir) = load_manifest_optional(&cwd)?;
            let project_dir = project_dir.unwrap_or_else(|| cwd.clone());
            match action {
                TargetAction::List { dir } => {
                    commands::target::list(Some(dir.as_deref().unwrap_or(&project_dir)))
                }
                TargetAction::Describe { name, format } => {
                    let name = match name {
                        Some(name) => name,
                        None => default_target(manifest.as_ref())?,
                    };
                    commands::target::describe(&name, Some(&project_dir), format.as_deref())
                }
                TargetAction::Add { name, model } => {
                    commands::target::add(&name, &project_dir, model.as_deref())
                }
                TargetAction::Validate { name } => {
                    commands::target::validate(&name, Some(&project_dir))
                }
            }
        }

        Commands::Shift {
            kind,
            width,
            value,
            amount,
        } => commands::shift::run(&kind, width.as_deref(), &value, amount),
    }
}

/// The manifest's default target, or `host` when there is no manifest.
fn default_target(manifest: Option<&NumportManifest>) -> anyhow::Result<String> {
    match manifest {
        Some(manifest) => match manifest.default_target() {
            Some(name) => Ok(name.to_string()),
            None => anyhow::bail!(
                "no target given and numport.toml for '{}' sets no [targets] default",
                manifest.project.name
            ),
        },
        None => Ok("host".to_string()),
    }
}

/// Try to load a manifest from the current directory upward. Returns (None, None) if not found.
fn load_manifest_optional(
    cwd: &Path,
) -> anyhow::Result<(Option<NumportManifest>, Option<PathBuf>)> {
    match NumportManifest::find_and_load(cwd)? {
        Some((manifest, dir)) => Ok((Some(manifest), Some(dir))),
        None => Ok((None, None)),
    }
}
