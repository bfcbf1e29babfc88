//! CLI command implementations.

pub mod profile;
pub mod shift;
pub mod target;

use anyhow::{bail, Result};

/// Output format of the describing commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Toml,
    Json,
}

impl OutputFormat {
    /// Parse a `--format` value; absent means human-readable text.
    pub fn parse(format: Option<&str>) -> Result<Self> {
        match format {
            None | Some("text") => Ok(OutputFormat::Text),
            Some("toml") => Ok(OutputFormat::Toml),
            Some("json") => Ok(OutputFormat::Json),
            Some(other) => bail!("unknown format: '{other}' (expected text, toml or json)"),
        }
    }
}
