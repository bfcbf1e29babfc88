//! `numport profile`: the integer width profile of this host.

use anyhow::Result;

use numport_core::{
    NATURAL_BITS, NATURAL_MAX, NATURAL_MIN, OFF_MAX, SSIZE_BITS, SSIZE_MAX, SSIZE_MIN,
};
use numport_platform::parse::{target_to_json, target_to_toml};
use numport_platform::TargetProfile;

use super::target::render;
use super::OutputFormat;

/// Print the host profile.
pub fn run(format: Option<&str>) -> Result<()> {
    let host = TargetProfile::host();
    match OutputFormat::parse(format)? {
        OutputFormat::Text => print!("{}", render_host(&host)),
        OutputFormat::Toml => print!("{}", target_to_toml(&host)?),
        OutputFormat::Json => println!("{}", target_to_json(&host)?),
    }
    Ok(())
}

/// The generic target rendering plus the compiled-in numeric types.
fn render_host(host: &TargetProfile) -> String {
    let compiled = [
        String::new(),
        "--- Compiled Types ---".to_string(),
        format!("  NaturalInt:   {NATURAL_BITS} bits, {NATURAL_MIN}..={NATURAL_MAX}"),
        format!("  SignedSize:   {SSIZE_BITS} bits, {SSIZE_MIN}..={SSIZE_MAX}"),
        format!("  FileOffset:   64 bits, max {OFF_MAX}"),
    ];
    render(host) + &compiled.join("\n") + "\n"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_rendering_agrees_with_profile() {
        let host = TargetProfile::host();
        let text = render_host(&host);
        assert!(text.contains("=== Target: host ==="));
        assert!(text.contains(&format!("natural word: {NATURAL_BITS} bits")));
        assert!(text.contains(&format!("SignedSize:   {SSIZE_BITS} bits")));
    }

    #[test]
    fn all_formats_run() {
        for format in [None, Some("toml"), Some("json")] {
            run(format).unwrap();
        }
    }
}
