//! TOML parser with helpful error messages

use super::Settings;
use anyhow::{Context, Result};
use std::path::Path;

/// Parse unipkg.toml with detailed error messages
pub fn parse_settings_toml(path: &Path) -> Result<Settings> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_settings_toml_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Parse unipkg.toml content from string
pub fn parse_settings_toml_str(content: &str) -> Result<Settings> {
    let settings: Settings =
        toml::from_str(content).map_err(|e| enhance_toml_error(e, content))?;

    settings.validate()?;

    Ok(settings)
}

/// Prefix a TOML error with the offending line when the span is known
fn enhance_toml_error(error: toml::de::Error, content: &str) -> anyhow::Error {
    let Some(span) = error.span() else {
        return anyhow::anyhow!("TOML parsing error: {}", error.message());
    };

    let line_num = content[..span.start.min(content.len())]
        .chars()
        .filter(|c| *c == '\n')
        .count()
        + 1;
    let line = content.lines().nth(line_num - 1).unwrap_or("");

    anyhow::anyhow!(
        "TOML parsing error at line {}:\n>>> {:4} | {}\n\nError: {}",
        line_num,
        line_num,
        line,
        error.message()
    )
}
