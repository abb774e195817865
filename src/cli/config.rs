// ABOUTME: CLI config command - print the effective configuration after merging

use super::OutputFormat;
use crate::config::AppConfig;
use anyhow::Result;

/// Execute the config command
pub fn execute(config: &AppConfig, format: OutputFormat) -> Result<()> {
    let output = match format {
        OutputFormat::Json => serde_json::to_string_pretty(config)?,
        OutputFormat::Text => toml::to_string_pretty(config)?,
    };
    println!("{}", output.trim_end());
    Ok(())
}
