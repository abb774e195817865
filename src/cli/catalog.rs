// ABOUTME: CLI catalog command - print the language, region or demo path lists

use super::{CatalogArgs, CatalogKind, OutputFormat};
use crate::wizard::catalog::{Catalog, CatalogEntry, DEMO_FILE_STRUCTURE};
use anyhow::Result;

/// Execute the catalog command
pub fn execute(args: &CatalogArgs, format: OutputFormat) -> Result<()> {
    let output = match args.kind {
        CatalogKind::Languages => render_entries(Catalog::Languages.entries(), format)?,
        CatalogKind::Regions => render_entries(Catalog::Regions.entries(), format)?,
        CatalogKind::Paths => render_paths(DEMO_FILE_STRUCTURE, format)?,
    };
    println!("{output}");
    Ok(())
}

fn render_entries(entries: &[CatalogEntry], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(entries)?),
        OutputFormat::Text => {
            let mut lines = vec![format!("{:<8} NAME", "CODE"), "-".repeat(30)];
            lines.extend(entries.iter().map(|entry| format!("{:<8} {}", entry.code, entry.name)));
            Ok(lines.join("\n"))
        }
    }
}

fn render_paths(paths: &[&str], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(paths)?),
        OutputFormat::Text => Ok(paths.join("\n")),
    }
}
