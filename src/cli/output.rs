// ABOUTME: Rendering of the completion payload once the wizard has finished

use super::OutputFormat;
use crate::wizard::{Catalog, CompletionPayload};
use anyhow::Result;

/// Format the payload for stdout, masking the password unless asked not to
pub fn format_completion(
    payload: &CompletionPayload,
    format: OutputFormat,
    show_password: bool,
) -> Result<String> {
    let payload = if show_password { payload.clone() } else { payload.redacted() };

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&payload)?),
        OutputFormat::Text => Ok(format_text(&payload)),
    }
}

fn format_text(payload: &CompletionPayload) -> String {
    let yes_no = |flag: bool| if flag { "yes" } else { "no" };

    let mut lines = vec![
        "Setup complete".to_string(),
        String::new(),
        format!("  Server name:        {}", payload.server_name),
        format!(
            "  Language:           {}",
            Catalog::Languages.display_name(&payload.language)
        ),
        format!("  Admin username:     {}", payload.admin_name),
        format!("  Admin email:        {}", payload.admin_email),
        format!("  Admin password:     {}", payload.admin_password),
        format!(
            "  Metadata language:  {}",
            Catalog::Languages.display_name(&payload.metadata_language)
        ),
        format!(
            "  Region:             {}",
            Catalog::Regions.display_name(&payload.region)
        ),
        format!("  Remote access:      {}", yes_no(payload.allow_remote_network)),
        format!("  UPnP forwarding:    {}", yes_no(payload.use_upnp)),
        format!("  Libraries:          {}", payload.libraries.len()),
    ];
    for library in &payload.libraries {
        lines.push(format!("    - {} ({})", library.name, library.selected_paths.join(", ")));
    }
    lines.join("\n")
}
