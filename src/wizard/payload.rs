// ABOUTME: Completion payload handed to the caller when the wizard finishes

use serde::{Deserialize, Serialize};

use super::library::LibraryEntry;
use super::state::WizardState;

const REDACTED: &str = "********";

/// Snapshot of everything the wizard collected.
///
/// The password travels in plain text; `Debug` masks it, and
/// [`CompletionPayload::redacted`] produces a copy safe to print.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionPayload {
    pub language: String,
    pub server_name: String,
    pub admin_name: String,
    pub admin_email: String,
    pub admin_password: String,
    pub libraries: Vec<LibraryEntry>,
    pub metadata_language: String,
    pub region: String,
    pub allow_remote_network: bool,
    #[serde(rename = "useUPnP")]
    pub use_upnp: bool,
}

impl CompletionPayload {
    pub(crate) fn snapshot(state: &WizardState) -> Self {
        let fields = state.fields();
        Self {
            language: fields.language.clone(),
            server_name: fields.server_name.clone(),
            admin_name: fields.admin_name.clone(),
            admin_email: fields.admin_email.clone(),
            admin_password: fields.admin_password.clone(),
            libraries: state.libraries().to_vec(),
            metadata_language: fields.metadata_language.clone(),
            region: fields.region.clone(),
            allow_remote_network: fields.allow_remote_network,
            use_upnp: fields.use_upnp,
        }
    }

    /// Copy with the password masked
    pub fn redacted(&self) -> Self {
        Self {
            admin_password: REDACTED.to_string(),
            ..self.clone()
        }
    }
}

impl std::fmt::Debug for CompletionPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionPayload")
            .field("language", &self.language)
            .field("server_name", &self.server_name)
            .field("admin_name", &self.admin_name)
            .field("admin_email", &self.admin_email)
            .field("admin_password", &REDACTED)
            .field("libraries", &self.libraries)
            .field("metadata_language", &self.metadata_language)
            .field("region", &self.region)
            .field("allow_remote_network", &self.allow_remote_network)
            .field("use_upnp", &self.use_upnp)
            .finish()
    }
}
