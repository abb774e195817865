// ABOUTME: Field values collected by the wizard and the typed updates that overwrite them

use super::catalog::{DEFAULT_LANGUAGE, DEFAULT_REGION};
use super::steps::WizardStep;

/// Every scalar value the wizard collects
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardFields {
    pub language: String,
    pub server_name: String,
    pub admin_name: String,
    pub admin_email: String,
    pub admin_password: String,
    pub metadata_language: String,
    pub region: String,
    pub allow_remote_network: bool,
    pub use_upnp: bool,
}

impl Default for WizardFields {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            server_name: String::new(),
            admin_name: String::new(),
            admin_email: String::new(),
            admin_password: String::new(),
            metadata_language: DEFAULT_LANGUAGE.to_string(),
            region: DEFAULT_REGION.to_string(),
            allow_remote_network: false,
            use_upnp: false,
        }
    }
}

/// A named field together with its new value.
///
/// Writes are unconditional; validity is only checked when advancing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    Language(String),
    ServerName(String),
    AdminName(String),
    AdminEmail(String),
    AdminPassword(String),
    MetadataLanguage(String),
    Region(String),
    AllowRemoteNetwork(bool),
    UseUpnp(bool),
}

impl FieldUpdate {
    /// Step that owns the field
    pub fn step(&self) -> WizardStep {
        match self {
            Self::Language(_) | Self::ServerName(_) => WizardStep::ServerSetup,
            Self::AdminName(_) | Self::AdminEmail(_) | Self::AdminPassword(_) => {
                WizardStep::AdminAccount
            }
            Self::MetadataLanguage(_) | Self::Region(_) => WizardStep::MetadataSettings,
            Self::AllowRemoteNetwork(_) | Self::UseUpnp(_) => WizardStep::NetworkSettings,
        }
    }

    /// Field name as it appears in the completion payload
    pub fn name(&self) -> &'static str {
        match self {
            Self::Language(_) => "language",
            Self::ServerName(_) => "serverName",
            Self::AdminName(_) => "adminName",
            Self::AdminEmail(_) => "adminEmail",
            Self::AdminPassword(_) => "adminPassword",
            Self::MetadataLanguage(_) => "metadataLanguage",
            Self::Region(_) => "region",
            Self::AllowRemoteNetwork(_) => "allowRemoteNetwork",
            Self::UseUpnp(_) => "useUPnP",
        }
    }

    pub(crate) fn apply(self, fields: &mut WizardFields) {
        match self {
            Self::Language(v) => fields.language = v,
            Self::ServerName(v) => fields.server_name = v,
            Self::AdminName(v) => fields.admin_name = v,
            Self::AdminEmail(v) => fields.admin_email = v,
            Self::AdminPassword(v) => fields.admin_password = v,
            Self::MetadataLanguage(v) => fields.metadata_language = v,
            Self::Region(v) => fields.region = v,
            Self::AllowRemoteNetwork(v) => fields.allow_remote_network = v,
            Self::UseUpnp(v) => fields.use_upnp = v,
        }
    }
}
