// ABOUTME: Step definitions for the setup wizard
// Fixed linear order, titles, and the per-step validity rules

use serde::{Deserialize, Serialize};

use super::error::ValidationIssue;
use super::state::WizardState;

/// Steps in the setup wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    ServerSetup,
    AdminAccount,
    MusicLibraries,
    MetadataSettings,
    NetworkSettings,
    SetupComplete,
}

impl WizardStep {
    /// Get all steps in order
    pub fn all() -> &'static [WizardStep] {
        &[
            Self::ServerSetup,
            Self::AdminAccount,
            Self::MusicLibraries,
            Self::MetadataSettings,
            Self::NetworkSettings,
            Self::SetupComplete,
        ]
    }

    /// Get the step number (1-indexed for display)
    pub fn number(&self) -> usize {
        match self {
            Self::ServerSetup => 1,
            Self::AdminAccount => 2,
            Self::MusicLibraries => 3,
            Self::MetadataSettings => 4,
            Self::NetworkSettings => 5,
            Self::SetupComplete => 6,
        }
    }

    /// Look up a step by its 1-indexed number
    pub fn from_number(number: usize) -> Option<Self> {
        Self::all().iter().copied().find(|step| step.number() == number)
    }

    /// Get the total number of steps
    pub fn total() -> usize {
        6
    }

    /// Get display title for this step
    pub fn title(&self) -> &'static str {
        match self {
            Self::ServerSetup => "Server Setup",
            Self::AdminAccount => "Admin Account",
            Self::MusicLibraries => "Music Libraries",
            Self::MetadataSettings => "Metadata Settings",
            Self::NetworkSettings => "Network Settings",
            Self::SetupComplete => "Setup Complete",
        }
    }

    /// Get description for this step
    pub fn description(&self) -> &'static str {
        match self {
            Self::ServerSetup => "Let's set up your media server",
            Self::AdminAccount => "Create your admin account",
            Self::MusicLibraries => "Configure your music libraries",
            Self::MetadataSettings => "Set metadata preferences",
            Self::NetworkSettings => "Configure network access",
            Self::SetupComplete => "Your server is ready!",
        }
    }

    /// Label of the continue affordance on this step
    pub fn continue_label(&self) -> &'static str {
        if self.is_terminal() {
            "Start Using Aristo"
        } else {
            "Continue"
        }
    }

    /// First unmet requirement of this step, if any.
    ///
    /// Steps after the library step have no blocking constraint.
    pub fn validate(&self, state: &WizardState) -> Result<(), ValidationIssue> {
        let fields = state.fields();
        match self {
            Self::ServerSetup => {
                if fields.server_name.trim().is_empty() {
                    return Err(ValidationIssue::MissingServerName);
                }
            }
            Self::AdminAccount => {
                if fields.admin_name.trim().is_empty() {
                    return Err(ValidationIssue::MissingAdminName);
                }
                if fields.admin_email.trim().is_empty() {
                    return Err(ValidationIssue::MissingAdminEmail);
                }
                if fields.admin_password.trim().is_empty() {
                    return Err(ValidationIssue::MissingAdminPassword);
                }
            }
            Self::MusicLibraries => {
                if state.libraries().is_empty() {
                    return Err(ValidationIssue::NoLibraries);
                }
            }
            Self::MetadataSettings | Self::NetworkSettings | Self::SetupComplete => {}
        }
        Ok(())
    }

    /// Can we go to the next step?
    pub fn can_advance(&self, state: &WizardState) -> bool {
        self.validate(state).is_ok()
    }

    /// Whether confirming this step completes the wizard
    pub fn is_terminal(&self) -> bool {
        self.next().is_none()
    }

    /// Get the next step, if any
    pub fn next(&self) -> Option<Self> {
        match self {
            Self::ServerSetup => Some(Self::AdminAccount),
            Self::AdminAccount => Some(Self::MusicLibraries),
            Self::MusicLibraries => Some(Self::MetadataSettings),
            Self::MetadataSettings => Some(Self::NetworkSettings),
            Self::NetworkSettings => Some(Self::SetupComplete),
            Self::SetupComplete => None,
        }
    }

    /// Get the previous step, if any
    pub fn previous(&self) -> Option<Self> {
        match self {
            Self::ServerSetup => None,
            Self::AdminAccount => Some(Self::ServerSetup),
            Self::MusicLibraries => Some(Self::AdminAccount),
            Self::MetadataSettings => Some(Self::MusicLibraries),
            Self::NetworkSettings => Some(Self::MetadataSettings),
            Self::SetupComplete => Some(Self::NetworkSettings),
        }
    }
}

impl Default for WizardStep {
    fn default() -> Self {
        Self::ServerSetup
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}
