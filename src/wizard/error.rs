// ABOUTME: Error types for the setup wizard
// Advancing past a step whose requirements are unmet is the only failure

use thiserror::Error;

use super::steps::WizardStep;

/// Requirement of a step that is not satisfied yet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationIssue {
    #[error("server name is required")]
    MissingServerName,

    #[error("admin username is required")]
    MissingAdminName,

    #[error("admin email is required")]
    MissingAdminEmail,

    #[error("admin password is required")]
    MissingAdminPassword,

    #[error("add at least one music library")]
    NoLibraries,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    /// The active step's requirements are unmet; nothing changed
    #[error("cannot continue past {step}: {issue}")]
    Validation {
        step: WizardStep,
        #[source]
        issue: ValidationIssue,
    },
}

impl WizardError {
    pub fn issue(&self) -> ValidationIssue {
        match self {
            Self::Validation { issue, .. } => *issue,
        }
    }
}

pub type Result<T> = std::result::Result<T, WizardError>;
