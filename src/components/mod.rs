// ABOUTME: UI components for the setup wizard

pub mod onboarding;

pub use onboarding::OnboardingComponent;
