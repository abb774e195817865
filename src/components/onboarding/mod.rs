// ABOUTME: Setup wizard screen
// Renders the six steps, dropdown overlays and navigation footer

pub mod component;

pub use component::OnboardingComponent;
