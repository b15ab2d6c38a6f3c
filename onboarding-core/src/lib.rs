pub mod controller;
pub mod models;
pub mod utils;

pub use controller::snapshot::{SessionSnapshot, SNAPSHOT_VERSION};
pub use controller::OnboardingController;
pub use models::*;

// Re-export the contract crate so embedders need a single dependency.
pub use onboarding_api::{OnboardingError, OnboardingResult, SessionStore, StorageError};
