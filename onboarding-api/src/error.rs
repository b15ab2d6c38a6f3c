use thiserror::Error;
use uuid::Uuid;

/// Failures surfaced by an onboarding session.
///
/// A step that is merely *incomplete* is never an error; incompleteness is
/// reported by the completion predicates and shows up in the UI as a
/// disabled "continue" affordance. The variants here cover hard business
/// rules (capacity caps, navigation gating), addressing mistakes and
/// storage trouble.
#[derive(Error, Debug)]
pub enum OnboardingError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Capacity exceeded: {0}")]
    CapacityExceeded(String),

    #[error("Current step is not complete: {0}")]
    StepIncomplete(String),

    #[error("Step is not unlocked yet: {0}")]
    StepLocked(String),

    #[error("Unknown catalog item: {0}")]
    UnknownCatalogItem(Uuid),

    #[error("Unknown business location: {0}")]
    UnknownLocation(Uuid),

    #[error("Unknown person record: {0}")]
    UnknownPerson(Uuid),

    #[error("Corrupt session snapshot: {0}")]
    CorruptSnapshot(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Failures of the session persistence backend.
///
/// These are non-fatal to the in-memory session: the controller keeps its
/// state regardless of storage outcome and callers surface the failure as
/// a notification.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Serialization failed: {0}")]
    Serialization(String),

    #[error("I/O failure: {0}")]
    Io(String),

    #[error("Storage backend unavailable: {0}")]
    Unavailable(String),
}

pub type OnboardingResult<T> = Result<T, OnboardingError>;
