use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use onboarding_api::{OnboardingError, StorageError};

use crate::models::{OnboardingState, Step};
use crate::utils::stable_hash;

/// Current snapshot layout version. Bump on any incompatible change to
/// [`SessionSnapshot`] or the state model; older blobs then fail decode
/// cleanly instead of resuming with garbage.
pub const SNAPSHOT_VERSION: u16 = 1;

/// Durable form of one onboarding session: the wizard position plus the
/// whole collected state in a single blob.
///
/// `checksum` is the stable digest of `(current_step, state)`, computed
/// before the snapshot is encoded. A decoded snapshot is verified against
/// it so bit rot or hand-edited storage surfaces as
/// [`OnboardingError::CorruptSnapshot`] rather than as a silently wrong
/// session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub version: u16,
    pub saved_at: DateTime<Utc>,
    pub current_step: Step,
    pub state: OnboardingState,
    pub checksum: i64,
}

impl SessionSnapshot {
    pub fn capture(current_step: Step, state: &OnboardingState) -> Result<Self, StorageError> {
        let checksum =
            stable_hash(&(current_step, state)).map_err(StorageError::Serialization)?;
        Ok(Self {
            version: SNAPSHOT_VERSION,
            saved_at: Utc::now(),
            current_step,
            state: state.clone(),
            checksum,
        })
    }

    pub fn encode(&self) -> Result<Vec<u8>, StorageError> {
        serde_json::to_vec(self).map_err(|e| StorageError::Serialization(e.to_string()))
    }

    pub fn decode(blob: &[u8]) -> Result<Self, OnboardingError> {
        let snapshot: SessionSnapshot = serde_json::from_slice(blob)
            .map_err(|e| OnboardingError::CorruptSnapshot(format!("undecodable blob: {e}")))?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(OnboardingError::CorruptSnapshot(format!(
                "unsupported snapshot version {}",
                snapshot.version
            )));
        }
        let expected = stable_hash(&(snapshot.current_step, &snapshot.state))
            .map_err(OnboardingError::CorruptSnapshot)?;
        if expected != snapshot.checksum {
            return Err(OnboardingError::CorruptSnapshot(
                "checksum mismatch".to_string(),
            ));
        }
        Ok(snapshot)
    }
}
