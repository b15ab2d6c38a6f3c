//! Save, resume and discard of onboarding sessions through a
//! [`SessionStore`].
//!
//! The in-memory state stays the source of truth regardless of storage
//! outcome: a failed save leaves the controller fully usable and the
//! error is surfaced for a non-fatal notification. Only one writer exists
//! per session key (the active session itself), so no save coordination
//! is needed beyond awaiting the call.

use uuid::Uuid;

use onboarding_api::{OnboardingResult, SessionStore};

use crate::controller::snapshot::SessionSnapshot;

use super::OnboardingController;

fn storage_key_for(session_id: Uuid) -> String {
    format!("onboarding/{session_id}")
}

impl OnboardingController {
    /// Storage key this session saves under.
    pub fn storage_key(&self) -> String {
        storage_key_for(self.session_id())
    }

    /// Serialize the whole session (state and wizard position) under
    /// [`storage_key`](Self::storage_key).
    pub async fn save_progress(&self, store: &dyn SessionStore) -> OnboardingResult<()> {
        let key = self.storage_key();
        let blob = SessionSnapshot::capture(self.current_step(), self.state())?.encode()?;
        match store.save(&key, blob).await {
            Ok(()) => {
                tracing::debug!(%key, "onboarding progress saved");
                Ok(())
            }
            Err(e) => {
                tracing::warn!(%key, error = %e, "saving onboarding progress failed");
                Err(e.into())
            }
        }
    }

    /// Rebuild a controller from a previously saved session.
    ///
    /// `Ok(None)` means no prior session exists under this id — the
    /// caller starts fresh. A blob that fails decode or checksum
    /// verification is reported as corrupt rather than resumed.
    pub async fn resume(
        store: &dyn SessionStore,
        session_id: Uuid,
    ) -> OnboardingResult<Option<Self>> {
        let key = storage_key_for(session_id);
        let Some(blob) = store.load(&key).await? else {
            return Ok(None);
        };
        let snapshot = SessionSnapshot::decode(&blob).inspect_err(|e| {
            tracing::warn!(%key, error = %e, "stored onboarding session could not be resumed");
        })?;
        tracing::debug!(%key, step = %snapshot.current_step, "onboarding session resumed");
        Ok(Some(Self::restore(
            session_id,
            snapshot.current_step,
            snapshot.state,
        )))
    }

    /// Drop the stored blob, e.g. when onboarding completed or the
    /// merchant abandoned the session for good.
    pub async fn discard(&self, store: &dyn SessionStore) -> OnboardingResult<()> {
        store.delete(&self.storage_key()).await?;
        Ok(())
    }

    /// Convenience for UIs that resume when possible and otherwise start
    /// a fresh session under the same id.
    pub async fn resume_or_start(store: &dyn SessionStore, session_id: Uuid) -> Self {
        match Self::resume(store, session_id).await {
            Ok(Some(controller)) => controller,
            Ok(None) => Self::new(session_id),
            Err(e) => {
                tracing::warn!(error = %e, "falling back to a fresh session");
                Self::new(session_id)
            }
        }
    }
}

// Keep the storage key format in one place; tests pin it because stored
// sessions outlive releases.
#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Step;

    #[test]
    fn storage_key_is_stable() {
        let id = Uuid::nil();
        assert_eq!(
            storage_key_for(id),
            "onboarding/00000000-0000-0000-0000-000000000000"
        );
    }

    #[test]
    fn current_step_survives_restore() {
        let controller =
            OnboardingController::restore(Uuid::new_v4(), Step::Billing, Default::default());
        assert_eq!(controller.current_step(), Step::Billing);
    }
}
