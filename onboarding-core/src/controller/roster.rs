//! The two capacity-capped person rosters: authorized signatories and
//! beneficial owners.
//!
//! Both lists hold at most four entries — a hard business rule enforced by
//! the bounded container itself, not a soft warning. Records carry
//! synthetic ids issued at add time; updates and removals address records
//! by id, so removing an entry never invalidates the ids of the others.

use uuid::Uuid;

use onboarding_api::{OnboardingError, OnboardingResult};

use crate::models::{
    AuthorizedSignatory, BeneficialOwner, BeneficialOwnerPatch, SignatoryPatch,
    MAX_AUTHORIZED_SIGNATORIES, MAX_BENEFICIAL_OWNERS,
};

use super::OnboardingController;

impl OnboardingController {
    /// Append a signatory and return its freshly issued id. Fails with
    /// [`OnboardingError::CapacityExceeded`] at four entries, leaving the
    /// list unchanged.
    pub fn add_authorized_signatory(
        &mut self,
        mut signatory: AuthorizedSignatory,
    ) -> OnboardingResult<Uuid> {
        signatory.id = Uuid::new_v4();
        let id = signatory.id;
        self.state_mut()
            .authorized_signatories
            .push(signatory)
            .map_err(|_| {
                OnboardingError::CapacityExceeded(format!(
                    "at most {MAX_AUTHORIZED_SIGNATORIES} authorized signatories allowed"
                ))
            })?;
        tracing::debug!(%id, "authorized signatory added");
        Ok(id)
    }

    pub fn update_authorized_signatory(
        &mut self,
        id: Uuid,
        patch: SignatoryPatch,
    ) -> OnboardingResult<()> {
        let signatory = self
            .state_mut()
            .authorized_signatories
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(OnboardingError::UnknownPerson(id))?;
        signatory.apply(patch);
        Ok(())
    }

    /// Remove a signatory by id; the order of the remaining entries is
    /// preserved.
    pub fn remove_authorized_signatory(&mut self, id: Uuid) -> OnboardingResult<()> {
        let signatories = &mut self.state_mut().authorized_signatories;
        let position = signatories
            .iter()
            .position(|s| s.id == id)
            .ok_or(OnboardingError::UnknownPerson(id))?;
        signatories.remove(position);
        Ok(())
    }

    /// Append a beneficial owner and return its freshly issued id. Fails
    /// with [`OnboardingError::CapacityExceeded`] at four entries,
    /// leaving the list unchanged.
    pub fn add_beneficial_owner(&mut self, mut owner: BeneficialOwner) -> OnboardingResult<Uuid> {
        owner.id = Uuid::new_v4();
        let id = owner.id;
        self.state_mut().beneficial_owners.push(owner).map_err(|_| {
            OnboardingError::CapacityExceeded(format!(
                "at most {MAX_BENEFICIAL_OWNERS} beneficial owners allowed"
            ))
        })?;
        tracing::debug!(%id, "beneficial owner added");
        Ok(id)
    }

    pub fn update_beneficial_owner(
        &mut self,
        id: Uuid,
        patch: BeneficialOwnerPatch,
    ) -> OnboardingResult<()> {
        let owner = self
            .state_mut()
            .beneficial_owners
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or(OnboardingError::UnknownPerson(id))?;
        owner.apply(patch);
        Ok(())
    }

    /// Remove a beneficial owner by id; the order of the remaining
    /// entries is preserved.
    pub fn remove_beneficial_owner(&mut self, id: Uuid) -> OnboardingResult<()> {
        let owners = &mut self.state_mut().beneficial_owners;
        let position = owners
            .iter()
            .position(|o| o.id == id)
            .ok_or(OnboardingError::UnknownPerson(id))?;
        owners.remove(position);
        Ok(())
    }
}
