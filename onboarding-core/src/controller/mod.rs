pub mod completion;
pub mod patches;
pub mod persistence;
pub mod roster;
pub mod snapshot;

use uuid::Uuid;

use onboarding_api::{OnboardingError, OnboardingResult};

use crate::models::{OnboardingState, Step};

/// Single source of truth for one merchant onboarding session: wizard
/// position, collected data, per-step readiness, save and resume.
///
/// One instance exists per active session, owned by the embedding
/// application and handed to step views by reference; views hold no
/// onboarding data of their own. Navigation gating lives here — callers
/// get a `Result` instead of having to consult completion predicates
/// before every jump.
#[derive(Debug)]
pub struct OnboardingController {
    session_id: Uuid,
    current_step: Step,
    state: OnboardingState,
}

impl OnboardingController {
    /// Fresh session starting on the first step.
    pub fn new(session_id: Uuid) -> Self {
        Self {
            session_id,
            current_step: Step::FIRST,
            state: OnboardingState::new(),
        }
    }

    /// Fresh session with a generated session id.
    pub fn start() -> Self {
        Self::new(Uuid::new_v4())
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn current_step(&self) -> Step {
        self.current_step
    }

    /// Read surface for step views and dashboards.
    pub fn state(&self) -> &OnboardingState {
        &self.state
    }

    pub(crate) fn state_mut(&mut self) -> &mut OnboardingState {
        &mut self.state
    }

    pub(crate) fn restore(session_id: Uuid, current_step: Step, state: OnboardingState) -> Self {
        Self {
            session_id,
            current_step,
            state,
        }
    }

    pub fn is_step_complete(&self, step: Step) -> bool {
        completion::is_step_complete(&self.state, step)
    }

    /// Derived overall completion; there is no separate "completed" state.
    pub fn is_complete(&self) -> bool {
        Step::ORDER.iter().all(|s| self.is_step_complete(*s))
    }

    /// First step in wizard order whose data is still incomplete, or the
    /// terminal step once everything is filled. Jump targets beyond this
    /// step are locked.
    pub fn furthest_step(&self) -> Step {
        Step::ORDER
            .iter()
            .copied()
            .find(|s| !self.is_step_complete(*s))
            .unwrap_or(Step::LAST)
    }

    /// Steps currently reachable via [`set_step`](Self::set_step), in
    /// wizard order. Meant for rendering the step navigation.
    pub fn unlocked_steps(&self) -> Vec<Step> {
        let limit = self.furthest_step().index();
        Step::ORDER[..=limit].to_vec()
    }

    /// Advance one step. No-op on the terminal step; fails with
    /// [`OnboardingError::StepIncomplete`] while the current step's data
    /// is missing.
    pub fn next_step(&mut self) -> OnboardingResult<Step> {
        let Some(next) = self.current_step.next() else {
            return Ok(self.current_step);
        };
        if !self.is_step_complete(self.current_step) {
            return Err(OnboardingError::StepIncomplete(
                self.current_step.to_string(),
            ));
        }
        tracing::debug!(from = %self.current_step, to = %next, "advancing wizard");
        self.current_step = next;
        Ok(next)
    }

    /// Move one step back. No-op on the first step; going back is never
    /// gated.
    pub fn prev_step(&mut self) -> Step {
        if let Some(prev) = self.current_step.prev() {
            tracing::debug!(from = %self.current_step, to = %prev, "stepping back");
            self.current_step = prev;
        }
        self.current_step
    }

    /// Jump directly to `step`. Permitted for any step up to and
    /// including [`furthest_step`](Self::furthest_step); jumping into
    /// never-unlocked territory fails with
    /// [`OnboardingError::StepLocked`].
    pub fn set_step(&mut self, step: Step) -> OnboardingResult<Step> {
        if step.index() > self.furthest_step().index() {
            return Err(OnboardingError::StepLocked(step.to_string()));
        }
        tracing::debug!(from = %self.current_step, to = %step, "jumping to step");
        self.current_step = step;
        Ok(step)
    }
}

#[cfg(test)]
pub(crate) mod test_utils {
    use heapless::String as HeaplessString;

    use crate::models::{
        AddressPatch, BeneficialOwner, BeneficialOwnerPatch, BillingPatch, BusinessLocationPatch,
        CompanyPatch, ConsentsPatch, ContactPersonPatch, SignatureRef,
    };

    pub fn text<const N: usize>(value: &str) -> HeaplessString<N> {
        HeaplessString::try_from(value).unwrap()
    }

    pub fn complete_company_patch() -> CompanyPatch {
        CompanyPatch {
            name: Some(text("Acme s.r.o.")),
            registration_id: Some(text("12345678")),
            tax_id: Some(text("2023456789")),
            address: Some(AddressPatch {
                street: Some(text("Hlavná 1")),
                city: Some(text("Bratislava")),
                ..Default::default()
            }),
            data_processing_consent: Some(true),
            ..Default::default()
        }
    }

    pub fn complete_location_patch() -> BusinessLocationPatch {
        BusinessLocationPatch {
            name: Some(text("Acme downtown")),
            address: Some(AddressPatch {
                street: Some(text("Obchodná 22")),
                city: Some(text("Bratislava")),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    pub fn complete_contact_patch(email: &str) -> ContactPersonPatch {
        ContactPersonPatch {
            first_name: Some(text("Jana")),
            last_name: Some(text("Kováčová")),
            email: Some(text(email)),
            ..Default::default()
        }
    }

    pub fn identified_owner(first_name: &str) -> BeneficialOwner {
        let mut owner = BeneficialOwner::new();
        owner.apply(BeneficialOwnerPatch {
            first_name: Some(text(first_name)),
            last_name: Some(text("Novák")),
            birth_date: chrono::NaiveDate::from_ymd_opt(1975, 3, 14),
            nationality: Some(text("SK")),
            ..Default::default()
        });
        owner
    }

    pub fn complete_billing_patch() -> BillingPatch {
        BillingPatch {
            invoicing_email: Some(text("invoices@acme.example")),
            address: Some(AddressPatch {
                street: Some(text("Hlavná 1")),
                city: Some(text("Bratislava")),
                ..Default::default()
            }),
            iban: Some(text("SK3112000000198742637541")),
            ..Default::default()
        }
    }

    pub fn complete_consents_patch() -> ConsentsPatch {
        ConsentsPatch {
            terms_accepted: Some(true),
            data_processing_accepted: Some(true),
            contract_draft_accepted: Some(true),
            merchant_signature: Some(SignatureRef {
                image_path: text("signatures/merchant.png"),
                signed_at: chrono::Utc::now(),
            }),
            provider_signature: Some(SignatureRef {
                image_path: text("signatures/provider.png"),
                signed_at: chrono::Utc::now(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_utils::*;
    use super::*;

    #[test]
    fn fresh_session_starts_on_company() {
        let controller = OnboardingController::start();
        assert_eq!(controller.current_step(), Step::Company);
        assert!(!controller.is_complete());
    }

    #[test]
    fn prev_step_on_first_step_is_a_noop() {
        let mut controller = OnboardingController::start();
        assert_eq!(controller.prev_step(), Step::Company);
        assert_eq!(controller.current_step(), Step::Company);
    }

    #[test]
    fn next_step_requires_current_step_completion() {
        let mut controller = OnboardingController::start();
        let err = controller.next_step().unwrap_err();
        assert!(matches!(err, OnboardingError::StepIncomplete(_)));
        assert_eq!(controller.current_step(), Step::Company);

        controller.update_company(complete_company_patch());
        assert_eq!(controller.next_step().unwrap(), Step::Business);
    }

    #[test]
    fn set_step_rejects_locked_targets() {
        let mut controller = OnboardingController::start();
        let err = controller.set_step(Step::Billing).unwrap_err();
        assert!(matches!(err, OnboardingError::StepLocked(_)));
        assert_eq!(controller.current_step(), Step::Company);

        // The step right after the furthest complete one is reachable.
        controller.update_company(complete_company_patch());
        assert_eq!(controller.set_step(Step::Business).unwrap(), Step::Business);
        assert_eq!(controller.unlocked_steps(), vec![Step::Company, Step::Business]);
    }

    #[test]
    fn gating_follows_the_first_incomplete_step() {
        use crate::models::CompanyPatch;

        let mut controller = OnboardingController::start();

        // Billing data alone does not unlock the billing step; every
        // step before it still gates the jump.
        controller.update_billing(complete_billing_patch());
        assert!(controller.is_step_complete(Step::Billing));
        assert!(matches!(
            controller.set_step(Step::Billing).unwrap_err(),
            OnboardingError::StepLocked(_)
        ));
        assert_eq!(controller.furthest_step(), Step::Company);

        controller.update_company(complete_company_patch());
        assert_eq!(controller.furthest_step(), Step::Business);

        // Withdrawing the consent re-locks everything after company.
        controller.update_company(CompanyPatch {
            data_processing_consent: Some(false),
            ..Default::default()
        });
        assert_eq!(controller.furthest_step(), Step::Company);
    }

    #[test]
    fn navigation_moves_by_exactly_one_position() {
        let mut controller = OnboardingController::start();
        controller.update_company(complete_company_patch());

        let before = controller.current_step().index();
        let after = controller.next_step().unwrap().index();
        assert_eq!(after, before + 1);

        let back = controller.prev_step().index();
        assert_eq!(back, before);
    }
}
