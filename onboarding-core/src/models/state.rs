use heapless::Vec as HeaplessVec;
use serde::{Deserialize, Serialize};

use crate::models::billing::BillingDetails;
use crate::models::business::BusinessInfo;
use crate::models::catalog::default_catalog;
use crate::models::company::CompanyInfo;
use crate::models::consents::SignatureConsents;
use crate::models::person::{AuthorizedSignatory, BeneficialOwner, ContactPerson};
use crate::models::products::ProductSelection;

/// Hard business cap on authorized signatories per onboarding.
pub const MAX_AUTHORIZED_SIGNATORIES: usize = 4;

/// Hard business cap on beneficial owners per onboarding.
pub const MAX_BENEFICIAL_OWNERS: usize = 4;

/// Everything collected across the wizard, one sub-record per step area.
///
/// Created once per session, mutated in place through the controller's
/// patch operations and serialized wholesale into session snapshots. The
/// two person lists are bounded containers; the capacity caps are business
/// rules, not sizing hints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OnboardingState {
    pub company: CompanyInfo,
    pub business: BusinessInfo,
    pub products: ProductSelection,
    pub business_contact: ContactPerson,
    pub technical_contact: ContactPerson,
    pub authorized_signatories: HeaplessVec<AuthorizedSignatory, MAX_AUTHORIZED_SIGNATORIES>,
    pub beneficial_owners: HeaplessVec<BeneficialOwner, MAX_BENEFICIAL_OWNERS>,
    pub billing: BillingDetails,
    pub consents: SignatureConsents,
}

impl OnboardingState {
    /// Fresh state for a new session: empty records, one blank business
    /// location and the default product catalog with nothing selected.
    pub fn new() -> Self {
        Self {
            products: default_catalog(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_is_incomplete_but_well_formed() {
        let state = OnboardingState::new();
        assert!(!state.business.locations.is_empty());
        assert!(!state.products.devices.is_empty());
        assert!(state.authorized_signatories.is_empty());
        assert!(state.beneficial_owners.is_empty());
    }

    #[test]
    fn state_round_trips_through_json() {
        let state = OnboardingState::new();
        let json = serde_json::to_vec(&state).unwrap();
        let back: OnboardingState = serde_json::from_slice(&json).unwrap();
        assert_eq!(back, state);
    }
}
