//! Per-step readiness predicates.
//!
//! Pure functions over the collected state; missing data is reported as
//! `false`, never as an error. The UI renders the result as a disabled
//! "continue" affordance and the controller consults the same predicates
//! for navigation gating.

use crate::models::{
    BeneficialOwner, BillingDetails, BusinessInfo, CompanyInfo, ContactPerson, OnboardingState,
    SignatureConsents, Step,
};

pub fn is_step_complete(state: &OnboardingState, step: Step) -> bool {
    match step {
        Step::Company => company_complete(&state.company),
        Step::Business => business_complete(&state.business),
        Step::Products => state.products.has_any_selection(),
        Step::Persons => {
            contact_complete(&state.business_contact) && contact_complete(&state.technical_contact)
        }
        Step::BeneficialOwners => state
            .beneficial_owners
            .iter()
            .any(BeneficialOwner::has_required_identity),
        Step::Billing => billing_complete(&state.billing),
        Step::Sign => sign_complete(&state.consents),
    }
}

fn company_complete(company: &CompanyInfo) -> bool {
    !company.name.is_empty()
        && !company.registration_id.is_empty()
        && company.address.is_filled()
        && company.data_processing_consent
}

fn business_complete(business: &BusinessInfo) -> bool {
    business
        .locations
        .iter()
        .any(|location| !location.name.is_empty() && location.address.is_filled())
}

fn contact_complete(contact: &ContactPerson) -> bool {
    contact.has_name() && contact.has_contact_channel()
}

fn billing_complete(billing: &BillingDetails) -> bool {
    !billing.invoicing_email.is_empty() && billing.address.is_filled() && !billing.iban.is_empty()
}

fn sign_complete(consents: &SignatureConsents) -> bool {
    consents.terms_accepted
        && consents.data_processing_accepted
        && consents.contract_draft_accepted
        && consents.merchant_signature.is_some()
        && consents.provider_signature.is_some()
}
