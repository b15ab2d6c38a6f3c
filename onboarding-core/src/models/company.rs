use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};

use crate::models::address::{Address, AddressPatch};

/// Legal identity of the merchant entity collected on the first wizard
/// step.
///
/// Fields are normally prefilled from a business-registry lookup by the
/// registration id; `manual_input` records that the merchant switched to
/// typing them by hand instead. The registration id format is not
/// validated here — an unparseable id simply never completes the lookup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyInfo {
    pub name: HeaplessString<100>,
    pub registration_id: HeaplessString<20>,
    pub tax_id: HeaplessString<20>,
    pub vat_id: Option<HeaplessString<20>>,
    pub legal_form: Option<HeaplessString<50>>,
    pub address: Address,
    /// True once the merchant opted out of the registry prefill.
    pub manual_input: bool,
    /// Consent to processing of the company data, required before the
    /// company step counts as complete.
    pub data_processing_consent: bool,
}

impl CompanyInfo {
    pub fn apply(&mut self, patch: CompanyPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(registration_id) = patch.registration_id {
            self.registration_id = registration_id;
        }
        if let Some(tax_id) = patch.tax_id {
            self.tax_id = tax_id;
        }
        if let Some(vat_id) = patch.vat_id {
            self.vat_id = Some(vat_id);
        }
        if let Some(legal_form) = patch.legal_form {
            self.legal_form = Some(legal_form);
        }
        if let Some(address) = patch.address {
            self.address.apply(address);
        }
        if let Some(manual_input) = patch.manual_input {
            self.manual_input = manual_input;
        }
        if let Some(consent) = patch.data_processing_consent {
            self.data_processing_consent = consent;
        }
    }
}

/// Partial update for [`CompanyInfo`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompanyPatch {
    pub name: Option<HeaplessString<100>>,
    pub registration_id: Option<HeaplessString<20>>,
    pub tax_id: Option<HeaplessString<20>>,
    pub vat_id: Option<HeaplessString<20>>,
    pub legal_form: Option<HeaplessString<50>>,
    pub address: Option<AddressPatch>,
    pub manual_input: Option<bool>,
    pub data_processing_consent: Option<bool>,
}
