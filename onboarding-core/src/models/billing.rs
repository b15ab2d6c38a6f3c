use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};

use crate::models::address::{Address, AddressPatch};
use crate::models::products::BillingCycle;

/// How the merchant settles our invoices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvoicePaymentMethod {
    #[default]
    BankTransfer,
    DirectDebit,
}

/// Invoicing details collected on the billing step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BillingDetails {
    pub invoicing_email: HeaplessString<100>,
    pub address: Address,
    pub iban: HeaplessString<34>,
    pub payment_method: InvoicePaymentMethod,
    pub billing_cycle: BillingCycle,
    /// Invoices go to a shared group entity rather than the onboarded
    /// company itself.
    pub shared_billing_entity: bool,
    /// The ordering party differs from the onboarded company.
    pub different_orderer: bool,
}

impl BillingDetails {
    pub fn apply(&mut self, patch: BillingPatch) {
        if let Some(email) = patch.invoicing_email {
            self.invoicing_email = email;
        }
        if let Some(address) = patch.address {
            self.address.apply(address);
        }
        if let Some(iban) = patch.iban {
            self.iban = iban;
        }
        if let Some(payment_method) = patch.payment_method {
            self.payment_method = payment_method;
        }
        if let Some(billing_cycle) = patch.billing_cycle {
            self.billing_cycle = billing_cycle;
        }
        if let Some(shared) = patch.shared_billing_entity {
            self.shared_billing_entity = shared;
        }
        if let Some(different) = patch.different_orderer {
            self.different_orderer = different;
        }
    }
}

/// Partial update for [`BillingDetails`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BillingPatch {
    pub invoicing_email: Option<HeaplessString<100>>,
    pub address: Option<AddressPatch>,
    pub iban: Option<HeaplessString<34>>,
    pub payment_method: Option<InvoicePaymentMethod>,
    pub billing_cycle: Option<BillingCycle>,
    pub shared_billing_entity: Option<bool>,
    pub different_orderer: Option<bool>,
}
