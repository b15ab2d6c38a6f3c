use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};

/// Reference to a signature image captured by an external pad or upload.
/// Only presence matters for completion; the image itself lives outside
/// the onboarding state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignatureRef {
    pub image_path: HeaplessString<255>,
    pub signed_at: DateTime<Utc>,
}

/// Final step: the three contractual consents plus both signatures.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SignatureConsents {
    pub terms_accepted: bool,
    pub data_processing_accepted: bool,
    pub contract_draft_accepted: bool,
    pub merchant_signature: Option<SignatureRef>,
    pub provider_signature: Option<SignatureRef>,
}

impl SignatureConsents {
    pub fn apply(&mut self, patch: ConsentsPatch) {
        if let Some(terms) = patch.terms_accepted {
            self.terms_accepted = terms;
        }
        if let Some(data) = patch.data_processing_accepted {
            self.data_processing_accepted = data;
        }
        if let Some(draft) = patch.contract_draft_accepted {
            self.contract_draft_accepted = draft;
        }
        if let Some(signature) = patch.merchant_signature {
            self.merchant_signature = Some(signature);
        }
        if let Some(signature) = patch.provider_signature {
            self.provider_signature = Some(signature);
        }
    }
}

/// Partial update for [`SignatureConsents`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConsentsPatch {
    pub terms_accepted: Option<bool>,
    pub data_processing_accepted: Option<bool>,
    pub contract_draft_accepted: Option<bool>,
    pub merchant_signature: Option<SignatureRef>,
    pub provider_signature: Option<SignatureRef>,
}
