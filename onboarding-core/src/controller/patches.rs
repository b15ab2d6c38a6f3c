//! Patch-merge operations for the step sub-records and the catalogs.
//!
//! Patches are accepted as-is: empty or half-filled values never fail,
//! they merely leave the owning step incomplete. Only addressing mistakes
//! (an id that does not exist) and the last-location rule are errors.

use heapless::String as HeaplessString;
use uuid::Uuid;

use onboarding_api::{OnboardingError, OnboardingResult};

use crate::models::{
    BillingPatch, BusinessLocation, BusinessLocationPatch, CompanyPatch, ConsentsPatch,
    ContactPersonPatch, DevicePatch, TradingProfilePatch,
};

use super::OnboardingController;

impl OnboardingController {
    pub fn update_company(&mut self, patch: CompanyPatch) {
        self.state_mut().company.apply(patch);
    }

    pub fn update_business(&mut self, patch: TradingProfilePatch) {
        self.state_mut().business.trading.apply(patch);
    }

    pub fn update_billing(&mut self, patch: BillingPatch) {
        self.state_mut().billing.apply(patch);
    }

    pub fn update_consents(&mut self, patch: ConsentsPatch) {
        self.state_mut().consents.apply(patch);
    }

    pub fn update_business_contact(&mut self, patch: ContactPersonPatch) {
        self.state_mut().business_contact.apply(patch);
    }

    pub fn update_technical_contact(&mut self, patch: ContactPersonPatch) {
        self.state_mut().technical_contact.apply(patch);
    }

    /// Add a further operating location; the returned id addresses it
    /// from now on. Any id on the passed record is replaced.
    pub fn add_location(&mut self, mut location: BusinessLocation) -> Uuid {
        location.id = Uuid::new_v4();
        let id = location.id;
        self.state_mut().business.locations.push(location);
        id
    }

    pub fn update_location(
        &mut self,
        id: Uuid,
        patch: BusinessLocationPatch,
    ) -> OnboardingResult<()> {
        let location = self
            .state_mut()
            .business
            .locations
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or(OnboardingError::UnknownLocation(id))?;
        location.apply(patch);
        Ok(())
    }

    /// Remove a location. The last remaining location cannot be removed;
    /// a merchant without any operating site cannot be onboarded.
    pub fn remove_location(&mut self, id: Uuid) -> OnboardingResult<()> {
        let locations = &mut self.state_mut().business.locations;
        let position = locations
            .iter()
            .position(|l| l.id == id)
            .ok_or(OnboardingError::UnknownLocation(id))?;
        if locations.len() == 1 {
            return Err(OnboardingError::ValidationError(
                "at least one business location is required".to_string(),
            ));
        }
        locations.remove(position);
        Ok(())
    }

    pub fn update_device(&mut self, id: Uuid, patch: DevicePatch) -> OnboardingResult<()> {
        let device = self
            .state_mut()
            .products
            .device_mut(id)
            .ok_or(OnboardingError::UnknownCatalogItem(id))?;
        device.apply(patch);
        Ok(())
    }

    pub fn update_license(&mut self, id: Uuid, selected: bool) -> OnboardingResult<()> {
        let license = self
            .state_mut()
            .products
            .license_mut(id)
            .ok_or(OnboardingError::UnknownCatalogItem(id))?;
        license.selected = selected;
        Ok(())
    }

    pub fn update_payment_method(
        &mut self,
        id: Uuid,
        selected: bool,
        note: Option<HeaplessString<100>>,
    ) -> OnboardingResult<()> {
        let method = self
            .state_mut()
            .products
            .payment_method_mut(id)
            .ok_or(OnboardingError::UnknownCatalogItem(id))?;
        method.selected = selected;
        if let Some(note) = note {
            method.note = Some(note);
        }
        Ok(())
    }

    pub fn update_service(
        &mut self,
        id: Uuid,
        selected: bool,
        note: Option<HeaplessString<100>>,
    ) -> OnboardingResult<()> {
        let service = self
            .state_mut()
            .products
            .service_mut(id)
            .ok_or(OnboardingError::UnknownCatalogItem(id))?;
        service.selected = selected;
        if let Some(note) = note {
            service.note = Some(note);
        }
        Ok(())
    }
}
