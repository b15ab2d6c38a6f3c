use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};

/// Postal address shared by the company record, business locations,
/// billing details and beneficial owners.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub street: HeaplessString<100>,
    pub city: HeaplessString<50>,
    pub postal_code: HeaplessString<10>,
    /// ISO 3166-1 alpha-2 country code
    pub country: HeaplessString<2>,
}

impl Address {
    /// Completion predicates consider an address usable once street and
    /// city are filled; postal code and country stay optional inputs.
    pub fn is_filled(&self) -> bool {
        !self.street.is_empty() && !self.city.is_empty()
    }

    pub fn apply(&mut self, patch: AddressPatch) {
        if let Some(street) = patch.street {
            self.street = street;
        }
        if let Some(city) = patch.city {
            self.city = city;
        }
        if let Some(postal_code) = patch.postal_code {
            self.postal_code = postal_code;
        }
        if let Some(country) = patch.country {
            self.country = country;
        }
    }
}

/// Partial update for [`Address`]; absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddressPatch {
    pub street: Option<HeaplessString<100>>,
    pub city: Option<HeaplessString<50>>,
    pub postal_code: Option<HeaplessString<10>>,
    pub country: Option<HeaplessString<2>>,
}
