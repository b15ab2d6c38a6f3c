use chrono::NaiveDate;
use heapless::String as HeaplessString;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;
use uuid::Uuid;

use crate::models::address::{Address, AddressPatch};

/// Identity document kind accepted for signatories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IdentityDocumentType {
    #[default]
    IdCard,
    Passport,
    ResidencePermit,
    DriverLicense,
}

impl std::fmt::Display for IdentityDocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdentityDocumentType::IdCard => write!(f, "IdCard"),
            IdentityDocumentType::Passport => write!(f, "Passport"),
            IdentityDocumentType::ResidencePermit => write!(f, "ResidencePermit"),
            IdentityDocumentType::DriverLicense => write!(f, "DriverLicense"),
        }
    }
}

impl FromStr for IdentityDocumentType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "IdCard" => Ok(IdentityDocumentType::IdCard),
            "Passport" => Ok(IdentityDocumentType::Passport),
            "ResidencePermit" => Ok(IdentityDocumentType::ResidencePermit),
            "DriverLicense" => Ok(IdentityDocumentType::DriverLicense),
            _ => Err(()),
        }
    }
}

impl Serialize for IdentityDocumentType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for IdentityDocumentType {
    fn deserialize<D>(deserializer: D) -> Result<IdentityDocumentType, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value_str = String::deserialize(deserializer)?;
        IdentityDocumentType::from_str(&value_str).map_err(|_| {
            serde::de::Error::custom(format!("Invalid IdentityDocumentType: {value_str}"))
        })
    }
}

/// Business or technical contact of the merchant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactPerson {
    pub first_name: HeaplessString<50>,
    pub last_name: HeaplessString<50>,
    pub email: Option<HeaplessString<100>>,
    pub phone: Option<HeaplessString<30>>,
    pub position: Option<HeaplessString<50>>,
}

impl ContactPerson {
    pub fn has_name(&self) -> bool {
        !self.first_name.is_empty() && !self.last_name.is_empty()
    }

    /// At least one way to reach the person.
    pub fn has_contact_channel(&self) -> bool {
        self.email.as_ref().is_some_and(|e| !e.is_empty())
            || self.phone.as_ref().is_some_and(|p| !p.is_empty())
    }

    pub fn apply(&mut self, patch: ContactPersonPatch) {
        if let Some(first_name) = patch.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name {
            self.last_name = last_name;
        }
        if let Some(email) = patch.email {
            self.email = Some(email);
        }
        if let Some(phone) = patch.phone {
            self.phone = Some(phone);
        }
        if let Some(position) = patch.position {
            self.position = Some(position);
        }
    }
}

/// Partial update for [`ContactPerson`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactPersonPatch {
    pub first_name: Option<HeaplessString<50>>,
    pub last_name: Option<HeaplessString<50>>,
    pub email: Option<HeaplessString<100>>,
    pub phone: Option<HeaplessString<30>>,
    pub position: Option<HeaplessString<50>>,
}

/// Person empowered to sign the contract for the merchant entity.
///
/// The id is a synthetic identifier issued when the record is added to a
/// session; every later update or removal addresses the record by this id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorizedSignatory {
    pub id: Uuid,
    pub first_name: HeaplessString<50>,
    pub last_name: HeaplessString<50>,
    pub birth_date: Option<NaiveDate>,
    /// ISO 3166-1 alpha-2 country code
    pub nationality: Option<HeaplessString<2>>,
    pub document_type: IdentityDocumentType,
    pub document_number: HeaplessString<50>,
    pub document_valid_until: Option<NaiveDate>,
    /// Politically exposed person flag; triggers compliance handling
    /// downstream, not modelled here.
    pub politically_exposed: bool,
}

impl AuthorizedSignatory {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            first_name: HeaplessString::new(),
            last_name: HeaplessString::new(),
            birth_date: None,
            nationality: None,
            document_type: IdentityDocumentType::default(),
            document_number: HeaplessString::new(),
            document_valid_until: None,
            politically_exposed: false,
        }
    }

    pub fn apply(&mut self, patch: SignatoryPatch) {
        if let Some(first_name) = patch.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name {
            self.last_name = last_name;
        }
        if let Some(birth_date) = patch.birth_date {
            self.birth_date = Some(birth_date);
        }
        if let Some(nationality) = patch.nationality {
            self.nationality = Some(nationality);
        }
        if let Some(document_type) = patch.document_type {
            self.document_type = document_type;
        }
        if let Some(document_number) = patch.document_number {
            self.document_number = document_number;
        }
        if let Some(valid_until) = patch.document_valid_until {
            self.document_valid_until = Some(valid_until);
        }
        if let Some(pep) = patch.politically_exposed {
            self.politically_exposed = pep;
        }
    }
}

impl Default for AuthorizedSignatory {
    fn default() -> Self {
        Self::new()
    }
}

/// Partial update for [`AuthorizedSignatory`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignatoryPatch {
    pub first_name: Option<HeaplessString<50>>,
    pub last_name: Option<HeaplessString<50>>,
    pub birth_date: Option<NaiveDate>,
    pub nationality: Option<HeaplessString<2>>,
    pub document_type: Option<IdentityDocumentType>,
    pub document_number: Option<HeaplessString<50>>,
    pub document_valid_until: Option<NaiveDate>,
    pub politically_exposed: Option<bool>,
}

/// Individual ultimately owning or controlling the merchant entity,
/// subject to identity disclosure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeneficialOwner {
    pub id: Uuid,
    pub first_name: HeaplessString<50>,
    pub last_name: HeaplessString<50>,
    pub birth_date: Option<NaiveDate>,
    /// ISO 3166-1 alpha-2 country code
    pub nationality: Option<HeaplessString<2>>,
    pub residence: Address,
    /// Disclosed ownership share in percent, informational only.
    pub ownership_percent: Option<Decimal>,
    pub politically_exposed: bool,
}

impl BeneficialOwner {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            first_name: HeaplessString::new(),
            last_name: HeaplessString::new(),
            birth_date: None,
            nationality: None,
            residence: Address::default(),
            ownership_percent: None,
            politically_exposed: false,
        }
    }

    /// Required identity disclosure: full name, birth date, nationality.
    pub fn has_required_identity(&self) -> bool {
        !self.first_name.is_empty()
            && !self.last_name.is_empty()
            && self.birth_date.is_some()
            && self.nationality.as_ref().is_some_and(|n| !n.is_empty())
    }

    pub fn apply(&mut self, patch: BeneficialOwnerPatch) {
        if let Some(first_name) = patch.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name {
            self.last_name = last_name;
        }
        if let Some(birth_date) = patch.birth_date {
            self.birth_date = Some(birth_date);
        }
        if let Some(nationality) = patch.nationality {
            self.nationality = Some(nationality);
        }
        if let Some(residence) = patch.residence {
            self.residence.apply(residence);
        }
        if let Some(share) = patch.ownership_percent {
            self.ownership_percent = Some(share);
        }
        if let Some(pep) = patch.politically_exposed {
            self.politically_exposed = pep;
        }
    }
}

impl Default for BeneficialOwner {
    fn default() -> Self {
        Self::new()
    }
}

/// Partial update for [`BeneficialOwner`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BeneficialOwnerPatch {
    pub first_name: Option<HeaplessString<50>>,
    pub last_name: Option<HeaplessString<50>>,
    pub birth_date: Option<NaiveDate>,
    pub nationality: Option<HeaplessString<2>>,
    pub residence: Option<AddressPatch>,
    pub ownership_percent: Option<Decimal>,
    pub politically_exposed: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_channel_requires_non_empty_value() {
        let mut contact = ContactPerson::default();
        assert!(!contact.has_contact_channel());

        contact.email = Some(HeaplessString::new());
        assert!(!contact.has_contact_channel());

        contact.email = Some(HeaplessString::try_from("jan@example.com").unwrap());
        assert!(contact.has_contact_channel());
    }

    #[test]
    fn owner_identity_requires_all_fields() {
        let mut owner = BeneficialOwner::new();
        owner.apply(BeneficialOwnerPatch {
            first_name: Some(HeaplessString::try_from("Eva").unwrap()),
            last_name: Some(HeaplessString::try_from("Nová").unwrap()),
            ..Default::default()
        });
        assert!(!owner.has_required_identity());

        owner.apply(BeneficialOwnerPatch {
            birth_date: NaiveDate::from_ymd_opt(1980, 5, 1),
            nationality: Some(HeaplessString::try_from("SK").unwrap()),
            ..Default::default()
        });
        assert!(owner.has_required_identity());
    }

    #[test]
    fn document_type_serde_round_trip() {
        let json = serde_json::to_string(&IdentityDocumentType::Passport).unwrap();
        assert_eq!(json, "\"Passport\"");
        let back: IdentityDocumentType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, IdentityDocumentType::Passport);
    }
}
