use heapless::String as HeaplessString;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;
use uuid::Uuid;

/// How a selected device is acquired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseMode {
    Rental,
    Purchase,
}

impl std::fmt::Display for PurchaseMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PurchaseMode::Rental => write!(f, "Rental"),
            PurchaseMode::Purchase => write!(f, "Purchase"),
        }
    }
}

impl FromStr for PurchaseMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Rental" => Ok(PurchaseMode::Rental),
            "Purchase" => Ok(PurchaseMode::Purchase),
            _ => Err(()),
        }
    }
}

impl Serialize for PurchaseMode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for PurchaseMode {
    fn deserialize<D>(deserializer: D) -> Result<PurchaseMode, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value_str = String::deserialize(deserializer)?;
        PurchaseMode::from_str(&value_str)
            .map_err(|_| serde::de::Error::custom(format!("Invalid PurchaseMode: {value_str}")))
    }
}

/// Contract commitment term for a device, limited to the three terms the
/// product department offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitmentMonths {
    Months12,
    Months24,
    Months36,
}

impl CommitmentMonths {
    pub fn as_months(self) -> u8 {
        match self {
            CommitmentMonths::Months12 => 12,
            CommitmentMonths::Months24 => 24,
            CommitmentMonths::Months36 => 36,
        }
    }
}

impl TryFrom<u8> for CommitmentMonths {
    type Error = ();

    fn try_from(months: u8) -> Result<Self, Self::Error> {
        match months {
            12 => Ok(CommitmentMonths::Months12),
            24 => Ok(CommitmentMonths::Months24),
            36 => Ok(CommitmentMonths::Months36),
            _ => Err(()),
        }
    }
}

/// Serialized as the plain month count so stored blobs read naturally.
pub fn serialize_commitment_months<S>(
    value: &CommitmentMonths,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_u8(value.as_months())
}

pub fn deserialize_commitment_months<'de, D>(deserializer: D) -> Result<CommitmentMonths, D::Error>
where
    D: Deserializer<'de>,
{
    let months = u8::deserialize(deserializer)?;
    CommitmentMonths::try_from(months).map_err(|_| {
        serde::de::Error::custom(format!("Invalid commitment term: {months} months"))
    })
}

/// Billing cadence for recurring device and license fees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BillingCycle {
    #[default]
    Monthly,
    Quarterly,
    Annual,
}

/// One hardware item of the device catalog together with the merchant's
/// selection for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceSelection {
    pub id: Uuid,
    pub name: HeaplessString<100>,
    /// Monthly rental price of one unit.
    pub monthly_rental_price: Decimal,
    /// One-off purchase price of one unit.
    pub purchase_price: Decimal,
    pub selected: bool,
    pub quantity: u32,
    pub purchase_mode: PurchaseMode,
    #[serde(
        serialize_with = "serialize_commitment_months",
        deserialize_with = "deserialize_commitment_months"
    )]
    pub commitment: CommitmentMonths,
    pub billing_cycle: BillingCycle,
}

impl DeviceSelection {
    pub fn apply(&mut self, patch: DevicePatch) {
        if let Some(selected) = patch.selected {
            self.selected = selected;
        }
        if let Some(quantity) = patch.quantity {
            self.quantity = quantity;
        }
        if let Some(purchase_mode) = patch.purchase_mode {
            self.purchase_mode = purchase_mode;
        }
        if let Some(commitment) = patch.commitment {
            self.commitment = commitment;
        }
        if let Some(billing_cycle) = patch.billing_cycle {
            self.billing_cycle = billing_cycle;
        }
        // A selected device always ships at least one unit.
        if self.selected && self.quantity == 0 {
            self.quantity = 1;
        }
    }
}

/// Partial update for [`DeviceSelection`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DevicePatch {
    pub selected: Option<bool>,
    pub quantity: Option<u32>,
    pub purchase_mode: Option<PurchaseMode>,
    pub commitment: Option<CommitmentMonths>,
    pub billing_cycle: Option<BillingCycle>,
}

/// One software license of the catalog; selection is a plain toggle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LicenseSelection {
    pub id: Uuid,
    pub name: HeaplessString<100>,
    pub monthly_price: Decimal,
    pub selected: bool,
}

/// One acceptable payment rail, with an optional merchant note (card
/// scheme details, voucher issuer and similar).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodSelection {
    pub id: Uuid,
    pub name: HeaplessString<100>,
    pub selected: bool,
    pub note: Option<HeaplessString<100>>,
}

/// One add-on service (installation, training, extended support).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceSelection {
    pub id: Uuid,
    pub name: HeaplessString<100>,
    pub selected: bool,
    pub note: Option<HeaplessString<100>>,
}

/// Products step aggregate: the four selectable catalogs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductSelection {
    pub devices: Vec<DeviceSelection>,
    pub licenses: Vec<LicenseSelection>,
    pub payment_methods: Vec<PaymentMethodSelection>,
    pub services: Vec<ServiceSelection>,
}

impl ProductSelection {
    pub fn device_mut(&mut self, id: Uuid) -> Option<&mut DeviceSelection> {
        self.devices.iter_mut().find(|d| d.id == id)
    }

    pub fn license_mut(&mut self, id: Uuid) -> Option<&mut LicenseSelection> {
        self.licenses.iter_mut().find(|l| l.id == id)
    }

    pub fn payment_method_mut(&mut self, id: Uuid) -> Option<&mut PaymentMethodSelection> {
        self.payment_methods.iter_mut().find(|m| m.id == id)
    }

    pub fn service_mut(&mut self, id: Uuid) -> Option<&mut ServiceSelection> {
        self.services.iter_mut().find(|s| s.id == id)
    }

    /// True once anything across the four catalogs is selected.
    pub fn has_any_selection(&self) -> bool {
        self.devices.iter().any(|d| d.selected)
            || self.licenses.iter().any(|l| l.selected)
            || self.payment_methods.iter().any(|m| m.selected)
            || self.services.iter().any(|s| s.selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_device() -> DeviceSelection {
        DeviceSelection {
            id: Uuid::new_v4(),
            name: HeaplessString::try_from("Test terminal").unwrap(),
            monthly_rental_price: Decimal::new(1990, 2),
            purchase_price: Decimal::new(24900, 2),
            selected: false,
            quantity: 1,
            purchase_mode: PurchaseMode::Rental,
            commitment: CommitmentMonths::Months24,
            billing_cycle: BillingCycle::Monthly,
        }
    }

    #[test]
    fn selecting_a_device_enforces_minimum_quantity() {
        let mut device = test_device();
        device.quantity = 0;
        device.apply(DevicePatch {
            selected: Some(true),
            ..Default::default()
        });
        assert_eq!(device.quantity, 1);
    }

    #[test]
    fn commitment_serializes_as_month_count() {
        let device = test_device();
        let json = serde_json::to_value(&device).unwrap();
        assert_eq!(json["commitment"], 24);

        let back: DeviceSelection = serde_json::from_value(json).unwrap();
        assert_eq!(back.commitment, CommitmentMonths::Months24);
    }

    #[test]
    fn purchase_mode_uses_its_display_tokens_on_the_wire() {
        let mut json = serde_json::to_value(test_device()).unwrap();
        assert_eq!(json["purchase_mode"], "Rental");

        json["purchase_mode"] = serde_json::json!("Purchase");
        let back: DeviceSelection = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(back.purchase_mode, PurchaseMode::Purchase);

        json["purchase_mode"] = serde_json::json!("Leasing");
        assert!(serde_json::from_value::<DeviceSelection>(json).is_err());
    }

    #[test]
    fn invalid_commitment_term_is_rejected() {
        let mut json = serde_json::to_value(test_device()).unwrap();
        json["commitment"] = serde_json::json!(18);
        assert!(serde_json::from_value::<DeviceSelection>(json).is_err());
    }
}
