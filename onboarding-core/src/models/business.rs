use heapless::String as HeaplessString;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::address::{Address, AddressPatch};

/// One operating location of the merchant (shop, stall, service point).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessLocation {
    pub id: Uuid,
    pub name: HeaplessString<100>,
    pub address: Address,
    pub phone: Option<HeaplessString<30>>,
}

impl BusinessLocation {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: HeaplessString::new(),
            address: Address::default(),
            phone: None,
        }
    }

    pub fn apply(&mut self, patch: BusinessLocationPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(address) = patch.address {
            self.address.apply(address);
        }
        if let Some(phone) = patch.phone {
            self.phone = Some(phone);
        }
    }
}

impl Default for BusinessLocation {
    fn default() -> Self {
        Self::new()
    }
}

/// Partial update for [`BusinessLocation`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BusinessLocationPatch {
    pub name: Option<HeaplessString<100>>,
    pub address: Option<AddressPatch>,
    pub phone: Option<HeaplessString<30>>,
}

/// Trading profile of the business: hours, seasonality, volume estimates
/// and connectivity available at the point of sale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TradingProfile {
    /// Free-form opening hours as entered by the merchant.
    pub opening_hours: Option<HeaplessString<200>>,
    pub seasonal: bool,
    /// Months per year the business operates; only meaningful while
    /// `seasonal` is true.
    pub seasonal_months: Option<u8>,
    pub estimated_annual_turnover: Option<Decimal>,
    pub average_transaction_value: Option<Decimal>,
    pub has_internet_connection: bool,
    pub has_wifi: bool,
}

impl TradingProfile {
    pub fn apply(&mut self, patch: TradingProfilePatch) {
        if let Some(opening_hours) = patch.opening_hours {
            self.opening_hours = Some(opening_hours);
        }
        if let Some(seasonal) = patch.seasonal {
            self.seasonal = seasonal;
            if !seasonal {
                // Duration carries no meaning for a year-round business.
                self.seasonal_months = None;
            }
        }
        if let Some(seasonal_months) = patch.seasonal_months {
            if self.seasonal {
                self.seasonal_months = Some(seasonal_months);
            }
        }
        if let Some(turnover) = patch.estimated_annual_turnover {
            self.estimated_annual_turnover = Some(turnover);
        }
        if let Some(avg) = patch.average_transaction_value {
            self.average_transaction_value = Some(avg);
        }
        if let Some(internet) = patch.has_internet_connection {
            self.has_internet_connection = internet;
        }
        if let Some(wifi) = patch.has_wifi {
            self.has_wifi = wifi;
        }
    }
}

/// Partial update for [`TradingProfile`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TradingProfilePatch {
    pub opening_hours: Option<HeaplessString<200>>,
    pub seasonal: Option<bool>,
    pub seasonal_months: Option<u8>,
    pub estimated_annual_turnover: Option<Decimal>,
    pub average_transaction_value: Option<Decimal>,
    pub has_internet_connection: Option<bool>,
    pub has_wifi: Option<bool>,
}

/// Business step aggregate: the location list plus the trading profile.
///
/// Invariant: `locations` is never empty. A fresh state starts with one
/// blank location and the controller refuses to remove the last one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessInfo {
    pub locations: Vec<BusinessLocation>,
    pub trading: TradingProfile,
}

impl Default for BusinessInfo {
    fn default() -> Self {
        Self {
            locations: vec![BusinessLocation::new()],
            trading: TradingProfile::default(),
        }
    }
}
