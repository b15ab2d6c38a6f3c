use heapless::String as HeaplessString;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::products::{
    BillingCycle, CommitmentMonths, DeviceSelection, LicenseSelection, PaymentMethodSelection,
    ProductSelection, PurchaseMode, ServiceSelection,
};

fn item_name(name: &str) -> HeaplessString<100> {
    // Catalog names are compile-time literals well under the capacity.
    HeaplessString::try_from(name).unwrap_or_default()
}

fn device(name: &str, rental_cents: i64, purchase_cents: i64) -> DeviceSelection {
    DeviceSelection {
        id: Uuid::new_v4(),
        name: item_name(name),
        monthly_rental_price: Decimal::new(rental_cents, 2),
        purchase_price: Decimal::new(purchase_cents, 2),
        selected: false,
        quantity: 1,
        purchase_mode: PurchaseMode::Rental,
        commitment: CommitmentMonths::Months24,
        billing_cycle: BillingCycle::Monthly,
    }
}

fn license(name: &str, monthly_cents: i64) -> LicenseSelection {
    LicenseSelection {
        id: Uuid::new_v4(),
        name: item_name(name),
        monthly_price: Decimal::new(monthly_cents, 2),
        selected: false,
    }
}

fn payment_method(name: &str) -> PaymentMethodSelection {
    PaymentMethodSelection {
        id: Uuid::new_v4(),
        name: item_name(name),
        selected: false,
        note: None,
    }
}

fn service(name: &str) -> ServiceSelection {
    ServiceSelection {
        id: Uuid::new_v4(),
        name: item_name(name),
        selected: false,
        note: None,
    }
}

/// The product catalog offered to every new merchant, with nothing
/// selected yet. Entry ids are generated per session; selections are
/// addressed by id, never by position.
pub fn default_catalog() -> ProductSelection {
    ProductSelection {
        devices: vec![
            device("A920 Pro payment terminal", 1990, 39900),
            device("IM30 unattended terminal", 2490, 49900),
            device("Cash register tablet 10\"", 1490, 29900),
            device("Receipt printer 80 mm", 690, 14900),
        ],
        licenses: vec![
            license("POS cash register licence", 990),
            license("Inventory module", 490),
            license("E-commerce gateway", 1290),
        ],
        payment_methods: vec![
            payment_method("Visa / Mastercard"),
            payment_method("Maestro / V Pay"),
            payment_method("Meal voucher cards"),
            payment_method("Apple Pay / Google Pay"),
        ],
        services: vec![
            service("On-site installation"),
            service("Staff training"),
            service("Extended support 24/7"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_starts_unselected() {
        let catalog = default_catalog();
        assert!(!catalog.has_any_selection());
        assert!(!catalog.devices.is_empty());
        assert!(!catalog.licenses.is_empty());
        assert!(!catalog.payment_methods.is_empty());
        assert!(!catalog.services.is_empty());
    }

    #[test]
    fn catalog_ids_are_unique() {
        let catalog = default_catalog();
        let mut ids: Vec<Uuid> = catalog
            .devices
            .iter()
            .map(|d| d.id)
            .chain(catalog.licenses.iter().map(|l| l.id))
            .chain(catalog.payment_methods.iter().map(|m| m.id))
            .chain(catalog.services.iter().map(|s| s.id))
            .collect();
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }
}
