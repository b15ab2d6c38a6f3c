use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// One named stage of the onboarding wizard, fixed order.
///
/// The string token of every step doubles as a route segment for deep
/// links (`/onboarding/:step`) and as the storage token inside session
/// snapshots, so the spelling is load-bearing and must stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    Company,
    Business,
    Products,
    Persons,
    BeneficialOwners,
    Billing,
    Sign,
}

impl Step {
    /// All steps in wizard order.
    pub const ORDER: [Step; 7] = [
        Step::Company,
        Step::Business,
        Step::Products,
        Step::Persons,
        Step::BeneficialOwners,
        Step::Billing,
        Step::Sign,
    ];

    /// Initial step of a fresh session.
    pub const FIRST: Step = Step::Company;

    /// Terminal step; there is no explicit "completed" state beyond
    /// remaining here with every predicate satisfied.
    pub const LAST: Step = Step::Sign;

    /// Zero-based position in the wizard order.
    pub fn index(self) -> usize {
        match self {
            Step::Company => 0,
            Step::Business => 1,
            Step::Products => 2,
            Step::Persons => 3,
            Step::BeneficialOwners => 4,
            Step::Billing => 5,
            Step::Sign => 6,
        }
    }

    /// The step after this one, or `None` on the terminal step.
    pub fn next(self) -> Option<Step> {
        Self::ORDER.get(self.index() + 1).copied()
    }

    /// The step before this one, or `None` on the first step.
    pub fn prev(self) -> Option<Step> {
        self.index().checked_sub(1).map(|i| Self::ORDER[i])
    }

    /// Route segment / storage token for this step.
    pub fn as_str(self) -> &'static str {
        match self {
            Step::Company => "company",
            Step::Business => "business",
            Step::Products => "products",
            Step::Persons => "persons",
            Step::BeneficialOwners => "beneficialOwners",
            Step::Billing => "billing",
            Step::Sign => "sign",
        }
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Step {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "company" => Ok(Step::Company),
            "business" => Ok(Step::Business),
            "products" => Ok(Step::Products),
            "persons" => Ok(Step::Persons),
            "beneficialOwners" => Ok(Step::BeneficialOwners),
            "billing" => Ok(Step::Billing),
            "sign" => Ok(Step::Sign),
            _ => Err(()),
        }
    }
}

impl Serialize for Step {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Step {
    fn deserialize<D>(deserializer: D) -> Result<Step, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value_str = String::deserialize(deserializer)?;
        Step::from_str(&value_str)
            .map_err(|_| de::Error::custom(format!("Invalid Step: {value_str}")))
    }
}
