use crate::units::Currency;
use serde::{Deserialize, Serialize};

/// A manual edit on the production cost sheet. Applying an edit pins the field
/// so that later upstream recomputation leaves it alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CostEdit {
    SetPlCount {
        count: f64,
    },
    /// Price per thousand postlarvae.
    SetPlUnitPrice {
        price: f64,
    },
    SetFeedAmount {
        kg: f64,
    },
    SetFeedUnitPrice {
        price_per_kg: f64,
    },
    SetAerationPower {
        kw: f64,
    },
    SetOperationHours {
        hours_per_day: f64,
    },
    SetEnergyUnitPrice {
        price_per_kwh: f64,
    },
    SetCultureDuration {
        days: f64,
    },
    SetMonthlyLaborCost {
        amount: f64,
    },
    SetWorkerCount {
        count: f64,
    },
    SetOtherCosts {
        amount: f64,
    },
    SetSellingPrice {
        price_per_kg: f64,
    },
    SetCurrency {
        currency: Currency,
    },
}
