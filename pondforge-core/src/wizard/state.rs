use crate::{
    constants::{
        DEFAULT_CULTURE_DAYS, DEFAULT_FCR, DEFAULT_OPERATION_HOURS, DEFAULT_SURVIVAL_PCT,
        DEFAULT_WORKER_COUNT,
    },
    economics::ProductionCostInputs,
    error::PondforgeError,
    input::{check_value, provided},
};
use pondforge_schemas::{
    command::CostEdit,
    file_formats::EconomicsSection,
    units::Currency,
};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Growth,
    Feed,
    Aeration,
    Water,
    Economics,
}

impl WizardStep {
    pub const ALL: [WizardStep; 5] = [
        WizardStep::Growth,
        WizardStep::Feed,
        WizardStep::Aeration,
        WizardStep::Water,
        WizardStep::Economics,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            WizardStep::Growth => "Growth & Stocking",
            WizardStep::Feed => "Feed Management",
            WizardStep::Aeration => "Aeration & Environment",
            WizardStep::Water => "Water Quality",
            WizardStep::Economics => "Economics",
        }
    }

    pub fn next(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Growth => Some(WizardStep::Feed),
            WizardStep::Feed => Some(WizardStep::Aeration),
            WizardStep::Aeration => Some(WizardStep::Water),
            WizardStep::Water => Some(WizardStep::Economics),
            WizardStep::Economics => None,
        }
    }
}

/// Values the growth step hands to later steps. Absent values are `None`,
/// never zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GrowthContext {
    pub pond_area_m2: Option<f64>,
    pub pl_density: Option<f64>,
    pub total_pl: Option<f64>,
    pub culture_days: Option<f64>,
    /// Projected individual weight at harvest, grams.
    pub final_weight_g: Option<f64>,
    pub survival_pct: f64,
}

impl Default for GrowthContext {
    fn default() -> Self {
        Self {
            pond_area_m2: None,
            pl_density: None,
            total_pl: None,
            culture_days: None,
            final_weight_g: None,
            survival_pct: DEFAULT_SURVIVAL_PCT,
        }
    }
}

impl GrowthContext {
    /// Projected harvest biomass in kg: surviving PL times final weight.
    pub fn projected_harvest_kg(&self) -> Option<f64> {
        let total_pl = self.total_pl?;
        let weight_g = self.final_weight_g?;
        let biomass = total_pl * (self.survival_pct / 100.0) * weight_g / 1000.0;
        (biomass > 0.0).then_some(biomass)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeedContext {
    pub total_biomass_kg: Option<f64>,
    pub fcr: f64,
    pub feeding_period_days: Option<f64>,
    pub total_feed_kg: Option<f64>,
    pub feed_price_per_kg: Option<f64>,
}

impl Default for FeedContext {
    fn default() -> Self {
        Self {
            total_biomass_kg: None,
            fcr: DEFAULT_FCR,
            feeding_period_days: None,
            total_feed_kg: None,
            feed_price_per_kg: None,
        }
    }
}

/// Where the current value of a cost-sheet field came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldOrigin {
    Default,
    Seeded,
    UserEdited,
}

/// A cost-sheet number together with its origin. Seeding never touches a
/// `UserEdited` field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostField {
    pub value: f64,
    pub origin: FieldOrigin,
    #[serde(skip)]
    default: f64,
}

impl CostField {
    pub fn with_default(value: f64) -> Self {
        Self {
            value,
            origin: FieldOrigin::Default,
            default: value,
        }
    }

    /// Takes the upstream value if one is present and positive; otherwise
    /// falls back to the local default. Returns whether the field changed.
    pub fn seed(&mut self, upstream: Option<f64>) -> bool {
        if self.origin == FieldOrigin::UserEdited {
            return false;
        }
        let before = *self;
        match upstream.filter(|value| *value > 0.0) {
            Some(value) => {
                self.value = value;
                self.origin = FieldOrigin::Seeded;
            }
            None => {
                self.value = self.default;
                self.origin = FieldOrigin::Default;
            }
        }
        before != *self
    }

    pub fn edit(&mut self, value: f64) {
        self.value = value;
        self.origin = FieldOrigin::UserEdited;
    }

    pub fn is_user_edited(&self) -> bool {
        self.origin == FieldOrigin::UserEdited
    }
}

/// Editable production-cost inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostSheet {
    pub pl_count: CostField,
    /// Per thousand PL.
    pub pl_unit_price: CostField,
    pub feed_amount_kg: CostField,
    pub feed_unit_price: CostField,
    pub aeration_power_kw: CostField,
    pub operation_hours: CostField,
    pub energy_unit_price: CostField,
    pub culture_days: CostField,
    pub monthly_labor_cost: CostField,
    pub worker_count: CostField,
    pub other_costs: CostField,
    pub selling_price: CostField,
    pub currency: Currency,
}

impl Default for CostSheet {
    fn default() -> Self {
        Self {
            pl_count: CostField::with_default(0.0),
            pl_unit_price: CostField::with_default(0.0),
            feed_amount_kg: CostField::with_default(0.0),
            feed_unit_price: CostField::with_default(0.0),
            aeration_power_kw: CostField::with_default(0.0),
            operation_hours: CostField::with_default(DEFAULT_OPERATION_HOURS),
            energy_unit_price: CostField::with_default(0.0),
            culture_days: CostField::with_default(DEFAULT_CULTURE_DAYS),
            monthly_labor_cost: CostField::with_default(0.0),
            worker_count: CostField::with_default(DEFAULT_WORKER_COUNT),
            other_costs: CostField::with_default(0.0),
            selling_price: CostField::with_default(0.0),
            currency: Currency::default(),
        }
    }
}

impl CostSheet {
    /// A sheet with the values typed on the economics page. Those count as
    /// user edits.
    pub fn from_section(section: &EconomicsSection) -> Self {
        let mut sheet = Self::default();
        let entries = [
            (&mut sheet.pl_unit_price, "economics.pl_unit_price", &section.pl_unit_price),
            (&mut sheet.feed_unit_price, "economics.feed_unit_price", &section.feed_unit_price),
            (&mut sheet.aeration_power_kw, "economics.aeration_power_kw", &section.aeration_power_kw),
            (&mut sheet.operation_hours, "economics.operation_hours", &section.operation_hours),
            (&mut sheet.energy_unit_price, "economics.energy_unit_price", &section.energy_unit_price),
            (&mut sheet.culture_days, "economics.culture_days", &section.culture_days),
            (&mut sheet.monthly_labor_cost, "economics.monthly_labor_cost", &section.monthly_labor_cost),
            (&mut sheet.worker_count, "economics.worker_count", &section.worker_count),
            (&mut sheet.other_costs, "economics.other_costs", &section.other_costs),
            (&mut sheet.selling_price, "economics.selling_price", &section.selling_price),
        ];
        for (field, name, raw) in entries {
            if let Some(value) = provided(name, raw.as_ref()) {
                field.edit(value);
            }
        }
        if let Some(currency) = section.currency {
            sheet.currency = currency;
        }
        sheet
    }

    /// A default sheet seeded from the upstream steps.
    pub fn seeded_from(growth: &GrowthContext, feed: &FeedContext) -> Self {
        let mut sheet = Self::default();
        sheet.seed(growth, feed);
        sheet
    }

    /// Pulls PL count, feed amount, feed price and culture duration from the
    /// upstream steps into every field that has not been edited.
    pub fn seed(&mut self, growth: &GrowthContext, feed: &FeedContext) {
        self.pl_count.seed(growth.total_pl);
        self.feed_amount_kg.seed(feed.total_feed_kg);
        self.feed_unit_price.seed(feed.feed_price_per_kg);
        self.culture_days.seed(feed.feeding_period_days.or(growth.culture_days));
    }

    /// Applies one edit. A negative or non-finite value is rejected and the
    /// field keeps its previous value and origin.
    pub fn apply(&mut self, edit: &CostEdit) -> Result<(), PondforgeError> {
        let (field, name, value) = match *edit {
            CostEdit::SetPlCount { count } => (&mut self.pl_count, "pl_count", count),
            CostEdit::SetPlUnitPrice { price } => (&mut self.pl_unit_price, "pl_unit_price", price),
            CostEdit::SetFeedAmount { kg } => (&mut self.feed_amount_kg, "feed_amount_kg", kg),
            CostEdit::SetFeedUnitPrice { price_per_kg } => {
                (&mut self.feed_unit_price, "feed_unit_price", price_per_kg)
            }
            CostEdit::SetAerationPower { kw } => (&mut self.aeration_power_kw, "aeration_power_kw", kw),
            CostEdit::SetOperationHours { hours_per_day } => {
                (&mut self.operation_hours, "operation_hours", hours_per_day)
            }
            CostEdit::SetEnergyUnitPrice { price_per_kwh } => {
                (&mut self.energy_unit_price, "energy_unit_price", price_per_kwh)
            }
            CostEdit::SetCultureDuration { days } => (&mut self.culture_days, "culture_days", days),
            CostEdit::SetMonthlyLaborCost { amount } => {
                (&mut self.monthly_labor_cost, "monthly_labor_cost", amount)
            }
            CostEdit::SetWorkerCount { count } => (&mut self.worker_count, "worker_count", count),
            CostEdit::SetOtherCosts { amount } => (&mut self.other_costs, "other_costs", amount),
            CostEdit::SetSellingPrice { price_per_kg } => {
                (&mut self.selling_price, "selling_price", price_per_kg)
            }
            CostEdit::SetCurrency { currency } => {
                self.currency = currency;
                return Ok(());
            }
        };
        field.edit(check_value(name, value)?);
        Ok(())
    }

    pub fn inputs(&self, projected_harvest_kg: f64) -> ProductionCostInputs {
        ProductionCostInputs {
            pl_count: self.pl_count.value,
            pl_unit_price: self.pl_unit_price.value,
            feed_amount_kg: self.feed_amount_kg.value,
            feed_unit_price: self.feed_unit_price.value,
            aeration_power_kw: self.aeration_power_kw.value,
            operation_hours: self.operation_hours.value,
            energy_unit_price: self.energy_unit_price.value,
            culture_days: self.culture_days.value,
            monthly_labor_cost: self.monthly_labor_cost.value,
            worker_count: self.worker_count.value,
            other_costs: self.other_costs.value,
            projected_harvest_kg,
            selling_price_per_kg: self.selling_price.value,
            currency: self.currency,
        }
    }
}
