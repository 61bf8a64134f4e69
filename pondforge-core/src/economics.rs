//! Production cost aggregation and profit estimation.

use crate::{
    constants::{
        DAYS_PER_LABOR_MONTH, DEFAULT_CULTURE_DAYS, DEFAULT_OPERATION_HOURS, DEFAULT_WORKER_COUNT,
        REFERENCE_COST_PER_KG,
    },
    feed::{feed_cost, feed_cost_share_pct, is_feed_dominant},
};
use pondforge_schemas::units::Currency;
use serde::Serialize;
use tracing::{debug, warn};

/// PL purchase cost; `price_per_thousand` is quoted per 1000 postlarvae.
pub fn pl_cost(pl_count: f64, price_per_thousand: f64) -> f64 {
    pl_count * price_per_thousand / 1000.0
}

pub fn energy_cost(aeration_power_kw: f64, hours_per_day: f64, culture_days: f64, price_per_kwh: f64) -> f64 {
    aeration_power_kw * hours_per_day * culture_days * price_per_kwh / 1000.0
}

pub fn labor_cost(monthly_labor_cost: f64, worker_count: f64, culture_days: f64) -> f64 {
    monthly_labor_cost * worker_count * (culture_days / DAYS_PER_LABOR_MONTH)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProductionCostInputs {
    pub pl_count: f64,
    pub pl_unit_price: f64,
    pub feed_amount_kg: f64,
    pub feed_unit_price: f64,
    pub aeration_power_kw: f64,
    pub operation_hours: f64,
    pub energy_unit_price: f64,
    pub culture_days: f64,
    pub monthly_labor_cost: f64,
    pub worker_count: f64,
    pub other_costs: f64,
    /// Projected harvest in kg.
    pub projected_harvest_kg: f64,
    pub selling_price_per_kg: f64,
    pub currency: Currency,
}

impl Default for ProductionCostInputs {
    fn default() -> Self {
        Self {
            pl_count: 0.0,
            pl_unit_price: 0.0,
            feed_amount_kg: 0.0,
            feed_unit_price: 0.0,
            aeration_power_kw: 0.0,
            operation_hours: DEFAULT_OPERATION_HOURS,
            energy_unit_price: 0.0,
            culture_days: DEFAULT_CULTURE_DAYS,
            monthly_labor_cost: 0.0,
            worker_count: DEFAULT_WORKER_COUNT,
            other_costs: 0.0,
            projected_harvest_kg: 0.0,
            selling_price_per_kg: 0.0,
            currency: Currency::Usd,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostBreakdown {
    pub postlarvae: f64,
    pub feed: f64,
    pub energy: f64,
    pub labor: f64,
    pub other: f64,
    pub total: f64,
}

impl CostBreakdown {
    pub fn from_inputs(inputs: &ProductionCostInputs) -> Self {
        let postlarvae = pl_cost(inputs.pl_count, inputs.pl_unit_price);
        let feed = feed_cost(inputs.feed_amount_kg, inputs.feed_unit_price);
        let energy = energy_cost(
            inputs.aeration_power_kw,
            inputs.operation_hours,
            inputs.culture_days,
            inputs.energy_unit_price,
        );
        let labor = labor_cost(inputs.monthly_labor_cost, inputs.worker_count, inputs.culture_days);
        let other = inputs.other_costs;
        Self {
            postlarvae,
            feed,
            energy,
            labor,
            other,
            total: postlarvae + feed + energy + labor + other,
        }
    }

    pub fn components(&self) -> [(&'static str, f64); 5] {
        [
            ("Postlarvae", self.postlarvae),
            ("Feed", self.feed),
            ("Energy", self.energy),
            ("Labor", self.labor),
            ("Other", self.other),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProfitEstimate {
    pub selling_price_per_kg: f64,
    pub gross_revenue: f64,
    pub profit: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "alert", rename_all = "snake_case")]
pub enum CostAlert {
    /// Feed is more than 60 % of total cost.
    FeedDominant { share_pct: f64 },
    /// Cost per kg exceeds the reference cost.
    HighCostPerKg { cost_per_kg: f64, reference: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductionCostSummary {
    pub currency: Currency,
    pub projected_harvest_kg: f64,
    pub breakdown: CostBreakdown,
    /// Undefined without a positive projected harvest.
    pub cost_per_kg: Option<f64>,
    pub feed_share_pct: Option<f64>,
    /// Only estimated once a selling price is set.
    pub profit: Option<ProfitEstimate>,
    pub alerts: Vec<CostAlert>,
}

impl ProductionCostSummary {
    pub fn compute(inputs: &ProductionCostInputs) -> Self {
        let breakdown = CostBreakdown::from_inputs(inputs);
        let cost_per_kg = (inputs.projected_harvest_kg > 0.0)
            .then(|| breakdown.total / inputs.projected_harvest_kg);
        let feed_share_pct = feed_cost_share_pct(breakdown.feed, breakdown.total);

        let profit = (inputs.selling_price_per_kg > 0.0).then(|| {
            let gross_revenue = inputs.projected_harvest_kg * inputs.selling_price_per_kg;
            ProfitEstimate {
                selling_price_per_kg: inputs.selling_price_per_kg,
                gross_revenue,
                profit: gross_revenue - breakdown.total,
            }
        });

        let mut alerts = Vec::new();
        if is_feed_dominant(feed_share_pct) {
            let share_pct = feed_share_pct.unwrap_or_default();
            warn!(share_pct, "feed is the dominant expense; evaluate FCR or feed efficiency");
            alerts.push(CostAlert::FeedDominant { share_pct });
        }
        if let Some(cost) = cost_per_kg.filter(|cost| *cost > REFERENCE_COST_PER_KG) {
            warn!(cost_per_kg = cost, "high production cost; review stocking rate or energy input");
            alerts.push(CostAlert::HighCostPerKg {
                cost_per_kg: cost,
                reference: REFERENCE_COST_PER_KG,
            });
        }

        debug!(total = breakdown.total, ?cost_per_kg, "production cost summary");
        Self {
            currency: inputs.currency,
            projected_harvest_kg: inputs.projected_harvest_kg,
            breakdown,
            cost_per_kg,
            feed_share_pct,
            profit,
            alerts,
        }
    }
}
