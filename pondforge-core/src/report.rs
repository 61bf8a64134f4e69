//! Snapshot of one wizard run, for printing and export.

use crate::{
    aeration::{AerationAssessment, AerationStatus},
    biofloc::CarbonDose,
    economics::ProductionCostSummary,
    error::PondforgeError,
    evaporation::{EvaporationEstimate, SalinityDilution},
    feed::{FeedCostAnalysis, FeedPlan},
    growth::{GrowthPoint, GrowthProjection, PondGeometry, StockingPlan},
    survival::SurvivalEstimate,
    water::{AlkalinityDose, WaterExchangePlan},
    wizard::state::{CostSheet, FeedContext, GrowthContext},
};
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GrowthStage {
    pub pond: Option<PondGeometry>,
    pub stocking: Option<StockingPlan>,
    pub projection: Option<GrowthProjection>,
    pub growth_curve: Vec<GrowthPoint>,
    pub survival: Option<SurvivalEstimate>,
    pub context: GrowthContext,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FeedStage {
    pub plan: Option<FeedPlan>,
    pub cost: Option<FeedCostAnalysis>,
    pub context: FeedContext,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AerationStage {
    pub assessment: Option<AerationAssessment>,
    pub evaporation: Option<EvaporationEstimate>,
    pub salinity: Option<SalinityDilution>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WaterStage {
    pub exchange: Option<WaterExchangePlan>,
    pub alkalinity: Option<AlkalinityDose>,
    pub carbon_dose: Option<CarbonDose>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EconomicsStage {
    pub sheet: CostSheet,
    pub summary: ProductionCostSummary,
}

/// Every input and result of a run. `None` marks a result that could not be
/// computed from the inputs given.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FarmReport {
    pub farm_name: Option<String>,
    pub growth: GrowthStage,
    pub feed: FeedStage,
    pub aeration: AerationStage,
    pub water: WaterStage,
    pub economics: Option<EconomicsStage>,
    /// Validation messages raised while computing, in step order.
    pub notices: Vec<String>,
}

/// One line of the flat CSV export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub section: &'static str,
    pub metric: &'static str,
    pub value: Option<f64>,
    pub unit: &'static str,
}

fn row(section: &'static str, metric: &'static str, value: Option<f64>, unit: &'static str) -> ReportRow {
    ReportRow {
        section,
        metric,
        value,
        unit,
    }
}

impl FarmReport {
    pub fn new(farm_name: Option<String>) -> Self {
        Self {
            farm_name,
            ..Self::default()
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, PondforgeError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Flattens the headline numbers into `section, metric, value, unit` rows.
    pub fn rows(&self) -> Vec<ReportRow> {
        let mut rows = Vec::new();

        let growth = &self.growth;
        rows.push(row("growth", "pond_area", growth.pond.map(|p| p.area_m2), "m2"));
        rows.push(row("growth", "total_pl", growth.stocking.map(|s| s.total_pl), "PL"));
        rows.push(row(
            "growth",
            "initial_weight",
            growth.projection.map(|p| p.initial_weight_g),
            "g",
        ));
        rows.push(row("growth", "culture_days", growth.projection.map(|p| p.days), "days"));
        rows.push(row(
            "growth",
            "final_weight",
            growth.projection.map(|p| p.final_weight_g),
            "g",
        ));
        rows.push(row(
            "growth",
            "survival_rate",
            growth.survival.and_then(|s| s.survival_rate_pct),
            "%",
        ));
        rows.push(row(
            "growth",
            "projected_harvest",
            growth.context.projected_harvest_kg(),
            "kg",
        ));

        let feed = &self.feed;
        rows.push(row("feed", "total_biomass", feed.plan.map(|p| p.total_biomass_kg), "kg"));
        rows.push(row("feed", "fcr", feed.plan.map(|p| p.fcr), ""));
        rows.push(row("feed", "total_feed", feed.plan.map(|p| p.total_feed_kg), "kg"));
        rows.push(row("feed", "daily_feed", feed.plan.and_then(|p| p.daily_feed_kg), "kg/day"));
        rows.push(row("feed", "bags_needed", feed.cost.map(|c| c.bags_needed), "bags"));
        rows.push(row("feed", "feed_cost", feed.cost.map(|c| c.total_cost), ""));

        let aeration = &self.aeration;
        let requirement = aeration.assessment.and_then(|a| a.requirement);
        rows.push(row("aeration", "biomass", requirement.map(|r| r.biomass_kg), "kg"));
        rows.push(row("aeration", "required_power", requirement.map(|r| r.required_kw), "kW"));
        rows.push(row("aeration", "required_power_hp", requirement.map(|r| r.required_hp), "HP"));
        let deficit = aeration.assessment.and_then(|a| match a.status {
            AerationStatus::Inadequate(deficit) => Some(deficit),
            _ => None,
        });
        rows.push(row("aeration", "deficit", deficit.map(|d| d.deficit_kw), "kW"));
        rows.push(row(
            "aeration",
            "paddlewheels_needed",
            deficit.map(|d| f64::from(d.paddlewheels_needed)),
            "units",
        ));
        rows.push(row(
            "evaporation",
            "rate",
            aeration.evaporation.map(|e| e.rate_mm_day),
            "mm/day",
        ));
        rows.push(row(
            "evaporation",
            "daily_loss",
            aeration.evaporation.map(|e| e.daily_loss_l),
            "L",
        ));
        rows.push(row(
            "evaporation",
            "monthly_loss",
            aeration.evaporation.map(|e| e.monthly_loss_l),
            "L",
        ));
        rows.push(row(
            "salinity",
            "freshwater_to_add",
            aeration.salinity.map(|s| s.freshwater_l),
            "L",
        ));

        let water = &self.water;
        rows.push(row(
            "water",
            "recommended_exchange",
            water.exchange.map(|e| e.recommended_pct),
            "%",
        ));
        rows.push(row(
            "water",
            "exchange_volume",
            water.exchange.map(|e| e.exchange_volume_l),
            "L",
        ));
        rows.push(row(
            "water",
            "alkalinity_dose",
            water.alkalinity.as_ref().map(|a| a.grams_needed),
            "g",
        ));
        rows.push(row(
            "water",
            "carbon_source_dose",
            water.carbon_dose.map(|c| c.source_g),
            "g",
        ));

        if let Some(economics) = &self.economics {
            let summary = &economics.summary;
            let currency = summary.currency.code();
            for (metric, value) in [
                ("pl_cost", summary.breakdown.postlarvae),
                ("feed_cost", summary.breakdown.feed),
                ("energy_cost", summary.breakdown.energy),
                ("labor_cost", summary.breakdown.labor),
                ("other_costs", summary.breakdown.other),
                ("total_cost", summary.breakdown.total),
            ] {
                rows.push(row("economics", metric, Some(value), currency));
            }
            rows.push(row("economics", "cost_per_kg", summary.cost_per_kg, currency));
            rows.push(row("economics", "feed_share", summary.feed_share_pct, "%"));
            rows.push(row(
                "economics",
                "gross_revenue",
                summary.profit.map(|p| p.gross_revenue),
                currency,
            ));
            rows.push(row("economics", "profit", summary.profit.map(|p| p.profit), currency));
        }

        rows
    }
}
