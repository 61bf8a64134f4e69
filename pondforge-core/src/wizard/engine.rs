use super::state::{CostSheet, FeedContext, GrowthContext, WizardStep};
use crate::{
    aeration::{AerationAssessment, AerationInput},
    biofloc::CarbonDose,
    constants::{DEFAULT_FCR, DEFAULT_HARVEST_WEIGHT_G, DEFAULT_STOCKING_DENSITY},
    economics::ProductionCostSummary,
    error::PondforgeError,
    evaporation::{EvaporationEstimate, EvaporationInput, SalinityDilution},
    feed::{FeedCostAnalysis, FeedPlan},
    growth::{GrowthProjection, PondGeometry, StockingPlan},
    input::{provided, provided_positive},
    logger::ReportWriter,
    report::{AerationStage, EconomicsStage, FarmReport, FeedStage, GrowthStage, WaterStage},
    survival::{FinalCount, SurvivalEstimate},
    water::{AlkalinityDose, AlkalinityInput, WaterExchangeInput, WaterExchangePlan},
};
use pondforge_schemas::{
    chemistry::BufferCompound,
    command::CostEdit,
    file_formats::FarmScenario,
    units::AreaUnit,
};
use tracing::{debug, info, warn};

/// A running Growth → Feed → Aeration → Water → Economics session.
///
/// Each step reads its own section of the scenario plus the contexts left by
/// earlier steps. Cost edits are kept in order and replayed onto a freshly
/// seeded sheet whenever economics is recomputed.
pub struct WizardSession {
    pub(super) scenario: FarmScenario,
    pub(super) next_step: Option<WizardStep>,
    pub(super) growth_context: GrowthContext,
    pub(super) feed_context: FeedContext,
    pub(super) cost_edits: Vec<CostEdit>,
    pub(super) report: FarmReport,
    pub(super) writer: Option<ReportWriter>,
}

impl WizardSession {
    /// Runs every remaining step, then writes the CSV export if configured.
    pub fn run(&mut self) -> Result<&FarmReport, PondforgeError> {
        while self.advance().is_some() {}
        info!(notices = self.report.notices.len(), "wizard complete");

        if let Some(writer) = &mut self.writer {
            writer.write_report(&self.report)?;
        }
        Ok(&self.report)
    }

    /// Executes the next step and returns it, or `None` once economics is done.
    pub fn advance(&mut self) -> Option<WizardStep> {
        let step = self.next_step?;
        info!(step = step.label(), "entering wizard step");
        self.execute(step);
        self.next_step = step.next();
        Some(step)
    }

    pub fn next_step(&self) -> Option<WizardStep> {
        self.next_step
    }

    pub fn is_complete(&self) -> bool {
        self.next_step.is_none()
    }

    pub fn report(&self) -> &FarmReport {
        &self.report
    }

    pub fn growth_context(&self) -> &GrowthContext {
        &self.growth_context
    }

    pub fn feed_context(&self) -> &FeedContext {
        &self.feed_context
    }

    pub fn scenario(&self) -> &FarmScenario {
        &self.scenario
    }

    /// Records a cost-sheet edit. The edited field is pinned from now on.
    /// Negative or non-finite values leave the field as it was and show up
    /// as a notice.
    pub fn apply_edit(&mut self, edit: CostEdit) {
        debug!(?edit, "cost edit");
        self.cost_edits.push(edit);
        if self.has_completed(WizardStep::Economics) {
            self.run_economics();
        }
    }

    /// Changes the scenario inputs and recomputes every step already taken.
    pub fn update_inputs<F>(&mut self, update: F)
    where
        F: FnOnce(&mut FarmScenario),
    {
        update(&mut self.scenario);
        self.recompute();
    }

    /// Recomputes the completed steps from scratch. Identical inputs give an
    /// identical report.
    pub fn recompute(&mut self) {
        self.growth_context = GrowthContext::default();
        self.feed_context = FeedContext::default();
        self.report = FarmReport::new(self.scenario.farm_name.clone());
        for step in WizardStep::ALL {
            if !self.has_completed(step) {
                break;
            }
            self.execute(step);
        }
    }

    fn has_completed(&self, step: WizardStep) -> bool {
        match self.next_step {
            None => true,
            Some(next) => {
                let position = |s: WizardStep| WizardStep::ALL.iter().position(|x| *x == s);
                position(step) < position(next)
            }
        }
    }

    fn execute(&mut self, step: WizardStep) {
        match step {
            WizardStep::Growth => self.run_growth(),
            WizardStep::Feed => self.run_feed(),
            WizardStep::Aeration => self.run_aeration(),
            WizardStep::Water => self.run_water(),
            WizardStep::Economics => self.run_economics(),
        }
    }

    fn notice(&mut self, step: WizardStep, err: PondforgeError) {
        warn!(step = step.label(), %err, "result withheld");
        self.report.notices.push(format!("{}: {}", step.label(), err));
    }

    fn run_growth(&mut self) {
        let s = &self.scenario;
        let length = provided_positive("pond.length_m", s.pond.length_m.as_ref());
        let width = provided_positive("pond.width_m", s.pond.width_m.as_ref());
        let pond = length.zip(width).map(|(l, w)| PondGeometry::new(l, w));

        let density = provided_positive("stocking.pl_density", s.stocking.pl_density.as_ref());
        let stocking = pond
            .zip(density)
            .map(|(pond, density)| StockingPlan::new(pond.area_m2, density));

        let days = provided("growth.days", s.growth.days.as_ref());
        let projection = match (&s.growth.pl_stage, &s.growth.genetic_line) {
            (Some(stage), Some(line)) => days
                .map(|days| GrowthProjection::from_table_keys(stage, line, days))
                .transpose(),
            _ => {
                let initial = provided("growth.initial_weight_g", s.growth.initial_weight_g.as_ref());
                let adg = provided("growth.adg_g_per_day", s.growth.adg_g_per_day.as_ref());
                Ok(match (initial, days, adg) {
                    (Some(initial), Some(days), Some(adg)) => {
                        Some(GrowthProjection::linear(initial, days, adg))
                    }
                    _ => None,
                })
            }
        };

        let survival = provided("survival.initial_count", s.survival.initial_count.as_ref())
            .and_then(|initial| {
                let final_count = match provided("survival.final_count", s.survival.final_count.as_ref()) {
                    Some(count) => Some(FinalCount::Counted { count }),
                    None => provided(
                        "survival.harvested_biomass_kg",
                        s.survival.harvested_biomass_kg.as_ref(),
                    )
                    .zip(provided(
                        "survival.average_weight_g",
                        s.survival.average_weight_g.as_ref(),
                    ))
                    .map(|(harvested_biomass_kg, average_weight_g)| FinalCount::FromBiomass {
                        harvested_biomass_kg,
                        average_weight_g,
                    }),
                };
                final_count.map(|count| SurvivalEstimate::compute(initial, count))
            });

        let survival_pct = provided_positive(
            "survival.expected_survival_pct",
            s.survival.expected_survival_pct.as_ref(),
        )
        .or_else(|| survival.and_then(|estimate| estimate.survival_rate_pct))
        .filter(|pct| *pct > 0.0)
        .unwrap_or(GrowthContext::default().survival_pct);

        let projection = match projection {
            Ok(projection) => projection,
            Err(err) => {
                self.notice(WizardStep::Growth, err);
                None
            }
        };

        let context = GrowthContext {
            pond_area_m2: pond.map(|p| p.area_m2),
            pl_density: density,
            total_pl: stocking.map(|plan| plan.total_pl),
            culture_days: projection.map(|p| p.days),
            final_weight_g: projection.map(|p| p.final_weight_g),
            survival_pct,
        };
        debug!(?context, "growth context");

        self.growth_context = context;
        self.report.growth = GrowthStage {
            pond,
            stocking,
            projection,
            growth_curve: projection.map(|p| p.curve()).unwrap_or_default(),
            survival,
            context,
        };
    }

    fn run_feed(&mut self) {
        let section = &self.scenario.feed;
        let growth = &self.growth_context;

        let biomass = provided_positive("feed.total_biomass_kg", section.total_biomass_kg.as_ref())
            .or_else(|| growth.projected_harvest_kg());
        let fcr = provided_positive("feed.fcr", section.fcr.as_ref()).unwrap_or(DEFAULT_FCR);
        let period = provided_positive(
            "feed.feeding_period_days",
            section.feeding_period_days.as_ref(),
        )
        .or(growth.culture_days.filter(|days| *days > 0.0));
        let price = provided_positive("feed.feed_price_per_kg", section.feed_price_per_kg.as_ref());

        let plan = biomass.map(|biomass| FeedPlan::compute(biomass, fcr, period.unwrap_or(0.0)));
        let cost = plan
            .zip(price)
            .map(|(plan, price)| FeedCostAnalysis::compute(plan.total_feed_kg, price));

        let context = FeedContext {
            total_biomass_kg: biomass,
            fcr,
            feeding_period_days: period,
            total_feed_kg: plan.map(|p| p.total_feed_kg),
            feed_price_per_kg: price,
        };
        debug!(?context, "feed context");

        self.feed_context = context;
        self.report.feed = FeedStage {
            plan,
            cost,
            context,
        };
    }

    fn run_aeration(&mut self) {
        let section = &self.scenario.aeration;
        let growth = &self.growth_context;

        let area = provided_positive("aeration.pond_area", section.pond_area.as_ref())
            .map(|area| (area, section.area_unit))
            .or_else(|| growth.pond_area_m2.map(|area| (area, AreaUnit::SquareMeters)));

        let assessment = area.map(|(pond_area, area_unit)| {
            let input = AerationInput {
                pond_area,
                area_unit,
                stocking_density: provided_positive(
                    "aeration.stocking_density",
                    section.stocking_density.as_ref(),
                )
                .or(growth.pl_density)
                .unwrap_or(DEFAULT_STOCKING_DENSITY),
                survival_rate_pct: provided_positive(
                    "aeration.survival_rate_pct",
                    section.survival_rate_pct.as_ref(),
                )
                .unwrap_or(growth.survival_pct),
                avg_weight_g: provided_positive("aeration.avg_weight_g", section.avg_weight_g.as_ref())
                    .or(growth.final_weight_g.filter(|w| *w > 0.0))
                    .unwrap_or(DEFAULT_HARVEST_WEIGHT_G),
                aeration_type: section.aeration_type,
                installed_kw: provided("aeration.installed_kw", section.installed_kw.as_ref()),
            };
            AerationAssessment::assess(&input)
        });

        let evaporation = self.evaporation();
        let salinity = self.salinity();

        self.report.aeration = AerationStage {
            assessment,
            evaporation,
            salinity,
        };
    }

    fn evaporation(&mut self) -> Option<EvaporationEstimate> {
        let section = &self.scenario.evaporation;
        let area = provided_positive("evaporation.pond_area_m2", section.pond_area_m2.as_ref())
            .or(self.growth_context.pond_area_m2)?;

        let mut input = EvaporationInput {
            pond_area_m2: area,
            ..EvaporationInput::default()
        };
        if let Some(preset) = section.preset.clone() {
            if let Err(err) = input.apply_preset_named(&preset) {
                self.notice(WizardStep::Aeration, err);
                return None;
            }
        }

        let section = &self.scenario.evaporation;
        if let Some(t) = provided("evaporation.temperature_c", section.temperature_c.as_ref()) {
            input.weather.temperature_c = t;
        }
        if let Some(rh) = provided("evaporation.humidity_pct", section.humidity_pct.as_ref()) {
            input.weather.humidity_pct = rh;
        }
        if let Some(wind) = provided("evaporation.wind_speed_m_s", section.wind_speed_m_s.as_ref()) {
            input.weather.wind_speed_m_s = wind;
        }
        if let Some(k) = provided_positive("evaporation.coefficient", section.coefficient.as_ref()) {
            input.coefficient = k;
        }
        match EvaporationEstimate::compute(&input) {
            Ok(estimate) => estimate,
            Err(err) => {
                self.notice(WizardStep::Aeration, err);
                None
            }
        }
    }

    fn salinity(&self) -> Option<SalinityDilution> {
        let section = &self.scenario.salinity;
        let area = provided_positive("salinity.pond_area_m2", section.pond_area_m2.as_ref())
            .or(self.growth_context.pond_area_m2)?;
        let depth = provided_positive("salinity.depth_m", section.depth_m.as_ref())?;
        let current = provided_positive("salinity.current_ppt", section.current_ppt.as_ref())?;
        SalinityDilution::compute(area, depth, current)
    }

    fn run_water(&mut self) {
        let exchange = self.water_exchange();
        let alkalinity = self.alkalinity();
        let carbon_dose = self.carbon_dose();
        self.report.water = WaterStage {
            exchange,
            alkalinity,
            carbon_dose,
        };
    }

    fn water_exchange(&mut self) -> Option<WaterExchangePlan> {
        let section = &self.scenario.water_exchange;
        let tan_ppm = provided("water_exchange.tan_ppm", section.tan_ppm.as_ref())?;
        let nitrate_ppm = provided("water_exchange.nitrate_ppm", section.nitrate_ppm.as_ref())?;
        let input = WaterExchangeInput {
            pond_volume: provided("water_exchange.pond_volume", section.pond_volume.as_ref())
                .unwrap_or(0.0),
            volume_unit: section.volume_unit,
            tan_ppm,
            nitrate_ppm,
        };
        match WaterExchangePlan::compute(&input) {
            Ok(plan) => plan,
            Err(err) => {
                self.notice(WizardStep::Water, err);
                None
            }
        }
    }

    fn alkalinity(&mut self) -> Option<AlkalinityDose> {
        let section = &self.scenario.alkalinity;
        let volume = provided("alkalinity.pond_volume", section.pond_volume.as_ref())?;
        let current = provided("alkalinity.current_mg_l", section.current_mg_l.as_ref())?;
        let mut input = AlkalinityInput::new(volume, section.volume_unit, current);
        if let Some(target) = provided("alkalinity.target_mg_l", section.target_mg_l.as_ref()) {
            input.target_mg_l = target;
        }
        if let Some(code) = section.buffer.clone() {
            match BufferCompound::from_code(&code) {
                Some(buffer) => input.buffer = buffer,
                None => {
                    self.notice(
                        WizardStep::Water,
                        PondforgeError::unknown_key("buffer compound", &code),
                    );
                    return None;
                }
            }
        }
        match AlkalinityDose::compute(&input) {
            Ok(dose) => dose,
            Err(err) => {
                self.notice(WizardStep::Water, err);
                None
            }
        }
    }

    fn carbon_dose(&mut self) -> Option<CarbonDose> {
        let section = &self.scenario.carbon_dosing;
        let source = section.carbon_source.clone()?;
        let volume = provided("carbon_dosing.tank_volume_l", section.tank_volume_l.as_ref())?;
        let tan = provided("carbon_dosing.tan_ppm", section.tan_ppm.as_ref())?;
        match CarbonDose::compute_named(volume, tan, &source) {
            Ok(dose) => dose,
            Err(err) => {
                self.notice(WizardStep::Water, err);
                None
            }
        }
    }

    fn run_economics(&mut self) {
        let prefix = format!("{}: ", WizardStep::Economics.label());
        self.report.notices.retain(|notice| !notice.starts_with(&prefix));

        let mut sheet = CostSheet::from_section(&self.scenario.economics);
        sheet.seed(&self.growth_context, &self.feed_context);
        let rejected: Vec<PondforgeError> = self
            .cost_edits
            .iter()
            .filter_map(|edit| sheet.apply(edit).err())
            .collect();
        for err in rejected {
            self.notice(WizardStep::Economics, err);
        }

        let harvest_kg = self.growth_context.projected_harvest_kg().unwrap_or(0.0);
        let summary = ProductionCostSummary::compute(&sheet.inputs(harvest_kg));
        info!(
            total = summary.breakdown.total,
            currency = summary.currency.code(),
            "production cost computed"
        );
        self.report.economics = Some(EconomicsStage { sheet, summary });
    }
}
