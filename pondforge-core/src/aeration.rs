//! Aeration power sizing from projected standing biomass.

use crate::constants::{
    BIOMASS_KG_PER_KW, DEFAULT_HARVEST_WEIGHT_G, DEFAULT_STOCKING_DENSITY, DEFAULT_SURVIVAL_PCT,
    HIGH_STOCKING_DENSITY, HP_PER_KW, PADDLEWHEEL_HP,
};
use pondforge_schemas::{equipment::AerationType, units::AreaUnit};
use serde::Serialize;
use tracing::{debug, warn};

pub fn required_kw(biomass_kg: f64) -> f64 {
    biomass_kg / BIOMASS_KG_PER_KW
}

pub fn kw_to_hp(kw: f64) -> f64 {
    kw * HP_PER_KW
}

pub fn is_high_stocking_density(pl_per_m2: f64) -> bool {
    pl_per_m2 > HIGH_STOCKING_DENSITY
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AerationInput {
    /// Pond area in `area_unit`.
    pub pond_area: f64,
    pub area_unit: AreaUnit,
    /// PL/m².
    pub stocking_density: f64,
    pub survival_rate_pct: f64,
    /// Average harvest weight in grams.
    pub avg_weight_g: f64,
    pub aeration_type: AerationType,
    /// Installed aerator power in kW. `None` means not entered.
    pub installed_kw: Option<f64>,
}

impl Default for AerationInput {
    fn default() -> Self {
        Self {
            pond_area: 0.0,
            area_unit: AreaUnit::SquareMeters,
            stocking_density: DEFAULT_STOCKING_DENSITY,
            survival_rate_pct: DEFAULT_SURVIVAL_PCT,
            avg_weight_g: DEFAULT_HARVEST_WEIGHT_G,
            aeration_type: AerationType::Paddlewheel,
            installed_kw: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AerationRequirement {
    pub pond_area_m2: f64,
    pub total_shrimp: f64,
    pub biomass_kg: f64,
    pub required_kw: f64,
    pub required_hp: f64,
}

impl AerationRequirement {
    /// `None` until area, density, survival and weight are all positive.
    pub fn compute(input: &AerationInput) -> Option<Self> {
        let pond_area_m2 = input.area_unit.to_square_meters(input.pond_area);
        if pond_area_m2 <= 0.0
            || input.stocking_density <= 0.0
            || input.survival_rate_pct <= 0.0
            || input.avg_weight_g <= 0.0
        {
            return None;
        }

        let total_shrimp = pond_area_m2 * input.stocking_density;
        let biomass_kg = total_shrimp * (input.survival_rate_pct / 100.0) * input.avg_weight_g / 1000.0;
        let kw = required_kw(biomass_kg);
        Some(Self {
            pond_area_m2,
            total_shrimp,
            biomass_kg,
            required_kw: kw,
            required_hp: kw_to_hp(kw),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AerationDeficit {
    pub deficit_kw: f64,
    pub deficit_hp: f64,
    /// Additional paddlewheels of 1.5 HP, rounded up.
    pub paddlewheels_needed: u32,
}

impl AerationDeficit {
    pub fn between(required_kw: f64, installed_kw: f64) -> Self {
        let deficit_kw = (required_kw - installed_kw).max(0.0);
        let deficit_hp = kw_to_hp(deficit_kw);
        Self {
            deficit_kw,
            deficit_hp,
            paddlewheels_needed: (deficit_hp / PADDLEWHEEL_HP).ceil() as u32,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AerationStatus {
    /// No installed power entered; no alert is raised.
    NotEvaluated,
    Adequate,
    Inadequate(AerationDeficit),
}

impl AerationStatus {
    pub fn evaluate(requirement: &AerationRequirement, installed_kw: Option<f64>) -> Self {
        match installed_kw {
            Some(installed) if installed > 0.0 => {
                if installed >= requirement.required_kw {
                    AerationStatus::Adequate
                } else {
                    AerationStatus::Inadequate(AerationDeficit::between(
                        requirement.required_kw,
                        installed,
                    ))
                }
            }
            _ => AerationStatus::NotEvaluated,
        }
    }

    /// Only an evaluated shortfall counts as inadequate.
    pub fn is_adequate(&self) -> bool {
        !matches!(self, AerationStatus::Inadequate(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AerationAssessment {
    pub input: AerationInput,
    pub requirement: Option<AerationRequirement>,
    pub status: AerationStatus,
    pub high_stocking_density: bool,
}

impl AerationAssessment {
    pub fn assess(input: &AerationInput) -> Self {
        let requirement = AerationRequirement::compute(input);
        let status = requirement
            .as_ref()
            .map_or(AerationStatus::NotEvaluated, |req| {
                AerationStatus::evaluate(req, input.installed_kw)
            });
        let high_stocking_density = is_high_stocking_density(input.stocking_density);

        if let Some(req) = &requirement {
            debug!(
                biomass_kg = req.biomass_kg,
                required_kw = req.required_kw,
                aerator = input.aeration_type.label(),
                "aeration requirement"
            );
        }
        if let AerationStatus::Inadequate(deficit) = &status {
            warn!(
                deficit_kw = deficit.deficit_kw,
                paddlewheels = deficit.paddlewheels_needed,
                "installed aeration is insufficient for projected biomass"
            );
        }
        if high_stocking_density {
            warn!(
                density = input.stocking_density,
                "stocking exceeds 60 PL/m²; ensure continuous aeration and DO monitoring"
            );
        }

        Self {
            input: *input,
            requirement,
            status,
            high_stocking_density,
        }
    }
}
