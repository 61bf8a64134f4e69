//! Water exchange recommendations and alkalinity dosing.

use crate::{
    constants::{
        ALKALINITY_CRITICAL_BELOW, ALKALINITY_HIGH_ABOVE, ALKALINITY_LOW_BELOW,
        ALKALINITY_OPTIMAL_MAX, CAUTION_TAN_PPM, DEFAULT_TARGET_ALKALINITY, MAX_CURRENT_ALKALINITY,
        MAX_TARGET_ALKALINITY, MINOR_ALKALINITY_DELTA, MODERATE_NITRATE_PPM, NITRATE_MAX_PPM,
        NITRATE_MIN_PPM, SAFE_NITRATE_PPM, SAFE_TAN_PPM, TAN_MAX_PPM, TAN_MIN_PPM,
    },
    error::PondforgeError,
    format::format_fixed,
    input::check_range,
};
use pondforge_schemas::{
    chemistry::BufferCompound,
    environment::Measurement,
    units::{VolumeUnit, LITERS_PER_M3},
};
use serde::Serialize;
use tracing::{debug, warn};

/// Share of the pond (%) that must be replaced to dilute `current` down to
/// `target`, before rounding rules.
pub fn raw_exchange_percent(current: f64, target: f64) -> f64 {
    (current - target) / current * 100.0
}

/// Exchange percentage for one nutrient: zero at or below the target,
/// otherwise capped at 100, at least 1, rounded up to a whole percent.
pub fn exchange_percent(current: f64, target: f64) -> f64 {
    if current <= target {
        return 0.0;
    }
    let mut percent = raw_exchange_percent(current, target).min(100.0);
    if percent > 0.0 && percent < 1.0 {
        percent = 1.0;
    }
    percent.ceil()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TanStatus {
    Safe,
    Caution,
    Danger,
}

impl TanStatus {
    pub fn classify(tan_ppm: f64) -> Self {
        if tan_ppm <= SAFE_TAN_PPM {
            TanStatus::Safe
        } else if tan_ppm <= CAUTION_TAN_PPM {
            TanStatus::Caution
        } else {
            TanStatus::Danger
        }
    }

    pub fn action(&self) -> &'static str {
        match self {
            TanStatus::Safe => "No action needed",
            TanStatus::Caution => "Water exchange required",
            TanStatus::Danger => "Immediate water exchange + carbon source/biofloc control",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NitrateStatus {
    Acceptable,
    Moderate,
    Excessive,
}

impl NitrateStatus {
    pub fn classify(nitrate_ppm: f64) -> Self {
        if nitrate_ppm < SAFE_NITRATE_PPM {
            NitrateStatus::Acceptable
        } else if nitrate_ppm <= MODERATE_NITRATE_PPM {
            NitrateStatus::Moderate
        } else {
            NitrateStatus::Excessive
        }
    }

    pub fn action(&self) -> &'static str {
        match self {
            NitrateStatus::Acceptable => "No action",
            NitrateStatus::Moderate => "Water exchange required",
            NitrateStatus::Excessive => "Immediate water exchange, manage feeding",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WaterExchangeInput {
    pub pond_volume: f64,
    pub volume_unit: VolumeUnit,
    pub tan_ppm: f64,
    pub nitrate_ppm: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WaterExchangePlan {
    pub pond_volume_l: f64,
    pub tan_ppm: f64,
    pub nitrate_ppm: f64,
    pub tan_exchange_pct: f64,
    pub nitrate_exchange_pct: f64,
    pub recommended_pct: f64,
    pub exchange_volume_l: f64,
    /// Exchange volume in m³ rounded to one decimal, for volumes of 1000 L or more.
    pub exchange_volume_m3: Option<f64>,
    pub tan_status: TanStatus,
    pub nitrate_status: NitrateStatus,
}

impl WaterExchangePlan {
    /// Out-of-range TAN or nitrate readings suppress the recommendation with an
    /// `OutOfRange` error. A pond without volume yields `Ok(None)`.
    pub fn compute(input: &WaterExchangeInput) -> Result<Option<Self>, PondforgeError> {
        check_range("TAN", input.tan_ppm, TAN_MIN_PPM, TAN_MAX_PPM)?;
        check_range("nitrate", input.nitrate_ppm, NITRATE_MIN_PPM, NITRATE_MAX_PPM)?;

        let pond_volume_l = input.volume_unit.to_liters(input.pond_volume);
        if pond_volume_l <= 0.0 {
            return Ok(None);
        }

        let tan_exchange_pct = exchange_percent(input.tan_ppm, SAFE_TAN_PPM);
        let nitrate_exchange_pct = exchange_percent(input.nitrate_ppm, SAFE_NITRATE_PPM);
        let recommended_pct = tan_exchange_pct.max(nitrate_exchange_pct);
        let exchange_volume_l = pond_volume_l * recommended_pct / 100.0;
        let exchange_volume_m3 = (exchange_volume_l >= LITERS_PER_M3)
            .then(|| (exchange_volume_l / LITERS_PER_M3 * 10.0).round() / 10.0);

        debug!(recommended_pct, exchange_volume_l, "water exchange plan");
        Ok(Some(Self {
            pond_volume_l,
            tan_ppm: input.tan_ppm,
            nitrate_ppm: input.nitrate_ppm,
            tan_exchange_pct,
            nitrate_exchange_pct,
            recommended_pct,
            exchange_volume_l,
            exchange_volume_m3,
            tan_status: TanStatus::classify(input.tan_ppm),
            nitrate_status: NitrateStatus::classify(input.nitrate_ppm),
        }))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlkalinityStatus {
    Critical,
    Low,
    Optimal,
    /// Between 160 and 200 mg/L; carries no label.
    Unlabeled,
    High,
}

impl AlkalinityStatus {
    pub fn classify(alkalinity_mg_l: f64) -> Self {
        if alkalinity_mg_l < ALKALINITY_CRITICAL_BELOW {
            AlkalinityStatus::Critical
        } else if alkalinity_mg_l < ALKALINITY_LOW_BELOW {
            AlkalinityStatus::Low
        } else if alkalinity_mg_l <= ALKALINITY_OPTIMAL_MAX {
            AlkalinityStatus::Optimal
        } else if alkalinity_mg_l > ALKALINITY_HIGH_ABOVE {
            AlkalinityStatus::High
        } else {
            AlkalinityStatus::Unlabeled
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AlkalinityStatus::Critical => "Critical",
            AlkalinityStatus::Low => "Low",
            AlkalinityStatus::Optimal => "Optimal",
            AlkalinityStatus::Unlabeled => "",
            AlkalinityStatus::High => "High",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            AlkalinityStatus::Critical => "Urgent adjustment required",
            AlkalinityStatus::Low => "Recommended to adjust soon",
            AlkalinityStatus::Optimal => "No adjustment needed",
            AlkalinityStatus::Unlabeled => "",
            AlkalinityStatus::High => "Risk of scaling, review necessity",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlkalinityAdvisory {
    NoAdjustmentNeeded,
    /// Increase below 20 mg/L; retest in 24 hours.
    MinorAdjustment,
    CriticalAlkalinity,
    TargetAboveSafeRange,
}

impl AlkalinityAdvisory {
    pub fn message(&self) -> &'static str {
        match self {
            AlkalinityAdvisory::NoAdjustmentNeeded => {
                "Target is at or below current alkalinity. No buffer dose needed."
            }
            AlkalinityAdvisory::MinorAdjustment => "Adjustment may be minor; test again in 24 hrs",
            AlkalinityAdvisory::CriticalAlkalinity => {
                "Alkalinity is dangerously low (< 60 mg/L). Urgent adjustment required."
            }
            AlkalinityAdvisory::TargetAboveSafeRange => {
                "Target alkalinity is above the safe level. Risk of scaling or pH imbalance."
            }
        }
    }
}

/// Grams of buffer compound to raise `volume_m3` from `current` to `target`
/// mg/L as CaCO₃. Zero when already at or above target.
pub fn grams_needed(volume_m3: f64, current_mg_l: f64, target_mg_l: f64, buffer: BufferCompound) -> f64 {
    let delta = (target_mg_l - current_mg_l).max(0.0);
    volume_m3 * delta * buffer.buffer_factor()
}

/// Dose for display: whole grams below 1 kg, kilograms from 1000 g up.
pub fn dose_measurement(grams: f64) -> Measurement<f64> {
    if grams >= 1000.0 {
        Measurement::new(grams / 1000.0, "kg")
    } else {
        Measurement::new(grams.round(), "g")
    }
}

pub fn format_dose(grams: f64) -> String {
    let dose = dose_measurement(grams);
    let decimals = if dose.unit == "kg" { 2 } else { 0 };
    format!("{} {}", format_fixed(dose.value, decimals), dose.unit)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AlkalinityInput {
    pub pond_volume: f64,
    pub volume_unit: VolumeUnit,
    pub current_mg_l: f64,
    pub target_mg_l: f64,
    pub buffer: BufferCompound,
}

impl AlkalinityInput {
    pub fn new(pond_volume: f64, volume_unit: VolumeUnit, current_mg_l: f64) -> Self {
        Self {
            pond_volume,
            volume_unit,
            current_mg_l,
            target_mg_l: DEFAULT_TARGET_ALKALINITY,
            buffer: BufferCompound::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlkalinityDose {
    pub volume_l: f64,
    pub volume_m3: f64,
    pub current_mg_l: f64,
    pub target_mg_l: f64,
    pub delta_mg_l: f64,
    pub buffer: BufferCompound,
    pub grams_needed: f64,
    pub current_status: AlkalinityStatus,
    pub target_status: AlkalinityStatus,
    pub advisories: Vec<AlkalinityAdvisory>,
}

impl AlkalinityDose {
    pub fn compute(input: &AlkalinityInput) -> Result<Option<Self>, PondforgeError> {
        check_range("current alkalinity", input.current_mg_l, 0.0, MAX_CURRENT_ALKALINITY)?;
        check_range("target alkalinity", input.target_mg_l, 0.0, MAX_TARGET_ALKALINITY)?;

        let volume_l = input.volume_unit.to_liters(input.pond_volume);
        if volume_l <= 0.0 {
            return Ok(None);
        }
        let volume_m3 = volume_l / LITERS_PER_M3;
        let delta_mg_l = (input.target_mg_l - input.current_mg_l).max(0.0);
        let grams = grams_needed(volume_m3, input.current_mg_l, input.target_mg_l, input.buffer);

        let mut advisories = Vec::new();
        if delta_mg_l <= 0.0 {
            advisories.push(AlkalinityAdvisory::NoAdjustmentNeeded);
        } else if delta_mg_l < MINOR_ALKALINITY_DELTA {
            advisories.push(AlkalinityAdvisory::MinorAdjustment);
        }
        if input.current_mg_l < ALKALINITY_CRITICAL_BELOW {
            warn!(current = input.current_mg_l, "alkalinity dangerously low");
            advisories.push(AlkalinityAdvisory::CriticalAlkalinity);
        }
        if input.target_mg_l > ALKALINITY_HIGH_ABOVE {
            warn!(target = input.target_mg_l, "target alkalinity above safe range");
            advisories.push(AlkalinityAdvisory::TargetAboveSafeRange);
        }

        debug!(grams, buffer = input.buffer.code(), "alkalinity dose");
        Ok(Some(Self {
            volume_l,
            volume_m3,
            current_mg_l: input.current_mg_l,
            target_mg_l: input.target_mg_l,
            delta_mg_l,
            buffer: input.buffer,
            grams_needed: grams,
            current_status: AlkalinityStatus::classify(input.current_mg_l),
            target_status: AlkalinityStatus::classify(input.target_mg_l),
            advisories,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exchange_is_zero_at_threshold() {
        for threshold in [0.5, 50.0, 3.0] {
            assert_eq!(exchange_percent(threshold, threshold), 0.0);
        }
    }

    #[test]
    fn doubling_the_threshold_needs_half_exchange() {
        for threshold in [0.5, 50.0, 7.0] {
            assert!((raw_exchange_percent(2.0 * threshold, threshold) - 50.0).abs() < 1e-9);
        }
    }

    #[test]
    fn scenario_b_tan_exchange() {
        assert_eq!(exchange_percent(2.0, 0.5), 75.0);
    }

    #[test]
    fn small_excess_rounds_up_to_one_percent() {
        assert_eq!(exchange_percent(50.2, 50.0), 1.0);
        assert_eq!(exchange_percent(0.504, 0.5), 1.0);
    }

    #[test]
    fn recommended_exchange_is_the_larger_nutrient() {
        let plan = WaterExchangePlan::compute(&WaterExchangeInput {
            pond_volume: 10.0,
            volume_unit: VolumeUnit::CubicMeters,
            tan_ppm: 2.0,
            nitrate_ppm: 80.0,
        })
        .unwrap()
        .unwrap();
        assert_eq!(plan.tan_exchange_pct, 75.0);
        assert_eq!(plan.nitrate_exchange_pct, 38.0);
        assert_eq!(plan.recommended_pct, 75.0);
        assert_eq!(plan.exchange_volume_l, 7500.0);
        assert_eq!(plan.exchange_volume_m3, Some(7.5));
        assert_eq!(plan.tan_status, TanStatus::Danger);
        assert_eq!(plan.nitrate_status, NitrateStatus::Moderate);
    }

    #[test]
    fn out_of_range_readings_suppress_the_plan() {
        let input = WaterExchangeInput {
            pond_volume: 1000.0,
            volume_unit: VolumeUnit::Liters,
            tan_ppm: 12.0,
            nitrate_ppm: 20.0,
        };
        assert!(matches!(
            WaterExchangePlan::compute(&input),
            Err(PondforgeError::OutOfRange { .. })
        ));

        let input = WaterExchangeInput {
            tan_ppm: 0.3,
            nitrate_ppm: 0.05,
            ..input
        };
        assert!(WaterExchangePlan::compute(&input).is_err());
    }

    #[test]
    fn no_volume_is_not_computable() {
        let input = WaterExchangeInput {
            pond_volume: 0.0,
            volume_unit: VolumeUnit::Liters,
            tan_ppm: 1.0,
            nitrate_ppm: 20.0,
        };
        assert_eq!(WaterExchangePlan::compute(&input).unwrap(), None);
    }

    #[test]
    fn status_bands() {
        assert_eq!(TanStatus::classify(0.5), TanStatus::Safe);
        assert_eq!(TanStatus::classify(1.0), TanStatus::Caution);
        assert_eq!(TanStatus::classify(1.01), TanStatus::Danger);
        assert_eq!(NitrateStatus::classify(49.9), NitrateStatus::Acceptable);
        assert_eq!(NitrateStatus::classify(50.0), NitrateStatus::Moderate);
        assert_eq!(NitrateStatus::classify(100.5), NitrateStatus::Excessive);
    }

    #[test]
    fn scenario_d_alkalinity_dose() {
        let input = AlkalinityInput {
            target_mg_l: 120.0,
            ..AlkalinityInput::new(10_000.0, VolumeUnit::Liters, 40.0)
        };
        let dose = AlkalinityDose::compute(&input).unwrap().unwrap();
        assert!((dose.grams_needed - 800.0).abs() < 1e-9);
        assert_eq!(dose.current_status, AlkalinityStatus::Critical);
        assert_eq!(dose.advisories, vec![AlkalinityAdvisory::CriticalAlkalinity]);
        assert_eq!(format_dose(dose.grams_needed), "800 g");
    }

    #[test]
    fn no_dose_when_already_at_target() {
        for buffer in BufferCompound::ALL {
            assert_eq!(grams_needed(10.0, 120.0, 120.0, buffer), 0.0);
            assert_eq!(grams_needed(10.0, 150.0, 120.0, buffer), 0.0);
        }
        let dose = AlkalinityDose::compute(&AlkalinityInput::new(10.0, VolumeUnit::CubicMeters, 130.0))
            .unwrap()
            .unwrap();
        assert_eq!(dose.advisories, vec![AlkalinityAdvisory::NoAdjustmentNeeded]);
    }

    #[test]
    fn alkalinity_breakpoints() {
        assert_eq!(AlkalinityStatus::classify(59.9), AlkalinityStatus::Critical);
        assert_eq!(AlkalinityStatus::classify(60.0), AlkalinityStatus::Low);
        assert_eq!(AlkalinityStatus::classify(79.9), AlkalinityStatus::Low);
        assert_eq!(AlkalinityStatus::classify(80.0), AlkalinityStatus::Optimal);
        assert_eq!(AlkalinityStatus::classify(160.0), AlkalinityStatus::Optimal);
        assert_eq!(AlkalinityStatus::classify(180.0), AlkalinityStatus::Unlabeled);
        assert_eq!(AlkalinityStatus::classify(200.0), AlkalinityStatus::Unlabeled);
        assert_eq!(AlkalinityStatus::classify(200.1), AlkalinityStatus::High);
    }

    #[test]
    fn minor_adjustment_and_high_target() {
        let input = AlkalinityInput {
            target_mg_l: 210.0,
            buffer: BufferCompound::SodiumBicarbonate,
            ..AlkalinityInput::new(100.0, VolumeUnit::CubicMeters, 195.0)
        };
        let dose = AlkalinityDose::compute(&input).unwrap().unwrap();
        assert_eq!(
            dose.advisories,
            vec![
                AlkalinityAdvisory::MinorAdjustment,
                AlkalinityAdvisory::TargetAboveSafeRange
            ]
        );
        assert!((dose.grams_needed - 2520.0).abs() < 1e-9);
        assert_eq!(format_dose(dose.grams_needed), "2.52 kg");
    }

    #[test]
    fn alkalinity_validation() {
        let too_high = AlkalinityInput::new(10.0, VolumeUnit::CubicMeters, 250.0);
        assert!(AlkalinityDose::compute(&too_high).is_err());
        let bad_target = AlkalinityInput {
            target_mg_l: 300.0,
            ..AlkalinityInput::new(10.0, VolumeUnit::CubicMeters, 100.0)
        };
        assert!(AlkalinityDose::compute(&bad_target).is_err());
    }
}
