//! Evaporation loss and salinity dilution.
//!
//! The evaporation rate uses a simplified proxy,
//! `E = 0.408 × (T + 18) × (100 − RH) / 100 × K`, scaled by
//! `1 + (wind − 2) × 0.1`. It is not Penman-Monteith; farm advisories are
//! calibrated against this exact form.

use crate::{
    constants::{
        DAYS_PER_MONTH, DAYS_PER_WEEK, DEFAULT_EVAPORATION_COEFFICIENT,
        EVAPORATION_BASE_COEFFICIENT, EVAPORATION_TEMPERATURE_OFFSET, HIGH_EVAPORATION_MM_DAY,
        MAX_AIR_TEMPERATURE_C, MAX_HUMIDITY_PCT, MAX_WIND_SPEED_M_S, MIN_AIR_TEMPERATURE_C,
        MIN_HUMIDITY_PCT, MIN_WIND_SPEED_M_S, REFERENCE_WIND_SPEED, TARGET_SALINITY_PPT,
        WIND_ADJUSTMENT_PER_M_S,
    },
    error::PondforgeError,
    input::check_range,
};
use pondforge_schemas::{
    environment::{RegionalPreset, WeatherConditions},
    units::LITERS_PER_M3,
};
use serde::Serialize;
use tracing::{debug, warn};

/// Unadjusted evaporation in mm/day.
pub fn base_evaporation_rate(temperature_c: f64, humidity_pct: f64, coefficient: f64) -> f64 {
    EVAPORATION_BASE_COEFFICIENT
        * (temperature_c + EVAPORATION_TEMPERATURE_OFFSET)
        * (100.0 - humidity_pct)
        / 100.0
        * coefficient
}

pub fn wind_adjusted_rate(rate_mm_day: f64, wind_speed_m_s: f64) -> f64 {
    rate_mm_day * (1.0 + (wind_speed_m_s - REFERENCE_WIND_SPEED) * WIND_ADJUSTMENT_PER_M_S)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EvaporationInput {
    pub pond_area_m2: f64,
    pub weather: WeatherConditions,
    pub coefficient: f64,
}

impl Default for EvaporationInput {
    fn default() -> Self {
        Self {
            pond_area_m2: 0.0,
            weather: WeatherConditions::default(),
            coefficient: DEFAULT_EVAPORATION_COEFFICIENT,
        }
    }
}

impl EvaporationInput {
    /// Replaces temperature, humidity and wind with the preset's values. Area
    /// and coefficient are kept.
    pub fn with_preset(mut self, preset: RegionalPreset) -> Self {
        self.weather = preset.conditions();
        self
    }

    pub fn apply_preset_named(&mut self, name: &str) -> Result<(), PondforgeError> {
        let preset = RegionalPreset::from_name(name)
            .ok_or_else(|| PondforgeError::unknown_key("regional preset", name))?;
        debug!(preset = preset.name(), "applied regional preset");
        self.weather = preset.conditions();
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EvaporationEstimate {
    pub raw_rate_mm_day: f64,
    pub rate_mm_day: f64,
    /// 1 mm over 1 m² is 1 L.
    pub daily_loss_l: f64,
    pub daily_loss_m3: f64,
    pub weekly_loss_l: f64,
    pub monthly_loss_l: f64,
    pub is_high_evaporation: bool,
}

impl EvaporationEstimate {
    /// Weather outside 20–45 °C, 10–100 % RH or 0–10 m/s wind is rejected
    /// with an `OutOfRange` error. A pond without area yields `Ok(None)`.
    pub fn compute(input: &EvaporationInput) -> Result<Option<Self>, PondforgeError> {
        let weather = &input.weather;
        check_range(
            "temperature",
            weather.temperature_c,
            MIN_AIR_TEMPERATURE_C,
            MAX_AIR_TEMPERATURE_C,
        )?;
        check_range("humidity", weather.humidity_pct, MIN_HUMIDITY_PCT, MAX_HUMIDITY_PCT)?;
        check_range(
            "wind speed",
            weather.wind_speed_m_s,
            MIN_WIND_SPEED_M_S,
            MAX_WIND_SPEED_M_S,
        )?;
        if input.pond_area_m2 <= 0.0 {
            return Ok(None);
        }

        let raw_rate_mm_day =
            base_evaporation_rate(weather.temperature_c, weather.humidity_pct, input.coefficient);
        let rate_mm_day = wind_adjusted_rate(raw_rate_mm_day, weather.wind_speed_m_s);
        let daily_loss_l = rate_mm_day * input.pond_area_m2;
        let is_high_evaporation = rate_mm_day > HIGH_EVAPORATION_MM_DAY;

        if is_high_evaporation {
            warn!(
                rate_mm_day,
                "high evaporation; consider shading, windbreaks or automated top-up"
            );
        }

        Ok(Some(Self {
            raw_rate_mm_day,
            rate_mm_day,
            daily_loss_l,
            daily_loss_m3: daily_loss_l / LITERS_PER_M3,
            weekly_loss_l: daily_loss_l * DAYS_PER_WEEK,
            monthly_loss_l: daily_loss_l * DAYS_PER_MONTH,
            is_high_evaporation,
        }))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SalinityDilution {
    pub pond_area_m2: f64,
    pub depth_m: f64,
    pub current_ppt: f64,
    pub target_ppt: f64,
    pub total_volume_m3: f64,
    pub freshwater_m3: f64,
    pub freshwater_l: f64,
}

impl SalinityDilution {
    /// Freshwater needed to bring salinity back down to 30 ppt. Only computed
    /// when the pond has volume and is saltier than the target.
    pub fn compute(pond_area_m2: f64, depth_m: f64, current_ppt: f64) -> Option<Self> {
        if pond_area_m2 <= 0.0 || depth_m <= 0.0 || current_ppt <= TARGET_SALINITY_PPT {
            return None;
        }
        let total_volume_m3 = pond_area_m2 * depth_m;
        let freshwater_m3 = total_volume_m3 * (current_ppt - TARGET_SALINITY_PPT) / TARGET_SALINITY_PPT;
        Some(Self {
            pond_area_m2,
            depth_m,
            current_ppt,
            target_ppt: TARGET_SALINITY_PPT,
            total_volume_m3,
            freshwater_m3,
            freshwater_l: freshwater_m3 * LITERS_PER_M3,
        })
    }
}
