//! Calibration constants used by the calculators. These are empirical farm
//! figures; advisories downstream are tuned to these exact values.

/// kg of standing shrimp biomass one kW of aeration supports.
pub const BIOMASS_KG_PER_KW: f64 = 400.0;
/// Horsepower per kilowatt.
pub const HP_PER_KW: f64 = 1.34;
/// Rated horsepower of one paddlewheel aerator.
pub const PADDLEWHEEL_HP: f64 = 1.5;
/// Stocking density above which continuous aeration is advised, PL/m².
pub const HIGH_STOCKING_DENSITY: f64 = 60.0;

/// Coefficient of the simplified pond evaporation formula.
pub const EVAPORATION_BASE_COEFFICIENT: f64 = 0.408;
/// Temperature offset of the evaporation formula, °C.
pub const EVAPORATION_TEMPERATURE_OFFSET: f64 = 18.0;
/// Wind speed at which no wind correction is applied, m/s.
pub const REFERENCE_WIND_SPEED: f64 = 2.0;
/// Fractional rate change per m/s away from the reference wind speed.
pub const WIND_ADJUSTMENT_PER_M_S: f64 = 0.1;
/// Default pan coefficient for open ponds.
pub const DEFAULT_EVAPORATION_COEFFICIENT: f64 = 1.1;
/// Evaporation above this rate (mm/day) raises an advisory.
pub const HIGH_EVAPORATION_MM_DAY: f64 = 8.0;
/// Accepted weather inputs for the evaporation estimate.
pub const MIN_AIR_TEMPERATURE_C: f64 = 20.0;
pub const MAX_AIR_TEMPERATURE_C: f64 = 45.0;
pub const MIN_HUMIDITY_PCT: f64 = 10.0;
pub const MAX_HUMIDITY_PCT: f64 = 100.0;
pub const MIN_WIND_SPEED_M_S: f64 = 0.0;
pub const MAX_WIND_SPEED_M_S: f64 = 10.0;
pub const DAYS_PER_WEEK: f64 = 7.0;
pub const DAYS_PER_MONTH: f64 = 30.0;
/// Optimal pond salinity, ppt.
pub const TARGET_SALINITY_PPT: f64 = 30.0;

/// Safe total ammonia nitrogen, ppm.
pub const SAFE_TAN_PPM: f64 = 0.5;
/// Upper bound of the TAN caution band, ppm.
pub const CAUTION_TAN_PPM: f64 = 1.0;
/// Safe nitrate, ppm.
pub const SAFE_NITRATE_PPM: f64 = 50.0;
/// Upper bound of the moderate nitrate band, ppm.
pub const MODERATE_NITRATE_PPM: f64 = 100.0;
pub const TAN_MIN_PPM: f64 = 0.01;
pub const TAN_MAX_PPM: f64 = 10.0;
pub const NITRATE_MIN_PPM: f64 = 0.1;
pub const NITRATE_MAX_PPM: f64 = 500.0;

pub const DEFAULT_TARGET_ALKALINITY: f64 = 120.0;
pub const ALKALINITY_CRITICAL_BELOW: f64 = 60.0;
pub const ALKALINITY_LOW_BELOW: f64 = 80.0;
pub const ALKALINITY_OPTIMAL_MAX: f64 = 160.0;
pub const ALKALINITY_HIGH_ABOVE: f64 = 200.0;
pub const MAX_CURRENT_ALKALINITY: f64 = 200.0;
pub const MAX_TARGET_ALKALINITY: f64 = 260.0;
/// Alkalinity increases smaller than this are flagged as minor, mg/L.
pub const MINOR_ALKALINITY_DELTA: f64 = 20.0;

/// Grams of organic carbon required per gram of TAN assimilated.
pub const CARBON_PER_TAN: f64 = 6.0;

/// Feed conversion ratios offered for selection.
pub const FCR_OPTIONS: [f64; 7] = [1.2, 1.3, 1.4, 1.5, 1.6, 1.7, 1.8];
pub const DEFAULT_FCR: f64 = 1.2;
pub const FEED_BAG_KG: f64 = 25.0;
/// Feed share of total production cost above which an alert is raised, %.
pub const FEED_COST_SHARE_ALERT_PCT: f64 = 60.0;

/// Reference production cost per kg of shrimp.
pub const REFERENCE_COST_PER_KG: f64 = 8.0;
pub const DEFAULT_OPERATION_HOURS: f64 = 16.0;
pub const DEFAULT_CULTURE_DAYS: f64 = 120.0;
pub const DEFAULT_WORKER_COUNT: f64 = 1.0;
pub const DAYS_PER_LABOR_MONTH: f64 = 30.0;

pub const DEFAULT_STOCKING_DENSITY: f64 = 25.0;
pub const DEFAULT_SURVIVAL_PCT: f64 = 80.0;
pub const DEFAULT_HARVEST_WEIGHT_G: f64 = 25.0;
