//! On-disk farm scenario format. Every section is optional and every numeric
//! field is kept as the raw text or number the user typed, so the calculators
//! see exactly what a form would hand them.

use crate::{
    command::CostEdit,
    equipment::AerationType,
    units::{AreaUnit, Currency, VolumeUnit},
};
use serde::{Deserialize, Serialize};

/// A form field value before parsing: either a YAML number or free text such
/// as `"5,000"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawInput {
    Number(f64),
    Text(String),
}

impl From<f64> for RawInput {
    fn from(value: f64) -> Self {
        RawInput::Number(value)
    }
}

impl From<&str> for RawInput {
    fn from(value: &str) -> Self {
        RawInput::Text(value.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PondSection {
    pub length_m: Option<RawInput>,
    pub width_m: Option<RawInput>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StockingSection {
    /// Postlarvae per m².
    pub pl_density: Option<RawInput>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrowthSection {
    pub initial_weight_g: Option<RawInput>,
    pub days: Option<RawInput>,
    pub adg_g_per_day: Option<RawInput>,
    /// When both are set the lookup-table projection is used instead of the
    /// linear one.
    pub pl_stage: Option<String>,
    pub genetic_line: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurvivalSection {
    pub initial_count: Option<RawInput>,
    pub final_count: Option<RawInput>,
    pub harvested_biomass_kg: Option<RawInput>,
    pub average_weight_g: Option<RawInput>,
    /// Expected survival used for the growth-stage biomass projection.
    pub expected_survival_pct: Option<RawInput>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedSection {
    pub total_biomass_kg: Option<RawInput>,
    pub fcr: Option<RawInput>,
    pub feeding_period_days: Option<RawInput>,
    pub feed_price_per_kg: Option<RawInput>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AerationSection {
    pub pond_area: Option<RawInput>,
    pub area_unit: AreaUnit,
    pub stocking_density: Option<RawInput>,
    pub survival_rate_pct: Option<RawInput>,
    pub avg_weight_g: Option<RawInput>,
    pub aeration_type: AerationType,
    pub installed_kw: Option<RawInput>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaporationSection {
    pub pond_area_m2: Option<RawInput>,
    pub preset: Option<String>,
    pub temperature_c: Option<RawInput>,
    pub humidity_pct: Option<RawInput>,
    pub wind_speed_m_s: Option<RawInput>,
    pub coefficient: Option<RawInput>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SalinitySection {
    pub pond_area_m2: Option<RawInput>,
    pub depth_m: Option<RawInput>,
    pub current_ppt: Option<RawInput>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaterExchangeSection {
    pub pond_volume: Option<RawInput>,
    pub volume_unit: VolumeUnit,
    pub tan_ppm: Option<RawInput>,
    pub nitrate_ppm: Option<RawInput>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlkalinitySection {
    pub pond_volume: Option<RawInput>,
    pub volume_unit: VolumeUnit,
    pub current_mg_l: Option<RawInput>,
    pub target_mg_l: Option<RawInput>,
    /// Buffer compound code, e.g. `CaCO3`.
    pub buffer: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarbonDosingSection {
    pub tank_volume_l: Option<RawInput>,
    pub tan_ppm: Option<RawInput>,
    pub carbon_source: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EconomicsSection {
    pub pl_unit_price: Option<RawInput>,
    pub feed_unit_price: Option<RawInput>,
    pub aeration_power_kw: Option<RawInput>,
    pub operation_hours: Option<RawInput>,
    pub energy_unit_price: Option<RawInput>,
    pub culture_days: Option<RawInput>,
    pub monthly_labor_cost: Option<RawInput>,
    pub worker_count: Option<RawInput>,
    pub other_costs: Option<RawInput>,
    pub selling_price: Option<RawInput>,
    pub currency: Option<Currency>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FarmScenario {
    pub schema_version: String,
    pub farm_name: Option<String>,
    pub pond: PondSection,
    pub stocking: StockingSection,
    pub growth: GrowthSection,
    pub survival: SurvivalSection,
    pub feed: FeedSection,
    pub aeration: AerationSection,
    pub evaporation: EvaporationSection,
    pub salinity: SalinitySection,
    pub water_exchange: WaterExchangeSection,
    pub alkalinity: AlkalinitySection,
    pub carbon_dosing: CarbonDosingSection,
    pub economics: EconomicsSection,
    /// Manual cost-sheet edits, applied after the sheet is seeded.
    pub cost_edits: Vec<CostEdit>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENARIO: &str = r#"
schema_version: "1.0"
farm_name: Demo Farm
pond:
  length_m: "100"
  width_m: 50
aeration:
  pond_area: 0.5
  area_unit: hectares
  aeration_type: venturi
alkalinity:
  pond_volume: 10
  volume_unit: cubic_meters
  buffer: CaCO3
economics:
  currency: PKR
cost_edits:
  - type: set_pl_count
    count: 90000
  - type: set_currency
    currency: EUR
"#;

    #[test]
    fn scenario_accepts_text_and_numeric_fields() {
        let scenario: FarmScenario = serde_yaml::from_str(SCENARIO).unwrap();
        assert_eq!(scenario.farm_name.as_deref(), Some("Demo Farm"));
        assert_eq!(scenario.pond.length_m, Some(RawInput::Text("100".into())));
        assert_eq!(scenario.pond.width_m, Some(RawInput::Number(50.0)));
        assert_eq!(scenario.aeration.area_unit, AreaUnit::Hectares);
        assert_eq!(scenario.aeration.aeration_type, AerationType::Venturi);
        assert_eq!(scenario.alkalinity.volume_unit, VolumeUnit::CubicMeters);
        assert_eq!(scenario.economics.currency, Some(Currency::Pkr));
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let scenario: FarmScenario = serde_yaml::from_str("schema_version: \"1.0\"").unwrap();
        assert_eq!(scenario.feed, FeedSection::default());
        assert_eq!(scenario.aeration.area_unit, AreaUnit::SquareMeters);
        assert!(scenario.cost_edits.is_empty());
    }

    #[test]
    fn cost_edits_are_tagged() {
        let scenario: FarmScenario = serde_yaml::from_str(SCENARIO).unwrap();
        assert_eq!(
            scenario.cost_edits,
            vec![
                CostEdit::SetPlCount { count: 90000.0 },
                CostEdit::SetCurrency {
                    currency: Currency::Eur
                },
            ]
        );
    }
}
