//! Water-chemistry reference data: alkalinity buffers and biofloc carbon sources.

use serde::{Deserialize, Serialize};

/// Liming and buffering compounds used to raise total alkalinity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BufferCompound {
    #[default]
    #[serde(rename = "CaCO3")]
    CalciumCarbonate,
    #[serde(rename = "NaHCO3")]
    SodiumBicarbonate,
    #[serde(rename = "CaOH2")]
    CalciumHydroxide,
    #[serde(rename = "CaO")]
    CalciumOxide,
}

impl BufferCompound {
    pub const ALL: [BufferCompound; 4] = [
        BufferCompound::CalciumCarbonate,
        BufferCompound::SodiumBicarbonate,
        BufferCompound::CalciumHydroxide,
        BufferCompound::CalciumOxide,
    ];

    /// Grams of compound per m³ per mg/L of alkalinity (as CaCO₃) raised.
    pub fn buffer_factor(&self) -> f64 {
        match self {
            BufferCompound::CalciumCarbonate => 1.0,
            BufferCompound::SodiumBicarbonate => 1.68,
            BufferCompound::CalciumHydroxide => 0.74,
            BufferCompound::CalciumOxide => 0.56,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            BufferCompound::CalciumCarbonate => "CaCO3",
            BufferCompound::SodiumBicarbonate => "NaHCO3",
            BufferCompound::CalciumHydroxide => "CaOH2",
            BufferCompound::CalciumOxide => "CaO",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BufferCompound::CalciumCarbonate => "Calcium Carbonate (CaCO₃)",
            BufferCompound::SodiumBicarbonate => "Sodium Bicarbonate (NaHCO₃)",
            BufferCompound::CalciumHydroxide => "Calcium Hydroxide (Ca(OH)₂)",
            BufferCompound::CalciumOxide => "Calcium Oxide (CaO)",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL
            .into_iter()
            .find(|compound| compound.code().eq_ignore_ascii_case(code))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CarbonSourceProfile {
    pub name: &'static str,
    /// Mass fraction of available organic carbon.
    pub available_carbon: f64,
    pub notes: Option<&'static str>,
}

/// Carbohydrate sources dosed to drive heterotrophic TAN uptake in biofloc systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CarbonSource {
    Molasses,
    WhiteSugar,
    Lactose,
    Dextrose,
    Glucose,
    Acetate,
    Glycerol,
    Cellulose,
    Starch,
    CassavaMeal,
    CornFlour,
    RiceBran,
    SorghumMeal,
    Tapioca,
    WheatFlour,
    WheatBran,
}

impl CarbonSource {
    pub const ALL: [CarbonSource; 16] = [
        CarbonSource::Molasses,
        CarbonSource::WhiteSugar,
        CarbonSource::Lactose,
        CarbonSource::Dextrose,
        CarbonSource::Glucose,
        CarbonSource::Acetate,
        CarbonSource::Glycerol,
        CarbonSource::Cellulose,
        CarbonSource::Starch,
        CarbonSource::CassavaMeal,
        CarbonSource::CornFlour,
        CarbonSource::RiceBran,
        CarbonSource::SorghumMeal,
        CarbonSource::Tapioca,
        CarbonSource::WheatFlour,
        CarbonSource::WheatBran,
    ];

    pub fn profile(&self) -> CarbonSourceProfile {
        let (name, available_carbon) = match self {
            CarbonSource::Molasses => {
                return CarbonSourceProfile {
                    name: "Molasses",
                    available_carbon: 0.24,
                    notes: Some(
                        "Assume a carbon concentration of 24% w/w and a specific weight of 1.3 g/ml",
                    ),
                }
            }
            CarbonSource::WhiteSugar => ("White Sugar", 0.421),
            CarbonSource::Lactose => ("Lactose", 0.421),
            CarbonSource::Dextrose => ("Dextrose", 0.4),
            CarbonSource::Glucose => ("Glucose", 0.4),
            CarbonSource::Acetate => ("Acetate", 0.4),
            CarbonSource::Glycerol => ("Glycerol", 0.391),
            CarbonSource::Cellulose => ("Cellulose", 0.444),
            CarbonSource::Starch => ("Starch", 0.444),
            CarbonSource::CassavaMeal => ("Cassava meal", 0.434),
            CarbonSource::CornFlour => ("Corn flour", 0.434),
            CarbonSource::RiceBran => ("Rice bran", 0.434),
            CarbonSource::SorghumMeal => ("Sorghum meal", 0.434),
            CarbonSource::Tapioca => ("Tapioca", 0.434),
            CarbonSource::WheatFlour => ("Wheat flour", 0.434),
            CarbonSource::WheatBran => ("Wheat bran", 0.434),
        };
        CarbonSourceProfile {
            name,
            available_carbon,
            notes: None,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|source| source.profile().name.eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_factors_match_reference_table() {
        let factors: Vec<f64> = BufferCompound::ALL.iter().map(|b| b.buffer_factor()).collect();
        assert_eq!(factors, vec![1.0, 1.68, 0.74, 0.56]);
        assert_eq!(BufferCompound::from_code("nahco3"), Some(BufferCompound::SodiumBicarbonate));
        assert_eq!(BufferCompound::from_code("MgCO3"), None);
    }

    #[test]
    fn only_molasses_carries_a_note() {
        let with_notes: Vec<&str> = CarbonSource::ALL
            .iter()
            .map(|s| s.profile())
            .filter(|p| p.notes.is_some())
            .map(|p| p.name)
            .collect();
        assert_eq!(with_notes, vec!["Molasses"]);
    }

    #[test]
    fn carbon_source_lookup() {
        let source = CarbonSource::from_name("rice bran").unwrap();
        assert_eq!(source.profile().available_carbon, 0.434);
        assert_eq!(CarbonSource::from_name("Honey"), None);
    }
}
