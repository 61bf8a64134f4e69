use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement<T> {
    pub value: T,
    pub unit: String,
}

impl<T> Measurement<T> {
    pub fn new(value: T, unit: &str) -> Self {
        Self {
            value,
            unit: unit.to_string(),
        }
    }
}

/// Climate inputs that drive pond evaporation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherConditions {
    /// Average daily air temperature in °C.
    pub temperature_c: f64,
    /// Average relative humidity in percent.
    pub humidity_pct: f64,
    /// Wind speed in m/s.
    pub wind_speed_m_s: f64,
}

impl Default for WeatherConditions {
    fn default() -> Self {
        Self {
            temperature_c: 30.0,
            humidity_pct: 60.0,
            wind_speed_m_s: 2.0,
        }
    }
}

/// Regional climate presets offered by the evaporation estimator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegionalPreset {
    HotDryPunjab,
    HumidCoastalSindh,
    TropicalSeAsia,
}

impl RegionalPreset {
    pub const ALL: [RegionalPreset; 3] = [
        RegionalPreset::HotDryPunjab,
        RegionalPreset::HumidCoastalSindh,
        RegionalPreset::TropicalSeAsia,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            RegionalPreset::HotDryPunjab => "Hot Dry (Punjab)",
            RegionalPreset::HumidCoastalSindh => "Humid Coastal (Sindh)",
            RegionalPreset::TropicalSeAsia => "Tropical (SE Asia)",
        }
    }

    pub fn conditions(&self) -> WeatherConditions {
        match self {
            RegionalPreset::HotDryPunjab => WeatherConditions {
                temperature_c: 38.0,
                humidity_pct: 30.0,
                wind_speed_m_s: 3.5,
            },
            RegionalPreset::HumidCoastalSindh => WeatherConditions {
                temperature_c: 32.0,
                humidity_pct: 75.0,
                wind_speed_m_s: 4.0,
            },
            RegionalPreset::TropicalSeAsia => WeatherConditions {
                temperature_c: 30.0,
                humidity_pct: 80.0,
                wind_speed_m_s: 2.0,
            },
        }
    }

    /// Looks a preset up by its display name. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_lookup_is_case_insensitive_and_fails_closed() {
        assert_eq!(
            RegionalPreset::from_name("hot dry (punjab)"),
            Some(RegionalPreset::HotDryPunjab)
        );
        assert_eq!(RegionalPreset::from_name("Arctic"), None);
    }

    #[test]
    fn tropical_preset_has_neutral_wind() {
        let conditions = RegionalPreset::TropicalSeAsia.conditions();
        assert_eq!(conditions.wind_speed_m_s, 2.0);
        assert_eq!(conditions.humidity_pct, 80.0);
    }
}
