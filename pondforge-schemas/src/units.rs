//! Unit enums used at the input boundary. Calculators work in m², litres and
//! grams; these types carry the conversion factors into those canonical units.

use serde::{Deserialize, Serialize};

/// Square metres per hectare.
pub const M2_PER_HECTARE: f64 = 10_000.0;
/// Square metres per acre.
pub const M2_PER_ACRE: f64 = 4046.86;
/// Litres per cubic metre.
pub const LITERS_PER_M3: f64 = 1000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AreaUnit {
    #[default]
    SquareMeters,
    Hectares,
    Acres,
}

impl AreaUnit {
    pub fn to_square_meters_factor(&self) -> f64 {
        match self {
            AreaUnit::SquareMeters => 1.0,
            AreaUnit::Hectares => M2_PER_HECTARE,
            AreaUnit::Acres => M2_PER_ACRE,
        }
    }

    pub fn to_square_meters(&self, value: f64) -> f64 {
        value * self.to_square_meters_factor()
    }

    pub fn from_square_meters(&self, m2: f64) -> f64 {
        m2 / self.to_square_meters_factor()
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            AreaUnit::SquareMeters => "m²",
            AreaUnit::Hectares => "ha",
            AreaUnit::Acres => "acre",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolumeUnit {
    #[default]
    Liters,
    CubicMeters,
}

impl VolumeUnit {
    pub fn to_liters(&self, value: f64) -> f64 {
        match self {
            VolumeUnit::Liters => value,
            VolumeUnit::CubicMeters => value * LITERS_PER_M3,
        }
    }

    pub fn to_cubic_meters(&self, value: f64) -> f64 {
        self.to_liters(value) / LITERS_PER_M3
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            VolumeUnit::Liters => "L",
            VolumeUnit::CubicMeters => "m³",
        }
    }
}

/// Currencies offered on the production cost sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Pkr,
    Uah,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Pkr => "PKR",
            Currency::Uah => "UAH",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Pkr => "₨",
            Currency::Uah => "₴",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn area_units_normalize_to_square_meters() {
        assert_eq!(AreaUnit::SquareMeters.to_square_meters(5000.0), 5000.0);
        assert_eq!(AreaUnit::Hectares.to_square_meters(0.5), 5000.0);
        assert!((AreaUnit::Acres.to_square_meters(2.0) - 8093.72).abs() < 1e-9);
        assert!((AreaUnit::Hectares.from_square_meters(25_000.0) - 2.5).abs() < 1e-12);
    }

    #[test]
    fn volume_units_convert_between_liters_and_cubic_meters() {
        assert_eq!(VolumeUnit::CubicMeters.to_liters(10.0), 10_000.0);
        assert_eq!(VolumeUnit::Liters.to_cubic_meters(10_000.0), 10.0);
    }

    #[test]
    fn currency_codes() {
        assert_eq!(Currency::default().code(), "USD");
        assert_eq!(Currency::Pkr.symbol(), "₨");
    }
}
