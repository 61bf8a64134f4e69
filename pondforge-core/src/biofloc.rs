//! Carbon dosing for biofloc systems: how much carbohydrate to add so that
//! heterotrophic bacteria assimilate the current TAN load.

use crate::{constants::CARBON_PER_TAN, error::PondforgeError};
use pondforge_schemas::chemistry::CarbonSource;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CarbonDose {
    pub tank_volume_l: f64,
    pub tan_ppm: f64,
    pub source: CarbonSource,
    /// Organic carbon required, grams.
    pub carbon_g: f64,
    /// Mass of the chosen source that supplies `carbon_g`, grams.
    pub source_g: f64,
}

impl CarbonDose {
    /// `None` unless both volume and TAN are positive.
    pub fn compute(tank_volume_l: f64, tan_ppm: f64, source: CarbonSource) -> Option<Self> {
        if tank_volume_l <= 0.0 || tan_ppm <= 0.0 {
            return None;
        }
        let carbon_g = tank_volume_l * tan_ppm * CARBON_PER_TAN / 1000.0;
        let source_g = carbon_g / source.profile().available_carbon;
        debug!(carbon_g, source_g, source = source.profile().name, "carbon dose");
        Some(Self {
            tank_volume_l,
            tan_ppm,
            source,
            carbon_g,
            source_g,
        })
    }

    pub fn compute_named(
        tank_volume_l: f64,
        tan_ppm: f64,
        source_name: &str,
    ) -> Result<Option<Self>, PondforgeError> {
        let source = CarbonSource::from_name(source_name)
            .ok_or_else(|| PondforgeError::unknown_key("carbon source", source_name))?;
        Ok(Self::compute(tank_volume_l, tan_ppm, source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn molasses_dose() {
        let dose = CarbonDose::compute(10_000.0, 2.0, CarbonSource::Molasses).unwrap();
        assert!((dose.carbon_g - 120.0).abs() < 1e-9);
        assert!((dose.source_g - 500.0).abs() < 1e-9);
    }

    #[test]
    fn requires_positive_inputs() {
        assert!(CarbonDose::compute(0.0, 2.0, CarbonSource::Glucose).is_none());
        assert!(CarbonDose::compute(1000.0, 0.0, CarbonSource::Glucose).is_none());
    }

    #[test]
    fn unknown_source_is_an_error() {
        assert!(matches!(
            CarbonDose::compute_named(1000.0, 1.0, "Honey"),
            Err(PondforgeError::UnknownKey { .. })
        ));
        assert!(CarbonDose::compute_named(1000.0, 1.0, "Glucose").unwrap().is_some());
    }
}
