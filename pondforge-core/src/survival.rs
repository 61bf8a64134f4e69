//! Survival and harvest count estimation.

use serde::Serialize;
use tracing::debug;

/// Estimated head count in a harvest of `harvested_biomass_kg` shrimp of
/// `average_weight_g` each. `None` when the average weight is not positive.
pub fn estimated_final_count(harvested_biomass_kg: f64, average_weight_g: f64) -> Option<f64> {
    if average_weight_g <= 0.0 {
        return None;
    }
    Some(harvested_biomass_kg * 1000.0 / average_weight_g)
}

/// Survival in percent. Undefined without a positive initial count.
pub fn survival_rate(final_count: f64, initial_count: f64) -> Option<f64> {
    if initial_count <= 0.0 {
        return None;
    }
    Some(final_count / initial_count * 100.0)
}

/// How the final head count was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum FinalCount {
    Counted { count: f64 },
    FromBiomass {
        harvested_biomass_kg: f64,
        average_weight_g: f64,
    },
}

impl FinalCount {
    pub fn value(&self) -> Option<f64> {
        match *self {
            FinalCount::Counted { count } => Some(count),
            FinalCount::FromBiomass {
                harvested_biomass_kg,
                average_weight_g,
            } => estimated_final_count(harvested_biomass_kg, average_weight_g),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SurvivalEstimate {
    pub initial_count: f64,
    pub final_count: Option<f64>,
    /// `None` is the explicit "unavailable" state, distinct from 0 %.
    pub survival_rate_pct: Option<f64>,
}

impl SurvivalEstimate {
    pub fn compute(initial_count: f64, final_count: FinalCount) -> Self {
        let count = final_count.value();
        let rate = count.and_then(|count| survival_rate(count, initial_count));
        debug!(initial_count, ?count, ?rate, "survival estimate");
        Self {
            initial_count,
            final_count: count,
            survival_rate_pct: rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn final_count_from_biomass() {
        assert_eq!(estimated_final_count(2500.0, 25.0), Some(100_000.0));
        assert_eq!(estimated_final_count(2500.0, 0.0), None);
    }

    #[test]
    fn survival_is_undefined_without_initial_count() {
        let estimate = SurvivalEstimate::compute(0.0, FinalCount::Counted { count: 500.0 });
        assert_eq!(estimate.survival_rate_pct, None);
        assert_eq!(estimate.final_count, Some(500.0));
    }

    #[test]
    fn survival_from_harvest_weight() {
        let estimate = SurvivalEstimate::compute(
            125_000.0,
            FinalCount::FromBiomass {
                harvested_biomass_kg: 2500.0,
                average_weight_g: 25.0,
            },
        );
        assert_eq!(estimate.final_count, Some(100_000.0));
        assert!((estimate.survival_rate_pct.unwrap() - 80.0).abs() < 1e-9);
    }

    #[test]
    fn zero_survivors_is_a_real_zero() {
        assert_eq!(survival_rate(0.0, 1000.0), Some(0.0));
    }
}
