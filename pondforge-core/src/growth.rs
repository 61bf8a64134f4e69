//! Pond sizing, stocking and growth projection.

use crate::error::PondforgeError;
use pondforge_schemas::genetics::{GeneticLine, PlStage};
use serde::Serialize;
use tracing::debug;

/// Surface area of a rectangular pond in m².
pub fn pond_area(length_m: f64, width_m: f64) -> f64 {
    length_m * width_m
}

/// Number of postlarvae needed to stock `pond_area_m2` at `pl_density` PL/m².
pub fn total_pl(pond_area_m2: f64, pl_density: f64) -> f64 {
    pond_area_m2 * pl_density
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PondGeometry {
    pub length_m: f64,
    pub width_m: f64,
    pub area_m2: f64,
}

impl PondGeometry {
    pub fn new(length_m: f64, width_m: f64) -> Self {
        Self {
            length_m,
            width_m,
            area_m2: pond_area(length_m, width_m),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StockingPlan {
    pub pond_area_m2: f64,
    pub pl_density: f64,
    pub total_pl: f64,
}

impl StockingPlan {
    pub fn new(pond_area_m2: f64, pl_density: f64) -> Self {
        Self {
            pond_area_m2,
            pl_density,
            total_pl: total_pl(pond_area_m2, pl_density),
        }
    }
}

/// Where the start weight and daily gain of a projection came from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "basis", rename_all = "snake_case")]
pub enum GrowthBasis {
    Linear,
    Lookup { stage: PlStage, line: GeneticLine },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GrowthPoint {
    pub day: f64,
    pub weight_g: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GrowthProjection {
    pub basis: GrowthBasis,
    pub initial_weight_g: f64,
    pub days: f64,
    pub adg_g_per_day: f64,
    pub final_weight_g: f64,
}

impl GrowthProjection {
    /// finalWeight = initialWeight + days × ADG.
    pub fn linear(initial_weight_g: f64, days: f64, adg_g_per_day: f64) -> Self {
        let projection = Self {
            basis: GrowthBasis::Linear,
            initial_weight_g,
            days,
            adg_g_per_day,
            final_weight_g: initial_weight_g + days * adg_g_per_day,
        };
        debug!(final_weight_g = projection.final_weight_g, "linear growth projection");
        projection
    }

    /// Starts from the stocking weight of a PL stage and grows at the average
    /// daily gain of a genetic line.
    pub fn from_lookup(stage: PlStage, line: GeneticLine, days: f64) -> Self {
        let initial_weight_g = stage.profile().weight_g;
        let adg_g_per_day = line.profile().avg_adg;
        Self {
            basis: GrowthBasis::Lookup { stage, line },
            initial_weight_g,
            days,
            adg_g_per_day,
            final_weight_g: initial_weight_g + days * adg_g_per_day,
        }
    }

    /// Table-keyed variant of [`GrowthProjection::from_lookup`]. Unknown labels
    /// fail with `UnknownKey` rather than defaulting to any entry.
    pub fn from_table_keys(
        stage_label: &str,
        line_name: &str,
        days: f64,
    ) -> Result<Self, PondforgeError> {
        let stage = PlStage::from_label(stage_label)
            .ok_or_else(|| PondforgeError::unknown_key("PL stage", stage_label))?;
        let line = GeneticLine::from_name(line_name)
            .ok_or_else(|| PondforgeError::unknown_key("genetic line", line_name))?;
        Ok(Self::from_lookup(stage, line, days))
    }

    pub fn weight_on_day(&self, day: f64) -> f64 {
        self.initial_weight_g + day * self.adg_g_per_day
    }

    /// Roughly ten evenly spaced samples of the growth line, always ending on
    /// the final day.
    pub fn curve(&self) -> Vec<GrowthPoint> {
        let step = (self.days / 10.0).floor().max(1.0);
        let mut points = Vec::new();
        let mut day = 0.0;
        while day <= self.days {
            points.push(GrowthPoint {
                day,
                weight_g: self.weight_on_day(day),
            });
            day += step;
        }
        if self.days > 0.0 && points.last().map_or(true, |p| p.day != self.days) {
            points.push(GrowthPoint {
                day: self.days,
                weight_g: self.final_weight_g,
            });
        }
        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pond_area_is_symmetric() {
        for (l, w) in [(0.0, 10.0), (100.0, 50.0), (12.5, 3.2)] {
            assert_eq!(pond_area(l, w), l * w);
            assert_eq!(pond_area(l, w), pond_area(w, l));
        }
        assert_eq!(PondGeometry::new(100.0, 50.0).area_m2, 5000.0);
    }

    #[test]
    fn stocking_multiplies_area_by_density() {
        let plan = StockingPlan::new(5000.0, 25.0);
        assert_eq!(plan.total_pl, 125_000.0);
    }

    #[test]
    fn linear_projection() {
        let projection = GrowthProjection::linear(2.0, 100.0, 0.2);
        assert!((projection.final_weight_g - 22.0).abs() < 1e-9);
        assert_eq!(projection.basis, GrowthBasis::Linear);
    }

    #[test]
    fn lookup_projection_adds_stage_weight_to_line_gain() {
        let projection = GrowthProjection::from_lookup(PlStage::Pl10, GeneticLine::FastGrowth, 100.0);
        assert!((projection.final_weight_g - (0.0045 + 26.0)).abs() < 1e-9);
    }

    #[test]
    fn lookup_with_unknown_keys_is_not_computable() {
        let err = GrowthProjection::from_table_keys("PL99", "Standard (Conventional Line)", 90.0)
            .unwrap_err();
        assert!(matches!(err, PondforgeError::UnknownKey { .. }));
        assert!(GrowthProjection::from_table_keys("PL5", "Imaginary", 90.0).is_err());
        assert!(GrowthProjection::from_table_keys("PL5", "Standard (Conventional Line)", 90.0).is_ok());
    }

    #[test]
    fn curve_ends_on_final_day() {
        let curve = GrowthProjection::linear(1.0, 95.0, 0.2).curve();
        assert_eq!(curve.first().unwrap().day, 0.0);
        assert_eq!(curve.last().unwrap().day, 95.0);
        // step = 9 -> 0, 9, ..., 90, then 95
        assert_eq!(curve.len(), 12);

        let curve = GrowthProjection::linear(1.0, 5.0, 0.2).curve();
        assert_eq!(curve.len(), 6);
        assert!(GrowthProjection::linear(1.0, 0.0, 0.2).curve().len() == 1);
    }
}
