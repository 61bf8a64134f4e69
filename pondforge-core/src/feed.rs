//! Feed requirement and feed cost.

use crate::constants::{FCR_OPTIONS, FEED_BAG_KG, FEED_COST_SHARE_ALERT_PCT};
use serde::Serialize;
use tracing::{debug, warn};

/// Total feed (kg) needed to grow `biomass_kg` at the given FCR.
pub fn total_feed_required(biomass_kg: f64, fcr: f64) -> f64 {
    biomass_kg * fcr
}

/// Daily ration over the feeding period. Undefined for a non-positive period.
pub fn daily_feed(total_feed_kg: f64, feeding_period_days: f64) -> Option<f64> {
    if feeding_period_days <= 0.0 {
        return None;
    }
    Some(total_feed_kg / feeding_period_days)
}

/// Whether `fcr` is one of the selectable ratios 1.2, 1.3, ... 1.8.
pub fn is_standard_fcr(fcr: f64) -> bool {
    FCR_OPTIONS.iter().any(|option| (option - fcr).abs() < 1e-9)
}

pub fn feed_cost(feed_amount_kg: f64, unit_price: f64) -> f64 {
    feed_amount_kg * unit_price
}

/// Feed cost as a percentage of total production cost.
pub fn feed_cost_share_pct(feed_cost: f64, total_cost: f64) -> Option<f64> {
    if total_cost <= 0.0 {
        return None;
    }
    Some(feed_cost / total_cost * 100.0)
}

pub fn is_feed_dominant(share_pct: Option<f64>) -> bool {
    share_pct.map_or(false, |share| share > FEED_COST_SHARE_ALERT_PCT)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeedPlan {
    pub total_biomass_kg: f64,
    pub fcr: f64,
    pub feeding_period_days: f64,
    pub total_feed_kg: f64,
    pub daily_feed_kg: Option<f64>,
}

impl FeedPlan {
    pub fn compute(total_biomass_kg: f64, fcr: f64, feeding_period_days: f64) -> Self {
        if !is_standard_fcr(fcr) {
            debug!(fcr, "FCR outside the standard selection");
        }
        let total_feed_kg = total_feed_required(total_biomass_kg, fcr);
        let daily_feed_kg = daily_feed(total_feed_kg, feeding_period_days);
        debug!(total_feed_kg, ?daily_feed_kg, "feed plan");
        Self {
            total_biomass_kg,
            fcr,
            feeding_period_days,
            total_feed_kg,
            daily_feed_kg,
        }
    }
}

/// Purchase view of a feed plan: cost and number of 25 kg bags.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeedCostAnalysis {
    pub total_feed_kg: f64,
    pub price_per_kg: f64,
    pub total_cost: f64,
    pub bags_needed: f64,
    pub cost_per_bag: f64,
}

impl FeedCostAnalysis {
    pub fn compute(total_feed_kg: f64, price_per_kg: f64) -> Self {
        let total_cost = feed_cost(total_feed_kg, price_per_kg);
        if total_cost > 0.0 {
            warn!("feed is usually the largest running cost; monitor FCR closely");
        }
        Self {
            total_feed_kg,
            price_per_kg,
            total_cost,
            bags_needed: (total_feed_kg / FEED_BAG_KG).ceil(),
            cost_per_bag: price_per_kg * FEED_BAG_KG,
        }
    }
}
