//! Market resolution: how attractive each offer is and how demand splits.

use serde::{Deserialize, Serialize};
use sim_core::Decisions;
use tracing::warn;

/// Total addressable demand in units per period.
pub const TOTAL_DEMAND: f64 = 100_000.0;

/// Weights of the attractiveness score.
///
/// They are relative multipliers over inputs of different scales and are not
/// required to sum to one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketParams {
    /// Units shared among all companies each period.
    pub total_demand: f64,
    /// Weight of the inverse price.
    pub w_price: f64,
    /// Weight of the quality level.
    pub w_quality: f64,
    /// Weight of the marketing budget.
    pub w_marketing: f64,
    /// Weight of the reputation.
    pub w_reputation: f64,
    /// Floor applied to price before inverting it.
    pub min_price: f64,
}

impl Default for MarketParams {
    fn default() -> Self {
        Self {
            total_demand: TOTAL_DEMAND,
            w_price: 0.35,
            w_quality: 0.30,
            w_marketing: 0.20,
            w_reputation: 0.15,
            min_price: 0.01,
        }
    }
}

/// Attractiveness of a company's offer.
///
/// score = w_price / max(price, min_price) + w_quality * quality
///       + w_marketing * budget + w_reputation * reputation
pub fn attractiveness(decisions: &Decisions, reputation: f64, p: &MarketParams) -> f64 {
    let price = decisions.marketing.price.max(p.min_price);
    p.w_price * (1.0 / price)
        + p.w_quality * decisions.operations.quality_level
        + p.w_marketing * decisions.marketing.budget
        + p.w_reputation * reputation
}

/// Split `total_demand` proportionally to `scores`.
///
/// A zero score sum falls back to a divisor of 1.0.
pub fn allocate_demand(scores: &[f64], total_demand: f64) -> Vec<f64> {
    let sum: f64 = scores.iter().sum();
    let divisor = if sum == 0.0 {
        warn!(companies = scores.len(), "attractiveness sums to zero");
        1.0
    } else {
        sum
    };
    scores
        .iter()
        .map(|s| total_demand * (s / divisor))
        .collect()
}
