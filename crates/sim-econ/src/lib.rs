#![deny(warnings)]

//! Economic models for the business simulation.
//!
//! This crate provides the pure formulas of a period:
//! - Market resolution: attractiveness scores and proportional demand allocation
//! - Financial resolution: motivation, production, sales, costs and results
//! - Ranking: min-max normalization and the weighted composite score
//!
//! Nothing here draws random numbers; the motivation noise is passed in.

use serde::{Deserialize, Serialize};

pub mod finance;
pub mod market;
pub mod ranking;

pub use finance::{resolve_company, update_motivation, CostBreakdown, FinanceParams};
pub use market::{allocate_demand, attractiveness, MarketParams};
pub use ranking::{composite_scores, normalize, rank, RankingEntry, RankingWeights};

/// All tunable parameters of the economic model.
///
/// `Default` yields the baseline constants.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EconParams {
    pub market: MarketParams,
    pub finance: FinanceParams,
    pub ranking: RankingWeights,
}
