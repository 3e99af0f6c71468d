//! Multi-criteria ranking across the roster.

use serde::{Deserialize, Serialize};
use sim_core::Company;

/// Weights of the composite score; they sum to 1.0.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingWeights {
    /// Net result (profitability).
    pub net_result: f64,
    pub solvency: f64,
    /// Technology level (innovation).
    pub technology: f64,
    pub motivation: f64,
    pub reputation: f64,
}

impl Default for RankingWeights {
    fn default() -> Self {
        Self {
            net_result: 0.30,
            solvency: 0.25,
            technology: 0.20,
            motivation: 0.15,
            reputation: 0.10,
        }
    }
}

/// One row of the ranking.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RankingEntry {
    pub name: String,
    pub score: f64,
    pub net_result: f64,
}

/// Min-max scale `values` into [0,1].
///
/// A constant vector carries no discriminating information and maps to 0.5.
pub fn normalize(values: &[f64]) -> Vec<f64> {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if max == min {
        return vec![0.5; values.len()];
    }
    let span = max - min;
    values.iter().map(|v| (v - min) / span).collect()
}

fn normalized_column(companies: &[Company], f: impl Fn(&Company) -> f64) -> Vec<f64> {
    let raw: Vec<f64> = companies.iter().map(f).collect();
    normalize(&raw)
}

/// Composite score of every company, in roster order.
pub fn composite_scores(companies: &[Company], w: &RankingWeights) -> Vec<f64> {
    let rent = normalized_column(companies, |c| c.outcome.net_result);
    let solv = normalized_column(companies, |c| c.outcome.kpis.solvency);
    let mot = normalized_column(companies, |c| c.outcome.kpis.motivation);
    let rep = normalized_column(companies, |c| c.state.reputation);
    let innov = normalized_column(companies, |c| c.state.technology_level);

    (0..companies.len())
        .map(|i| {
            w.net_result * rent[i]
                + w.solvency * solv[i]
                + w.technology * innov[i]
                + w.motivation * mot[i]
                + w.reputation * rep[i]
        })
        .collect()
}

/// Companies ordered by composite score, best first.
///
/// The sort is stable, so ties keep roster order.
pub fn rank(companies: &[Company], w: &RankingWeights) -> Vec<RankingEntry> {
    let mut entries: Vec<RankingEntry> = companies
        .iter()
        .zip(composite_scores(companies, w))
        .map(|(c, score)| RankingEntry {
            name: c.state.name.clone(),
            score,
            net_result: c.outcome.net_result,
        })
        .collect();
    entries.sort_by(|a, b| b.score.total_cmp(&a.score));
    entries
}
