#![deny(warnings)]

//! Period runtime for the business simulation.
//!
//! Exposes the engine surface used by front ends: build a roster, bind
//! decisions, resolve a period and rank the companies. A period runs in two
//! phases over the whole roster: demand is allocated for every company first,
//! then each company's financials are resolved against its share.

use sim_core::{validate_decisions, Decisions, ValidationError};
use sim_econ::{
    allocate_demand, attractiveness, rank, resolve_company, EconParams, RankingWeights,
};
use thiserror::Error;
use tracing::{debug, info};

pub mod noise;
pub mod report;
pub mod simulation;

pub use noise::{ConstantNoise, NoiseSource, SeededNoise};
pub use report::{InternalRow, PeriodReport, RankingRow, ResultRow};
pub use sim_core::{create_companies, Company, SimConfig};
pub use sim_econ::RankingEntry;
pub use simulation::Simulation;

/// Errors surfaced by the runtime.
#[derive(Debug, Error, PartialEq)]
pub enum EngineError {
    /// A company entered a period without decisions.
    #[error("company {0} has no decisions for this period")]
    MissingDecisions(String),
    /// Roster index out of bounds.
    #[error("no company at index {0}")]
    UnknownCompany(usize),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Overwrite a company's decisions for the coming period. No validation.
pub fn set_decisions(
    company: &mut Company,
    price: f64,
    budget: f64,
    quality: f64,
    production: f64,
    motivation_actions: u8,
) {
    company.decisions = Some(Decisions::new(
        price,
        budget,
        quality,
        production,
        motivation_actions,
    ));
}

/// Like [`set_decisions`] but rejects out-of-range values, leaving the
/// previous decisions in place.
pub fn try_set_decisions(
    company: &mut Company,
    price: f64,
    budget: f64,
    quality: f64,
    production: f64,
    motivation_actions: u8,
) -> Result<(), EngineError> {
    let d = Decisions::new(price, budget, quality, production, motivation_actions);
    validate_decisions(&d)?;
    company.decisions = Some(d);
    Ok(())
}

/// Resolve one period for the roster with the default parameters.
pub fn simulate_period<N: NoiseSource>(
    companies: &mut [Company],
    noise: &mut N,
) -> Result<(), EngineError> {
    simulate_period_with(companies, &EconParams::default(), noise)
}

/// Resolve one period for the roster.
///
/// Fails before touching any company if one of them has no decisions.
pub fn simulate_period_with<N: NoiseSource>(
    companies: &mut [Company],
    params: &EconParams,
    noise: &mut N,
) -> Result<(), EngineError> {
    let scores = companies
        .iter()
        .map(|c| {
            c.decisions
                .as_ref()
                .map(|d| attractiveness(d, c.state.reputation, &params.market))
                .ok_or_else(|| EngineError::MissingDecisions(c.state.name.clone()))
        })
        .collect::<Result<Vec<_>, _>>()?;
    let shares = allocate_demand(&scores, params.market.total_demand);

    let (low, high) = params.finance.noise_range();
    for (company, share) in companies.iter_mut().zip(shares) {
        let Company {
            state,
            decisions,
            outcome,
        } = company;
        let Some(decisions) = decisions.as_ref() else {
            return Err(EngineError::MissingDecisions(state.name.clone()));
        };
        let draw = noise.next_uniform(low, high);
        *outcome = resolve_company(state, decisions, share, draw, &params.finance);
        debug!(
            company = %state.name,
            demand_share = share,
            sales = outcome.sales_units,
            net_result = outcome.net_result,
            motivation = state.motivation,
            "resolved company"
        );
    }

    let revenue: f64 = companies.iter().map(|c| c.outcome.revenue).sum();
    let net: f64 = companies.iter().map(|c| c.outcome.net_result).sum();
    info!(
        companies = companies.len(),
        revenue,
        net_result = net,
        "period simulated"
    );
    Ok(())
}

/// Rank the roster with the default weights, best first.
pub fn compute_ranking(companies: &[Company]) -> Vec<RankingEntry> {
    rank(companies, &RankingWeights::default())
}
