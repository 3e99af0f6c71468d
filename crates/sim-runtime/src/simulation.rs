//! Simulation run: the registry that owns the roster across periods.

use crate::noise::{NoiseSource, SeededNoise};
use crate::report::PeriodReport;
use crate::{simulate_period_with, EngineError};
use sim_core::{
    create_companies, validate_decisions, validate_roster_size, Company, Decisions, SimConfig,
};
use sim_econ::{rank, EconParams, RankingEntry};
use tracing::info;

/// A simulation run over a fixed roster.
///
/// Decisions carry over between periods until they are replaced.
pub struct Simulation<N = SeededNoise> {
    companies: Vec<Company>,
    period: u32,
    params: EconParams,
    noise: N,
}

impl Simulation<SeededNoise> {
    /// Start a run from configuration, seeding the noise from `rng_seed`.
    pub fn new(cfg: &SimConfig) -> Result<Self, EngineError> {
        Self::with_noise(cfg.companies, SeededNoise::new(cfg.rng_seed))
    }
}

impl<N: NoiseSource> Simulation<N> {
    /// Start a run of `n` companies with an explicit noise source.
    pub fn with_noise(n: usize, noise: N) -> Result<Self, EngineError> {
        validate_roster_size(n)?;
        info!(companies = n, "simulation initialized");
        Ok(Self {
            companies: create_companies(n),
            period: 1,
            params: EconParams::default(),
            noise,
        })
    }

    /// Replace the economic parameters used by later periods.
    pub fn with_params(mut self, params: EconParams) -> Self {
        self.params = params;
        self
    }

    /// The period that the next [`Simulation::step`] resolves, starting at 1.
    pub fn period(&self) -> u32 {
        self.period
    }

    pub fn params(&self) -> &EconParams {
        &self.params
    }

    pub fn companies(&self) -> &[Company] {
        &self.companies
    }

    /// Validate and bind decisions for the company at `index`.
    pub fn submit(&mut self, index: usize, decisions: Decisions) -> Result<(), EngineError> {
        validate_decisions(&decisions)?;
        let company = self
            .companies
            .get_mut(index)
            .ok_or(EngineError::UnknownCompany(index))?;
        company.decisions = Some(decisions);
        Ok(())
    }

    /// Resolve the current period, rank, and advance the counter.
    pub fn step(&mut self) -> Result<PeriodReport, EngineError> {
        simulate_period_with(&mut self.companies, &self.params, &mut self.noise)?;
        let ranking = self.ranking();
        if let Some(leader) = ranking.first() {
            info!(
                period = self.period,
                leader = %leader.name,
                score = leader.score,
                "period ranked"
            );
        }
        let report = PeriodReport::build(self.period, &self.companies, &ranking);
        self.period += 1;
        Ok(report)
    }

    /// Current ranking from the last resolved period.
    pub fn ranking(&self) -> Vec<RankingEntry> {
        rank(&self.companies, &self.params.ranking)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConstantNoise;
    use sim_core::ValidationError;

    #[test]
    fn rejects_roster_out_of_range() {
        let cfg = SimConfig {
            companies: 21,
            rng_seed: 1,
        };
        assert!(matches!(
            Simulation::new(&cfg),
            Err(EngineError::Validation(ValidationError::RosterSize(21)))
        ));
    }

    #[test]
    fn step_requires_decisions() {
        let mut sim = Simulation::new(&SimConfig::default()).unwrap();
        assert!(matches!(sim.step(), Err(EngineError::MissingDecisions(_))));
        assert_eq!(sim.period(), 1);
    }

    #[test]
    fn submit_checks_index_and_ranges() {
        let mut sim = Simulation::with_noise(2, ConstantNoise(0.0)).unwrap();
        assert_eq!(
            sim.submit(5, Decisions::default()),
            Err(EngineError::UnknownCompany(5))
        );
        assert!(matches!(
            sim.submit(0, Decisions::new(50.0, 0.0, 7.0, 100.0, 4)),
            Err(EngineError::Validation(_))
        ));
        assert!(sim.companies()[0].decisions.is_none());
    }

    #[test]
    fn periods_advance_and_decisions_carry_over() {
        let mut sim = Simulation::with_noise(2, ConstantNoise(0.0)).unwrap();
        sim.submit(0, Decisions::default()).unwrap();
        let rival = Decisions::new(45.0, 12_000.0, 8.0, 3_500.0, 2);
        sim.submit(1, rival).unwrap();
        let first = sim.step().unwrap();
        let second = sim.step().unwrap();
        assert_eq!(first.period, 1);
        assert_eq!(second.period, 2);
        assert_eq!(sim.period(), 3);
        assert_eq!(second.results.len(), 2);
        // motivation compounds across periods: 0.6 -> 0.62 -> 0.64
        let m = sim.companies()[0].state.motivation;
        assert!((m - 0.64).abs() < 1e-9);
    }

    #[test]
    fn same_seed_same_run() {
        let run = || {
            let mut sim = Simulation::new(&SimConfig {
                companies: 4,
                rng_seed: 9,
            })
            .unwrap();
            for i in 0..4 {
                sim.submit(i, Decisions::default()).unwrap();
            }
            (sim.step().unwrap(), sim.step().unwrap())
        };
        assert_eq!(run(), run());
    }
}
