#![deny(warnings)]

//! Headless CLI: run a few periods from a scenario file and print the tables.

use anyhow::{Context, Result};
use serde::Deserialize;
use sim_core::{Decisions, SimConfig};
use sim_econ::EconParams;
use sim_runtime::{PeriodReport, Simulation};
use std::path::Path;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default)]
struct Args {
    scenario: Option<String>,
    companies: Option<usize>,
    periods: Option<u32>,
    seed: Option<u64>,
    json: bool,
}

fn parse_args() -> Args {
    let mut args = Args::default();
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--scenario" => args.scenario = it.next(),
            "--companies" => args.companies = it.next().and_then(|s| s.parse().ok()),
            "--periods" => args.periods = it.next().and_then(|s| s.parse().ok()),
            "--seed" => args.seed = it.next().and_then(|s| s.parse().ok()),
            "--json" => args.json = true,
            _ => {}
        }
    }
    args
}

/// One company's decisions as written in a scenario file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct DecisionInput {
    price: f64,
    budget: f64,
    quality: f64,
    production: f64,
    motivation_actions: u8,
}

impl Default for DecisionInput {
    fn default() -> Self {
        let d = Decisions::default();
        Self {
            price: d.marketing.price,
            budget: d.marketing.budget,
            quality: d.operations.quality_level,
            production: d.operations.planned_production,
            motivation_actions: d.finance_hr.motivation_actions,
        }
    }
}

impl From<&DecisionInput> for Decisions {
    fn from(d: &DecisionInput) -> Self {
        Decisions::new(
            d.price,
            d.budget,
            d.quality,
            d.production,
            d.motivation_actions,
        )
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct Scenario {
    #[serde(flatten)]
    config: SimConfig,
    periods: u32,
    params: EconParams,
    /// Decisions by roster position; companies beyond the list use form defaults.
    decisions: Vec<DecisionInput>,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            config: SimConfig::default(),
            periods: 1,
            params: EconParams::default(),
            decisions: Vec::new(),
        }
    }
}

fn load_scenario(path: &Path) -> Result<Scenario> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading scenario {}", path.display()))?;
    serde_yaml::from_str(&text).with_context(|| format!("parsing scenario {}", path.display()))
}

fn print_report(report: &PeriodReport) {
    println!("Period {} | results", report.period);
    for r in &report.results {
        println!(
            "  {} | sales: {} | revenue: {} | net: {} | motivation: {} | liquidity: {} | solvency: {} | margin: {}",
            r.name, r.sales, r.revenue, r.net_result, r.motivation, r.liquidity, r.solvency, r.margin_net
        );
    }
    println!("Period {} | ranking", report.period);
    for r in &report.ranking {
        println!(
            "  #{} {} | score: {} | net: {}",
            r.position, r.name, r.score, r.net_result
        );
    }
}

fn main() -> Result<()> {
    // Logging setup
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args();
    info!(?args, "starting CLI");

    let mut scenario = match &args.scenario {
        Some(path) => load_scenario(Path::new(path))?,
        None => Scenario::default(),
    };
    if let Some(n) = args.companies {
        scenario.config.companies = n;
    }
    if let Some(seed) = args.seed {
        scenario.config.rng_seed = seed;
    }
    if let Some(p) = args.periods {
        scenario.periods = p;
    }

    let mut sim = Simulation::new(&scenario.config)?.with_params(scenario.params.clone());
    for i in 0..scenario.config.companies {
        let input = scenario.decisions.get(i).cloned().unwrap_or_default();
        sim.submit(i, Decisions::from(&input))
            .with_context(|| format!("decisions for company {}", i + 1))?;
    }

    let mut reports = Vec::with_capacity(scenario.periods as usize);
    for _ in 0..scenario.periods {
        let report = sim.step()?;
        if !args.json {
            print_report(&report);
        }
        reports.push(report);
    }
    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_yaml_with_overrides() {
        let yaml = r#"
companies: 2
rng_seed: 7
periods: 3
params:
  market:
    total_demand: 50000.0
decisions:
  - price: 40.0
    production: 2500.0
"#;
        let s: Scenario = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(s.config.companies, 2);
        assert_eq!(s.config.rng_seed, 7);
        assert_eq!(s.periods, 3);
        assert_eq!(s.params.market.total_demand, 50_000.0);
        let d = Decisions::from(&s.decisions[0]);
        assert_eq!(d, Decisions::new(40.0, 10_000.0, 7.0, 2_500.0, 1));
    }

    #[test]
    fn empty_scenario_uses_defaults() {
        let s: Scenario = serde_yaml::from_str("{}").unwrap();
        assert_eq!(s.config, SimConfig::default());
        assert_eq!(s.periods, 1);
        assert!(s.decisions.is_empty());
    }
}
