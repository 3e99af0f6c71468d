#![deny(warnings)]

//! Core domain models and invariants for the business simulation.
//!
//! This crate defines the serializable company records shared by the
//! economic formulas and the runtime, plus validation helpers for callers
//! that want to enforce the decision ranges up front.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Smallest roster a simulation run accepts.
pub const MIN_COMPANIES: usize = 1;
/// Largest roster a simulation run accepts.
pub const MAX_COMPANIES: usize = 20;
/// Quality scale used by the decision form.
pub const QUALITY_RANGE: (f64, f64) = (1.0, 10.0);
/// Highest number of motivation actions per period.
pub const MAX_MOTIVATION_ACTIONS: u8 = 3;

/// Balance sheet and soft factors of a company, carried across periods.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CompanyState {
    /// Unique company name, e.g. "Empresa 1".
    pub name: String,
    /// Cash position; may go negative under distress.
    pub cash: f64,
    /// Equity (patrimonio neto).
    pub equity: f64,
    /// Long-term debt.
    pub long_debt: f64,
    /// Short-term debt.
    pub short_debt: f64,
    /// Fixed assets, amortized every period.
    pub fixed_assets: f64,
    /// Current assets.
    pub current_assets: f64,
    /// Market reputation in [0,1].
    pub reputation: f64,
    /// Workforce motivation in [0,1].
    pub motivation: f64,
    /// Technology level in [0,1].
    pub technology_level: f64,
}

impl CompanyState {
    /// Fresh state with the starting balance sheet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cash: 100_000.0,
            equity: 150_000.0,
            long_debt: 50_000.0,
            short_debt: 20_000.0,
            fixed_assets: 100_000.0,
            current_assets: 50_000.0,
            reputation: 0.5,
            motivation: 0.6,
            technology_level: 0.3,
        }
    }

    pub fn total_debt(&self) -> f64 {
        self.long_debt + self.short_debt
    }

    pub fn total_assets(&self) -> f64 {
        self.fixed_assets + self.current_assets
    }
}

/// Marketing decisions for one period.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarketingDecision {
    /// Unit price (> 0).
    pub price: f64,
    /// Marketing budget (>= 0), spent in full.
    pub budget: f64,
}

/// Operations decisions for one period.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OperationsDecision {
    /// Quality level, typically 1..=10.
    pub quality_level: f64,
    /// Planned production in units (>= 0).
    pub planned_production: f64,
}

/// Finance and HR decisions for one period.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FinanceHrDecision {
    /// Motivation actions, 0..=3.
    pub motivation_actions: u8,
}

/// The three decision records a company submits each period.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Decisions {
    pub marketing: MarketingDecision,
    pub operations: OperationsDecision,
    pub finance_hr: FinanceHrDecision,
}

impl Decisions {
    pub fn new(
        price: f64,
        budget: f64,
        quality: f64,
        production: f64,
        motivation_actions: u8,
    ) -> Self {
        Self {
            marketing: MarketingDecision { price, budget },
            operations: OperationsDecision {
                quality_level: quality,
                planned_production: production,
            },
            finance_hr: FinanceHrDecision { motivation_actions },
        }
    }
}

impl Default for Decisions {
    /// The values the decision form starts with.
    fn default() -> Self {
        Self::new(50.0, 10_000.0, 7.0, 3_000.0, 1)
    }
}

/// Period-end ratios. Keys are fixed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Kpis {
    pub liquidity: f64,
    pub solvency: f64,
    pub margin_net: f64,
    pub motivation: f64,
}

/// Transient outputs of the last simulated period.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PeriodOutcome {
    pub demand_share: f64,
    pub effective_production: f64,
    pub sales_units: f64,
    pub revenue: f64,
    pub operating_result: f64,
    pub net_result: f64,
    pub kpis: Kpis,
}

/// A company participating in the simulation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Company {
    /// Persistent state.
    pub state: CompanyState,
    /// Decisions for the current period, `None` until first set.
    pub decisions: Option<Decisions>,
    /// Outputs of the last simulated period.
    pub outcome: PeriodOutcome,
}

impl Company {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            state: CompanyState::new(name),
            decisions: None,
            outcome: PeriodOutcome::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.state.name
    }
}

/// Build a roster of `n` companies named "Empresa 1".."Empresa n".
///
/// The roster size is a caller contract; see [`validate_roster_size`].
pub fn create_companies(n: usize) -> Vec<Company> {
    (1..=n).map(|i| Company::new(format!("Empresa {i}"))).collect()
}

/// Clamp a value into [0,1].
pub fn clamp01(v: f64) -> f64 {
    v.clamp(0.0, 1.0)
}

/// Run-level configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Number of companies in the roster.
    pub companies: usize,
    /// Seed for the motivation noise RNG.
    pub rng_seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            companies: 3,
            rng_seed: 42,
        }
    }
}

/// Validation errors for caller-side contracts.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// Roster size outside [1, 20].
    #[error("roster size {0} is out of supported range [1, 20]")]
    RosterSize(usize),
    /// A decision field is out of its allowed range.
    #[error("invalid decision {field}: {reason}")]
    InvalidDecision {
        field: &'static str,
        reason: &'static str,
    },
    /// Numeric field must be finite.
    #[error("non-finite numeric value encountered")]
    NonFinite,
}

/// Validate the number of companies requested for a run.
pub fn validate_roster_size(n: usize) -> Result<(), ValidationError> {
    if !(MIN_COMPANIES..=MAX_COMPANIES).contains(&n) {
        return Err(ValidationError::RosterSize(n));
    }
    Ok(())
}

/// Validate one period's decisions against the form ranges.
pub fn validate_decisions(d: &Decisions) -> Result<(), ValidationError> {
    let m = &d.marketing;
    let o = &d.operations;
    if !(m.price.is_finite()
        && m.budget.is_finite()
        && o.quality_level.is_finite()
        && o.planned_production.is_finite())
    {
        return Err(ValidationError::NonFinite);
    }
    if m.price <= 0.0 {
        return Err(ValidationError::InvalidDecision {
            field: "price",
            reason: "must be > 0",
        });
    }
    if m.budget < 0.0 {
        return Err(ValidationError::InvalidDecision {
            field: "budget",
            reason: "must be >= 0",
        });
    }
    let (q_min, q_max) = QUALITY_RANGE;
    if !(q_min..=q_max).contains(&o.quality_level) {
        return Err(ValidationError::InvalidDecision {
            field: "quality",
            reason: "must be within [1, 10]",
        });
    }
    if o.planned_production < 0.0 {
        return Err(ValidationError::InvalidDecision {
            field: "production",
            reason: "must be >= 0",
        });
    }
    if d.finance_hr.motivation_actions > MAX_MOTIVATION_ACTIONS {
        return Err(ValidationError::InvalidDecision {
            field: "motivation_actions",
            reason: "must be within [0, 3]",
        });
    }
    Ok(())
}
