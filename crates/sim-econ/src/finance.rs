//! Financial resolution of one company for one period.

use serde::{Deserialize, Serialize};
use sim_core::{clamp01, CompanyState, Decisions, Kpis, PeriodOutcome};

/// Constants of the production, cost and financing model.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinanceParams {
    /// Motivation lost every period.
    pub fatigue: f64,
    /// Width of the uniform motivation noise, centred on zero.
    pub motivation_variance: f64,
    /// Motivation gained per motivation action.
    pub action_impact: f64,
    /// Base variable cost per produced unit.
    pub cost_var_base: f64,
    /// Fixed quality surcharge per quality level.
    pub quality_cost_per_level: f64,
    /// Flat personnel cost per period.
    pub personnel_cost: f64,
    /// Share of fixed assets amortized per period.
    pub amortization_rate: f64,
    /// Interest rate on long-term debt.
    pub long_debt_rate: f64,
    /// Interest rate on short-term debt.
    pub short_debt_rate: f64,
}

impl Default for FinanceParams {
    fn default() -> Self {
        Self {
            fatigue: 0.03,
            motivation_variance: 0.10,
            action_impact: 0.05,
            cost_var_base: 20.0,
            quality_cost_per_level: 1_000.0,
            personnel_cost: 50_000.0,
            amortization_rate: 0.10,
            long_debt_rate: 0.05,
            short_debt_rate: 0.12,
        }
    }
}

impl FinanceParams {
    /// Bounds of the motivation noise: ±half the variance.
    pub fn noise_range(&self) -> (f64, f64) {
        let half = self.motivation_variance / 2.0;
        (-half, half)
    }
}

/// Period costs, before interest.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub production: f64,
    pub marketing: f64,
    pub personnel: f64,
    pub quality: f64,
    pub amortization: f64,
}

impl CostBreakdown {
    /// Sum of all cost lines.
    ///
    /// The quality surcharge is already amortized into `production` and is
    /// charged again here, so the operating result counts it twice.
    pub fn total(&self) -> f64 {
        self.production + self.marketing + self.personnel + self.quality + self.amortization
    }
}

/// New motivation after HR actions, fatigue and noise, clamped to [0,1].
pub fn update_motivation(current: f64, actions: u8, noise: f64, p: &FinanceParams) -> f64 {
    clamp01(current + p.action_impact * f64::from(actions) - p.fatigue + noise)
}

/// Productivity multiplier, linear from 1.0 at motivation 0 to 2.0 at 1.
pub fn productivity(motivation: f64) -> f64 {
    1.0 + 0.01 * (motivation * 100.0)
}

/// Cost lines for a given effective production.
pub fn period_costs(
    state: &CompanyState,
    decisions: &Decisions,
    effective_production: f64,
    p: &FinanceParams,
) -> CostBreakdown {
    let quality = p.quality_cost_per_level * decisions.operations.quality_level;
    let unit_cost = p.cost_var_base + quality / effective_production.max(1.0);
    CostBreakdown {
        production: unit_cost * effective_production,
        marketing: decisions.marketing.budget,
        personnel: p.personnel_cost,
        quality,
        amortization: p.amortization_rate * state.fixed_assets,
    }
}

/// Interest on outstanding debt for one period.
pub fn interest(state: &CompanyState, p: &FinanceParams) -> f64 {
    state.long_debt * p.long_debt_rate + state.short_debt * p.short_debt_rate
}

/// Period-end ratios. Every denominator is floored at 1.
pub fn compute_kpis(state: &CompanyState, net_result: f64, revenue: f64) -> Kpis {
    Kpis {
        liquidity: state.current_assets / state.total_debt().max(1.0),
        solvency: state.equity / state.total_assets().max(1.0),
        margin_net: net_result / revenue.max(1.0),
        motivation: state.motivation,
    }
}

/// Resolve one company's period given its demand share and the noise draw.
///
/// Mutates motivation, cash and equity in `state` and returns the period
/// outputs.
pub fn resolve_company(
    state: &mut CompanyState,
    decisions: &Decisions,
    demand_share: f64,
    noise: f64,
    p: &FinanceParams,
) -> PeriodOutcome {
    state.motivation = update_motivation(
        state.motivation,
        decisions.finance_hr.motivation_actions,
        noise,
        p,
    );
    let effective_production =
        decisions.operations.planned_production * productivity(state.motivation);

    let sales_units = demand_share.min(effective_production);
    let revenue = sales_units * decisions.marketing.price;

    let costs = period_costs(state, decisions, effective_production, p);
    let operating_result = revenue - costs.total();
    let net_result = operating_result - interest(state, p);

    state.cash += net_result;
    state.equity += net_result;

    PeriodOutcome {
        demand_share,
        effective_production,
        sales_units,
        revenue,
        operating_result,
        net_result,
        kpis: compute_kpis(state, net_result, revenue),
    }
}
