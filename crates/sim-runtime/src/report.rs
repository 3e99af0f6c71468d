//! Period report tables: results, ranking and the internal statement.
//!
//! Values are rounded for presentation; the engine keeps full precision.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;
use sim_core::Company;
use sim_econ::finance::productivity;
use sim_econ::RankingEntry;

/// Round to `dp` decimals. Non-finite values become zero.
pub fn round(v: f64, dp: u32) -> Decimal {
    Decimal::from_f64(v)
        .map(|d| d.round_dp(dp))
        .unwrap_or_default()
}

/// Public results of one company.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ResultRow {
    pub name: String,
    pub sales: Decimal,
    pub revenue: Decimal,
    pub net_result: Decimal,
    pub motivation: Decimal,
    pub liquidity: Decimal,
    pub solvency: Decimal,
    pub margin_net: Decimal,
}

impl From<&Company> for ResultRow {
    fn from(c: &Company) -> Self {
        let o = &c.outcome;
        Self {
            name: c.state.name.clone(),
            sales: round(o.sales_units, 0),
            revenue: round(o.revenue, 2),
            net_result: round(o.net_result, 2),
            motivation: round(c.state.motivation, 2),
            liquidity: round(o.kpis.liquidity, 2),
            solvency: round(o.kpis.solvency, 2),
            margin_net: round(o.kpis.margin_net, 3),
        }
    }
}

/// One ranking position, 1-based.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RankingRow {
    pub position: usize,
    pub name: String,
    pub score: Decimal,
    pub net_result: Decimal,
}

/// Internal statement of one company, balance sheet included.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InternalRow {
    pub name: String,
    pub cash: Decimal,
    pub equity: Decimal,
    pub long_debt: Decimal,
    pub short_debt: Decimal,
    pub sales: Decimal,
    pub revenue: Decimal,
    pub operating_result: Decimal,
    pub net_result: Decimal,
    pub motivation: Decimal,
    pub productivity: Decimal,
    pub liquidity: Decimal,
    pub solvency: Decimal,
    pub margin_net: Decimal,
}

impl From<&Company> for InternalRow {
    fn from(c: &Company) -> Self {
        let s = &c.state;
        let o = &c.outcome;
        Self {
            name: s.name.clone(),
            cash: round(s.cash, 2),
            equity: round(s.equity, 2),
            long_debt: round(s.long_debt, 2),
            short_debt: round(s.short_debt, 2),
            sales: round(o.sales_units, 0),
            revenue: round(o.revenue, 2),
            operating_result: round(o.operating_result, 2),
            net_result: round(o.net_result, 2),
            motivation: round(s.motivation, 2),
            productivity: round(productivity(s.motivation), 2),
            liquidity: round(o.kpis.liquidity, 2),
            solvency: round(o.kpis.solvency, 2),
            margin_net: round(o.kpis.margin_net, 3),
        }
    }
}

/// Everything a front end shows after a period.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PeriodReport {
    pub period: u32,
    pub results: Vec<ResultRow>,
    pub ranking: Vec<RankingRow>,
    pub internal: Vec<InternalRow>,
}

impl PeriodReport {
    pub fn build(period: u32, companies: &[Company], ranking: &[RankingEntry]) -> Self {
        Self {
            period,
            results: companies.iter().map(ResultRow::from).collect(),
            ranking: ranking
                .iter()
                .enumerate()
                .map(|(i, e)| RankingRow {
                    position: i + 1,
                    name: e.name.clone(),
                    score: round(e.score, 3),
                    net_result: round(e.net_result, 2),
                })
                .collect(),
            internal: companies.iter().map(InternalRow::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        compute_ranking, create_companies, set_decisions, simulate_period, ConstantNoise,
    };

    #[test]
    fn rounding_matches_table_precision() {
        assert_eq!(round(0.234156, 3), Decimal::new(234, 3));
        assert_eq!(round(4860.4, 0), Decimal::new(4860, 0));
        assert_eq!(round(f64::NAN, 2), Decimal::ZERO);
    }

    #[test]
    fn form_defaults_period_report() {
        let mut roster = create_companies(1);
        set_decisions(&mut roster[0], 50.0, 10_000.0, 7.0, 3_000.0, 1);
        simulate_period(&mut roster, &mut ConstantNoise(0.0)).unwrap();
        let ranking = compute_ranking(&roster);
        let report = PeriodReport::build(1, &roster, &ranking);

        assert_eq!(report.period, 1);
        let r = &report.results[0];
        assert_eq!(r.name, "Empresa 1");
        assert_eq!(r.sales, Decimal::new(4860, 0));
        assert_eq!(r.revenue, Decimal::new(243_000, 0));
        assert_eq!(r.net_result, Decimal::new(56_900, 0));
        assert_eq!(r.motivation, Decimal::new(62, 2));
        assert_eq!(r.liquidity, Decimal::new(71, 2));
        assert_eq!(r.margin_net, Decimal::new(234, 3));

        assert_eq!(report.ranking.len(), 1);
        assert_eq!(report.ranking[0].position, 1);
        assert_eq!(report.ranking[0].score, Decimal::new(500, 3));

        let i = &report.internal[0];
        assert_eq!(i.cash, Decimal::new(156_900, 0));
        assert_eq!(i.equity, Decimal::new(206_900, 0));
        assert_eq!(i.operating_result, Decimal::new(61_800, 0));
        assert_eq!(i.productivity, Decimal::new(162, 2));
        assert_eq!(i.solvency, Decimal::new(138, 2));
    }

    #[test]
    fn report_serializes_to_json() {
        let roster = create_companies(2);
        let report = PeriodReport::build(3, &roster, &compute_ranking(&roster));
        let v = serde_json::to_value(&report).unwrap();
        assert_eq!(v["period"], 3);
        assert_eq!(v["ranking"][1]["position"], 2);
        assert_eq!(v["internal"].as_array().map(Vec::len), Some(2));
    }
}
