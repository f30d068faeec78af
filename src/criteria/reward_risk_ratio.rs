//! Reward/risk ratio criterion: total compounded return over maximum
//! drawdown.

use crate::cash_flow::CashFlow;
use crate::criteria::{AnalysisCriterion, MaximumDrawDown};
use crate::error::Result;
use crate::series::PriceSeries;
use crate::trade::Trade;

/// Final cash-flow value divided by the same trade set's maximum
/// drawdown. Higher is better; a zero drawdown (pure gains, or no trades
/// at all) rates `+infinity` so such runs stay comparable.
#[derive(Debug, Clone, Copy, Default)]
pub struct RewardRiskRatio;

impl AnalysisCriterion for RewardRiskRatio {
    fn calculate(&self, series: &PriceSeries, trades: &[Trade]) -> Result<f64> {
        let drawdown = MaximumDrawDown.calculate(series, trades)?;
        if drawdown == 0.0 {
            return Ok(f64::INFINITY);
        }
        let reward = CashFlow::from_trades(series, trades)?.final_value();
        Ok(reward / drawdown)
    }

    fn better_than(&self, a: f64, b: f64) -> bool {
        a > b
    }
}
