//! Total profit criterion: the compounded return across all trades.

use crate::criteria::AnalysisCriterion;
use crate::error::Result;
use crate::series::PriceSeries;
use crate::trade::Trade;

/// Product of per-trade return ratios. Higher is better; no trades rate
/// the neutral 1.0.
#[derive(Debug, Clone, Copy, Default)]
pub struct TotalProfit;

impl AnalysisCriterion for TotalProfit {
    fn calculate(&self, series: &PriceSeries, trades: &[Trade]) -> Result<f64> {
        let mut value = 1.0;
        for trade in trades {
            value *= trade.profit_ratio(series)?;
        }
        Ok(value)
    }

    fn better_than(&self, a: f64, b: f64) -> bool {
        a > b
    }
}
