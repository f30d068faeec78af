//! Profitability-rate criterion: the fraction of trades that gained.

use crate::criteria::AnalysisCriterion;
use crate::error::Result;
use crate::series::PriceSeries;
use crate::trade::Trade;

/// Fraction of trades whose return ratio exceeds 1.0. Higher is better;
/// an empty trade list rates 0.0 rather than failing.
#[derive(Debug, Clone, Copy, Default)]
pub struct AverageProfitableTrades;

impl AnalysisCriterion for AverageProfitableTrades {
    fn calculate(&self, series: &PriceSeries, trades: &[Trade]) -> Result<f64> {
        if trades.is_empty() {
            return Ok(0.0);
        }
        let mut profitable = 0usize;
        for trade in trades {
            if trade.profit_ratio(series)? > 1.0 {
                profitable += 1;
            }
        }
        Ok(profitable as f64 / trades.len() as f64)
    }

    fn better_than(&self, a: f64, b: f64) -> bool {
        a > b
    }
}
