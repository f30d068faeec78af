//! Number-of-trades criterion. Fewer trades is better.

use crate::criteria::AnalysisCriterion;
use crate::error::Result;
use crate::series::PriceSeries;
use crate::trade::Trade;

#[derive(Debug, Clone, Copy, Default)]
pub struct NumberOfTrades;

impl AnalysisCriterion for NumberOfTrades {
    fn calculate(&self, _series: &PriceSeries, trades: &[Trade]) -> Result<f64> {
        Ok(trades.len() as f64)
    }

    fn better_than(&self, a: f64, b: f64) -> bool {
        a < b
    }
}
