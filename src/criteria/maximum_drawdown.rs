//! Maximum drawdown criterion: the deepest relative decline from a
//! running equity peak.

use crate::cash_flow::CashFlow;
use crate::criteria::AnalysisCriterion;
use crate::error::Result;
use crate::series::PriceSeries;
use crate::trade::Trade;

/// Maximum of `(peak - value) / peak` over the cash-flow curve, where
/// `peak` is the running maximum. Lower is better; no trades or an empty
/// series rate 0.0.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaximumDrawDown;

impl AnalysisCriterion for MaximumDrawDown {
    fn calculate(&self, series: &PriceSeries, trades: &[Trade]) -> Result<f64> {
        let Some((begin, end)) = series.bounds() else {
            return Ok(0.0);
        };
        if trades.is_empty() {
            return Ok(0.0);
        }
        let cash_flow = CashFlow::from_trades(series, trades)?;
        let mut peak = 0.0_f64;
        let mut max_drawdown = 0.0_f64;
        for i in begin..=end {
            let value = cash_flow.value_at(i)?;
            if value > peak {
                peak = value;
            }
            if peak > 0.0 {
                let drawdown = (peak - value) / peak;
                if drawdown > max_drawdown {
                    max_drawdown = drawdown;
                }
            }
        }
        Ok(max_drawdown)
    }

    fn better_than(&self, a: f64, b: f64) -> bool {
        a < b
    }
}
