//! Linear transaction cost criterion: total order costs under an
//! `a*x + b` cost model.

use crate::criteria::AnalysisCriterion;
use crate::error::Result;
use crate::record::TradingRecord;
use crate::series::PriceSeries;
use crate::trade::Trade;

/// Total transaction cost of a trade sequence, where an order on a traded
/// amount `x` costs `a * x + b`. The traded amount starts at
/// `initial_amount` and compounds through each trade's return ratio net
/// of costs; orders that recorded an explicit amount are costed on that
/// amount instead. Lower is better.
#[derive(Debug, Clone, Copy)]
pub struct LinearTransactionCost {
    initial_amount: f64,
    a: f64,
    b: f64,
}

impl LinearTransactionCost {
    pub fn new(initial_amount: f64, a: f64, b: f64) -> Self {
        LinearTransactionCost {
            initial_amount,
            a,
            b,
        }
    }

    fn order_cost(&self, traded_amount: f64) -> f64 {
        self.a * traded_amount + self.b
    }

    /// Cost of both legs of one trade. Recorded order amounts take
    /// precedence; otherwise the exit leg is costed on the amount left
    /// after the entry cost, grown by the trade's return ratio.
    fn trade_cost(&self, series: &PriceSeries, trade: &Trade, traded_amount: f64) -> Result<f64> {
        match (trade.entry().amount, trade.exit().amount) {
            (Some(entry_amount), Some(exit_amount)) => {
                Ok(self.order_cost(entry_amount) + self.order_cost(exit_amount))
            }
            _ => {
                let entry_cost = self.order_cost(traded_amount);
                let exited = (traded_amount - entry_cost) * trade.profit_ratio(series)?;
                Ok(entry_cost + self.order_cost(exited))
            }
        }
    }

    /// Total cost over `trades` plus the traded amount remaining after
    /// the last of them.
    fn costs_over(&self, series: &PriceSeries, trades: &[Trade]) -> Result<(f64, f64)> {
        let mut total = 0.0;
        let mut traded_amount = self.initial_amount;
        for trade in trades {
            let cost = self.trade_cost(series, trade, traded_amount)?;
            total += cost;
            traded_amount = (traded_amount - cost) * trade.profit_ratio(series)?;
        }
        Ok((total, traded_amount))
    }
}

impl AnalysisCriterion for LinearTransactionCost {
    fn calculate(&self, series: &PriceSeries, trades: &[Trade]) -> Result<f64> {
        Ok(self.costs_over(series, trades)?.0)
    }

    /// Adds the entry cost of a still-open position on top of the closed
    /// trades' costs.
    fn calculate_record(&self, series: &PriceSeries, record: &TradingRecord) -> Result<f64> {
        let (mut total, traded_amount) = self.costs_over(series, record.trades())?;
        if record.open_entry().is_some() {
            total += self.order_cost(traded_amount);
        }
        Ok(total)
    }

    fn better_than(&self, a: f64, b: f64) -> bool {
        a < b
    }
}
