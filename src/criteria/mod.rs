//! Analysis criteria: scalar metrics over a price series and trades.
//!
//! Each criterion is a stateless type implementing [`AnalysisCriterion`];
//! comparison direction is per criterion (lower is better for trade count,
//! drawdown, and transaction cost, higher for the rest).

pub mod average_profitable_trades;
pub mod linear_transaction_cost;
pub mod maximum_drawdown;
pub mod number_of_trades;
pub mod reward_risk_ratio;
pub mod total_profit;

pub use average_profitable_trades::AverageProfitableTrades;
pub use linear_transaction_cost::LinearTransactionCost;
pub use maximum_drawdown::MaximumDrawDown;
pub use number_of_trades::NumberOfTrades;
pub use reward_risk_ratio::RewardRiskRatio;
pub use total_profit::TotalProfit;

use crate::error::Result;
use crate::record::TradingRecord;
use crate::series::PriceSeries;
use crate::slicer::Decision;
use crate::trade::Trade;

/// A pure scalar metric over `(series, trades)`.
///
/// Numeric edge cases (no trades, zero drawdown) yield sentinel values so
/// that strategies stay comparable; errors are reserved for out-of-range
/// indices and invalid arguments.
pub trait AnalysisCriterion {
    /// The metric over an explicit list of closed trades.
    fn calculate(&self, series: &PriceSeries, trades: &[Trade]) -> Result<f64>;

    /// The metric for a single trade.
    fn calculate_trade(&self, series: &PriceSeries, trade: &Trade) -> Result<f64> {
        self.calculate(series, std::slice::from_ref(trade))
    }

    /// The metric over a trading record's closed trades.
    fn calculate_record(&self, series: &PriceSeries, record: &TradingRecord) -> Result<f64> {
        self.calculate(series, record.trades())
    }

    /// True when `a` is strictly preferable to `b` under this criterion.
    fn better_than(&self, a: f64, b: f64) -> bool;

    /// Aggregates the criterion across time-sliced decisions.
    ///
    /// The default reconstructs one continuous equity reading: every
    /// decision's trades are concatenated in order and the metric is
    /// computed over the full series, so `summarize` agrees with
    /// `calculate` on the same trades.
    fn summarize(&self, series: &PriceSeries, decisions: &[Decision]) -> Result<f64> {
        let trades: Vec<Trade> = decisions
            .iter()
            .flat_map(|decision| decision.trades().iter().cloned())
            .collect();
        self.calculate(series, &trades)
    }
}
