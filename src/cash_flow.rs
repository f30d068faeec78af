//! Cash flow: the per-tick equity multiplier curve of a trade sequence.

use crate::error::{Result, TradegaugeError};
use crate::record::TradingRecord;
use crate::series::PriceSeries;
use crate::trade::Trade;

/// Equity multiplier per tick index, built once by replaying trades
/// against a price series and immutable afterwards.
///
/// Values are absolute-indexed from 0 through the series' end index;
/// indices not touched by any trade (including everything before a
/// constrained view's begin index) hold the carried-forward value,
/// starting at the neutral 1.0.
#[derive(Debug, Clone, PartialEq)]
pub struct CashFlow {
    values: Vec<f64>,
}

impl CashFlow {
    pub fn from_trade(series: &PriceSeries, trade: &Trade) -> Result<CashFlow> {
        CashFlow::from_trades(series, std::slice::from_ref(trade))
    }

    /// Replays `trades` in the order given. Equals the concatenation of
    /// per-trade replays, so record-level and trade-by-trade construction
    /// agree at every index.
    pub fn from_trades(series: &PriceSeries, trades: &[Trade]) -> Result<CashFlow> {
        let mut flow = CashFlow { values: vec![1.0] };
        for trade in trades {
            flow.apply_trade(series, trade)?;
        }
        flow.fill_to_end(series);
        Ok(flow)
    }

    pub fn from_record(series: &PriceSeries, record: &TradingRecord) -> Result<CashFlow> {
        CashFlow::from_trades(series, record.trades())
    }

    /// The equity multiplier at a tick index.
    pub fn value_at(&self, index: usize) -> Result<f64> {
        match self.values.get(index) {
            Some(&value) => Ok(value),
            None => Err(TradegaugeError::IndexOutOfRange {
                index,
                begin: 0,
                end: self.values.len() - 1,
            }),
        }
    }

    /// Number of computed values (series end index + 1, or 1 when no tick
    /// reaches further).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The final computed value: the total compounded return.
    pub fn final_value(&self) -> f64 {
        self.last_value()
    }

    fn last_value(&self) -> f64 {
        self.values.last().copied().unwrap_or(1.0)
    }

    fn apply_trade(&mut self, series: &PriceSeries, trade: &Trade) -> Result<()> {
        let (lo, hi) = trade.span();
        let (begin, end) = series
            .bounds()
            .ok_or_else(|| TradegaugeError::InvalidArgument {
                reason: "cannot replay trades over an empty series".into(),
            })?;
        if lo < begin || hi > end {
            return Err(TradegaugeError::IndexOutOfRange {
                index: if lo < begin { lo } else { hi },
                begin,
                end,
            });
        }

        // Carry the last value flat up to the span's first index.
        if self.values.len() <= lo {
            let last = self.last_value();
            self.values.resize(lo + 1, last);
        }
        let base = self.values[lo];

        // Fixed fills apply the trade's overall ratio once across the
        // whole span; series-priced trades re-price every tick against
        // the entry's average close.
        let fixed_ratio = if trade.has_prices() {
            Some(trade.profit_ratio(series)?)
        } else {
            None
        };
        let entry_indexes = [trade.entry().index];
        for i in lo + 1..=hi {
            let ratio = match fixed_ratio {
                Some(ratio) => ratio,
                None => {
                    let entry_close = series.average_close(&entry_indexes)?;
                    if trade.entry_is_buy() {
                        series.close(i)? / entry_close
                    } else {
                        entry_close / series.close(i)?
                    }
                }
            };
            let value = base * ratio;
            if i < self.values.len() {
                self.values[i] = value;
            } else {
                self.values.push(value);
            }
        }
        Ok(())
    }

    fn fill_to_end(&mut self, series: &PriceSeries) {
        if let Some((_, end)) = series.bounds() {
            if self.values.len() <= end {
                let last = self.last_value();
                self.values.resize(end + 1, last);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::Tick;
    use crate::trade::Order;
    use chrono::NaiveDate;

    fn make_series(closes: &[f64]) -> PriceSeries {
        let ticks = closes
            .iter()
            .enumerate()
            .map(|(i, &close)| {
                let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
                    + chrono::Duration::days(i as i64);
                Tick::from_close(date, close)
            })
            .collect();
        PriceSeries::new(ticks)
    }

    fn long_trade(entry: usize, exit: usize) -> Trade {
        Trade::new(Order::buy_at(entry), Order::sell_at(exit)).unwrap()
    }

    fn assert_values(flow: &CashFlow, expected: &[f64]) {
        assert_eq!(flow.len(), expected.len());
        for (i, &want) in expected.iter().enumerate() {
            let got = flow.value_at(i).unwrap();
            assert!(
                (got - want).abs() < 1e-9,
                "value_at({i}) = {got}, expected {want}"
            );
        }
    }

    #[test]
    fn no_trades_is_flat_one() {
        let series = make_series(&[3.0, 5.0, 7.0]);
        let flow = CashFlow::from_trades(&series, &[]).unwrap();
        assert_values(&flow, &[1.0, 1.0, 1.0]);
    }

    #[test]
    fn single_long_trade_with_gain() {
        let series = make_series(&[1.0, 2.0]);
        let flow = CashFlow::from_trade(&series, &long_trade(0, 1)).unwrap();
        assert_values(&flow, &[1.0, 2.0]);
    }

    #[test]
    fn long_trade_reprices_every_tick() {
        let series = make_series(&[2.0, 1.0, 3.0, 4.0]);
        let flow = CashFlow::from_trade(&series, &long_trade(0, 3)).unwrap();
        assert_values(&flow, &[1.0, 0.5, 1.5, 2.0]);
    }

    #[test]
    fn short_trade_inverts_the_ratio() {
        let series = make_series(&[1.0, 2.0, 4.0]);
        let trade = Trade::new(Order::sell_at(0), Order::buy_at(1)).unwrap();
        let flow = CashFlow::from_trade(&series, &trade).unwrap();
        assert_values(&flow, &[1.0, 0.5, 0.5]);
    }

    #[test]
    fn gap_between_trades_is_carried_flat() {
        let series = make_series(&[1.0, 2.0, 2.0, 4.0, 8.0]);
        let trades = vec![long_trade(0, 1), long_trade(3, 4)];
        let flow = CashFlow::from_trades(&series, &trades).unwrap();
        assert_values(&flow, &[1.0, 2.0, 2.0, 2.0, 4.0]);
    }

    #[test]
    fn tail_after_last_exit_is_carried_flat() {
        let series = make_series(&[1.0, 2.0, 5.0, 5.0, 5.0]);
        let flow = CashFlow::from_trade(&series, &long_trade(0, 1)).unwrap();
        assert_values(&flow, &[1.0, 2.0, 2.0, 2.0, 2.0]);
    }

    #[test]
    fn fixed_prices_apply_once_across_the_span() {
        let series = make_series(&[10.0, 20.0, 30.0]);
        let entry = Order::new(0, crate::trade::OrderKind::Buy, Some(10.0), None);
        let exit = Order::new(2, crate::trade::OrderKind::Sell, Some(40.0), None);
        let trade = Trade::new(entry, exit).unwrap();
        let flow = CashFlow::from_trade(&series, &trade).unwrap();
        // The 4x fill ratio lands immediately and stays flat; the curve is
        // not re-priced from the series closes.
        assert_values(&flow, &[1.0, 4.0, 4.0]);
    }

    #[test]
    fn worked_example_three_trades() {
        let series = make_series(&[1.0, 2.0, 3.0, 6.0, 5.0, 20.0, 3.0]);
        let trades = vec![long_trade(0, 1), long_trade(3, 4), long_trade(5, 6)];
        let flow = CashFlow::from_trades(&series, &trades).unwrap();
        assert_values(
            &flow,
            &[1.0, 2.0, 2.0, 2.0, 5.0 / 3.0, 5.0 / 3.0, 0.25],
        );
    }

    #[test]
    fn constrained_view_keeps_absolute_indices() {
        let series = make_series(&[1.0, 1.0, 1.0, 1.0, 1.0, 10.0, 5.0, 6.0, 1.0, 1.0, 1.0]);
        let view = series.constrained(4, 8).unwrap();
        let trades = vec![
            long_trade(4, 5),
            long_trade(5, 6),
            long_trade(6, 7),
            long_trade(7, 8),
        ];
        let flow = CashFlow::from_trades(&view, &trades).unwrap();
        // Padding 1.0 before the view's begin, then the replay: the value
        // at the view's first index is exactly 1.0.
        assert_values(&flow, &[1.0, 1.0, 1.0, 1.0, 1.0, 10.0, 5.0, 6.0, 1.0]);
    }

    #[test]
    fn record_equals_trade_by_trade_fold() {
        let series = make_series(&[1.0, 2.0, 3.0, 6.0, 5.0, 20.0, 3.0]);
        let mut record = TradingRecord::new();
        record.enter(0, None, None).unwrap();
        record.exit(1, None, None).unwrap();
        record.enter(3, None, None).unwrap();
        record.exit(4, None, None).unwrap();
        record.enter(5, None, None).unwrap();
        record.exit(6, None, None).unwrap();

        let from_record = CashFlow::from_record(&series, &record).unwrap();
        let from_fold = CashFlow::from_trades(&series, record.trades()).unwrap();
        for i in 0..from_record.len() {
            let a = from_record.value_at(i).unwrap();
            let b = from_fold.value_at(i).unwrap();
            assert!((a - b).abs() < f64::EPSILON, "mismatch at index {i}");
        }
    }

    #[test]
    fn final_value_is_total_compounded_return() {
        let series = make_series(&[1.0, 2.0, 2.0, 4.0, 8.0]);
        let trades = vec![long_trade(0, 1), long_trade(3, 4)];
        let flow = CashFlow::from_trades(&series, &trades).unwrap();
        assert!((flow.final_value() - 4.0).abs() < 1e-9);
    }

    #[test]
    fn value_at_beyond_length_fails() {
        let series = make_series(&[1.0, 2.0]);
        let flow = CashFlow::from_trade(&series, &long_trade(0, 1)).unwrap();
        assert!(matches!(
            flow.value_at(2),
            Err(TradegaugeError::IndexOutOfRange { .. })
        ));
    }

    #[test]
    fn trade_beyond_series_bounds_fails() {
        let series = make_series(&[1.0, 2.0]);
        assert!(matches!(
            CashFlow::from_trade(&series, &long_trade(0, 5)),
            Err(TradegaugeError::IndexOutOfRange { .. })
        ));
    }

    #[test]
    fn empty_series_with_trade_fails() {
        let series = make_series(&[]);
        assert!(matches!(
            CashFlow::from_trade(&series, &long_trade(0, 1)),
            Err(TradegaugeError::InvalidArgument { .. })
        ));
    }
}
