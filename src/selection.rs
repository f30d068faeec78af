//! Picking the best of several candidate backtests under one criterion.

use crate::criteria::AnalysisCriterion;
use crate::error::{Result, TradegaugeError};
use crate::record::TradingRecord;
use crate::series::PriceSeries;

/// Index of the candidate record no other candidate strictly beats under
/// the criterion's own comparison rule. Ties keep the first-seen
/// candidate, so the result is deterministic.
pub fn choose_best(
    criterion: &dyn AnalysisCriterion,
    series: &PriceSeries,
    candidates: &[TradingRecord],
) -> Result<usize> {
    let first = candidates
        .first()
        .ok_or(TradegaugeError::InvalidArgument {
            reason: "no candidate trading records".into(),
        })?;
    let mut best = 0;
    let mut best_value = criterion.calculate_record(series, first)?;
    for (i, candidate) in candidates.iter().enumerate().skip(1) {
        let value = criterion.calculate_record(series, candidate)?;
        if criterion.better_than(value, best_value) {
            best = i;
            best_value = value;
        }
    }
    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::{NumberOfTrades, TotalProfit};
    use crate::series::Tick;
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

    fn record_with_trades(pairs: &[(usize, usize)]) -> TradingRecord {
        let mut record = TradingRecord::new();
        for &(entry, exit) in pairs {
            record.enter(entry, None, None).unwrap();
            record.exit(exit, None, None).unwrap();
        }
        record
    }

    #[test]
    fn picks_highest_profit() {
        let series = make_series(&[100.0, 110.0, 100.0, 150.0, 100.0, 105.0]);
        let candidates = vec![
            record_with_trades(&[(0, 1)]), // 1.10
            record_with_trades(&[(2, 3)]), // 1.50
            record_with_trades(&[(4, 5)]), // 1.05
        ];
        let best = choose_best(&TotalProfit, &series, &candidates).unwrap();
        assert_eq!(best, 1);
    }

    #[test]
    fn picks_fewest_trades() {
        let series = make_series(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        let candidates = vec![
            record_with_trades(&[(0, 1), (2, 3)]),
            record_with_trades(&[(0, 4)]),
        ];
        let best = choose_best(&NumberOfTrades, &series, &candidates).unwrap();
        assert_eq!(best, 1);
    }

    #[test]
    fn tie_keeps_first_seen() {
        let series = make_series(&[100.0, 110.0, 100.0, 110.0]);
        let candidates = vec![
            record_with_trades(&[(0, 1)]), // 1.10
            record_with_trades(&[(2, 3)]), // 1.10 again
        ];
        let best = choose_best(&TotalProfit, &series, &candidates).unwrap();
        assert_eq!(best, 0);
    }

    #[test]
    fn empty_candidates_rejected() {
        let series = make_series(&[1.0, 2.0]);
        assert!(matches!(
            choose_best(&TotalProfit, &series, &[]),
            Err(TradegaugeError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn single_candidate_wins() {
        let series = make_series(&[1.0, 2.0]);
        let candidates = vec![record_with_trades(&[(0, 1)])];
        let best = choose_best(&TotalProfit, &series, &candidates).unwrap();
        assert_eq!(best, 0);
    }
}
