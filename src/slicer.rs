//! Time-sliced evaluation: series slicers and per-slice decisions.

use chrono::Datelike;

use crate::criteria::AnalysisCriterion;
use crate::error::{Result, TradegaugeError};
use crate::series::PriceSeries;
use crate::trade::Trade;

/// Ordered list of contiguous, non-overlapping index windows covering a
/// series exactly. Construction validates the coverage invariant; every
/// window becomes a constrained view on demand.
#[derive(Debug, Clone)]
pub struct TimeSeriesSlicer {
    series: PriceSeries,
    windows: Vec<(usize, usize)>,
}

impl TimeSeriesSlicer {
    /// Builds a slicer from explicit `(begin, end)` windows, rejecting
    /// gaps, overlaps, and incomplete coverage.
    pub fn from_windows(series: &PriceSeries, windows: Vec<(usize, usize)>) -> Result<Self> {
        let (begin, end) = series.bounds().ok_or(TradegaugeError::InvalidArgument {
            reason: "cannot slice an empty series".into(),
        })?;
        if windows.is_empty() {
            return Err(TradegaugeError::InvalidArgument {
                reason: "slicer needs at least one window".into(),
            });
        }
        let mut expected = begin;
        for &(lo, hi) in &windows {
            if hi < lo {
                return Err(TradegaugeError::InvalidArgument {
                    reason: format!("window [{lo}, {hi}] is inverted"),
                });
            }
            if lo != expected {
                return Err(TradegaugeError::InvalidArgument {
                    reason: format!(
                        "window starting at {lo} leaves a gap or overlap: expected start {expected}"
                    ),
                });
            }
            expected = hi + 1;
        }
        if expected != end + 1 {
            return Err(TradegaugeError::InvalidArgument {
                reason: format!("windows stop at {} but the series ends at {end}", expected - 1),
            });
        }
        Ok(TimeSeriesSlicer {
            series: series.clone(),
            windows,
        })
    }

    /// Splits the series into `slices` near-equal windows; the remainder
    /// ticks go to the leading windows one each.
    pub fn split_into(series: &PriceSeries, slices: usize) -> Result<Self> {
        let (begin, _) = series.bounds().ok_or(TradegaugeError::InvalidArgument {
            reason: "cannot slice an empty series".into(),
        })?;
        let count = series.tick_count();
        if slices == 0 || slices > count {
            return Err(TradegaugeError::InvalidArgument {
                reason: format!("cannot split {count} ticks into {slices} slices"),
            });
        }
        let base = count / slices;
        let remainder = count % slices;
        let mut windows = Vec::with_capacity(slices);
        let mut lo = begin;
        for i in 0..slices {
            let width = if i < remainder { base + 1 } else { base };
            windows.push((lo, lo + width - 1));
            lo += width;
        }
        TimeSeriesSlicer::from_windows(series, windows)
    }

    /// Splits the series into fixed-width windows of `ticks_per_slice`;
    /// the last window may be shorter.
    pub fn split_every(series: &PriceSeries, ticks_per_slice: usize) -> Result<Self> {
        let (begin, end) = series.bounds().ok_or(TradegaugeError::InvalidArgument {
            reason: "cannot slice an empty series".into(),
        })?;
        if ticks_per_slice == 0 {
            return Err(TradegaugeError::InvalidArgument {
                reason: "ticks_per_slice must be positive".into(),
            });
        }
        let mut windows = Vec::new();
        let mut lo = begin;
        while lo <= end {
            let hi = lo.saturating_add(ticks_per_slice - 1).min(end);
            windows.push((lo, hi));
            lo = hi + 1;
        }
        TimeSeriesSlicer::from_windows(series, windows)
    }

    /// One window per calendar year of the tick dates, in series order.
    pub fn split_by_year(series: &PriceSeries) -> Result<Self> {
        let (begin, end) = series.bounds().ok_or(TradegaugeError::InvalidArgument {
            reason: "cannot slice an empty series".into(),
        })?;
        let mut windows = Vec::new();
        let mut lo = begin;
        let mut year = series.tick(begin)?.date.year();
        for i in begin + 1..=end {
            let tick_year = series.tick(i)?.date.year();
            if tick_year != year {
                windows.push((lo, i - 1));
                lo = i;
                year = tick_year;
            }
        }
        windows.push((lo, end));
        TimeSeriesSlicer::from_windows(series, windows)
    }

    pub fn number_of_slices(&self) -> usize {
        self.windows.len()
    }

    /// The `(begin, end)` bounds of window `index`.
    pub fn window(&self, index: usize) -> Result<(usize, usize)> {
        match self.windows.get(index) {
            Some(&window) => Ok(window),
            None => Err(TradegaugeError::IndexOutOfRange {
                index,
                begin: 0,
                end: self.windows.len() - 1,
            }),
        }
    }

    /// A constrained view over window `index`.
    pub fn slice(&self, index: usize) -> Result<PriceSeries> {
        let (lo, hi) = self.window(index)?;
        self.series.constrained(lo, hi)
    }

    pub fn series(&self) -> &PriceSeries {
        &self.series
    }
}

/// One slice of a backtest run: the slice's constrained view bound to the
/// trades a strategy executed inside it.
#[derive(Debug, Clone)]
pub struct Decision {
    slice: PriceSeries,
    trades: Vec<Trade>,
}

impl Decision {
    pub fn new(slice: PriceSeries, trades: Vec<Trade>) -> Self {
        Decision { slice, trades }
    }

    pub fn slice(&self) -> &PriceSeries {
        &self.slice
    }

    pub fn trades(&self) -> &[Trade] {
        &self.trades
    }

    /// The criterion applied to this decision's own slice and trades.
    pub fn evaluate(&self, criterion: &dyn AnalysisCriterion) -> Result<f64> {
        criterion.calculate(&self.slice, &self.trades)
    }
}
