//! Price series and constrained sub-views.

use chrono::NaiveDate;
use std::sync::Arc;

use crate::error::{Result, TradegaugeError};

/// One indexed time step of a price series. Immutable once ingested.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: i64,
}

impl Tick {
    pub fn new(date: NaiveDate, open: f64, high: f64, low: f64, close: f64, volume: i64) -> Self {
        Tick {
            date,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// A flat tick where all four prices equal the close. Handy when only
    /// close prices matter.
    pub fn from_close(date: NaiveDate, close: f64) -> Self {
        Tick::new(date, close, close, close, close, 0)
    }
}

/// Read-only indexed access to an ordered sequence of ticks.
///
/// A `PriceSeries` is either a full view over its tick storage or a
/// constrained view sharing the same storage but exposing only a sub-range
/// `[begin, end]`. Views address ticks by the same absolute indices as
/// their parent and never widen beyond their configured bounds. Cloning is
/// cheap (the tick storage is shared).
#[derive(Debug, Clone)]
pub struct PriceSeries {
    ticks: Arc<[Tick]>,
    begin: usize,
    end: usize,
}

impl PriceSeries {
    /// Full view over `ticks`. An empty series is allowed.
    pub fn new(ticks: Vec<Tick>) -> Self {
        let end = ticks.len().saturating_sub(1);
        PriceSeries {
            ticks: ticks.into(),
            begin: 0,
            end,
        }
    }

    /// A narrowed view over the same tick storage.
    ///
    /// Both bounds are absolute indices and must fall within this view's
    /// own bounds.
    pub fn constrained(&self, begin: usize, end: usize) -> Result<PriceSeries> {
        if self.is_empty() {
            return Err(TradegaugeError::InvalidArgument {
                reason: "cannot constrain an empty series".into(),
            });
        }
        if begin > end {
            return Err(TradegaugeError::InvalidArgument {
                reason: format!("constrained begin {begin} exceeds end {end}"),
            });
        }
        if begin < self.begin || end > self.end {
            return Err(TradegaugeError::InvalidArgument {
                reason: format!(
                    "constrained range [{begin}, {end}] widens view bounds [{}, {}]",
                    self.begin, self.end
                ),
            });
        }
        Ok(PriceSeries {
            ticks: Arc::clone(&self.ticks),
            begin,
            end,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }

    /// Number of ticks visible through this view.
    pub fn tick_count(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.end - self.begin + 1
        }
    }

    /// First and last visible absolute index, or `None` for an empty series.
    pub fn bounds(&self) -> Option<(usize, usize)> {
        if self.is_empty() {
            None
        } else {
            Some((self.begin, self.end))
        }
    }

    /// First visible absolute index. Meaningless for an empty series.
    pub fn begin_index(&self) -> usize {
        self.begin
    }

    /// Last visible absolute index. Meaningless for an empty series.
    pub fn end_index(&self) -> usize {
        self.end
    }

    /// The tick at an absolute index within this view's bounds.
    pub fn tick(&self, index: usize) -> Result<&Tick> {
        let (begin, end) = self
            .bounds()
            .ok_or_else(|| TradegaugeError::InvalidArgument {
                reason: format!("tick {index} requested from an empty series"),
            })?;
        if index < begin || index > end {
            return Err(TradegaugeError::IndexOutOfRange { index, begin, end });
        }
        Ok(&self.ticks[index])
    }

    pub fn close(&self, index: usize) -> Result<f64> {
        Ok(self.tick(index)?.close)
    }

    /// Mean close price over a non-empty set of absolute indices.
    pub fn average_close(&self, indices: &[usize]) -> Result<f64> {
        if indices.is_empty() {
            return Err(TradegaugeError::InvalidArgument {
                reason: "empty index set for average close price".into(),
            });
        }
        let mut sum = 0.0;
        for &index in indices {
            sum += self.close(index)?;
        }
        Ok(sum / indices.len() as f64)
    }
}
