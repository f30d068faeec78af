//! Orders and closed round-trip trades.

use crate::error::{Result, TradegaugeError};
use crate::series::PriceSeries;

/// Side of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderKind {
    Buy,
    Sell,
}

impl OrderKind {
    pub fn complement(self) -> OrderKind {
        match self {
            OrderKind::Buy => OrderKind::Sell,
            OrderKind::Sell => OrderKind::Buy,
        }
    }
}

/// A single buy or sell instruction at a tick index, with optional
/// explicit fill price and amount.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub index: usize,
    pub kind: OrderKind,
    pub price: Option<f64>,
    pub amount: Option<f64>,
}

impl Order {
    pub fn new(index: usize, kind: OrderKind, price: Option<f64>, amount: Option<f64>) -> Self {
        Order {
            index,
            kind,
            price,
            amount,
        }
    }

    pub fn buy_at(index: usize) -> Self {
        Order::new(index, OrderKind::Buy, None, None)
    }

    pub fn sell_at(index: usize) -> Self {
        Order::new(index, OrderKind::Sell, None, None)
    }

    pub fn is_buy(&self) -> bool {
        self.kind == OrderKind::Buy
    }
}

/// A closed round-trip position: one entry order and one complementary
/// exit order. Immutable once constructed.
///
/// Direction derives from the entry order's kind alone; a short trade may
/// legitimately carry an exit index below its entry index in some
/// evaluation paths, so index order and direction are independent facts.
#[derive(Debug, Clone, PartialEq)]
pub struct Trade {
    entry: Order,
    exit: Order,
}

impl Trade {
    /// Builds a closed trade. The two orders must have different kinds.
    pub fn new(entry: Order, exit: Order) -> Result<Trade> {
        if entry.kind == exit.kind {
            return Err(TradegaugeError::InvalidArgument {
                reason: "entry and exit orders must have different kinds".into(),
            });
        }
        Ok(Trade { entry, exit })
    }

    pub fn entry(&self) -> &Order {
        &self.entry
    }

    pub fn exit(&self) -> &Order {
        &self.exit
    }

    pub fn entry_is_buy(&self) -> bool {
        self.entry.is_buy()
    }

    /// True when both legs carry an explicit fill price instead of being
    /// priced from the series.
    pub fn has_prices(&self) -> bool {
        self.entry.price.is_some() && self.exit.price.is_some()
    }

    /// True when both legs carry an explicit traded amount.
    pub fn has_amounts(&self) -> bool {
        self.entry.amount.is_some() && self.exit.amount.is_some()
    }

    /// The entry leg's value: the explicit fill price when present,
    /// otherwise the series' average close over the entry index set.
    pub fn entries_value(&self, series: &PriceSeries) -> Result<f64> {
        match self.entry.price {
            Some(price) => Ok(price),
            None => series.average_close(&[self.entry.index]),
        }
    }

    /// The exit leg's value, symmetric to [`entries_value`](Self::entries_value).
    pub fn exits_value(&self, series: &PriceSeries) -> Result<f64> {
        match self.exit.price {
            Some(price) => Ok(price),
            None => series.average_close(&[self.exit.index]),
        }
    }

    /// Return ratio of the trade: `exits/entries` for a long,
    /// `entries/exits` for a short.
    pub fn profit_ratio(&self, series: &PriceSeries) -> Result<f64> {
        let entries = self.entries_value(series)?;
        let exits = self.exits_value(series)?;
        if self.entry_is_buy() {
            Ok(exits / entries)
        } else {
            Ok(entries / exits)
        }
    }

    /// The tick span touched by this trade, ascending regardless of which
    /// leg is chronologically first.
    pub fn span(&self) -> (usize, usize) {
        let (a, b) = (self.entry.index, self.exit.index);
        (a.min(b), a.max(b))
    }
}
