//! Trading record: the ordered ledger of a strategy's executed trades.

use crate::error::{Result, TradegaugeError};
use crate::trade::{Order, OrderKind, Trade};

/// Ordered sequence of closed trades plus at most one open position.
///
/// `enter`/`exit` is the sole write path, driven by an external trading
/// rule engine. Closed trades are immutable and appear in entry order;
/// consecutive trades never overlap (a later entry index is never below
/// the earlier exit index).
#[derive(Debug, Clone, PartialEq)]
pub struct TradingRecord {
    entry_kind: OrderKind,
    trades: Vec<Trade>,
    orders: Vec<Order>,
    open_entry: Option<Order>,
}

impl TradingRecord {
    /// A record whose entries are BUY orders (long session).
    pub fn new() -> Self {
        TradingRecord::with_entry_kind(OrderKind::Buy)
    }

    /// A record with the given entry order kind. SELL entries model a
    /// short-selling session whose exits are BUY orders.
    pub fn with_entry_kind(entry_kind: OrderKind) -> Self {
        TradingRecord {
            entry_kind,
            trades: Vec::new(),
            orders: Vec::new(),
            open_entry: None,
        }
    }

    /// Opens a position at `index`.
    pub fn enter(&mut self, index: usize, price: Option<f64>, amount: Option<f64>) -> Result<()> {
        if self.open_entry.is_some() {
            return Err(TradegaugeError::IllegalState {
                reason: format!("cannot enter at index {index}: a trade is already open"),
            });
        }
        if let Some(last) = self.orders.last() {
            if index < last.index {
                return Err(TradegaugeError::IllegalState {
                    reason: format!(
                        "cannot enter at index {index}: precedes last order at index {}",
                        last.index
                    ),
                });
            }
        }
        let order = Order::new(index, self.entry_kind, price, amount);
        self.orders.push(order.clone());
        self.open_entry = Some(order);
        Ok(())
    }

    /// Closes the open position at `index`.
    pub fn exit(&mut self, index: usize, price: Option<f64>, amount: Option<f64>) -> Result<()> {
        let entry = match &self.open_entry {
            Some(entry) => entry.clone(),
            None => {
                return Err(TradegaugeError::IllegalState {
                    reason: format!("cannot exit at index {index}: no trade is open"),
                });
            }
        };
        if index < entry.index {
            return Err(TradegaugeError::IllegalState {
                reason: format!(
                    "cannot exit at index {index}: precedes entry at index {}",
                    entry.index
                ),
            });
        }
        let exit = Order::new(index, self.entry_kind.complement(), price, amount);
        self.orders.push(exit.clone());
        self.trades.push(Trade::new(entry, exit)?);
        self.open_entry = None;
        Ok(())
    }

    /// Closed trades in entry order.
    pub fn trades(&self) -> &[Trade] {
        &self.trades
    }

    pub fn trade_count(&self) -> usize {
        self.trades.len()
    }

    pub fn last_trade(&self) -> Option<&Trade> {
        self.trades.last()
    }

    /// Most recent order, entry or exit.
    pub fn last_order(&self) -> Option<&Order> {
        self.orders.last()
    }

    pub fn last_entry(&self) -> Option<&Order> {
        self.open_entry
            .as_ref()
            .or_else(|| self.trades.last().map(|t| t.entry()))
    }

    pub fn last_exit(&self) -> Option<&Order> {
        self.trades.last().map(|t| t.exit())
    }

    /// True when no position is open.
    pub fn is_closed(&self) -> bool {
        self.open_entry.is_none()
    }

    /// The entry order of the open position, if any.
    pub fn open_entry(&self) -> Option<&Order> {
        self.open_entry.as_ref()
    }
}

impl Default for TradingRecord {
    fn default() -> Self {
        TradingRecord::new()
    }
}
