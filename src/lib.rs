//! tradegauge — performance evaluation for backtested trading strategies.
//!
//! Given a historical price series and the trades a strategy executed
//! against it, this crate derives a per-tick equity curve ([`cash_flow`])
//! and scalar criteria ([`criteria`]) such as maximum drawdown and
//! reward/risk ratio, and aggregates those criteria across time-sliced
//! sub-periods ([`slicer`]) to compare strategies ([`selection`]).
//!
//! Signal generation, data loading, and reporting are external
//! collaborators: this crate only evaluates outcomes.

pub mod cash_flow;
pub mod criteria;
pub mod error;
pub mod record;
pub mod selection;
pub mod series;
pub mod slicer;
pub mod trade;
