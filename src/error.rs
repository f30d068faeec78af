//! Crate error types.

/// Top-level error type for tradegauge.
///
/// All three variants are programmer-error conditions surfaced directly to
/// the caller; numeric edge cases (no trades, zero drawdown) are not errors
/// and yield sentinel values instead.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TradegaugeError {
    #[error("index {index} out of range [{begin}, {end}]")]
    IndexOutOfRange {
        index: usize,
        begin: usize,
        end: usize,
    },

    #[error("illegal state: {reason}")]
    IllegalState { reason: String },

    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },
}

pub type Result<T> = std::result::Result<T, TradegaugeError>;
