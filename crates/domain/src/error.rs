//! Error type for the fail-fast conversions.

use crate::math::tick_math::{MAX_TICK, MIN_TICK};
use primitive_types::U256;

/// Errors raised by conversions whose input lies outside the legal domain.
///
/// Only the fail-fast operations return this type. Amount and proximity
/// calculations degrade to neutral values instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MathError {
    /// Tick outside `[MIN_TICK, MAX_TICK]`.
    #[error("tick {tick} out of bounds [{min}, {max}]", min = MIN_TICK, max = MAX_TICK)]
    TickOutOfBounds {
        /// Offending tick.
        tick: i32,
    },

    /// A computed sqrtPriceX96 landed outside `[MIN_SQRT_RATIO, MAX_SQRT_RATIO]`.
    #[error("calculated sqrtPriceX96 {value} for tick {tick} out of bounds")]
    SqrtPriceOutOfBounds {
        /// Tick the value was computed from.
        tick: i32,
        /// The rejected value.
        value: U256,
    },

    /// Lower tick is not strictly below the upper tick.
    #[error("invalid tick range: lower {lower} must be below upper {upper}")]
    InvalidRange {
        /// Lower tick.
        lower: i32,
        /// Upper tick.
        upper: i32,
    },

    /// Numeric failure inside the arbitrary-precision pipeline.
    #[error("arithmetic failure: {0}")]
    Arithmetic(&'static str),
}
