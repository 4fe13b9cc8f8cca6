//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types from the crate.
//!
//! # Example
//!
//! ```rust
//! use clmm_monitor_domain::prelude::*;
//!
//! let sqrt_price = tick_to_sqrt_price_x96(0).unwrap();
//! let amounts = calculate_amounts_from_liquidity(1_000_000, sqrt_price, -60, 60);
//! assert!(!amounts.is_zero());
//! ```

// Errors
pub use crate::error::MathError;

// Entities and enums
pub use crate::entities::TrackedPosition;
pub use crate::enums::{PositionStatus, ProximityStatus, RangeSide};

// Tick math
pub use crate::math::concentrated_liquidity::calculate_amounts_from_liquidity;
pub use crate::math::price_tick::estimate_tick_from_price;
pub use crate::math::tick_math::{
    DEFAULT_TOKEN_DECIMALS, MAX_SQRT_RATIO, MAX_TICK, MIN_SQRT_RATIO, MIN_TICK,
    calculate_price_range, get_price_from_tick, is_position_in_range, sqrt_price_x96_to_price,
    tick_to_sqrt_price_x96, validate_sqrt_price_x96, validate_tick,
};

// Proximity
pub use crate::proximity::{
    DEFAULT_WARNING_THRESHOLD_PCT, FlaggedPosition, ProximityAssessment,
    calculate_range_proximity, calculate_range_proximity_with_threshold,
    filter_positions_approaching_bounds, format_proximity_warning,
};

// Valuation
pub use crate::valuation::{
    FULL_RANGE_TOLERANCE_TICKS, PositionValuation, RangeCheck, UncollectedFees, ValuationInput,
    calculate_uncollected_fees, check_position_in_range, value_position,
};

// Value objects
pub use crate::value_objects::{PositionAmounts, PositionRange, Price, PriceRange};
