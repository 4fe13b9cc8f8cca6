//! Numeric core: exact tick/price conversions and liquidity decomposition.

pub mod concentrated_liquidity;
pub mod precision;
pub mod price_tick;
pub mod tick_math;
