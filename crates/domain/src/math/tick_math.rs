//! Exact conversions between ticks, Q96 square-root prices and decimal prices.
//!
//! A tick indexes the geometric grid `price = 1.0001^tick`. Pools store the
//! square root of that ratio as an unsigned fixed-point integer scaled by
//! `2^96`. All arithmetic here goes through [`BigDecimal`] at
//! [`PRECISION`](super::precision::PRECISION) significant digits, so a given
//! tick always maps to the same integer.

use crate::error::MathError;
use crate::math::precision::{self, powi, q96, round_half_up_to_u256, u256_to_decimal};
use crate::value_objects::{PositionRange, Price, PriceRange};
use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use primitive_types::U256;

/// Lowest tick a pool can address.
pub const MIN_TICK: i32 = -887_272;
/// Highest tick a pool can address.
pub const MAX_TICK: i32 = 887_272;

/// sqrtPriceX96 at `MIN_TICK`: 4295128739.
pub const MIN_SQRT_RATIO: U256 = U256([4_295_128_739, 0, 0, 0]);
/// sqrtPriceX96 at `MAX_TICK`: 1461446703485210103287273052203988822378723970342.
pub const MAX_SQRT_RATIO: U256 = U256([
    6_743_328_256_752_651_558,
    17_280_870_778_742_802_505,
    4_294_805_859,
    0,
]);

/// Decimal places assumed for a token when the caller has none.
pub const DEFAULT_TOKEN_DECIMALS: u8 = 18;

/// `sqrt(1.0001)`, the per-tick growth factor of the square-root price.
fn sqrt_tick_base() -> Result<BigDecimal, MathError> {
    BigDecimal::new(BigInt::from(10_001), 4)
        .sqrt()
        .ok_or(MathError::Arithmetic("square root of tick base"))
}

/// Whether `tick` lies in `[MIN_TICK, MAX_TICK]`.
pub fn validate_tick(tick: i32) -> bool {
    (MIN_TICK..=MAX_TICK).contains(&tick)
}

/// Whether `sqrt_price_x96` lies in `[MIN_SQRT_RATIO, MAX_SQRT_RATIO]`.
pub fn validate_sqrt_price_x96(sqrt_price_x96: U256) -> bool {
    (MIN_SQRT_RATIO..=MAX_SQRT_RATIO).contains(&sqrt_price_x96)
}

/// Returns `sqrt(1.0001^tick) * 2^96`, rounded half-up.
///
/// # Errors
///
/// [`MathError::TickOutOfBounds`] when `tick` is outside
/// `[MIN_TICK, MAX_TICK]`, and [`MathError::SqrtPriceOutOfBounds`] when the
/// computed value lands more than one unit outside the canonical ratio
/// bounds.
pub fn tick_to_sqrt_price_x96(tick: i32) -> Result<U256, MathError> {
    if !validate_tick(tick) {
        return Err(MathError::TickOutOfBounds { tick });
    }

    let sqrt_price = powi(&sqrt_tick_base()?, i64::from(tick));
    let scaled = sqrt_price * q96();
    let value = round_half_up_to_u256(&scaled)
        .ok_or(MathError::Arithmetic("sqrtPriceX96 exceeds 256 bits"))?;

    // Exact rounding at MIN_TICK lands one unit under the on-chain constant.
    if value < MIN_SQRT_RATIO && MIN_SQRT_RATIO - value <= U256::one() {
        return Ok(MIN_SQRT_RATIO);
    }
    if value > MAX_SQRT_RATIO && value - MAX_SQRT_RATIO <= U256::one() {
        return Ok(MAX_SQRT_RATIO);
    }
    if !validate_sqrt_price_x96(value) {
        return Err(MathError::SqrtPriceOutOfBounds { tick, value });
    }

    Ok(value)
}

/// Converts a sqrtPriceX96 into a decimal-adjusted token1/token0 price.
///
/// price = (sqrtPriceX96 / 2^96)^2 * 10^(decimals0 - decimals1)
///
/// Any value is accepted: live pool state may sit momentarily outside the
/// canonical bounds.
pub fn sqrt_price_x96_to_price(sqrt_price_x96: U256, decimals0: u8, decimals1: u8) -> Price {
    let ratio = u256_to_decimal(sqrt_price_x96) / q96();
    let raw_price = (&ratio * &ratio).with_prec(precision::PRECISION);
    let adjustment = precision::pow10(i64::from(decimals0) - i64::from(decimals1));
    Price::new(raw_price * adjustment)
}

/// Decimal-adjusted price at `tick`.
pub fn get_price_from_tick(tick: i32, decimals0: u8, decimals1: u8) -> Result<Price, MathError> {
    let sqrt_price_x96 = tick_to_sqrt_price_x96(tick)?;
    Ok(sqrt_price_x96_to_price(sqrt_price_x96, decimals0, decimals1))
}

/// Prices at both bounds of a position and the width between them.
///
/// # Errors
///
/// [`MathError::InvalidRange`] unless `tick_lower < tick_upper`, plus any
/// error from [`tick_to_sqrt_price_x96`] for either bound.
pub fn calculate_price_range(
    tick_lower: i32,
    tick_upper: i32,
    decimals0: u8,
    decimals1: u8,
) -> Result<PriceRange, MathError> {
    let range = PositionRange::new(tick_lower, tick_upper)?;
    let price_lower = get_price_from_tick(range.tick_lower(), decimals0, decimals1)?;
    let price_upper = get_price_from_tick(range.tick_upper(), decimals0, decimals1)?;
    Ok(PriceRange::new(price_lower, price_upper))
}

/// Inclusive at both ends.
pub fn is_position_in_range(current_tick: i32, tick_lower: i32, tick_upper: i32) -> bool {
    tick_lower <= current_tick && current_tick <= tick_upper
}
