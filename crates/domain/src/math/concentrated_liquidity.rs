use crate::error::MathError;
use crate::math::precision::{q96, u128_to_decimal, u256_to_decimal};
use crate::math::tick_math::tick_to_sqrt_price_x96;
use crate::value_objects::PositionAmounts;
use bigdecimal::BigDecimal;
use num_traits::Zero;
use primitive_types::U256;
use tracing::warn;

/// Amount of token0 (x) held between two Q96 square-root prices.
/// delta_x = L * (sqrt(P_b) - sqrt(P_a)) / (sqrt(P_a) * sqrt(P_b)) * 2^96
/// where P_a < P_b
pub fn get_amount0_delta(
    liquidity: &BigDecimal,
    sqrt_price_a_x96: &BigDecimal,
    sqrt_price_b_x96: &BigDecimal,
) -> Result<BigDecimal, MathError> {
    let den = sqrt_price_a_x96 * sqrt_price_b_x96;
    if den.is_zero() {
        return Err(MathError::Arithmetic("Sqrt price must be positive"));
    }

    let num = liquidity * (sqrt_price_b_x96 - sqrt_price_a_x96);
    Ok(num / den * q96())
}

/// Amount of token1 (y) held between two Q96 square-root prices.
/// delta_y = L * (sqrt(P_b) - sqrt(P_a)) / 2^96
/// where P_a < P_b
pub fn get_amount1_delta(
    liquidity: &BigDecimal,
    sqrt_price_a_x96: &BigDecimal,
    sqrt_price_b_x96: &BigDecimal,
) -> BigDecimal {
    liquidity * (sqrt_price_b_x96 - sqrt_price_a_x96) / q96()
}

/// Token amounts backing `liquidity` in `[tick_lower, tick_upper]` at the
/// pool's current square-root price.
///
/// - below the range the position is all token0
/// - above it, all token1
/// - inside it, both
///
/// Never fails: an empty or inverted range, zero liquidity, or any internal
/// error yields zero amounts. Results are clamped to be non-negative.
pub fn calculate_amounts_from_liquidity(
    liquidity: u128,
    sqrt_price_x96_current: U256,
    tick_lower: i32,
    tick_upper: i32,
) -> PositionAmounts {
    if tick_lower >= tick_upper || liquidity == 0 {
        return PositionAmounts::zero();
    }

    match amounts_in_range(liquidity, sqrt_price_x96_current, tick_lower, tick_upper) {
        Ok(amounts) => amounts,
        Err(e) => {
            warn!(
                error = %e,
                tick_lower,
                tick_upper,
                "Error calculating amounts from liquidity"
            );
            PositionAmounts::zero()
        }
    }
}

fn amounts_in_range(
    liquidity: u128,
    sqrt_price_x96_current: U256,
    tick_lower: i32,
    tick_upper: i32,
) -> Result<PositionAmounts, MathError> {
    let liquidity = u128_to_decimal(liquidity);
    let sqrt_price_lower = u256_to_decimal(tick_to_sqrt_price_x96(tick_lower)?);
    let sqrt_price_upper = u256_to_decimal(tick_to_sqrt_price_x96(tick_upper)?);
    let sqrt_price_current = u256_to_decimal(sqrt_price_x96_current);

    let (amount0, amount1) = if sqrt_price_current <= sqrt_price_lower {
        let amount0 = get_amount0_delta(&liquidity, &sqrt_price_lower, &sqrt_price_upper)?;
        (amount0, BigDecimal::zero())
    } else if sqrt_price_current >= sqrt_price_upper {
        let amount1 = get_amount1_delta(&liquidity, &sqrt_price_lower, &sqrt_price_upper);
        (BigDecimal::zero(), amount1)
    } else {
        let amount0 = get_amount0_delta(&liquidity, &sqrt_price_current, &sqrt_price_upper)?;
        let amount1 = get_amount1_delta(&liquidity, &sqrt_price_lower, &sqrt_price_current);
        (amount0, amount1)
    };

    Ok(PositionAmounts::new(
        clamp_non_negative(amount0),
        clamp_non_negative(amount1),
    ))
}

fn clamp_non_negative(value: BigDecimal) -> BigDecimal {
    if value < BigDecimal::zero() {
        BigDecimal::zero()
    } else {
        value
    }
}
