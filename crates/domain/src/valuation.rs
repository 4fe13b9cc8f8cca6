//! Position composition and USD value.

use crate::enums::{PositionStatus, RangeSide};
use crate::math::concentrated_liquidity::calculate_amounts_from_liquidity;
use crate::math::precision::{from_rust_decimal, pow10, u128_to_decimal};
use crate::math::tick_math::{MAX_TICK, MIN_TICK, is_position_in_range};
use bigdecimal::BigDecimal;
use num_traits::Zero;
use primitive_types::U256;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Bounds within this many ticks of both domain edges make a full-range position.
pub const FULL_RANGE_TOLERANCE_TICKS: i64 = 100;

/// Pool and position state needed to value a position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValuationInput {
    pub liquidity: u128,
    pub sqrt_price_x96: U256,
    pub current_tick: i32,
    pub tick_lower: i32,
    pub tick_upper: i32,
    pub decimals0: u8,
    pub decimals1: u8,
    pub price0_usd: Decimal,
    pub price1_usd: Decimal,
}

/// Human-unit holdings of a position and their USD value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionValuation {
    pub amount0: BigDecimal,
    pub amount1: BigDecimal,
    pub value0_usd: BigDecimal,
    pub value1_usd: BigDecimal,
    pub value_usd: BigDecimal,
    pub in_range: bool,
    pub status: PositionStatus,
    pub current_tick: i32,
    pub decimals0: u8,
    pub decimals1: u8,
}

/// Values a position at the pool's current price.
///
/// Raw amounts come from [`calculate_amounts_from_liquidity`] and are scaled
/// down by each token's decimals. Like that function this never fails: a
/// position the math cannot decompose is valued at zero.
pub fn value_position(input: &ValuationInput) -> PositionValuation {
    if input.liquidity == 0 {
        return PositionValuation {
            amount0: BigDecimal::zero(),
            amount1: BigDecimal::zero(),
            value0_usd: BigDecimal::zero(),
            value1_usd: BigDecimal::zero(),
            value_usd: BigDecimal::zero(),
            in_range: false,
            status: PositionStatus::Inactive,
            current_tick: input.current_tick,
            decimals0: input.decimals0,
            decimals1: input.decimals1,
        };
    }

    let in_range = is_position_in_range(input.current_tick, input.tick_lower, input.tick_upper);
    let raw = calculate_amounts_from_liquidity(
        input.liquidity,
        input.sqrt_price_x96,
        input.tick_lower,
        input.tick_upper,
    );

    let amount0 = raw.amount0 * pow10(-i64::from(input.decimals0));
    let amount1 = raw.amount1 * pow10(-i64::from(input.decimals1));
    let value0_usd = &amount0 * from_rust_decimal(input.price0_usd);
    let value1_usd = &amount1 * from_rust_decimal(input.price1_usd);
    let value_usd = &value0_usd + &value1_usd;

    debug!(
        tick_lower = input.tick_lower,
        tick_upper = input.tick_upper,
        %value_usd,
        in_range,
        "Position valued"
    );

    PositionValuation {
        amount0,
        amount1,
        value0_usd,
        value1_usd,
        value_usd,
        in_range,
        status: if in_range {
            PositionStatus::Active
        } else {
            PositionStatus::OutOfRange
        },
        current_tick: input.current_tick,
        decimals0: input.decimals0,
        decimals1: input.decimals1,
    }
}

/// Where the current tick sits relative to a position's bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeCheck {
    pub in_range: bool,
    pub is_full_range: bool,
    /// Holds liquidity and is in range.
    pub is_active: bool,
    pub range_side: Option<RangeSide>,
    pub current_tick: i32,
    pub tick_lower: i32,
    pub tick_upper: i32,
    /// `current_tick - tick_lower`, negative below the range.
    pub distance_to_lower: i64,
    /// `tick_upper - current_tick`, negative above the range.
    pub distance_to_upper: i64,
}

/// Tick-level range status of a position.
///
/// Unlike [`is_position_in_range`], a position spanning (nearly) the whole
/// tick domain is always reported in range.
pub fn check_position_in_range(
    liquidity: u128,
    current_tick: i32,
    tick_lower: i32,
    tick_upper: i32,
) -> RangeCheck {
    let is_full_range = (i64::from(tick_lower) - i64::from(MIN_TICK)).abs()
        <= FULL_RANGE_TOLERANCE_TICKS
        && (i64::from(tick_upper) - i64::from(MAX_TICK)).abs() <= FULL_RANGE_TOLERANCE_TICKS;
    let in_range = is_full_range || is_position_in_range(current_tick, tick_lower, tick_upper);

    let range_side = match (in_range, current_tick < tick_lower) {
        (true, _) => None,
        (false, true) => Some(RangeSide::BelowRange),
        (false, false) => Some(RangeSide::AboveRange),
    };

    RangeCheck {
        in_range,
        is_full_range,
        is_active: liquidity > 0 && in_range,
        range_side,
        current_tick,
        tick_lower,
        tick_upper,
        distance_to_lower: i64::from(current_tick) - i64::from(tick_lower),
        distance_to_upper: i64::from(tick_upper) - i64::from(current_tick),
    }
}

/// Fees owed to a position but not yet collected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UncollectedFees {
    pub tokens_owed0: u128,
    pub tokens_owed1: u128,
    pub fee0_amount: BigDecimal,
    pub fee1_amount: BigDecimal,
    pub fee0_usd: BigDecimal,
    pub fee1_usd: BigDecimal,
    pub total_fees_usd: BigDecimal,
    pub has_uncollected_fees: bool,
}

/// Converts raw owed token balances into human units and USD, using the
/// decimals and USD prices of `input`.
pub fn calculate_uncollected_fees(
    input: &ValuationInput,
    tokens_owed0: u128,
    tokens_owed1: u128,
) -> UncollectedFees {
    let fee0_amount = u128_to_decimal(tokens_owed0) * pow10(-i64::from(input.decimals0));
    let fee1_amount = u128_to_decimal(tokens_owed1) * pow10(-i64::from(input.decimals1));
    let fee0_usd = &fee0_amount * from_rust_decimal(input.price0_usd);
    let fee1_usd = &fee1_amount * from_rust_decimal(input.price1_usd);
    let total_fees_usd = &fee0_usd + &fee1_usd;

    UncollectedFees {
        tokens_owed0,
        tokens_owed1,
        fee0_amount,
        fee1_amount,
        fee0_usd,
        fee1_usd,
        total_fees_usd,
        has_uncollected_fees: tokens_owed0 > 0 || tokens_owed1 > 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::tick_math::tick_to_sqrt_price_x96;
    use rust_decimal_macros::dec;
    use std::str::FromStr;

    fn input(current_tick: i32, liquidity: u128) -> ValuationInput {
        ValuationInput {
            liquidity,
            sqrt_price_x96: tick_to_sqrt_price_x96(current_tick).unwrap(),
            current_tick,
            tick_lower: -1000,
            tick_upper: 1000,
            decimals0: 18,
            decimals1: 18,
            price0_usd: dec!(2),
            price1_usd: dec!(3),
        }
    }

    fn close(a: &BigDecimal, b: &str) -> bool {
        let b = BigDecimal::from_str(b).unwrap();
        (a - &b).abs() < BigDecimal::from_str("0.000001").unwrap()
    }

    #[test]
    fn test_zero_liquidity_is_inactive() {
        let valuation = value_position(&input(0, 0));
        assert_eq!(valuation.status, PositionStatus::Inactive);
        assert!(!valuation.in_range);
        assert!(valuation.value_usd.is_zero());
    }

    #[test]
    fn test_in_range_position() {
        let valuation = value_position(&input(0, 1_000_000_000_000_000_000));
        assert_eq!(valuation.status, PositionStatus::Active);
        assert!(valuation.in_range);

        // ~0.048768 of each token; 2 USD and 3 USD respectively.
        assert!(close(&valuation.amount0, "0.048768197581278889"));
        assert!(close(&valuation.amount1, "0.048768197581278889"));
        assert!(close(&valuation.value_usd, "0.243840987906394445"));
        assert_eq!(
            valuation.value_usd,
            &valuation.value0_usd + &valuation.value1_usd
        );
    }

    #[test]
    fn test_out_of_range_position() {
        let valuation = value_position(&input(2000, 1_000_000_000_000_000_000));
        assert_eq!(valuation.status, PositionStatus::OutOfRange);
        assert!(valuation.amount0.is_zero());
        assert!(valuation.value1_usd > BigDecimal::zero());
        assert_eq!(valuation.value0_usd, BigDecimal::zero());
    }

    #[test]
    fn test_decimals_scale_amounts() {
        let mut usdc_weth = input(0, 1_000_000_000_000_000_000);
        usdc_weth.decimals0 = 6;
        let valuation = value_position(&usdc_weth);
        assert!(close(&valuation.amount0, "48768197581.278888998"));
    }

    #[test]
    fn test_range_check_inside_and_outside() {
        let inside = check_position_in_range(1, -950, -1000, 1000);
        assert!(inside.in_range && inside.is_active);
        assert!(!inside.is_full_range);
        assert_eq!(inside.range_side, None);
        assert_eq!((inside.distance_to_lower, inside.distance_to_upper), (50, 1950));

        let below = check_position_in_range(1, -1200, -1000, 1000);
        assert!(!below.in_range && !below.is_active);
        assert_eq!(below.range_side, Some(RangeSide::BelowRange));
        assert_eq!(below.distance_to_lower, -200);

        let above = check_position_in_range(1, 1001, -1000, 1000);
        assert_eq!(above.range_side, Some(RangeSide::AboveRange));
        assert_eq!(above.distance_to_upper, -1);
    }

    #[test]
    fn test_full_range_is_always_in_range() {
        let check = check_position_in_range(1, 887_250, -887_200, 887_220);
        assert!(check.is_full_range);
        assert!(check.in_range);
        assert!(check.is_active);
        assert_eq!(check.range_side, None);

        // One end too far from the domain edge.
        let check = check_position_in_range(1, 887_250, -887_100, 887_220);
        assert!(!check.is_full_range);
        assert_eq!(check.range_side, Some(RangeSide::AboveRange));
    }

    #[test]
    fn test_range_check_without_liquidity_is_inactive() {
        let check = check_position_in_range(0, 0, MIN_TICK, MAX_TICK);
        assert!(check.in_range);
        assert!(!check.is_active);
    }

    #[test]
    fn test_uncollected_fees() {
        let mut position = input(0, 1);
        position.decimals0 = 6;
        let fees = calculate_uncollected_fees(&position, 1_500_000, 200_000_000_000_000_000);

        assert!(fees.has_uncollected_fees);
        assert_eq!(fees.fee0_amount, BigDecimal::from_str("1.5").unwrap());
        assert_eq!(fees.fee1_amount, BigDecimal::from_str("0.2").unwrap());
        assert_eq!(fees.fee0_usd, BigDecimal::from(3));
        assert_eq!(fees.fee1_usd, BigDecimal::from_str("0.6").unwrap());
        assert_eq!(fees.total_fees_usd, BigDecimal::from_str("3.6").unwrap());
    }

    #[test]
    fn test_no_uncollected_fees() {
        let fees = calculate_uncollected_fees(&input(0, 1), 0, 0);
        assert!(!fees.has_uncollected_fees);
        assert!(fees.fee0_amount.is_zero());
        assert!(fees.total_fees_usd.is_zero());
    }
}
