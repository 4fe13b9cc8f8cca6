use bigdecimal::BigDecimal;
use clmm_monitor_domain::math::precision::{powi, u256_to_decimal};
use clmm_monitor_domain::prelude::*;
use num_traits::{One, Zero};
use primitive_types::U256;
use rust_decimal_macros::dec;
use std::str::FromStr;

const SAMPLE_TICKS: [i32; 15] = [
    MIN_TICK, -800_000, -500_000, -100_000, -12_345, -1000, -1, 0, 1, 1000, 12_345, 100_000,
    500_000, 800_000, MAX_TICK,
];

fn tick_base() -> BigDecimal {
    BigDecimal::from_str("1.0001").unwrap()
}

#[test]
fn price_round_trips_to_tick_power() {
    for tick in SAMPLE_TICKS {
        let sqrt_price = tick_to_sqrt_price_x96(tick).unwrap();
        let price = sqrt_price_x96_to_price(sqrt_price, 18, 18).value;
        let expected = powi(&tick_base(), i64::from(tick));

        // 1e-15, plus the quantisation of sqrtPriceX96 to an integer, which
        // dominates near MIN_TICK where the integer has ten digits.
        let quantisation = BigDecimal::from(4) / u256_to_decimal(sqrt_price);
        let tolerance = BigDecimal::from_str("1e-15").unwrap() + quantisation;

        let relative_error = ((&price - &expected) / &expected).abs();
        assert!(
            relative_error <= tolerance,
            "tick {tick}: relative error {relative_error}"
        );
    }
}

#[test]
fn sqrt_price_is_strictly_monotonic() {
    let mut previous: Option<U256> = None;
    for tick in SAMPLE_TICKS {
        let current = tick_to_sqrt_price_x96(tick).unwrap();
        if let Some(previous) = previous {
            assert!(previous < current, "not increasing at tick {tick}");
        }
        previous = Some(current);
    }

    for tick in -5..5 {
        assert!(tick_to_sqrt_price_x96(tick).unwrap() < tick_to_sqrt_price_x96(tick + 1).unwrap());
    }
}

#[test]
fn tick_zero_is_parity() {
    let q96 = U256::from_dec_str("79228162514264337593543950336").unwrap();
    assert_eq!(tick_to_sqrt_price_x96(0).unwrap(), q96);
    for decimals in [0, 6, 8, 18, 24] {
        assert_eq!(get_price_from_tick(0, decimals, decimals).unwrap().value, BigDecimal::one());
    }
}

#[test]
fn domain_edges() {
    assert!(tick_to_sqrt_price_x96(MAX_TICK).is_ok());
    assert!(tick_to_sqrt_price_x96(MIN_TICK).is_ok());
    assert_eq!(
        tick_to_sqrt_price_x96(887_273),
        Err(MathError::TickOutOfBounds { tick: 887_273 })
    );
    assert_eq!(
        tick_to_sqrt_price_x96(-887_273),
        Err(MathError::TickOutOfBounds { tick: -887_273 })
    );

    for tick in [MIN_TICK, MAX_TICK] {
        assert!(validate_sqrt_price_x96(tick_to_sqrt_price_x96(tick).unwrap()));
    }
}

#[test]
fn degenerate_range_yields_no_amounts() {
    for sqrt_price in [U256::zero(), MIN_SQRT_RATIO, MAX_SQRT_RATIO, U256::from(12_345u64)] {
        for liquidity in [0u128, 1, u128::MAX] {
            assert!(calculate_amounts_from_liquidity(liquidity, sqrt_price, 100, 100).is_zero());
        }
    }
}

#[test]
fn amounts_follow_price_position() {
    let liquidity = 1_000_000_000_000_000_000u128;

    let below = calculate_amounts_from_liquidity(
        liquidity,
        tick_to_sqrt_price_x96(-2000).unwrap(),
        -1000,
        1000,
    );
    assert!(below.amount0 > BigDecimal::zero());
    assert!(below.amount1.is_zero());

    let above = calculate_amounts_from_liquidity(
        liquidity,
        tick_to_sqrt_price_x96(2000).unwrap(),
        -1000,
        1000,
    );
    assert!(above.amount0.is_zero());
    assert!(above.amount1 > BigDecimal::zero());

    let inside =
        calculate_amounts_from_liquidity(liquidity, tick_to_sqrt_price_x96(0).unwrap(), -1000, 1000);
    assert!(inside.amount0 > BigDecimal::zero());
    assert!(inside.amount1 > BigDecimal::zero());
}

#[test]
fn proximity_classification() {
    let position = |current| TrackedPosition::new("p", -1000, 1000).with_current_tick(current);

    let lower = calculate_range_proximity(&position(-950));
    assert_eq!(lower.status, ProximityStatus::ApproachingLowerBound);
    assert_eq!(lower.distance_to_lower_pct, Some(dec!(2.5)));

    let safe = calculate_range_proximity(&position(0));
    assert_eq!(safe.status, ProximityStatus::Safe);

    let outside = calculate_range_proximity(&position(-1050));
    assert_eq!(outside.status, ProximityStatus::OutOfRange);
    assert_eq!(outside.range_side, Some(RangeSide::BelowRange));

    let narrow = calculate_range_proximity(
        &TrackedPosition::new("n", -50, 50).with_current_tick(0),
    );
    assert_eq!(narrow.status, ProximityStatus::Safe);
}

#[test]
fn repeated_calls_are_identical() {
    for tick in SAMPLE_TICKS {
        assert_eq!(tick_to_sqrt_price_x96(tick), tick_to_sqrt_price_x96(tick));
        assert_eq!(get_price_from_tick(tick, 18, 6), get_price_from_tick(tick, 18, 6));
    }

    let sqrt_price = tick_to_sqrt_price_x96(-300).unwrap();
    assert_eq!(
        calculate_amounts_from_liquidity(42_000_000, sqrt_price, -600, 600),
        calculate_amounts_from_liquidity(42_000_000, sqrt_price, -600, 600)
    );

    let position = TrackedPosition::new("p", -600, 600).with_current_tick(-580);
    assert_eq!(
        calculate_range_proximity(&position),
        calculate_range_proximity(&position)
    );
}
