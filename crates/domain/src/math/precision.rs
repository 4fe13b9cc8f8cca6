//! Arbitrary-precision helpers shared by the tick and liquidity math.
//!
//! Every truncating step (integer powers, square roots, quotients) keeps
//! [`PRECISION`] significant digits. `1.0001^tick` spans roughly 87 orders
//! of magnitude over the tick domain, so binary floating point is never used
//! on the exact path.

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::{One, Zero};
use primitive_types::U256;
use rust_decimal::Decimal;

/// Significant digits kept by truncating operations.
pub const PRECISION: u64 = 100;

/// `2^96` as a decimal.
pub fn q96() -> BigDecimal {
    BigDecimal::new(BigInt::one() << 96, 0)
}

/// `10^exp`, exact for negative exponents too.
pub fn pow10(exp: i64) -> BigDecimal {
    BigDecimal::new(BigInt::one(), -exp)
}

/// Raises `base` to an integer power by repeated squaring.
///
/// Negative exponents invert the positive power. A zero base with a
/// negative exponent yields zero rather than dividing by it.
pub fn powi(base: &BigDecimal, exp: i64) -> BigDecimal {
    let mut result = BigDecimal::one();
    let mut factor = base.clone();
    let mut remaining = exp.unsigned_abs();

    while remaining > 0 {
        if remaining & 1 == 1 {
            result = (&result * &factor).with_prec(PRECISION);
        }
        remaining >>= 1;
        if remaining > 0 {
            factor = (&factor * &factor).with_prec(PRECISION);
        }
    }

    if exp < 0 && !result.is_zero() {
        BigDecimal::one() / result
    } else {
        result
    }
}

/// Lossless `U256` to decimal conversion.
pub fn u256_to_decimal(value: U256) -> BigDecimal {
    // Limbs are little-endian.
    let digits = value
        .0
        .iter()
        .rev()
        .fold(BigInt::zero(), |acc, limb| (acc << 64) + BigInt::from(*limb));
    BigDecimal::new(digits, 0)
}

/// Lossless `u128` to decimal conversion.
pub fn u128_to_decimal(value: u128) -> BigDecimal {
    BigDecimal::new(BigInt::from(value), 0)
}

/// Lossless `rust_decimal` to `BigDecimal` conversion.
pub fn from_rust_decimal(value: Decimal) -> BigDecimal {
    BigDecimal::new(BigInt::from(value.mantissa()), i64::from(value.scale()))
}

/// Rounds a non-negative decimal half-up to the nearest integer.
///
/// Returns `None` for negative input or when the integer does not fit in
/// 256 bits.
pub fn round_half_up_to_u256(value: &BigDecimal) -> Option<U256> {
    if *value < BigDecimal::zero() {
        return None;
    }

    // Truncation toward zero is floor for non-negative values.
    let half = BigDecimal::new(BigInt::from(5), 1);
    let (digits, _) = (value + &half).with_scale(0).into_bigint_and_exponent();
    let (_, limbs) = digits.to_u64_digits();
    if limbs.len() > 4 {
        return None;
    }

    let mut words = [0u64; 4];
    words[..limbs.len()].copy_from_slice(&limbs);
    Some(U256(words))
}
