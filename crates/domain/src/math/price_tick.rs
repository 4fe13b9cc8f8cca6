//! Approximate inverse of the tick to price conversion.
//!
//! Uses `f64` logarithms and may disagree with the exact engine by a tick
//! near tick boundaries. Callers that know the pool's current tick should
//! supply it instead of estimating one from a price.

use tracing::warn;

const TICK_BASE: f64 = 1.0001;

/// Estimates the tick for a decimal-adjusted price.
/// tick = round(log_1.0001(price / 10^(decimals0 - decimals1)))
///
/// Returns `None` for non-positive or non-finite prices and for results
/// outside the `i32` range.
pub fn estimate_tick_from_price(price: f64, decimals0: u8, decimals1: u8) -> Option<i32> {
    let exponent = i32::from(decimals0) - i32::from(decimals1);
    let adjusted_price = price / 10f64.powi(exponent);

    if !adjusted_price.is_finite() || adjusted_price <= 0.0 {
        warn!(price, decimals0, decimals1, "Cannot estimate tick from price");
        return None;
    }

    let tick = (adjusted_price.ln() / TICK_BASE.ln()).round();
    if tick < f64::from(i32::MIN) || tick > f64::from(i32::MAX) {
        warn!(price, tick, "Estimated tick outside i32 range");
        return None;
    }
    Some(tick as i32)
}
