//! Concentrated-liquidity position math and range monitoring.
//!
//! This crate provides the pure core behind position reports:
//! - Exact tick, sqrtPriceX96 and decimal price conversions
//! - Token amounts backing a liquidity position
//! - Position valuation in USD
//! - Range proximity classification for alerting
//!
//! Nothing here performs I/O or holds state; every function can be called
//! concurrently across positions.

/// Position snapshots.
pub mod entities;
/// Status enums.
pub mod enums;
/// Fail-fast error type.
pub mod error;
/// Tick, price and liquidity math.
pub mod math;
/// Range proximity evaluation.
pub mod proximity;
/// Position valuation.
pub mod valuation;
/// Value types.
pub mod value_objects;

/// Prelude module for convenient imports.
pub mod prelude;

pub use error::MathError;
