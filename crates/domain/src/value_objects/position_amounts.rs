use bigdecimal::BigDecimal;
use num_traits::Zero;
use serde::{Deserialize, Serialize};

/// Raw token0/token1 quantities backing a position, in smallest units.
///
/// Values are unrounded; callers decide how to quantise them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionAmounts {
    pub amount0: BigDecimal,
    pub amount1: BigDecimal,
}

impl PositionAmounts {
    pub fn new(amount0: BigDecimal, amount1: BigDecimal) -> Self {
        Self { amount0, amount1 }
    }

    pub fn zero() -> Self {
        Self {
            amount0: BigDecimal::zero(),
            amount1: BigDecimal::zero(),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.amount0.is_zero() && self.amount1.is_zero()
    }
}
