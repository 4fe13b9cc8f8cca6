use bigdecimal::BigDecimal;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Decimal-adjusted token1/token0 price.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Price {
    pub value: BigDecimal,
}

impl Price {
    pub fn new(value: BigDecimal) -> Self {
        Self { value }
    }

    /// Price of token0 in token1 units. Zero stays zero.
    pub fn invert(&self) -> Self {
        if self.value.is_zero() {
            return Self {
                value: BigDecimal::zero(),
            };
        }
        Self {
            value: BigDecimal::one() / &self.value,
        }
    }
}

impl From<BigDecimal> for Price {
    fn from(value: BigDecimal) -> Self {
        Self { value }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value.normalized())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_invert() {
        let price = Price::new(BigDecimal::from(4));
        assert_eq!(price.invert().value, BigDecimal::from_str("0.25").unwrap());
        assert_eq!(price.invert().invert(), price);
    }

    #[test]
    fn test_invert_zero_stays_zero() {
        assert!(Price::new(BigDecimal::zero()).invert().value.is_zero());
    }

    #[test]
    fn test_display_is_normalized() {
        let price = Price::new(BigDecimal::from_str("1.2500").unwrap());
        assert_eq!(price.to_string(), "1.25");
    }
}
