use crate::value_objects::price::Price;
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

/// Prices at both bounds of a position and the distance between them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub price_lower: Price,
    pub price_upper: Price,
    pub range_width: BigDecimal,
}

impl PriceRange {
    pub fn new(lower: Price, upper: Price) -> Self {
        let range_width = &upper.value - &lower.value;
        Self {
            price_lower: lower,
            price_upper: upper,
            range_width,
        }
    }

    pub fn contains(&self, price: &Price) -> bool {
        price.value >= self.price_lower.value && price.value <= self.price_upper.value
    }
}
