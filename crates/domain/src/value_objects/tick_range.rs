use crate::error::MathError;
use crate::math::tick_math::is_position_in_range;
use serde::{Deserialize, Serialize};

/// Tick bounds of a liquidity position, `tick_lower < tick_upper`.
///
/// [`calculate_price_range`](crate::math::tick_math::calculate_price_range)
/// goes through this type to reject empty and inverted ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PositionRange {
    tick_lower: i32,
    tick_upper: i32,
}

impl PositionRange {
    /// Builds a range, rejecting empty or inverted bounds.
    pub fn new(tick_lower: i32, tick_upper: i32) -> Result<Self, MathError> {
        if tick_lower >= tick_upper {
            return Err(MathError::InvalidRange {
                lower: tick_lower,
                upper: tick_upper,
            });
        }
        Ok(Self {
            tick_lower,
            tick_upper,
        })
    }

    pub fn tick_lower(&self) -> i32 {
        self.tick_lower
    }

    pub fn tick_upper(&self) -> i32 {
        self.tick_upper
    }

    /// Width of the range in ticks.
    pub fn width(&self) -> i64 {
        i64::from(self.tick_upper) - i64::from(self.tick_lower)
    }

    /// Inclusive at both ends.
    pub fn contains(&self, tick: i32) -> bool {
        is_position_in_range(tick, self.tick_lower, self.tick_upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_inverted_and_empty_ranges() {
        assert_eq!(
            PositionRange::new(10, 10),
            Err(MathError::InvalidRange {
                lower: 10,
                upper: 10
            })
        );
        assert!(PositionRange::new(20, -20).is_err());
    }

    #[test]
    fn test_contains_is_inclusive() {
        let range = PositionRange::new(-1000, 1000).unwrap();
        assert_eq!(range.width(), 2000);
        assert!(range.contains(-1000));
        assert!(range.contains(1000));
        assert!(!range.contains(1001));
    }
}
