use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a position's distance to its range bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProximityStatus {
    Safe,
    ApproachingLowerBound,
    ApproachingUpperBound,
    /// Within the threshold of both bounds at once.
    NarrowRangeWarning,
    OutOfRange,
    InsufficientData,
    Error,
}

impl ProximityStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Safe => "safe",
            Self::ApproachingLowerBound => "approaching_lower_bound",
            Self::ApproachingUpperBound => "approaching_upper_bound",
            Self::NarrowRangeWarning => "narrow_range_warning",
            Self::OutOfRange => "out_of_range",
            Self::InsufficientData => "insufficient_data",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for ProximityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which side of its range an out-of-range position sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeSide {
    BelowRange,
    AboveRange,
}

impl fmt::Display for RangeSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BelowRange => f.write_str("below_range"),
            Self::AboveRange => f.write_str("above_range"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PositionStatus {
    /// Earning fees: the current tick is inside the range.
    Active,
    OutOfRange,
    /// No liquidity left in the position.
    Inactive,
}

impl fmt::Display for PositionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => f.write_str("active"),
            Self::OutOfRange => f.write_str("out_of_range"),
            Self::Inactive => f.write_str("inactive"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_tags_match_serde() {
        for status in [
            ProximityStatus::Safe,
            ProximityStatus::ApproachingLowerBound,
            ProximityStatus::ApproachingUpperBound,
            ProximityStatus::NarrowRangeWarning,
            ProximityStatus::OutOfRange,
            ProximityStatus::InsufficientData,
            ProximityStatus::Error,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
        assert_eq!(
            serde_json::to_string(&RangeSide::BelowRange).unwrap(),
            "\"below_range\""
        );
    }
}
