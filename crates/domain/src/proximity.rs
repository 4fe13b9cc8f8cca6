//! Range proximity evaluation for alerting.
//!
//! Classifies how close a position's current tick sits to the bounds of its
//! range, expressed as the percentage of the range width separating it from
//! each edge.

use crate::entities::TrackedPosition;
use crate::enums::{ProximityStatus, RangeSide};
use crate::error::MathError;
use crate::math::price_tick::estimate_tick_from_price;
use crate::math::tick_math::is_position_in_range;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Distance to an edge, in percent of the range width, at or under which a
/// bound counts as approached.
pub const DEFAULT_WARNING_THRESHOLD_PCT: Decimal = Decimal::from_parts(5, 0, 0, false, 0);

/// Result of a proximity evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProximityAssessment {
    pub status: ProximityStatus,
    /// Set when `status` is `out_of_range`.
    pub range_side: Option<RangeSide>,
    /// Distance from the lower bound, percent of range width, 2 dp.
    pub distance_to_lower_pct: Option<Decimal>,
    /// Distance from the upper bound, percent of range width, 2 dp.
    pub distance_to_upper_pct: Option<Decimal>,
    pub warning_threshold_reached: bool,
    pub approaching_lower: bool,
    pub approaching_upper: bool,
    pub total_range_ticks: Option<i64>,
    pub current_tick: Option<i32>,
    pub tick_lower: Option<i32>,
    pub tick_upper: Option<i32>,
    pub error: Option<String>,
}

impl ProximityAssessment {
    fn empty(status: ProximityStatus) -> Self {
        Self {
            status,
            range_side: None,
            distance_to_lower_pct: None,
            distance_to_upper_pct: None,
            warning_threshold_reached: false,
            approaching_lower: false,
            approaching_upper: false,
            total_range_ticks: None,
            current_tick: None,
            tick_lower: None,
            tick_upper: None,
            error: None,
        }
    }

    fn insufficient_data() -> Self {
        Self::empty(ProximityStatus::InsufficientData)
    }

    fn out_of_range(side: RangeSide) -> Self {
        Self {
            range_side: Some(side),
            ..Self::empty(ProximityStatus::OutOfRange)
        }
    }

    fn failed(detail: String) -> Self {
        Self {
            error: Some(detail),
            ..Self::empty(ProximityStatus::Error)
        }
    }
}

/// A position flagged by [`filter_positions_approaching_bounds`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlaggedPosition {
    pub position: TrackedPosition,
    pub proximity: ProximityAssessment,
}

/// Evaluates `position` against the default 5% threshold.
///
/// See [`calculate_range_proximity_with_threshold`].
pub fn calculate_range_proximity(position: &TrackedPosition) -> ProximityAssessment {
    calculate_range_proximity_with_threshold(position, DEFAULT_WARNING_THRESHOLD_PCT)
}

/// Evaluates how close `position` sits to its range bounds.
///
/// The current tick is taken from `current_tick` when present. Otherwise it
/// is estimated from `current_price` with the approximate log inverse, which
/// can be off by one tick near tick boundaries; supply the exact tick
/// whenever the pool state has one.
///
/// Never fails: missing inputs yield `insufficient_data` and internal
/// failures yield `error` with the detail attached.
pub fn calculate_range_proximity_with_threshold(
    position: &TrackedPosition,
    threshold_pct: Decimal,
) -> ProximityAssessment {
    let (Some(tick_lower), Some(tick_upper)) = (position.tick_lower, position.tick_upper) else {
        return ProximityAssessment::insufficient_data();
    };
    let Some(current_tick) = resolve_current_tick(position) else {
        return ProximityAssessment::insufficient_data();
    };

    if !is_position_in_range(current_tick, tick_lower, tick_upper) {
        let side = if current_tick < tick_lower {
            RangeSide::BelowRange
        } else {
            RangeSide::AboveRange
        };
        debug!(id = %position.id, %side, "Position out of range");
        return ProximityAssessment::out_of_range(side);
    }

    match assess_in_range(current_tick, tick_lower, tick_upper, threshold_pct) {
        Ok(assessment) => {
            debug!(id = %position.id, status = %assessment.status, "Range proximity evaluated");
            assessment
        }
        Err(e) => {
            warn!(id = %position.id, error = %e, "Error calculating range proximity");
            ProximityAssessment::failed(e.to_string())
        }
    }
}

fn resolve_current_tick(position: &TrackedPosition) -> Option<i32> {
    if position.current_tick.is_some() {
        return position.current_tick;
    }

    let price = position.current_price.filter(|p| !p.is_zero())?;
    let (decimals0, decimals1) = (position.decimals0?, position.decimals1?);
    estimate_tick_from_price(price.to_f64()?, decimals0, decimals1)
}

fn assess_in_range(
    current_tick: i32,
    tick_lower: i32,
    tick_upper: i32,
    threshold_pct: Decimal,
) -> Result<ProximityAssessment, MathError> {
    let total_range = i64::from(tick_upper) - i64::from(tick_lower);
    let from_lower = i64::from(current_tick) - i64::from(tick_lower);

    let distance_to_lower = Decimal::from(from_lower)
        .checked_div(Decimal::from(total_range))
        .ok_or(MathError::Arithmetic("zero-width tick range"))?
        .checked_mul(Decimal::ONE_HUNDRED)
        .ok_or(MathError::Arithmetic("distance overflow"))?;
    let distance_to_upper = Decimal::ONE_HUNDRED - distance_to_lower;

    let approaching_lower = distance_to_lower <= threshold_pct;
    let approaching_upper = distance_to_upper <= threshold_pct;

    let status = match (approaching_lower, approaching_upper) {
        (true, true) => ProximityStatus::NarrowRangeWarning,
        (true, false) => ProximityStatus::ApproachingLowerBound,
        (false, true) => ProximityStatus::ApproachingUpperBound,
        (false, false) => ProximityStatus::Safe,
    };

    Ok(ProximityAssessment {
        status,
        range_side: None,
        distance_to_lower_pct: Some(distance_to_lower.round_dp(2).normalize()),
        distance_to_upper_pct: Some(distance_to_upper.round_dp(2).normalize()),
        warning_threshold_reached: approaching_lower || approaching_upper,
        approaching_lower,
        approaching_upper,
        total_range_ticks: Some(total_range),
        current_tick: Some(current_tick),
        tick_lower: Some(tick_lower),
        tick_upper: Some(tick_upper),
        error: None,
    })
}

/// Keeps the positions that reached `threshold_pct` of either bound, each
/// annotated with its assessment. Input order is preserved.
pub fn filter_positions_approaching_bounds(
    positions: &[TrackedPosition],
    threshold_pct: Decimal,
) -> Vec<FlaggedPosition> {
    positions
        .iter()
        .filter_map(|position| {
            let proximity = calculate_range_proximity_with_threshold(position, threshold_pct);
            proximity.warning_threshold_reached.then(|| FlaggedPosition {
                position: position.clone(),
                proximity,
            })
        })
        .collect()
}

/// Renders a one-line alert for an assessment.
pub fn format_proximity_warning(assessment: &ProximityAssessment) -> String {
    let lower = assessment.distance_to_lower_pct.unwrap_or_default();
    let upper = assessment.distance_to_upper_pct.unwrap_or_default();

    match assessment.status {
        ProximityStatus::ApproachingLowerBound => {
            format!("⚠️ Approaching lower bound ({lower:.1}% from edge)")
        }
        ProximityStatus::ApproachingUpperBound => {
            format!("⚠️ Approaching upper bound ({upper:.1}% from edge)")
        }
        ProximityStatus::NarrowRangeWarning => {
            format!("⚠️ Very narrow position (Lower: {lower:.1}%, Upper: {upper:.1}%)")
        }
        _ => "⚠️ Range proximity warning".to_string(),
    }
}
