use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A position snapshot as handed over by the data-source collaborators.
///
/// Every field past `id` is optional: upstream snapshots are often partial,
/// and the proximity evaluator reports `insufficient_data` rather than
/// failing when bounds or the current tick are missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackedPosition {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pool: Option<String>,
    #[serde(default)]
    pub tick_lower: Option<i32>,
    #[serde(default)]
    pub tick_upper: Option<i32>,
    /// Exact pool tick. Preferred over `current_price`.
    #[serde(default)]
    pub current_tick: Option<i32>,
    /// Decimal-adjusted token1/token0 price, used to estimate a tick when
    /// `current_tick` is absent.
    #[serde(default)]
    pub current_price: Option<Decimal>,
    #[serde(default)]
    pub decimals0: Option<u8>,
    #[serde(default)]
    pub decimals1: Option<u8>,
}

impl TrackedPosition {
    pub fn new(id: impl Into<String>, tick_lower: i32, tick_upper: i32) -> Self {
        Self {
            id: id.into(),
            tick_lower: Some(tick_lower),
            tick_upper: Some(tick_upper),
            ..Default::default()
        }
    }

    pub fn with_current_tick(mut self, tick: i32) -> Self {
        self.current_tick = Some(tick);
        self
    }

    pub fn with_current_price(mut self, price: Decimal, decimals0: u8, decimals1: u8) -> Self {
        self.current_price = Some(price);
        self.decimals0 = Some(decimals0);
        self.decimals1 = Some(decimals1);
        self
    }
}
