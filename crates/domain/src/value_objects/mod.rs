pub mod position_amounts;
pub mod price;
pub mod price_range;
pub mod tick_range;

pub use position_amounts::PositionAmounts;
pub use price::Price;
pub use price_range::PriceRange;
pub use tick_range::PositionRange;
