pub mod position;

pub use position::TrackedPosition;
