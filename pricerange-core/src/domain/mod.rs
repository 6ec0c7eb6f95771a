//! Domain types for the range slider

pub mod bounds;
pub mod handle;
pub mod value;

pub use bounds::{BoundsError, SliderBounds};
pub use handle::Handle;
pub use value::RangeValue;
