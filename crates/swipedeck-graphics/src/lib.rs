//! Pure math for SwipeDeck
//!
//! Geometry primitives, angle units and piecewise-linear interpolation shared
//! by the animation engine, the gesture layer and the deck component.

mod geometry;
mod interpolate;
mod unit;

pub use geometry::*;
pub use interpolate::*;
pub use unit::*;

pub mod prelude {
    pub use crate::geometry::{Offset, Point, Rect, Size};
    pub use crate::interpolate::interpolate;
    pub use crate::unit::Degrees;
}
