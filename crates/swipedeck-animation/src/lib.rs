//! Animation system for SwipeDeck
//!
//! Provides time-based animations with easing curves and spring physics,
//! driven by a [`swipedeck_runtime::FrameClock`].

mod animatable;
mod easing;
mod handle;
mod spec;
mod vector;

pub use animatable::Animatable;
pub use easing::Easing;
pub use handle::AnimationHandle;
pub use spec::{AnimationSpec, AnimationType, SpringSpec};
pub use vector::{Lerp, SpringVector};
