//! Pointer input and gesture detection for SwipeDeck

pub mod input;

pub use input::gestures::pan::{GestureHandler, PanEvent, PanGestureDetector};
pub use input::types::{PointerEvent, PointerEventKind, PointerId, PointerPhase};
