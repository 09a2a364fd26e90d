//! SwipeDeck: a stack of cards whose top card follows a drag and is either
//! flung off-screen (left or right) or sprung back to rest on release.
//!
//! The deck is a state machine over one animated [`Offset`]. Gestures arrive
//! through [`GestureHandler`], animations run through an [`AnimationDriver`],
//! and [`SwipeDeck::render`] turns the current state into paint-ordered
//! layers for whatever renders them.

mod config;
mod deck;
mod driver;
mod gesture;
mod position;
mod props;
mod stack;
mod style;

#[cfg(any(test, feature = "test-helpers"))]
pub mod testing;

pub use config::{ConfigError, DeckConfig};
pub use deck::SwipeDeck;
pub use driver::{AnimationDriver, AnimationMode, FrameClockDriver};
pub use gesture::{DeckPhase, SwipeDirection, SwipeOutcome};
pub use position::AnimatedPosition;
pub use props::DeckProps;
pub use stack::{CardLayer, CardPlacement, DeckView};
pub use style::{card_style, CardStyle};

pub use swipedeck_animation::{AnimationHandle, Easing, SpringSpec};
pub use swipedeck_foundation::{GestureHandler, PanGestureDetector, PointerEvent};
pub use swipedeck_graphics::{Degrees, Offset};
pub use swipedeck_runtime::{FrameClock, Runtime};

pub mod prelude {
    pub use crate::{
        DeckConfig, DeckProps, DeckView, GestureHandler, SwipeDeck, SwipeDirection, SwipeOutcome,
    };
}
