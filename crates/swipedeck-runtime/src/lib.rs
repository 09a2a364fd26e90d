//! Frame clock runtime for SwipeDeck
//!
//! Everything here lives on one UI thread. Frame callbacks are one-shot: a
//! callback registered through [`FrameClock::with_frame_nanos`] runs on the
//! next [`Runtime::drain_frame_callbacks`] and is then forgotten.

mod frame_clock;
mod runtime;

pub use frame_clock::{FrameCallbackRegistration, FrameClock};
pub use runtime::{FrameCallbackId, Runtime, RuntimeHandle};
