use swipedeck_animation::{
    Animatable, AnimationHandle, AnimationSpec, AnimationType, Easing, SpringSpec,
};
use swipedeck_graphics::Offset;
use swipedeck_runtime::FrameClock;

use crate::position::AnimatedPosition;

/// How a driver moves a position to its target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnimationMode {
    /// Finite-duration interpolation.
    Timing { duration_millis: u64, easing: Easing },
    /// Oscillating spring with no fixed duration.
    Spring(SpringSpec),
}

impl From<AnimationMode> for AnimationType {
    fn from(mode: AnimationMode) -> Self {
        match mode {
            AnimationMode::Timing {
                duration_millis,
                easing,
            } => AnimationType::Tween(AnimationSpec::tween(duration_millis, easing)),
            AnimationMode::Spring(spec) => AnimationType::Spring(spec),
        }
    }
}

/// Moves an [`AnimatedPosition`] toward a target.
///
/// Implementations must supersede any animation already running on the same
/// position (see [`AnimatedPosition::begin_animation`]), and call
/// `on_complete` exactly once after the target has been written, unless the
/// animation is cancelled or superseded first. Calling `on_complete` before
/// returning is allowed.
pub trait AnimationDriver {
    fn animate_to(
        &self,
        position: &AnimatedPosition,
        target: Offset,
        mode: AnimationMode,
        on_complete: Box<dyn FnOnce()>,
    ) -> AnimationHandle;
}

/// Runs animations on a frame clock, one frame at a time.
///
/// Animations need the clock's [`Runtime`](swipedeck_runtime::Runtime) to
/// keep drawing frames. If it is dropped, running animations stop where they
/// are and never complete, so a deck mid-animation stays `Animating` until
/// its data is replaced.
#[derive(Clone)]
pub struct FrameClockDriver {
    clock: FrameClock,
}

impl FrameClockDriver {
    pub fn new(clock: FrameClock) -> Self {
        Self { clock }
    }
}

impl AnimationDriver for FrameClockDriver {
    fn animate_to(
        &self,
        position: &AnimatedPosition,
        target: Offset,
        mode: AnimationMode,
        on_complete: Box<dyn FnOnce()>,
    ) -> AnimationHandle {
        let generation = position.begin_animation();
        let animatable = Animatable::new(position.get(), self.clock.clone());
        {
            let sink = position.clone();
            animatable.set_listener(move |value| {
                sink.set_from(generation, *value);
            });
        }

        // The completion closure owns the animatable until the animation ends.
        let keep_alive = animatable.clone();
        let guard = position.clone();
        let handle = animatable.animate_to(target, mode.into(), move || {
            drop(keep_alive);
            if guard.is_current(generation) {
                on_complete();
            }
        });
        log::trace!("driving position to ({:.1}, {:.1}) with {mode:?}", target.x, target.y);
        position.attach(generation, &handle);
        handle
    }
}

#[cfg(test)]
#[path = "tests/driver_tests.rs"]
mod tests;
