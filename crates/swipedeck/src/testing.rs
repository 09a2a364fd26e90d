//! Animation drivers for exercising a deck without a frame clock.

use std::cell::RefCell;

use swipedeck_animation::AnimationHandle;
use swipedeck_graphics::Offset;

use crate::driver::{AnimationDriver, AnimationMode};
use crate::position::AnimatedPosition;

/// One call made to a test driver.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationRequest {
    pub from: Offset,
    pub target: Offset,
    pub mode: AnimationMode,
}

/// Lands every animation on its target and completes it before returning.
#[derive(Default)]
pub struct ImmediateDriver {
    requests: RefCell<Vec<AnimationRequest>>,
}

impl ImmediateDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> Vec<AnimationRequest> {
        self.requests.borrow().clone()
    }
}

impl AnimationDriver for ImmediateDriver {
    fn animate_to(
        &self,
        position: &AnimatedPosition,
        target: Offset,
        mode: AnimationMode,
        on_complete: Box<dyn FnOnce()>,
    ) -> AnimationHandle {
        self.requests.borrow_mut().push(AnimationRequest {
            from: position.get(),
            target,
            mode,
        });
        position.begin_animation();
        position.set(target);
        on_complete();
        AnimationHandle::finished()
    }
}

struct PendingAnimation {
    position: AnimatedPosition,
    generation: u64,
    target: Offset,
    handle: AnimationHandle,
    on_complete: Box<dyn FnOnce()>,
}

/// Holds animations in flight until the test finishes them.
#[derive(Default)]
pub struct ManualDriver {
    requests: RefCell<Vec<AnimationRequest>>,
    pending: RefCell<Vec<PendingAnimation>>,
}

impl ManualDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> Vec<AnimationRequest> {
        self.requests.borrow().clone()
    }

    /// Number of animations still running.
    pub fn in_flight(&self) -> usize {
        self.pending
            .borrow()
            .iter()
            .filter(|pending| pending.handle.is_active())
            .count()
    }

    /// Lands every running animation on its target and completes it, in the
    /// order they were started. Cancelled or superseded ones are dropped.
    /// Returns how many completed.
    pub fn finish_all(&self) -> usize {
        let pending = std::mem::take(&mut *self.pending.borrow_mut());
        let mut finished = 0;
        for animation in pending {
            if !animation.handle.is_active() {
                continue;
            }
            animation.handle.mark_finished();
            if animation.position.set_from(animation.generation, animation.target) {
                (animation.on_complete)();
                finished += 1;
            }
        }
        finished
    }
}

impl AnimationDriver for ManualDriver {
    fn animate_to(
        &self,
        position: &AnimatedPosition,
        target: Offset,
        mode: AnimationMode,
        on_complete: Box<dyn FnOnce()>,
    ) -> AnimationHandle {
        self.requests.borrow_mut().push(AnimationRequest {
            from: position.get(),
            target,
            mode,
        });
        let generation = position.begin_animation();
        let handle = AnimationHandle::new(|| {});
        position.attach(generation, &handle);
        self.pending.borrow_mut().push(PendingAnimation {
            position: position.clone(),
            generation,
            target,
            handle: handle.clone(),
            on_complete,
        });
        handle
    }
}
