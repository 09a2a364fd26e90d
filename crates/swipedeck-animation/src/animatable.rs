use std::cell::RefCell;
use std::rc::{Rc, Weak};

use swipedeck_runtime::{FrameCallbackRegistration, FrameClock};

use crate::handle::AnimationHandle;
use crate::spec::AnimationType;
use crate::vector::SpringVector;

/// Length of one spring integration substep, in seconds.
const SPRING_TIMESTEP: f32 = 0.016;

type Listener<T> = Rc<dyn Fn(&T)>;

/// A value that animates toward targets on a frame clock.
///
/// Clones share the same underlying value. Each call to
/// [`Animatable::animate_to`] supersedes the animation in flight: the old one
/// stops writing and its completion callback is dropped unrun.
pub struct Animatable<T: SpringVector + 'static> {
    inner: Rc<RefCell<AnimatableInner<T>>>,
}

struct AnimatableInner<T: SpringVector + 'static> {
    clock: FrameClock,
    current: T,
    velocity: f32,
    start: T,
    target: T,
    animation_type: AnimationType,
    start_time_nanos: Option<u64>,
    last_frame_nanos: Option<u64>,
    registration: Option<FrameCallbackRegistration>,
    run: Option<AnimationHandle>,
    on_end: Option<Box<dyn FnOnce()>>,
    listener: Option<Listener<T>>,
}

impl<T: SpringVector + 'static> AnimatableInner<T> {
    /// Drops the frame callback and the completion of whatever is running.
    fn stop(&mut self) -> Option<AnimationHandle> {
        self.registration = None;
        self.on_end = None;
        self.start_time_nanos = None;
        self.last_frame_nanos = None;
        self.velocity = 0.0;
        self.run.take()
    }

    fn settle(&mut self) {
        self.current = self.target.clone();
        self.start = self.target.clone();
        self.start_time_nanos = None;
        self.last_frame_nanos = None;
        self.velocity = 0.0;
    }
}

/// The animation's claim on its next frame.
///
/// A frame callback is only dropped without running when its runtime is gone
/// (cancellation happens while the animatable is already stopping), so an
/// armed drop abandons the animation: its completion is released unrun.
struct PendingFrame<T: SpringVector + 'static> {
    inner: Option<Weak<RefCell<AnimatableInner<T>>>>,
}

impl<T: SpringVector + 'static> PendingFrame<T> {
    fn disarm(mut self) -> Option<Weak<RefCell<AnimatableInner<T>>>> {
        self.inner.take()
    }
}

impl<T: SpringVector + 'static> Drop for PendingFrame<T> {
    fn drop(&mut self) {
        let Some(strong) = self.inner.take().and_then(|weak| weak.upgrade()) else {
            return;
        };
        let (run, on_end) = {
            let Ok(mut inner) = strong.try_borrow_mut() else {
                return;
            };
            let on_end = inner.on_end.take();
            (inner.stop(), on_end)
        };
        if let Some(run) = run {
            log::debug!("frame clock went away; abandoning animation");
            run.mark_finished();
        }
        drop(on_end);
    }
}

enum FrameOutcome {
    Continue,
    Finished,
}

impl<T: SpringVector + 'static> Animatable<T> {
    pub fn new(initial: T, clock: FrameClock) -> Self {
        let inner = AnimatableInner {
            clock,
            current: initial.clone(),
            velocity: 0.0,
            start: initial.clone(),
            target: initial,
            animation_type: AnimationType::default(),
            start_time_nanos: None,
            last_frame_nanos: None,
            registration: None,
            run: None,
            on_end: None,
            listener: None,
        };
        Self {
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    /// Called with every value written by an animation or a snap.
    pub fn set_listener(&self, listener: impl Fn(&T) + 'static) {
        self.inner.borrow_mut().listener = Some(Rc::new(listener));
    }

    pub fn value(&self) -> T {
        self.inner.borrow().current.clone()
    }

    pub fn target(&self) -> T {
        self.inner.borrow().target.clone()
    }

    pub fn animation_type(&self) -> AnimationType {
        self.inner.borrow().animation_type
    }

    pub fn is_running(&self) -> bool {
        self.inner
            .borrow()
            .run
            .as_ref()
            .is_some_and(AnimationHandle::is_active)
    }

    /// Animate from the current value to `target`.
    ///
    /// `on_end` runs once, after the final value has been written, unless the
    /// animation is cancelled or superseded first.
    pub fn animate_to(
        &self,
        target: T,
        animation: AnimationType,
        on_end: impl FnOnce() + 'static,
    ) -> AnimationHandle {
        let weak = Rc::downgrade(&self.inner);
        let handle = AnimationHandle::new(move || {
            if let Some(strong) = weak.upgrade() {
                if let Ok(mut inner) = strong.try_borrow_mut() {
                    inner.stop();
                }
            }
        });

        let superseded = {
            let mut inner = self.inner.borrow_mut();
            let superseded = inner.stop();
            inner.start = inner.current.clone();
            inner.target = target;
            inner.animation_type = animation;
            inner.run = Some(handle.clone());
            inner.on_end = Some(Box::new(on_end));
            superseded
        };
        if let Some(previous) = superseded {
            log::trace!("animation superseded by a new target");
            previous.mark_finished();
        }

        Self::schedule_frame(&self.inner);
        handle
    }

    /// Jump to `value` immediately, cancelling any running animation.
    pub fn snap_to(&self, value: T) {
        let (superseded, listener) = {
            let mut inner = self.inner.borrow_mut();
            let superseded = inner.stop();
            inner.target = value.clone();
            inner.settle();
            (superseded, inner.listener.clone())
        };
        if let Some(previous) = superseded {
            previous.mark_finished();
        }
        if let Some(listener) = listener {
            listener(&value);
        }
    }

    fn schedule_frame(this: &Rc<RefCell<AnimatableInner<T>>>) {
        let clock = {
            let inner = this.borrow();
            if inner.registration.is_some() {
                return;
            }
            inner.clock.clone()
        };
        let pending = PendingFrame {
            inner: Some(Rc::downgrade(this)),
        };
        let registration = clock.with_frame_nanos(move |time| {
            if let Some(weak) = pending.disarm() {
                Self::on_frame(&weak, time);
            }
        });
        this.borrow_mut().registration = Some(registration);
    }

    fn on_frame(weak: &Weak<RefCell<AnimatableInner<T>>>, frame_time_nanos: u64) {
        let Some(this) = weak.upgrade() else {
            return;
        };

        let (outcome, value, listener, stepped_run) = {
            let mut inner = this.borrow_mut();
            inner.registration = None;
            let outcome = match inner.animation_type {
                AnimationType::Tween(_) => Self::step_tween(&mut inner, frame_time_nanos),
                AnimationType::Spring(_) => Self::step_spring(&mut inner, frame_time_nanos),
            };
            let value = inner.current.clone();
            (outcome, value, inner.listener.clone(), inner.run.clone())
        };

        if let Some(listener) = listener {
            listener(&value);
        }

        match outcome {
            FrameOutcome::Continue => Self::schedule_frame(&this),
            FrameOutcome::Finished => {
                // The listener may already have started a newer animation.
                let (run, on_end) = {
                    let mut inner = this.borrow_mut();
                    let unchanged = match (&inner.run, &stepped_run) {
                        (Some(current), Some(stepped)) => current.same_run(stepped),
                        _ => false,
                    };
                    if !unchanged {
                        return;
                    }
                    (inner.run.take(), inner.on_end.take())
                };
                if let Some(run) = run {
                    run.mark_finished();
                }
                if let Some(on_end) = on_end {
                    on_end();
                }
            }
        }
    }

    fn step_tween(inner: &mut AnimatableInner<T>, frame_time_nanos: u64) -> FrameOutcome {
        let AnimationType::Tween(spec) = inner.animation_type else {
            return FrameOutcome::Finished;
        };
        let start_time = *inner.start_time_nanos.get_or_insert(frame_time_nanos);
        let elapsed_nanos = frame_time_nanos.saturating_sub(start_time);
        let delay_nanos = spec.delay_millis * 1_000_000;
        if elapsed_nanos < delay_nanos {
            return FrameOutcome::Continue;
        }

        let duration_nanos = (spec.duration_millis * 1_000_000).max(1);
        let linear_progress =
            ((elapsed_nanos - delay_nanos) as f32 / duration_nanos as f32).clamp(0.0, 1.0);
        if linear_progress >= 1.0 {
            inner.settle();
            return FrameOutcome::Finished;
        }

        let progress = spec.easing.transform(linear_progress);
        inner.current = inner.start.lerp(&inner.target, progress);
        log::trace!("tween progress {linear_progress:.3}");
        FrameOutcome::Continue
    }

    fn step_spring(inner: &mut AnimatableInner<T>, frame_time_nanos: u64) -> FrameOutcome {
        let AnimationType::Spring(spec) = inner.animation_type else {
            return FrameOutcome::Finished;
        };
        let last_frame = inner.last_frame_nanos.replace(frame_time_nanos);
        let Some(last_frame) = last_frame else {
            // The first frame only anchors the clock.
            return FrameOutcome::Continue;
        };
        let dt = frame_time_nanos.saturating_sub(last_frame) as f32 / 1_000_000_000.0;
        if dt == 0.0 {
            return FrameOutcome::Continue;
        }

        // Damped harmonic oscillator on progress (target at 1.0), semi-implicit Euler.
        let stiffness = spec.stiffness;
        let damping = 2.0 * spec.damping_ratio * stiffness.sqrt();
        let mut simulated = 0.0f32;
        while simulated < dt {
            let step = SPRING_TIMESTEP.min(dt - simulated);
            let progress = T::spring_progress(&inner.start, &inner.target, &inner.current);
            let displacement = progress - 1.0;
            let force = -stiffness * displacement - damping * inner.velocity;
            inner.velocity += force * step;
            let next = (progress + inner.velocity * step).clamp(0.0, 2.0);
            inner.current = inner.start.lerp(&inner.target, next);
            simulated += step;
        }

        let at_rest = inner.velocity.abs() < spec.velocity_threshold;
        let near_target = T::is_near_target(&inner.current, &inner.target, spec.position_threshold);
        if at_rest && near_target {
            inner.settle();
            FrameOutcome::Finished
        } else {
            FrameOutcome::Continue
        }
    }
}

impl<T: SpringVector + 'static> Clone for Animatable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
