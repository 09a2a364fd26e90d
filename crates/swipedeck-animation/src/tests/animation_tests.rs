use super::*;

use crate::{AnimationSpec, Easing, SpringSpec};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use swipedeck_graphics::Offset;
use swipedeck_runtime::Runtime;

const FRAME_NANOS: u64 = 16_666_667;

fn run_frames(runtime: &Runtime, frame_time: &mut u64, max_frames: usize) {
    for _ in 0..max_frames {
        if !runtime.needs_frame() {
            break;
        }
        *frame_time += FRAME_NANOS;
        runtime.drain_frame_callbacks(*frame_time);
    }
}

#[test]
fn tween_interpolates_over_time_and_lands_on_target() {
    let runtime = Runtime::new();
    let animatable = Animatable::new(0.0f32, runtime.frame_clock());
    let samples = Rc::new(RefCell::new(Vec::new()));
    {
        let samples = Rc::clone(&samples);
        animatable.set_listener(move |value| samples.borrow_mut().push(*value));
    }
    let ended = Rc::new(Cell::new(0));

    let handle = {
        let ended = Rc::clone(&ended);
        animatable.animate_to(
            1.0,
            AnimationType::Tween(AnimationSpec::linear(100)),
            move || ended.set(ended.get() + 1),
        )
    };
    assert!(handle.is_active());
    assert!(animatable.is_running());

    let mut frame_time = 0;
    run_frames(&runtime, &mut frame_time, 32);

    let samples = samples.borrow();
    assert!(
        samples.iter().any(|value| *value > 0.0 && *value < 1.0),
        "animation should report intermediate values"
    );
    assert_eq!(*samples.last().expect("at least one frame"), 1.0);
    assert_eq!(animatable.value(), 1.0);
    assert_eq!(ended.get(), 1);
    assert!(!handle.is_active());
    assert!(!animatable.is_running());
    assert!(!runtime.needs_frame());
}

#[test]
fn tween_honours_delay() {
    let runtime = Runtime::new();
    let animatable = Animatable::new(0.0f32, runtime.frame_clock());
    let _handle = animatable.animate_to(
        10.0,
        AnimationType::Tween(AnimationSpec::linear(50).with_delay(100)),
        || {},
    );

    let mut frame_time = 0;
    // First frame anchors the start time, the next few sit inside the delay.
    run_frames(&runtime, &mut frame_time, 5);
    assert_eq!(animatable.value(), 0.0);

    run_frames(&runtime, &mut frame_time, 32);
    assert_eq!(animatable.value(), 10.0);
}

#[test]
fn spring_on_offsets_settles_exactly_on_target() {
    let runtime = Runtime::new();
    let animatable = Animatable::new(Offset::new(80.0, -20.0), runtime.frame_clock());
    let ended = Rc::new(Cell::new(false));
    let max_overshoot = Rc::new(Cell::new(0.0f32));
    {
        let max_overshoot = Rc::clone(&max_overshoot);
        animatable.set_listener(move |value: &Offset| {
            if value.x < 0.0 {
                max_overshoot.set(max_overshoot.get().max(-value.x));
            }
        });
    }

    {
        let ended = Rc::clone(&ended);
        animatable.animate_to(
            Offset::ZERO,
            AnimationType::Spring(SpringSpec::bouncy()),
            move || ended.set(true),
        );
    }

    let mut frame_time = 0;
    run_frames(&runtime, &mut frame_time, 600);

    assert!(ended.get(), "spring should settle");
    assert_eq!(animatable.value(), Offset::ZERO);
    assert!(
        max_overshoot.get() > 0.0,
        "an under-damped spring should overshoot the origin"
    );
}

#[test]
fn spring_to_current_value_finishes_immediately() {
    let runtime = Runtime::new();
    let animatable = Animatable::new(5.0f32, runtime.frame_clock());
    let ended = Rc::new(Cell::new(false));
    {
        let ended = Rc::clone(&ended);
        animatable.animate_to(
            5.0,
            AnimationType::Spring(SpringSpec::default()),
            move || ended.set(true),
        );
    }

    let mut frame_time = 0;
    run_frames(&runtime, &mut frame_time, 3);
    assert!(ended.get());
}

#[test]
fn superseded_animation_never_completes() {
    let runtime = Runtime::new();
    let animatable = Animatable::new(0.0f32, runtime.frame_clock());
    let completions = Rc::new(RefCell::new(Vec::new()));

    let first = {
        let completions = Rc::clone(&completions);
        animatable.animate_to(
            100.0,
            AnimationType::Tween(AnimationSpec::linear(200)),
            move || completions.borrow_mut().push("first"),
        )
    };

    let mut frame_time = 0;
    run_frames(&runtime, &mut frame_time, 3);
    let midway = animatable.value();
    assert!(midway > 0.0 && midway < 100.0);

    {
        let completions = Rc::clone(&completions);
        animatable.animate_to(
            -50.0,
            AnimationType::Tween(AnimationSpec::linear(50)),
            move || completions.borrow_mut().push("second"),
        );
    }
    assert!(!first.is_active());

    run_frames(&runtime, &mut frame_time, 32);
    assert_eq!(completions.borrow().as_slice(), &["second"]);
    assert_eq!(animatable.value(), -50.0);
}

#[test]
fn cancel_stops_where_it_is() {
    let runtime = Runtime::new();
    let animatable = Animatable::new(0.0f32, runtime.frame_clock());
    let ended = Rc::new(Cell::new(false));
    let handle = {
        let ended = Rc::clone(&ended);
        animatable.animate_to(
            1.0,
            AnimationType::Tween(AnimationSpec::linear(500)),
            move || ended.set(true),
        )
    };

    let mut frame_time = 0;
    run_frames(&runtime, &mut frame_time, 4);
    handle.cancel();
    let frozen = animatable.value();

    run_frames(&runtime, &mut frame_time, 64);
    assert_eq!(animatable.value(), frozen);
    assert!(!ended.get());
    assert!(!runtime.needs_frame());
}

#[test]
fn snap_to_cancels_and_notifies() {
    let runtime = Runtime::new();
    let animatable = Animatable::new(0.0f32, runtime.frame_clock());
    let seen = Rc::new(RefCell::new(Vec::new()));
    {
        let seen = Rc::clone(&seen);
        animatable.set_listener(move |value| seen.borrow_mut().push(*value));
    }
    let handle = animatable.animate_to(1.0, AnimationType::default(), || {
        panic!("snapped animation must not complete")
    });

    animatable.snap_to(42.0);
    assert!(!handle.is_active());
    assert_eq!(animatable.value(), 42.0);
    assert_eq!(animatable.target(), 42.0);
    assert_eq!(seen.borrow().as_slice(), &[42.0]);

    let mut frame_time = 0;
    run_frames(&runtime, &mut frame_time, 4);
    assert_eq!(animatable.value(), 42.0);
}

#[test]
fn easing_linear_is_identity() {
    assert_eq!(Easing::Linear.transform(0.0), 0.0);
    assert_eq!(Easing::Linear.transform(0.5), 0.5);
    assert_eq!(Easing::Linear.transform(1.0), 1.0);
}

#[test]
fn easing_bounds_are_correct() {
    let easings = [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::FastOutSlowIn,
        Easing::LinearOutSlowIn,
        Easing::FastOutLinear,
        Easing::Bounce,
    ];

    for easing in easings {
        let start = easing.transform(0.0);
        let end = easing.transform(1.0);
        assert!((start - 0.0).abs() < 0.01, "Start should be ~0 for {easing:?}");
        assert!((end - 1.0).abs() < 0.01, "End should be ~1 for {easing:?}");
    }
}

#[test]
fn bounce_dips_before_settling() {
    // Between the second and third impact the curve falls back below 1.0.
    let impact = Easing::Bounce.transform(2.0 / 2.75);
    let dip = Easing::Bounce.transform(2.25 / 2.75);
    assert!((impact - 1.0).abs() < 1e-4);
    assert!(dip < impact);
    assert!(Easing::Bounce.transform(0.9) < 1.0);
}

#[test]
fn animation_spec_default_has_reasonable_values() {
    let spec = AnimationSpec::default();
    assert_eq!(spec.duration_millis, 300);
    assert_eq!(spec.easing, Easing::FastOutSlowIn);
    assert_eq!(spec.delay_millis, 0);
}

#[test]
fn spring_presets() {
    assert_eq!(SpringSpec::default().damping_ratio, 1.0);
    assert!(SpringSpec::bouncy().damping_ratio < 1.0);
    assert!(SpringSpec::stiff().stiffness > SpringSpec::default().stiffness);
}

#[test]
fn offset_spring_progress_projects_onto_path() {
    let start = Offset::new(100.0, 0.0);
    let target = Offset::ZERO;
    assert_eq!(Offset::spring_progress(&start, &target, &start), 0.0);
    assert_eq!(Offset::spring_progress(&start, &target, &target), 1.0);
    assert_eq!(
        Offset::spring_progress(&start, &target, &Offset::new(-10.0, 0.0)),
        1.1
    );
}
