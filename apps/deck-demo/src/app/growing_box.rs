//! A box that grows from 100 to 150 pixels with a bounce.

use swipedeck_animation::{Animatable, AnimationSpec, AnimationType, Easing};

use crate::Stage;

pub const FROM: f32 = 100.0;
pub const TO: f32 = 150.0;
pub const DURATION_MILLIS: u64 = 1000;

pub fn run() -> anyhow::Result<f32> {
    let mut stage = Stage::new();
    let height = Animatable::new(FROM, stage.frame_clock());
    let _handle = height.animate_to(
        TO,
        AnimationType::Tween(AnimationSpec::tween(DURATION_MILLIS, Easing::Bounce)),
        || log::info!("box finished growing"),
    );
    stage.run_until_idle(120, |stage| {
        if stage.frames() % 10 == 0 {
            log::debug!("box height {:.1} at {} ms", height.value(), stage.elapsed_millis());
        }
    })?;
    Ok(height.value())
}
