//! A ball sprung from the corner to a fixed point.

use swipedeck_animation::{Animatable, AnimationType, SpringSpec};
use swipedeck_graphics::Offset;

use crate::Stage;

pub const TARGET: Offset = Offset { x: 200.0, y: 400.0 };

pub fn run() -> anyhow::Result<Offset> {
    let mut stage = Stage::new();
    let ball = Animatable::new(Offset::ZERO, stage.frame_clock());
    ball.set_listener(|value: &Offset| log::trace!("ball at ({:.1}, {:.1})", value.x, value.y));
    let _handle = ball.animate_to(
        TARGET,
        AnimationType::Spring(SpringSpec::default()),
        || log::info!("ball settled"),
    );
    let frames = stage.run_until_idle(600, |_| {})?;
    log::debug!("ball took {frames} frames");
    Ok(ball.value())
}
