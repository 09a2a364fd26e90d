use swipedeck_runtime::{FrameClock, Runtime};

/// Nominal frame length, ~60 FPS.
pub const FRAME_NANOS: u64 = 16_666_667;

/// A simulated display: owns the runtime and hands out frames on demand.
pub struct Stage {
    runtime: Runtime,
    frame_time: u64,
    frames: u64,
}

impl Stage {
    pub fn new() -> Self {
        Self {
            runtime: Runtime::new(),
            frame_time: 0,
            frames: 0,
        }
    }

    pub fn frame_clock(&self) -> FrameClock {
        self.runtime.frame_clock()
    }

    pub fn is_idle(&self) -> bool {
        !self.runtime.needs_frame()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn elapsed_millis(&self) -> u64 {
        self.frame_time / 1_000_000
    }

    pub fn advance_frame(&mut self) {
        self.frame_time += FRAME_NANOS;
        self.frames += 1;
        self.runtime.drain_frame_callbacks(self.frame_time);
    }

    /// Advances frames until nothing is animating, calling `on_frame` after each.
    pub fn run_until_idle(
        &mut self,
        max_frames: usize,
        mut on_frame: impl FnMut(&Stage),
    ) -> anyhow::Result<usize> {
        let mut frames = 0;
        while !self.is_idle() {
            if frames == max_frames {
                anyhow::bail!("animation still running after {max_frames} frames");
            }
            self.advance_frame();
            on_frame(self);
            frames += 1;
        }
        Ok(frames)
    }
}

impl Default for Stage {
    fn default() -> Self {
        Self::new()
    }
}
