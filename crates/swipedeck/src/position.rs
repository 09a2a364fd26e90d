use std::cell::{Cell, RefCell};
use std::rc::Rc;

use swipedeck_animation::AnimationHandle;
use swipedeck_graphics::Offset;

struct PositionCell {
    value: Cell<Offset>,
    generation: Cell<u64>,
    active: RefCell<Option<AnimationHandle>>,
}

/// The live offset of the top card.
///
/// Clones share one value. Every animation started on it gets a generation
/// number; starting another animation, or interrupting, bumps the generation
/// and cancels the attached animation so only the newest writer lands.
#[derive(Clone)]
pub struct AnimatedPosition {
    cell: Rc<PositionCell>,
}

impl AnimatedPosition {
    pub fn new(initial: Offset) -> Self {
        Self {
            cell: Rc::new(PositionCell {
                value: Cell::new(initial),
                generation: Cell::new(0),
                active: RefCell::new(None),
            }),
        }
    }

    pub fn get(&self) -> Offset {
        self.cell.value.get()
    }

    pub fn set(&self, value: Offset) {
        self.cell.value.set(value);
    }

    /// Writes `value` only if `generation` is still the newest animation.
    pub fn set_from(&self, generation: u64, value: Offset) -> bool {
        if self.is_current(generation) {
            self.set(value);
            true
        } else {
            false
        }
    }

    /// Supersedes whatever is animating this position and returns the
    /// generation of the animation about to start.
    pub fn begin_animation(&self) -> u64 {
        self.interrupt();
        self.cell.generation.get()
    }

    /// Records the handle of the animation started for `generation`, so a
    /// later interruption can cancel it.
    pub fn attach(&self, generation: u64, handle: &AnimationHandle) {
        if self.is_current(generation) && handle.is_active() {
            self.cell.active.replace(Some(handle.clone()));
        }
    }

    /// Stops the running animation, if any, leaving the value where it is.
    pub fn interrupt(&self) {
        self.cell.generation.set(self.cell.generation.get() + 1);
        let active = self.cell.active.borrow_mut().take();
        if let Some(handle) = active {
            handle.cancel();
        }
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.cell.generation.get() == generation
    }

    pub fn is_animating(&self) -> bool {
        self.cell
            .active
            .borrow()
            .as_ref()
            .is_some_and(AnimationHandle::is_active)
    }
}

impl Default for AnimatedPosition {
    fn default() -> Self {
        Self::new(Offset::ZERO)
    }
}

impl std::fmt::Debug for AnimatedPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimatedPosition")
            .field("value", &self.get())
            .field("generation", &self.cell.generation.get())
            .finish()
    }
}
