use std::cell::{Cell, RefCell};
use std::rc::Rc;

struct AnimationRun {
    active: Cell<bool>,
    canceller: RefCell<Option<Box<dyn FnOnce()>>>,
}

/// Handle to one started animation.
///
/// Animations are fire-and-forget: dropping the handle leaves the animation
/// running. [`AnimationHandle::cancel`] stops it where it is; a cancelled
/// animation never reports completion.
#[derive(Clone)]
pub struct AnimationHandle {
    run: Rc<AnimationRun>,
}

impl AnimationHandle {
    /// Creates an active handle; `canceller` runs at most once, on the first
    /// `cancel()` while the animation is still active.
    pub fn new(canceller: impl FnOnce() + 'static) -> Self {
        Self {
            run: Rc::new(AnimationRun {
                active: Cell::new(true),
                canceller: RefCell::new(Some(Box::new(canceller))),
            }),
        }
    }

    /// A handle for an animation that already completed.
    pub fn finished() -> Self {
        Self {
            run: Rc::new(AnimationRun {
                active: Cell::new(false),
                canceller: RefCell::new(None),
            }),
        }
    }

    pub fn is_active(&self) -> bool {
        self.run.active.get()
    }

    pub fn cancel(&self) {
        if !self.run.active.replace(false) {
            return;
        }
        let canceller = self.run.canceller.borrow_mut().take();
        if let Some(canceller) = canceller {
            canceller();
        }
    }

    /// Marks the animation as ended without running the canceller.
    pub fn mark_finished(&self) {
        self.run.active.set(false);
        self.run.canceller.borrow_mut().take();
    }

    pub fn same_run(&self, other: &AnimationHandle) -> bool {
        Rc::ptr_eq(&self.run, &other.run)
    }
}

impl std::fmt::Debug for AnimationHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimationHandle")
            .field("active", &self.is_active())
            .finish()
    }
}
