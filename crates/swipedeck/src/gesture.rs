/// Direction a dismissed card leaves the screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    Left,
    Right,
}

impl SwipeDirection {
    /// `-1.0` for left, `1.0` for right.
    pub fn sign(self) -> f32 {
        match self {
            SwipeDirection::Left => -1.0,
            SwipeDirection::Right => 1.0,
        }
    }
}

/// Decision taken once per release.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SwipeOutcome {
    Left,
    Right,
    Reset,
}

impl SwipeOutcome {
    /// Classifies a release by its total horizontal displacement.
    ///
    /// Both comparisons are strict: a release exactly on the threshold resets.
    pub fn classify(dx: f32, threshold: f32) -> Self {
        if dx > threshold {
            SwipeOutcome::Right
        } else if dx < -threshold {
            SwipeOutcome::Left
        } else {
            SwipeOutcome::Reset
        }
    }

    pub fn direction(self) -> Option<SwipeDirection> {
        match self {
            SwipeOutcome::Left => Some(SwipeDirection::Left),
            SwipeOutcome::Right => Some(SwipeDirection::Right),
            SwipeOutcome::Reset => None,
        }
    }
}

impl From<SwipeDirection> for SwipeOutcome {
    fn from(direction: SwipeDirection) -> Self {
        match direction {
            SwipeDirection::Left => SwipeOutcome::Left,
            SwipeDirection::Right => SwipeOutcome::Right,
        }
    }
}

/// Where the deck's gesture state machine currently is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeckPhase {
    /// No touch, no animation.
    #[default]
    Idle,
    /// A touch owns the top card; the position tracks it.
    Dragging,
    /// A dismiss (`Left`/`Right`) or spring-back (`Reset`) is in flight.
    Animating(SwipeOutcome),
}

#[cfg(test)]
#[path = "tests/gesture_tests.rs"]
mod tests;
