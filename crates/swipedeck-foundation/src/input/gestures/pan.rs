//! Pan gesture recogniser.
//!
//! Follows a single pointer from down to up and reports its displacement
//! relative to where it went down. There is no touch slop: the gesture is
//! claimed on the down event. Downs and moves already consumed by another
//! handler are left alone; ups and cancels always end the gesture.

use swipedeck_graphics::{Offset, Point};

use crate::input::types::{PointerEvent, PointerEventKind, PointerId};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PanEvent {
    Start,
    /// Displacement since the pan started, not since the previous move.
    Move { dx: f32, dy: f32 },
    Release { dx: f32, dy: f32 },
    Cancel,
}

/// Receiver for the pan events of one gesture stream.
pub trait GestureHandler {
    /// Returns whether the handler takes responsibility for this gesture.
    /// Declining makes the detector drop the stream until the next down.
    fn on_start(&self) -> bool;

    fn on_move(&self, dx: f32, dy: f32);

    fn on_release(&self, dx: f32, dy: f32);

    fn on_cancel(&self);
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct TrackedPointer {
    id: PointerId,
    origin: Point,
}

#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct PanGestureDetector {
    tracked: Option<TrackedPointer>,
}

impl PanGestureDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_tracking(&self) -> bool {
        self.tracked.is_some()
    }

    pub fn reset(&mut self) {
        self.tracked = None;
    }

    /// Turns a raw pointer event into a pan event, consuming the pointer event
    /// when it belongs to the tracked gesture.
    pub fn process(&mut self, event: &PointerEvent) -> Option<PanEvent> {
        if event.is_consumed()
            && matches!(event.kind, PointerEventKind::Down | PointerEventKind::Move)
        {
            return None;
        }
        let pan = match (event.kind, self.tracked) {
            (PointerEventKind::Down, None) => {
                self.tracked = Some(TrackedPointer {
                    id: event.id,
                    origin: event.position,
                });
                PanEvent::Start
            }
            (PointerEventKind::Move, Some(tracked)) if tracked.id == event.id => {
                let delta = displacement(tracked, event);
                PanEvent::Move {
                    dx: delta.x,
                    dy: delta.y,
                }
            }
            (PointerEventKind::Up, Some(tracked)) if tracked.id == event.id => {
                self.tracked = None;
                let delta = displacement(tracked, event);
                PanEvent::Release {
                    dx: delta.x,
                    dy: delta.y,
                }
            }
            (PointerEventKind::Cancel, Some(tracked)) if tracked.id == event.id => {
                self.tracked = None;
                PanEvent::Cancel
            }
            _ => return None,
        };
        event.consume();
        Some(pan)
    }

    /// Processes `event` and forwards the result to `handler`.
    ///
    /// Returns `true` when the event was delivered.
    pub fn dispatch(&mut self, event: &PointerEvent, handler: &impl GestureHandler) -> bool {
        let Some(pan) = self.process(event) else {
            return false;
        };
        match pan {
            PanEvent::Start => {
                if !handler.on_start() {
                    log::trace!("pan start declined by handler");
                    self.reset();
                    return false;
                }
            }
            PanEvent::Move { dx, dy } => handler.on_move(dx, dy),
            PanEvent::Release { dx, dy } => handler.on_release(dx, dy),
            PanEvent::Cancel => handler.on_cancel(),
        }
        true
    }
}

fn displacement(tracked: TrackedPointer, event: &PointerEvent) -> Offset {
    event.position - tracked.origin
}

#[cfg(test)]
#[path = "../../tests/pan_tests.rs"]
mod tests;
