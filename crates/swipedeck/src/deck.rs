use std::cell::RefCell;
use std::rc::{Rc, Weak};

use swipedeck_foundation::GestureHandler;
use swipedeck_graphics::Offset;

use crate::config::{ConfigError, DeckConfig};
use crate::driver::{AnimationDriver, AnimationMode};
use crate::gesture::{DeckPhase, SwipeDirection, SwipeOutcome};
use crate::position::AnimatedPosition;
use crate::props::{DeckProps, Hook};
use crate::stack::{build_stack, DeckView};
use crate::style::{card_style, CardStyle};

/// A swipeable stack of cards.
///
/// Cheap to clone; clones drive the same deck. All methods must be called from
/// the thread that owns the event loop.
pub struct SwipeDeck<C: 'static, V: 'static> {
    shared: Rc<DeckShared<C, V>>,
}

struct DeckShared<C: 'static, V: 'static> {
    config: DeckConfig,
    driver: Rc<dyn AnimationDriver>,
    position: AnimatedPosition,
    render_card: Box<dyn Fn(&C) -> V>,
    render_no_more_cards: Box<dyn Fn() -> V>,
    on_swipe_left: Hook<C>,
    on_swipe_right: Hook<C>,
    state: RefCell<DeckState<C>>,
}

struct DeckState<C> {
    data: Rc<[C]>,
    index: usize,
    phase: DeckPhase,
    /// Bumped whenever the deck starts or abandons an animation, so a stale
    /// completion can recognise itself.
    ticket: u64,
}

impl<C> DeckState<C> {
    fn is_exhausted(&self) -> bool {
        self.index >= self.data.len()
    }

    fn next_ticket(&mut self) -> u64 {
        self.ticket += 1;
        self.ticket
    }
}

impl<C: 'static, V: 'static> SwipeDeck<C, V> {
    pub fn new(
        props: DeckProps<C, V>,
        config: DeckConfig,
        driver: Rc<dyn AnimationDriver>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let DeckProps {
            data,
            render_card,
            render_no_more_cards,
            on_swipe_left,
            on_swipe_right,
        } = props;
        log::debug!("deck created with {} card(s)", data.len());
        let shared = DeckShared {
            config,
            driver,
            position: AnimatedPosition::default(),
            render_card,
            render_no_more_cards,
            on_swipe_left,
            on_swipe_right,
            state: RefCell::new(DeckState {
                data,
                index: 0,
                phase: DeckPhase::Idle,
                ticket: 0,
            }),
        };
        Ok(Self {
            shared: Rc::new(shared),
        })
    }

    pub fn config(&self) -> &DeckConfig {
        &self.shared.config
    }

    pub fn index(&self) -> usize {
        self.shared.state.borrow().index
    }

    pub fn len(&self) -> usize {
        self.shared.state.borrow().data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_exhausted(&self) -> bool {
        self.shared.state.borrow().is_exhausted()
    }

    pub fn phase(&self) -> DeckPhase {
        self.shared.state.borrow().phase
    }

    pub fn data(&self) -> Rc<[C]> {
        Rc::clone(&self.shared.state.borrow().data)
    }

    pub fn position(&self) -> Offset {
        self.shared.position.get()
    }

    pub fn card_style(&self) -> CardStyle {
        let config = &self.shared.config;
        card_style(
            self.shared.position.get(),
            config.viewport_width,
            config.max_rotation_degrees,
        )
    }

    /// Replaces the deck contents.
    ///
    /// A different collection restarts the deck at its first card, abandoning
    /// any drag or animation. Passing the collection already shown is a no-op.
    pub fn set_data(&self, data: Rc<[C]>) {
        {
            let mut state = self.shared.state.borrow_mut();
            if Rc::ptr_eq(&state.data, &data) {
                return;
            }
            log::debug!(
                "deck data replaced at card {} of {}; restarting with {} card(s)",
                state.index,
                state.data.len(),
                data.len()
            );
            state.data = data;
            state.index = 0;
            state.phase = DeckPhase::Idle;
            state.next_ticket();
        }
        self.shared.position.interrupt();
        self.shared.position.set(Offset::ZERO);
    }

    /// Flings the current card off-screen as if it had been swiped.
    ///
    /// Returns `false` when the deck is exhausted or already animating.
    pub fn force_swipe(&self, direction: SwipeDirection) -> bool {
        match Self::begin(&self.shared, direction.into()) {
            Some(ticket) => {
                Self::animate_swipe(&self.shared, direction, ticket);
                true
            }
            None => false,
        }
    }

    /// Springs the current card back to rest.
    ///
    /// Returns `false` when the deck is exhausted or already animating.
    pub fn reset_position(&self) -> bool {
        match Self::begin(&self.shared, SwipeOutcome::Reset) {
            Some(ticket) => {
                Self::animate_reset(&self.shared, ticket);
                true
            }
            None => false,
        }
    }

    /// Renders the remaining cards, or the empty state once all are gone.
    pub fn render(&self) -> DeckView<V> {
        let (data, index) = {
            let state = self.shared.state.borrow();
            (Rc::clone(&state.data), state.index)
        };
        if index >= data.len() {
            return DeckView::NoMoreCards((self.shared.render_no_more_cards)());
        }
        DeckView::Stack(build_stack(
            &data,
            index,
            self.card_style(),
            self.shared.config.stack_offset,
            |card| (self.shared.render_card)(card),
        ))
    }

    /// Moves from `Idle`/`Dragging` into `Animating(outcome)`.
    fn begin(shared: &DeckShared<C, V>, outcome: SwipeOutcome) -> Option<u64> {
        let mut state = shared.state.borrow_mut();
        if state.is_exhausted() {
            log::debug!("ignoring {outcome:?}: no cards left");
            return None;
        }
        if !matches!(state.phase, DeckPhase::Idle | DeckPhase::Dragging) {
            log::debug!("ignoring {outcome:?} while {:?}", state.phase);
            return None;
        }
        state.phase = DeckPhase::Animating(outcome);
        Some(state.next_ticket())
    }

    fn animate_swipe(shared: &Rc<DeckShared<C, V>>, direction: SwipeDirection, ticket: u64) {
        let config = &shared.config;
        let target = Offset::new(direction.sign() * config.swipe_out_distance(), 0.0);
        let mode = AnimationMode::Timing {
            duration_millis: config.swipe_out_duration_millis,
            easing: config.swipe_out_easing,
        };
        let weak = Rc::downgrade(shared);
        shared.driver.animate_to(
            &shared.position,
            target,
            mode,
            Box::new(move || Self::finish_swipe(&weak, direction, ticket)),
        );
    }

    fn animate_reset(shared: &Rc<DeckShared<C, V>>, ticket: u64) {
        let weak = Rc::downgrade(shared);
        shared.driver.animate_to(
            &shared.position,
            Offset::ZERO,
            AnimationMode::Spring(shared.config.reset_spring),
            Box::new(move || Self::finish_reset(&weak, ticket)),
        );
    }

    fn finish_swipe(weak: &Weak<DeckShared<C, V>>, direction: SwipeDirection, ticket: u64) {
        let Some(shared) = weak.upgrade() else {
            return;
        };
        let (data, index) = {
            let state = shared.state.borrow();
            if state.ticket != ticket {
                return;
            }
            (Rc::clone(&state.data), state.index)
        };

        if let Some(card) = data.get(index) {
            log::debug!("card {index} swiped {direction:?}");
            let hook = match direction {
                SwipeDirection::Left => Rc::clone(&shared.on_swipe_left),
                SwipeDirection::Right => Rc::clone(&shared.on_swipe_right),
            };
            hook(card);
        }

        // The hook may have replaced the data, which already restarted the deck.
        if shared.state.borrow().ticket != ticket {
            log::debug!("deck restarted by swipe hook; not advancing");
            return;
        }
        shared.position.set(Offset::ZERO);
        let mut state = shared.state.borrow_mut();
        state.index += 1;
        state.phase = DeckPhase::Idle;
    }

    fn finish_reset(weak: &Weak<DeckShared<C, V>>, ticket: u64) {
        let Some(shared) = weak.upgrade() else {
            return;
        };
        let mut state = shared.state.borrow_mut();
        if state.ticket == ticket && state.phase == DeckPhase::Animating(SwipeOutcome::Reset) {
            log::trace!("card {} back at rest", state.index);
            state.phase = DeckPhase::Idle;
        }
    }
}

impl<C: 'static, V: 'static> GestureHandler for SwipeDeck<C, V> {
    /// Accepts the touch unless the deck is empty or a dismissal is running.
    /// A touch during a spring-back grabs the card where it is.
    fn on_start(&self) -> bool {
        let interrupted = {
            let mut state = self.shared.state.borrow_mut();
            if state.is_exhausted() {
                return false;
            }
            match state.phase {
                DeckPhase::Idle => false,
                DeckPhase::Dragging => return true,
                DeckPhase::Animating(SwipeOutcome::Reset) => {
                    state.next_ticket();
                    true
                }
                DeckPhase::Animating(outcome) => {
                    log::trace!("touch ignored while dismissing {outcome:?}");
                    return false;
                }
            }
        };
        if interrupted {
            log::debug!("spring-back interrupted by a new drag");
            self.shared.position.interrupt();
        }
        let mut state = self.shared.state.borrow_mut();
        state.phase = DeckPhase::Dragging;
        log::debug!("drag started on card {}", state.index);
        true
    }

    fn on_move(&self, dx: f32, dy: f32) {
        if self.phase() != DeckPhase::Dragging {
            return;
        }
        self.shared.position.set(Offset::new(dx, dy));
    }

    fn on_release(&self, dx: f32, dy: f32) {
        if self.phase() != DeckPhase::Dragging {
            log::trace!("release without an active drag ignored");
            return;
        }
        self.shared.position.set(Offset::new(dx, dy));
        let outcome = SwipeOutcome::classify(dx, self.shared.config.swipe_threshold());
        log::debug!("released at dx={dx:.1}: {outcome:?}");
        let Some(ticket) = Self::begin(&self.shared, outcome) else {
            return;
        };
        match outcome.direction() {
            Some(direction) => Self::animate_swipe(&self.shared, direction, ticket),
            None => Self::animate_reset(&self.shared, ticket),
        }
    }

    /// The platform took the touch away: treat it as a release that resets.
    fn on_cancel(&self) {
        if self.phase() != DeckPhase::Dragging {
            return;
        }
        log::debug!("drag cancelled; springing back");
        if let Some(ticket) = Self::begin(&self.shared, SwipeOutcome::Reset) {
            Self::animate_reset(&self.shared, ticket);
        }
    }
}

impl<C: 'static, V: 'static> Clone for SwipeDeck<C, V> {
    fn clone(&self) -> Self {
        Self {
            shared: Rc::clone(&self.shared),
        }
    }
}

#[cfg(test)]
#[path = "tests/deck_tests.rs"]
mod tests;
