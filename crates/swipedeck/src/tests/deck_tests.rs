use super::*;

use crate::stack::CardPlacement;
use crate::testing::{ImmediateDriver, ManualDriver};
use std::cell::RefCell;

const WIDTH: f32 = 400.0;

type Swipes = Rc<RefCell<Vec<(SwipeDirection, &'static str)>>>;

fn config() -> DeckConfig {
    DeckConfig::default().with_viewport_width(WIDTH)
}

fn deck_with(
    cards: &[&'static str],
    driver: Rc<dyn AnimationDriver>,
) -> (SwipeDeck<&'static str, String>, Swipes) {
    let swipes: Swipes = Rc::default();
    let props = DeckProps::new(
        cards.to_vec(),
        |card: &&'static str| format!("card {card}"),
        || "no more cards".to_string(),
    )
    .with_on_swipe_left({
        let swipes = Rc::clone(&swipes);
        move |card: &&'static str| swipes.borrow_mut().push((SwipeDirection::Left, *card))
    })
    .with_on_swipe_right({
        let swipes = Rc::clone(&swipes);
        move |card: &&'static str| swipes.borrow_mut().push((SwipeDirection::Right, *card))
    });
    let deck = SwipeDeck::new(props, config(), driver).expect("valid config");
    (deck, swipes)
}

fn drag(deck: &impl GestureHandler, dx: f32, dy: f32) {
    assert!(deck.on_start(), "deck should accept the drag");
    deck.on_move(dx / 2.0, dy / 2.0);
    deck.on_move(dx, dy);
    deck.on_release(dx, dy);
}

#[test]
fn swipe_right_past_threshold_dismisses_top_card() {
    let driver = Rc::new(ImmediateDriver::new());
    let (deck, swipes) = deck_with(&["A", "B", "C"], driver.clone());

    drag(&deck, 0.3 * WIDTH, 15.0);

    assert_eq!(swipes.borrow().as_slice(), &[(SwipeDirection::Right, "A")]);
    assert_eq!(deck.index(), 1);
    assert_eq!(deck.position(), Offset::ZERO);
    assert_eq!(deck.phase(), DeckPhase::Idle);

    let view = deck.render();
    let top = view.interactive_layer().expect("B is on top");
    assert_eq!(top.index, 1);
    assert_eq!(top.content, "card B");

    let requests = driver.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].from, Offset::new(0.3 * WIDTH, 15.0));
    assert_eq!(requests[0].target, Offset::new(2.0 * WIDTH, 0.0));
    assert_eq!(
        requests[0].mode,
        AnimationMode::Timing {
            duration_millis: 100,
            easing: config().swipe_out_easing,
        }
    );
}

#[test]
fn swipe_left_past_threshold_dismisses_to_the_left() {
    let driver = Rc::new(ImmediateDriver::new());
    let (deck, swipes) = deck_with(&["A", "B"], driver.clone());

    drag(&deck, -0.26 * WIDTH, 0.0);

    assert_eq!(swipes.borrow().as_slice(), &[(SwipeDirection::Left, "A")]);
    assert_eq!(deck.index(), 1);
    assert_eq!(driver.requests()[0].target, Offset::new(-2.0 * WIDTH, 0.0));
}

#[test]
fn short_drag_springs_back_without_hooks() {
    let driver = Rc::new(ImmediateDriver::new());
    let (deck, swipes) = deck_with(&["A", "B"], driver.clone());

    drag(&deck, 0.1 * WIDTH, -30.0);

    assert!(swipes.borrow().is_empty());
    assert_eq!(deck.index(), 0);
    assert_eq!(deck.position(), Offset::ZERO);
    assert_eq!(deck.phase(), DeckPhase::Idle);
    let requests = driver.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].target, Offset::ZERO);
    assert_eq!(
        requests[0].mode,
        AnimationMode::Spring(config().reset_spring)
    );
}

#[test]
fn release_exactly_on_threshold_resets() {
    let driver = Rc::new(ImmediateDriver::new());
    let (deck, swipes) = deck_with(&["A", "B"], driver);

    drag(&deck, 0.25 * WIDTH, 0.0);
    drag(&deck, -0.25 * WIDTH, 0.0);

    assert!(swipes.borrow().is_empty());
    assert_eq!(deck.index(), 0);
}

#[test]
fn moves_set_cumulative_displacement() {
    let (deck, _) = deck_with(&["A"], Rc::new(ImmediateDriver::new()));

    assert!(deck.on_start());
    assert_eq!(deck.phase(), DeckPhase::Dragging);
    deck.on_move(10.0, 5.0);
    deck.on_move(30.0, -4.0);
    assert_eq!(deck.position(), Offset::new(30.0, -4.0));

    let style = deck.card_style();
    assert_eq!(style.translation, Offset::new(30.0, -4.0));
    assert_eq!(style.rotation.0, 30.0 / WIDTH * 90.0);

    match deck.render().interactive_layer().map(|layer| layer.placement) {
        Some(CardPlacement::Top(rendered)) => assert_eq!(rendered, style),
        other => panic!("unexpected top placement {other:?}"),
    }
}

#[test]
fn input_without_a_drag_is_ignored() {
    let driver = Rc::new(ImmediateDriver::new());
    let (deck, swipes) = deck_with(&["A"], driver.clone());

    deck.on_move(300.0, 0.0);
    deck.on_release(300.0, 0.0);
    deck.on_cancel();

    assert_eq!(deck.position(), Offset::ZERO);
    assert!(swipes.borrow().is_empty());
    assert!(driver.requests().is_empty());
}

#[test]
fn exhausted_deck_shows_empty_state_and_refuses_gestures() {
    let driver = Rc::new(ImmediateDriver::new());
    let (deck, swipes) = deck_with(&["A", "B"], driver.clone());

    drag(&deck, WIDTH, 0.0);
    drag(&deck, -WIDTH, 0.0);
    assert!(deck.is_exhausted());
    assert_eq!(deck.index(), deck.len());

    let view = deck.render();
    assert_eq!(view, DeckView::NoMoreCards("no more cards".to_string()));
    assert!(view.interactive_layer().is_none());

    assert!(!deck.on_start());
    assert!(!deck.force_swipe(SwipeDirection::Right));
    assert!(!deck.reset_position());
    assert_eq!(swipes.borrow().len(), 2);
    assert_eq!(driver.requests().len(), 2);
}

#[test]
fn empty_data_renders_empty_state_immediately() {
    let (deck, _) = deck_with(&[], Rc::new(ImmediateDriver::new()));
    assert!(deck.is_empty());
    assert!(deck.render().is_empty_state());
    assert!(!deck.on_start());
}

#[test]
fn hooks_default_to_no_ops() {
    let props = DeckProps::new(vec![1, 2, 3], |n: &i32| *n, || 0);
    let deck = SwipeDeck::new(props, config(), Rc::new(ImmediateDriver::new()))
        .expect("valid config");

    assert!(deck.force_swipe(SwipeDirection::Left));
    assert!(deck.force_swipe(SwipeDirection::Right));
    assert_eq!(deck.index(), 2);
    assert_eq!(
        deck.render().interactive_layer().map(|layer| layer.content),
        Some(3)
    );
}

#[test]
fn replacing_data_restarts_the_deck() {
    let (deck, _) = deck_with(&["A", "B", "C"], Rc::new(ImmediateDriver::new()));
    drag(&deck, WIDTH, 0.0);
    drag(&deck, WIDTH, 0.0);
    assert_eq!(deck.index(), 2);

    let same = deck.data();
    deck.set_data(same);
    assert_eq!(deck.index(), 2, "same collection is not a replacement");

    deck.set_data(Rc::from(vec!["A", "B", "C"]));
    assert_eq!(deck.index(), 0, "equal contents but a new collection restart");
    assert_eq!(deck.render().interactive_layer().map(|l| l.index), Some(0));
}

#[test]
fn invalid_config_is_rejected() {
    let props = DeckProps::new(vec!["A"], |card: &&'static str| *card, || "");
    let result = SwipeDeck::new(
        props,
        DeckConfig::default().with_viewport_width(-1.0),
        Rc::new(ImmediateDriver::new()),
    );
    assert!(matches!(
        result,
        Err(ConfigError::NonPositiveViewport { .. })
    ));
}

#[test]
fn touches_during_a_dismissal_are_ignored() {
    let driver = Rc::new(ManualDriver::new());
    let (deck, swipes) = deck_with(&["A", "B"], driver.clone());

    drag(&deck, 200.0, 0.0);
    assert_eq!(deck.phase(), DeckPhase::Animating(SwipeOutcome::Right));
    assert_eq!(driver.in_flight(), 1);

    assert!(!deck.on_start());
    deck.on_move(-50.0, 0.0);
    deck.on_release(-50.0, 0.0);
    assert_eq!(deck.position(), Offset::new(200.0, 0.0));
    assert!(swipes.borrow().is_empty(), "hooks wait for the animation");
    assert_eq!(deck.index(), 0);

    assert_eq!(driver.finish_all(), 1);
    assert_eq!(swipes.borrow().as_slice(), &[(SwipeDirection::Right, "A")]);
    assert_eq!(deck.index(), 1);
    assert_eq!(deck.position(), Offset::ZERO);
    assert_eq!(deck.phase(), DeckPhase::Idle);
}

#[test]
fn touch_during_spring_back_grabs_the_card() {
    let driver = Rc::new(ManualDriver::new());
    let (deck, swipes) = deck_with(&["A", "B"], driver.clone());

    drag(&deck, 40.0, 10.0);
    assert_eq!(deck.phase(), DeckPhase::Animating(SwipeOutcome::Reset));
    assert_eq!(driver.in_flight(), 1);

    assert!(deck.on_start());
    assert_eq!(deck.phase(), DeckPhase::Dragging);
    assert_eq!(driver.in_flight(), 0);
    assert_eq!(driver.finish_all(), 0, "interrupted spring never completes");

    deck.on_move(150.0, 0.0);
    assert_eq!(deck.position(), Offset::new(150.0, 0.0));
    deck.on_release(150.0, 0.0);
    assert_eq!(driver.finish_all(), 1);
    assert_eq!(swipes.borrow().as_slice(), &[(SwipeDirection::Right, "A")]);
}

#[test]
fn cancelled_drag_springs_back() {
    let driver = Rc::new(ManualDriver::new());
    let (deck, swipes) = deck_with(&["A"], driver.clone());

    assert!(deck.on_start());
    deck.on_move(300.0, 0.0);
    deck.on_cancel();
    assert_eq!(deck.phase(), DeckPhase::Animating(SwipeOutcome::Reset));

    driver.finish_all();
    assert_eq!(deck.position(), Offset::ZERO);
    assert_eq!(deck.phase(), DeckPhase::Idle);
    assert!(swipes.borrow().is_empty());
}

#[test]
fn replacing_data_mid_dismissal_abandons_it() {
    let driver = Rc::new(ManualDriver::new());
    let (deck, swipes) = deck_with(&["A", "B"], driver.clone());

    drag(&deck, -300.0, 0.0);
    assert_eq!(driver.in_flight(), 1);

    deck.set_data(Rc::from(vec!["X", "Y"]));
    assert_eq!(deck.phase(), DeckPhase::Idle);
    assert_eq!(deck.position(), Offset::ZERO);
    assert_eq!(driver.in_flight(), 0);

    assert_eq!(driver.finish_all(), 0);
    assert!(swipes.borrow().is_empty());
    assert_eq!(deck.index(), 0);
}

#[test]
fn hook_that_replaces_data_wins_over_advancing() {
    let slot: Rc<RefCell<Option<SwipeDeck<&'static str, &'static str>>>> = Rc::default();
    let props = DeckProps::new(vec!["A", "B"], |card: &&'static str| *card, || "done")
        .with_on_swipe_right({
            let slot = Rc::clone(&slot);
            move |_: &&'static str| {
                if let Some(deck) = slot.borrow().as_ref() {
                    deck.set_data(Rc::from(vec!["fresh"]));
                }
            }
        });
    let deck = SwipeDeck::new(props, config(), Rc::new(ImmediateDriver::new()))
        .expect("valid config");
    slot.replace(Some(deck.clone()));

    assert!(deck.force_swipe(SwipeDirection::Right));
    assert_eq!(deck.index(), 0);
    assert_eq!(&*deck.data(), &["fresh"]);
    assert_eq!(deck.phase(), DeckPhase::Idle);
    slot.replace(None);
}

#[test]
fn programmatic_swipe_is_refused_while_animating() {
    let driver = Rc::new(ManualDriver::new());
    let (deck, _) = deck_with(&["A", "B"], driver.clone());

    assert!(deck.force_swipe(SwipeDirection::Left));
    assert!(!deck.force_swipe(SwipeDirection::Right));
    assert!(!deck.reset_position());
    assert_eq!(driver.requests().len(), 1);

    driver.finish_all();
    assert_eq!(deck.index(), 1);
    assert!(deck.reset_position());
}
