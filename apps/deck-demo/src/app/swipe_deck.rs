//! A scripted session against a deck of five cards.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Context;
use swipedeck::{
    CardPlacement, DeckConfig, DeckProps, DeckView, FrameClockDriver, PanGestureDetector,
    PointerEvent, SwipeDeck,
};

use swipedeck_graphics::{Point, Rect, Size};

use crate::Stage;

pub const VIEWPORT_WIDTH: f32 = 360.0;
/// Top-left corner of the top card at rest.
pub const CARD_ORIGIN: Point = Point::new(20.0, 80.0);
pub const CARD_SIZE: Size = Size::new(320.0, 480.0);
const MAX_SETTLE_FRAMES: usize = 600;
const DRAG_STEPS: usize = 8;
/// Print every n-th frame of an animation.
const PRINT_EVERY: u64 = 3;

#[derive(Clone, Debug, PartialEq)]
pub struct Card {
    pub id: u32,
    pub text: String,
}

impl Card {
    fn new(id: u32, text: &str) -> Self {
        Self {
            id,
            text: text.to_string(),
        }
    }
}

pub fn cards() -> Vec<Card> {
    ["Card #1", "Card #2", "Card #3", "Card #4", "Card #5"]
        .iter()
        .zip(1..)
        .map(|(text, id)| Card::new(id, text))
        .collect()
}

fn encore_cards() -> Vec<Card> {
    vec![Card::new(6, "Card #6"), Card::new(7, "Card #7")]
}

/// What the user did in one scripted step.
#[derive(Clone, Copy, Debug)]
pub enum Step {
    /// Touch at `from`, drag by `dx, dy`, lift.
    Drag { from_x: f32, dx: f32, dy: f32 },
    /// Hand the deck a fresh set of cards.
    ReplaceData,
}

pub fn script() -> Vec<Step> {
    vec![
        Step::Drag {
            from_x: 100.0,
            dx: 140.0,
            dy: 30.0,
        },
        Step::Drag {
            from_x: 180.0,
            dx: 50.0,
            dy: -20.0,
        },
        Step::Drag {
            from_x: 300.0,
            dx: -200.0,
            dy: 10.0,
        },
        Step::ReplaceData,
        Step::Drag {
            from_x: 60.0,
            dx: 180.0,
            dy: 0.0,
        },
    ]
}

#[derive(Debug, Default)]
pub struct Summary {
    pub liked: Vec<String>,
    pub disliked: Vec<String>,
    pub frames: u64,
}

pub fn run() -> anyhow::Result<Summary> {
    let mut stage = Stage::new();
    let summary = run_script(&mut stage, &script(), true)?;
    log::info!(
        "deck demo finished after {} frames ({} ms)",
        stage.frames(),
        stage.elapsed_millis()
    );
    Ok(summary)
}

pub fn run_script(stage: &mut Stage, steps: &[Step], print: bool) -> anyhow::Result<Summary> {
    let liked: Rc<RefCell<Vec<String>>> = Rc::default();
    let disliked: Rc<RefCell<Vec<String>>> = Rc::default();

    let props = DeckProps::new(
        cards(),
        |card: &Card| card.text.clone(),
        || "No more cards!".to_string(),
    )
    .with_on_swipe_right({
        let liked = Rc::clone(&liked);
        move |card: &Card| {
            log::info!("liked {}", card.text);
            liked.borrow_mut().push(card.text.clone());
        }
    })
    .with_on_swipe_left({
        let disliked = Rc::clone(&disliked);
        move |card: &Card| {
            log::info!("disliked {}", card.text);
            disliked.borrow_mut().push(card.text.clone());
        }
    });

    let driver = Rc::new(FrameClockDriver::new(stage.frame_clock()));
    let deck = SwipeDeck::new(
        props,
        DeckConfig::default().with_viewport_width(VIEWPORT_WIDTH),
        driver,
    )
    .context("building the swipe deck")?;
    let mut detector = PanGestureDetector::new();

    if print {
        print_view(&deck.render());
    }
    for step in steps {
        match *step {
            Step::Drag { from_x, dx, dy } => {
                drag(&deck, &mut detector, from_x, dx, dy);
                if print {
                    println!("released after dx={dx:.0}: {:?}", deck.phase());
                }
                stage.run_until_idle(MAX_SETTLE_FRAMES, |stage| {
                    if print && stage.frames() % PRINT_EVERY == 0 {
                        print_view(&deck.render());
                    }
                })?;
            }
            Step::ReplaceData => {
                log::info!("replacing deck data");
                deck.set_data(Rc::from(encore_cards()));
            }
        }
        if print {
            print_view(&deck.render());
        }
    }

    let summary = Summary {
        liked: liked.borrow().clone(),
        disliked: disliked.borrow().clone(),
        frames: stage.frames(),
    };
    Ok(summary)
}

fn drag(
    deck: &SwipeDeck<Card, String>,
    detector: &mut PanGestureDetector,
    from_x: f32,
    dx: f32,
    dy: f32,
) {
    let from_y = 320.0;
    if !hits_top_card(deck, from_x, from_y) {
        log::info!("touch at ({from_x:.0}, {from_y:.0}) missed the top card");
        return;
    }
    if !detector.dispatch(&PointerEvent::down(from_x, from_y), deck) {
        log::warn!("deck refused the touch at x={from_x:.0}");
        return;
    }
    for step in 1..=DRAG_STEPS {
        let t = step as f32 / DRAG_STEPS as f32;
        detector.dispatch(&PointerEvent::moved(from_x + dx * t, from_y + dy * t), deck);
    }
    detector.dispatch(&PointerEvent::up(from_x + dx, from_y + dy), deck);
}

/// Whether a touch at `(x, y)` lands on the top card where it is drawn now.
pub fn hits_top_card(deck: &SwipeDeck<Card, String>, x: f32, y: f32) -> bool {
    if deck.is_exhausted() {
        return false;
    }
    let translation = deck.card_style().translation;
    Rect::from_origin_size(CARD_ORIGIN, CARD_SIZE)
        .translate(translation.x, translation.y)
        .contains(x, y)
}

/// One line per card, back to front.
pub fn describe(view: &DeckView<String>) -> Vec<String> {
    match view {
        DeckView::NoMoreCards(content) => vec![format!("[{content}]")],
        DeckView::Stack(layers) => layers
            .iter()
            .map(|layer| match layer.placement {
                CardPlacement::Top(style) => format!(
                    "[{}] dx={:.1} dy={:.1} rot={}",
                    layer.content, style.translation.x, style.translation.y, style.rotation
                ),
                CardPlacement::Stacked { offset_y } => {
                    format!("[{}] stacked +{offset_y:.0}", layer.content)
                }
            })
            .collect(),
    }
}

fn print_view(view: &DeckView<String>) {
    // The top card is on the last line; only it moves.
    if let Some(line) = describe(view).last() {
        println!("{line}");
    }
}
