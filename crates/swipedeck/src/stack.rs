use crate::style::CardStyle;

/// How one card of the stack is placed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CardPlacement {
    /// The current card: follows the live style and receives gestures.
    Top(CardStyle),
    /// A waiting card, pushed down to suggest depth. Not interactive.
    Stacked { offset_y: f32 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct CardLayer<V> {
    /// Index of the card in the deck data.
    pub index: usize,
    pub placement: CardPlacement,
    pub content: V,
}

impl<V> CardLayer<V> {
    pub fn is_interactive(&self) -> bool {
        matches!(self.placement, CardPlacement::Top(_))
    }
}

/// A rendered deck.
#[derive(Clone, Debug, PartialEq)]
pub enum DeckView<V> {
    /// Every card has been dismissed.
    NoMoreCards(V),
    /// Remaining cards in paint order: the farthest first, the top card last.
    Stack(Vec<CardLayer<V>>),
}

impl<V> DeckView<V> {
    pub fn layers(&self) -> &[CardLayer<V>] {
        match self {
            DeckView::NoMoreCards(_) => &[],
            DeckView::Stack(layers) => layers,
        }
    }

    pub fn interactive_layer(&self) -> Option<&CardLayer<V>> {
        self.layers().iter().find(|layer| layer.is_interactive())
    }

    pub fn is_empty_state(&self) -> bool {
        matches!(self, DeckView::NoMoreCards(_))
    }
}

/// Lays out `cards[index..]` back to front.
///
/// Cards before `index` are already dismissed and produce nothing.
pub(crate) fn build_stack<C, V>(
    cards: &[C],
    index: usize,
    top_style: CardStyle,
    stack_offset: f32,
    render_card: impl Fn(&C) -> V,
) -> Vec<CardLayer<V>> {
    cards
        .iter()
        .enumerate()
        .skip(index)
        .rev()
        .map(|(i, card)| {
            let placement = if i == index {
                CardPlacement::Top(top_style)
            } else {
                CardPlacement::Stacked {
                    offset_y: stack_offset * (i - index) as f32,
                }
            };
            CardLayer {
                index: i,
                placement,
                content: render_card(card),
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/stack_tests.rs"]
mod tests;
