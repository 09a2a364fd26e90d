use std::rc::Rc;

pub(crate) type Hook<C> = Rc<dyn Fn(&C)>;

/// What the caller supplies to build a deck: the cards, how to draw them and
/// what to do when one is dismissed.
pub struct DeckProps<C: 'static, V: 'static> {
    pub(crate) data: Rc<[C]>,
    pub(crate) render_card: Box<dyn Fn(&C) -> V>,
    pub(crate) render_no_more_cards: Box<dyn Fn() -> V>,
    pub(crate) on_swipe_left: Hook<C>,
    pub(crate) on_swipe_right: Hook<C>,
}

impl<C: 'static, V: 'static> DeckProps<C, V> {
    /// Dismissal hooks default to doing nothing.
    pub fn new(
        data: impl Into<Rc<[C]>>,
        render_card: impl Fn(&C) -> V + 'static,
        render_no_more_cards: impl Fn() -> V + 'static,
    ) -> Self {
        Self {
            data: data.into(),
            render_card: Box::new(render_card),
            render_no_more_cards: Box::new(render_no_more_cards),
            on_swipe_left: Rc::new(|_: &C| {}),
            on_swipe_right: Rc::new(|_: &C| {}),
        }
    }

    pub fn with_on_swipe_left(mut self, hook: impl Fn(&C) + 'static) -> Self {
        self.on_swipe_left = Rc::new(hook);
        self
    }

    pub fn with_on_swipe_right(mut self, hook: impl Fn(&C) + 'static) -> Self {
        self.on_swipe_right = Rc::new(hook);
        self
    }
}
