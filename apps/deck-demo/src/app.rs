//! The three demos: the swipe deck and the two plain animations it grew from.

pub mod ball;
pub mod growing_box;
pub mod swipe_deck;

#[cfg(test)]
#[path = "tests/app_tests.rs"]
mod tests;
