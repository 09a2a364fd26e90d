//! Gesture recognisers built on raw pointer events.

pub mod pan;
