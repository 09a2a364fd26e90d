use swipedeck_graphics::{interpolate, Degrees, Offset};

/// Visual transform of the interactive card.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct CardStyle {
    pub translation: Offset,
    pub rotation: Degrees,
}

/// Derives the top card's style from its position.
///
/// Rotation follows `position.x` linearly from `-viewport_width..=viewport_width`
/// onto `-max_rotation..=max_rotation` and holds at the ends.
pub fn card_style(position: Offset, viewport_width: f32, max_rotation_degrees: f32) -> CardStyle {
    let rotation = interpolate(
        position.x,
        &[-viewport_width, 0.0, viewport_width],
        &[-max_rotation_degrees, 0.0, max_rotation_degrees],
    );
    CardStyle {
        translation: position,
        rotation: Degrees(rotation),
    }
}

#[cfg(test)]
#[path = "tests/style_tests.rs"]
mod tests;
