use swipedeck_animation::{Easing, SpringSpec};

/// Tunables for a [`crate::SwipeDeck`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DeckConfig {
    /// Width of the visible area, in logical pixels.
    pub viewport_width: f32,
    /// Fraction of the viewport a release must exceed to dismiss the card.
    pub threshold_fraction: f32,
    pub swipe_out_duration_millis: u64,
    pub swipe_out_easing: Easing,
    pub reset_spring: SpringSpec,
    /// Rotation reached when the card is dragged a full viewport width.
    pub max_rotation_degrees: f32,
    /// Vertical offset between consecutive waiting cards.
    pub stack_offset: f32,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            viewport_width: 360.0,
            threshold_fraction: 0.25,
            swipe_out_duration_millis: 100,
            swipe_out_easing: Easing::EaseInOut,
            reset_spring: SpringSpec::bouncy(),
            max_rotation_degrees: 90.0,
            stack_offset: 10.0,
        }
    }
}

impl DeckConfig {
    pub fn with_viewport_width(mut self, width: f32) -> Self {
        self.viewport_width = width;
        self
    }

    pub fn with_threshold_fraction(mut self, fraction: f32) -> Self {
        self.threshold_fraction = fraction;
        self
    }

    pub fn with_swipe_out_duration(mut self, millis: u64) -> Self {
        self.swipe_out_duration_millis = millis;
        self
    }

    pub fn with_swipe_out_easing(mut self, easing: Easing) -> Self {
        self.swipe_out_easing = easing;
        self
    }

    pub fn with_reset_spring(mut self, spring: SpringSpec) -> Self {
        self.reset_spring = spring;
        self
    }

    pub fn with_max_rotation(mut self, degrees: f32) -> Self {
        self.max_rotation_degrees = degrees;
        self
    }

    pub fn with_stack_offset(mut self, offset: f32) -> Self {
        self.stack_offset = offset;
        self
    }

    /// Horizontal displacement a release has to exceed (strictly) to dismiss.
    pub fn swipe_threshold(&self) -> f32 {
        self.threshold_fraction * self.viewport_width
    }

    /// How far off-screen a dismissed card travels.
    pub fn swipe_out_distance(&self) -> f32 {
        2.0 * self.viewport_width
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.viewport_width.is_finite() && self.viewport_width > 0.0) {
            return Err(ConfigError::NonPositiveViewport {
                width: self.viewport_width,
            });
        }
        if !(self.threshold_fraction > 0.0 && self.threshold_fraction <= 1.0) {
            return Err(ConfigError::ThresholdOutOfRange {
                fraction: self.threshold_fraction,
            });
        }
        if !(self.stack_offset.is_finite() && self.stack_offset >= 0.0) {
            return Err(ConfigError::NegativeStackOffset {
                offset: self.stack_offset,
            });
        }
        if !(self.max_rotation_degrees.is_finite() && self.max_rotation_degrees >= 0.0) {
            return Err(ConfigError::InvalidRotation {
                degrees: self.max_rotation_degrees,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    NonPositiveViewport { width: f32 },
    ThresholdOutOfRange { fraction: f32 },
    NegativeStackOffset { offset: f32 },
    InvalidRotation { degrees: f32 },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NonPositiveViewport { width } => {
                write!(f, "viewport width must be positive, got {width}")
            }
            ConfigError::ThresholdOutOfRange { fraction } => {
                write!(f, "swipe threshold fraction must be in (0, 1], got {fraction}")
            }
            ConfigError::NegativeStackOffset { offset } => {
                write!(f, "stack offset must be non-negative, got {offset}")
            }
            ConfigError::InvalidRotation { degrees } => {
                write!(f, "max rotation must be a non-negative angle, got {degrees}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
