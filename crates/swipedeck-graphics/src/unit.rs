//! Angle units

/// Rotation angle in degrees, clockwise positive.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
pub struct Degrees(pub f32);

impl Degrees {
    pub const ZERO: Degrees = Degrees(0.0);

    pub fn to_radians(&self) -> f32 {
        self.0.to_radians()
    }

    pub fn from_radians(radians: f32) -> Self {
        Self(radians.to_degrees())
    }
}

impl std::fmt::Display for Degrees {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}deg", self.0)
    }
}
