use swipedeck_graphics::Offset;

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

impl Lerp for f64 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction as f64
    }
}

impl Lerp for Offset {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        *self + (*target - *self) * fraction
    }
}

/// Values that can be driven by spring physics.
///
/// The spring integrates a single scalar progress along the straight line from
/// the start value to the target, so implementors only need to project onto
/// that line and measure distance.
pub trait SpringVector: Lerp + Clone {
    /// Progress of `current` from `start` (0.0) toward `target` (1.0).
    fn spring_progress(start: &Self, target: &Self, current: &Self) -> f32;

    fn distance(current: &Self, target: &Self) -> f32;

    /// Determine whether the current value is close enough to the target to
    /// consider the spring finished.
    fn is_near_target(current: &Self, target: &Self, threshold: f32) -> bool {
        Self::distance(current, target) < threshold
    }
}

fn scalar_progress(start: f32, target: f32, current: f32) -> f32 {
    if (target - start).abs() < f32::EPSILON {
        1.0
    } else {
        (current - start) / (target - start)
    }
}

impl SpringVector for f32 {
    fn spring_progress(start: &Self, target: &Self, current: &Self) -> f32 {
        scalar_progress(*start, *target, *current)
    }

    fn distance(current: &Self, target: &Self) -> f32 {
        (current - target).abs()
    }
}

impl SpringVector for f64 {
    fn spring_progress(start: &Self, target: &Self, current: &Self) -> f32 {
        scalar_progress(*start as f32, *target as f32, *current as f32)
    }

    fn distance(current: &Self, target: &Self) -> f32 {
        (current - target).abs() as f32
    }
}

impl SpringVector for Offset {
    fn spring_progress(start: &Self, target: &Self, current: &Self) -> f32 {
        let path = *target - *start;
        let length_squared = path.dot(path);
        if length_squared < f32::EPSILON {
            1.0
        } else {
            (*current - *start).dot(path) / length_squared
        }
    }

    fn distance(current: &Self, target: &Self) -> f32 {
        current.distance_to(*target)
    }
}
