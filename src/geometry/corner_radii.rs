use super::rect::{clamp_dimension, Rect};

/// Horizontal/vertical radius pair for one elliptical rounded corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CornerRadius {
    pub x: f64,
    pub y: f64,
}

impl CornerRadius {
    /// The sharp corner.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a radius pair, clamping both components non-negative.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: clamp_dimension(x),
            y: clamp_dimension(y),
        }
    }

    /// Returns this radius grown by `amount` on both components,
    /// clamped at zero.
    #[must_use]
    pub fn inflated(&self, amount: f64) -> Self {
        Self::new(self.x + amount, self.y + amount)
    }

    /// `true` when either component is positive (the corner draws an arc).
    #[must_use]
    pub fn is_rounded(&self) -> bool {
        self.x > 0.0 || self.y > 0.0
    }

    fn scaled(self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }
}

/// Elliptical radii for the four corners of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CornerRadii {
    pub top_left: CornerRadius,
    pub top_right: CornerRadius,
    pub bottom_right: CornerRadius,
    pub bottom_left: CornerRadius,
}

impl CornerRadii {
    /// All four corners sharp.
    pub const ZERO: Self = Self {
        top_left: CornerRadius::ZERO,
        top_right: CornerRadius::ZERO,
        bottom_right: CornerRadius::ZERO,
        bottom_left: CornerRadius::ZERO,
    };

    /// Same circular radius on every corner.
    #[must_use]
    pub fn uniform(radius: f64) -> Self {
        let corner = CornerRadius::new(radius, radius);
        Self {
            top_left: corner,
            top_right: corner,
            bottom_right: corner,
            bottom_left: corner,
        }
    }

    /// Returns radii with every component grown by `amount`, clamped at
    /// zero per component.
    #[must_use]
    pub fn inflated(&self, amount: f64) -> Self {
        Self {
            top_left: self.top_left.inflated(amount),
            top_right: self.top_right.inflated(amount),
            bottom_right: self.bottom_right.inflated(amount),
            bottom_left: self.bottom_left.inflated(amount),
        }
    }
}

/// Scales corner radii so no two adjacent arcs overlap on `rect`.
///
/// Each of the four adjacency sums (horizontal along top and bottom edges,
/// vertical along left and right edges) is compared against the matching
/// box dimension; the smallest resulting ratio is applied uniformly to all
/// eight components so the corner shapes stay proportional. Radii that
/// already fit are returned unchanged. Degenerate rects resolve to sharp
/// corners. Returns a new value rather than mutating in place.
#[must_use]
pub fn resolve_radii(rect: &Rect, radii: &CornerRadii) -> CornerRadii {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return CornerRadii::ZERO;
    }

    let top = radii.top_left.x + radii.top_right.x;
    let bottom = radii.bottom_left.x + radii.bottom_right.x;
    let left = radii.top_left.y + radii.bottom_left.y;
    let right = radii.top_right.y + radii.bottom_right.y;

    let mut scale = 1.0_f64;
    if top > rect.width {
        scale = scale.min(rect.width / top);
    }
    if bottom > rect.width {
        scale = scale.min(rect.width / bottom);
    }
    if left > rect.height {
        scale = scale.min(rect.height / left);
    }
    if right > rect.height {
        scale = scale.min(rect.height / right);
    }

    if scale < 1.0 {
        CornerRadii {
            top_left: radii.top_left.scaled(scale),
            top_right: radii.top_right.scaled(scale),
            bottom_right: radii.bottom_right.scaled(scale),
            bottom_left: radii.bottom_left.scaled(scale),
        }
    } else {
        *radii
    }
}
