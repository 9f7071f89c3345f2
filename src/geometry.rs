//! Lattice geometry primitives.
//!
//! Provides the integer [`Point`] type that every rasterizer in this crate
//! produces.

use std::fmt;

/// A 2D point with integer coordinates.
///
/// Ordering is lexicographic: by `x`, then by `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Shift this point by `(dx, dy)`.
    #[must_use]
    pub const fn translate(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Mirror across the vertical axis through `center`.
    #[must_use]
    pub const fn reflect_x(self, center: Self) -> Self {
        Self::new(2 * center.x - self.x, self.y)
    }

    /// Mirror across the horizontal axis through `center`.
    #[must_use]
    pub const fn reflect_y(self, center: Self) -> Self {
        Self::new(self.x, 2 * center.y - self.y)
    }

    /// Squared Euclidean distance, widened to `i64`.
    #[must_use]
    pub fn distance_squared(self, other: Self) -> i64 {
        let dx = i64::from(self.x) - i64::from(other.x);
        let dy = i64::from(self.y) - i64::from(other.y);
        dx * dx + dy * dy
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for (i32, i32) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
