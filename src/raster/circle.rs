//! Midpoint circle rasterization to lattice points.
//!
//! One octant is walked with an integer error term, then mirrored eight
//! ways around the center. Coincident mirrors (on the axes and diagonals)
//! collapse in a hash set before the final sort.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::geometry::Point;

/// Stepping rule for the midpoint decision variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Connectivity {
    /// Each iteration moves along one axis only; neighbouring outline points share an edge.
    #[default]
    Four,
    /// Both decision checks run every iteration, allowing diagonal steps (thinnest outline).
    Eight,
}

impl FromStr for Connectivity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "four" | "4" => Ok(Self::Four),
            "eight" | "8" => Ok(Self::Eight),
            other => Err(Error::UnknownFormat(format!("connectivity {other:?}"))),
        }
    }
}

impl fmt::Display for Connectivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Four => f.write_str("four"),
            Self::Eight => f.write_str("eight"),
        }
    }
}

/// A validated circle: lattice center plus non-negative radius.
///
/// Construction guarantees that every outline coordinate fits in `i32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Circle {
    center: Point,
    radius: i32,
}

impl Circle {
    /// Create a circle.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRadius`] for a negative radius and
    /// [`Error::CoordinateOverflow`] when `center ± radius` leaves `i32` range.
    ///
    /// Rasterizing allocates on the order of `8 * radius` points, so radii near
    /// `i32::MAX` are accepted here but exhaust memory in [`Circle::points`].
    pub fn new(center: Point, radius: i32) -> Result<Self> {
        if radius < 0 {
            return Err(Error::InvalidRadius { radius });
        }

        let in_range = center.x.checked_add(radius).is_some()
            && center.x.checked_sub(radius).is_some()
            && center.y.checked_add(radius).is_some()
            && center.y.checked_sub(radius).is_some();
        if !in_range {
            return Err(Error::CoordinateOverflow { center, radius });
        }

        Ok(Self { center, radius })
    }

    /// Circle center.
    #[must_use]
    pub const fn center(&self) -> Point {
        self.center
    }

    /// Circle radius.
    #[must_use]
    pub const fn radius(&self) -> i32 {
        self.radius
    }

    /// Rasterize the outline: unique lattice points sorted by `(x, y)`.
    #[must_use]
    pub fn points(&self, connectivity: Connectivity) -> Vec<Point> {
        let offsets = octant_offsets(self.radius, connectivity);
        let Point { x: cx, y: cy } = self.center;

        let mut collected = HashSet::with_capacity(offsets.len() * 8);
        for &(x, y) in &offsets {
            collected.extend([
                Point::new(cx + x, cy + y),
                Point::new(cx + y, cy + x),
                Point::new(cx - y, cy + x),
                Point::new(cx - x, cy + y),
                Point::new(cx - x, cy - y),
                Point::new(cx - y, cy - x),
                Point::new(cx + y, cy - x),
                Point::new(cx + x, cy - y),
            ]);
        }

        let mut points: Vec<Point> = collected.into_iter().collect();
        points.sort_unstable();

        tracing::debug!(
            center = %self.center,
            radius = self.radius,
            %connectivity,
            octant = offsets.len(),
            points = points.len(),
            "rasterized circle"
        );

        points
    }
}

/// Offsets `(x, y)` with `x >= y >= 0` for the octant starting at `(radius, 0)`.
///
/// The error term is kept in `i64` so radii close to `i32::MAX` cannot overflow it.
fn octant_offsets(radius: i32, connectivity: Connectivity) -> Vec<(i32, i32)> {
    let mut x = radius;
    let mut y = 0;
    let mut err: i64 = 0;
    let mut offsets = Vec::new();

    while x >= y {
        offsets.push((x, y));

        let stepped_y = err <= 0;
        if stepped_y {
            y += 1;
            err += 2 * i64::from(y) + 1;
        }
        if err > 0 && !(stepped_y && connectivity == Connectivity::Four) {
            x -= 1;
            err -= 2 * i64::from(x) + 1;
        }
    }

    tracing::trace!(radius, %connectivity, len = offsets.len(), "walked octant");
    offsets
}

/// Lattice points approximating the circle at `(center_x, center_y)`.
///
/// Uses [`Connectivity::Four`]. The result holds no duplicates and is sorted
/// ascending by `(x, y)`; a zero radius yields exactly the center.
///
/// # Errors
///
/// Returns [`Error::InvalidRadius`] if `radius` is negative, or
/// [`Error::CoordinateOverflow`] if the outline would leave `i32` range.
///
/// # Example
///
/// ```
/// use lattice_circle::{generate, Point};
///
/// let points = generate(1, 1, 1).unwrap();
/// assert_eq!(points.len(), 8);
/// assert_eq!(points[0], Point::new(0, 0));
/// ```
pub fn generate(center_x: i32, center_y: i32, radius: i32) -> Result<Vec<Point>> {
    generate_with(center_x, center_y, radius, Connectivity::default())
}

/// Like [`generate`], with an explicit stepping rule.
///
/// # Errors
///
/// Same as [`generate`].
pub fn generate_with(
    center_x: i32,
    center_y: i32,
    radius: i32,
    connectivity: Connectivity,
) -> Result<Vec<Point>> {
    Ok(Circle::new(Point::new(center_x, center_y), radius)?.points(connectivity))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(raw: &[(i32, i32)]) -> Vec<Point> {
        raw.iter().copied().map(Point::from).collect()
    }

    #[test]
    fn test_unit_circle_scenario() {
        let points = generate(1, 1, 1).unwrap();
        assert_eq!(
            points,
            pts(&[(0, 0), (0, 1), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1), (2, 2)])
        );
    }

    #[test]
    fn test_unit_circle_eight_connected_is_diamond() {
        let points = generate_with(1, 1, 1, Connectivity::Eight).unwrap();
        assert_eq!(points, pts(&[(0, 1), (1, 0), (1, 2), (2, 1)]));
    }

    #[test]
    fn test_radius_two_eight_connected() {
        let points = generate_with(0, 0, 2, Connectivity::Eight).unwrap();
        assert_eq!(
            points,
            pts(&[(-2, 0), (-1, -1), (-1, 1), (0, -2), (0, 2), (1, -1), (1, 1), (2, 0)])
        );
    }

    #[test]
    fn test_zero_radius_is_center() {
        for connectivity in [Connectivity::Four, Connectivity::Eight] {
            assert_eq!(
                generate_with(5, -3, 0, connectivity).unwrap(),
                vec![Point::new(5, -3)]
            );
        }
    }

    #[test]
    fn test_negative_radius_rejected() {
        let err = generate(0, 0, -1).unwrap_err();
        assert!(matches!(err, Error::InvalidRadius { radius: -1 }));
    }

    #[test]
    fn test_overflow_rejected() {
        assert!(matches!(
            generate(i32::MAX, 0, 1),
            Err(Error::CoordinateOverflow { .. })
        ));
        assert!(matches!(
            generate(0, i32::MIN, 1),
            Err(Error::CoordinateOverflow { .. })
        ));
        // Radius 0 at the boundary is fine.
        assert_eq!(generate(i32::MAX, i32::MIN, 0).unwrap(), vec![Point::new(i32::MAX, i32::MIN)]);
    }

    #[test]
    fn test_negative_center() {
        let points = generate(-10, -20, 3).unwrap();
        assert!(points.contains(&Point::new(-13, -20)));
        assert!(points.contains(&Point::new(-7, -20)));
        assert!(points.contains(&Point::new(-10, -23)));
        assert!(points.contains(&Point::new(-10, -17)));
    }

    #[test]
    fn test_octant_four_connected_steps() {
        for radius in 1..200 {
            let offsets = octant_offsets(radius, Connectivity::Four);
            for pair in offsets.windows(2) {
                let dx = (pair[0].0 - pair[1].0).abs();
                let dy = (pair[0].1 - pair[1].1).abs();
                assert_eq!(dx + dy, 1, "radius {radius}: {:?} -> {:?}", pair[0], pair[1]);
            }
        }
    }

    #[test]
    fn test_octant_eight_connected_steps() {
        for radius in 1..200 {
            let offsets = octant_offsets(radius, Connectivity::Eight);
            for pair in offsets.windows(2) {
                let dx = (pair[0].0 - pair[1].0).abs();
                let dy = (pair[0].1 - pair[1].1).abs();
                assert_eq!(dx.max(dy), 1, "radius {radius}: {:?} -> {:?}", pair[0], pair[1]);
            }
        }
    }

    #[test]
    fn test_octant_stays_in_first_octant() {
        for connectivity in [Connectivity::Four, Connectivity::Eight] {
            for &(x, y) in &octant_offsets(50, connectivity) {
                assert!(x >= y && y >= 0);
            }
        }
    }

    #[test]
    fn test_four_is_superset_of_eight_count() {
        for radius in 1..64 {
            let four = generate_with(0, 0, radius, Connectivity::Four).unwrap();
            let eight = generate_with(0, 0, radius, Connectivity::Eight).unwrap();
            assert!(four.len() >= eight.len());
        }
    }

    #[test]
    fn test_tolerance_exceeds_single_ring_width() {
        // (-6, -5) sits about 1.19 inside radius 9: outside |d² - r²| <= 2r + 1,
        // inside |d - r| < 1.5.
        let p = Point::new(-6, -5);
        for connectivity in [Connectivity::Four, Connectivity::Eight] {
            let points = generate_with(0, 0, 9, connectivity).unwrap();
            assert!(points.binary_search(&p).is_ok(), "{connectivity}");
        }

        let d2 = p.distance_squared(Point::ORIGIN);
        assert_eq!(d2 - 81, -20);
        assert!((d2 - 81).abs() > 2 * 9 + 1);
        assert!(4 * d2 > (2 * 9 - 3) * (2 * 9 - 3));
        assert!(4 * d2 < (2 * 9 + 3) * (2 * 9 + 3));
    }

    #[test]
    fn test_circle_accessors() {
        let circle = Circle::new(Point::new(2, 3), 4).unwrap();
        assert_eq!(circle.center(), Point::new(2, 3));
        assert_eq!(circle.radius(), 4);
        assert_eq!(circle.points(Connectivity::Four), generate(2, 3, 4).unwrap());
    }

    #[test]
    fn test_connectivity_parse() {
        assert_eq!("four".parse::<Connectivity>().unwrap(), Connectivity::Four);
        assert_eq!(" EIGHT ".parse::<Connectivity>().unwrap(), Connectivity::Eight);
        assert_eq!("8".parse::<Connectivity>().unwrap(), Connectivity::Eight);
        assert!(matches!(
            "six".parse::<Connectivity>(),
            Err(Error::UnknownFormat(_))
        ));
        assert_eq!(Connectivity::default().to_string(), "four");
    }
}
