//! Validation of untyped circle parameters.
//!
//! [`generate`](crate::generate) takes `i32` arguments, so non-integral input
//! can only arrive through text or floating-point values. The helpers here
//! convert those and report [`Error::InvalidInputType`] on anything that is
//! not an exact integer.

use std::str::FromStr;

use crate::error::{Error, Result};
use crate::geometry::Point;
use crate::raster::{generate_with, Connectivity};

/// Parse a decimal integer (optional sign, surrounding whitespace allowed).
///
/// # Errors
///
/// Returns [`Error::InvalidInputType`] for fractional, non-numeric, empty or
/// out-of-range text.
pub fn parse_integer(field: &'static str, text: &str) -> Result<i32> {
    text.trim()
        .parse::<i32>()
        .map_err(|_| invalid(field, text))
}

/// Convert a float that holds a whole number in `i32` range.
///
/// # Errors
///
/// Returns [`Error::InvalidInputType`] for fractional, NaN, infinite or
/// out-of-range values.
pub fn integral_from_f64(field: &'static str, value: f64) -> Result<i32> {
    let in_range = value >= f64::from(i32::MIN) && value <= f64::from(i32::MAX);
    if value.is_finite() && value.fract() == 0.0 && in_range {
        Ok(value as i32)
    } else {
        Err(invalid(field, &value.to_string()))
    }
}

fn invalid(field: &'static str, value: &str) -> Error {
    Error::InvalidInputType {
        field,
        value: value.to_string(),
    }
}

/// Circle parameters as supplied by a caller, before rasterization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CircleParams {
    /// Center X coordinate.
    pub center_x: i32,
    /// Center Y coordinate.
    pub center_y: i32,
    /// Radius (validated on [`generate`](Self::generate)).
    pub radius: i32,
}

impl CircleParams {
    /// Create parameters.
    #[must_use]
    pub const fn new(center_x: i32, center_y: i32, radius: i32) -> Self {
        Self {
            center_x,
            center_y,
            radius,
        }
    }

    /// Center as a point.
    #[must_use]
    pub const fn center(&self) -> Point {
        Point::new(self.center_x, self.center_y)
    }

    /// Rasterize these parameters.
    ///
    /// # Errors
    ///
    /// See [`generate`](crate::generate).
    pub fn generate(&self, connectivity: Connectivity) -> Result<Vec<Point>> {
        generate_with(self.center_x, self.center_y, self.radius, connectivity)
    }
}

impl FromStr for CircleParams {
    type Err = Error;

    /// Parse `"cx,cy,r"`.
    fn from_str(s: &str) -> Result<Self> {
        let mut fields = s.split(',');
        let mut next = |field: &'static str| -> Result<i32> {
            let text = fields.next().ok_or_else(|| invalid(field, ""))?;
            parse_integer(field, text)
        };

        let params = Self::new(next("center_x")?, next("center_y")?, next("radius")?);

        match fields.next() {
            Some(extra) => Err(invalid("circle", extra)),
            None => Ok(params),
        }
    }
}
