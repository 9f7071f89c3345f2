//! Error types for lattice-circle operations.

use crate::geometry::Point;
use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when rasterizing or emitting a circle.
#[derive(Error, Debug)]
pub enum Error {
    /// Radius below zero.
    #[error("Invalid radius: {radius} (radius must be non-negative)")]
    InvalidRadius {
        /// Rejected radius value.
        radius: i32,
    },

    /// Input that is not an integral value (fractional, non-numeric, out of range).
    #[error("Invalid input for {field}: {value:?} is not an integer")]
    InvalidInputType {
        /// Name of the offending parameter.
        field: &'static str,
        /// Offending input, as received.
        value: String,
    },

    /// Outline would leave the `i32` coordinate range.
    #[error("Coordinate overflow: circle at {center} with radius {radius} exceeds i32 range")]
    CoordinateOverflow {
        /// Requested center.
        center: Point,
        /// Requested radius.
        radius: i32,
    },

    /// Unknown output format or connectivity name.
    #[error("Unknown option: {0}")]
    UnknownFormat(String),

    /// I/O error while writing points.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON encoding error.
    #[cfg(feature = "serde")]
    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),
}
