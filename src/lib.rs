//! # Lattice-Circle
//!
//! Integer-only circle rasterization for grid-based rendering (ASCII art,
//! pixel graphics, tile maps).
//!
//! The midpoint circle algorithm walks one octant with an integer error term
//! and mirrors each offset eight ways. The result is a deduplicated list of
//! lattice points, sorted by `(x, y)`.
//!
//! ## Quick Start
//!
//! ```rust
//! use lattice_circle::{generate, Point};
//!
//! let points = generate(1, 1, 1)?;
//! assert_eq!(points.first(), Some(&Point::new(0, 0)));
//! assert_eq!(points.last(), Some(&Point::new(2, 2)));
//! # Ok::<(), lattice_circle::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` on [`Point`] and JSON output
//! - `cli`: the `circle-coords` demonstration binary
//!
//! ## References
//!
//! - Bresenham, J. E. (1977). "A linear algorithm for incremental digital
//!   display of circular arcs." Communications of the ACM 20(2).

#![cfg_attr(docsrs, feature(doc_cfg))]
// Allow unwrap() in tests only
#![cfg_attr(test, allow(clippy::unwrap_used))]

/// Error types and result alias.
pub mod error;

/// Lattice points.
pub mod geometry;

/// Validation of text and floating-point circle parameters.
pub mod input;

/// Point list encoders.
pub mod output;

/// Midpoint circle rasterization.
pub mod raster;

pub use error::{Error, Result};
pub use geometry::Point;
pub use raster::{generate, generate_with, Circle, Connectivity};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::geometry::Point;
    pub use crate::input::CircleParams;
    pub use crate::output::{write_points, PointFormat};
    pub use crate::raster::{generate, generate_with, Circle, Connectivity};
}
