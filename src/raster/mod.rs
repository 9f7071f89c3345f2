//! Lattice rasterization.
//!
//! # Algorithms
//!
//! - **Midpoint Circle**: integer-only outline with 8-way octant symmetry,
//!   in 4-connected and 8-connected stepping variants
//!
//! # References
//!
//! - Bresenham, J. E. (1977). "A linear algorithm for incremental digital
//!   display of circular arcs." Communications of the ACM 20(2).

mod circle;

pub use circle::{generate, generate_with, Circle, Connectivity};
