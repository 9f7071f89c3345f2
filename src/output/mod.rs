//! Point list encoders (tuple lines, CSV, JSON).

mod points;

pub use points::{write_points, PointFormat};
