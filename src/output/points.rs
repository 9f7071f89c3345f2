//! Text encodings for a rasterized point list.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::geometry::Point;

/// Encoding used by [`write_points`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PointFormat {
    /// One `(x, y)` per line.
    #[default]
    Tuple,
    /// One `x,y` per line, no header.
    Csv,
    /// A JSON array of `{"x": .., "y": ..}` objects.
    #[cfg(feature = "serde")]
    Json,
}

impl FromStr for PointFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tuple" => Ok(Self::Tuple),
            "csv" => Ok(Self::Csv),
            #[cfg(feature = "serde")]
            "json" => Ok(Self::Json),
            other => Err(Error::UnknownFormat(format!("format {other:?}"))),
        }
    }
}

impl fmt::Display for PointFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Tuple => "tuple",
            Self::Csv => "csv",
            #[cfg(feature = "serde")]
            Self::Json => "json",
        };
        f.write_str(name)
    }
}

/// Write `points` to `writer` in the given format.
///
/// # Errors
///
/// Propagates I/O failures from `writer` (and JSON encoding failures).
pub fn write_points<W: Write>(writer: &mut W, points: &[Point], format: PointFormat) -> Result<()> {
    match format {
        PointFormat::Tuple => {
            for p in points {
                writeln!(writer, "{p}")?;
            }
        }
        PointFormat::Csv => {
            for p in points {
                writeln!(writer, "{},{}", p.x, p.y)?;
            }
        }
        #[cfg(feature = "serde")]
        PointFormat::Json => {
            serde_json::to_writer(&mut *writer, points)?;
            writeln!(writer)?;
        }
    }
    writer.flush()?;
    Ok(())
}
