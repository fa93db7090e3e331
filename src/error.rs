//! Error taxonomy for the kernel
//!
//! Every math and collision routine fails fast instead of propagating NaN
//! or silently returning a default, except where an explicit fallback
//! policy exists (zero-vector normalize, fixed-axis collision normal on
//! coincident centers, projection onto the zero vector).

use thiserror::Error;

/// Errors produced by the kernel.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Malformed matrix or shape construction: wrong dimensions, negative
    /// extents, or non-finite data. Fatal to the call; the caller must not
    /// proceed with the malformed object.
    #[error("malformed shape: {0}")]
    Shape(String),

    /// A predicate was invoked on a shape lacking the data the test
    /// requires (degenerate polygon, line interior). Fatal to that call
    /// only.
    #[error("missing shape data: {0}")]
    MissingShapeData(String),

    /// Tile lookup outside the grid extents. Recoverable: callers should
    /// treat this as "no tile" rather than abort the frame loop.
    #[error("position ({x}, {y}) is outside the tile grid")]
    OutOfBounds { x: f64, y: f64 },

    /// Sprite sequence name not present in the sheet.
    #[error("unknown sprite sequence: {0}")]
    UnknownSequence(String),
}
