//! Errors raised by the grid layer.

use thiserror::Error;

use super::Tile;

/// Invalid arguments passed to grid conversions or adjacency queries.
///
/// Grid operations never clamp: an out-of-range value is reported to the
/// caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    /// Width or height is zero, or too large to address with `i32` coordinates
    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    /// Flat index is not below `width * height`
    #[error("index {index} out of bounds for grid of {len} cells")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Tile lies outside `[0, width) x [0, height)`
    #[error("tile {tile} out of bounds for {width}x{height} grid")]
    TileOutOfBounds {
        tile: Tile,
        width: usize,
        height: usize,
    },
}
