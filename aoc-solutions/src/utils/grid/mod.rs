//! Grid and graph utilities shared by the grid puzzles.
//!
//! # Layers
//!
//! - [`Tile`] / [`GridSize`]: coordinates and the row-major mapping
//!   `index = y * width + x`, plus the derived [`Position`] of a tile.
//! - [`GridSize::neighbors`]: in-bounds 4- or 8-neighbourhood, selected with
//!   [`Connectivity`].
//! - [`Graph`] / [`WeightedGraph`]: what the search needs, implemented by the
//!   grid-backed [`SquareGrid`] and the map-backed [`SimpleGraph`].
//! - [`breadth_first_search`]: FIFO traversal with an optional goal and an
//!   acceptance predicate, returning the predecessor mapping ([`CameFrom`]).
//!
//! # Example: connected region under a predicate
//!
//! ```rust
//! use aoc_solutions::utils::grid::{
//!     try_breadth_first_search, Connectivity, GridError, GridSize, SquareGrid, Tile,
//! };
//!
//! // 1 1 9
//! // 9 1 9
//! // 9 9 1
//! let heights = [1, 1, 9, 9, 1, 9, 9, 9, 1];
//! let size = GridSize::new(3, 3).unwrap();
//! let grid = SquareGrid::new(size, Connectivity::Orthogonal);
//!
//! let region = try_breadth_first_search(&grid, Tile::new(0, 0), None, |tile| {
//!     size.index_of(*tile).map(|i| heights[i] < 9)
//! })
//! .unwrap();
//!
//! assert_eq!(region.len(), 3);
//! assert!(!region.contains(&Tile::new(2, 2)));
//! # Ok::<(), GridError>(())
//! ```

mod adjacency;
mod error;
mod graph;
mod search;
mod tile;

pub use adjacency::Connectivity;
pub use error::GridError;
pub use graph::{Graph, SimpleGraph, SquareGrid, WeightedGraph};
pub use search::{breadth_first_search, reachable, try_breadth_first_search, CameFrom};
pub use tile::{GridSize, Position, Tile};

#[cfg(test)]
mod tests;
