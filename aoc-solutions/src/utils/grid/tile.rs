//! Coordinate model: tiles, grid dimensions and position classification.

use std::fmt;

use super::{Connectivity, GridError};

/// A cell coordinate. `x` grows to the right, `y` grows downwards.
///
/// Tiles are plain values: every move returns a new tile and never checks
/// bounds. Bounds are the business of [`GridSize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Tile {
    pub x: i32,
    pub y: i32,
}

impl Tile {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn move_x(self, distance: i32) -> Self {
        Self::new(self.x + distance, self.y)
    }

    pub const fn move_y(self, distance: i32) -> Self {
        Self::new(self.x, self.y + distance)
    }

    pub const fn translate(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl From<(i32, i32)> for Tile {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Where a tile sits relative to the border of its grid.
///
/// Derived on demand by [`GridSize::position`]; checks run top row first,
/// then bottom row, then the side columns, so a single-row grid reports
/// `Top*` positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    TopLeft,
    Top,
    TopRight,
    Left,
    Center,
    Right,
    BottomLeft,
    Bottom,
    BottomRight,
}

impl Position {
    pub fn is_corner(self) -> bool {
        matches!(
            self,
            Position::TopLeft | Position::TopRight | Position::BottomLeft | Position::BottomRight
        )
    }

    pub fn is_edge(self) -> bool {
        matches!(
            self,
            Position::Top | Position::Left | Position::Right | Position::Bottom
        )
    }

    /// Neighbour count of a tile in this position on a grid at least 2x2.
    pub fn neighbor_count(self, connectivity: Connectivity) -> usize {
        match (connectivity, self) {
            (Connectivity::Orthogonal, p) if p.is_corner() => 2,
            (Connectivity::Orthogonal, p) if p.is_edge() => 3,
            (Connectivity::Orthogonal, _) => 4,
            (Connectivity::WithDiagonals, p) if p.is_corner() => 3,
            (Connectivity::WithDiagonals, p) if p.is_edge() => 5,
            (Connectivity::WithDiagonals, _) => 8,
        }
    }
}

/// Immutable `width x height` dimensions of a row-major grid.
///
/// Converts between tiles and flat indices with `index = y * width + x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridSize {
    width: usize,
    height: usize,
}

impl GridSize {
    /// Both dimensions must be non-zero and fit in an `i32` coordinate.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        let addressable = |n: usize| n > 0 && i32::try_from(n).is_ok();
        if !addressable(width) || !addressable(height) || width.checked_mul(height).is_none() {
            return Err(GridError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    /// Always false; a grid has at least one cell.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, tile: Tile) -> bool {
        usize::try_from(tile.x).is_ok_and(|x| x < self.width)
            && usize::try_from(tile.y).is_ok_and(|y| y < self.height)
    }

    pub(super) fn check(&self, tile: Tile) -> Result<(), GridError> {
        if self.contains(tile) {
            Ok(())
        } else {
            Err(GridError::TileOutOfBounds {
                tile,
                width: self.width,
                height: self.height,
            })
        }
    }

    pub fn index_of(&self, tile: Tile) -> Result<usize, GridError> {
        self.check(tile)?;
        Ok(tile.y as usize * self.width + tile.x as usize)
    }

    pub fn tile_at(&self, index: usize) -> Result<Tile, GridError> {
        if index >= self.len() {
            return Err(GridError::IndexOutOfBounds {
                index,
                len: self.len(),
            });
        }
        Ok(Tile::new(
            (index % self.width) as i32,
            (index / self.width) as i32,
        ))
    }

    pub fn position(&self, tile: Tile) -> Result<Position, GridError> {
        self.check(tile)?;
        let (column, row) = (tile.x as usize, tile.y as usize);
        let (last_column, last_row) = (self.width - 1, self.height - 1);

        Ok(match (row, column) {
            (0, 0) => Position::TopLeft,
            (0, c) if c == last_column => Position::TopRight,
            (0, _) => Position::Top,
            (r, 0) if r == last_row => Position::BottomLeft,
            (r, c) if r == last_row && c == last_column => Position::BottomRight,
            (r, _) if r == last_row => Position::Bottom,
            (_, 0) => Position::Left,
            (_, c) if c == last_column => Position::Right,
            _ => Position::Center,
        })
    }

    /// All tiles in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + use<> {
        let (width, height) = (self.width as i32, self.height as i32);
        (0..height).flat_map(move |y| (0..width).map(move |x| Tile::new(x, y)))
    }
}
