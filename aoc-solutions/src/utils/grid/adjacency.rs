//! Boundary-aware neighbour enumeration.

use super::{GridError, GridSize, Tile};

/// Which shifts count as adjacent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Connectivity {
    /// Right, left, up, down.
    #[default]
    Orthogonal,
    /// Orthogonal shifts followed by the four diagonals.
    WithDiagonals,
}

static ORTHOGONAL: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, -1), (0, 1)];
static DIAGONAL: [(i32, i32); 4] = [(1, -1), (1, 1), (-1, -1), (-1, 1)];

impl Connectivity {
    fn offsets(self) -> impl Iterator<Item = (i32, i32)> {
        let diagonals: &'static [(i32, i32)] = match self {
            Connectivity::Orthogonal => &[],
            Connectivity::WithDiagonals => &DIAGONAL,
        };
        ORTHOGONAL.iter().chain(diagonals).copied()
    }
}

impl GridSize {
    /// In-bounds neighbours of `tile`, in a fixed order.
    ///
    /// Corners get 2 (3 with diagonals), other border tiles 3 (5), interior
    /// tiles 4 (8). A `tile` outside the grid is an error, not an empty list.
    pub fn neighbors(&self, tile: Tile, connectivity: Connectivity) -> Result<Vec<Tile>, GridError> {
        self.check(tile)?;
        Ok(connectivity
            .offsets()
            .map(|(dx, dy)| tile.translate(dx, dy))
            .filter(|candidate| self.contains(*candidate))
            .collect())
    }

    /// Flat-index form of [`GridSize::neighbors`] for cells stored in a `Vec`.
    pub fn neighbor_indices(
        &self,
        index: usize,
        connectivity: Connectivity,
    ) -> Result<Vec<usize>, GridError> {
        let tile = self.tile_at(index)?;
        self.neighbors(tile, connectivity)?
            .into_iter()
            .map(|neighbor| self.index_of(neighbor))
            .collect()
    }
}
