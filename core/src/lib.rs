#![no_std]

extern crate alloc;

use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use geometry::*;
pub use session::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod generator;
mod geometry;
mod session;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub mines: CellCount,
}

impl GameConfig {
    pub const DEFAULT_SIZE: Coord = 6;
    pub const DEFAULT_MINES: CellCount = 7;

    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    pub fn new(size: Coord2, mines: CellCount) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(GameError::InvalidSize);
        }
        if mines > mult(size.0, size.1) {
            return Err(GameError::TooManyMines);
        }
        Ok(Self::new_unchecked(size, mines))
    }

    /// Square board of `size` by `size` cells.
    pub fn square(size: Coord, mines: CellCount) -> Result<Self> {
        Self::new((size, size), mines)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(
            (Self::DEFAULT_SIZE, Self::DEFAULT_SIZE),
            Self::DEFAULT_MINES,
        )
    }
}

/// Generated minefield: every cell is either a mine or knows how many of its
/// neighbors are mines. Never changes once built.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<BoardCell>,
    size: Coord2,
    mine_count: CellCount,
}

impl Board {
    pub fn from_mine_mask(mine_mask: &Array2<bool>) -> Result<Self> {
        let (dim_x, dim_y) = mine_mask.dim();
        let size_x = Coord::try_from(dim_x).map_err(|_| GameError::InvalidSize)?;
        let size_y = Coord::try_from(dim_y).map_err(|_| GameError::InvalidSize)?;
        if size_x == 0 || size_y == 0 {
            return Err(GameError::InvalidSize);
        }
        Ok(Self::from_sized_mask(mine_mask, (size_x, size_y)))
    }

    /// `size` must be the dimensions of `mine_mask`.
    pub(crate) fn from_sized_mask(mine_mask: &Array2<bool>, size: Coord2) -> Self {
        let mut mine_count: CellCount = 0;
        let cells = Array2::from_shape_fn(size.to_nd_index(), |(x, y)| {
            if mine_mask[[x, y]] {
                mine_count += 1;
                return BoardCell::Mine;
            }
            // both indices are below a Coord-sized dimension
            let adjacent = NeighborIter::new((x as Coord, y as Coord), size)
                .filter(|&pos| mine_mask[pos.to_nd_index()])
                .count();
            BoardCell::Safe(adjacent as u8)
        });

        Self {
            cells,
            size,
            mine_count,
        }
    }

    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(GameError::InvalidSize);
        }
        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());

        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::InvalidCoords);
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        Self::from_mine_mask(&mine_mask)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if coords.0 < self.size.0 && coords.1 < self.size.1 {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn size(&self) -> Coord2 {
        self.size
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn cell(&self, coords: Coord2) -> BoardCell {
        self[coords]
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords].is_mine()
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.size)
    }

    /// Coordinates of every mine, column by column.
    pub fn mines(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.cells
            .indexed_iter()
            .filter(|(_, cell)| cell.is_mine())
            .map(|((x, y), _)| (x as Coord, y as Coord))
    }
}

impl Index<Coord2> for Board {
    type Output = BoardCell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
            Won => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn config_rejects_more_mines_than_cells() {
        assert_eq!(GameConfig::square(2, 5), Err(GameError::TooManyMines));
        assert_eq!(GameConfig::new((0, 4), 0), Err(GameError::InvalidSize));
        assert!(GameConfig::square(2, 4).is_ok());
    }

    #[test]
    fn default_config_is_six_by_six_with_seven_mines() {
        let config = GameConfig::default();
        assert_eq!(config.size, (6, 6));
        assert_eq!(config.mines, 7);
        assert_eq!(config.safe_cells(), 29);
    }

    #[test]
    fn board_counts_adjacent_mines() {
        let board = Board::from_mine_coords((3, 3), &[(0, 0), (2, 0)]).unwrap();

        assert_eq!(board.cell((0, 0)), BoardCell::Mine);
        assert_eq!(board.cell((1, 0)), BoardCell::Safe(2));
        assert_eq!(board.cell((1, 1)), BoardCell::Safe(2));
        assert_eq!(board.cell((0, 1)), BoardCell::Safe(1));
        assert_eq!(board.cell((1, 2)), BoardCell::Safe(0));
        assert_eq!(board.cell((0, 0)).to_count(), -1);
        assert_eq!(board.mine_count(), 2);
        assert_eq!(board.safe_cell_count(), 7);
    }

    #[test]
    fn board_surrounded_cell_counts_eight() {
        let ring: Vec<Coord2> = NeighborIter::new((1, 1), (3, 3)).collect();
        let board = Board::from_mine_coords((3, 3), &ring).unwrap();

        assert_eq!(board.cell((1, 1)), BoardCell::Safe(8));
    }

    #[test]
    fn duplicate_mine_coords_count_once() {
        let board = Board::from_mine_coords((2, 2), &[(1, 1), (1, 1)]).unwrap();
        assert_eq!(board.mine_count(), 1);
        assert_eq!(board.mines().collect::<Vec<_>>(), [(1, 1)]);
    }

    #[test]
    fn out_of_bounds_mine_is_rejected() {
        assert_eq!(
            Board::from_mine_coords((2, 2), &[(2, 0)]),
            Err(GameError::InvalidCoords)
        );
        let board = Board::from_mine_coords((2, 2), &[]).unwrap();
        assert_eq!(board.validate_coords((0, 2)), Err(GameError::InvalidCoords));
    }
}
