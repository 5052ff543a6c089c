use crate::*;

/// Pixel layout of a board drawn as a grid of square cells starting at the canvas origin.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CanvasGeometry {
    pub board_size: Coord2,
    pub cell_size: f64,
}

impl CanvasGeometry {
    pub const DEFAULT_CELL_SIZE: f64 = 25.0;

    pub const fn new(board_size: Coord2, cell_size: f64) -> Self {
        Self {
            board_size,
            cell_size,
        }
    }

    pub fn canvas_size(&self) -> (u32, u32) {
        (
            (f64::from(self.board_size.0) * self.cell_size) as u32,
            (f64::from(self.board_size.1) * self.cell_size) as u32,
        )
    }

    /// Top-left corner of a cell.
    pub fn cell_origin(&self, (x, y): Coord2) -> (f64, f64) {
        (f64::from(x) * self.cell_size, f64::from(y) * self.cell_size)
    }

    pub fn cell_center(&self, coords: Coord2) -> (f64, f64) {
        let (left, top) = self.cell_origin(coords);
        let half = self.cell_size / 2.0;
        (left + half, top + half)
    }

    /// Maps a point relative to the canvas origin to the cell under it.
    pub fn cell_at(&self, x: f64, y: f64) -> Option<Coord2> {
        Some((
            Self::axis_cell(x, self.cell_size, self.board_size.0)?,
            Self::axis_cell(y, self.cell_size, self.board_size.1)?,
        ))
    }

    fn axis_cell(offset: f64, cell_size: f64, cells: Coord) -> Option<Coord> {
        // also rejects NaN
        if !(offset >= 0.0) || !(cell_size > 0.0) {
            return None;
        }
        // truncation is floor for non-negative values
        let index = (offset / cell_size) as u32;
        if index < u32::from(cells) {
            Some(index as Coord)
        } else {
            None
        }
    }
}

impl Default for CanvasGeometry {
    fn default() -> Self {
        Self::new(
            (GameConfig::DEFAULT_SIZE, GameConfig::DEFAULT_SIZE),
            Self::DEFAULT_CELL_SIZE,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvas_fits_the_board() {
        assert_eq!(CanvasGeometry::default().canvas_size(), (150, 150));
        assert_eq!(CanvasGeometry::new((8, 3), 10.0).canvas_size(), (80, 30));
    }

    #[test]
    fn points_map_to_cells() {
        let geometry = CanvasGeometry::default();

        assert_eq!(geometry.cell_at(0.0, 0.0), Some((0, 0)));
        assert_eq!(geometry.cell_at(24.9, 25.0), Some((0, 1)));
        assert_eq!(geometry.cell_at(149.0, 62.5), Some((5, 2)));
    }

    #[test]
    fn points_outside_the_grid_are_ignored() {
        let geometry = CanvasGeometry::default();

        assert_eq!(geometry.cell_at(-0.5, 10.0), None);
        assert_eq!(geometry.cell_at(10.0, 150.0), None);
        assert_eq!(geometry.cell_at(f64::NAN, 10.0), None);
        assert_eq!(geometry.cell_at(1e12, 10.0), None);
    }

    #[test]
    fn cell_positions() {
        let geometry = CanvasGeometry::default();

        assert_eq!(geometry.cell_origin((2, 1)), (50.0, 25.0));
        assert_eq!(geometry.cell_center((0, 0)), (12.5, 12.5));
    }
}
