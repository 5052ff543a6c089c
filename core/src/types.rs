/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

const DISPLACEMENTS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (i8, i8), bounds: Coord2) -> Option<Coord2> {
    let (x, y) = coords;
    let (dx, dy) = delta;
    let (max_x, max_y) = bounds;

    let next_x = x.checked_add_signed(dx)?;
    if next_x >= max_x {
        return None;
    }

    let next_y = y.checked_add_signed(dy)?;
    if next_y >= max_y {
        return None;
    }

    Some((next_x, next_y))
}

/// Iterates over the up-to-8 in-bounds neighbors of a cell.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    index: u8,
}

impl NeighborIter {
    pub fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let delta = DISPLACEMENTS.get(usize::from(self.index))?;
            self.index += 1;

            if let Some(next_item) = apply_delta(self.center, *delta, self.bounds) {
                return Some(next_item);
            }
        }
    }
}
