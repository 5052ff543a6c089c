use super::*;
use alloc::vec::Vec;

/// Purely random placement: every set of `mines` cells is equally likely for a given config, and the same seed always
/// yields the same board.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomBoardGenerator {
    seed: u64,
}

impl RandomBoardGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(self, config: GameConfig) -> Board {
        use rand::prelude::*;

        let size = (config.size.0.max(1), config.size.1.max(1));
        let total_cells = mult(size.0, size.1);
        let mines = if config.mines > total_cells {
            log::warn!(
                "Board already full, generated anyway, requested {} but only fits {}",
                config.mines,
                total_cells
            );
            total_cells
        } else {
            config.mines
        };

        // partial Fisher-Yates: the first `mines` slots end up as a uniform sample
        let total = usize::from(total_cells);
        let mut cell_indices: Vec<usize> = (0..total).collect();
        let mut rng = SmallRng::seed_from_u64(self.seed);
        for i in 0..usize::from(mines) {
            let pick = rng.random_range(i..total);
            cell_indices.swap(i, pick);
        }

        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());
        let column_len = usize::from(size.1);
        for &index in &cell_indices[..usize::from(mines)] {
            mine_mask[[index / column_len, index % column_len]] = true;
        }

        let board = Board::from_sized_mask(&mine_mask, size);
        log::debug!(
            "generated {}x{} board with {} mines (seed {})",
            size.0,
            size.1,
            board.mine_count(),
            self.seed
        );
        board
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate(seed: u64, size: Coord2, mines: CellCount) -> Board {
        RandomBoardGenerator::new(seed).generate(GameConfig::new(size, mines).unwrap())
    }

    #[test]
    fn mine_count_matches_config_for_many_seeds() {
        for seed in 0..200 {
            let board = generate(seed, (6, 6), 7);
            assert_eq!(board.mine_count(), 7, "seed {seed}");
            assert_eq!(board.mines().count(), 7, "seed {seed}");
        }
    }

    #[test]
    fn safe_cells_count_their_mine_neighbors() {
        for seed in 0..50 {
            let board = generate(seed, (9, 7), 15);
            let (size_x, size_y) = board.size();
            for x in 0..size_x {
                for y in 0..size_y {
                    let Some(count) = board.cell((x, y)).adjacent_mines() else {
                        continue;
                    };
                    let expected = board
                        .iter_neighbors((x, y))
                        .filter(|&pos| board.contains_mine(pos))
                        .count();
                    assert_eq!(usize::from(count), expected, "seed {seed} at {:?}", (x, y));
                    assert!(count <= 8);
                }
            }
        }
    }

    #[test]
    fn same_seed_same_board() {
        assert_eq!(generate(42, (6, 6), 7), generate(42, (6, 6), 7));
    }

    #[test]
    fn different_seeds_spread_mines_around() {
        let distinct = (0..20)
            .map(|seed| generate(seed, (6, 6), 7))
            .fold(Vec::<Board>::new(), |mut seen, board| {
                if !seen.contains(&board) {
                    seen.push(board);
                }
                seen
            })
            .len();
        assert!(distinct > 1);
    }

    #[test]
    fn full_and_empty_boards() {
        let full = generate(1, (3, 2), 6);
        assert_eq!(full.mine_count(), 6);
        assert_eq!(full.safe_cell_count(), 0);

        let empty = generate(1, (3, 2), 0);
        assert_eq!(empty.mine_count(), 0);
        assert!(empty.mines().next().is_none());
    }

    #[test]
    fn oversized_mine_count_is_clamped() {
        let board = RandomBoardGenerator::new(3).generate(GameConfig::new_unchecked((2, 2), 10));
        assert_eq!(board.mine_count(), 4);
    }

    #[test]
    fn non_square_board_keeps_its_shape() {
        let board = generate(9, (8, 3), 5);
        assert_eq!(board.size(), (8, 3));
        assert!(board.mines().all(|(x, y)| x < 8 && y < 3));
    }
}
