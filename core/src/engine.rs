use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::Playing
    }
}

/// One round of play over a fixed [`Board`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    revealed: Array2<bool>,
    flagged: Array2<bool>,
    revealed_count: CellCount,
    flagged_count: CellCount,
    status: GameStatus,
    triggered_mine: Option<Coord2>,
}

impl Game {
    pub fn new(board: Board) -> Self {
        let shape = board.size().to_nd_index();
        Self {
            board,
            revealed: Array2::default(shape),
            flagged: Array2::default(shape),
            revealed_count: 0,
            flagged_count: 0,
            status: Default::default(),
            triggered_mine: None,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> Coord2 {
        self.board.size()
    }

    pub fn total_mines(&self) -> CellCount {
        self.board.mine_count()
    }

    /// Safe cells revealed so far; mines shown after a loss are not counted.
    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn flagged_count(&self) -> CellCount {
        self.flagged_count
    }

    pub fn mines_left(&self) -> i32 {
        i32::from(self.board.mine_count()) - i32::from(self.flagged_count)
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn is_revealed(&self, coords: Coord2) -> bool {
        self.revealed[coords.to_nd_index()]
    }

    pub fn is_flagged(&self, coords: Coord2) -> bool {
        self.flagged[coords.to_nd_index()]
    }

    pub fn cell_view(&self, coords: Coord2) -> CellView {
        if self.is_flagged(coords) {
            return CellView::Flagged;
        }
        if !self.is_revealed(coords) {
            return CellView::Hidden;
        }
        match self.board[coords] {
            BoardCell::Mine if self.triggered_mine == Some(coords) => CellView::TriggeredMine,
            BoardCell::Mine => CellView::Mine,
            BoardCell::Safe(count) => CellView::Revealed(count),
        }
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let coords = self.board.validate_coords(coords)?;
        self.check_playing()?;

        let index = coords.to_nd_index();
        if self.revealed[index] {
            return Ok(MarkOutcome::NoChange);
        }

        if self.flagged[index] {
            self.flagged[index] = false;
            self.flagged_count -= 1;
        } else {
            self.flagged[index] = true;
            self.flagged_count += 1;
        }
        Ok(MarkOutcome::Changed)
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.board.validate_coords(coords)?;
        self.check_playing()?;

        let index = coords.to_nd_index();
        if self.revealed[index] || self.flagged[index] {
            log::trace!("reveal {:?} ignored", coords);
            return Ok(RevealOutcome::NoChange);
        }

        if self.board.contains_mine(coords) {
            self.triggered_mine = Some(coords);
            self.reveal_all_mines();
            self.status = GameStatus::Lost;
            log::info!("mine hit at {:?}, game lost", coords);
            return Ok(RevealOutcome::HitMine);
        }

        self.flood_reveal(coords);

        if self.revealed_count == self.board.safe_cell_count() {
            self.status = GameStatus::Won;
            log::info!("all {} safe cells revealed, game won", self.revealed_count);
            Ok(RevealOutcome::Won)
        } else {
            Ok(RevealOutcome::Revealed)
        }
    }

    /// Depth-first reveal from `start`, spreading through zero-count cells and stopping at numbered ones.
    fn flood_reveal(&mut self, start: Coord2) {
        let mut to_visit = Vec::from([start]);

        while let Some(coords) = to_visit.pop() {
            let index = coords.to_nd_index();
            if self.revealed[index] || self.flagged[index] {
                continue;
            }

            self.revealed[index] = true;
            self.revealed_count += 1;

            if self.board[coords] == BoardCell::Safe(0) {
                to_visit.extend(self.board.iter_neighbors(coords).filter(|&pos| {
                    let pos = pos.to_nd_index();
                    !self.revealed[pos] && !self.flagged[pos]
                }));
            }
        }
    }

    fn reveal_all_mines(&mut self) {
        let mines: Vec<Coord2> = self.board.mines().collect();
        for coords in mines {
            let index = coords.to_nd_index();
            self.revealed[index] = true;
            if self.flagged[index] {
                self.flagged[index] = false;
                self.flagged_count -= 1;
            }
        }
    }

    fn check_playing(&self) -> Result<()> {
        if self.status.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}
