use rand::prelude::*;

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ClickOutcome {
    NoChange,
    Changed,
    /// The finished game was replaced by a fresh one.
    NewGame,
}

impl ClickOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

impl From<RevealOutcome> for ClickOutcome {
    fn from(outcome: RevealOutcome) -> Self {
        if outcome.has_update() {
            Self::Changed
        } else {
            Self::NoChange
        }
    }
}

impl From<MarkOutcome> for ClickOutcome {
    fn from(outcome: MarkOutcome) -> Self {
        if outcome.has_update() {
            Self::Changed
        } else {
            Self::NoChange
        }
    }
}

/// Owns the current game and deals a new one whenever a finished game is clicked.
///
/// Clicks arrive already translated to grid coordinates; `None` stands for a click that landed outside the grid.
#[derive(Debug)]
pub struct Session {
    config: GameConfig,
    rng: SmallRng,
    game: Game,
    games_started: u32,
}

impl Session {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let game = Self::deal(config, &mut rng);
        Self {
            config,
            rng,
            game,
            games_started: 1,
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn games_started(&self) -> u32 {
        self.games_started
    }

    pub fn new_game(&mut self) {
        self.game = Self::deal(self.config, &mut self.rng);
        self.games_started = self.games_started.saturating_add(1);
        log::debug!("new game #{}", self.games_started);
    }

    pub fn primary_click(&mut self, coords: Option<Coord2>) -> ClickOutcome {
        if self.game.is_finished() {
            self.new_game();
            return ClickOutcome::NewGame;
        }

        let Some(coords) = coords else {
            return ClickOutcome::NoChange;
        };

        match self.game.reveal(coords) {
            Ok(outcome) => outcome.into(),
            Err(err) => {
                log::debug!("reveal {:?} rejected: {}", coords, err);
                ClickOutcome::NoChange
            }
        }
    }

    pub fn secondary_click(&mut self, coords: Option<Coord2>) -> ClickOutcome {
        if self.game.is_finished() {
            return ClickOutcome::NoChange;
        }

        let Some(coords) = coords else {
            return ClickOutcome::NoChange;
        };

        match self.game.toggle_flag(coords) {
            Ok(outcome) => outcome.into(),
            Err(err) => {
                log::debug!("flag {:?} rejected: {}", coords, err);
                ClickOutcome::NoChange
            }
        }
    }

    fn deal(config: GameConfig, rng: &mut SmallRng) -> Game {
        let board = RandomBoardGenerator::new(rng.random()).generate(config);
        Game::new(board)
    }
}
