//! Tic-tac-toe logic: placement, line detection and draws.

use tracing::info;

use super::types::{
    Mark, TicTacToeAction, TicTacToeConfig, TicTacToeGame, TicTacToeSnapshot, Winner, LINES,
};
use crate::core::{ActionOutcome, ConfigError, Coordinate, Engine, GameStatus, Grid, RandomSource};

/// First line holding three equal marks, in `LINES` order.
pub fn find_winner(cells: &Grid<Option<Mark>>) -> Option<Winner> {
    LINES.iter().find_map(|line| {
        let coords = line.map(Coordinate::from);
        let first = cells.get(coords[0]).copied().flatten()?;
        coords[1..]
            .iter()
            .all(|&at| cells.get(at).copied().flatten() == Some(first))
            .then_some(Winner {
                mark: first,
                line: coords,
            })
    })
}

pub fn is_full(cells: &Grid<Option<Mark>>) -> bool {
    cells.iter().all(Option::is_some)
}

/// Put the current mark on `at`. No-op if occupied, off the board or the
/// game is over.
pub fn place(game: &mut TicTacToeGame, at: Coordinate) -> ActionOutcome {
    if game.status.is_terminal() {
        return ActionOutcome::UNCHANGED;
    }
    match game.cells.get(at) {
        Some(None) => {}
        _ => return ActionOutcome::UNCHANGED,
    }

    let mark = game.next;
    game.cells[at] = Some(mark);

    if let Some(winner) = find_winner(&game.cells) {
        game.winner = Some(winner);
        game.status = GameStatus::Won;
        info!(mark = %mark.symbol(), "three in a row");
    } else if is_full(&game.cells) {
        game.status = GameStatus::Draw;
        info!("board full, draw");
    } else {
        game.next = mark.other();
    }

    ActionOutcome {
        changed: true,
        status_changed: game.status.is_terminal(),
        score_delta: 0,
    }
}

/// Clear the board; the starter opens.
pub fn clear(game: &mut TicTacToeGame) {
    game.cells = Grid::new(game.cells.rows(), game.cells.cols(), None);
    game.next = game.starter;
    game.winner = None;
    game.status = GameStatus::Playing;
}

/// Give the opening move to the other mark and clear the board.
pub fn swap_starter(game: &mut TicTacToeGame) -> ActionOutcome {
    let was_terminal = game.status.is_terminal();
    game.starter = game.starter.other();
    clear(game);
    ActionOutcome {
        changed: true,
        status_changed: was_terminal,
        score_delta: 0,
    }
}

impl Engine for TicTacToeGame {
    type Config = TicTacToeConfig;
    type Action = TicTacToeAction;
    type Snapshot = TicTacToeSnapshot;

    fn new<R: RandomSource + ?Sized>(config: TicTacToeConfig, _rng: &mut R) -> Result<Self, ConfigError> {
        Ok(TicTacToeGame::new(config))
    }

    fn apply<R: RandomSource + ?Sized>(&mut self, action: TicTacToeAction, _rng: &mut R) -> ActionOutcome {
        match action {
            TicTacToeAction::Place(at) => place(self, at),
            TicTacToeAction::SwapStarter => swap_starter(self),
        }
    }

    fn reset<R: RandomSource + ?Sized>(&mut self, _rng: &mut R) -> TicTacToeSnapshot {
        clear(self);
        self.snapshot()
    }

    fn snapshot(&self) -> TicTacToeSnapshot {
        TicTacToeGame::snapshot(self)
    }

    fn status(&self) -> GameStatus {
        self.status
    }

    /// Two-player game with no score.
    fn score(&self) -> u32 {
        0
    }
}
