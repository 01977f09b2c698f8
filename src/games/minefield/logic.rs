//! Minefield logic: lazy safe-start mine placement, adjacency counts,
//! breadth-first flood reveal and flagging.

use std::collections::{HashSet, VecDeque};

use tracing::{debug, info};

use super::types::{Cell, MinefieldAction, MinefieldConfig, MinefieldGame, MinefieldSnapshot};
use crate::core::{
    choose_distinct, ActionOutcome, ConfigError, Coordinate, Engine, GameStatus, Grid, RandomSource,
};

/// Lay out `game.config.mines` mines, never on `first` or its neighbors.
///
/// If the full exclusion zone leaves too few candidate cells, the zone shrinks
/// to `first` alone. A configuration that passed `validate` never needs this,
/// but the first click is kept safe either way.
pub fn place_mines<R: RandomSource + ?Sized>(game: &mut MinefieldGame, first: Coordinate, rng: &mut R) {
    let wanted = game.config.mines;

    let mut excluded: HashSet<Coordinate> = game.grid.neighbors(first).into_iter().collect();
    excluded.insert(first);

    let mut candidates: Vec<Coordinate> = game
        .grid
        .coords()
        .filter(|at| !excluded.contains(at))
        .collect();

    if candidates.len() < wanted {
        debug!(
            wanted,
            available = candidates.len(),
            "safe zone too large, excluding only the first cell"
        );
        candidates = game.grid.coords().filter(|&at| at != first).collect();
    }

    for at in choose_distinct(candidates, wanted, rng) {
        game.grid[at].is_mine = true;
    }
    calculate_adjacent_counts(&mut game.grid);
    game.mines_placed = true;
    debug!(
        row = first.row,
        col = first.col,
        mines = game.grid.count(|c| c.is_mine),
        "mines placed"
    );
}

/// Recompute every non-mine cell's count of neighboring mines.
pub fn calculate_adjacent_counts(grid: &mut Grid<Cell>) {
    let coords: Vec<Coordinate> = grid.coords().collect();
    for at in coords {
        let count = if grid[at].is_mine {
            0
        } else {
            grid.neighbors(at)
                .into_iter()
                .filter(|&n| grid[n].is_mine)
                .count() as u8
        };
        grid[at].adjacent_count = count;
    }
}

/// Breadth-first reveal from `start`. Cells with no adjacent mines open their
/// unrevealed, unflagged neighbors; numbered cells stop the spread. Each cell
/// is processed at most once. Returns how many cells were newly revealed.
pub fn flood_reveal(grid: &mut Grid<Cell>, start: Coordinate) -> usize {
    let mut queue = VecDeque::from([start]);
    let mut seen = HashSet::new();
    let mut revealed = 0;

    while let Some(at) = queue.pop_front() {
        if !seen.insert(at) {
            continue;
        }
        let cell = grid[at];
        if cell.is_revealed || cell.is_flagged {
            continue;
        }

        grid[at].is_revealed = true;
        revealed += 1;

        if cell.adjacent_count == 0 && !cell.is_mine {
            for n in grid.neighbors(at) {
                let neighbor = grid[n];
                if !neighbor.is_revealed && !neighbor.is_flagged && !seen.contains(&n) {
                    queue.push_back(n);
                }
            }
        }
    }

    revealed
}

/// Reveal every mine (called on loss).
pub fn reveal_all_mines(grid: &mut Grid<Cell>) {
    for cell in grid.iter_mut().filter(|c| c.is_mine) {
        cell.is_revealed = true;
    }
}

/// Won once every non-mine cell is revealed, regardless of flags.
pub fn is_cleared(grid: &Grid<Cell>) -> bool {
    grid.iter().all(|c| c.is_mine || c.is_revealed)
}

/// Reveal a cell, laying out the mines first if this is the opening click.
///
/// No-op for flagged, revealed or out-of-bounds cells, and once the game is
/// over. `score_delta` is the number of safe cells newly revealed.
pub fn reveal<R: RandomSource + ?Sized>(game: &mut MinefieldGame, at: Coordinate, rng: &mut R) -> ActionOutcome {
    if game.status.is_terminal() {
        return ActionOutcome::UNCHANGED;
    }
    match game.grid.get(at) {
        Some(cell) if !cell.is_revealed && !cell.is_flagged => {}
        _ => return ActionOutcome::UNCHANGED,
    }

    let previous = game.status;
    if !game.mines_placed {
        place_mines(game, at, rng);
        game.status = GameStatus::Playing;
    }

    if game.grid[at].is_mine {
        game.grid[at].is_revealed = true;
        reveal_all_mines(&mut game.grid);
        game.status = GameStatus::Lost;
        info!(row = at.row, col = at.col, "mine hit");
        return ActionOutcome {
            changed: true,
            status_changed: true,
            score_delta: 0,
        };
    }

    let revealed = flood_reveal(&mut game.grid, at);
    if is_cleared(&game.grid) {
        game.status = GameStatus::Won;
        info!(cells = game.revealed_safe(), "minefield cleared");
    }

    ActionOutcome {
        changed: true,
        status_changed: previous != game.status,
        score_delta: revealed as u32,
    }
}

/// Flip the flag on an unrevealed cell. Flags are allowed before the first
/// reveal; they never change counts or other cells.
pub fn toggle_flag(game: &mut MinefieldGame, at: Coordinate) -> ActionOutcome {
    if game.status.is_terminal() {
        return ActionOutcome::UNCHANGED;
    }
    match game.grid.get_mut(at) {
        Some(cell) if !cell.is_revealed => {
            cell.is_flagged = !cell.is_flagged;
            ActionOutcome {
                changed: true,
                status_changed: false,
                score_delta: 0,
            }
        }
        _ => ActionOutcome::UNCHANGED,
    }
}

/// Dispatch one player action.
pub fn apply_action<R: RandomSource + ?Sized>(
    game: &mut MinefieldGame,
    action: MinefieldAction,
    rng: &mut R,
) -> ActionOutcome {
    match action {
        MinefieldAction::Reveal(at) => reveal(game, at, rng),
        MinefieldAction::ToggleFlag(at) => toggle_flag(game, at),
    }
}

impl MinefieldGame {
    /// Create an empty, unmined board. Fails if the mine count leaves no room
    /// for the safe start.
    pub fn new(config: MinefieldConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            grid: Grid::new(config.rows, config.cols, Cell::default()),
            mines_placed: false,
            status: GameStatus::Ready,
        })
    }
}

impl Engine for MinefieldGame {
    type Config = MinefieldConfig;
    type Action = MinefieldAction;
    type Snapshot = MinefieldSnapshot;

    fn new<R: RandomSource + ?Sized>(config: MinefieldConfig, _rng: &mut R) -> Result<Self, ConfigError> {
        MinefieldGame::new(config)
    }

    fn apply<R: RandomSource + ?Sized>(&mut self, action: MinefieldAction, rng: &mut R) -> ActionOutcome {
        apply_action(self, action, rng)
    }

    fn reset<R: RandomSource + ?Sized>(&mut self, _rng: &mut R) -> MinefieldSnapshot {
        self.grid = Grid::new(self.config.rows, self.config.cols, Cell::default());
        self.mines_placed = false;
        self.status = GameStatus::Ready;
        self.snapshot()
    }

    fn snapshot(&self) -> MinefieldSnapshot {
        MinefieldGame::snapshot(self)
    }

    fn status(&self) -> GameStatus {
        self.status
    }

    fn score(&self) -> u32 {
        self.revealed_safe() as u32
    }
}
