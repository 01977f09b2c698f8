//! Tic-tac-toe data structures.
//!
//! Two players alternate on a 3×3 board; three in a row wins.

use serde::{Deserialize, Serialize};

use crate::constants::TICTACTOE_SIZE;
use crate::core::{Coordinate, GameStatus, Grid};

/// A player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn other(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

/// Every winning line: rows, columns, then both diagonals.
pub const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// The board has no tunable settings; the config only picks who opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicTacToeConfig {
    pub starter: Mark,
}

impl Default for TicTacToeConfig {
    fn default() -> Self {
        Self { starter: Mark::X }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TicTacToeAction {
    Place(Coordinate),
    /// Hand the opening move to the other mark and clear the board.
    SwapStarter,
}

/// Three marks in a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Winner {
    pub mark: Mark,
    pub line: [Coordinate; 3],
}

/// Active tic-tac-toe session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicTacToeGame {
    pub(crate) cells: Grid<Option<Mark>>,
    pub(crate) next: Mark,
    pub(crate) starter: Mark,
    pub(crate) winner: Option<Winner>,
    pub(crate) status: GameStatus,
}

impl TicTacToeGame {
    pub fn new(config: TicTacToeConfig) -> Self {
        Self {
            cells: Grid::new(TICTACTOE_SIZE, TICTACTOE_SIZE, None),
            next: config.starter,
            starter: config.starter,
            winner: None,
            status: GameStatus::Playing,
        }
    }

    pub fn cells(&self) -> &Grid<Option<Mark>> {
        &self.cells
    }

    pub fn next(&self) -> Mark {
        self.next
    }

    pub fn starter(&self) -> Mark {
        self.starter
    }

    pub fn winner(&self) -> Option<Winner> {
        self.winner
    }

    pub fn snapshot(&self) -> TicTacToeSnapshot {
        TicTacToeSnapshot {
            cells: self.cells.clone(),
            next: self.next,
            starter: self.starter,
            winner: self.winner,
            status: self.status,
        }
    }
}

/// Read-only copy of a tic-tac-toe session for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicTacToeSnapshot {
    pub cells: Grid<Option<Mark>>,
    pub next: Mark,
    pub starter: Mark,
    pub winner: Option<Winner>,
    pub status: GameStatus,
}

impl TicTacToeSnapshot {
    /// Whether `at` is part of the winning line.
    pub fn is_winning_cell(&self, at: Coordinate) -> bool {
        self.winner.is_some_and(|w| w.line.contains(&at))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let game = TicTacToeGame::new(TicTacToeConfig::default());
        assert_eq!(game.next(), Mark::X);
        assert_eq!(game.starter(), Mark::X);
        assert_eq!(game.status, GameStatus::Playing);
        assert!(game.cells().iter().all(Option::is_none));
        assert_eq!(game.cells().len(), 9);
    }

    #[test]
    fn test_mark_other() {
        assert_eq!(Mark::X.other(), Mark::O);
        assert_eq!(Mark::O.other(), Mark::X);
        assert_eq!(Mark::O.symbol(), 'O');
    }

    #[test]
    fn test_lines_are_distinct_and_cover_center_four_times() {
        let through_center = LINES.iter().filter(|l| l.contains(&(1, 1))).count();
        assert_eq!(through_center, 4);
        for (i, a) in LINES.iter().enumerate() {
            for b in &LINES[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
