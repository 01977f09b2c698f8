//! Minefield data structures.
//!
//! Classic minesweeper: mines are laid out lazily on the first reveal so the
//! opening click and its neighbors are always safe.

use serde::{Deserialize, Serialize};

use crate::constants::{MINEFIELD_COLS, MINEFIELD_MINES, MINEFIELD_ROWS, SAFE_START_CELLS};
use crate::core::{ConfigError, Coordinate, GameStatus, Grid};

/// A single cell in the minefield.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    /// Whether this cell contains a mine.
    pub is_mine: bool,
    /// Whether this cell has been revealed.
    pub is_revealed: bool,
    /// Whether this cell has been flagged by the player.
    pub is_flagged: bool,
    /// Number of adjacent mines (0-8). Always 0 on mine cells.
    pub adjacent_count: u8,
}

/// Board size and mine count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinefieldConfig {
    pub rows: usize,
    pub cols: usize,
    pub mines: usize,
}

impl Default for MinefieldConfig {
    fn default() -> Self {
        Self {
            rows: MINEFIELD_ROWS,
            cols: MINEFIELD_COLS,
            mines: MINEFIELD_MINES,
        }
    }
}

impl MinefieldConfig {
    /// Most mines that still leave room for a full 3×3 safe start.
    pub fn max_mines(&self) -> usize {
        (self.rows * self.cols).saturating_sub(SAFE_START_CELLS)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::InvalidDimensions {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.mines > self.max_mines() {
            return Err(ConfigError::TooManyMines {
                mines: self.mines,
                rows: self.rows,
                cols: self.cols,
                max: self.max_mines(),
            });
        }
        Ok(())
    }
}

/// Player action on the minefield.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MinefieldAction {
    Reveal(Coordinate),
    ToggleFlag(Coordinate),
}

/// Active minefield session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinefieldGame {
    pub(crate) config: MinefieldConfig,
    /// Indexed by `Coordinate { row, col }`.
    pub(crate) grid: Grid<Cell>,
    /// False until the first reveal lays out the mines.
    pub(crate) mines_placed: bool,
    pub(crate) status: GameStatus,
}

impl MinefieldGame {
    /// Session over a fixed mine layout, e.g. a position under test.
    ///
    /// `layout` rows use `'M'` for a mine and any other character for a safe
    /// cell. Mines count as already placed, so the first reveal is not
    /// protected. Returns `None` for an empty or ragged layout.
    pub fn from_layout(layout: &[&str]) -> Option<Self> {
        let rows: Vec<Vec<Cell>> = layout
            .iter()
            .map(|line| {
                line.chars()
                    .map(|ch| Cell {
                        is_mine: ch == 'M',
                        ..Cell::default()
                    })
                    .collect()
            })
            .collect();
        let grid = Grid::from_rows(rows)?;
        let mines = grid.count(|c| c.is_mine);
        let mut game = Self {
            config: MinefieldConfig {
                rows: grid.rows(),
                cols: grid.cols(),
                mines,
            },
            grid,
            mines_placed: true,
            status: GameStatus::Playing,
        };
        super::logic::calculate_adjacent_counts(&mut game.grid);
        Some(game)
    }

    pub fn config(&self) -> MinefieldConfig {
        self.config
    }

    pub fn grid(&self) -> &Grid<Cell> {
        &self.grid
    }

    pub fn cell(&self, at: Coordinate) -> Option<&Cell> {
        self.grid.get(at)
    }

    pub fn mines_placed(&self) -> bool {
        self.mines_placed
    }

    pub fn flags_placed(&self) -> usize {
        self.grid.count(|c| c.is_flagged)
    }

    /// Mines minus flags, floored at zero.
    pub fn mines_remaining(&self) -> usize {
        self.config.mines.saturating_sub(self.flags_placed())
    }

    /// Revealed cells that are not mines.
    pub fn revealed_safe(&self) -> usize {
        self.grid.count(|c| c.is_revealed && !c.is_mine)
    }

    pub fn snapshot(&self) -> MinefieldSnapshot {
        MinefieldSnapshot {
            grid: self.grid.clone(),
            status: self.status,
            mines_placed: self.mines_placed,
            mines: self.config.mines,
            flags_placed: self.flags_placed(),
            mines_remaining: self.mines_remaining(),
            revealed_safe: self.revealed_safe(),
        }
    }
}

/// Read-only copy of a minefield session for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinefieldSnapshot {
    pub grid: Grid<Cell>,
    pub status: GameStatus,
    pub mines_placed: bool,
    pub mines: usize,
    pub flags_placed: usize,
    /// Mines minus flags, floored at zero.
    pub mines_remaining: usize,
    pub revealed_safe: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MinefieldConfig::default();
        assert_eq!((config.rows, config.cols, config.mines), (9, 9, 10));
        assert_eq!(config.max_mines(), 72);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_rejects_mines_without_safe_start() {
        let config = MinefieldConfig {
            rows: 4,
            cols: 4,
            mines: 8,
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::TooManyMines {
                mines: 8,
                rows: 4,
                cols: 4,
                max: 7,
            })
        );

        let tight = MinefieldConfig { mines: 7, ..config };
        assert!(tight.validate().is_ok());
    }

    #[test]
    fn test_config_rejects_empty_board() {
        let config = MinefieldConfig {
            rows: 0,
            cols: 5,
            mines: 0,
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_tiny_board_allows_only_zero_mines() {
        let config = MinefieldConfig {
            rows: 2,
            cols: 2,
            mines: 0,
        };
        assert!(config.validate().is_ok());
        assert!(MinefieldConfig { mines: 1, ..config }.validate().is_err());
    }

    #[test]
    fn test_from_layout_counts_mines() {
        let game = MinefieldGame::from_layout(&["M..", "...", "..M"]).unwrap();
        assert_eq!(game.config().mines, 2);
        assert!(game.mines_placed());
        assert_eq!(game.cell(Coordinate::new(1, 1)).unwrap().adjacent_count, 2);
        assert!(MinefieldGame::from_layout(&["..", "."]).is_none());
    }

    #[test]
    fn test_mines_remaining_floors_at_zero() {
        let mut game = MinefieldGame::from_layout(&["M.", ".."]).unwrap();
        assert_eq!(game.mines_remaining(), 1);
        game.grid[Coordinate::new(0, 0)].is_flagged = true;
        game.grid[Coordinate::new(1, 1)].is_flagged = true;
        assert_eq!(game.flags_placed(), 2);
        assert_eq!(game.mines_remaining(), 0);
        assert_eq!(game.snapshot().mines_remaining, 0);
    }
}
