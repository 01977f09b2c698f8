//! Tile-merge (2048-style) data structures.
//!
//! An N×N board of numbers where 0 is an empty cell and every other value is
//! a power of two.

use serde::{Deserialize, Serialize};

use crate::constants::{MERGE_BOARD_SIZE, MERGE_MIN_BOARD_SIZE};
use crate::core::{ConfigError, GameStatus, Grid};

/// Board configuration. The host normally uses `MergeConfig::default()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeConfig {
    /// Side length of the square board.
    pub size: usize,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            size: MERGE_BOARD_SIZE,
        }
    }
}

impl MergeConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::InvalidDimensions {
                rows: self.size,
                cols: self.size,
            });
        }
        if self.size < MERGE_MIN_BOARD_SIZE {
            return Err(ConfigError::BoardTooSmall {
                rows: self.size,
                cols: self.size,
                min_rows: MERGE_MIN_BOARD_SIZE,
                min_cols: MERGE_MIN_BOARD_SIZE,
            });
        }
        Ok(())
    }
}

/// Active tile-merge session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeGame {
    pub(crate) config: MergeConfig,
    pub(crate) board: Grid<u32>,
    pub(crate) score: u32,
    pub(crate) status: GameStatus,
}

impl MergeGame {
    /// Session over an existing board, e.g. a position under test.
    /// Returns `None` unless `board` is square, at least 2×2, and holds only
    /// empty cells and powers of two from 2 up.
    pub fn from_board(board: Grid<u32>, score: u32) -> Option<Self> {
        let config = MergeConfig { size: board.rows() };
        if board.rows() != board.cols()
            || config.validate().is_err()
            || !board.iter().all(|&v| super::logic::is_valid_tile(v))
        {
            return None;
        }
        let mut game = Self {
            config,
            board,
            score,
            status: GameStatus::Playing,
        };
        game.status = super::logic::status_for(&game.board);
        Some(game)
    }

    pub fn board(&self) -> &Grid<u32> {
        &self.board
    }

    pub fn size(&self) -> usize {
        self.config.size
    }

    /// Largest tile on the board (0 for an empty board).
    pub fn max_tile(&self) -> u32 {
        self.board.iter().copied().max().unwrap_or(0)
    }

    pub fn snapshot(&self) -> MergeSnapshot {
        MergeSnapshot {
            board: self.board.clone(),
            score: self.score,
            status: self.status,
            max_tile: self.max_tile(),
        }
    }
}

/// Read-only copy of a tile-merge session for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeSnapshot {
    pub board: Grid<u32>,
    pub score: u32,
    pub status: GameStatus,
    pub max_tile: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_four_by_four() {
        let config = MergeConfig::default();
        assert_eq!(config.size, 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_rejects_tiny_boards() {
        assert_eq!(
            MergeConfig { size: 0 }.validate(),
            Err(ConfigError::InvalidDimensions { rows: 0, cols: 0 })
        );
        assert!(matches!(
            MergeConfig { size: 1 }.validate(),
            Err(ConfigError::BoardTooSmall { .. })
        ));
        assert!(MergeConfig { size: 2 }.validate().is_ok());
    }

    #[test]
    fn test_from_board_rejects_non_square() {
        let board = Grid::new(2, 3, 0u32);
        assert!(MergeGame::from_board(board, 0).is_none());
    }

    #[test]
    fn test_from_board_rejects_non_power_of_two_tiles() {
        let odd = Grid::from_rows(vec![vec![3, 5], vec![0, 0]]).unwrap();
        assert!(MergeGame::from_board(odd, 0).is_none());

        let one = Grid::from_rows(vec![vec![1, 0], vec![0, 0]]).unwrap();
        assert!(MergeGame::from_board(one, 0).is_none());

        let top = Grid::from_rows(vec![vec![1 << 31, 2], vec![0, 0]]).unwrap();
        assert!(MergeGame::from_board(top, 0).is_some());
    }

    #[test]
    fn test_max_tile() {
        let board = Grid::from_rows(vec![vec![2, 0], vec![16, 4]]).unwrap();
        let game = MergeGame::from_board(board, 0).unwrap();
        assert_eq!(game.max_tile(), 16);
        assert_eq!(game.snapshot().max_tile, 16);
    }
}
