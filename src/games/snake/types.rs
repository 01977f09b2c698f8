//! Snake data structures.
//!
//! The snake moves one cell per tick on a fixed grid, grows by one segment per
//! food eaten and dies on walls or its own body. Ticks are scheduled by the
//! host; the engine holds no timer.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::constants::{FOOD_PLACEMENT_ATTEMPTS, SNAKE_GRID_SIZE, SNAKE_START_LENGTH, SNAKE_TICK_MS};
use crate::core::{ConfigError, Coordinate, Direction, GameStatus};

/// Grid size, tick period and food placement budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnakeConfig {
    pub rows: usize,
    pub cols: usize,
    /// Milliseconds between ticks, for the host's scheduler.
    pub tick_ms: u64,
    /// Random draws allowed when relocating food before the game ends.
    pub food_attempts: u32,
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            rows: SNAKE_GRID_SIZE,
            cols: SNAKE_GRID_SIZE,
            tick_ms: SNAKE_TICK_MS,
            food_attempts: FOOD_PLACEMENT_ATTEMPTS,
        }
    }
}

impl SnakeConfig {
    /// Narrowest grid that fits the start body plus one free cell ahead of it.
    pub const MIN_COLS: usize = SNAKE_START_LENGTH + 1;

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::InvalidDimensions {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.cols < Self::MIN_COLS {
            return Err(ConfigError::BoardTooSmall {
                rows: self.rows,
                cols: self.cols,
                min_rows: 1,
                min_cols: Self::MIN_COLS,
            });
        }
        Ok(())
    }

    /// Starting body, head first: a horizontal run facing right on the middle
    /// row. On the default 20×20 grid this is (10,8), (10,7), (10,6).
    pub fn start_body(&self) -> VecDeque<Coordinate> {
        let row = self.rows / 2;
        let head_col = (self.cols / 2).saturating_sub(2).max(SNAKE_START_LENGTH - 1);
        (0..SNAKE_START_LENGTH)
            .map(|i| Coordinate::from((row, head_col - i)))
            .collect()
    }
}

/// Player and scheduler actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SnakeAction {
    /// Queue a turn for the next tick. Reversals are ignored.
    Steer(Direction),
    /// Advance one cell.
    Tick,
    /// Ready → Playing.
    Start,
    /// Playing ⇄ Paused.
    TogglePause,
}

/// Active snake session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnakeGame {
    pub(crate) config: SnakeConfig,
    /// Head at the front. No duplicates while alive.
    pub(crate) body: VecDeque<Coordinate>,
    /// `None` only after food placement ran out of attempts.
    pub(crate) food: Option<Coordinate>,
    pub(crate) direction: Direction,
    /// Buffered turn, committed on the next tick.
    pub(crate) pending_direction: Direction,
    pub(crate) score: u32,
    pub(crate) status: GameStatus,
}

impl SnakeGame {
    pub fn config(&self) -> SnakeConfig {
        self.config
    }

    pub fn head(&self) -> Option<Coordinate> {
        self.body.front().copied()
    }

    pub fn body(&self) -> &VecDeque<Coordinate> {
        &self.body
    }

    pub fn food(&self) -> Option<Coordinate> {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Direction {
        self.pending_direction
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn tick_ms(&self) -> u64 {
        self.config.tick_ms
    }

    pub fn snapshot(&self) -> SnakeSnapshot {
        SnakeSnapshot {
            rows: self.config.rows,
            cols: self.config.cols,
            body: self.body.iter().copied().collect(),
            food: self.food,
            direction: self.direction,
            score: self.score,
            status: self.status,
        }
    }
}

/// Read-only copy of a snake session for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnakeSnapshot {
    pub rows: usize,
    pub cols: usize,
    /// Head first.
    pub body: Vec<Coordinate>,
    pub food: Option<Coordinate>,
    pub direction: Direction,
    pub score: u32,
    pub status: GameStatus,
}

impl SnakeSnapshot {
    pub fn head(&self) -> Option<Coordinate> {
        self.body.first().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SnakeConfig::default();
        assert_eq!((config.rows, config.cols), (20, 20));
        assert_eq!(config.tick_ms, 110);
        assert_eq!(config.food_attempts, 500);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_start_body_on_default_grid() {
        let body = SnakeConfig::default().start_body();
        assert_eq!(
            body.iter().copied().collect::<Vec<_>>(),
            vec![
                Coordinate::new(10, 8),
                Coordinate::new(10, 7),
                Coordinate::new(10, 6),
            ]
        );
    }

    #[test]
    fn test_start_body_fits_narrow_grid() {
        let config = SnakeConfig {
            rows: 1,
            cols: 4,
            ..SnakeConfig::default()
        };
        assert!(config.validate().is_ok());
        let body = config.start_body();
        assert_eq!(body[0], Coordinate::new(0, 2));
        assert_eq!(body[2], Coordinate::new(0, 0));
    }

    #[test]
    fn test_config_rejects_small_grids() {
        assert!(matches!(
            SnakeConfig {
                rows: 0,
                ..SnakeConfig::default()
            }
            .validate(),
            Err(ConfigError::InvalidDimensions { .. })
        ));
        assert_eq!(
            SnakeConfig {
                rows: 5,
                cols: 3,
                ..SnakeConfig::default()
            }
            .validate(),
            Err(ConfigError::BoardTooSmall {
                rows: 5,
                cols: 3,
                min_rows: 1,
                min_cols: 4,
            })
        );
    }
}
