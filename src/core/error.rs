//! Errors reported when an engine is configured with an impossible board.

use thiserror::Error;

/// Rejected engine configuration. Gameplay itself never fails: invalid
/// actions are no-ops and exhausted placement ends the game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A board dimension was zero.
    #[error("invalid dimensions: a {rows}x{cols} board has no cells")]
    InvalidDimensions { rows: usize, cols: usize },

    /// The board is too small for the game's starting layout.
    #[error("board too small: {rows}x{cols} given, at least {min_rows}x{min_cols} required")]
    BoardTooSmall {
        rows: usize,
        cols: usize,
        min_rows: usize,
        min_cols: usize,
    },

    /// More mines than cells left after the safe-start zone.
    #[error("too many mines: {mines} requested, a {rows}x{cols} board allows at most {max}")]
    TooManyMines {
        mines: usize,
        rows: usize,
        cols: usize,
        max: usize,
    },
}
