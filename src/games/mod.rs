//! The game engines: tile merge, minefield, snake and tic-tac-toe.
//!
//! Each game keeps its state in `types.rs` and its rules in `logic.rs`. No
//! engine depends on another.

pub mod merge;
pub mod minefield;
pub mod snake;
pub mod tictactoe;

pub use merge::{MergeConfig, MergeGame, MergeSnapshot};
pub use minefield::{MinefieldAction, MinefieldConfig, MinefieldGame, MinefieldSnapshot};
pub use snake::{SnakeAction, SnakeConfig, SnakeGame, SnakeSnapshot};
pub use tictactoe::{TicTacToeAction, TicTacToeConfig, TicTacToeGame, TicTacToeSnapshot};

/// Which game, as seen by the host (menu entries, CLI argument, best-score key).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameKind {
    Merge,
    Minefield,
    Snake,
    TicTacToe,
}

impl GameKind {
    pub const ALL: [GameKind; 4] = [
        GameKind::Merge,
        GameKind::Minefield,
        GameKind::Snake,
        GameKind::TicTacToe,
    ];

    /// Stable key used on the command line and in `best_scores.json`.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Merge => "2048",
            Self::Minefield => "mines",
            Self::Snake => "snake",
            Self::TicTacToe => "tictactoe",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Merge => "2048",
            Self::Minefield => "Minesweeper",
            Self::Snake => "Snake",
            Self::TicTacToe => "Tic-Tac-Toe",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Merge => "Slide and merge tiles to reach 2048",
            Self::Minefield => "Clear the field without hitting a mine",
            Self::Snake => "Eat, grow, and stay off the walls",
            Self::TicTacToe => "Three in a row, two players",
        }
    }

    /// Whether a best score is worth keeping for this game.
    pub fn keeps_best_score(&self) -> bool {
        !matches!(self, Self::TicTacToe)
    }

    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or(Self::Merge)
    }

    /// Parse a command-line name. Accepts the id plus a few aliases.
    pub fn from_arg(arg: &str) -> Option<Self> {
        match arg.to_ascii_lowercase().as_str() {
            "2048" | "merge" => Some(Self::Merge),
            "mines" | "minesweeper" | "minefield" => Some(Self::Minefield),
            "snake" => Some(Self::Snake),
            "tictactoe" | "ttt" | "tic-tac-toe" => Some(Self::TicTacToe),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip_through_from_arg() {
        for kind in GameKind::ALL {
            assert_eq!(GameKind::from_arg(kind.id()), Some(kind));
        }
    }

    #[test]
    fn test_from_arg_aliases() {
        assert_eq!(GameKind::from_arg("Minesweeper"), Some(GameKind::Minefield));
        assert_eq!(GameKind::from_arg("TTT"), Some(GameKind::TicTacToe));
        assert_eq!(GameKind::from_arg("tetris"), None);
    }

    #[test]
    fn test_from_index() {
        assert_eq!(GameKind::from_index(2), GameKind::Snake);
        assert_eq!(GameKind::from_index(99), GameKind::Merge);
    }

    #[test]
    fn test_only_scored_games_keep_best() {
        assert!(GameKind::Snake.keeps_best_score());
        assert!(!GameKind::TicTacToe.keeps_best_score());
    }
}
