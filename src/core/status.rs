//! Lifecycle status shared by all engines.

use serde::{Deserialize, Serialize};

/// Where a game session currently stands. Each engine uses a subset:
/// the merge grid only Playing/Lost, the minefield Ready/Playing/Won/Lost,
/// the snake Ready/Playing/Paused/Lost and tic-tac-toe Playing/Won/Draw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Ready,
    Playing,
    Paused,
    Won,
    Lost,
    Draw,
}

impl GameStatus {
    /// Won, Lost and Draw end the session; only reset leaves them.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost | Self::Draw)
    }
}
