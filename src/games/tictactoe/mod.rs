//! Two-player tic-tac-toe.

pub mod logic;
pub mod types;

pub use logic::{find_winner, place, swap_starter};
pub use types::{Mark, TicTacToeAction, TicTacToeConfig, TicTacToeGame, TicTacToeSnapshot, Winner};
