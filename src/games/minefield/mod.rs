//! Mine-field reveal (Minesweeper-style).

pub mod logic;
pub mod types;

pub use logic::{apply_action, calculate_adjacent_counts, place_mines, reveal, toggle_flag};
pub use types::{Cell, MinefieldAction, MinefieldConfig, MinefieldGame, MinefieldSnapshot};
