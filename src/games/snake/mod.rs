//! Snake locomotion game.

pub mod logic;
pub mod types;

pub use logic::{place_food, set_pending_direction, start, tick, toggle_pause};
pub use types::{SnakeAction, SnakeConfig, SnakeGame, SnakeSnapshot};
