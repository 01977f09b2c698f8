//! Tile-merge grid (2048-style).

pub mod logic;
pub mod types;

pub use logic::{apply_move, can_move, is_valid_tile, merge_line, slide, spawn_tile};
pub use types::{MergeConfig, MergeGame, MergeSnapshot};
