// Tile-merge grid
pub const MERGE_BOARD_SIZE: usize = 4;
pub const MERGE_MIN_BOARD_SIZE: usize = 2;
pub const MERGE_START_TILES: usize = 2;
pub const MERGE_SMALL_TILE: u32 = 2;
pub const MERGE_LARGE_TILE: u32 = 4;
pub const MERGE_SMALL_TILE_CHANCE: f64 = 0.9;

// Minefield
pub const MINEFIELD_ROWS: usize = 9;
pub const MINEFIELD_COLS: usize = 9;
pub const MINEFIELD_MINES: usize = 10;
pub const SAFE_START_CELLS: usize = 9; // first click + its 8 neighbors

// Snake
pub const SNAKE_GRID_SIZE: usize = 20;
pub const SNAKE_START_LENGTH: usize = 3;
pub const SNAKE_TICK_MS: u64 = 110;
pub const FOOD_PLACEMENT_ATTEMPTS: u32 = 500;

// Tic-tac-toe
pub const TICTACTOE_SIZE: usize = 3;

// Terminal host
pub const FRAME_POLL_MS: u64 = 16;
pub const MAX_TICK_CATCHUP_MS: u64 = 500;
pub const ARCADE_DIR_NAME: &str = ".arcade";
pub const BEST_SCORES_FILE: &str = "best_scores.json";
pub const LOG_FILE: &str = "arcade.log";
