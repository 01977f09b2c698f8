//! Tile-merge game logic: sliding, single-pass merging, spawning and
//! terminal detection.

use tracing::{debug, info};

use super::types::{MergeConfig, MergeGame, MergeSnapshot};
use crate::constants::{
    MERGE_LARGE_TILE, MERGE_SMALL_TILE, MERGE_SMALL_TILE_CHANCE, MERGE_START_TILES,
};
use crate::core::{ActionOutcome, ConfigError, Coordinate, Direction, Engine, GameStatus, Grid, RandomSource};

/// Result of compressing and merging one line toward index 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMerge {
    pub line: Vec<u32>,
    pub gained: u32,
}

/// Zero, or a power of two no smaller than the smallest spawned tile.
pub fn is_valid_tile(value: u32) -> bool {
    value == 0 || (value >= MERGE_SMALL_TILE && value.is_power_of_two())
}

/// Equal non-empty tiles whose sum still fits in a `u32`. The largest
/// representable tile stays put.
fn can_merge(a: u32, b: u32) -> bool {
    a != 0 && a == b && a.checked_mul(2).is_some()
}

/// Compress the non-zero values of `line` toward index 0 and merge equal
/// neighbors left to right. A tile produced by a merge never merges again in
/// the same pass. The result has the same length, padded with trailing zeros.
pub fn merge_line(line: &[u32]) -> LineMerge {
    let tiles: Vec<u32> = line.iter().copied().filter(|&v| v != 0).collect();
    let mut merged = Vec::with_capacity(line.len());
    let mut gained: u32 = 0;

    let mut i = 0;
    while i < tiles.len() {
        let current = tiles[i];
        match tiles.get(i + 1) {
            Some(&next) if can_merge(current, next) => {
                let value = current * 2;
                merged.push(value);
                gained = gained.saturating_add(value);
                i += 2;
            }
            _ => {
                merged.push(current);
                i += 1;
            }
        }
    }

    merged.resize(line.len(), 0);
    LineMerge {
        line: merged,
        gained,
    }
}

/// Board coordinate of position `i` along line `index` when reading from the
/// edge that tiles slide toward. The same mapping writes the line back.
fn line_coord(direction: Direction, size: usize, index: usize, i: usize) -> Coordinate {
    let far = size - 1 - i;
    match direction {
        Direction::Left => Coordinate::from((index, i)),
        Direction::Right => Coordinate::from((index, far)),
        Direction::Up => Coordinate::from((i, index)),
        Direction::Down => Coordinate::from((far, index)),
    }
}

/// Outcome of sliding a whole board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub board: Grid<u32>,
    pub gained: u32,
    pub moved: bool,
}

/// Slide every line of `board` toward `direction` without spawning.
pub fn slide(board: &Grid<u32>, direction: Direction) -> Slide {
    let size = board.rows();
    let mut next = board.clone();
    let mut gained: u32 = 0;
    let mut moved = false;

    for index in 0..size {
        let original: Vec<u32> = (0..size)
            .map(|i| board[line_coord(direction, size, index, i)])
            .collect();
        let result = merge_line(&original);
        if result.line != original {
            moved = true;
        }
        gained = gained.saturating_add(result.gained);
        for (i, value) in result.line.into_iter().enumerate() {
            next[line_coord(direction, size, index, i)] = value;
        }
    }

    Slide {
        board: next,
        gained,
        moved,
    }
}

pub fn empty_cells(board: &Grid<u32>) -> Vec<Coordinate> {
    board.coords().filter(|&at| board[at] == 0).collect()
}

/// Place a 2 (90%) or 4 (10%) on a uniformly chosen empty cell.
/// Returns the cell used, or `None` when the board is full.
pub fn spawn_tile<R: RandomSource + ?Sized>(board: &mut Grid<u32>, rng: &mut R) -> Option<Coordinate> {
    let empties = empty_cells(board);
    if empties.is_empty() {
        return None;
    }
    let at = empties[rng.pick_index(empties.len())];
    let value = if rng.chance(MERGE_SMALL_TILE_CHANCE) {
        MERGE_SMALL_TILE
    } else {
        MERGE_LARGE_TILE
    };
    board[at] = value;
    debug!(row = at.row, col = at.col, value, "spawned tile");
    Some(at)
}

/// True if some direction would change the board: an empty cell exists or
/// two orthogonally adjacent cells can merge.
pub fn can_move(board: &Grid<u32>) -> bool {
    board.coords().any(|at| {
        let value = board[at];
        value == 0
            || [Direction::Down, Direction::Right]
                .into_iter()
                .any(|d| board.get(at.step(d)).is_some_and(|&next| can_merge(value, next)))
    })
}

/// Playing while a move exists, Lost otherwise.
pub(crate) fn status_for(board: &Grid<u32>) -> GameStatus {
    if can_move(board) {
        GameStatus::Playing
    } else {
        GameStatus::Lost
    }
}

/// Empty board with the starting tiles placed.
pub fn start_board<R: RandomSource + ?Sized>(size: usize, rng: &mut R) -> Grid<u32> {
    let mut board = Grid::new(size, size, 0);
    for _ in 0..MERGE_START_TILES {
        spawn_tile(&mut board, rng);
    }
    board
}

/// Slide the board, and if anything moved, score the merges, spawn a tile and
/// re-check for a lost position. A move that changes nothing is a no-op.
pub fn apply_move<R: RandomSource + ?Sized>(
    game: &mut MergeGame,
    direction: Direction,
    rng: &mut R,
) -> ActionOutcome {
    if game.status.is_terminal() {
        return ActionOutcome::UNCHANGED;
    }

    let Slide {
        mut board,
        gained,
        moved,
    } = slide(&game.board, direction);
    if !moved {
        return ActionOutcome::UNCHANGED;
    }

    spawn_tile(&mut board, rng);
    game.board = board;
    game.score = game.score.saturating_add(gained);

    let previous = game.status;
    game.status = status_for(&game.board);
    if game.status == GameStatus::Lost {
        info!(score = game.score, max_tile = game.max_tile(), "merge grid locked");
    }

    ActionOutcome {
        changed: true,
        status_changed: previous != game.status,
        score_delta: gained,
    }
}

impl MergeGame {
    /// Create a new session with two starting tiles.
    pub fn new<R: RandomSource + ?Sized>(config: MergeConfig, rng: &mut R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            board: start_board(config.size, rng),
            score: 0,
            status: GameStatus::Playing,
        })
    }
}

impl Engine for MergeGame {
    type Config = MergeConfig;
    type Action = Direction;
    type Snapshot = MergeSnapshot;

    fn new<R: RandomSource + ?Sized>(config: MergeConfig, rng: &mut R) -> Result<Self, ConfigError> {
        MergeGame::new(config, rng)
    }

    fn apply<R: RandomSource + ?Sized>(&mut self, action: Direction, rng: &mut R) -> ActionOutcome {
        apply_move(self, action, rng)
    }

    fn reset<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> MergeSnapshot {
        self.board = start_board(self.config.size, rng);
        self.score = 0;
        self.status = GameStatus::Playing;
        self.snapshot()
    }

    fn snapshot(&self) -> MergeSnapshot {
        MergeGame::snapshot(self)
    }

    fn status(&self) -> GameStatus {
        self.status
    }

    fn score(&self) -> u32 {
        self.score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScriptedSource;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn board(rows: &[&[u32]]) -> Grid<u32> {
        Grid::from_rows(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
    }

    fn tiles(board: &Grid<u32>) -> usize {
        board.count(|&v| v != 0)
    }

    // ============ merge_line ============

    #[test]
    fn test_merge_four_equal_pairs_once() {
        let result = merge_line(&[2, 2, 2, 2]);
        assert_eq!(result.line, vec![4, 4, 0, 0]);
        assert_eq!(result.gained, 8);
    }

    #[test]
    fn test_merge_compresses_before_merging_first_pair_only() {
        let result = merge_line(&[4, 0, 4, 4]);
        assert_eq!(result.line, vec![8, 4, 0, 0]);
        assert_eq!(result.gained, 8);
    }

    #[test]
    fn test_merged_tile_does_not_merge_again() {
        // 2+2 -> 4 must not then absorb the existing 4
        let result = merge_line(&[2, 2, 4, 0]);
        assert_eq!(result.line, vec![4, 4, 0, 0]);
        assert_eq!(result.gained, 4);
    }

    #[test]
    fn test_merge_without_pairs_only_compresses() {
        let result = merge_line(&[0, 2, 0, 4]);
        assert_eq!(result.line, vec![2, 4, 0, 0]);
        assert_eq!(result.gained, 0);

        let empty = merge_line(&[0, 0, 0, 0]);
        assert_eq!(empty.line, vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_merge_odd_run() {
        let result = merge_line(&[8, 8, 8, 0]);
        assert_eq!(result.line, vec![16, 8, 0, 0]);
        assert_eq!(result.gained, 16);
    }

    #[test]
    fn test_largest_tile_does_not_merge() {
        let top = 1u32 << 31;
        let result = merge_line(&[top, top, 0, 0]);
        assert_eq!(result.line, vec![top, top, 0, 0]);
        assert_eq!(result.gained, 0);

        let below = merge_line(&[top >> 1, top >> 1]);
        assert_eq!(below.line, vec![top, 0]);
        assert_eq!(below.gained, top);
    }

    #[test]
    fn test_valid_tiles() {
        assert!(is_valid_tile(0));
        assert!(is_valid_tile(2));
        assert!(is_valid_tile(1 << 31));
        assert!(!is_valid_tile(1));
        assert!(!is_valid_tile(6));
    }

    // ============ slide ============

    #[test]
    fn test_slide_each_direction_reads_from_far_edge() {
        let start = board(&[&[2, 2, 2, 2], &[0, 0, 0, 0], &[0, 0, 0, 0], &[0, 0, 0, 0]]);

        let left = slide(&start, Direction::Left);
        assert_eq!(left.board.row(0), &[4, 4, 0, 0]);
        assert_eq!(left.gained, 8);

        let right = slide(&start, Direction::Right);
        assert_eq!(right.board.row(0), &[0, 0, 4, 4]);

        let down = slide(&start, Direction::Down);
        assert_eq!(down.board.row(3), &[2, 2, 2, 2]);
        assert_eq!(down.board.row(0), &[0, 0, 0, 0]);
        assert_eq!(down.gained, 0);
        assert!(down.moved);

        let up = slide(&start, Direction::Up);
        assert!(!up.moved);
    }

    #[test]
    fn test_slide_vertical_merge() {
        let start = board(&[&[2, 0], &[2, 0]]);
        let up = slide(&start, Direction::Up);
        assert_eq!(up.board, board(&[&[4, 0], &[0, 0]]));
        let down = slide(&start, Direction::Down);
        assert_eq!(down.board, board(&[&[0, 0], &[4, 0]]));
    }

    // ============ can_move / status ============

    #[test]
    fn test_full_board_without_pairs_is_stuck() {
        let stuck = board(&[&[2, 4, 2, 4], &[4, 2, 4, 2], &[2, 4, 2, 4], &[4, 2, 4, 2]]);
        assert!(!can_move(&stuck));
        assert_eq!(status_for(&stuck), GameStatus::Lost);
    }

    #[test]
    fn test_full_board_with_pair_is_not_terminal() {
        let vertical = board(&[&[2, 4, 2, 4], &[4, 2, 4, 2], &[2, 4, 2, 4], &[4, 2, 4, 4]]);
        assert!(can_move(&vertical));

        let column = board(&[&[2, 4], &[2, 8]]);
        assert!(can_move(&column));
    }

    #[test]
    fn test_pair_of_largest_tiles_is_stuck() {
        let top = 1u32 << 31;
        let full = board(&[&[top, top], &[2, 4]]);
        assert!(!can_move(&full));
        assert_eq!(status_for(&full), GameStatus::Lost);
    }

    #[test]
    fn test_largest_tiles_slide_without_overflow() {
        let top = 1u32 << 31;
        let mut game = MergeGame::from_board(board(&[&[0, top], &[0, top]]), u32::MAX - 1).unwrap();
        let mut rng = ScriptedSource::zeros();

        let outcome = apply_move(&mut game, Direction::Left, &mut rng);

        assert!(outcome.changed);
        assert_eq!(outcome.score_delta, 0);
        assert_eq!(game.board().row(0)[0], top);
        assert_eq!(game.board().row(1)[0], top);
    }

    #[test]
    fn test_score_saturates() {
        let mut game = MergeGame::from_board(board(&[&[2, 2], &[0, 0]]), u32::MAX - 1).unwrap();
        let outcome = apply_move(&mut game, Direction::Left, &mut ScriptedSource::zeros());
        assert_eq!(outcome.score_delta, 4);
        assert_eq!(game.score, u32::MAX);
    }

    // ============ apply_move ============

    #[test]
    fn test_new_game_has_two_tiles() {
        let mut rng = StdRng::seed_from_u64(42);
        let game = MergeGame::new(MergeConfig::default(), &mut rng).unwrap();
        assert_eq!(tiles(game.board()), 2);
        assert_eq!(game.score, 0);
        assert_eq!(game.status, GameStatus::Playing);
        assert!(game.board().iter().all(|&v| v == 0 || v == 2 || v == 4));
    }

    #[test]
    fn test_move_spawns_exactly_one_tile_and_scores() {
        let mut game = MergeGame::from_board(
            board(&[&[2, 2, 0, 0], &[0, 0, 0, 0], &[0, 0, 0, 0], &[0, 0, 0, 0]]),
            0,
        )
        .unwrap();
        let mut rng = ScriptedSource::zeros();

        let outcome = apply_move(&mut game, Direction::Left, &mut rng);

        assert!(outcome.changed);
        assert_eq!(outcome.score_delta, 4);
        assert_eq!(game.score, 4);
        // Merged 4 plus the spawned 2 on the first empty cell (0,1)
        assert_eq!(game.board().row(0), &[4, 2, 0, 0]);
        assert_eq!(tiles(game.board()), 2);
    }

    #[test]
    fn test_noop_move_does_not_spawn() {
        let mut game = MergeGame::from_board(
            board(&[&[2, 0, 0, 0], &[0, 0, 0, 0], &[0, 0, 0, 0], &[0, 0, 0, 0]]),
            10,
        )
        .unwrap();
        let before = game.clone();
        let mut rng = StdRng::seed_from_u64(1);

        let outcome = apply_move(&mut game, Direction::Left, &mut rng);

        assert_eq!(outcome, ActionOutcome::UNCHANGED);
        assert_eq!(game, before);
    }

    #[test]
    fn test_same_direction_twice_second_is_noop() {
        let mut game = MergeGame::from_board(
            board(&[&[0, 0, 0, 2], &[0, 0, 0, 0], &[0, 0, 0, 0], &[0, 0, 0, 0]]),
            0,
        )
        .unwrap();
        // Spawn lands on (1,0), already against the left edge
        let mut rng = ScriptedSource::new([3], [true]);
        assert!(apply_move(&mut game, Direction::Left, &mut rng).changed);
        let tiles_after_first = tiles(game.board());

        let second = apply_move(&mut game, Direction::Left, &mut rng);
        assert!(!second.changed);
        assert_eq!(tiles(game.board()), tiles_after_first);
    }

    #[test]
    fn test_spawn_value_respects_chance() {
        let mut grid = Grid::new(2, 2, 0u32);
        let mut rng = ScriptedSource::new([0, 0], [false, true]);
        spawn_tile(&mut grid, &mut rng);
        spawn_tile(&mut grid, &mut rng);
        assert_eq!(grid.row(0), &[4, 2]);
    }

    #[test]
    fn test_spawn_on_full_board_returns_none() {
        let mut grid = board(&[&[2, 4], &[4, 2]]);
        assert!(spawn_tile(&mut grid, &mut ScriptedSource::zeros()).is_none());
    }

    #[test]
    fn test_move_into_locked_board_sets_lost() {
        // Sliding right fills the last gap and leaves no pairs
        let mut game = MergeGame::from_board(
            board(&[&[2, 4, 8, 0], &[4, 8, 16, 32], &[8, 16, 32, 64], &[16, 32, 64, 128]]),
            0,
        )
        .unwrap();
        // Spawned tile lands on (0,0) as a 4, which neighbors (0,1)=2 and (1,0)=4
        let mut rng = ScriptedSource::new([0], [false]);

        let outcome = apply_move(&mut game, Direction::Right, &mut rng);

        assert!(outcome.changed);
        assert_eq!(game.board().row(0), &[4, 2, 4, 8]);
        // (0,0)=4 sits above (1,0)=4, so a merge is still possible
        assert_eq!(game.status, GameStatus::Playing);

        let mut stuck = MergeGame::from_board(
            board(&[&[0, 4, 8, 2], &[4, 8, 16, 32], &[8, 16, 32, 64], &[16, 32, 64, 128]]),
            0,
        )
        .unwrap();
        // Slide left -> [4,8,2,0]; spawn a 2 at (0,3): no pairs anywhere
        let mut rng = ScriptedSource::new([0], [true]);
        let outcome = apply_move(&mut stuck, Direction::Left, &mut rng);
        assert_eq!(stuck.board().row(0), &[4, 8, 2, 2]);
        assert_eq!(stuck.status, GameStatus::Playing, "2,2 pair remains");
        assert!(!outcome.status_changed);

        let mut locked = MergeGame::from_board(
            board(&[&[0, 2, 4, 8], &[4, 8, 16, 32], &[8, 16, 32, 64], &[16, 32, 64, 128]]),
            0,
        )
        .unwrap();
        // Slide left -> [2,4,8,0]; spawn a 2 at (0,3) -> no empty, no pairs
        let mut rng = ScriptedSource::new([0], [true]);
        let outcome = apply_move(&mut locked, Direction::Left, &mut rng);
        assert_eq!(locked.board().row(0), &[2, 4, 8, 2]);
        assert_eq!(locked.status, GameStatus::Lost);
        assert!(outcome.status_changed);

        // Terminal: further moves are ignored
        let after = apply_move(&mut locked, Direction::Right, &mut rng);
        assert_eq!(after, ActionOutcome::UNCHANGED);
    }

    #[test]
    fn test_reset_restores_fresh_board() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut game = MergeGame::new(MergeConfig::default(), &mut rng).unwrap();
        game.score = 512;
        game.status = GameStatus::Lost;

        let snapshot = game.reset(&mut rng);

        assert_eq!(snapshot.score, 0);
        assert_eq!(snapshot.status, GameStatus::Playing);
        assert_eq!(tiles(&snapshot.board), 2);
    }
}
