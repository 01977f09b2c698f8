//! Integration test: minefield engine
//!
//! Covers the lazy first-reveal layout (safe start, exact mine count),
//! flood reveal, flag rules, win and loss. Property tests run the opening
//! click over random board shapes and seeds.

use arcade::core::{ConfigError, Coordinate, Engine, GameStatus};
use arcade::games::{MinefieldAction, MinefieldConfig, MinefieldGame};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn at(row: i32, col: i32) -> Coordinate {
    Coordinate::new(row, col)
}

#[test]
fn test_new_board_is_ready_and_unmined() {
    let game = MinefieldGame::new(MinefieldConfig::default()).unwrap();
    let snapshot = game.snapshot();

    assert_eq!(snapshot.status, GameStatus::Ready);
    assert!(!snapshot.mines_placed);
    assert_eq!(snapshot.grid.count(|c| c.is_mine), 0);
    assert_eq!(snapshot.grid.rows(), 9);
    assert_eq!(snapshot.grid.cols(), 9);
}

#[test]
fn test_too_many_mines_rejected() {
    let config = MinefieldConfig {
        rows: 5,
        cols: 5,
        mines: 17,
    };
    assert_eq!(
        MinefieldGame::new(config),
        Err(ConfigError::TooManyMines {
            mines: 17,
            rows: 5,
            cols: 5,
            max: 16,
        })
    );
    assert!(MinefieldGame::new(MinefieldConfig { mines: 16, ..config }).is_ok());
}

#[test]
fn test_zero_dimension_rejected() {
    let config = MinefieldConfig {
        rows: 0,
        cols: 9,
        mines: 0,
    };
    assert!(matches!(
        MinefieldGame::new(config),
        Err(ConfigError::InvalidDimensions { .. })
    ));
}

#[test]
fn test_first_reveal_starts_play_and_scores_revealed_cells() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let mut game = MinefieldGame::new(MinefieldConfig::default()).unwrap();

    let outcome = game.apply(MinefieldAction::Reveal(at(4, 4)), &mut rng);

    assert!(outcome.changed);
    assert!(outcome.status_changed);
    assert!(game.mines_placed());
    assert_ne!(game.status(), GameStatus::Lost);
    // The safe zone has no mines, so the opening cell has count 0 and floods.
    assert_eq!(game.cell(at(4, 4)).unwrap().adjacent_count, 0);
    assert!(outcome.score_delta >= 9);
    assert_eq!(game.score(), outcome.score_delta);
}

#[test]
fn test_flag_blocks_reveal_until_removed() {
    let mut game = MinefieldGame::from_layout(&["M...", "....", "...."]).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    game.apply(MinefieldAction::ToggleFlag(at(0, 0)), &mut rng);
    assert_eq!(game.flags_placed(), 1);
    assert_eq!(game.mines_remaining(), 0);
    assert_eq!(game.snapshot().mines_remaining, 0);

    let blocked = game.apply(MinefieldAction::Reveal(at(0, 0)), &mut rng);
    assert!(!blocked.changed);
    assert_eq!(game.status(), GameStatus::Playing);

    game.apply(MinefieldAction::ToggleFlag(at(0, 0)), &mut rng);
    let hit = game.apply(MinefieldAction::Reveal(at(0, 0)), &mut rng);
    assert!(hit.status_changed);
    assert_eq!(game.status(), GameStatus::Lost);
}

#[test]
fn test_flag_on_revealed_cell_is_ignored() {
    let mut game = MinefieldGame::from_layout(&["M..", "...", "..."]).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    game.apply(MinefieldAction::Reveal(at(0, 1)), &mut rng);
    let outcome = game.apply(MinefieldAction::ToggleFlag(at(0, 1)), &mut rng);

    assert!(!outcome.changed);
    assert!(!game.cell(at(0, 1)).unwrap().is_flagged);
}

#[test]
fn test_clearing_every_safe_cell_wins() {
    // One reveal in the open corner floods the whole safe region.
    let mut game = MinefieldGame::from_layout(&["....", "....", "...M"]).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let outcome = game.apply(MinefieldAction::Reveal(at(0, 0)), &mut rng);

    assert_eq!(outcome.score_delta, 11);
    assert_eq!(game.status(), GameStatus::Won);
    assert!(!game.cell(at(2, 3)).unwrap().is_revealed);

    let after = game.apply(MinefieldAction::Reveal(at(2, 3)), &mut rng);
    assert!(!after.changed);
}

#[test]
fn test_loss_reveals_every_mine() {
    let mut game = MinefieldGame::from_layout(&["M...", "....", "..MM"]).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    game.apply(MinefieldAction::Reveal(at(2, 2)), &mut rng);

    let snapshot = game.snapshot();
    assert_eq!(snapshot.status, GameStatus::Lost);
    assert!(snapshot.grid.iter().filter(|c| c.is_mine).all(|c| c.is_revealed));
}

#[test]
fn test_reset_returns_to_unmined_board() {
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let mut game = MinefieldGame::new(MinefieldConfig::default()).unwrap();
    game.apply(MinefieldAction::Reveal(at(0, 0)), &mut rng);

    let snapshot = game.reset(&mut rng);

    assert_eq!(snapshot.status, GameStatus::Ready);
    assert!(!snapshot.mines_placed);
    assert_eq!(snapshot.revealed_safe, 0);
    assert_eq!(snapshot.grid.count(|c| c.is_mine || c.is_revealed), 0);
}

fn board_strategy() -> impl Strategy<Value = (MinefieldConfig, usize, usize)> {
    (3usize..12, 3usize..12).prop_flat_map(|(rows, cols)| {
        let max = rows * cols - 9;
        (0..=max, 0..rows, 0..cols).prop_map(move |(mines, r, c)| {
            (MinefieldConfig { rows, cols, mines }, r, c)
        })
    })
}

proptest! {
    #[test]
    fn prop_first_reveal_is_never_a_mine(
        (config, row, col) in board_strategy(),
        seed in any::<u64>(),
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut game = MinefieldGame::new(config).unwrap();
        let first = Coordinate::from((row, col));

        game.apply(MinefieldAction::Reveal(first), &mut rng);

        prop_assert_ne!(game.status(), GameStatus::Lost);
        prop_assert_eq!(game.grid().count(|c| c.is_mine), config.mines);
        prop_assert!(!game.cell(first).unwrap().is_mine);
        for n in game.grid().neighbors(first) {
            prop_assert!(!game.cell(n).unwrap().is_mine, "neighbor {:?} of {:?} is mined", n, first);
        }
    }

    #[test]
    fn prop_adjacent_counts_match_layout(
        (config, row, col) in board_strategy(),
        seed in any::<u64>(),
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut game = MinefieldGame::new(config).unwrap();
        game.apply(MinefieldAction::Reveal(Coordinate::from((row, col))), &mut rng);

        let grid = game.grid();
        for cell_at in grid.coords() {
            let cell = &grid[cell_at];
            if cell.is_mine {
                continue;
            }
            let expected = grid
                .neighbors(cell_at)
                .into_iter()
                .filter(|&n| grid[n].is_mine)
                .count();
            prop_assert_eq!(cell.adjacent_count as usize, expected);
        }
    }
}
