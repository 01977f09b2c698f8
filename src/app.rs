//! Host state for the terminal front end: the game menu, the open game and
//! its cursor, the snake tick scheduler and best-score bookkeeping.
//!
//! The host holds no game rules. Every change to a board goes through the
//! engine's `apply`/`reset`.

use tracing::{info, warn};

use crate::best_scores::BestScores;
use crate::constants::MAX_TICK_CATCHUP_MS;
use crate::core::{ActionOutcome, ConfigError, Coordinate, Direction, Engine, GameStatus, RandomSource};
use crate::games::{
    GameKind, MergeConfig, MergeGame, MinefieldAction, MinefieldConfig, MinefieldGame, SnakeAction,
    SnakeConfig, SnakeGame, TicTacToeAction, TicTacToeConfig, TicTacToeGame,
};
use crate::input::ArcadeInput;

/// The game currently on screen, plus any host-side view state.
#[derive(Debug, Clone)]
pub enum ActiveGame {
    Merge(MergeGame),
    Minefield {
        game: MinefieldGame,
        cursor: Coordinate,
    },
    Snake {
        game: SnakeGame,
        /// Milliseconds not yet spent on ticks.
        accumulated_ms: u64,
    },
    TicTacToe {
        game: TicTacToeGame,
        cursor: Coordinate,
    },
}

impl ActiveGame {
    pub fn kind(&self) -> GameKind {
        match self {
            Self::Merge(_) => GameKind::Merge,
            Self::Minefield { .. } => GameKind::Minefield,
            Self::Snake { .. } => GameKind::Snake,
            Self::TicTacToe { .. } => GameKind::TicTacToe,
        }
    }

    pub fn status(&self) -> GameStatus {
        match self {
            Self::Merge(game) => game.status(),
            Self::Minefield { game, .. } => game.status(),
            Self::Snake { game, .. } => game.status(),
            Self::TicTacToe { game, .. } => game.status(),
        }
    }

    pub fn score(&self) -> u32 {
        match self {
            Self::Merge(game) => game.score(),
            Self::Minefield { game, .. } => game.score(),
            Self::Snake { game, .. } => game.score(),
            Self::TicTacToe { game, .. } => game.score(),
        }
    }
}

/// Clamp a cursor step to a rows×cols board.
fn step_cursor(cursor: Coordinate, direction: Direction, rows: usize, cols: usize) -> Coordinate {
    let next = cursor.step(direction);
    Coordinate::new(
        next.row.clamp(0, rows.saturating_sub(1) as i32),
        next.col.clamp(0, cols.saturating_sub(1) as i32),
    )
}

pub struct App<R: RandomSource> {
    pub(crate) menu_index: usize,
    pub(crate) active: Option<ActiveGame>,
    pub(crate) best: BestScores,
    pub(crate) rng: R,
    /// Set when the current round beat the stored best.
    pub(crate) new_best: bool,
    pub(crate) should_quit: bool,
}

impl<R: RandomSource> App<R> {
    pub fn new(best: BestScores, rng: R) -> Self {
        Self {
            menu_index: 0,
            active: None,
            best,
            rng,
            new_best: false,
            should_quit: false,
        }
    }

    pub fn menu_index(&self) -> usize {
        self.menu_index
    }

    pub fn active(&self) -> Option<&ActiveGame> {
        self.active.as_ref()
    }

    pub fn best(&self) -> &BestScores {
        &self.best
    }

    pub fn is_new_best(&self) -> bool {
        self.new_best
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Start `kind` with its default configuration.
    pub fn open(&mut self, kind: GameKind) -> Result<(), ConfigError> {
        let active = match kind {
            GameKind::Merge => ActiveGame::Merge(MergeGame::new(MergeConfig::default(), &mut self.rng)?),
            GameKind::Minefield => {
                let config = MinefieldConfig::default();
                ActiveGame::Minefield {
                    game: MinefieldGame::new(config)?,
                    cursor: Coordinate::from((config.rows / 2, config.cols / 2)),
                }
            }
            GameKind::Snake => ActiveGame::Snake {
                game: SnakeGame::new(SnakeConfig::default(), &mut self.rng)?,
                accumulated_ms: 0,
            },
            GameKind::TicTacToe => ActiveGame::TicTacToe {
                game: TicTacToeGame::new(TicTacToeConfig::default()),
                cursor: Coordinate::new(1, 1),
            },
        };
        info!(game = kind.id(), "game opened");
        self.menu_index = GameKind::ALL.iter().position(|k| *k == kind).unwrap_or(0);
        self.active = Some(active);
        self.new_best = false;
        Ok(())
    }

    /// Leave the open game for the menu.
    pub fn close(&mut self) {
        if let Some(active) = self.active.take() {
            info!(game = active.kind().id(), score = active.score(), "game closed");
        }
        self.new_best = false;
    }

    pub fn handle_input(&mut self, input: ArcadeInput) {
        if input == ArcadeInput::Quit {
            self.should_quit = true;
            return;
        }
        if self.active.is_none() {
            self.handle_menu_input(input);
            return;
        }
        if input == ArcadeInput::Cancel {
            self.close();
            return;
        }

        let outcome = self.handle_game_input(input);
        if outcome.score_delta > 0 {
            self.record_best();
        }
    }

    fn handle_menu_input(&mut self, input: ArcadeInput) {
        let count = GameKind::ALL.len();
        match input {
            ArcadeInput::Up => self.menu_index = (self.menu_index + count - 1) % count,
            ArcadeInput::Down => self.menu_index = (self.menu_index + 1) % count,
            ArcadeInput::Primary => {
                let kind = GameKind::from_index(self.menu_index);
                if let Err(e) = self.open(kind) {
                    warn!(game = kind.id(), error = %e, "could not start game");
                }
            }
            ArcadeInput::Cancel => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_game_input(&mut self, input: ArcadeInput) -> ActionOutcome {
        let rng = &mut self.rng;
        let Some(active) = self.active.as_mut() else {
            return ActionOutcome::UNCHANGED;
        };

        if input == ArcadeInput::Restart {
            let restartable = match active {
                // A running snake keeps going; restart from Ready, Paused or game over
                ActiveGame::Snake { game, .. } => game.status() != GameStatus::Playing,
                _ => true,
            };
            if restartable {
                restart(active, rng);
                self.new_best = false;
            }
            return ActionOutcome::UNCHANGED;
        }

        match active {
            ActiveGame::Merge(game) => match input.direction() {
                Some(direction) => game.apply(direction, rng),
                None => ActionOutcome::UNCHANGED,
            },
            ActiveGame::Minefield { game, cursor } => {
                let config = game.config();
                match input {
                    ArcadeInput::Primary => game.apply(MinefieldAction::Reveal(*cursor), rng),
                    ArcadeInput::Secondary => game.apply(MinefieldAction::ToggleFlag(*cursor), rng),
                    _ => {
                        if let Some(direction) = input.direction() {
                            *cursor = step_cursor(*cursor, direction, config.rows, config.cols);
                        }
                        ActionOutcome::UNCHANGED
                    }
                }
            }
            ActiveGame::Snake { game, accumulated_ms } => match input {
                ArcadeInput::Primary => {
                    *accumulated_ms = 0;
                    game.apply(SnakeAction::Start, rng)
                }
                ArcadeInput::Secondary => game.apply(SnakeAction::TogglePause, rng),
                _ => match input.direction() {
                    Some(direction) => game.apply(SnakeAction::Steer(direction), rng),
                    None => ActionOutcome::UNCHANGED,
                },
            },
            ActiveGame::TicTacToe { game, cursor } => match input {
                ArcadeInput::Primary | ArcadeInput::Secondary => {
                    game.apply(TicTacToeAction::Place(*cursor), rng)
                }
                ArcadeInput::Swap => game.apply(TicTacToeAction::SwapStarter, rng),
                _ => {
                    if let Some(direction) = input.direction() {
                        let cells = game.cells();
                        *cursor = step_cursor(*cursor, direction, cells.rows(), cells.cols());
                    }
                    ActionOutcome::UNCHANGED
                }
            },
        }
    }

    /// Advance time-driven games by `dt_ms`. Returns true if anything moved.
    ///
    /// Only the snake is time-driven. Large gaps (a stalled terminal, a
    /// suspended process) are clamped so the snake does not leap ahead.
    pub fn tick(&mut self, dt_ms: u64) -> bool {
        let Some(ActiveGame::Snake {
            game,
            accumulated_ms,
        }) = self.active.as_mut()
        else {
            return false;
        };

        if game.status() != GameStatus::Playing {
            *accumulated_ms = 0;
            return false;
        }

        *accumulated_ms += dt_ms.min(MAX_TICK_CATCHUP_MS);
        let interval = game.tick_ms().max(1);
        let mut changed = false;
        let mut scored = false;

        while *accumulated_ms >= interval {
            *accumulated_ms -= interval;
            let outcome = game.apply(SnakeAction::Tick, &mut self.rng);
            changed |= outcome.changed;
            scored |= outcome.score_delta > 0;
            if game.status().is_terminal() {
                *accumulated_ms = 0;
                break;
            }
        }

        if scored {
            self.record_best();
        }
        changed
    }

    fn record_best(&mut self) {
        let Some(active) = self.active.as_ref() else {
            return;
        };
        let kind = active.kind();
        if !kind.keeps_best_score() {
            return;
        }
        match self.best.record(kind, active.score()) {
            Ok(true) => self.new_best = true,
            Ok(false) => {}
            Err(e) => {
                // Still a new best for this run even if the file write failed
                self.new_best = true;
                warn!(game = kind.id(), error = %e, "best score not saved");
            }
        }
    }
}

fn restart<R: RandomSource + ?Sized>(active: &mut ActiveGame, rng: &mut R) {
    match active {
        ActiveGame::Merge(game) => {
            game.reset(rng);
        }
        ActiveGame::Minefield { game, .. } => {
            game.reset(rng);
        }
        ActiveGame::Snake {
            game,
            accumulated_ms,
        } => {
            game.reset(rng);
            *accumulated_ms = 0;
        }
        ActiveGame::TicTacToe { game, .. } => {
            game.reset(rng);
        }
    }
    info!(game = active.kind().id(), "game restarted");
}
