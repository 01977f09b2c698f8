//! Snake logic: direction buffering, tick movement, collisions and food.

use tracing::{debug, info};

use super::types::{SnakeAction, SnakeConfig, SnakeGame, SnakeSnapshot};
use crate::core::{ActionOutcome, ConfigError, Coordinate, Direction, Engine, GameStatus, RandomSource};

/// Pick a random free cell for food by rejection sampling.
///
/// Draws a row and a column per attempt and rejects body cells. Returns
/// `None` once `config.food_attempts` draws all landed on the body.
pub fn place_food<R: RandomSource + ?Sized>(game: &SnakeGame, rng: &mut R) -> Option<Coordinate> {
    let SnakeConfig {
        rows,
        cols,
        food_attempts,
        ..
    } = game.config;

    for _ in 0..food_attempts {
        let candidate = Coordinate::from((rng.pick_index(rows), rng.pick_index(cols)));
        if !game.body.contains(&candidate) {
            return Some(candidate);
        }
    }
    None
}

/// Queue a turn. Ignored when it would reverse the current heading or the
/// game is over.
pub fn set_pending_direction(game: &mut SnakeGame, direction: Direction) -> ActionOutcome {
    if game.status.is_terminal()
        || direction.is_opposite(game.direction)
        || direction == game.pending_direction
    {
        return ActionOutcome::UNCHANGED;
    }
    game.pending_direction = direction;
    ActionOutcome {
        changed: true,
        status_changed: false,
        score_delta: 0,
    }
}

pub fn start(game: &mut SnakeGame) -> ActionOutcome {
    if game.status != GameStatus::Ready {
        return ActionOutcome::UNCHANGED;
    }
    game.status = GameStatus::Playing;
    ActionOutcome {
        changed: true,
        status_changed: true,
        score_delta: 0,
    }
}

pub fn toggle_pause(game: &mut SnakeGame) -> ActionOutcome {
    game.status = match game.status {
        GameStatus::Playing => GameStatus::Paused,
        GameStatus::Paused => GameStatus::Playing,
        _ => return ActionOutcome::UNCHANGED,
    };
    ActionOutcome {
        changed: true,
        status_changed: true,
        score_delta: 0,
    }
}

fn lose(game: &mut SnakeGame, reason: &str) -> ActionOutcome {
    game.status = GameStatus::Lost;
    info!(score = game.score, length = game.body.len(), reason, "snake died");
    ActionOutcome {
        changed: true,
        status_changed: true,
        score_delta: 0,
    }
}

/// Advance the snake one cell. No-op unless Playing.
///
/// The pending turn is committed first. A wall or any body cell (tail
/// included) ends the game with the body untouched. Eating keeps the tail,
/// scores one point and relocates the food.
pub fn tick<R: RandomSource + ?Sized>(game: &mut SnakeGame, rng: &mut R) -> ActionOutcome {
    if game.status != GameStatus::Playing {
        return ActionOutcome::UNCHANGED;
    }

    if !game.pending_direction.is_opposite(game.direction) {
        game.direction = game.pending_direction;
    }

    let Some(head) = game.head() else {
        return lose(game, "empty body");
    };
    let next_head = head.step(game.direction);

    let (rows, cols) = (game.config.rows as i32, game.config.cols as i32);
    if next_head.row < 0 || next_head.col < 0 || next_head.row >= rows || next_head.col >= cols {
        return lose(game, "wall");
    }
    if game.body.contains(&next_head) {
        return lose(game, "self");
    }

    game.body.push_front(next_head);

    if game.food != Some(next_head) {
        game.body.pop_back();
        return ActionOutcome {
            changed: true,
            status_changed: false,
            score_delta: 0,
        };
    }

    game.score += 1;
    game.food = place_food(game, rng);
    match game.food {
        Some(food) => {
            debug!(row = food.row, col = food.col, score = game.score, "food placed");
            ActionOutcome {
                changed: true,
                status_changed: false,
                score_delta: 1,
            }
        }
        None => {
            let mut outcome = lose(game, "no room for food");
            outcome.score_delta = 1;
            outcome
        }
    }
}

/// Dispatch one action.
pub fn apply_action<R: RandomSource + ?Sized>(game: &mut SnakeGame, action: SnakeAction, rng: &mut R) -> ActionOutcome {
    match action {
        SnakeAction::Steer(direction) => set_pending_direction(game, direction),
        SnakeAction::Tick => tick(game, rng),
        SnakeAction::Start => start(game),
        SnakeAction::TogglePause => toggle_pause(game),
    }
}

impl SnakeGame {
    /// Fresh session: start body facing right, food placed, status Ready.
    pub fn new<R: RandomSource + ?Sized>(config: SnakeConfig, rng: &mut R) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut game = Self {
            config,
            body: config.start_body(),
            food: None,
            direction: Direction::Right,
            pending_direction: Direction::Right,
            score: 0,
            status: GameStatus::Ready,
        };
        game.food = place_food(&game, rng);
        if game.food.is_none() {
            game.status = GameStatus::Lost;
        }
        Ok(game)
    }
}

impl Engine for SnakeGame {
    type Config = SnakeConfig;
    type Action = SnakeAction;
    type Snapshot = SnakeSnapshot;

    fn new<R: RandomSource + ?Sized>(config: SnakeConfig, rng: &mut R) -> Result<Self, ConfigError> {
        SnakeGame::new(config, rng)
    }

    fn apply<R: RandomSource + ?Sized>(&mut self, action: SnakeAction, rng: &mut R) -> ActionOutcome {
        apply_action(self, action, rng)
    }

    fn reset<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> SnakeSnapshot {
        self.body = self.config.start_body();
        self.direction = Direction::Right;
        self.pending_direction = Direction::Right;
        self.score = 0;
        self.status = GameStatus::Ready;
        self.food = place_food(self, rng);
        if self.food.is_none() {
            self.status = GameStatus::Lost;
        }
        self.snapshot()
    }

    fn snapshot(&self) -> SnakeSnapshot {
        SnakeGame::snapshot(self)
    }

    fn status(&self) -> GameStatus {
        self.status
    }

    fn score(&self) -> u32 {
        self.score
    }
}
