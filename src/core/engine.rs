//! The host-facing contract every engine implements.

use super::error::ConfigError;
use super::random::RandomSource;
use super::status::GameStatus;

/// What a single `apply` did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActionOutcome {
    /// The engine state differs from before the action.
    pub changed: bool,
    /// The status differs from before the action.
    pub status_changed: bool,
    /// Points gained by this action.
    pub score_delta: u32,
}

impl ActionOutcome {
    /// Result of an action that was not applicable (silent no-op).
    pub const UNCHANGED: ActionOutcome = ActionOutcome {
        changed: false,
        status_changed: false,
        score_delta: 0,
    };
}

/// initialize → apply(action) → snapshot, for one game.
///
/// Engines are synchronous and single-threaded; the host owns the engine
/// value and serializes every call. Snapshots are owned copies.
pub trait Engine: Sized {
    type Config;
    type Action: Copy;
    type Snapshot: Clone + PartialEq;

    /// Validate `config` and build a fresh session.
    fn new<R: RandomSource + ?Sized>(config: Self::Config, rng: &mut R) -> Result<Self, ConfigError>;

    /// Apply one action. Inapplicable actions return [`ActionOutcome::UNCHANGED`].
    fn apply<R: RandomSource + ?Sized>(&mut self, action: Self::Action, rng: &mut R) -> ActionOutcome;

    /// Start over with the same configuration.
    fn reset<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> Self::Snapshot;

    fn snapshot(&self) -> Self::Snapshot;

    fn status(&self) -> GameStatus;

    fn score(&self) -> u32;
}
