//! Engine-independent building blocks: grid primitives, status, randomness,
//! configuration errors and the engine contract.

pub mod engine;
pub mod error;
pub mod grid;
pub mod random;
pub mod status;

pub use engine::{ActionOutcome, Engine};
pub use error::ConfigError;
pub use grid::{Coordinate, Direction, Grid};
pub use random::{choose_distinct, RandomSource, ScriptedSource};
pub use status::GameStatus;
