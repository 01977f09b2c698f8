//! Arcade - grid game engines with a terminal host.
//!
//! The engines (`games`) are plain state machines over `core` primitives with
//! injected randomness. `app`, `input` and `best_scores` form the host layer
//! the binary drives; they are exposed here for testing.

// Allow dead code in library - some helpers are only used by the binary
#![allow(dead_code)]

pub mod app;
pub mod best_scores;
pub mod constants;
pub mod core;
pub mod games;
pub mod input;
pub mod utils;

// `ui` lives in the binary and reaches everything else through this crate.
