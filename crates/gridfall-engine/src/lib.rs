//! Core game logic for Gridfall, a falling-block puzzle.
//!
//! This crate owns the board grid, the falling piece, movement and rotation
//! validation, line clearing, scoring, and piece generation. It has no
//! rendering or terminal dependencies; front ends drive it through the
//! [`Game`] orchestrator and read its state back for display.

pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

/// Error returned when a seed string is not 32 hexadecimal characters.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("invalid seed: expected 32 hex characters")]
pub struct ParseSeedError;
