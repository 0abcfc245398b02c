//! Core data structures: the playfield grid and the falling pieces.

pub use self::{board::*, piece::*};

mod board;
mod piece;

/// Number of rows in the playfield.
pub const BOARD_HEIGHT: usize = 20;

/// Number of columns in the playfield.
pub const BOARD_WIDTH: usize = 10;
