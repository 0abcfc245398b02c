//! Game orchestration: the engine state machine, piece factory, and score.
//!
//! - [`Game`] — board + falling piece + score + terminal state, with the
//!   four player operations (`tick`, `move_horizontal`, `soft_drop`,
//!   `rotate`)
//! - [`PieceFactory`] — uniform random piece generation from an injected,
//!   seedable generator
//! - [`GameStats`] — score and counters
//!
//! # Game flow
//!
//! 1. Construct a [`Game`] (optionally from a [`PieceSeed`])
//! 2. A periodic timer calls [`Game::tick`]; key presses call the movement
//!    operations
//! 3. A piece that can no longer descend locks into the board, a new piece
//!    spawns, and full lines are cleared and scored
//! 4. Locking at the spawn row ends the game; afterwards every operation is
//!    a no-op

pub use self::{game::*, piece_factory::*, stats::*};

mod game;
mod piece_factory;
mod stats;
