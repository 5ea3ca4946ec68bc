//! Core module - pure game logic with no external dependencies
//!
//! Everything here is deterministic and free of I/O: the board, the
//! active-piece controller, the gravity/lock timers, scoring and the
//! menu/playing state machine. Front-ends feed in [`crate::types::InputEvent`]
//! values and elapsed time, and read board cells back out.

pub mod board;
pub mod game;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod shapes;

pub use board::Board;
pub use game::{Game, Options, Phase};
pub use piece::{ActiveFrame, Playfield, WALL_KICKS};
pub use rng::LcgRng;
pub use session::{GameSession, SessionConfig};
pub use shapes::{rotated, Catalog, Mask4, Shape, SHAPES, STRAIGHT};
