//! Terminal front-end: framebuffer, renderer and per-phase views
//!
//! The core never calls into this module; the runner reads board cells,
//! score and level out of the core and paints them here.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{CellStyle, FrameBuffer, TermCell};
pub use game_view::GameView;
pub use renderer::TerminalRenderer;
