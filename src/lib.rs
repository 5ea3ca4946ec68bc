//! Falling-block puzzle game with a pure core and pluggable front-ends.
//!
//! The `core` module holds the board, the active-piece controller, gravity
//! and lock timing, line clearing/scoring and the menu state machine; it is
//! deterministic and I/O-free. `term` drives a crossterm terminal, `hal`
//! abstracts the switch/button/framebuffer peripherals of the embedded board
//! build, and `config` is the CLI surface.

pub mod config;
pub mod core;
pub mod hal;
pub mod input;
pub mod term;
pub mod types;
