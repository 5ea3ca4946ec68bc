//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Default board dimensions (the board variant plays 10x20; the small
/// terminal variant plays 8x8 via configuration)
pub const DEFAULT_BOARD_WIDTH: u8 = 10;
pub const DEFAULT_BOARD_HEIGHT: u8 = 20;

/// Game timing constants (in milliseconds)
pub const TICK_MS: u32 = 16;
pub const BASE_FALL_INTERVAL_MS: u32 = 1000;
pub const FALL_INTERVAL_FLOOR_MS: u32 = 80;
pub const LOCK_DELAY_MS: u32 = 500;

/// Starting level is adjustable in the options menu within [0, MAX_START_LEVEL]
pub const MAX_START_LEVEL: u8 = 20;

/// One cell of the playfield grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    /// Part of the currently falling piece
    Active,
    /// Locked; counts toward line-full checks and collision
    Settled,
}

impl Cell {
    pub fn is_settled(self) -> bool {
        self == Cell::Settled
    }

    pub fn is_active(self) -> bool {
        self == Cell::Active
    }
}

/// Index into the active shape catalog
pub type ShapeId = usize;

/// Rotation direction for the active piece
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotateDir {
    Left,
    Right,
}

/// Where a freshly spawned piece's 4x4 frame is anchored horizontally
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpawnColumn {
    /// Random column drawn from the session RNG
    #[default]
    Random,
    /// Fixed, roughly centered column
    Centered,
}

/// Discrete commands consumed by the game-state machine.
///
/// Front-ends translate raw keys or switch edges into these; the core never
/// sees key codes or register values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    MoveLeft,
    MoveRight,
    Rotate,
    SoftDrop,
    Escape,
    Play,
    OptionsMenu,
    Quit,
    Back,
    ToggleSoftDrop,
    LevelUp,
    LevelDown,
}

/// Line clear scoring table: 1, 2, 3 and 4-or-more lines
pub const LINE_SCORES: [u32; 4] = [100, 300, 500, 800];
