//! Game session - gravity, lock delay, lookahead and scoring for one game
//!
//! Time enters through [`GameSession::tick`] as elapsed milliseconds; the
//! gravity accumulator decouples the drop rate from the caller's poll rate.
//! A grounded piece is not settled immediately: a lock-delay accumulator must
//! reach the configured threshold first, and a successful fall in the
//! meantime (after a line clear vacates cells below, say) resets it.

use crate::core::scoring::{fall_interval_ms, level_for_lines, line_clear_score};
use crate::core::shapes::Catalog;
use crate::core::{ActiveFrame, Board, LcgRng, Playfield};
use crate::types::{RotateDir, ShapeId, SpawnColumn, LOCK_DELAY_MS};

/// Static parameters of a session, fixed at construction.
#[derive(Debug, Clone, Copy)]
pub struct SessionConfig {
    pub width: u8,
    pub height: u8,
    pub catalog: Catalog,
    pub spawn: SpawnColumn,
    pub lock_delay_ms: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            width: crate::types::DEFAULT_BOARD_WIDTH,
            height: crate::types::DEFAULT_BOARD_HEIGHT,
            catalog: Catalog::default(),
            spawn: SpawnColumn::default(),
            lock_delay_ms: LOCK_DELAY_MS,
        }
    }
}

/// Gravity/lock state of the active piece (see `tick`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FallState {
    Airborne,
    Grounded,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    config: SessionConfig,
    playfield: Playfield,
    rng: LcgRng,
    score: u32,
    lines_total: u32,
    start_level: u32,
    level: u32,
    fall_interval_ms: u32,
    fall_timer_ms: u32,
    lock_timer_ms: u32,
    next_shape: ShapeId,
    need_spawn: bool,
    game_over: bool,
}

impl GameSession {
    pub fn new(config: SessionConfig, seed: u32) -> Self {
        let mut rng = LcgRng::new(seed);
        let next_shape = rng.next_below(config.catalog.len() as u32) as ShapeId;
        Self {
            playfield: Playfield::new(config.width, config.height),
            rng,
            score: 0,
            lines_total: 0,
            start_level: 0,
            level: 0,
            fall_interval_ms: fall_interval_ms(0),
            fall_timer_ms: 0,
            lock_timer_ms: 0,
            next_shape,
            need_spawn: true,
            game_over: false,
            config,
        }
    }

    /// Begin a new game at the given starting level. The RNG stream is left
    /// where it is so restarts do not replay the same pieces.
    pub fn reset(&mut self, start_level: u32) {
        self.playfield.reset();
        self.score = 0;
        self.lines_total = 0;
        self.start_level = start_level;
        self.level = start_level;
        self.fall_interval_ms = fall_interval_ms(start_level);
        self.fall_timer_ms = 0;
        self.lock_timer_ms = 0;
        self.need_spawn = true;
        self.game_over = false;
        self.next_shape = self.draw_shape();
    }

    pub fn board(&self) -> &Board {
        self.playfield.board()
    }

    #[doc(hidden)]
    pub fn playfield_mut(&mut self) -> &mut Playfield {
        &mut self.playfield
    }

    pub fn frame(&self) -> Option<ActiveFrame> {
        self.playfield.frame()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines_total(&self) -> u32 {
        self.lines_total
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn fall_interval_ms(&self) -> u32 {
        self.fall_interval_ms
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Identity of the piece that will spawn after the current one locks.
    pub fn next_shape(&self) -> ShapeId {
        self.next_shape
    }

    pub fn next_shape_name(&self) -> &'static str {
        self.config.catalog.shapes()[self.next_shape].name
    }

    pub fn catalog(&self) -> Catalog {
        self.config.catalog
    }

    /// Move the active piece one column left or right. Illegal moves are
    /// silent no-ops.
    pub fn move_horizontal(&mut self, dx: i8) {
        if !self.game_over {
            self.playfield.move_horizontal(dx);
        }
    }

    /// Rotate the active piece with wall-kick fallback.
    pub fn rotate(&mut self, dir: RotateDir) {
        if !self.game_over {
            self.playfield.rotate(dir);
        }
    }

    /// Drop the piece one row immediately if it can fall. Does not reset the
    /// gravity accumulator; soft drop adds to gravity rather than replacing it.
    pub fn soft_drop(&mut self) {
        if !self.game_over && self.playfield.can_fall() {
            self.playfield.fall();
        }
    }

    /// Advance the session by `elapsed_ms` of wall-clock time.
    ///
    /// Every time the gravity accumulator reaches the fall interval, one
    /// gravity step runs and the interval is subtracted, so a long frame can
    /// process several steps.
    pub fn tick(&mut self, elapsed_ms: u32) {
        if self.game_over {
            return;
        }

        self.fall_timer_ms += elapsed_ms;
        while self.fall_timer_ms >= self.fall_interval_ms {
            self.fall_timer_ms -= self.fall_interval_ms;
            self.gravity_step();
            if self.game_over {
                return;
            }
        }

        if self.need_spawn && !self.playfield.board().has_active_piece() {
            self.spawn_next();
        }
    }

    fn fall_state(&self) -> FallState {
        if self.playfield.can_fall() {
            FallState::Airborne
        } else {
            FallState::Grounded
        }
    }

    fn gravity_step(&mut self) {
        if !self.playfield.board().has_active_piece() {
            return;
        }
        match self.fall_state() {
            FallState::Airborne => {
                self.playfield.fall();
                if self.fall_state() == FallState::Airborne {
                    // Still falling; any accumulated lock delay is void.
                    self.lock_timer_ms = 0;
                }
            }
            FallState::Grounded => {
                self.lock_timer_ms += self.fall_interval_ms;
                if self.lock_timer_ms >= self.config.lock_delay_ms {
                    self.lock_active();
                }
            }
        }
    }

    fn lock_active(&mut self) {
        let cleared = self.playfield.lock();
        self.apply_scoring(cleared);
        self.lock_timer_ms = 0;
        self.fall_timer_ms = 0;
        self.need_spawn = true;
    }

    fn apply_scoring(&mut self, cleared: usize) {
        self.score += line_clear_score(cleared);
        self.lines_total += cleared as u32;
        // The options-menu starting level is a floor, never undercut by the
        // derived level.
        self.level = self.start_level.max(level_for_lines(self.lines_total));
        self.fall_interval_ms = fall_interval_ms(self.level);
    }

    fn draw_shape(&mut self) -> ShapeId {
        self.rng.next_below(self.config.catalog.len() as u32) as ShapeId
    }

    fn spawn_column(&mut self) -> i8 {
        let w = self.config.width as u32;
        match self.config.spawn {
            // Any column that keeps the 4-wide frame on the board.
            SpawnColumn::Random => self.rng.next_below(w - 3) as i8,
            SpawnColumn::Centered => ((w - 4) / 2) as i8,
        }
    }

    fn spawn_next(&mut self) {
        let shape = self.config.catalog.shapes()[self.next_shape];
        self.next_shape = self.draw_shape();
        let col = self.spawn_column();
        if self.playfield.spawn(&shape.mask, col) {
            self.need_spawn = false;
            self.lock_timer_ms = 0;
        } else {
            // Spawn collision is the loss condition, not an error.
            self.game_over = true;
        }
    }

    /// Lock the active piece immediately (scenario/test support; gameplay
    /// locking goes through the lock-delay path in `tick`).
    #[doc(hidden)]
    pub fn force_lock(&mut self) {
        if self.playfield.board().has_active_piece() {
            self.lock_active();
        }
    }
}
