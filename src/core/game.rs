//! Game-state machine: Menu -> Playing -> Options -> Exit
//!
//! Driven entirely by [`InputEvent`]s and elapsed time. Front-ends render
//! whatever phase the machine is in and feed events back; nothing here
//! touches a terminal or a register.

use crate::core::{GameSession, SessionConfig};
use crate::types::{InputEvent, RotateDir, MAX_START_LEVEL};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Menu,
    Playing,
    Options,
    Exit,
}

/// Options-menu state, applied to the session when a game starts.
#[derive(Debug, Clone, Copy)]
pub struct Options {
    pub start_level: u8,
    pub soft_drop_enabled: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            start_level: 0,
            soft_drop_enabled: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Game {
    phase: Phase,
    options: Options,
    session: GameSession,
}

impl Game {
    pub fn new(config: SessionConfig, seed: u32) -> Self {
        Self {
            phase: Phase::Menu,
            options: Options::default(),
            session: GameSession::new(config, seed),
        }
    }

    /// Preset the options-menu starting level (the launch flag; still
    /// adjustable in the options screen). Clamped like the menu itself.
    pub fn with_start_level(mut self, level: u8) -> Self {
        self.options.start_level = level.min(MAX_START_LEVEL);
        self
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn options(&self) -> Options {
        self.options
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// True once a spawn collision has ended the game.
    pub fn lost(&self) -> bool {
        self.session.game_over()
    }

    /// Feed one input event through the current phase.
    pub fn handle(&mut self, event: InputEvent) {
        match self.phase {
            Phase::Menu => self.handle_menu(event),
            Phase::Options => self.handle_options(event),
            Phase::Playing => self.handle_playing(event),
            Phase::Exit => {}
        }
    }

    /// Advance gameplay time. Only meaningful while Playing; a spawn
    /// collision surfaces here and sends the machine to Exit.
    pub fn tick(&mut self, elapsed_ms: u32) {
        if self.phase != Phase::Playing {
            return;
        }
        self.session.tick(elapsed_ms);
        if self.session.game_over() {
            self.phase = Phase::Exit;
        }
    }

    fn handle_menu(&mut self, event: InputEvent) {
        match event {
            InputEvent::Play => {
                self.session.reset(u32::from(self.options.start_level));
                self.phase = Phase::Playing;
            }
            InputEvent::OptionsMenu => self.phase = Phase::Options,
            InputEvent::Quit | InputEvent::Escape => self.phase = Phase::Exit,
            _ => {}
        }
    }

    fn handle_options(&mut self, event: InputEvent) {
        match event {
            InputEvent::LevelDown => {
                self.options.start_level = self.options.start_level.saturating_sub(1);
            }
            InputEvent::LevelUp => {
                if self.options.start_level < MAX_START_LEVEL {
                    self.options.start_level += 1;
                }
            }
            InputEvent::ToggleSoftDrop => {
                self.options.soft_drop_enabled = !self.options.soft_drop_enabled;
            }
            InputEvent::Back | InputEvent::Escape => self.phase = Phase::Menu,
            _ => {}
        }
    }

    fn handle_playing(&mut self, event: InputEvent) {
        match event {
            InputEvent::MoveLeft => self.session.move_horizontal(-1),
            InputEvent::MoveRight => self.session.move_horizontal(1),
            InputEvent::Rotate => self.session.rotate(RotateDir::Right),
            InputEvent::SoftDrop => {
                if self.options.soft_drop_enabled {
                    self.session.soft_drop();
                }
            }
            // Abandons the game in progress; session state is rebuilt on the
            // next Play.
            InputEvent::Escape => self.phase = Phase::Menu,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> Game {
        Game::new(SessionConfig::default(), 1)
    }

    #[test]
    fn menu_transitions() {
        let mut g = game();
        assert_eq!(g.phase(), Phase::Menu);

        g.handle(InputEvent::OptionsMenu);
        assert_eq!(g.phase(), Phase::Options);
        g.handle(InputEvent::Back);
        assert_eq!(g.phase(), Phase::Menu);

        g.handle(InputEvent::Play);
        assert_eq!(g.phase(), Phase::Playing);
        g.handle(InputEvent::Escape);
        assert_eq!(g.phase(), Phase::Menu);

        g.handle(InputEvent::Quit);
        assert_eq!(g.phase(), Phase::Exit);
    }

    #[test]
    fn preset_start_level_reaches_the_session() {
        let mut g = Game::new(SessionConfig::default(), 1).with_start_level(5);
        assert_eq!(g.options().start_level, 5);
        g.handle(InputEvent::Play);
        assert_eq!(g.session().level(), 5);
    }

    #[test]
    fn preset_start_level_is_clamped() {
        let g = Game::new(SessionConfig::default(), 1).with_start_level(99);
        assert_eq!(g.options().start_level, MAX_START_LEVEL);
    }

    #[test]
    fn options_clamp_start_level() {
        let mut g = game();
        g.handle(InputEvent::OptionsMenu);

        g.handle(InputEvent::LevelDown);
        assert_eq!(g.options().start_level, 0);

        for _ in 0..30 {
            g.handle(InputEvent::LevelUp);
        }
        assert_eq!(g.options().start_level, MAX_START_LEVEL);
    }

    #[test]
    fn soft_drop_ignored_unless_enabled() {
        let mut g = game();
        g.handle(InputEvent::Play);
        g.tick(0);
        let y0 = g.session().frame().unwrap().y;

        g.handle(InputEvent::SoftDrop);
        assert_eq!(g.session().frame().unwrap().y, y0);

        g.handle(InputEvent::Escape);
        g.handle(InputEvent::OptionsMenu);
        g.handle(InputEvent::ToggleSoftDrop);
        g.handle(InputEvent::Back);
        g.handle(InputEvent::Play);
        g.tick(0);
        let y0 = g.session().frame().unwrap().y;
        g.handle(InputEvent::SoftDrop);
        assert_eq!(g.session().frame().unwrap().y, y0 + 1);
    }

    #[test]
    fn play_resets_abandoned_session() {
        let mut g = game();
        g.handle(InputEvent::Play);
        g.tick(0);
        g.handle(InputEvent::Escape);
        g.handle(InputEvent::Play);
        assert_eq!(g.session().score(), 0);
        assert_eq!(g.session().lines_total(), 0);
    }
}
