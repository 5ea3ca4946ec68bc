//! GameView: renders each machine phase into a framebuffer
//!
//! Pure framebuffer writes, so every screen is testable without a terminal.
//! The playfield is drawn two characters per cell for a square-ish aspect.

use crossterm::style::Color;

use crate::core::{Game, GameSession, Phase};
use crate::term::fb::{CellStyle, FrameBuffer};
use crate::types::Cell;

/// Two characters per board cell.
const CELL_W: u16 = 2;

const ACTIVE_STYLE: CellStyle = CellStyle::bold(Color::Yellow);
const SETTLED_STYLE: CellStyle = CellStyle::fg(Color::Cyan);
const BORDER_STYLE: CellStyle = CellStyle::fg(Color::DarkGrey);
const TEXT_STYLE: CellStyle = CellStyle::fg(Color::Grey);
const TITLE_STYLE: CellStyle = CellStyle::bold(Color::White);

#[derive(Debug, Clone, Copy, Default)]
pub struct GameView {
    /// Top-left of the playfield border.
    pub origin: (u16, u16),
}

impl GameView {
    pub fn render(&self, game: &Game, fb: &mut FrameBuffer) {
        fb.clear();
        match game.phase() {
            Phase::Menu => self.render_menu(fb),
            Phase::Options => self.render_options(game, fb),
            Phase::Playing => self.render_playing(game.session(), fb),
            Phase::Exit => self.render_exit(game, fb),
        }
    }

    fn render_menu(&self, fb: &mut FrameBuffer) {
        let (x, y) = self.origin;
        fb.put_str(x, y, "==== T E T R I S ====", TITLE_STYLE);
        fb.put_str(x, y + 2, "[p] Play", TEXT_STYLE);
        fb.put_str(x, y + 3, "[o] Options", TEXT_STYLE);
        fb.put_str(x, y + 4, "[q] Quit", TEXT_STYLE);
        fb.put_str(x, y + 6, "Controls in-game:", TEXT_STYLE);
        fb.put_str(x, y + 7, "A/D move, W rotate,", TEXT_STYLE);
        fb.put_str(x, y + 8, "Space = soft drop (if enabled),", TEXT_STYLE);
        fb.put_str(x, y + 9, "ESC = menu", TEXT_STYLE);
    }

    fn render_options(&self, game: &Game, fb: &mut FrameBuffer) {
        let (x, y) = self.origin;
        let opts = game.options();
        fb.put_str(x, y, "==== O P T I O N S ====", TITLE_STYLE);
        fb.put_str(
            x,
            y + 2,
            &format!("Starting Level: {}  (left/right to change)", opts.start_level),
            TEXT_STYLE,
        );
        fb.put_str(
            x,
            y + 3,
            &format!(
                "Soft Drop: {}      (s to toggle)",
                if opts.soft_drop_enabled { "ON" } else { "OFF" }
            ),
            TEXT_STYLE,
        );
        fb.put_str(x, y + 5, "[b] Back", TEXT_STYLE);
    }

    fn render_playing(&self, session: &GameSession, fb: &mut FrameBuffer) {
        let (ox, oy) = self.origin;
        let board = session.board();
        let w = board.width() as u16;
        let h = board.height() as u16;

        // Border.
        for y in 0..h {
            fb.put_char(ox, oy + 1 + y, '|', BORDER_STYLE);
            fb.put_char(ox + 1 + w * CELL_W, oy + 1 + y, '|', BORDER_STYLE);
        }
        for x in 0..(w * CELL_W + 2) {
            fb.put_char(ox + x, oy, '-', BORDER_STYLE);
            fb.put_char(ox + x, oy + h + 1, '-', BORDER_STYLE);
        }

        // Cells.
        for y in 0..board.height() as i8 {
            for x in 0..board.width() as i8 {
                let (glyphs, style) = match board.get(x, y) {
                    Some(Cell::Active) => ("()", ACTIVE_STYLE),
                    Some(Cell::Settled) => ("[]", SETTLED_STYLE),
                    _ => (" .", BORDER_STYLE),
                };
                let cx = ox + 1 + x as u16 * CELL_W;
                let cy = oy + 1 + y as u16;
                fb.put_str(cx, cy, glyphs, style);
            }
        }

        // Side panel.
        let px = ox + w * CELL_W + 5;
        fb.put_str(px, oy + 1, &format!("Score: {}", session.score()), TEXT_STYLE);
        fb.put_str(px, oy + 2, &format!("Level: {}", session.level()), TEXT_STYLE);
        fb.put_str(
            px,
            oy + 3,
            &format!("Lines: {}", session.lines_total()),
            TEXT_STYLE,
        );
        fb.put_str(
            px,
            oy + 4,
            &format!("Fall (ms): {}", session.fall_interval_ms()),
            TEXT_STYLE,
        );
        fb.put_str(
            px,
            oy + 6,
            &format!("NEXT: {}", session.next_shape_name()),
            TITLE_STYLE,
        );
    }

    fn render_exit(&self, game: &Game, fb: &mut FrameBuffer) {
        let (x, y) = self.origin;
        if game.lost() {
            fb.put_str(x, y, "Game Over (blocked by settled cells)", TITLE_STYLE);
            fb.put_str(
                x,
                y + 1,
                &format!("Final score: {}", game.session().score()),
                TEXT_STYLE,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Game, SessionConfig};
    use crate::types::InputEvent;

    fn text_at(fb: &FrameBuffer, y: u16) -> String {
        (0..fb.width())
            .map(|x| fb.get(x, y).unwrap().ch)
            .collect::<String>()
            .trim_end()
            .to_string()
    }

    #[test]
    fn menu_screen_lists_commands() {
        let game = Game::new(SessionConfig::default(), 1);
        let mut fb = FrameBuffer::new(60, 20);
        GameView::default().render(&game, &mut fb);
        assert_eq!(text_at(&fb, 0), "==== T E T R I S ====");
        assert_eq!(text_at(&fb, 2), "[p] Play");
    }

    #[test]
    fn options_screen_shows_current_values() {
        let mut game = Game::new(SessionConfig::default(), 1);
        game.handle(InputEvent::OptionsMenu);
        game.handle(InputEvent::LevelUp);
        game.handle(InputEvent::ToggleSoftDrop);
        let mut fb = FrameBuffer::new(60, 20);
        GameView::default().render(&game, &mut fb);
        assert!(text_at(&fb, 2).starts_with("Starting Level: 1"));
        assert!(text_at(&fb, 3).starts_with("Soft Drop: ON"));
    }

    #[test]
    fn playing_screen_draws_the_board_and_panel() {
        let mut game = Game::new(SessionConfig::default(), 1);
        game.handle(InputEvent::Play);
        game.tick(0);
        let mut fb = FrameBuffer::new(80, 30);
        GameView::default().render(&game, &mut fb);

        // Border row across the top of the playfield.
        assert!(text_at(&fb, 0).starts_with("--"));
        // Active piece glyphs appear somewhere on the board.
        let any_active = (0..fb.height()).any(|y| text_at(&fb, y).contains("()"));
        assert!(any_active);
        assert!(text_at(&fb, 1).contains("Score: 0"));
        assert!((0..fb.height()).any(|y| text_at(&fb, y).contains("NEXT: ")));
    }
}
