//! Input module - keyboard handling for the terminal front-end
//!
//! Letter commands mirror the menus ('p' play, 'o' options, 'q' quit,
//! 'b' back, 's' soft-drop toggle); A/D move, W rotates, space soft-drops and
//! the arrow keys adjust the starting level in the options screen.

use crate::types::InputEvent;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key press to a game command. The state machine decides what each
/// command means in the current phase; unknown keys map to nothing.
pub fn map_key_event(key: KeyEvent) -> Option<InputEvent> {
    match key.code {
        KeyCode::Char('a') | KeyCode::Char('A') => Some(InputEvent::MoveLeft),
        KeyCode::Char('d') | KeyCode::Char('D') => Some(InputEvent::MoveRight),
        KeyCode::Char('w') | KeyCode::Char('W') => Some(InputEvent::Rotate),
        KeyCode::Char(' ') => Some(InputEvent::SoftDrop),

        KeyCode::Left => Some(InputEvent::LevelDown),
        KeyCode::Right => Some(InputEvent::LevelUp),

        KeyCode::Char('p') | KeyCode::Char('P') => Some(InputEvent::Play),
        KeyCode::Char('o') | KeyCode::Char('O') => Some(InputEvent::OptionsMenu),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(InputEvent::Quit),
        KeyCode::Char('b') | KeyCode::Char('B') => Some(InputEvent::Back),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(InputEvent::ToggleSoftDrop),

        KeyCode::Esc => Some(InputEvent::Escape),
        _ => None,
    }
}

/// Ctrl-C bails out of the whole program regardless of phase.
pub fn is_force_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}
