//! Hardware abstraction for the memory-mapped board variant
//!
//! The embedded build of this game runs on a dev board with slide switches,
//! a push button, a pixel framebuffer and a periodic hardware timer. The core
//! never sees register addresses: the platform is injected as a [`Hal`]
//! capability and this module turns switch edges into the same
//! [`InputEvent`]s the terminal front-end produces.

use crate::core::{Board, Game, Phase};
use crate::types::{Cell, InputEvent};

/// Narrow platform interface for the board build.
pub trait Hal {
    /// Current slide-switch state, one bit per switch.
    fn read_switches(&mut self) -> u32;
    /// Push-button state (held = soft drop).
    fn read_button(&mut self) -> bool;
    /// Write one framebuffer pixel.
    fn set_pixel(&mut self, x: u16, y: u16, color: u8);
    /// Block until the periodic timer fires; returns elapsed milliseconds.
    fn wait_timer_tick(&mut self) -> u32;
}

/// Switch bits recognized by the decoder.
pub const SW_MOVE_RIGHT: u32 = 0x001;
pub const SW_MOVE_LEFT: u32 = 0x002;
pub const SW_ROTATE: u32 = 0x004;
pub const SW_ESCAPE: u32 = 0x200;

/// Cell colors in the board palette (empty, active, settled).
pub const CELL_COLORS: [u8; 3] = [1, 50, 150];

/// Pixel edge length of one board cell.
pub const BLOCK_SIZE: u16 = 8;

/// Turns switch *toggles* into input events: flipping any mapped switch,
/// in either direction, fires its event once.
#[derive(Debug, Default)]
pub struct SwitchDecoder {
    prev: u32,
}

impl SwitchDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn decode(&mut self, switches: u32) -> Option<InputEvent> {
        let changed = switches ^ self.prev;
        self.prev = switches;
        if changed & SW_MOVE_RIGHT != 0 {
            Some(InputEvent::MoveRight)
        } else if changed & SW_MOVE_LEFT != 0 {
            Some(InputEvent::MoveLeft)
        } else if changed & SW_ROTATE != 0 {
            Some(InputEvent::Rotate)
        } else if changed & SW_ESCAPE != 0 {
            Some(InputEvent::Escape)
        } else {
            None
        }
    }
}

/// Paint every board cell as a BLOCK_SIZE square at `origin`.
pub fn blit_board(hal: &mut impl Hal, board: &Board, origin: (u16, u16)) {
    for y in 0..board.height() as i8 {
        for x in 0..board.width() as i8 {
            let color = match board.get(x, y) {
                Some(Cell::Active) => CELL_COLORS[1],
                Some(Cell::Settled) => CELL_COLORS[2],
                _ => CELL_COLORS[0],
            };
            let px = origin.0 + x as u16 * BLOCK_SIZE;
            let py = origin.1 + y as u16 * BLOCK_SIZE;
            for dy in 0..BLOCK_SIZE {
                for dx in 0..BLOCK_SIZE {
                    hal.set_pixel(px + dx, py + dy, color);
                }
            }
        }
    }
}

/// Read the seed from the switches once the button is pressed.
///
/// The one-time blocking setup step before the main loop; 0 remaps inside
/// the RNG.
pub fn read_seed_from_switches(hal: &mut impl Hal) -> u32 {
    while !hal.read_button() {
        hal.wait_timer_tick();
    }
    hal.read_switches()
}

/// Main loop for the board build: one switch poll, one button poll and one
/// time delta per timer tick, until the state machine exits.
pub fn run<H: Hal>(hal: &mut H, game: &mut Game, board_origin: (u16, u16)) {
    let mut decoder = SwitchDecoder::new();
    while game.phase() != Phase::Exit {
        let elapsed_ms = hal.wait_timer_tick();

        let switches = hal.read_switches();
        if let Some(event) = decoder.decode(switches) {
            game.handle(event);
        }
        if hal.read_button() {
            game.handle(InputEvent::SoftDrop);
        }

        game.tick(elapsed_ms);
        blit_board(hal, game.session().board(), board_origin);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decoder_fires_on_either_edge() {
        let mut dec = SwitchDecoder::new();
        assert_eq!(dec.decode(0), None);
        assert_eq!(dec.decode(SW_MOVE_RIGHT), Some(InputEvent::MoveRight));
        // No change, no event.
        assert_eq!(dec.decode(SW_MOVE_RIGHT), None);
        // Flipping back fires again.
        assert_eq!(dec.decode(0), Some(InputEvent::MoveRight));
    }

    #[test]
    fn decoder_maps_all_switches() {
        let mut dec = SwitchDecoder::new();
        dec.decode(0);
        assert_eq!(dec.decode(SW_MOVE_LEFT), Some(InputEvent::MoveLeft));
        dec.decode(0);
        assert_eq!(dec.decode(SW_ROTATE), Some(InputEvent::Rotate));
        dec.decode(0);
        assert_eq!(dec.decode(SW_ESCAPE), Some(InputEvent::Escape));
    }
}
