//! Terminal runner
//!
//! Reads the seed (flag or one blocking stdin read), then runs the
//! poll/tick loop: at most one input event per tick, elapsed wall-clock time
//! fed to the state machine, and a frame drawn per tick. Raw mode is always
//! restored on the way out.

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use frametris::config::Cli;
use frametris::core::{Game, Phase};
use frametris::input::{is_force_quit, map_key_event};
use frametris::term::{FrameBuffer, GameView, TerminalRenderer};
use frametris::types::TICK_MS;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let seed = cli.resolve_seed()?;
    let mut game = Game::new(cli.session_config(), seed).with_start_level(cli.level);

    let mut term = TerminalRenderer::new();
    term.enter()?;
    let result = run(&mut term, &mut game);
    // Always try to restore terminal state.
    let _ = term.exit();

    if game.lost() {
        println!(
            "Game over - score {}, lines {}",
            game.session().score(),
            game.session().lines_total()
        );
    }
    result
}

fn run(term: &mut TerminalRenderer, game: &mut Game) -> Result<()> {
    let view = GameView::default();
    let tick_duration = Duration::from_millis(u64::from(TICK_MS));
    let mut last_tick = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let mut fb = FrameBuffer::new(w, h);
        view.render(game, &mut fb);
        term.draw(&fb)?;

        if game.phase() == Phase::Exit {
            return Ok(());
        }

        // Wait for input until the next tick; one event per tick at most.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if is_force_quit(key) {
                        return Ok(());
                    }
                    if let Some(ev) = map_key_event(key) {
                        game.handle(ev);
                    }
                }
            }
        }

        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            game.tick(elapsed.as_millis() as u32);
        }
    }
}
