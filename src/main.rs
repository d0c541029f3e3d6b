//! FORAGE terminal game (default binary).
//!
//! Collect every item on the grid while dodging the adversaries chasing you.
//! Uses crossterm for raw-mode input and a framebuffer-based renderer.

use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_forage::core::GameState;
use tui_forage::input::{handle_key_event, should_quit};
use tui_forage::term::{GameView, TerminalRenderer};
use tui_forage::types::{ADVERSARY_TICKS, POLL_MS};

/// How a session ended. Both are ordinary exits (code 0).
enum Outcome {
    Quit,
    Caught { score: u32 },
}

/// Loop control after handling one polled keypress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyStep {
    /// Level advanced: redraw, then skip the rest of this iteration.
    NextLevel,
    Quit,
    /// Movement dispatched (possibly rejected): redraw.
    Moved,
    Ignored,
}

fn handle_key(state: &mut GameState, key: crossterm::event::KeyEvent) -> KeyStep {
    if state.level_won {
        // Any key moves on to the next level.
        state.advance_level();
        KeyStep::NextLevel
    } else if should_quit(key) {
        KeyStep::Quit
    } else if let Some(action) = handle_key_event(key) {
        state.apply_action(action);
        KeyStep::Moved
    } else {
        KeyStep::Ignored
    }
}

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let outcome = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();

    match outcome? {
        Outcome::Quit => {}
        Outcome::Caught { score } => println!("Final Score: {score}"),
    }
    println!("Thanks for playing FORAGE!");
    Ok(())
}

fn run(term: &mut TerminalRenderer) -> Result<Outcome> {
    let mut state = GameState::new(clock_seed());
    let view = GameView;

    term.draw(&view.render(&state))?;

    let poll_interval = Duration::from_millis(POLL_MS);
    let mut tick = 0u32;

    loop {
        // At most one pending key per poll; the rest wait for later iterations.
        if event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match handle_key(&mut state, key) {
                        KeyStep::NextLevel => {
                            term.draw(&view.render(&state))?;
                            // Adversaries on the fresh level must not move
                            // until a later iteration has polled for input.
                            continue;
                        }
                        KeyStep::Quit => return Ok(Outcome::Quit),
                        KeyStep::Moved => {
                            // Redraw even when the move was rejected;
                            // rejection is silent.
                            term.draw(&view.render(&state))?;
                        }
                        KeyStep::Ignored => {}
                    }
                }
            }
        }

        thread::sleep(poll_interval);

        tick += 1;
        if tick >= ADVERSARY_TICKS {
            tick = 0;
            if !state.level_won {
                state.advance_adversaries();
                term.draw(&view.render(&state))?;
            }
        }

        if state.game_over {
            term.draw(&view.render(&state))?;
            return Ok(Outcome::Caught { score: state.score });
        }
    }
}

/// Wall-clock seed; any u32 works, determinism only matters under test.
fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
