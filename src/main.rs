//! Terminal Life runner (default binary).
//!
//! Owns the scheduling loop the engine deliberately does not: render the
//! current board, poll input until the next fixed tick, advance the
//! simulation, repeat. Quitting is a stop signal checked between
//! iterations; a generation is never interrupted mid-step.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_life::engine::Simulation;
use tui_life::input::{action_for_key, should_quit};
use tui_life::term::{Hud, LifeView, TerminalRenderer, Viewport};
use tui_life::types::{BOARD_HEIGHT, BOARD_WIDTH, TICK_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut sim = Simulation::new(BOARD_WIDTH, BOARD_HEIGHT, wall_clock_seed());
    let view = LifeView::default();

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        draw(term, &view, &sim)?;

        // Wait for input, but never past the next tick.
        let budget = tick_duration.saturating_sub(last_tick.elapsed());
        if event::poll(budget)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = action_for_key(key) {
                        sim.apply_action(action);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            sim.tick(TICK_MS);
        }
    }
}

fn draw(term: &mut TerminalRenderer, view: &LifeView, sim: &Simulation) -> Result<()> {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let hud = Hud {
        generation: sim.generation(),
        population: sim.board().population(),
        step_interval_ms: sim.step_interval_ms(),
        paused: sim.paused(),
        pattern: sim.pattern_name(),
    };
    let mut fb = view.render(sim.board(), &hud, Viewport::new(w, h));
    term.draw_swap(&mut fb)
}

/// Seed the run from the wall clock so every launch starts differently.
fn wall_clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
