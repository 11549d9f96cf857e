//! Terminal racer runner (default binary).
//!
//! Loads the three image assets, then takes over the terminal and drives the
//! game on a fixed timestep. It uses crossterm for input and a custom
//! framebuffer-based renderer (no ratatui widgets/layout).

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use tui_racer::assets::Assets;
use tui_racer::core::GameState;
use tui_racer::input::{handle_key_event, should_quit};
use tui_racer::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_racer::{logging, Config};

fn main() -> Result<()> {
    let config = Config::parse();
    logging::init(config.log_file.as_deref())?;

    // Fail before touching the terminal so the error stays readable.
    let assets = Assets::load(&config.asset_dir).map_err(|e| {
        log::error!("{e}");
        e
    })?;

    let seed = config.resolved_seed();
    log::info!(
        "starting: seed {seed}, tick {}ms, assets {}",
        config.tick_ms,
        config.asset_dir.display()
    );

    let mut term = TerminalRenderer::new();
    term.enter().context("failed to set up the terminal")?;

    let result = run(&mut term, &assets, &config, seed);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, assets: &Assets, config: &Config, seed: u32) -> Result<()> {
    let mut game_state = GameState::new(seed);
    let mut view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snapshot = game_state.snapshot();

    let tick_duration = Duration::from_millis(u64::from(config.tick_ms));
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game_state.snapshot_into(&mut snapshot);
        view.render_into(&snapshot, assets, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        log::info!("quit at score {}", game_state.score());
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        if game_state.apply_action(action) {
                            log::debug!("applied {}", action.as_str());
                        }
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game_state.tick();
        }
    }
}
