//! Terminal memory game runner.
//!
//! Uses crossterm for input and the framebuffer renderer from `tui_memory::term`.

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, error, info};

use tui_memory::cli::Cli;
use tui_memory::core::SessionSnapshot;
use tui_memory::input::{handle_key_event, should_quit};
use tui_memory::logging;
use tui_memory::shell::App;
use tui_memory::term::{
    frame_fingerprint, FrameBuffer, GameView, RenderThrottle, TerminalRenderer, Viewport,
};
use tui_memory::types::FRAME_MS;

/// Redraw an unchanged screen at least this often.
const STATIC_REFRESH_MS: u64 = 1000;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_file.as_deref(), cli.log_level)?;

    let config = cli.round_config()?;
    let seed = cli.seed();
    info!(
        cards = config.card_count(),
        secs = config.start_secs(),
        seed,
        "starting"
    );
    let app = App::new(config, seed)?;

    let mut term = TerminalRenderer::new();
    let result = term.enter().and_then(|()| run(&mut term, app));

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(e) = &result {
        error!(error = %e, "exiting with error");
    }
    result
}

fn run(term: &mut TerminalRenderer, mut app: App) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = SessionSnapshot::default();
    let mut throttle = RenderThrottle::new(STATIC_REFRESH_MS);
    let mut size = (0, 0);

    let started = Instant::now();
    let frame = Duration::from_millis(u64::from(FRAME_MS));
    let mut last_advance = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        if (w, h) != size {
            size = (w, h);
            throttle.invalidate();
        }
        app.session().snapshot_into(&mut snap);
        let now_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        if throttle.should_render(now_ms, frame_fingerprint(&snap, app.cursor(), app.overlay())) {
            view.render_into(&snap, app.cursor(), app.overlay(), Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
        }

        // Input with timeout until the next frame.
        let timeout = frame
            .checked_sub(last_advance.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!("quit requested");
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        debug!(action = action.as_str(), "key");
                        app.handle_action(action);
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                    throttle.invalidate();
                }
                _ => {}
            }
        }

        // Advance game time by whole elapsed milliseconds; the remainder carries over.
        let elapsed_ms = whole_millis(last_advance.elapsed());
        if elapsed_ms >= FRAME_MS {
            last_advance += Duration::from_millis(u64::from(elapsed_ms));
            app.advance(elapsed_ms);
        }

        if let Some(event) = app.session_mut().take_last_event() {
            debug!(?event, "round event");
        }
    }
}

/// Whole milliseconds in `d`, saturating at `u32::MAX`.
fn whole_millis(d: Duration) -> u32 {
    u32::try_from(d.as_millis()).unwrap_or(u32::MAX)
}
