//! Interactive game loop.
//!
//! One thread owns the engine. Each frame it drains finished image loads,
//! advances the clock, draws, then waits up to one frame for a key.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use tracing::{info, warn};

use pixel_guess::assets::ImageLoader;
use pixel_guess::core::{GameError, LoadRequest};
use pixel_guess::input::{handle_key_event, should_quit};
use pixel_guess::session::{self, TerminalEngine};
use pixel_guess::term::{FrameBuffer, GameView, StatusLine, TerminalRenderer, Viewport};
use pixel_guess::types::{CatalogKind, Difficulty, GameAction};
use pixel_guess::{build_engine, Config};

const FRAME_MS: u64 = 50;

pub fn play_command(
    config: &Config,
    kind: CatalogKind,
    difficulty: Difficulty,
    extended: Option<bool>,
) -> Result<()> {
    let engine = build_engine(config, kind, difficulty, extended).with_context(|| {
        format!("Failed to load the {} catalog from {}", kind.as_str(), config.assets_dir.display())
    })?;
    let loader = ImageLoader::new(&config.assets_dir).context("Failed to start image loader")?;
    let title = session::title(kind, difficulty);
    let subtitle = session::subtitle(kind, difficulty);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let mut game = Game {
        engine,
        loader,
        view: GameView::default(),
        message: None,
    };
    let result = game.run(&mut term, &title, subtitle);
    game.engine.teardown();

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

struct Game {
    engine: TerminalEngine,
    loader: ImageLoader,
    view: GameView,
    /// Last non-fatal problem worth showing the player.
    message: Option<String>,
}

enum Flow {
    Continue,
    Quit,
}

impl Game {
    fn run(
        &mut self,
        term: &mut TerminalRenderer,
        title: &str,
        subtitle: Option<&str>,
    ) -> Result<()> {
        let started = self.engine.begin_session();
        self.dispatch(started.map(Some));

        let frame = Duration::from_millis(FRAME_MS);
        let mut fb = FrameBuffer::new(0, 0);
        let mut last_tick = Instant::now();

        loop {
            while let Some(outcome) = self.loader.try_recv() {
                self.engine.complete_load(outcome.ticket, outcome.result);
            }

            // Carry sub-millisecond remainders into the next frame.
            let elapsed_ms = last_tick.elapsed().as_millis().min(u128::from(u32::MAX)) as u32;
            last_tick += Duration::from_millis(u64::from(elapsed_ms));
            let advanced = self.engine.tick(elapsed_ms);
            self.dispatch(advanced);

            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            let status = StatusLine {
                title,
                subtitle,
                message: self.message.as_deref(),
            };
            let caret =
                self.view
                    .render_into(&self.engine.snapshot(), status, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb, caret)?;

            if !event::poll(frame)? {
                continue;
            }
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        if let Flow::Quit = self.apply(action) {
                            return Ok(());
                        }
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }
    }

    fn apply(&mut self, action: GameAction) -> Flow {
        match action {
            GameAction::Type(ch) => self.engine.push_char(ch),
            GameAction::Backspace => self.engine.pop_char(),
            GameAction::ClearInput => self.engine.clear_input(),
            GameAction::FocusNext => self.engine.focus_next(),
            GameAction::FocusPrev => self.engine.focus_prev(),
            GameAction::Accept => {
                if let Some(feedback) = self.engine.accept() {
                    info!(feedback = feedback.as_str(), "guess resolved");
                }
            }
            GameAction::Skip => {
                let skipped = self.engine.skip();
                self.dispatch(skipped);
            }
            GameAction::ToggleExtended => {
                let value = !self.engine.provider().include_extended();
                if let Err(e) = self.engine.set_include_extended(value) {
                    warn!(error = %e, "preference not saved");
                    self.message = Some(e.to_string());
                }
            }
            GameAction::ToggleHistory => self.view.toggle_history(),
            GameAction::Back => return Flow::Quit,
        }
        Flow::Continue
    }

    /// Hand a new round to the loader, or surface why there is none.
    fn dispatch(&mut self, requested: Result<Option<LoadRequest>, GameError>) {
        match requested {
            Ok(Some(req)) => {
                self.message = None;
                self.loader.request(req);
            }
            Ok(None) => {}
            Err(e) => {
                warn!(error = %e, "no round started");
                self.message = Some(if e.is_empty_pool() {
                    format!("{e} (F2 to widen the pool, then Tab)")
                } else {
                    e.to_string()
                });
            }
        }
    }
}
