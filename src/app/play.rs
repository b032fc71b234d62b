use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use log::{info, warn};
use rand::Rng;
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io::{stderr, Stderr};
use std::time::Duration;
use tokio::time::interval;

use crate::game::{GameConfig, GameEngine, Screen, TickOutcome, TICK_RATE};
use crate::input::InputHandler;
use crate::metrics::GameMetrics;
use crate::render::text::HANGUL_PROBE;
use crate::render::{Renderer, TerminalText, TextMeasure};

/// Interactive terminal front end: feeds key presses and a fixed tick into a
/// [`GameEngine`] and redraws at a steady frame rate.
pub struct PlayApp<R: Rng = rand::rngs::ThreadRng> {
    engine: GameEngine<R>,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    /// Value of `sessions_started` when metrics were last synced
    seen_sessions: u64,
    /// Last known terminal area; `None` until the first tick reads it
    viewport: Option<Rect>,
    /// Whether the board was clipped at the last check
    clipped: bool,
}

impl PlayApp {
    pub fn new(config: GameConfig) -> Self {
        Self::with_engine(GameEngine::new(config))
    }
}

impl<R: Rng> PlayApp<R> {
    pub fn with_engine(engine: GameEngine<R>) -> Self {
        let seen_sessions = engine.sessions_started();
        Self {
            engine,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            seen_sessions,
            viewport: None,
            clipped: false,
        }
    }

    pub fn engine(&self) -> &GameEngine<R> {
        &self.engine
    }

    pub fn metrics(&self) -> &GameMetrics {
        &self.metrics
    }

    pub async fn run(&mut self) -> Result<()> {
        if !TerminalText.supports(HANGUL_PROBE) {
            warn!("Terminal text measure reports no width for Hangul; Korean may not render");
        }

        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        info!("Terminal ready, entering main loop");
        let result = self.run_loop(&mut terminal).await;

        self.cleanup_terminal(&mut terminal)?;
        info!(
            "Leaving after {} games, best score {}",
            self.metrics.games_played, self.metrics.high_score
        );

        result
    }

    async fn run_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stderr>>) -> Result<()> {
        let mut event_stream = EventStream::new();
        let mut tick_timer = interval(TICK_RATE);

        // Render at 30 FPS (33ms per frame)
        let mut render_timer = interval(Duration::from_millis(33));

        loop {
            tokio::select! {
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(err)) => {
                            return Err(err).context("Failed to read terminal event");
                        }
                        None => break,
                    }
                }

                _ = tick_timer.tick() => {
                    let size = terminal.size().context("Failed to read terminal size")?;
                    self.viewport = Some(Rect::new(0, 0, size.width, size.height));
                    self.update_game();
                }

                _ = render_timer.tick() => {
                    self.metrics.update();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.engine, &self.metrics);
                    }).context("Failed to draw frame")?;
                }

                _ = tokio::signal::ctrl_c() => {
                    info!("Interrupted");
                    break;
                }
            }

            if !self.engine.is_running() {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            if let Some(command) = self
                .input_handler
                .handle_key_event(key, self.engine.screen())
            {
                self.engine.handle_command(command);
                self.sync_metrics();
            }
        }
    }

    fn update_game(&mut self) {
        if !self.board_fits() {
            self.sync_metrics();
            return;
        }

        let outcome = self.engine.tick();
        if outcome == TickOutcome::Idle {
            return;
        }

        if outcome.is_terminal() {
            if let Some(session) = self.engine.session() {
                self.metrics.on_game_over(session.mode, session.score);
            }
        }
        self.sync_metrics();
    }

    /// Start the clock for new sessions and keep it running only during play
    fn sync_metrics(&mut self) {
        let started = self.engine.sessions_started();
        if started != self.seen_sessions {
            self.seen_sessions = started;
            self.metrics.on_game_start();
        }

        let playing = self.engine.screen() == Screen::Game
            && self.engine.session().is_some_and(|session| !session.paused)
            && self.board_fits();
        self.metrics.set_paused(!playing);
    }

    /// Whether the board is fully visible; ticks hold while it is clipped
    fn board_fits(&mut self) -> bool {
        let fits = self
            .viewport
            .map_or(true, |area| self.renderer.fits(area, &self.engine));

        if fits == self.clipped {
            self.clipped = !fits;
            match self.viewport {
                Some(area) if !fits => warn!(
                    "Terminal {}x{} too small for the board, holding the game",
                    area.width, area.height
                ),
                _ => info!("Board fits the terminal again"),
            }
        }
        fits
    }

    fn cleanup_terminal(&mut self, terminal: &mut Terminal<CrosstermBackend<Stderr>>) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
