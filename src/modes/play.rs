use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io::{Stderr, stderr};
use std::time::{Duration, Instant};
use tokio::time::interval;
use tracing::info;

use super::session::Session;
use crate::game::{GameConfig, Grid};
use crate::input::{InputAction, InputHandler};
use crate::render::{GridLayout, MarkerStyle, Renderer};

/// Interactive terminal front end: mouse or keyboard places bets, the snake chases them
pub struct PlayMode {
    config: GameConfig,
    session: Session,
    layout: GridLayout,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
}

impl PlayMode {
    pub fn new(config: GameConfig, style: MarkerStyle, seed: Option<u64>) -> Result<Self> {
        let grid = config.grid()?;
        let session = Session::new(&config, grid, seed, Instant::now());

        Ok(Self {
            config,
            session,
            layout: GridLayout::for_area(Rect::default()),
            renderer: Renderer::new(style),
            input_handler: InputHandler::new(),
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let size = terminal.size().context("Failed to read terminal size")?;
        self.apply_terminal_size(size.width, size.height);

        // The scheduler runs once per frame and decides itself whether to step
        let frame_interval = Duration::from_millis(16);
        let mut frame_timer = interval(frame_interval);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(&event),
                        Some(Err(e)) => return Err(e).context("Failed to read terminal event"),
                        None => self.should_quit = true,
                    }
                }

                // Step (maybe) and render
                _ = frame_timer.tick() => {
                    self.session.on_frame(Instant::now());
                    terminal.draw(|frame| {
                        self.renderer.render(frame, self.session.state(), self.session.metrics());
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        info!(
            eaten = self.session.state().eaten(),
            steps = self.session.metrics().steps,
            "session ended"
        );
        Ok(())
    }

    fn handle_event(&mut self, event: &Event) {
        let grid = self.session.state().grid();

        match self.input_handler.handle_event(event) {
            InputAction::MoveCursor(direction) => {
                let cursor = self.session.state().cursor();
                self.session
                    .on_pointer_move(cursor.moved_in_direction(direction));
            }
            InputAction::PointAt { column, row } => {
                self.session
                    .on_pointer_move(self.layout.cell_at(column, row, &grid));
            }
            InputAction::PlaceAt { column, row } if self.layout.on_board(column, row) => {
                self.session
                    .on_pointer_move(self.layout.cell_at(column, row, &grid));
                let cursor = self.session.state().cursor();
                self.session.on_place(cursor);
            }
            InputAction::PlaceAt { .. } => {}
            InputAction::PlaceAtCursor => {
                let cursor = self.session.state().cursor();
                self.session.on_place(cursor);
            }
            InputAction::ToggleMode => {
                self.session.on_toggle_mode();
            }
            InputAction::Resize { width, height } => {
                self.apply_terminal_size(width, height);
            }
            InputAction::Quit => {
                self.should_quit = true;
            }
            InputAction::None => {}
        }
    }

    fn apply_terminal_size(&mut self, width: u16, height: u16) {
        self.layout = GridLayout::for_area(Rect::new(0, 0, width, height));
        let grid = if width == 0 || height == 0 {
            // Size unknown; fall back to the configured grid
            Grid::at_least_one(self.config.grid_cols, self.config.grid_rows)
        } else {
            self.layout.grid()
        };
        self.session.on_resize(grid);
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )
        .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
