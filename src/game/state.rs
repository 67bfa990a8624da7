use std::time::Instant;
use tracing::info;

use super::cell::Cell;
use super::grid::Grid;
use super::markers::{Marker, MarkerQueue, MarkerTag};
use super::snake::SnakeBody;

/// Complete game state, owned by the front end and mutated by the actor
#[derive(Debug, Clone, PartialEq)]
pub struct SnakeGameState {
    pub(crate) grid: Grid,
    pub(crate) snake: SnakeBody,
    pub(crate) markers: MarkerQueue,
    pub(crate) cursor: Cell,
    pub(crate) seeking: bool,
    pub(crate) paused_until: Option<Instant>,
    pub(crate) eaten: u32,
    pub(crate) multi_mode: bool,
}

impl SnakeGameState {
    /// Create a new game state with a one-segment snake at `start` (clamped into `grid`)
    pub fn new(grid: Grid, start: Cell, multi_mode: bool) -> Self {
        Self {
            grid,
            snake: SnakeBody::new(grid.clamp(start)),
            markers: MarkerQueue::new(),
            cursor: Cell::new(0, 0),
            seeking: false,
            paused_until: None,
            eaten: 0,
            multi_mode,
        }
    }

    /// Replace the snake; segments are clamped into the grid
    pub fn with_snake(mut self, mut snake: SnakeBody) -> Self {
        snake.clamp_to(&self.grid);
        self.snake = snake;
        self
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn snake(&self) -> &SnakeBody {
        &self.snake
    }

    pub fn markers(&self) -> &MarkerQueue {
        &self.markers
    }

    pub fn cursor(&self) -> Cell {
        self.cursor
    }

    pub fn eaten(&self) -> u32 {
        self.eaten
    }

    pub fn is_multi_mode(&self) -> bool {
        self.multi_mode
    }

    pub fn is_seeking(&self) -> bool {
        self.seeking
    }

    /// Whether the post-eat freeze is still running at `now`
    pub fn is_paused_at(&self, now: Instant) -> bool {
        self.paused_until.is_some_and(|until| now < until)
    }

    /// Move the cursor; the cell is clamped into the grid
    pub fn set_cursor(&mut self, cell: Cell) {
        self.cursor = self.grid.clamp(cell);
    }

    /// Place a bet at `cell` (clamped into the grid) and start seeking.
    ///
    /// Returns whether the queue changed; a duplicate in multi mode is ignored.
    pub fn place_bet(&mut self, cell: Cell, tag: MarkerTag) -> bool {
        let cell = self.grid.clamp(cell);
        let placed = self.markers.place(Marker::new(cell, tag), self.multi_mode);
        self.seeking = true;
        if placed {
            info!(col = cell.col, row = cell.row, queued = self.markers.len(), "bet placed");
        }
        placed
    }

    /// Switch between multi and single bet mode
    pub fn set_multi_mode(&mut self, multi_mode: bool) {
        self.multi_mode = multi_mode;
        self.markers.set_mode(multi_mode);
    }

    /// Flip the bet mode; returns the new mode
    pub fn toggle_mode(&mut self) -> bool {
        self.set_multi_mode(!self.multi_mode);
        info!(multi_mode = self.multi_mode, queued = self.markers.len(), "bet mode toggled");
        self.multi_mode
    }

    /// Apply new grid bounds: the snake and cursor are clamped, bets outside are dropped
    pub fn resize(&mut self, grid: Grid) {
        self.grid = grid;
        self.snake.clamp_to(&grid);
        self.cursor = grid.clamp(self.cursor);
        let dropped = self.markers.retain_within(&grid);
        info!(cols = grid.cols(), rows = grid.rows(), dropped, "grid resized");
    }
}
