use super::cell::Cell;
use super::grid::Grid;

/// The snake's body, head at index 0. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnakeBody {
    cells: Vec<Cell>,
}

impl SnakeBody {
    /// Create a one-segment snake
    pub fn new(head: Cell) -> Self {
        Self { cells: vec![head] }
    }

    /// Build a body from explicit segments; `None` if `cells` is empty
    pub fn from_cells(cells: Vec<Cell>) -> Option<Self> {
        if cells.is_empty() {
            None
        } else {
            Some(Self { cells })
        }
    }

    /// Get the head cell
    pub fn head(&self) -> Cell {
        self.cells[0]
    }

    /// Get the tail cell (last segment)
    pub fn tail(&self) -> Cell {
        self.cells[self.cells.len() - 1]
    }

    /// The segment right behind the head, if any
    pub fn neck(&self) -> Option<Cell> {
        self.cells.get(1).copied()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Check if any segment, head included, sits on `cell`
    pub fn occupies(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Append a copy of the tail; it separates from the old tail on the next move
    pub fn grow(&mut self) {
        let tail = self.tail();
        self.cells.push(tail);
    }

    /// Every segment takes its predecessor's previous cell, then the head moves to `next`
    pub fn advance_to(&mut self, next: Cell) {
        self.cells.rotate_right(1);
        self.cells[0] = next;
    }

    /// Clamp every segment into `grid`
    pub fn clamp_to(&mut self, grid: &Grid) {
        for cell in &mut self.cells {
            *cell = grid.clamp(*cell);
        }
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the snake has no segments
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
