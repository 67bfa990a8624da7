use serde::{Deserialize, Serialize};

/// Unit step along a single grid axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Candidate order used when roaming
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Down,
        Direction::Up,
    ];

    /// Returns the delta (dcol, drow) for moving in this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// A cell on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub col: i32,
    pub row: i32,
}

impl Cell {
    pub fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Move cell by delta
    pub fn moved_by(&self, dcol: i32, drow: i32) -> Self {
        Self {
            col: self.col + dcol,
            row: self.row + drow,
        }
    }

    /// Move cell one step in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dcol, drow) = direction.delta();
        self.moved_by(dcol, drow)
    }

    /// One step toward `target`, resolving the column before the row.
    ///
    /// Returns `self` when already on the target.
    pub fn step_toward(&self, target: Cell) -> Self {
        if self.col != target.col {
            self.moved_by((target.col - self.col).signum(), 0)
        } else if self.row != target.row {
            self.moved_by(0, (target.row - self.row).signum())
        } else {
            *self
        }
    }
}
