use super::cell::Cell;
use super::error::GameError;

/// Logical bounds of the playing field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    cols: u32,
    rows: u32,
}

impl Grid {
    /// Create a grid; both dimensions must be non-zero
    pub fn new(cols: u32, rows: u32) -> Result<Self, GameError> {
        if cols == 0 || rows == 0 {
            return Err(GameError::InvalidGrid { cols, rows });
        }
        Ok(Self { cols, rows })
    }

    /// Create a grid, raising zero dimensions to 1
    pub fn at_least_one(cols: u32, rows: u32) -> Self {
        Self {
            cols: cols.max(1),
            rows: rows.max(1),
        }
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Check if a cell is within the grid bounds
    pub fn contains(&self, cell: Cell) -> bool {
        cell.col >= 0
            && (cell.col as i64) < self.cols as i64
            && cell.row >= 0
            && (cell.row as i64) < self.rows as i64
    }

    /// Clamp each coordinate of `cell` into `[0, dim - 1]`
    pub fn clamp(&self, cell: Cell) -> Cell {
        let max_col = (self.cols - 1).min(i32::MAX as u32) as i32;
        let max_row = (self.rows - 1).min(i32::MAX as u32) as i32;
        Cell::new(cell.col.clamp(0, max_col), cell.row.clamp(0, max_row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_dimension_rejected() {
        assert_eq!(
            Grid::new(0, 5),
            Err(GameError::InvalidGrid { cols: 0, rows: 5 })
        );
        assert!(Grid::new(5, 0).is_err());
        assert!(Grid::new(1, 1).is_ok());
        assert_eq!(Grid::at_least_one(0, 3), Grid::new(1, 3).unwrap());
    }

    #[test]
    fn test_bounds_checking() {
        let grid = Grid::new(20, 10).unwrap();

        assert!(grid.contains(Cell::new(0, 0)));
        assert!(grid.contains(Cell::new(19, 9)));
        assert!(!grid.contains(Cell::new(-1, 0)));
        assert!(!grid.contains(Cell::new(20, 0)));
        assert!(!grid.contains(Cell::new(0, 10)));
    }

    #[test]
    fn test_clamp() {
        let grid = Grid::new(10, 8).unwrap();

        assert_eq!(grid.clamp(Cell::new(-3, 4)), Cell::new(0, 4));
        assert_eq!(grid.clamp(Cell::new(12, 9)), Cell::new(9, 7));
        assert_eq!(grid.clamp(Cell::new(3, 3)), Cell::new(3, 3));
    }
}
